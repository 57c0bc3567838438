//! Popularity Ordering
//!
//! The popularity ordering is a doubly linked list threaded *through* the
//! nodes of the map and tree backends rather than a standalone container:
//! each backend node embeds a pair of optional handles (`more_popular`,
//! `less_popular`) exposed through the [`PopNode`] trait, and the list
//! itself owns nothing but the least-popular tail handle.
//!
//! The ordering is sorted non-increasingly by hit count from the
//! most-popular head to the least-popular tail. Ties are left in the
//! order produced by the most recent promotions: promotion never moves an
//! entry past a neighbor with an equal hit count, so only the relative
//! eviction order — which is all the caches observe — is defined.
//!
//! Three operations keep the invariant:
//!
//! - [`PopularityList::link_at_tail`] — fresh entries start with one hit,
//!   which can never exceed any live neighbor's count, so they join at
//!   the least-popular end.
//! - [`PopularityList::promote`] — after a hit increment, bubble the
//!   entry toward the head one transposition at a time until it meets a
//!   neighbor with at least as many hits. O(k) in positions moved.
//! - [`PopularityList::unlink_tail`] — detach the eviction candidate and
//!   advance the tail to its more-popular neighbor.
//!
//! **Note**: This module is internal infrastructure and should not be used
//! directly by library consumers.

extern crate alloc;

use crate::arena::{Arena, NodeId};
use alloc::vec::Vec;

/// Access to the popularity links and hit count embedded in a backend node.
pub(crate) trait PopNode {
    /// Current hit count of the node's entry.
    fn hits(&self) -> u64;
    /// Handle of the next node toward the most-popular end.
    fn more_popular(&self) -> Option<NodeId>;
    /// Handle of the next node toward the least-popular end.
    fn less_popular(&self) -> Option<NodeId>;
    /// Rewrites the more-popular link.
    fn set_more_popular(&mut self, link: Option<NodeId>);
    /// Rewrites the less-popular link.
    fn set_less_popular(&mut self, link: Option<NodeId>);
}

/// The popularity ordering over one backend's live nodes.
///
/// Holds only the least-popular tail; the head is reachable by walking
/// `more_popular` links.
#[derive(Debug, Default)]
pub(crate) struct PopularityList {
    tail: Option<NodeId>,
}

impl PopularityList {
    /// Creates an empty ordering.
    pub(crate) fn new() -> Self {
        PopularityList { tail: None }
    }

    /// Handle of the current eviction candidate, if any.
    pub(crate) fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    /// Links a freshly inserted node at the least-popular end.
    pub(crate) fn link_at_tail<N: PopNode>(&mut self, nodes: &mut Arena<N>, id: NodeId) {
        nodes[id].set_more_popular(self.tail);
        nodes[id].set_less_popular(None);
        if let Some(tail) = self.tail {
            nodes[tail].set_less_popular(Some(id));
        }
        self.tail = Some(id);
    }

    /// Bubbles `id` toward the most-popular end after a hit increment.
    ///
    /// Each step transposes `id` with its more-popular neighbor while the
    /// neighbor has strictly fewer hits, rewiring the four surrounding
    /// links and keeping the tail handle current. Returns the number of
    /// positions moved.
    pub(crate) fn promote<N: PopNode>(&mut self, nodes: &mut Arena<N>, id: NodeId) -> usize {
        let mut steps = 0;
        loop {
            let Some(next) = nodes[id].more_popular() else {
                return steps;
            };
            if nodes[id].hits() <= nodes[next].hits() {
                return steps;
            }

            let above = nodes[next].more_popular();
            let below = nodes[id].less_popular();

            nodes[next].set_more_popular(Some(id));
            nodes[next].set_less_popular(below);
            nodes[id].set_more_popular(above);
            nodes[id].set_less_popular(Some(next));

            if let Some(above) = above {
                nodes[above].set_less_popular(Some(id));
            }
            if let Some(below) = below {
                nodes[below].set_more_popular(Some(next));
            }

            if self.tail == Some(id) {
                self.tail = Some(next);
            }
            steps += 1;
        }
    }

    /// Detaches the least-popular node and returns its handle.
    ///
    /// The tail advances to the more-popular neighbor and that neighbor's
    /// less-popular link is cleared so no handle survives into a slot the
    /// arena may recycle. The detached node's own links are cleared too;
    /// removing it from the arena is the caller's job.
    pub(crate) fn unlink_tail<N: PopNode>(&mut self, nodes: &mut Arena<N>) -> Option<NodeId> {
        let tail = self.tail?;
        let up = nodes[tail].more_popular();
        if let Some(up) = up {
            nodes[up].set_less_popular(None);
        }
        nodes[tail].set_more_popular(None);
        self.tail = up;
        Some(tail)
    }

    /// Handles ordered from most popular to least popular.
    pub(crate) fn ids_by_popularity<N: PopNode>(&self, nodes: &Arena<N>) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(nodes.len());
        let mut cursor = self.tail;
        while let Some(id) = cursor {
            ids.push(id);
            cursor = nodes[id].more_popular();
        }
        ids.reverse();
        ids
    }

    /// Forgets the whole ordering. Node links are left behind; callers
    /// clear the arena in the same breath.
    pub(crate) fn clear(&mut self) {
        self.tail = None;
    }
}
