use crate::{NodeId, SimConfiguration};

/// The interference model: who can sense whom.
///
/// Nodes sit in a row and node `j` is visible to node `i` iff
/// `|i - j| <= range` and `j != i`. Visibility only depends on index
/// distance, so it is symmetric by construction, carries no mutable state,
/// and is computed on demand.
///
/// The hidden-node geometry follows directly: with `range = 1`, nodes `0`
/// and `2` cannot sense each other yet are both visible to node `1`.
///
/// # Example
///
/// ```
/// use macsim_core::{NodeId, SimConfiguration, Visibility};
///
/// let visibility = Visibility::new(&SimConfiguration::default()); // 6 nodes, range 1
/// assert!(visibility.contains(NodeId::new(0), NodeId::new(1)));
/// assert!(!visibility.contains(NodeId::new(0), NodeId::new(2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    num_nodes: usize,
    range: usize,
}

impl Visibility {
    /// Build the visibility model for a configuration's row of nodes.
    pub fn new(config: &SimConfiguration) -> Self {
        Self {
            num_nodes: config.num_nodes,
            range: config.visibility_range,
        }
    }

    /// Returns `true` if `a` and `b` are distinct nodes within sensing
    /// range of each other.
    #[inline]
    pub fn contains(&self, a: NodeId, b: NodeId) -> bool {
        a != b && a.distance(b) <= self.range
    }

    /// Iterate over every node visible from `node`, in index order.
    ///
    /// Callers must treat the result as an unordered set; the index order
    /// is an implementation detail.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let first = node.index().saturating_sub(self.range);
        let last = usize::min(node.index() + self.range, self.num_nodes - 1);
        (first..=last).map(NodeId::new).filter(move |j| *j != node)
    }

    /// The fixed ring receiver of `node`: its immediate successor, wrapping
    /// around the end of the row.
    ///
    /// The MACA engine senses around this node instead of the sender.
    #[inline]
    pub fn receiver_of(&self, node: NodeId) -> NodeId {
        NodeId::new((node.index() + 1) % self.num_nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visibility(num_nodes: usize, range: usize) -> Visibility {
        Visibility::new(&SimConfiguration {
            num_nodes,
            visibility_range: range,
            ..SimConfiguration::default()
        })
    }

    #[test]
    fn never_contains_self() {
        let vis = visibility(6, 3);
        for i in 0..6 {
            assert!(!vis.contains(NodeId::new(i), NodeId::new(i)));
        }
    }

    #[test]
    fn symmetric_for_all_pairs() {
        let vis = visibility(8, 2);
        for i in 0..8 {
            for j in 0..8 {
                assert_eq!(
                    vis.contains(NodeId::new(i), NodeId::new(j)),
                    vis.contains(NodeId::new(j), NodeId::new(i)),
                    "asymmetric visibility between {i} and {j}"
                );
            }
        }
    }

    #[test]
    fn neighbors_clip_at_the_row_ends() {
        let vis = visibility(6, 1);
        let of = |i| -> Vec<usize> {
            vis.neighbors(NodeId::new(i))
                .map(|id| id.index())
                .collect()
        };
        assert_eq!(of(0), vec![1]);
        assert_eq!(of(3), vec![2, 4]);
        assert_eq!(of(5), vec![4]);
    }

    #[test]
    fn neighbors_agree_with_contains() {
        let vis = visibility(7, 2);
        for i in 0..7 {
            let node = NodeId::new(i);
            for j in 0..7 {
                let other = NodeId::new(j);
                assert_eq!(
                    vis.neighbors(node).any(|n| n == other),
                    vis.contains(node, other),
                );
            }
        }
    }

    #[test]
    fn zero_range_means_deaf() {
        let vis = visibility(4, 0);
        for i in 0..4 {
            assert_eq!(vis.neighbors(NodeId::new(i)).count(), 0);
        }
    }

    #[test]
    fn ring_receiver_wraps() {
        let vis = visibility(6, 1);
        assert_eq!(vis.receiver_of(NodeId::new(0)), NodeId::new(1));
        assert_eq!(vis.receiver_of(NodeId::new(5)), NodeId::new(0));
    }
}
