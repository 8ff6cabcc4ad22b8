use anyhow::anyhow;
use std::{fmt, str};

/// The identifier of a node on the shared medium.
///
/// Nodes are laid out in a row and identified by their index in
/// `[0, num_nodes)`; interference is defined purely in terms of index
/// distance, see [`Visibility`].
///
/// [`Visibility`]: crate::Visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(C)]
pub struct NodeId(usize);

impl NodeId {
    pub const ZERO: Self = NodeId::new(0);

    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The row index of this node.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }

    /// The absolute index distance between two nodes.
    #[inline(always)]
    pub const fn distance(self, other: Self) -> usize {
        self.0.abs_diff(other.0)
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl str::FromStr for NodeId {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self).map_err(|error| anyhow!("{error}"))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print() {
        assert_eq!(format!("{}", NodeId(42)), "42");
    }

    #[test]
    fn parse() {
        assert_eq!("42".parse::<NodeId>().unwrap(), NodeId(42));
        assert!("-1".parse::<NodeId>().is_err());
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(NodeId(2).distance(NodeId(5)), 3);
        assert_eq!(NodeId(5).distance(NodeId(2)), 3);
        assert_eq!(NodeId(4).distance(NodeId(4)), 0);
    }
}
