/// Index of a node in the network, in `0..m`.
pub type NodeId = usize;

/// The source is always the first node.
pub const SOURCE: NodeId = 0;

/// Search state of a single node during one breadth-first search.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Debug, Default)]
pub enum Visit {
    #[default]
    Unvisited,
    Source,
    ReachedFrom(NodeId),
}

impl Visit {
    /// `true` for the source and for every node the search discovered.
    pub fn is_reached(&self) -> bool {
        !matches!(self, Self::Unvisited)
    }

    pub fn predecessor(&self) -> Option<NodeId> {
        match self {
            Self::ReachedFrom(u) => Some(*u),
            Self::Unvisited | Self::Source => None,
        }
    }
}

impl From<NodeId> for Visit {
    fn from(predecessor: NodeId) -> Self {
        Self::ReachedFrom(predecessor)
    }
}
