use alloc::vec::Vec;
use core::fmt::Debug;

use crate::matrix::CapacityMatrix;
use crate::node::NodeId;
use crate::solution::MaxFlowSolution;

pub mod edmonds_karp;

/// A path from source to sink together with the flow it carries.
pub trait FlowPath {
    type Node;
    type Flow;
    type Iter: IntoIterator<Item = Self::Node>;

    fn nodes(&self) -> Self::Iter;
    fn flow(&self) -> Self::Flow;
}

/// A maximum flow algorithm over a capacity matrix.
pub trait MaxFlow {
    type Capacity;
    type Error: Debug;

    /// Compute the maximum flow from the first to the last node of `capacities`, returning the
    /// flow value, the minimum cut and the flow on every edge, along with the augmenting paths
    /// that were used in the order they were found.
    fn max_flow(
        &mut self,
        capacities: &CapacityMatrix<Self::Capacity>,
    ) -> Result<MaxFlowSolution<Self::Capacity>, Self::Error>;
}

/// A source-to-sink path found by one augmentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AugmentingPath<C> {
    nodes: Vec<NodeId>,
    flow: C,
}

impl<C> AugmentingPath<C> {
    pub(crate) fn new(nodes: Vec<NodeId>, flow: C) -> Self {
        Self { nodes, flow }
    }
}

impl<C: Copy> FlowPath for AugmentingPath<C> {
    type Node = NodeId;
    type Flow = C;
    type Iter = Vec<NodeId>;

    fn nodes(&self) -> Self::Iter {
        self.nodes.clone()
    }

    fn flow(&self) -> Self::Flow {
        self.flow
    }
}
