use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::algo::{AugmentingPath, FlowPath};
use crate::capacity::Capacity;
use crate::error::Error;
use crate::matrix::{CapacityMatrix, FlowMatrix};
use crate::node::NodeId;

/// The result of a max-flow computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaxFlowSolution<C> {
    total_flow: C,
    steps: usize,
    cut: Vec<NodeId>,
    flow: FlowMatrix<C>,
    paths: Vec<AugmentingPath<C>>,
}

/// A single edge of the flow matrix carrying positive flow.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct FlowEdge<C> {
    pub from: NodeId,
    pub to: NodeId,
    pub flow: C,
}

impl<C: Capacity> MaxFlowSolution<C> {
    pub(crate) fn new(
        total_flow: C,
        steps: usize,
        cut: Vec<NodeId>,
        flow: FlowMatrix<C>,
        paths: Vec<AugmentingPath<C>>,
    ) -> Self {
        Self {
            total_flow,
            steps,
            cut,
            flow,
            paths,
        }
    }

    pub fn total_flow(&self) -> C {
        self.total_flow
    }

    /// Number of searches run, including the last one that found no augmenting path.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of augmenting paths used, i.e. `steps() - 1`.
    pub fn augmentations(&self) -> usize {
        self.paths.len()
    }

    /// Nodes on the source side of the minimum cut, in ascending order.
    pub fn cut(&self) -> &[NodeId] {
        &self.cut
    }

    pub fn flow(&self) -> &FlowMatrix<C> {
        &self.flow
    }

    pub fn paths(&self) -> &[AugmentingPath<C>] {
        &self.paths
    }

    pub fn cut_capacity(&self, capacities: &CapacityMatrix<C>) -> C {
        capacities.crossing_capacity(&self.cut)
    }

    pub fn flow_edges(&self) -> impl Iterator<Item = FlowEdge<C>> + '_ {
        self.flow.rows().iter().enumerate().flat_map(|(u, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, f)| **f > C::zero())
                .map(move |(v, f)| FlowEdge {
                    from: u,
                    to: v,
                    flow: *f,
                })
        })
    }

    /// Verify the solution against the network it was computed for.
    ///
    /// Checks that every edge stays within its capacity, flow is conserved at every node except
    /// source and sink, the source emits exactly the total flow, every edge leaving the cut is
    /// saturated, the net flow over the cut is the total flow, and the augmenting paths add up to
    /// the total flow.
    pub fn check(&self, capacities: &CapacityMatrix<C>) -> Result<(), Error> {
        let m = capacities.node_count();
        let (source, sink) = (capacities.source(), capacities.sink());
        let fail = |msg: String| Err(Error::CheckFailed(msg));

        if self.flow.node_count() != m {
            return fail(format!(
                "flow matrix has {} nodes, network has {m}",
                self.flow.node_count()
            ));
        }

        for (u, v) in (0..m).cartesian_product(0..m) {
            let f = self.flow[(u, v)];
            if f < C::zero() || f > capacities[(u, v)] {
                return fail(format!(
                    "flow {f} on {u} -> {v} exceeds capacity {}",
                    capacities[(u, v)]
                ));
            }
        }

        if let Some(v) = (0..m)
            .filter(|v| *v != source && *v != sink)
            .find(|v| self.flow.inflow(*v) != self.flow.outflow(*v))
        {
            return fail(format!("flow is not conserved at node {v}"));
        }

        let net_out = self.flow.outflow(source) - self.flow.inflow(source);
        if net_out != self.total_flow {
            return fail(format!(
                "source emits {net_out}, expected {}",
                self.total_flow
            ));
        }

        if !self.cut.contains(&source) || self.cut.contains(&sink) {
            return fail(format!("cut {:?} does not separate source and sink", self.cut));
        }

        let on_cut_side = |v: &NodeId| self.cut.contains(v);
        let mut crossing = C::zero();
        for (u, v) in self.cut.iter().cartesian_product(0..m) {
            if on_cut_side(&v) {
                continue;
            }
            if self.flow[(*u, v)] != capacities[(*u, v)] {
                return fail(format!("edge {u} -> {v} leaves the cut but is not saturated"));
            }
            crossing += self.flow[(*u, v)] - self.flow[(v, *u)];
        }
        if crossing != self.total_flow {
            return fail(format!(
                "net flow over the cut is {crossing}, expected {}",
                self.total_flow
            ));
        }

        if self.paths.iter().any(|p| p.flow() <= C::zero()) {
            return fail("augmenting path with non-positive flow".into());
        }
        let path_total: C = self.paths.iter().map(FlowPath::flow).sum();
        if path_total != self.total_flow {
            return fail(format!(
                "augmenting paths carry {path_total}, expected {}",
                self.total_flow
            ));
        }

        log::debug!("   num of nodes: {m}");
        log::debug!("     total flow: {}", self.total_flow);
        log::debug!("   cut capacity: {}", self.cut_capacity(capacities));
        log::debug!("          steps: {}", self.steps);

        Ok(())
    }
}

/// Renders the solution as
///
/// ```text
/// Max Flow: 4
/// Cut: 0 1
/// Steps: 3
/// 0 2 2 0
/// ...
/// ```
///
/// with one line per row of the flow matrix.
impl<C: Capacity> fmt::Display for MaxFlowSolution<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Max Flow: {}", self.total_flow)?;
        writeln!(f, "Cut: {}", self.cut.iter().join(" "))?;
        writeln!(f, "Steps: {}", self.steps)?;
        for row in self.flow.rows() {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}
