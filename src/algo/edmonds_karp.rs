use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::min;
use core::marker::PhantomData;

use crate::algo::{AugmentingPath, MaxFlow};
use crate::capacity::Capacity;
use crate::error::Error;
use crate::matrix::{Adjacency, CapacityMatrix, FlowMatrix, ResidualMatrix};
use crate::node::{NodeId, Visit};
use crate::solution::MaxFlowSolution;

/// Ford-Fulkerson with shortest augmenting paths, found by breadth-first search.
#[derive(Clone, Debug, Default)]
pub struct EdmondsKarp<C>(PhantomData<C>);

impl<C> EdmondsKarp<C> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<C: Capacity> MaxFlow for EdmondsKarp<C> {
    type Capacity = C;
    type Error = Error;

    fn max_flow(
        &mut self,
        capacities: &CapacityMatrix<Self::Capacity>,
    ) -> Result<MaxFlowSolution<Self::Capacity>, Self::Error> {
        edmonds_karp(capacities)
    }
}

/// Per-node state of a single breadth-first search.
struct Search<C> {
    visits: Vec<Visit>,
    // minimum residual capacity along the discovered path to each node
    bottleneck: Vec<C>,
}

impl<C: Capacity> Search<C> {
    fn new(m: usize, source: NodeId) -> Self {
        let mut visits = vec![Visit::Unvisited; m];
        let mut bottleneck = vec![C::zero(); m];
        visits[source] = Visit::Source;
        bottleneck[source] = C::max_value();
        Self { visits, bottleneck }
    }

    /// Run the search and return the bottleneck of the first path found to `sink`, or zero if
    /// `sink` cannot be reached through edges with positive residual capacity.
    ///
    /// Stops as soon as the sink is discovered; BFS order guarantees the path has the fewest
    /// edges. Ties within a level are broken by adjacency order.
    fn run(
        &mut self,
        adjacency: &Adjacency,
        capacities: &CapacityMatrix<C>,
        residual: &ResidualMatrix<C>,
        source: NodeId,
        sink: NodeId,
    ) -> C {
        let mut queue = VecDeque::from([source]);

        while let Some(u) = queue.pop_front() {
            for &v in &adjacency[u] {
                let available = residual.available(capacities, u, v);
                if available > C::zero() && !self.visits[v].is_reached() {
                    self.visits[v] = Visit::ReachedFrom(u);
                    self.bottleneck[v] = min(self.bottleneck[u], available);
                    if v == sink {
                        return self.bottleneck[sink];
                    }
                    queue.push_back(v);
                }
            }
        }

        C::zero()
    }

    /// The discovered path from source to `sink`, following predecessors backwards.
    fn path_to(&self, sink: NodeId) -> Vec<NodeId> {
        let mut nodes = vec![sink];
        let mut v = sink;
        while let Some(u) = self.visits[v].predecessor() {
            nodes.push(u);
            v = u;
        }
        nodes.reverse();
        nodes
    }

    /// Nodes reached by the search, the source included, in ascending order.
    fn reached(&self) -> Vec<NodeId> {
        self.visits
            .iter()
            .enumerate()
            .filter_map(|(v, visit)| visit.is_reached().then_some(v))
            .collect()
    }
}

/// Computes a max flow from the first to the last node of `capacities` with the Edmonds-Karp
/// method.
///
/// The minimum cut is the set of nodes reachable from the source in the residual network once no
/// augmenting path is left, i.e. the nodes reached by the final (failed) search. `steps` counts
/// every search, the final one included, so a network whose sink is unreachable reports one step.
///
/// Returns an error if the total flow overflows `C`.
pub fn edmonds_karp<C: Capacity>(
    capacities: &CapacityMatrix<C>,
) -> Result<MaxFlowSolution<C>, Error> {
    let m = capacities.node_count();
    let (source, sink) = (capacities.source(), capacities.sink());
    let adjacency = capacities.adjacency();

    let mut residual = ResidualMatrix::zero(m);
    let mut total_flow = C::zero();
    let mut paths = Vec::new();
    let mut steps = 0;

    let last_search = loop {
        steps += 1;

        let mut search = Search::new(m, source);
        let path_flow = search.run(&adjacency, capacities, &residual, source, sink);
        if path_flow.is_zero() {
            break search;
        }

        total_flow = total_flow
            .checked_add(&path_flow)
            .ok_or(Error::Overflow)?;

        let nodes = search.path_to(sink);
        nodes.windows(2).for_each(|w| residual.push(w[0], w[1], path_flow));

        log::trace!("augmenting {path_flow} along {nodes:?}");
        paths.push(AugmentingPath::new(nodes, path_flow));
    };

    let cut = last_search.reached();
    log::debug!("total flow {total_flow} after {steps} steps, cut {cut:?}");

    Ok(MaxFlowSolution::new(
        total_flow,
        steps,
        cut,
        FlowMatrix::from(residual),
        paths,
    ))
}
