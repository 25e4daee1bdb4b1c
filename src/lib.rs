#![no_std]
#![deny(
    warnings,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

//! Maximum flow and minimum cut of a directed network given as a capacity matrix, computed with
//! the Edmonds-Karp method (Ford-Fulkerson with shortest augmenting paths).
//!
//! Node `0` is the source and node `m - 1` the sink.
//!
//! ```
//! use edmonds_karp::{parse_network, run};
//!
//! let network = parse_network::<i64>("4\n0 3 2 0\n0 0 0 2\n0 0 0 3\n0 0 0 0\n").unwrap();
//! let solution = run(&network).unwrap();
//!
//! assert_eq!(solution.total_flow(), 4);
//! assert_eq!(solution.cut(), &[0, 1]);
//! assert_eq!(solution.flow().flow(0, 2), 2);
//! ```

extern crate alloc;

pub mod algo;
mod capacity;
mod error;
mod matrix;
mod node;
mod parse;
mod solution;

pub use crate::algo::edmonds_karp::{edmonds_karp, EdmondsKarp};
pub use crate::algo::{AugmentingPath, FlowPath, MaxFlow};
pub use crate::capacity::Capacity;
pub use crate::error::Error;
pub use crate::matrix::{Adjacency, CapacityMatrix, FlowMatrix, ResidualMatrix};
pub use crate::node::{NodeId, Visit, SOURCE};
pub use crate::parse::parse_network;
pub use crate::solution::{FlowEdge, MaxFlowSolution};

/// Run the max-flow computation over `capacities` and verify the result before handing it back.
pub fn run<C: Capacity>(capacities: &CapacityMatrix<C>) -> Result<MaxFlowSolution<C>, Error> {
    let solution = EdmondsKarp::<C>::new().max_flow(capacities)?;

    log::info!("----------------------------------");
    log::info!("     Max flow = {}", solution.total_flow());
    log::info!("          Cut = {:?}", solution.cut());
    log::info!("        Steps = {}", solution.steps());

    solution.check(capacities)?;
    Ok(solution)
}
