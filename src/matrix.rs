use alloc::vec;
use alloc::vec::Vec;
use core::ops::Index;

use petgraph::visit::{EdgeRef, IntoEdgeReferences, NodeIndexable};

use crate::capacity::Capacity;
use crate::error::Error;
use crate::node::{NodeId, SOURCE};

/// For each node, the ascending list of nodes it has an edge to.
pub type Adjacency = Vec<Vec<NodeId>>;

/// A validated, square matrix of non-negative edge capacities.
///
/// `C[u][v]` is the capacity of the directed edge `u -> v`, zero meaning there is no edge. Node `0`
/// is the source and node `m - 1` the sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapacityMatrix<C> {
    rows: Vec<Vec<C>>,
}

impl<C: Capacity> CapacityMatrix<C> {
    pub fn new(rows: Vec<Vec<C>>) -> Result<Self, Error> {
        let m = rows.len();
        if m < 2 {
            return Err(Error::TooFewNodes(m));
        }

        for (u, row) in rows.iter().enumerate() {
            if row.len() != m {
                return Err(Error::NotSquare {
                    row: u,
                    len: row.len(),
                    expected: m,
                });
            }
            if let Some(v) = row.iter().position(|c| *c < C::zero()) {
                return Err(Error::NegativeCapacity(u, v));
            }
        }

        Ok(Self { rows })
    }

    /// Build a network of `m` nodes from `(from, to, capacity)` triples. Parallel edges are merged
    /// by adding up their capacities.
    pub fn from_edges<I>(m: usize, edges: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (NodeId, NodeId, C)>,
    {
        if m < 2 {
            return Err(Error::TooFewNodes(m));
        }

        let rows = edges
            .into_iter()
            .try_fold(vec![vec![C::zero(); m]; m], |mut acc, (u, v, c)| {
                if u >= m || v >= m {
                    return Err(Error::NodeOutOfRange(u, v, m));
                }
                if c < C::zero() {
                    return Err(Error::NegativeCapacity(u, v));
                }
                acc[u][v] = acc[u][v].checked_add(&c).ok_or(Error::Overflow)?;
                Ok(acc)
            })?;

        Ok(Self { rows })
    }

    /// Build a network from a `petgraph` graph whose edge weights are capacities.
    ///
    /// Node indices carry over unchanged, so the graph's first node is the source and its last
    /// node the sink.
    pub fn from_graph<G>(g: G) -> Result<Self, Error>
    where
        G: IntoEdgeReferences<EdgeWeight = C> + NodeIndexable,
    {
        let edges = g
            .edge_references()
            .map(|e| (g.to_index(e.source()), g.to_index(e.target()), *e.weight()));
        Self::from_edges(g.node_bound(), edges)
    }

    pub fn node_count(&self) -> usize {
        self.rows.len()
    }

    pub fn source(&self) -> NodeId {
        SOURCE
    }

    pub fn sink(&self) -> NodeId {
        self.rows.len() - 1
    }

    pub fn capacity(&self, u: NodeId, v: NodeId) -> C {
        self.rows[u][v]
    }

    pub fn rows(&self) -> &[Vec<C>] {
        &self.rows
    }

    /// The static adjacency of the network: for every node, the nodes it has a non-zero capacity
    /// edge to, in ascending order. Search order within a BFS level follows this order.
    pub fn adjacency(&self) -> Adjacency {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(_, c)| !c.is_zero())
                    .map(|(v, _)| v)
                    .collect()
            })
            .collect()
    }

    /// Sum of the capacities of all edges leaving `from` for a node outside of `from`, saturating
    /// at `C::max_value()`.
    pub fn crossing_capacity(&self, from: &[NodeId]) -> C {
        from.iter()
            .flat_map(|&u| {
                self.rows[u]
                    .iter()
                    .enumerate()
                    .filter(move |(v, _)| !from.contains(v))
                    .map(|(_, c)| *c)
            })
            .fold(C::zero(), |acc, c| {
                acc.checked_add(&c).unwrap_or_else(C::max_value)
            })
    }
}

impl<C> Index<(NodeId, NodeId)> for CapacityMatrix<C> {
    type Output = C;

    fn index(&self, (u, v): (NodeId, NodeId)) -> &Self::Output {
        &self.rows[u][v]
    }
}

/// Net flow pushed along every ordered pair of nodes.
///
/// The matrix is kept skew-symmetric: pushing `a` units along `u -> v` adds `a` to `F[u][v]` and
/// subtracts it from `F[v][u]`, so a later push along `v -> u` cancels flow instead of stacking
/// on top of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResidualMatrix<C> {
    rows: Vec<Vec<C>>,
}

impl<C: Capacity> ResidualMatrix<C> {
    pub fn zero(m: usize) -> Self {
        Self {
            rows: vec![vec![C::zero(); m]; m],
        }
    }

    /// Remaining capacity on `u -> v`, i.e. `C[u][v] - F[u][v]`.
    ///
    /// `F[u][v]` lies in `[-C[v][u], C[u][v]]`, so the difference is never negative but can exceed
    /// `C::max_value()` on an antiparallel pair; it saturates there.
    pub fn available(&self, capacities: &CapacityMatrix<C>, u: NodeId, v: NodeId) -> C {
        capacities[(u, v)]
            .checked_sub(&self.rows[u][v])
            .unwrap_or_else(C::max_value)
    }

    pub fn push(&mut self, u: NodeId, v: NodeId, amount: C) {
        self.rows[u][v] += amount;
        self.rows[v][u] -= amount;
    }

    pub fn net_flow(&self, u: NodeId, v: NodeId) -> C {
        self.rows[u][v]
    }
}

/// The flow carried by every edge of a solved network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowMatrix<C> {
    rows: Vec<Vec<C>>,
}

impl<C: Capacity> FlowMatrix<C> {
    pub fn node_count(&self) -> usize {
        self.rows.len()
    }

    pub fn flow(&self, u: NodeId, v: NodeId) -> C {
        self.rows[u][v]
    }

    pub fn rows(&self) -> &[Vec<C>] {
        &self.rows
    }

    pub fn outflow(&self, u: NodeId) -> C {
        self.rows[u].iter().copied().sum()
    }

    pub fn inflow(&self, v: NodeId) -> C {
        self.rows.iter().map(|row| row[v]).sum()
    }
}

impl<C: Capacity> From<ResidualMatrix<C>> for FlowMatrix<C> {
    // negative entries are unused reverse capacity, not flow
    fn from(residual: ResidualMatrix<C>) -> Self {
        let rows = residual
            .rows
            .into_iter()
            .map(|row| row.into_iter().map(|f| f.max(C::zero())).collect())
            .collect();
        Self { rows }
    }
}

impl<C> Index<(NodeId, NodeId)> for FlowMatrix<C> {
    type Output = C;

    fn index(&self, (u, v): (NodeId, NodeId)) -> &Self::Output {
        &self.rows[u][v]
    }
}
