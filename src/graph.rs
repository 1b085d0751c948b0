//! Weighted undirected graphs and the minimum-cut engines that run on them.
//!
//! A [`Graph`] is a symmetric weight matrix over vertices `0..size()`, where a
//! zero entry means "no edge". Two engines compute the global minimum cut:
//!
//! - [`stoer_wagner`] - exact, deterministic, O(V^3) with a linear scan or
//!   O(V^2 log V) selection work with a lazy-deletion priority queue.
//! - [`karger`] - randomized contraction over an edge list and a
//!   [`UnionFind`], repeated for a caller-chosen number of trials.
//!
//! # Examples
//! ```
//! use mincut::graph::{karger, stoer_wagner, Graph};
//!
//! // 4-cycle with unit weights
//! let graph = Graph::from_edges(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1)]).unwrap();
//! assert_eq!(stoer_wagner::minimum_cut(&graph).unwrap(), 2);
//! assert!(karger::estimate_min_cut(&graph, 50).unwrap() >= 2);
//! ```

pub mod karger;
pub mod stoer_wagner;
pub mod union_find;

pub use karger::{estimate_min_cut, Contraction, Karger, KargerConfig};
pub use stoer_wagner::{minimum_cut, minimum_cut_pq, Selection, StoerWagner};
pub use union_find::UnionFind;

use std::collections::{TryReserveError, VecDeque};
use std::mem;

use crate::error::{GraphError, Result};

/// Edge weight. Unsigned, so negative weights are unrepresentable.
pub type Weight = u64;

/// Largest vertex count [`Graph::try_new`] accepts. The dense matrix for this
/// many vertices already takes 8 GiB.
pub const MAX_VERTICES: usize = 1 << 15;

/// An undirected weighted edge with `u < v`, as produced by [`Graph::edges`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
    pub weight: Weight,
}

/// How repeated `(src, dst)` pairs are combined when building a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateEdges {
    /// The last weight written wins.
    #[default]
    Overwrite,
    /// Weights of repeated pairs are summed.
    Sum,
}

/// Undirected weighted graph backed by a symmetric adjacency matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    matrix: Vec<Vec<Weight>>,
    // Sum of W[i][j] over i < j. Every cut value is bounded by it.
    total: Weight,
}

impl Graph {
    /// Creates a graph with `n` vertices and no edges.
    ///
    /// # Panics
    /// If the `n * n` matrix cannot be allocated. Use [`Graph::try_new`] for
    /// sizes that come from untrusted input.
    pub fn new(n: usize) -> Self {
        Self {
            matrix: vec![vec![0; n]; n],
            total: 0,
        }
    }

    /// Creates a graph with `n` vertices and no edges, failing instead of
    /// aborting when the matrix is too large.
    ///
    /// # Errors
    /// * `InvalidInput` if `n` exceeds [`MAX_VERTICES`] or the matrix cannot be allocated
    pub fn try_new(n: usize) -> Result<Self> {
        let bytes = n
            .checked_mul(n)
            .and_then(|cells| cells.checked_mul(mem::size_of::<Weight>()));
        if n > MAX_VERTICES || bytes.is_none() {
            return Err(GraphError::invalid_input(format!(
                "{n} vertices exceeds the limit of {MAX_VERTICES}"
            )));
        }

        let no_memory = |_: TryReserveError| {
            GraphError::invalid_input(format!("cannot allocate a matrix for {n} vertices"))
        };
        let mut matrix = Vec::new();
        matrix.try_reserve_exact(n).map_err(no_memory)?;
        for _ in 0..n {
            let mut row = Vec::new();
            row.try_reserve_exact(n).map_err(no_memory)?;
            row.resize(n, 0);
            matrix.push(row);
        }
        Ok(Self { matrix, total: 0 })
    }

    /// Builds a graph from `(src, dst, weight)` triples. Repeated pairs overwrite.
    ///
    /// # Errors
    /// * `InvalidInput` for endpoints not below `n`, self-loops, an oversized
    ///   `n`, or if the total weight overflows
    pub fn from_edges(n: usize, edges: &[(usize, usize, Weight)]) -> Result<Self> {
        Self::from_edges_with(n, edges, DuplicateEdges::Overwrite)
    }

    /// Builds a graph from `(src, dst, weight)` triples using the given duplicate policy.
    pub fn from_edges_with(
        n: usize,
        edges: &[(usize, usize, Weight)],
        duplicates: DuplicateEdges,
    ) -> Result<Self> {
        let mut graph = Self::try_new(n)?;
        for &(u, v, w) in edges {
            if u >= n || v >= n {
                return Err(GraphError::invalid_input(format!(
                    "edge ({u}, {v}) references a vertex outside 0..{n}"
                )));
            }
            match duplicates {
                DuplicateEdges::Overwrite => graph.set_edge(u, v, w)?,
                DuplicateEdges::Sum => graph.add_weight(u, v, w)?,
            }
        }
        Ok(graph)
    }

    /// Current number of vertices.
    pub fn size(&self) -> usize {
        self.matrix.len()
    }

    /// Symmetric weight lookup. Zero means no edge.
    pub fn weight(&self, i: usize, j: usize) -> Result<Weight> {
        self.check_vertex(i)?;
        self.check_vertex(j)?;
        Ok(self.matrix[i][j])
    }

    /// Sets the weight of edge `{u, v}`, replacing any previous weight.
    pub fn set_edge(&mut self, u: usize, v: usize, weight: Weight) -> Result<()> {
        self.check_endpoints(u, v)?;
        let old = self.matrix[u][v];
        self.total = (self.total - old)
            .checked_add(weight)
            .ok_or_else(|| GraphError::invalid_input("total edge weight overflows u64"))?;
        self.matrix[u][v] = weight;
        self.matrix[v][u] = weight;
        Ok(())
    }

    /// Adds `weight` to edge `{u, v}`, creating it if absent.
    pub fn add_weight(&mut self, u: usize, v: usize, weight: Weight) -> Result<()> {
        self.check_endpoints(u, v)?;
        self.total = self
            .total
            .checked_add(weight)
            .ok_or_else(|| GraphError::invalid_input("total edge weight overflows u64"))?;
        self.matrix[u][v] += weight;
        self.matrix[v][u] = self.matrix[u][v];
        Ok(())
    }

    /// Merges vertex `v` into `u`.
    ///
    /// Every edge `{v, k}` is folded into `{u, k}`, the `{u, v}` edge is dropped
    /// as a self-loop, and `v` is removed so that every vertex above `v` shifts
    /// down by one index. Total weight incident to the merged pair (excluding
    /// the dropped self-loop) is conserved.
    ///
    /// # Errors
    /// * `OutOfRange` if either vertex does not exist
    /// * `InvalidInput` if `u == v`
    pub fn contract(&mut self, u: usize, v: usize) -> Result<()> {
        self.check_endpoints(u, v)?;
        let n = self.size();
        let self_loop = self.matrix[u][v];
        for k in 0..n {
            if k == u || k == v {
                continue;
            }
            let w = self.matrix[v][k];
            self.matrix[u][k] += w;
            self.matrix[k][u] = self.matrix[u][k];
        }
        self.matrix.remove(v);
        for row in &mut self.matrix {
            row.remove(v);
        }
        self.total -= self_loop;
        Ok(())
    }

    /// Sum of the weights of all edges incident to `v`.
    pub fn degree_weight(&self, v: usize) -> Result<Weight> {
        self.check_vertex(v)?;
        Ok(self.matrix[v].iter().sum())
    }

    /// Sum of all edge weights.
    pub fn total_weight(&self) -> Weight {
        self.total
    }

    /// Number of vertex pairs with a non-zero weight.
    pub fn edge_count(&self) -> usize {
        self.matrix
            .iter()
            .enumerate()
            .map(|(u, row)| row[u + 1..].iter().filter(|&&w| w > 0).count())
            .sum()
    }

    /// Edge list view in row-major order: `u < v` and `weight > 0`.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for (u, row) in self.matrix.iter().enumerate() {
            for (v, &weight) in row.iter().enumerate().skip(u + 1) {
                if weight > 0 {
                    edges.push(Edge { u, v, weight });
                }
            }
        }
        edges
    }

    /// Connected components, each sorted, ordered by their smallest vertex.
    pub fn components(&self) -> Vec<Vec<usize>> {
        let n = self.size();
        let mut seen = vec![false; n];
        let mut components = Vec::new();
        let mut queue = VecDeque::new();

        for start in 0..n {
            if seen[start] {
                continue;
            }
            seen[start] = true;
            queue.push_back(start);
            let mut component = Vec::new();
            while let Some(u) = queue.pop_front() {
                component.push(u);
                for (v, &w) in self.matrix[u].iter().enumerate() {
                    if w > 0 && !seen[v] {
                        seen[v] = true;
                        queue.push_back(v);
                    }
                }
            }
            component.sort_unstable();
            components.push(component);
        }
        components
    }

    /// Returns `true` if every vertex is reachable from every other.
    /// Graphs with fewer than two vertices are trivially connected.
    pub fn is_connected(&self) -> bool {
        self.components().len() <= 1
    }

    pub(crate) fn row(&self, i: usize) -> &[Weight] {
        &self.matrix[i]
    }

    fn check_vertex(&self, i: usize) -> Result<()> {
        if i < self.size() {
            Ok(())
        } else {
            Err(GraphError::out_of_range(i, self.size()))
        }
    }

    fn check_endpoints(&self, u: usize, v: usize) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(GraphError::invalid_input(format!(
                "self-loop on vertex {u} is not allowed"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incident_outside(graph: &Graph, a: usize, b: usize) -> Weight {
        (0..graph.size())
            .filter(|&k| k != a && k != b)
            .map(|k| graph.weight(a, k).unwrap() + graph.weight(b, k).unwrap())
            .sum()
    }

    #[test]
    fn test_weight_is_symmetric() {
        let graph = Graph::from_edges(3, &[(0, 1, 4), (2, 1, 9)]).unwrap();
        assert_eq!(graph.weight(0, 1).unwrap(), 4);
        assert_eq!(graph.weight(1, 0).unwrap(), 4);
        assert_eq!(graph.weight(1, 2).unwrap(), 9);
        assert_eq!(graph.weight(0, 2).unwrap(), 0);
        assert_eq!(graph.weight(1, 1).unwrap(), 0);
    }

    #[test]
    fn test_weight_out_of_range() {
        let graph = Graph::new(2);
        assert_eq!(
            graph.weight(0, 2),
            Err(GraphError::OutOfRange { index: 2, size: 2 })
        );
    }

    #[test]
    fn test_rejects_self_loops_and_bad_vertices() {
        assert!(matches!(
            Graph::from_edges(3, &[(1, 1, 2)]),
            Err(GraphError::InvalidInput(_))
        ));
        assert_eq!(
            Graph::from_edges(3, &[(0, 3, 2)]),
            Err(GraphError::invalid_input(
                "edge (0, 3) references a vertex outside 0..3"
            ))
        );
        // Accessors still report index misuse as OutOfRange.
        let mut graph = Graph::new(3);
        assert_eq!(
            graph.set_edge(0, 3, 2),
            Err(GraphError::OutOfRange { index: 3, size: 3 })
        );
    }

    #[test]
    fn test_try_new_rejects_oversized_matrix() {
        let graph = Graph::try_new(3).unwrap();
        assert_eq!(graph, Graph::new(3));
        assert_eq!(Graph::try_new(0).unwrap().size(), 0);

        for n in [MAX_VERTICES + 1, 1_000_000, 1 << 62, usize::MAX] {
            assert!(matches!(
                Graph::try_new(n),
                Err(GraphError::InvalidInput(_))
            ));
        }
        assert!(matches!(
            Graph::from_edges(usize::MAX, &[(0, 1, 1)]),
            Err(GraphError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_duplicate_policies() {
        let edges = [(0, 1, 3), (1, 0, 5)];
        let overwrite = Graph::from_edges_with(2, &edges, DuplicateEdges::Overwrite).unwrap();
        let summed = Graph::from_edges_with(2, &edges, DuplicateEdges::Sum).unwrap();
        assert_eq!(overwrite.weight(0, 1).unwrap(), 5);
        assert_eq!(overwrite.total_weight(), 5);
        assert_eq!(summed.weight(0, 1).unwrap(), 8);
        assert_eq!(summed.total_weight(), 8);
    }

    #[test]
    fn test_total_weight_overflow_is_rejected() {
        let mut graph = Graph::new(3);
        graph.set_edge(0, 1, Weight::MAX).unwrap();
        assert!(matches!(
            graph.set_edge(1, 2, 1),
            Err(GraphError::InvalidInput(_))
        ));
        // Replacing the heavy edge frees the budget again.
        graph.set_edge(0, 1, 1).unwrap();
        graph.set_edge(1, 2, 1).unwrap();
        assert_eq!(graph.total_weight(), 2);
    }

    #[test]
    fn test_contract_merges_and_reindexes() {
        let mut graph =
            Graph::from_edges(4, &[(0, 1, 2), (1, 2, 3), (0, 3, 5), (2, 3, 1), (3, 1, 4)])
                .unwrap();
        graph.contract(0, 1).unwrap();

        assert_eq!(graph.size(), 3);
        // old vertex 2 is now 1, old vertex 3 is now 2
        assert_eq!(graph.weight(0, 1).unwrap(), 3);
        assert_eq!(graph.weight(0, 2).unwrap(), 9);
        assert_eq!(graph.weight(1, 2).unwrap(), 1);
        assert_eq!(graph.weight(0, 0).unwrap(), 0);
        assert_eq!(graph.total_weight(), 13);
    }

    #[test]
    fn test_contract_conserves_incident_weight() {
        let mut graph = Graph::from_edges(
            5,
            &[(0, 1, 1), (0, 2, 7), (1, 2, 2), (1, 4, 6), (2, 3, 3), (3, 4, 8), (0, 4, 2)],
        )
        .unwrap();
        let before = incident_outside(&graph, 2, 4);
        let size = graph.size();

        graph.contract(2, 4).unwrap();

        assert_eq!(graph.size(), size - 1);
        let after: Weight = (0..graph.size())
            .filter(|&k| k != 2)
            .map(|k| graph.weight(2, k).unwrap())
            .sum();
        assert_eq!(before, after);
        for i in 0..graph.size() {
            for j in 0..graph.size() {
                assert_eq!(graph.weight(i, j).unwrap(), graph.weight(j, i).unwrap());
            }
        }
    }

    #[test]
    fn test_contract_rejects_same_vertex() {
        let mut graph = Graph::from_edges(2, &[(0, 1, 1)]).unwrap();
        assert!(matches!(graph.contract(1, 1), Err(GraphError::InvalidInput(_))));
        assert!(matches!(
            graph.contract(0, 2),
            Err(GraphError::OutOfRange { .. })
        ));
        assert_eq!(graph.size(), 2);
    }

    #[test]
    fn test_edges_view() {
        let graph = Graph::from_edges(4, &[(2, 0, 3), (3, 1, 1), (0, 1, 2)]).unwrap();
        let edges = graph.edges();
        assert_eq!(
            edges,
            vec![
                Edge { u: 0, v: 1, weight: 2 },
                Edge { u: 0, v: 2, weight: 3 },
                Edge { u: 1, v: 3, weight: 1 },
            ]
        );
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.degree_weight(0).unwrap(), 5);
    }

    #[test]
    fn test_components() {
        let graph = Graph::from_edges(6, &[(0, 4, 1), (4, 2, 1), (1, 3, 1)]).unwrap();
        assert_eq!(graph.components(), vec![vec![0, 2, 4], vec![1, 3], vec![5]]);
        assert!(!graph.is_connected());

        let path = Graph::from_edges(3, &[(0, 1, 1), (1, 2, 1)]).unwrap();
        assert!(path.is_connected());
        assert!(Graph::new(1).is_connected());
    }
}
