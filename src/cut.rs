//! The value returned by both min-cut engines.

use crate::graph::{Graph, Weight};

/// A cut of a graph: its total weight and the vertices on one side.
///
/// `partition` holds the sorted vertex ids of the side that does **not**
/// contain vertex 0, so two engines that find the same cut report the same
/// partition. It is never empty and never covers the whole graph.
///
/// A `MinCut` from the Karger engine is the best cut seen over its trials. It
/// is an upper bound on the true minimum, not a certified minimum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinCut {
    pub weight: Weight,
    pub partition: Vec<usize>,
}

impl MinCut {
    /// Builds a cut from an arbitrary side of a graph with `vertex_count` vertices.
    pub(crate) fn from_side<I>(weight: Weight, vertex_count: usize, side: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut in_side = vec![false; vertex_count];
        for v in side {
            in_side[v] = true;
        }
        let keep = !in_side[0];
        let partition = (0..vertex_count).filter(|&v| in_side[v] == keep).collect();
        Self { weight, partition }
    }

    /// Returns `true` if `v` lies on the reported side of the cut.
    pub fn contains(&self, v: usize) -> bool {
        self.partition.binary_search(&v).is_ok()
    }

    /// Recomputes the weight of the edges crossing this partition in `graph`.
    pub fn crossing_weight(&self, graph: &Graph) -> Weight {
        graph
            .edges()
            .iter()
            .filter(|e| self.contains(e.u) != self.contains(e.v))
            .map(|e| e.weight)
            .sum()
    }
}
