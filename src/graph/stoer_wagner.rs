//! Stoer-Wagner global minimum cut.
//!
//! The algorithm runs `V - 1` *minimum-cut phases*. Each phase grows a set `A`
//! from vertex 0 by repeatedly adding the most tightly connected vertex (the
//! one with the largest total edge weight into `A`). The weight of the last
//! vertex when it joins `A` is the *cut-of-the-phase*: the cut separating that
//! vertex from the rest of the current graph. The last two vertices are then
//! merged and the next phase runs on the smaller graph. The smallest
//! cut-of-the-phase is the global minimum cut.
//!
//! # Complexity
//! * [`Selection::LinearScan`]: O(V^3) time
//! * [`Selection::PriorityQueue`]: O(V^2 log V) selection work, O(V^3) weight updates in the worst case
//! * Space: O(V^2)

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::cut::MinCut;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, Weight};

/// How each phase picks the most tightly connected vertex.
///
/// Both strategies break ties by the lowest current vertex index, so they
/// produce identical cuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Scan every vertex outside `A` on each step.
    #[default]
    LinearScan,
    /// Max-heap of `(weight, vertex)` entries with lazy deletion of stale entries.
    PriorityQueue,
}

/// Exact minimum-cut engine.
///
/// # Examples
/// ```
/// use mincut::graph::{Graph, Selection, StoerWagner};
///
/// // Two triangles joined by a light bridge.
/// let graph = Graph::from_edges(
///     6,
///     &[(0, 1, 5), (1, 2, 5), (0, 2, 5), (3, 4, 5), (4, 5, 5), (3, 5, 5), (2, 3, 1)],
/// )
/// .unwrap();
///
/// let cut = StoerWagner::new(Selection::PriorityQueue).min_cut(&graph).unwrap();
/// assert_eq!(cut.weight, 1);
/// assert_eq!(cut.partition, vec![3, 4, 5]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StoerWagner {
    selection: Selection,
}

impl StoerWagner {
    pub fn new(selection: Selection) -> Self {
        Self { selection }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Computes the exact minimum cut of `graph` without modifying it.
    ///
    /// A disconnected graph has a minimum cut of 0; the returned partition is
    /// then one of its components.
    ///
    /// # Errors
    /// * `InvalidInput` if the graph has fewer than two vertices
    pub fn min_cut(&self, graph: &Graph) -> Result<MinCut> {
        let n = graph.size();
        if n < 2 {
            return Err(GraphError::invalid_input(format!(
                "minimum cut needs at least 2 vertices, got {n}"
            )));
        }

        let components = graph.components();
        if components.len() > 1 {
            debug!(
                "stoer-wagner: graph has {} components, minimum cut is 0",
                components.len()
            );
            return Ok(MinCut::from_side(0, n, components[0].iter().copied()));
        }

        debug!(
            "stoer-wagner: {} vertices, {} edges, {:?} selection",
            n,
            graph.edge_count(),
            self.selection
        );

        let mut state = ContractedGraph::new(graph);
        let mut best: Option<(Weight, Vec<usize>)> = None;
        let mut phase = 0;

        while state.len() > 1 {
            let cut = state.phase(self.selection)?;
            trace!(
                "stoer-wagner: phase {} over {} vertices, cut-of-the-phase {}",
                phase,
                state.len(),
                cut.weight
            );
            if best.as_ref().map_or(true, |(weight, _)| cut.weight < *weight) {
                best = Some((cut.weight, state.members(cut.last).to_vec()));
            }
            state.merge(cut.prev, cut.last);
            phase += 1;
        }

        // n >= 2, so at least one phase ran.
        let (weight, side) = best.unwrap_or_default();
        debug!("stoer-wagner: minimum cut {} after {} phases", weight, phase);
        Ok(MinCut::from_side(weight, n, side))
    }
}

/// Exact minimum cut weight using the linear-scan selection.
///
/// # Errors
/// * `InvalidInput` if the graph has fewer than two vertices
pub fn minimum_cut(graph: &Graph) -> Result<Weight> {
    StoerWagner::new(Selection::LinearScan)
        .min_cut(graph)
        .map(|cut| cut.weight)
}

/// Exact minimum cut weight using the priority-queue selection.
pub fn minimum_cut_pq(graph: &Graph) -> Result<Weight> {
    StoerWagner::new(Selection::PriorityQueue)
        .min_cut(graph)
        .map(|cut| cut.weight)
}

/// Outcome of one phase, in current (condensed) indices.
#[derive(Debug, Clone, Copy)]
struct PhaseCut {
    prev: usize,
    last: usize,
    weight: Weight,
}

/// Working copy of the graph that shrinks by one vertex per phase.
///
/// Rows stay indexed by original vertex id. `active[i]` is the original id
/// standing for current vertex `i`; removing an entry keeps the order, so the
/// current indices are exactly those the erase-and-shift matrix of
/// [`Graph::contract`] would produce.
struct ContractedGraph {
    weights: Vec<Vec<Weight>>,
    active: Vec<usize>,
    members: Vec<Vec<usize>>,
}

impl ContractedGraph {
    fn new(graph: &Graph) -> Self {
        let n = graph.size();
        Self {
            weights: (0..n).map(|i| graph.row(i).to_vec()).collect(),
            active: (0..n).collect(),
            members: (0..n).map(|i| vec![i]).collect(),
        }
    }

    fn len(&self) -> usize {
        self.active.len()
    }

    /// Original vertices merged into current vertex `i`.
    fn members(&self, i: usize) -> &[usize] {
        &self.members[self.active[i]]
    }

    fn phase(&self, selection: Selection) -> Result<PhaseCut> {
        let n = self.len();
        let mut added = vec![false; n];
        let mut weight: Vec<Weight> = vec![0; n];
        let mut heap = BinaryHeap::new();

        let start = &self.weights[self.active[0]];
        added[0] = true;
        for i in 1..n {
            weight[i] = start[self.active[i]];
            if selection == Selection::PriorityQueue {
                heap.push((weight[i], Reverse(i)));
            }
        }

        let (mut prev, mut last) = (0, 0);
        for _ in 1..n {
            let next = match selection {
                Selection::LinearScan => most_tightly_connected(&added, &weight),
                Selection::PriorityQueue => pop_unadded(&mut heap, &added),
            };
            // Unreachable: every un-added vertex is pushed when the phase
            // starts and its entry is only popped once it is added.
            let t = next.ok_or_else(|| {
                GraphError::invalid_input("residual graph is disconnected; no cut-of-the-phase")
            })?;

            prev = last;
            last = t;
            added[t] = true;

            let row = &self.weights[self.active[t]];
            for i in 0..n {
                if added[i] {
                    continue;
                }
                let w = row[self.active[i]];
                if w > 0 {
                    weight[i] += w;
                    if selection == Selection::PriorityQueue {
                        heap.push((weight[i], Reverse(i)));
                    }
                }
            }
        }

        Ok(PhaseCut {
            prev,
            last,
            weight: weight[last],
        })
    }

    /// Merges current vertex `last` into `prev`.
    fn merge(&mut self, prev: usize, last: usize) {
        let (keep, gone) = (self.active[prev], self.active[last]);
        for &k in &self.active {
            if k == keep || k == gone {
                continue;
            }
            let w = self.weights[gone][k];
            self.weights[keep][k] += w;
            self.weights[k][keep] = self.weights[keep][k];
        }
        self.weights[keep][gone] = 0;
        self.weights[gone][keep] = 0;

        let moved = std::mem::take(&mut self.members[gone]);
        self.members[keep].extend(moved);
        self.active.remove(last);
    }
}

/// Un-added vertex with the largest weight; the lowest index wins ties.
fn most_tightly_connected(added: &[bool], weight: &[Weight]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &done) in added.iter().enumerate() {
        if !done && best.map_or(true, |b| weight[i] > weight[b]) {
            best = Some(i);
        }
    }
    best
}

fn pop_unadded(heap: &mut BinaryHeap<(Weight, Reverse<usize>)>, added: &[bool]) -> Option<usize> {
    while let Some((_, Reverse(v))) = heap.pop() {
        if !added[v] {
            return Some(v);
        }
    }
    None
}
