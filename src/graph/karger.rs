//! Karger's randomized contraction algorithm for the minimum cut.
//!
//! One *trial* contracts random edges of the graph until only two super-vertices
//! remain and reports the weight of the edges running between them. A single
//! trial finds a given minimum cut with probability at least `2 / (V (V - 1))`,
//! so the orchestrator runs many independent trials and keeps the best one.
//!
//! The graph itself is never touched: every trial works on the edge list and a
//! fresh [`UnionFind`] that records which vertices were merged.
//!
//! Each trial draws from its own [`ChaCha20Rng`] stream derived from a base
//! seed and the trial index. The result for a given seed is therefore the same
//! whether the trials run sequentially or on the rayon pool, and adding trials
//! can only lower (never raise) the estimate.

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::cut::MinCut;
use crate::error::{GraphError, Result};
use crate::graph::{Edge, Graph, UnionFind, Weight};

/// How a trial chooses the next edge to contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Contraction {
    /// Draw a uniformly random edge each step; redraw if both endpoints are
    /// already merged.
    RejectionSampling,
    /// Shuffle the edge list once per trial and contract in that order.
    /// Same distribution as rejection sampling, but O(E) work per trial.
    #[default]
    ShuffledScan,
}

/// Parameters for the Karger orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KargerConfig {
    /// Number of independent trials. Must be at least 1.
    pub trials: usize,
    pub contraction: Contraction,
    /// Base seed for reproducible runs. `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Run trials on the rayon thread pool (needs the `parallel` feature).
    pub parallel: bool,
}

impl Default for KargerConfig {
    fn default() -> Self {
        Self {
            trials: 100,
            contraction: Contraction::default(),
            seed: None,
            parallel: false,
        }
    }
}

impl KargerConfig {
    pub fn new(trials: usize) -> Self {
        Self {
            trials,
            ..Self::default()
        }
    }

    pub fn with_contraction(mut self, contraction: Contraction) -> Self {
        self.contraction = contraction;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Randomized minimum-cut estimator.
///
/// # Examples
/// ```
/// use mincut::graph::{Contraction, Graph, Karger, KargerConfig};
///
/// let graph = Graph::from_edges(
///     6,
///     &[(0, 1, 5), (1, 2, 5), (0, 2, 5), (3, 4, 5), (4, 5, 5), (3, 5, 5), (2, 3, 1)],
/// )
/// .unwrap();
///
/// let config = KargerConfig::new(200)
///     .with_contraction(Contraction::RejectionSampling)
///     .with_seed(7);
/// let cut = Karger::new(config).unwrap().estimate(&graph).unwrap();
/// assert_eq!(cut.weight, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Karger {
    config: KargerConfig,
}

impl Karger {
    /// # Errors
    /// * `InvalidInput` if `config.trials` is 0
    pub fn new(config: KargerConfig) -> Result<Self> {
        if config.trials == 0 {
            return Err(GraphError::invalid_input("trials must be at least 1"));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &KargerConfig {
        &self.config
    }

    /// Runs the configured number of trials and returns the lightest cut found.
    ///
    /// The result is an upper bound on the true minimum cut. A disconnected
    /// graph (including one with no edges) short-circuits to a cut of 0.
    ///
    /// # Errors
    /// * `InvalidInput` if the graph has fewer than two vertices
    pub fn estimate(&self, graph: &Graph) -> Result<MinCut> {
        let n = graph.size();
        if n < 2 {
            return Err(GraphError::invalid_input(format!(
                "minimum cut needs at least 2 vertices, got {n}"
            )));
        }

        let components = graph.components();
        if components.len() > 1 {
            debug!(
                "karger: graph has {} components, minimum cut is 0",
                components.len()
            );
            return Ok(MinCut::from_side(0, n, components[0].iter().copied()));
        }

        let edges = graph.edges();
        let contraction = self.config.contraction;
        let base_seed = self
            .config
            .seed
            .unwrap_or_else(|| ChaCha20Rng::from_entropy().gen());
        debug!(
            "karger: {} vertices, {} edges, {} trials, {:?}, seed {}",
            n,
            edges.len(),
            self.config.trials,
            contraction,
            base_seed
        );

        let run = |trial: usize| {
            let mut rng = trial_rng(base_seed, trial);
            let cut = run_trial(n, &edges, contraction, &mut rng);
            trace!("karger: trial {} found cut {}", trial, cut.weight);
            (cut, trial)
        };
        let trials = 0..self.config.trials;

        #[cfg(feature = "parallel")]
        let best = if self.config.parallel {
            trials.into_par_iter().map(run).min_by_key(|(cut, i)| (cut.weight, *i))
        } else {
            trials.map(run).min_by_key(|(cut, i)| (cut.weight, *i))
        };
        #[cfg(not(feature = "parallel"))]
        let best = trials.map(run).min_by_key(|(cut, i)| (cut.weight, *i));

        let (cut, trial) =
            best.ok_or_else(|| GraphError::invalid_input("trials must be at least 1"))?;
        debug!("karger: best cut {} from trial {}", cut.weight, trial);
        Ok(cut)
    }
}

/// Estimates the minimum cut weight with `trials` shuffled-scan trials.
///
/// # Errors
/// * `InvalidInput` if `trials` is 0 or the graph has fewer than two vertices
pub fn estimate_min_cut(graph: &Graph, trials: usize) -> Result<Weight> {
    Karger::new(KargerConfig::new(trials))?
        .estimate(graph)
        .map(|cut| cut.weight)
}

/// Independent generator for one trial: the base seed picks the key, the
/// trial index picks the ChaCha stream.
fn trial_rng(base_seed: u64, trial: usize) -> ChaCha20Rng {
    let mut rng = ChaCha20Rng::seed_from_u64(base_seed);
    rng.set_stream(trial as u64);
    rng
}

/// One contraction trial over a connected edge list.
///
/// Rejection sampling only terminates if `edges` connect all `vertex_count`
/// vertices, which [`Karger::estimate`] checks before calling this.
fn run_trial<R: Rng>(
    vertex_count: usize,
    edges: &[Edge],
    contraction: Contraction,
    rng: &mut R,
) -> MinCut {
    let mut sets = UnionFind::new(vertex_count);

    match contraction {
        Contraction::RejectionSampling => {
            while sets.set_count() > 2 {
                let edge = &edges[rng.gen_range(0..edges.len())];
                // A false return is a self-loop in the contracted graph: redraw.
                sets.union(edge.u, edge.v);
            }
        }
        Contraction::ShuffledScan => {
            let mut order = edges.to_vec();
            order.shuffle(rng);
            for edge in &order {
                if sets.set_count() <= 2 {
                    break;
                }
                sets.union(edge.u, edge.v);
            }
        }
    }

    let weight = edges
        .iter()
        .filter(|e| !sets.connected(e.u, e.v))
        .map(|e| e.weight)
        .sum::<Weight>();
    let root = sets.find(0);
    MinCut::from_side(
        weight,
        vertex_count,
        (0..vertex_count).filter(|&v| sets.find(v) == root),
    )
}
