//! Minimum edge cuts of weighted undirected graphs.
//!
//! Two independent engines share the [`Graph`] model:
//!
//! - [`graph::stoer_wagner`] computes the exact minimum cut.
//! - [`graph::karger`] estimates it with repeated random contraction trials.
//!
//! The [`io`] module reads the plain-text `V E [trials]` edge-list format and
//! formats the single-line result used by the `mincut` binary.

pub mod cut;
pub mod error;
pub mod graph;
pub mod io;

pub use cut::MinCut;
pub use error::{GraphError, Result};
pub use graph::{Graph, Weight};
