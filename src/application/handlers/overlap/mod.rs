//! Overlap analysis query handlers.

mod analyze_overlaps;

pub use analyze_overlaps::{AnalyzeOverlapsHandler, AnalyzeOverlapsQuery};
