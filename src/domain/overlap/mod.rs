//! Overlap Module - Pure domain services for cross-household conflict analysis.
//!
//! # Components
//!
//! - Five independent rule evaluators (move-date proximity, address
//!   hand-off, member duplicates, timeline density, weekly resource
//!   contention), each `households -> findings`
//! - `analyze_household_overlaps` - runs all detectors in fixed order
//!   and aggregates counts and recommendations
//! - `generate_overlap_summary` - renders the analysis as German text
//!
//! # Design Philosophy
//!
//! All functions are pure and stateless: they read the household list,
//! allocate fresh results, and perform no I/O. The reference date for
//! the timeline detector is injected by the caller, so results are
//! reproducible. The rules are heuristic business thresholds, not
//! derived invariants.

mod analyzer;
mod detectors;
mod summary;
mod types;

pub use analyzer::{
    analyze_household_overlaps, RECOMMENDATION_ADDRESSES, RECOMMENDATION_DATES,
    RECOMMENDATION_MEMBERS,
};
pub use detectors::{
    detect_address_overlaps, detect_member_duplicates, detect_move_date_conflicts,
    detect_resource_conflicts, detect_timeline_conflicts, CLOSE_DATE_THRESHOLD_DAYS,
    TIMELINE_CROWD_THRESHOLD, TIMELINE_WINDOW_DAYS, WEEKLY_CAPACITY_PERSONS,
};
pub use summary::generate_overlap_summary;
pub use types::{HouseholdOverlap, OverlapAnalysis, OverlapType, Severity};
