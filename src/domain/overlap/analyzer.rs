//! Aggregation of all overlap detectors into one analysis result.

use crate::domain::foundation::MoveDate;
use crate::domain::household::Household;

use super::detectors::{
    detect_address_overlaps, detect_member_duplicates, detect_move_date_conflicts,
    detect_resource_conflicts, detect_timeline_conflicts,
};
use super::{OverlapAnalysis, Severity};

/// Canned hint shown when move-date findings exist.
pub const RECOMMENDATION_DATES: &str =
    "Prüfen Sie, ob eng beieinander liegende Umzugstermine entzerrt werden können.";

/// Canned hint shown when address findings exist.
pub const RECOMMENDATION_ADDRESSES: &str =
    "Klären Sie Übergabetermine für Adressen, die von mehreren Haushalten genutzt werden.";

/// Canned hint shown when member findings exist.
pub const RECOMMENDATION_MEMBERS: &str =
    "Überprüfen Sie Mitglieder, die in mehreren Haushalten eingetragen sind.";

/// Runs all five detectors over the household list and aggregates the result.
///
/// Detectors always run in a fixed order (date, address, member, timeline,
/// resource) and their findings are concatenated without re-sorting. With
/// fewer than two households no conflict is possible and the fixed empty
/// analysis is returned.
///
/// `today` is the reference date for the timeline detector; callers inject
/// it so the analysis stays pure and reproducible.
///
/// Only the date, address, and member categories contribute canned
/// recommendations; timeline and resource findings intentionally do not.
pub fn analyze_household_overlaps(households: &[Household], today: &MoveDate) -> OverlapAnalysis {
    if households.len() < 2 {
        return OverlapAnalysis::no_conflicts();
    }

    let date_conflicts = detect_move_date_conflicts(households);
    let address_overlaps = detect_address_overlaps(households);
    let member_duplicates = detect_member_duplicates(households);
    let timeline_conflicts = detect_timeline_conflicts(households, today);
    let resource_conflicts = detect_resource_conflicts(households);

    let mut recommendations = Vec::new();
    if !date_conflicts.is_empty() {
        recommendations.push(RECOMMENDATION_DATES.to_string());
    }
    if !address_overlaps.is_empty() {
        recommendations.push(RECOMMENDATION_ADDRESSES.to_string());
    }
    if !member_duplicates.is_empty() {
        recommendations.push(RECOMMENDATION_MEMBERS.to_string());
    }

    let mut overlaps = date_conflicts;
    overlaps.extend(address_overlaps);
    overlaps.extend(member_duplicates);
    overlaps.extend(timeline_conflicts);
    overlaps.extend(resource_conflicts);

    let critical_issues = overlaps
        .iter()
        .filter(|o| o.severity == Severity::Critical)
        .count();
    let warnings = overlaps
        .iter()
        .filter(|o| matches!(o.severity, Severity::High | Severity::Medium))
        .count();

    OverlapAnalysis {
        has_conflicts: !overlaps.is_empty(),
        critical_issues,
        warnings,
        recommendations,
        overlaps,
    }
}
