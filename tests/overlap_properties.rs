//! Property-based tests for the overlap analysis.
//!
//! Generates random household portfolios and checks the structural
//! guarantees of the analysis: determinism, count consistency, and the
//! small-input short circuit.

use proptest::prelude::*;

use umzugsplan::domain::foundation::{HouseholdId, MoveDate, UserId};
use umzugsplan::domain::household::{Household, Member};
use umzugsplan::domain::overlap::{
    analyze_household_overlaps, generate_overlap_summary, Severity,
};

const BASE_DATE: &str = "2025-06-01";

fn base_date() -> MoveDate {
    MoveDate::parse(BASE_DATE).unwrap()
}

#[derive(Debug, Clone)]
struct HouseholdFixture {
    day_offset: i64,
    household_size: u32,
    old_address: Option<u8>,
    new_address: Option<u8>,
    member_emails: Vec<u8>,
}

fn address_pool(index: u8) -> String {
    format!("Musterstraße {}, Berlin", index % 4)
}

fn member_pool(index: u8) -> Member {
    let slot = index % 5;
    Member::new(format!("Person {slot}"), format!("person{slot}@example.com")).unwrap()
}

fn build_household(index: usize, fx: &HouseholdFixture) -> Household {
    Household::new(
        HouseholdId::new(),
        UserId::new("user-1").unwrap(),
        format!("Haushalt {index}"),
        base_date().plus_days(fx.day_offset),
        fx.household_size,
        fx.old_address.map(address_pool),
        fx.new_address.map(address_pool),
        fx.member_emails.iter().map(|&i| member_pool(i)).collect(),
    )
    .unwrap()
}

fn household_fixture() -> impl Strategy<Value = HouseholdFixture> {
    (
        -10i64..60,
        1u32..8,
        proptest::option::of(0u8..4),
        proptest::option::of(0u8..4),
        proptest::collection::vec(0u8..5, 0..3),
    )
        .prop_map(
            |(day_offset, household_size, old_address, new_address, member_emails)| HouseholdFixture {
                day_offset,
                household_size,
                old_address,
                new_address,
                member_emails,
            },
        )
}

fn portfolio() -> impl Strategy<Value = Vec<HouseholdFixture>> {
    proptest::collection::vec(household_fixture(), 0..8)
}

proptest! {
    #[test]
    fn analysis_is_deterministic(fixtures in portfolio()) {
        let households: Vec<Household> = fixtures
            .iter()
            .enumerate()
            .map(|(i, f)| build_household(i, f))
            .collect();
        let today = base_date();

        let first = analyze_household_overlaps(&households, &today);
        let second = analyze_household_overlaps(&households, &today);

        prop_assert_eq!(serde_json::to_value(&first).unwrap(), serde_json::to_value(&second).unwrap());
        prop_assert_eq!(generate_overlap_summary(&first), generate_overlap_summary(&second));
    }

    #[test]
    fn counts_are_consistent_with_findings(fixtures in portfolio()) {
        let households: Vec<Household> = fixtures
            .iter()
            .enumerate()
            .map(|(i, f)| build_household(i, f))
            .collect();
        let analysis = analyze_household_overlaps(&households, &base_date());

        let critical = analysis
            .overlaps
            .iter()
            .filter(|o| o.severity == Severity::Critical)
            .count();
        let warnings = analysis
            .overlaps
            .iter()
            .filter(|o| matches!(o.severity, Severity::High | Severity::Medium))
            .count();

        prop_assert_eq!(analysis.critical_issues, critical);
        prop_assert_eq!(analysis.warnings, warnings);
        prop_assert_eq!(analysis.has_conflicts, !analysis.overlaps.is_empty());
    }

    #[test]
    fn fewer_than_two_households_short_circuits(fixture in proptest::option::of(household_fixture())) {
        let households: Vec<Household> = fixture
            .iter()
            .enumerate()
            .map(|(i, f)| build_household(i, f))
            .collect();
        let analysis = analyze_household_overlaps(&households, &base_date());

        prop_assert!(analysis.overlaps.is_empty());
        prop_assert!(!analysis.has_conflicts);
        prop_assert_eq!(analysis.critical_issues, 0);
        prop_assert_eq!(analysis.warnings, 0);
        prop_assert!(analysis.recommendations.is_empty());
    }

    #[test]
    fn findings_only_reference_input_households(fixtures in portfolio()) {
        let households: Vec<Household> = fixtures
            .iter()
            .enumerate()
            .map(|(i, f)| build_household(i, f))
            .collect();
        let known: Vec<_> = households.iter().map(|h| *h.id()).collect();
        let analysis = analyze_household_overlaps(&households, &base_date());

        for overlap in &analysis.overlaps {
            prop_assert!(!overlap.affected_households.is_empty());
            for id in &overlap.affected_households {
                prop_assert!(known.contains(id));
            }
        }
    }

    #[test]
    fn summary_header_matches_counts(fixtures in portfolio()) {
        let households: Vec<Household> = fixtures
            .iter()
            .enumerate()
            .map(|(i, f)| build_household(i, f))
            .collect();
        let analysis = analyze_household_overlaps(&households, &base_date());
        let summary = generate_overlap_summary(&analysis);

        if analysis.overlaps.is_empty() {
            prop_assert_eq!(summary, "✅ Keine Konflikte zwischen den Haushalten gefunden.");
        } else {
            let expected = format!(
                "Überlappungsanalyse: {} Konflikt(e) gefunden (kritisch: {}, Warnungen: {})",
                analysis.overlaps.len(),
                analysis.critical_issues,
                analysis.warnings
            );
            prop_assert!(summary.starts_with(&expected));
        }
    }
}
