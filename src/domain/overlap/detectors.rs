//! Rule evaluators for household overlap detection.
//!
//! Each detector is a pure function from a household list to a list of
//! findings. The thresholds are business rules carried over verbatim
//! from the product; they are literal constants, not derived values.

use std::collections::BTreeMap;

use serde_json::json;

use crate::domain::foundation::{HouseholdId, MoveDate};
use crate::domain::household::Household;

use super::{HouseholdOverlap, OverlapType, Severity};

/// Adjacent move dates closer than this many days are flagged.
pub const CLOSE_DATE_THRESHOLD_DAYS: i64 = 3;

/// Width of the upcoming-moves window checked by the timeline detector.
pub const TIMELINE_WINDOW_DAYS: i64 = 30;

/// More than this many households inside the window trigger a finding.
pub const TIMELINE_CROWD_THRESHOLD: usize = 2;

/// Summed household sizes above this per ISO week trigger a finding.
pub const WEEKLY_CAPACITY_PERSONS: u32 = 10;

/// Detects households moving on the same or nearly the same day.
///
/// Works on a copy sorted by move date (stable; ties keep input order)
/// and checks adjacent pairs only. Transitively-close dates are
/// deliberately not expanded into all-pairs findings.
pub fn detect_move_date_conflicts(households: &[Household]) -> Vec<HouseholdOverlap> {
    let mut by_date: Vec<&Household> = households.iter().collect();
    by_date.sort_by_key(|h| *h.move_date());

    let mut overlaps = Vec::new();
    for pair in by_date.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        let days_diff = current.move_date().days_until(next.move_date());

        if days_diff < 1 {
            overlaps.push(
                HouseholdOverlap::new(
                    OverlapType::MoveDateConflict,
                    Severity::Critical,
                    "Umzüge am gleichen Tag",
                    format!(
                        "{} und {} ziehen am gleichen Tag um ({})",
                        current.name(),
                        next.name(),
                        current.move_date()
                    ),
                    vec![*current.id(), *next.id()],
                )
                .with_suggested_action("Prüfen Sie, ob einer der Umzüge verschoben werden kann")
                .with_data(json!({
                    "first_move_date": current.move_date().to_string(),
                    "second_move_date": next.move_date().to_string(),
                    "days_between": days_diff,
                })),
            );
        } else if days_diff < CLOSE_DATE_THRESHOLD_DAYS {
            overlaps.push(
                HouseholdOverlap::new(
                    OverlapType::MoveDateConflict,
                    Severity::High,
                    "Sehr enge Umzugstermine",
                    format!(
                        "{} und {} ziehen nur {} Tag(e) auseinander um",
                        current.name(),
                        next.name(),
                        days_diff
                    ),
                    vec![*current.id(), *next.id()],
                )
                .with_suggested_action("Planen Sie Helfer und Transporter frühzeitig")
                .with_data(json!({
                    "first_move_date": current.move_date().to_string(),
                    "second_move_date": next.move_date().to_string(),
                    "days_between": days_diff,
                })),
            );
        }
    }
    overlaps
}

/// Detects pairs where one household moves into an address another
/// household is vacating.
///
/// Every unordered pair is checked once; the first household's new
/// address is compared against the second's old address (trimmed and
/// case-folded, unknown never matches). The severity branch on
/// `h1.move_date > h2.move_date` reproduces the original product rule
/// as stated; exactly one finding is emitted per qualifying pair.
pub fn detect_address_overlaps(households: &[Household]) -> Vec<HouseholdOverlap> {
    let mut overlaps = Vec::new();

    for i in 0..households.len() {
        for j in (i + 1)..households.len() {
            let h1 = &households[i];
            let h2 = &households[j];

            let (Some(new_addr), Some(old_addr)) =
                (h1.comparable_new_address(), h2.comparable_old_address())
            else {
                continue;
            };
            if new_addr != old_addr {
                continue;
            }

            let overlap = if h1.move_date().is_after(h2.move_date()) {
                HouseholdOverlap::new(
                    OverlapType::AddressOverlap,
                    Severity::Critical,
                    "Auszug vor Einzug",
                    format!(
                        "{} zieht in eine Adresse ein, die {} erst am {} räumt",
                        h1.name(),
                        h2.name(),
                        h2.move_date()
                    ),
                    vec![*h1.id(), *h2.id()],
                )
                .with_suggested_action(format!(
                    "Verschieben Sie den Einzug von {}, bis {} die Adresse übergeben hat",
                    h1.name(),
                    h2.name()
                ))
            } else {
                HouseholdOverlap::new(
                    OverlapType::AddressOverlap,
                    Severity::Medium,
                    "Adress-Überlappung erkannt",
                    format!(
                        "Die neue Adresse von {} entspricht der alten Adresse von {}",
                        h1.name(),
                        h2.name()
                    ),
                    vec![*h1.id(), *h2.id()],
                )
                .with_suggested_action("Bitte prüfen Sie, ob die Adressangaben korrekt sind")
            };

            overlaps.push(overlap.with_data(json!({
                "address": new_addr,
                "move_in_date": h1.move_date().to_string(),
                "move_out_date": h2.move_date().to_string(),
            })));
        }
    }
    overlaps
}

/// Detects member emails that appear in more than one roster entry.
///
/// Emails are compared lowercased across all households. Household IDs
/// in the finding follow entry order and are not deduplicated, so an
/// email listed twice inside one household repeats that household's ID.
pub fn detect_member_duplicates(households: &[Household]) -> Vec<HouseholdOverlap> {
    let mut by_email: BTreeMap<String, Vec<(HouseholdId, String)>> = BTreeMap::new();

    for household in households {
        for member in household.members() {
            by_email
                .entry(member.normalized_email())
                .or_default()
                .push((*household.id(), member.name().to_string()));
        }
    }

    let mut overlaps = Vec::new();
    for (email, entries) in by_email {
        if entries.len() < 2 {
            continue;
        }

        let names: Vec<&str> = entries.iter().map(|(_, name)| name.as_str()).collect();
        let affected: Vec<HouseholdId> = entries.iter().map(|(id, _)| *id).collect();
        let occurrences = entries.len();

        overlaps.push(
            HouseholdOverlap::new(
                OverlapType::MemberDuplicate,
                Severity::High,
                "Doppelte Mitglieder gefunden",
                format!("Mehrfach eingetragen: {}", names.join(", ")),
                affected,
            )
            .with_suggested_action(
                "Überprüfen Sie, zu welchem Haushalt die Person tatsächlich gehört",
            )
            .with_data(json!({
                "email": email,
                "occurrences": occurrences,
            })),
        );
    }
    overlaps
}

/// Detects crowded upcoming schedules.
///
/// Considers households whose move date is strictly after `today`, then
/// narrows to those within the 30-day window. More than two in the
/// window produce exactly one finding listing all of them; at most one
/// finding per call.
pub fn detect_timeline_conflicts(
    households: &[Household],
    today: &MoveDate,
) -> Vec<HouseholdOverlap> {
    let in_window: Vec<&Household> = households
        .iter()
        .filter(|h| h.move_date().is_after(today))
        .filter(|h| today.days_until(h.move_date()) <= TIMELINE_WINDOW_DAYS)
        .collect();

    if in_window.len() <= TIMELINE_CROWD_THRESHOLD {
        return Vec::new();
    }

    vec![
        HouseholdOverlap::new(
            OverlapType::TimelineConflict,
            Severity::Medium,
            "Viele Umzüge in kurzer Zeit",
            format!(
                "{} Umzüge stehen innerhalb der nächsten {} Tage an",
                in_window.len(),
                TIMELINE_WINDOW_DAYS
            ),
            in_window.iter().map(|h| *h.id()).collect(),
        )
        .with_suggested_action("Erstellen Sie einen gemeinsamen Zeitplan für die anstehenden Umzüge")
        .with_data(json!({
            "count": in_window.len(),
            "window_days": TIMELINE_WINDOW_DAYS,
        })),
    ]
}

/// Detects ISO weeks where too many people move at once.
///
/// Groups all households by ISO-8601 week of their move date. A week
/// with more than one household and more than ten people in total is
/// flagged; smaller weeks pass even with multiple households.
pub fn detect_resource_conflicts(households: &[Household]) -> Vec<HouseholdOverlap> {
    let mut by_week: BTreeMap<(i32, u32), Vec<&Household>> = BTreeMap::new();
    for household in households {
        by_week
            .entry(household.move_date().iso_week_key())
            .or_default()
            .push(household);
    }

    let mut overlaps = Vec::new();
    for ((iso_year, iso_week), group) in by_week {
        if group.len() < 2 {
            continue;
        }
        let total_people: u32 = group.iter().map(|h| h.household_size()).sum();
        if total_people <= WEEKLY_CAPACITY_PERSONS {
            continue;
        }

        overlaps.push(
            HouseholdOverlap::new(
                OverlapType::ResourceConflict,
                Severity::Medium,
                "Hohe Umzugsbelastung",
                format!(
                    "In Kalenderwoche {}/{} ziehen {} Personen aus {} Haushalten um",
                    iso_week,
                    iso_year,
                    total_people,
                    group.len()
                ),
                group.iter().map(|h| *h.id()).collect(),
            )
            .with_suggested_action(
                "Verteilen Sie die Umzüge auf mehrere Wochen oder organisieren Sie zusätzliche Helfer",
            )
            .with_data(json!({
                "iso_year": iso_year,
                "iso_week": iso_week,
                "total_people": total_people,
            })),
        );
    }
    overlaps
}
