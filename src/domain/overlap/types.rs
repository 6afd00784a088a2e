//! Result types produced by the overlap analyzer.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::HouseholdId;

/// Coarse conflict ranking, used for filtering and display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Returns the icon prefix used in the text summary.
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Critical => "🚨",
            Severity::High => "⚠️",
            Severity::Medium => "⚡",
            Severity::Low => "ℹ️",
        }
    }
}

/// The fixed set of conflict categories the detectors emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapType {
    MoveDateConflict,
    AddressOverlap,
    MemberDuplicate,
    TimelineConflict,
    ResourceConflict,
}

/// One detected conflict or coincidence between households' plans.
///
/// Every overlap implicates at least two households (or a whole group
/// for timeline and resource findings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdOverlap {
    pub overlap_type: OverlapType,
    pub severity: Severity,
    /// Short German headline for display.
    pub title: String,
    /// German description of what was detected.
    pub description: String,
    /// IDs of the households implicated, in detection order.
    pub affected_households: Vec<HouseholdId>,
    /// Optional remediation hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<String>,
    /// Free-form payload for UI detail rendering; not interpreted here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl HouseholdOverlap {
    /// Creates an overlap without action hint or payload.
    pub fn new(
        overlap_type: OverlapType,
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
        affected_households: Vec<HouseholdId>,
    ) -> Self {
        Self {
            overlap_type,
            severity,
            title: title.into(),
            description: description.into(),
            affected_households,
            suggested_action: None,
            data: None,
        }
    }

    /// Attaches a remediation hint.
    pub fn with_suggested_action(mut self, action: impl Into<String>) -> Self {
        self.suggested_action = Some(action.into());
        self
    }

    /// Attaches a detail payload.
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// Aggregate result of one analysis call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapAnalysis {
    /// All findings in detector-invocation order
    /// (date, address, member, timeline, resource); no further sorting.
    pub overlaps: Vec<HouseholdOverlap>,
    /// True iff any finding was produced.
    pub has_conflicts: bool,
    /// Count of critical findings.
    pub critical_issues: usize,
    /// Count of high and medium findings; low is excluded from both counts.
    pub warnings: usize,
    /// One generic hint per detector category that produced findings.
    pub recommendations: Vec<String>,
}

impl OverlapAnalysis {
    /// The fixed result for inputs where no conflict is possible.
    pub fn no_conflicts() -> Self {
        Self {
            overlaps: Vec::new(),
            has_conflicts: false,
            critical_issues: 0,
            warnings: 0,
            recommendations: Vec::new(),
        }
    }
}
