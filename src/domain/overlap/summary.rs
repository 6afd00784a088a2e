//! Human-readable rendering of an overlap analysis.

use super::OverlapAnalysis;

/// Renders the analysis as a German bullet-style text block.
///
/// Without conflicts a single ✅ line is produced. Otherwise each
/// finding becomes one line prefixed with its severity icon, followed
/// by the recommendation bullets when present.
pub fn generate_overlap_summary(analysis: &OverlapAnalysis) -> String {
    if !analysis.has_conflicts {
        return "✅ Keine Konflikte zwischen den Haushalten gefunden.".to_string();
    }

    let mut out = format!(
        "Überlappungsanalyse: {} Konflikt(e) gefunden (kritisch: {}, Warnungen: {})\n\n",
        analysis.overlaps.len(),
        analysis.critical_issues,
        analysis.warnings
    );

    for overlap in &analysis.overlaps {
        out.push_str(&format!(
            "{} {}: {}\n",
            overlap.severity.icon(),
            overlap.title,
            overlap.description
        ));
    }

    if !analysis.recommendations.is_empty() {
        out.push_str("\nEmpfehlungen:\n");
        for recommendation in &analysis.recommendations {
            out.push_str(&format!("• {}\n", recommendation));
        }
    }

    out
}
