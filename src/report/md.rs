use crate::catalog::Catalog;
use crate::types::report::PredictionReport;

pub fn prediction(report: &PredictionReport) -> String {
    let mut output = String::new();
    output.push_str("# Career Prediction\n\n");
    output.push_str(&format!("Result: **{}**\n\n", report.prediction));
    output.push_str(&format!("Policy: {}\n\n", report.policy));

    output.push_str("## Selection\n\n");
    output.push_str(&format!(
        "- skills: {}\n- interests: {}\n- education: {}\n",
        join_or_none(report.selection.skills.iter()),
        report
            .selection
            .interests
            .as_ref()
            .map(|interests| join_or_none(interests.iter()))
            .unwrap_or_else(|| "none".to_string()),
        report
            .selection
            .education
            .map(|education| education.to_string())
            .unwrap_or_else(|| "none".to_string())
    ));

    if !report.ranking.is_empty() {
        output.push_str("\n## Scores\n\n");
        output.push_str("| career | score | skills | interests | education |\n");
        output.push_str("|---|---|---|---|---|\n");
        for scored in &report.ranking {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                escape_cell(&scored.career),
                scored.score,
                escape_cell(&scored.matched_skills.join(", ")),
                escape_cell(&scored.matched_interests.join(", ")),
                if scored.education_match { "yes" } else { "" }
            ));
        }
    }

    output
}

pub fn catalog(catalog: &Catalog) -> String {
    let mut output = String::new();
    output.push_str("# Career Catalog\n\n");
    output.push_str("| career | skills | interests | education |\n");
    output.push_str("|---|---|---|---|\n");
    for profile in catalog.profiles() {
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            escape_cell(&profile.career),
            escape_cell(&join_or_none(profile.skills.iter())),
            escape_cell(&join_or_none(profile.interests.iter())),
            profile.education
        ));
    }
    output
}

fn join_or_none<'a>(tokens: impl Iterator<Item = &'a String>) -> String {
    let joined = tokens.map(String::as_str).collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "none".to_string()
    } else {
        joined
    }
}

/// Table cells come from user-supplied catalogs; a bare `|` would split them.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
