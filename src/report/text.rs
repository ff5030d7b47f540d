use crate::catalog::Catalog;
use crate::types::report::PredictionReport;

pub fn prediction(report: &PredictionReport) -> String {
    let mut output = String::new();
    if report.matched {
        output.push_str(&format!("Recommended career: {}\n", report.prediction));
    } else {
        output.push_str(&format!("{}\n", report.prediction));
    }
    output.push_str(&format!("policy: {}\n", report.policy));

    if !report.ranking.is_empty() {
        output.push_str("\nscores:\n");
        for scored in &report.ranking {
            output.push_str(&format!("  {:>3}  {}", scored.score, scored.career));
            if !scored.matched_skills.is_empty() {
                output.push_str(&format!("  skills: {}", scored.matched_skills.join(", ")));
            }
            if !scored.matched_interests.is_empty() {
                output.push_str(&format!(
                    "  interests: {}",
                    scored.matched_interests.join(", ")
                ));
            }
            if scored.education_match {
                output.push_str("  education");
            }
            output.push('\n');
        }
    }

    output
}

pub fn catalog(catalog: &Catalog) -> String {
    let mut output = String::new();
    for (index, profile) in catalog.profiles().iter().enumerate() {
        output.push_str(&format!(
            "{:>2}. {} ({})\n    skills: {}\n",
            index + 1,
            profile.career,
            profile.education,
            profile.skills.iter().cloned().collect::<Vec<_>>().join(", ")
        ));
        if !profile.interests.is_empty() {
            output.push_str(&format!(
                "    interests: {}\n",
                profile.interests.iter().cloned().collect::<Vec<_>>().join(", ")
            ));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{predict, rank, ScoringPolicy, Selection};

    #[test]
    fn text_prediction_names_the_career() {
        let policy = ScoringPolicy::Simple;
        let selection = Selection::from_skills(["python", "excel", "sql"]);
        let predicted = predict(Catalog::builtin(), &selection, &policy);
        let ranking = rank(Catalog::builtin(), &selection, &policy);
        let report = PredictionReport::new(&policy, selection, predicted, ranking);

        let rendered = prediction(&report);
        assert!(rendered.starts_with("Recommended career: Data Analyst"));
        assert!(rendered.contains("policy: simple"));
        assert!(rendered.contains("    3  Data Analyst  skills: excel, python, sql"));
    }

    #[test]
    fn text_catalog_lists_every_profile() {
        let rendered = catalog(Catalog::builtin());
        assert!(rendered.contains(" 1. Software Engineer (bachelor)"));
        assert!(rendered.contains("10. Electrician (high school)"));
    }
}
