//! Scores a [`Selection`] against every profile in a [`Catalog`] and picks a
//! single career.
//!
//! Profiles are scanned in catalog order and a later profile only replaces
//! the current best when it scores strictly higher, so the earliest profile
//! wins ties. A best score of zero yields [`Prediction::NoSuitableCareer`].

pub mod policy;
pub mod selection;

pub use policy::{score, ScoringPolicy, Weights};
pub use selection::Selection;

use crate::catalog::Catalog;
use policy::Score;
use serde::Serialize;
use std::fmt;
use tracing::{debug, trace};

/// Label carried by the scan before any profile has scored.
pub const NOT_FOUND: &str = "Not found";

/// User-facing text for a selection that matches nothing.
pub const NO_SUITABLE_CAREER: &str = "No suitable career found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prediction {
    Career(String),
    NoSuitableCareer,
}

impl Prediction {
    pub fn career(&self) -> Option<&str> {
        match self {
            Prediction::Career(label) => Some(label),
            Prediction::NoSuitableCareer => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Prediction::Career(_))
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prediction::Career(label) => f.write_str(label),
            Prediction::NoSuitableCareer => f.write_str(NO_SUITABLE_CAREER),
        }
    }
}

impl Serialize for Prediction {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub fn predict(catalog: &Catalog, selection: &Selection, policy: &ScoringPolicy) -> Prediction {
    let mut best_label: &str = NOT_FOUND;
    let mut best_score: Score = 0;

    for profile in catalog.profiles() {
        let score = score(profile, selection, policy);
        trace!(career = %profile.career, score, "scored profile");
        if score > best_score {
            best_score = score;
            best_label = profile.career.as_str();
        }
    }

    debug!(best = best_label, score = best_score, policy = policy.name(), "scan complete");
    if best_score == 0 {
        Prediction::NoSuitableCareer
    } else {
        Prediction::Career(best_label.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredProfile {
    pub career: String,
    pub score: Score,
    pub matched_skills: Vec<String>,
    pub matched_interests: Vec<String>,
    pub education_match: bool,
}

/// Every profile with its score, highest first. Equal scores keep catalog
/// order.
pub fn rank(catalog: &Catalog, selection: &Selection, policy: &ScoringPolicy) -> Vec<ScoredProfile> {
    let mut ranking = catalog
        .profiles()
        .iter()
        .map(|profile| {
            let overlap = policy::overlap(profile, selection);
            let score = overlap.score(policy);
            let weighted = matches!(policy, ScoringPolicy::Weighted(_));
            ScoredProfile {
                career: profile.career.clone(),
                score,
                matched_skills: overlap.skills.iter().map(|s| s.to_string()).collect(),
                matched_interests: if weighted {
                    overlap.interests.iter().map(|s| s.to_string()).collect()
                } else {
                    Vec::new()
                },
                education_match: weighted && overlap.education,
            }
        })
        .collect::<Vec<_>>();
    ranking.sort_by(|a, b| b.score.cmp(&a.score));
    ranking
}
