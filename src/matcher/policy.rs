use super::Selection;
use crate::catalog::CareerProfile;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Score = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weights {
    pub skills: Score,
    pub interests: Score,
    pub education: Score,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            skills: 3,
            interests: 2,
            education: 1,
        }
    }
}

/// How a selection is scored against a profile. One policy applies per
/// prediction; the two are never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringPolicy {
    /// Count of selected skills found in the profile.
    Simple,
    /// Weighted sum of skill overlap, interest overlap and an education match.
    Weighted(Weights),
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        ScoringPolicy::Weighted(Weights::default())
    }
}

impl ScoringPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            ScoringPolicy::Simple => "simple",
            ScoringPolicy::Weighted(_) => "weighted",
        }
    }
}

impl fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringPolicy::Simple => f.write_str("simple"),
            ScoringPolicy::Weighted(weights) => write!(
                f,
                "weighted (skills x{}, interests x{}, education x{})",
                weights.skills, weights.interests, weights.education
            ),
        }
    }
}

/// Overlap between one selection and one profile, before weighting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlap<'a> {
    pub skills: Vec<&'a str>,
    pub interests: Vec<&'a str>,
    pub education: bool,
}

pub fn overlap<'a>(profile: &'a CareerProfile, selection: &Selection) -> Overlap<'a> {
    let skills = profile
        .skills
        .iter()
        .filter(|skill| selection.skills.contains(*skill))
        .map(String::as_str)
        .collect();
    let interests = match &selection.interests {
        Some(selected) => profile
            .interests
            .iter()
            .filter(|interest| selected.contains(*interest))
            .map(String::as_str)
            .collect(),
        None => Vec::new(),
    };
    let education = selection.education == Some(profile.education);

    Overlap {
        skills,
        interests,
        education,
    }
}

impl Overlap<'_> {
    pub fn score(&self, policy: &ScoringPolicy) -> Score {
        let skills = self.skills.len() as Score;
        match policy {
            ScoringPolicy::Simple => skills,
            // Saturates so oversized weights can never panic or wrap.
            ScoringPolicy::Weighted(weights) => weights
                .skills
                .saturating_mul(skills)
                .saturating_add(weights.interests.saturating_mul(self.interests.len() as Score))
                .saturating_add(weights.education.saturating_mul(Score::from(self.education))),
        }
    }
}

pub fn score(profile: &CareerProfile, selection: &Selection, policy: &ScoringPolicy) -> Score {
    overlap(profile, selection).score(policy)
}
