use crate::catalog::Education;
use serde::Serialize;
use std::collections::BTreeSet;

/// The user's choices for one prediction request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub skills: BTreeSet<String>,
    pub interests: Option<BTreeSet<String>>,
    pub education: Option<Education>,
}

pub fn normalize_token(token: &str) -> Option<String> {
    let normalized = token.trim().to_lowercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

fn normalize_all<I, S>(tokens: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .filter_map(|token| normalize_token(token.as_ref()))
        .collect()
}

impl Selection {
    pub fn from_skills<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            skills: normalize_all(skills),
            interests: None,
            education: None,
        }
    }

    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.interests = Some(normalize_all(interests));
        self
    }

    pub fn with_education(mut self, education: Option<Education>) -> Self {
        self.education = education;
        self
    }

    pub fn has_skills(&self) -> bool {
        !self.skills.is_empty()
    }
}
