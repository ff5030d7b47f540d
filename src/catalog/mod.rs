pub mod data;
pub mod file;

use crate::error::CareerError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Education {
    #[serde(rename = "high school")]
    HighSchool,
    #[serde(rename = "diploma")]
    Diploma,
    #[serde(rename = "bachelor")]
    Bachelor,
    #[serde(rename = "master")]
    Master,
}

impl Education {
    pub const ALL: [Education; 4] = [
        Education::HighSchool,
        Education::Diploma,
        Education::Bachelor,
        Education::Master,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Education::HighSchool => "high school",
            Education::Diploma => "diploma",
            Education::Bachelor => "bachelor",
            Education::Master => "master",
        }
    }
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Education {
    type Err = CareerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(&['-', '_'][..], " ");
        Education::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| CareerError::InvalidEducation(s.trim().to_string()))
    }
}

/// One static career record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerProfile {
    pub career: String,
    pub skills: BTreeSet<String>,
    #[serde(default)]
    pub interests: BTreeSet<String>,
    pub education: Education,
}

impl CareerProfile {
    pub fn new(career: &str, skills: &[&str], interests: &[&str], education: Education) -> Self {
        Self {
            career: career.to_string(),
            skills: skills.iter().map(|skill| skill.to_string()).collect(),
            interests: interests.iter().map(|interest| interest.to_string()).collect(),
            education,
        }
    }
}

/// Immutable set of career profiles plus the sorted, deduplicated token
/// lists used to populate selection prompts.
#[derive(Debug, Clone)]
pub struct Catalog {
    profiles: Vec<CareerProfile>,
    all_skills: Vec<String>,
    all_interests: Vec<String>,
}

lazy_static::lazy_static! {
    static ref BUILTIN: Catalog = Catalog::new(data::reference_profiles());
}

impl Catalog {
    pub fn new(profiles: Vec<CareerProfile>) -> Self {
        let all_skills = profiles
            .iter()
            .flat_map(|profile| profile.skills.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let all_interests = profiles
            .iter()
            .flat_map(|profile| profile.interests.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Self {
            profiles,
            all_skills,
            all_interests,
        }
    }

    /// The compiled-in reference catalog. Built on first access, shared for
    /// the rest of the process.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn profiles(&self) -> &[CareerProfile] {
        &self.profiles
    }

    pub fn all_skills(&self) -> &[String] {
        &self.all_skills
    }

    pub fn all_interests(&self) -> &[String] {
        &self.all_interests
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// First profile carrying `career`, compared case-insensitively.
    #[allow(dead_code)]
    pub fn find(&self, career: &str) -> Option<&CareerProfile> {
        self.profiles
            .iter()
            .find(|profile| profile.career.eq_ignore_ascii_case(career.trim()))
    }
}
