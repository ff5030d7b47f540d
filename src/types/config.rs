use crate::error::CareerError;
use crate::matcher::{ScoringPolicy, Weights};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CareerConfig {
    pub matcher: Option<MatcherConfig>,
    pub catalog: Option<CatalogConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    Simple,
    Weighted,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatcherConfig {
    pub policy: Option<PolicyKind>,
    pub weights: Option<HashMap<String, u32>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    Text,
    Json,
    Md,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: Option<FormatKind>,
}

const ALLOWED_WEIGHT_KEYS: [&str; 3] = ["skills", "interests", "education"];

/// Largest accepted weight. Keeps every weighted score well inside `u32`.
const MAX_WEIGHT: u32 = 1_000_000;

impl CareerConfig {
    pub fn policy_kind(&self) -> PolicyKind {
        self.matcher
            .as_ref()
            .and_then(|matcher| matcher.policy)
            .unwrap_or(PolicyKind::Weighted)
    }

    pub fn weights(&self) -> Weights {
        let defaults = Weights::default();
        match self
            .matcher
            .as_ref()
            .and_then(|matcher| matcher.weights.as_ref())
        {
            Some(weights) => Weights {
                skills: *weights.get("skills").unwrap_or(&defaults.skills),
                interests: *weights.get("interests").unwrap_or(&defaults.interests),
                education: *weights.get("education").unwrap_or(&defaults.education),
            },
            None => defaults,
        }
    }

    /// Scoring policy for `kind`, falling back to the configured one.
    pub fn scoring_policy(&self, kind: Option<PolicyKind>) -> ScoringPolicy {
        match kind.unwrap_or_else(|| self.policy_kind()) {
            PolicyKind::Simple => ScoringPolicy::Simple,
            PolicyKind::Weighted => ScoringPolicy::Weighted(self.weights()),
        }
    }

    pub fn catalog_path(&self) -> Option<&str> {
        self.catalog
            .as_ref()
            .and_then(|catalog| catalog.path.as_deref())
    }

    pub fn output_format(&self) -> FormatKind {
        self.output
            .as_ref()
            .and_then(|output| output.format)
            .unwrap_or(FormatKind::Text)
    }

    pub fn validate(&self) -> Result<(), CareerError> {
        if let Some(weights) = self
            .matcher
            .as_ref()
            .and_then(|matcher| matcher.weights.as_ref())
        {
            let mut unknown = weights
                .keys()
                .filter(|key| !ALLOWED_WEIGHT_KEYS.contains(&key.as_str()))
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                unknown.sort();
                return Err(CareerError::ConfigParse(format!(
                    "matcher.weights contains unknown key(s): {}",
                    unknown.join(", ")
                )));
            }

            for key in ALLOWED_WEIGHT_KEYS {
                if let Some(value) = weights.get(key) {
                    if *value > MAX_WEIGHT {
                        return Err(CareerError::ConfigParse(format!(
                            "matcher.weights.{key} must be at most {MAX_WEIGHT} (got {value})"
                        )));
                    }
                }
            }
        }

        let weights = self.weights();
        if weights.skills == 0 && weights.interests == 0 && weights.education == 0 {
            return Err(CareerError::ConfigParse(
                "matcher.weights cannot all be zero".to_string(),
            ));
        }

        if let Some(path) = self.catalog_path() {
            if path.trim().is_empty() {
                return Err(CareerError::ConfigParse(
                    "catalog.path must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
