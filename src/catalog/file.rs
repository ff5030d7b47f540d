use super::{Catalog, CareerProfile};
use crate::error::{CareerError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "profile")]
    profiles: Vec<CareerProfile>,
}

impl Catalog {
    /// Load a replacement catalog from a TOML file of `[[profile]]` tables.
    pub fn load(path: &Path) -> Result<Catalog> {
        if !path.exists() {
            return Err(CareerError::InvalidCatalog(format!(
                "catalog file does not exist: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content).map_err(|e| match e {
            CareerError::InvalidCatalog(msg) => {
                CareerError::InvalidCatalog(format!("{}: {msg}", path.display()))
            }
            other => other,
        })?;
        debug!(
            path = %path.display(),
            profiles = catalog.len(),
            "loaded catalog file"
        );
        Ok(catalog)
    }

    pub fn from_toml_str(content: &str) -> Result<Catalog> {
        let file: CatalogFile = toml::from_str(content)
            .map_err(|e| CareerError::InvalidCatalog(e.to_string()))?;
        validate_profiles(&file.profiles)?;
        Ok(Catalog::new(file.profiles))
    }
}

fn validate_profiles(profiles: &[CareerProfile]) -> Result<()> {
    if profiles.is_empty() {
        return Err(CareerError::InvalidCatalog(
            "catalog must contain at least one [[profile]]".to_string(),
        ));
    }

    for (index, profile) in profiles.iter().enumerate() {
        if profile.career.trim().is_empty() {
            return Err(CareerError::InvalidCatalog(format!(
                "profile #{} has an empty career label",
                index + 1
            )));
        }
        if profile.skills.is_empty() {
            return Err(CareerError::InvalidCatalog(format!(
                "profile '{}' must list at least one skill",
                profile.career
            )));
        }
        for (field, tokens) in [("skills", &profile.skills), ("interests", &profile.interests)] {
            for token in tokens {
                if token.trim().is_empty() {
                    return Err(CareerError::InvalidCatalog(format!(
                        "profile '{}' has a blank entry in {field}",
                        profile.career
                    )));
                }
                if token.trim() != token || token.to_lowercase() != *token {
                    return Err(CareerError::InvalidCatalog(format!(
                        "profile '{}' {field} entry '{token}' must be lowercase without surrounding whitespace",
                        profile.career
                    )));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Education;
    use std::fs;
    use tempfile::TempDir;

    const TWO_PROFILES: &str = r#"
[[profile]]
career = "Baker"
skills = ["kneading", "baking"]
interests = ["food"]
education = "high school"

[[profile]]
career = "Chef"
skills = ["baking", "plating"]
education = "diploma"
"#;

    #[test]
    fn parses_profiles_in_file_order() {
        let catalog = Catalog::from_toml_str(TWO_PROFILES).expect("catalog should parse");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.profiles()[0].career, "Baker");
        assert_eq!(catalog.profiles()[0].education, Education::HighSchool);
        assert!(catalog.profiles()[1].interests.is_empty());
        assert_eq!(catalog.all_skills(), ["baking", "kneading", "plating"]);
    }

    #[test]
    fn tolerates_duplicate_career_labels() {
        let content = r#"
[[profile]]
career = "Chef"
skills = ["baking"]
education = "diploma"

[[profile]]
career = "Chef"
skills = ["plating"]
education = "master"
"#;
        let catalog = Catalog::from_toml_str(content).expect("duplicates are allowed");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn rejects_empty_catalog() {
        let err = Catalog::from_toml_str("").expect_err("empty catalog should fail");
        assert!(err.to_string().contains("at least one [[profile]]"));
    }

    #[test]
    fn rejects_profile_without_skills() {
        let content = r#"
[[profile]]
career = "Idler"
skills = []
education = "bachelor"
"#;
        let err = Catalog::from_toml_str(content).expect_err("skills are required");
        assert!(err.to_string().contains("at least one skill"));
    }

    #[test]
    fn rejects_uppercase_tokens() {
        let content = r#"
[[profile]]
career = "Analyst"
skills = ["SQL"]
education = "bachelor"
"#;
        let err = Catalog::from_toml_str(content).expect_err("tokens must be lowercase");
        assert!(err.to_string().contains("must be lowercase"));
    }

    #[test]
    fn rejects_unknown_education() {
        let content = r#"
[[profile]]
career = "Professor"
skills = ["lecturing"]
education = "phd"
"#;
        assert!(Catalog::from_toml_str(content).is_err());
    }

    #[test]
    fn load_reads_file_and_reports_missing_path() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("careers.toml");
        fs::write(&path, TWO_PROFILES).expect("catalog should write");

        let catalog = Catalog::load(&path).expect("catalog should load");
        assert_eq!(catalog.len(), 2);

        let err = Catalog::load(&dir.path().join("missing.toml")).expect_err("missing file");
        assert!(err.to_string().contains("does not exist"));
    }
}
