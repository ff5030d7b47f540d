use thiserror::Error;

#[derive(Error, Debug)]
pub enum CareerError {
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("unknown education level: {0} (expected high school, diploma, bachelor or master)")]
    InvalidEducation(String),

    #[error("please select at least one skill")]
    NoSkillsSelected,

    #[error("prompt failed: {0}")]
    Prompt(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CareerError>;
