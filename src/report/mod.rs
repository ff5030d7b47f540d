pub mod json;
pub mod md;
pub mod text;

use crate::catalog::Catalog;
use crate::error::CareerError;
use crate::types::report::PredictionReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Md,
}

pub fn render(report: &PredictionReport, format: OutputFormat) -> Result<String, CareerError> {
    match format {
        OutputFormat::Text => Ok(text::prediction(report)),
        OutputFormat::Json => json::to_json(report).map_err(CareerError::Json),
        OutputFormat::Md => Ok(md::prediction(report)),
    }
}

pub fn render_catalog(catalog: &Catalog, format: OutputFormat) -> Result<String, CareerError> {
    match format {
        OutputFormat::Text => Ok(text::catalog(catalog)),
        OutputFormat::Json => json::to_json(catalog.profiles()).map_err(CareerError::Json),
        OutputFormat::Md => Ok(md::catalog(catalog)),
    }
}
