//! Presentation layer
//!
//! Turns a [`RecommendationReport`] into user-facing text. This is also the
//! boundary where pipeline failures stop propagating: an error becomes a
//! single diagnostic line instead of a crash.

pub mod formatters;
pub mod lookup_tables;

pub use formatters::{JsonFormatter, MarkdownFormatter};
pub use lookup_tables::{
    attribute_pair_description, category_profile, highlights, CategoryProfile, Highlight,
};

use crate::recommender::RecommendationReport;
use clap::ValueEnum;

/// Rendering used for reports and diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

/// Render a report, or a one-line diagnostic if the pipeline failed
pub fn render_or_diagnostic(
    result: anyhow::Result<RecommendationReport>,
    format: OutputFormat,
) -> String {
    let rendered = result.and_then(|report| match format {
        OutputFormat::Markdown => Ok(MarkdownFormatter::format(&report)),
        OutputFormat::Json => Ok(JsonFormatter::format(&report)?),
    });

    match rendered {
        Ok(text) => text,
        Err(err) => {
            tracing::error!("Recommendation failed: {:#}", err);
            diagnostic(&err, format)
        }
    }
}

/// One-line, user-facing rendering of a failure
pub fn diagnostic(err: &anyhow::Error, format: OutputFormat) -> String {
    let message = format!("Unable to compute recommendations: {:#}", err);
    match format {
        OutputFormat::Markdown => format!("⚠️ {}", message),
        OutputFormat::Json => serde_json::json!({ "error": message }).to_string(),
    }
}
