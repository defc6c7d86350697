//! Resume skill analyzer library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use config::Config;
pub use error::{Result, SkillAnalyzerError};

use input::TextExtractor;
use log::info;
use output::SkillReport;
use processing::{analyzer::SkillAnalyzer, skills::SkillSource};
use std::path::Path;

/// Extract the resume text, analyze it and wrap the result in a report.
pub fn analyze_resume<E: TextExtractor>(
    extractor: &E,
    resume: &Path,
    analyzer: &SkillAnalyzer,
    skills_source: &SkillSource,
) -> Result<SkillReport> {
    info!("Extracting text from {}", resume.display());
    let text = extractor.extract(resume)?;
    info!("Extracted {} characters", text.chars().count());

    let analysis = analyzer.analyze(&text);
    info!(
        "Found {} skill mentions, {} suggestions",
        analysis.total_mentions(),
        analysis.suggestions.len()
    );

    Ok(SkillReport::new(resume, skills_source, &text, analysis))
}
