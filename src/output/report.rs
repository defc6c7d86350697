//! Report structures combining the analysis with run metadata

use crate::processing::analyzer::{AnalysisResult, KeywordCount};
use crate::processing::matcher::MatchMode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything the formatters need to render one resume's analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillReport {
    pub metadata: ReportMetadata,
    pub analysis: AnalysisResult,
    /// Keywords found in the resume, most mentioned first
    pub detected_keywords: Vec<KeywordCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub analyzer_version: String,
    /// File name of the analyzed resume
    pub resume_file: String,
    /// Where the skill database came from
    pub skills_source: String,
    pub match_mode: MatchMode,
    pub threshold: usize,
    /// Characters of text extracted from the resume
    pub text_length: usize,
}

impl SkillReport {
    pub fn new(
        resume_path: &Path,
        skills_source: impl ToString,
        text: &str,
        analysis: AnalysisResult,
    ) -> Self {
        let resume_file = resume_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| resume_path.display().to_string());

        let metadata = ReportMetadata {
            generated_at: Utc::now(),
            analyzer_version: env!("CARGO_PKG_VERSION").to_string(),
            resume_file,
            skills_source: skills_source.to_string(),
            match_mode: analysis.settings.match_mode,
            threshold: analysis.settings.threshold,
            text_length: text.chars().count(),
        };

        Self {
            metadata,
            detected_keywords: analysis.detected_keywords(),
            analysis,
        }
    }

    pub fn has_suggestions(&self) -> bool {
        !self.analysis.suggestions.is_empty()
    }

    /// Categories sorted by mention count, highest first, ties by name.
    pub fn ranked_categories(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .analysis
            .categories
            .iter()
            .map(|c| (c.category.as_str(), c.count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}
