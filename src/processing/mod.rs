//! Skill database, keyword matching and analysis

pub mod analyzer;
pub mod matcher;
pub mod skills;

pub use analyzer::{AnalysisResult, AnalysisSettings, SkillAnalyzer};
pub use skills::{SkillDatabase, SkillSource};
