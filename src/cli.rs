//! CLI interface for the skill analyzer

use crate::config::{Config, OutputFormat};
use crate::processing::matcher::MatchMode;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "resume-skill-analyzer")]
#[command(version)]
#[command(about = "Skill insights and improvement suggestions for PDF resumes")]
#[command(long_about = "Extract text from a PDF resume, count skill keywords per category and suggest missing or underrepresented skill areas")]
pub struct Cli {
    /// Path to the PDF resume
    #[arg(required_unless_present_any = ["print_default_skills", "print_config"])]
    pub resume: Option<PathBuf>,

    /// Custom JSON skill database
    #[arg(short, long)]
    pub skills: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Mention count at or below which a category is underrepresented
    #[arg(short, long)]
    pub threshold: Option<usize>,

    /// Keyword matching: word, substring
    #[arg(short, long)]
    pub match_mode: Option<String>,

    /// Output format: console, json, markdown
    #[arg(short, long)]
    pub output: Option<String>,

    /// List every keyword count under its category
    #[arg(short, long)]
    pub detailed: bool,

    /// Disable colored console output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the built-in skill database as JSON and exit
    #[arg(long)]
    pub print_default_skills: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Fold command-line overrides into the loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) -> Result<(), String> {
        if let Some(threshold) = self.threshold {
            config.analysis.threshold = threshold;
        }
        if let Some(mode) = &self.match_mode {
            config.analysis.match_mode = mode.parse::<MatchMode>()?;
        }
        if let Some(format) = &self.output {
            config.output.format = parse_output_format(format)?;
        }
        if let Some(skills) = &self.skills {
            config.analysis.skills_file = Some(skills.clone());
        }
        if self.detailed {
            config.output.detailed = true;
        }
        if self.no_color {
            config.output.color_output = false;
        }
        Ok(())
    }
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}
