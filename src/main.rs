//! Resume skill analyzer: skill keyword insights for PDF resumes

use anyhow::Context;
use clap::Parser;
use log::debug;
use resume_skill_analyzer::cli::Cli;
use resume_skill_analyzer::input::PdfExtractor;
use resume_skill_analyzer::output::ReportGenerator;
use resume_skill_analyzer::processing::analyzer::SkillAnalyzer;
use resume_skill_analyzer::processing::skills::SkillDatabase;
use resume_skill_analyzer::{analyze_resume, Config, SkillAnalyzerError};
use std::process;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Nothing reaches stdout unless the whole run succeeded
    match run(cli) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            debug!("Command failed: {:?}", e);
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config)
        .map_err(SkillAnalyzerError::InvalidInput)?;
    config.validate()?;

    if cli.print_default_skills {
        let mut json = SkillDatabase::builtin().to_json_pretty()?;
        json.push('\n');
        return Ok(json);
    }

    if cli.print_config {
        return Ok(config.to_toml_string()?);
    }

    let resume = cli
        .resume
        .context("A resume path is required")?;

    let working_dir = std::env::current_dir().context("Cannot determine working directory")?;
    let (database, source) =
        SkillDatabase::resolve(config.analysis.skills_file.as_deref(), &working_dir)?;
    let analyzer = SkillAnalyzer::new(database, config.analysis_settings())?;
    debug!(
        "Skill database from {}: {} categories, {} keywords (threshold {}, {} mode)",
        source,
        analyzer.database().categories().len(),
        analyzer.database().keyword_count(),
        analyzer.settings().threshold,
        analyzer.settings().match_mode
    );
    let report = analyze_resume(&PdfExtractor, &resume, &analyzer, &source)
        .with_context(|| format!("Failed to analyze {}", resume.display()))?;

    if !config.output.color_output {
        colored::control::set_override(false);
    }

    let generator = ReportGenerator::with_options(
        config.output.color_output,
        config.output.detailed,
        true,
        true,
    );
    Ok(generator.generate_report(&report, &config.output.format)?)
}
