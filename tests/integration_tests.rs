//! Integration tests for the resume skill analyzer

use resume_skill_analyzer::input::{PdfExtractor, TextExtractor};
use resume_skill_analyzer::processing::analyzer::{AnalysisSettings, CoverageStatus, SkillAnalyzer};
use resume_skill_analyzer::processing::skills::{SkillDatabase, SkillSource};
use resume_skill_analyzer::{analyze_resume, SkillAnalyzerError};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Run the binary from an empty directory with an empty config so local files can't leak in.
fn run_cli(args: &[&str]) -> Output {
    let dir = tempfile::tempdir().unwrap();
    run_cli_in(dir.path(), args)
}

fn run_cli_in(dir: &Path, args: &[&str]) -> Output {
    let config = dir.join("config.toml");
    std::fs::write(&config, "").unwrap();

    Command::new(env!("CARGO_BIN_EXE_resume-skill-analyzer"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config)
        .arg("--no-color")
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_pdf_text_extraction_keeps_page_order() {
    let text = PdfExtractor.extract(&fixture("sample_resume.pdf")).unwrap();

    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Kubernetes"));
    assert!(text.find("Jane Doe").unwrap() < text.find("Leadership").unwrap());
}

#[test]
fn test_blank_pdf_yields_empty_text() {
    let text = PdfExtractor.extract(&fixture("blank_page.pdf")).unwrap();
    assert!(text.trim().is_empty());
}

#[test]
fn test_non_pdf_is_rejected() {
    let result = PdfExtractor.extract(&fixture("not_a_pdf.pdf"));
    assert!(matches!(result, Err(SkillAnalyzerError::PdfExtraction(_))));
}

#[test]
fn test_undecodable_pdf_content_is_rejected() {
    let result = PdfExtractor.extract(&fixture("missing_font.pdf"));
    assert!(matches!(result, Err(SkillAnalyzerError::PdfExtraction(_))));
}

#[test]
fn test_nonexistent_file() {
    let result = PdfExtractor.extract(&fixture("nonexistent.pdf"));
    assert!(matches!(result, Err(SkillAnalyzerError::FileNotFound(_))));
}

#[test]
fn test_analyze_sample_resume() {
    let analyzer = SkillAnalyzer::new(SkillDatabase::builtin(), AnalysisSettings::default()).unwrap();
    let report = analyze_resume(
        &PdfExtractor,
        &fixture("sample_resume.pdf"),
        &analyzer,
        &SkillSource::BuiltIn,
    )
    .unwrap();

    let counts = report.analysis.counts();
    // Python x3 and SQL x1; "Google" must not count as Go
    assert_eq!(counts["Programming"], 4);
    assert_eq!(counts["DevOps"], 2);
    assert_eq!(counts["Soft Skills"], 2);
    assert_eq!(counts["ML/AI"], 0);

    let status = |name: &str| {
        report
            .analysis
            .categories
            .iter()
            .find(|c| c.category == name)
            .unwrap()
            .status
    };
    assert_eq!(status("ML/AI"), CoverageStatus::Underrepresented);
    assert_eq!(status("Data"), CoverageStatus::Narrow);
    assert_eq!(status("Programming"), CoverageStatus::Covered);

    assert_eq!(report.metadata.resume_file, "sample_resume.pdf");
    assert_eq!(report.detected_keywords[0].keyword, "Python");
    assert_eq!(report.detected_keywords[0].count, 3);
}

#[test]
fn test_analyze_blank_resume_suggests_every_category() {
    let analyzer = SkillAnalyzer::new(SkillDatabase::builtin(), AnalysisSettings::default()).unwrap();
    let report = analyze_resume(
        &PdfExtractor,
        &fixture("blank_page.pdf"),
        &analyzer,
        &SkillSource::BuiltIn,
    )
    .unwrap();

    assert!(report.detected_keywords.is_empty());
    assert_eq!(report.analysis.suggestions.len(), 5);
}

#[test]
fn test_cli_console_report() {
    let output = run_cli(&[fixture("sample_resume.pdf").to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("📄 Analyzing: sample_resume.pdf"));
    assert!(out.contains("=== SKILL ANALYSIS ==="));
    assert!(out.contains("• Python: 3 mentions"));
    assert!(out.contains("=== SUGGESTIONS ==="));
    assert!(out.contains("Missing ML/AI skills. Consider adding Machine Learning, Deep Learning, TensorFlow"));
    assert!(out.contains("Few Data skills. Could add NoSQL, Spark"));
}

#[test]
fn test_cli_missing_resume_fails_without_stdout() {
    let output = run_cli(&["does-not-exist.pdf"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("File not found: does-not-exist.pdf"));
}

#[test]
fn test_cli_corrupt_pdf_fails() {
    let output = run_cli(&[fixture("not_a_pdf.pdf").to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("PDF extraction error"));
}

#[test]
fn test_cli_undecodable_pdf_fails_cleanly() {
    let output = run_cli(&[fixture("missing_font.pdf").to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let err = stderr(&output);
    assert!(err.contains("Error:"));
    assert!(err.contains("PDF extraction error"));
    assert!(!err.contains("panicked"));
}

#[test]
fn test_cli_duplicate_category_fails() {
    let dir = tempfile::tempdir().unwrap();
    let skills = dir.path().join("dup.json");
    std::fs::write(&skills, r#"{"Data": ["sql"], "Data": ["spark"]}"#).unwrap();

    let output = run_cli_in(
        dir.path(),
        &[
            fixture("sample_resume.pdf").to_str().unwrap(),
            "--skills",
            skills.to_str().unwrap(),
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("duplicate category 'Data'"));
}

#[test]
fn test_cli_empty_category_fails() {
    let output = run_cli(&[
        fixture("sample_resume.pdf").to_str().unwrap(),
        "--skills",
        fixture("empty_category.json").to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let err = stderr(&output);
    assert!(err.contains("Invalid skill database"));
    assert!(err.contains("Cloud"));
}

#[test]
fn test_cli_malformed_skills_fails() {
    let output = run_cli(&[
        fixture("sample_resume.pdf").to_str().unwrap(),
        "--skills",
        fixture("malformed_skills.json").to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("malformed JSON"));
}

#[test]
fn test_cli_custom_skills_json_output() {
    let output = run_cli(&[
        fixture("sample_resume.pdf").to_str().unwrap(),
        "--skills",
        fixture("custom_skills.json").to_str().unwrap(),
        "--output",
        "json",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let categories = value["analysis"]["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 3);
    assert_eq!(categories[0]["category"], "Programming");
    assert_eq!(categories[0]["count"], 3);
    assert_eq!(categories[0]["status"], "narrow");
    assert_eq!(categories[1]["status"], "covered");
    assert_eq!(categories[2]["status"], "underrepresented");

    let messages: Vec<&str> = value["analysis"]["suggestions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["message"].as_str().unwrap())
        .collect();
    assert_eq!(
        messages,
        vec![
            "Few Programming skills. Could add Rust",
            "Missing Cloud skills. Consider adding AWS, GCP",
        ]
    );
}

#[test]
fn test_cli_picks_up_local_skills_db() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("skills_db.json"), r#"{"Orchestration": ["Kubernetes"]}"#).unwrap();

    let output = run_cli_in(
        dir.path(),
        &[fixture("sample_resume.pdf").to_str().unwrap(), "-o", "json"],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["analysis"]["categories"][0]["category"], "Orchestration");
    assert_eq!(value["analysis"]["categories"][0]["count"], 1);
    assert!(value["metadata"]["skills_source"]
        .as_str()
        .unwrap()
        .ends_with("(working directory)"));
}

#[test]
fn test_cli_substring_mode_counts_inside_words() {
    let output = run_cli(&[
        fixture("sample_resume.pdf").to_str().unwrap(),
        "--match-mode",
        "substring",
        "-o",
        "json",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let programming = &value["analysis"]["categories"][0];
    let go = programming["keyword_counts"]
        .as_array()
        .unwrap()
        .iter()
        .find(|k| k["keyword"] == "Go")
        .unwrap();
    assert!(go["count"].as_u64().unwrap() >= 1);
    assert_eq!(value["metadata"]["match_mode"], "substring");
}

#[test]
fn test_cli_markdown_output() {
    let output = run_cli(&[fixture("sample_resume.pdf").to_str().unwrap(), "-o", "markdown"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.starts_with("# Skill Analysis: sample_resume.pdf"));
    assert!(out.contains("| Programming | 4 | ✅ Covered |"));
}

#[test]
fn test_cli_print_default_skills() {
    let output = run_cli(&["--print-default-skills"]);
    assert!(output.status.success());

    let json = stdout(&output);
    let database = SkillDatabase::from_json_str(&json).unwrap();
    assert_eq!(database, SkillDatabase::builtin());
}

#[test]
fn test_cli_print_config_reflects_overrides() {
    let output = run_cli(&["--print-config", "--threshold", "2"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("threshold = 2"));
}

#[test]
fn test_cli_rejects_unknown_output_format() {
    let output = run_cli(&[fixture("sample_resume.pdf").to_str().unwrap(), "-o", "html"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("Invalid output format"));
}
