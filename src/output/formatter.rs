//! Output formatters for skill reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::SkillReport;
use crate::processing::analyzer::CoverageStatus;
use colored::{Color, Colorize};

/// Trait for rendering a skill report
pub trait OutputFormatter {
    fn format_report(&self, report: &SkillReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal output with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON for scripting and further processing
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown for pasting into notes or tickets
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Dispatches a report to the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        let line = format!("=== {} ===", title);
        if self.use_colors {
            format!("\n{}\n", line.as_str().color(Color::Blue).bold())
        } else {
            format!("\n{}\n", line)
        }
    }

    fn format_status_icon(&self, status: CoverageStatus) -> String {
        if self.use_colors {
            match status {
                CoverageStatus::Underrepresented => "⚠️ ".to_string(),
                CoverageStatus::Narrow => "ℹ️ ".to_string(),
                CoverageStatus::Covered => "✅".to_string(),
            }
        } else {
            match status {
                CoverageStatus::Underrepresented => "[!]".to_string(),
                CoverageStatus::Narrow => "[-]".to_string(),
                CoverageStatus::Covered => "[+]".to_string(),
            }
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &SkillReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!(
            "\n📄 Analyzing: {}\n",
            self.colorize(&report.metadata.resume_file, Color::Cyan)
        ));

        output.push_str(&self.format_header("SKILL ANALYSIS"));
        if report.detected_keywords.is_empty() {
            output.push_str("No skills detected in resume.\n");
        } else {
            for keyword in &report.detected_keywords {
                output.push_str(&format!(
                    "• {}: {} mention{}\n",
                    self.colorize(&keyword.keyword, Color::Green),
                    keyword.count,
                    plural(keyword.count)
                ));
            }
        }

        output.push_str(&self.format_header("SKILL CATEGORIES"));
        for category in &report.analysis.categories {
            output.push_str(&format!(
                "{} {}: {} mention{}\n",
                self.format_status_icon(category.status),
                category.category,
                category.count,
                plural(category.count)
            ));

            if self.detailed {
                for keyword in &category.keyword_counts {
                    let line = format!("    - {}: {}", keyword.keyword, keyword.count);
                    let color = if keyword.count > 0 {
                        Color::White
                    } else {
                        Color::BrightBlack
                    };
                    output.push_str(&self.colorize(&line, color));
                    output.push('\n');
                }
            }
        }

        if report.has_suggestions() {
            output.push_str(&self.format_header("SUGGESTIONS"));
            for suggestion in &report.analysis.suggestions {
                let color = match suggestion.status {
                    CoverageStatus::Underrepresented => Color::Yellow,
                    _ => Color::Cyan,
                };
                output.push_str(&format!(
                    "{} {}\n",
                    self.format_status_icon(suggestion.status),
                    self.colorize(&suggestion.message, color)
                ));
            }
        } else {
            output.push_str(&format!(
                "\n{} {}\n",
                self.format_status_icon(CoverageStatus::Covered),
                self.colorize("All good! Your resume covers diverse skill areas.", Color::Green)
            ));
        }

        if self.detailed {
            output.push_str(&format!(
                "\n{}\n",
                self.colorize(
                    &format!(
                        "Skills: {} | Match mode: {} | Threshold: {} | Text: {} chars",
                        report.metadata.skills_source,
                        report.metadata.match_mode,
                        report.metadata.threshold,
                        report.metadata.text_length
                    ),
                    Color::BrightBlack
                )
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &SkillReport) -> Result<String> {
        let mut output = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        output.push('\n');
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn status_label(status: CoverageStatus) -> &'static str {
        match status {
            CoverageStatus::Underrepresented => "⚠️ Underrepresented",
            CoverageStatus::Narrow => "ℹ️ Narrow",
            CoverageStatus::Covered => "✅ Covered",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &SkillReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("# Skill Analysis: {}\n\n", report.metadata.resume_file));

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Skills:** {} | **Match mode:** {} | **Threshold:** {}\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.skills_source,
                report.metadata.match_mode,
                report.metadata.threshold
            ));
        }

        output.push_str("## Skill Categories\n\n");
        output.push_str("| Category | Mentions | Status |\n");
        output.push_str("|----------|----------|--------|\n");
        for category in &report.analysis.categories {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                category.category.replace('|', "\\|"),
                category.count,
                Self::status_label(category.status)
            ));
        }

        output.push_str("\n## Detected Skills\n\n");
        if report.detected_keywords.is_empty() {
            output.push_str("No skills detected in resume.\n");
        } else {
            for keyword in &report.detected_keywords {
                output.push_str(&format!(
                    "- **{}**: {} mention{}\n",
                    keyword.keyword,
                    keyword.count,
                    plural(keyword.count)
                ));
            }
        }

        output.push_str("\n## Suggestions\n\n");
        if report.has_suggestions() {
            for suggestion in &report.analysis.suggestions {
                output.push_str(&format!("- {}\n", suggestion.message));
            }
        } else {
            output.push_str("All good! Your resume covers diverse skill areas.\n");
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true)
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &SkillReport, format: &OutputFormat) -> Result<String> {
        let formatter: &dyn OutputFormatter = match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        };
        formatter.format_report(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}
