//! Skill coverage analysis and improvement suggestions

use crate::error::Result;
use crate::processing::matcher::{normalize, KeywordMatcher, MatchMode};
use crate::processing::skills::{SkillCategory, SkillDatabase};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Keywords named in a "missing" suggestion.
const MISSING_SUGGESTION_KEYWORDS: usize = 3;
/// Keywords named in a "few skills" suggestion.
const FEW_SUGGESTION_KEYWORDS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Categories with at most this many mentions are underrepresented.
    pub threshold: usize,
    /// Above the threshold, categories with fewer distinct keywords found get a nudge.
    pub min_distinct_keywords: usize,
    pub match_mode: MatchMode,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            threshold: 0,
            min_distinct_keywords: 2,
            match_mode: MatchMode::Word,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageStatus {
    /// At or below the threshold.
    Underrepresented,
    /// Above the threshold but backed by too few distinct keywords.
    Narrow,
    Covered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAnalysis {
    pub category: String,
    pub count: usize,
    pub keyword_counts: Vec<KeywordCount>,
    pub status: CoverageStatus,
}

impl CategoryAnalysis {
    pub fn found_keywords(&self) -> impl Iterator<Item = &KeywordCount> {
        self.keyword_counts.iter().filter(|k| k.count > 0)
    }

    pub fn missing_keywords(&self) -> impl Iterator<Item = &KeywordCount> {
        self.keyword_counts.iter().filter(|k| k.count == 0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: String,
    pub status: CoverageStatus,
    pub keywords: Vec<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub categories: Vec<CategoryAnalysis>,
    pub suggestions: Vec<Suggestion>,
    pub settings: AnalysisSettings,
}

impl AnalysisResult {
    /// Occurrence count per category.
    pub fn counts(&self) -> BTreeMap<&str, usize> {
        self.categories
            .iter()
            .map(|c| (c.category.as_str(), c.count))
            .collect()
    }

    pub fn underrepresented(&self) -> Vec<&str> {
        self.categories
            .iter()
            .filter(|c| c.status == CoverageStatus::Underrepresented)
            .map(|c| c.category.as_str())
            .collect()
    }

    /// Every keyword seen at least once, most mentioned first.
    ///
    /// A keyword listed under several categories appears once.
    pub fn detected_keywords(&self) -> Vec<KeywordCount> {
        let mut seen: HashMap<String, KeywordCount> = HashMap::new();
        for keyword in self.categories.iter().flat_map(|c| c.found_keywords()) {
            seen.entry(normalize(&keyword.keyword))
                .or_insert_with(|| keyword.clone());
        }

        let mut detected: Vec<KeywordCount> = seen.into_values().collect();
        detected.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.keyword.cmp(&b.keyword)));
        detected
    }

    pub fn total_mentions(&self) -> usize {
        self.detected_keywords().iter().map(|k| k.count).sum()
    }
}

/// Counts skill keywords in resume text against a skill database.
pub struct SkillAnalyzer {
    database: SkillDatabase,
    matcher: KeywordMatcher,
    settings: AnalysisSettings,
}

impl SkillAnalyzer {
    pub fn new(database: SkillDatabase, settings: AnalysisSettings) -> Result<Self> {
        let matcher = KeywordMatcher::new(
            database.categories().iter().flat_map(|c| c.keywords.iter()),
            settings.match_mode,
        )?;
        debug!(
            "Keyword matcher ready: {} categories, {} distinct keywords, {} mode",
            database.categories().len(),
            matcher.keyword_count(),
            matcher.mode()
        );

        Ok(Self {
            database,
            matcher,
            settings,
        })
    }

    pub fn database(&self) -> &SkillDatabase {
        &self.database
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let counts = self.matcher.count_all(text);

        let categories: Vec<CategoryAnalysis> = self
            .database
            .categories()
            .iter()
            .map(|category| self.analyze_category(category, &counts))
            .collect();

        let suggestions = categories
            .iter()
            .filter_map(|c| self.suggest(c))
            .collect();

        AnalysisResult {
            categories,
            suggestions,
            settings: self.settings,
        }
    }

    fn analyze_category(
        &self,
        category: &SkillCategory,
        counts: &HashMap<String, usize>,
    ) -> CategoryAnalysis {
        let keyword_counts: Vec<KeywordCount> = category
            .keywords
            .iter()
            .map(|keyword| KeywordCount {
                keyword: keyword.clone(),
                count: counts.get(&normalize(keyword)).copied().unwrap_or(0),
            })
            .collect();

        let count = keyword_counts.iter().map(|k| k.count).sum();
        let distinct_found = keyword_counts.iter().filter(|k| k.count > 0).count();
        let has_unfound = distinct_found < keyword_counts.len();

        let status = if count <= self.settings.threshold {
            CoverageStatus::Underrepresented
        } else if distinct_found < self.settings.min_distinct_keywords && has_unfound {
            CoverageStatus::Narrow
        } else {
            CoverageStatus::Covered
        };

        CategoryAnalysis {
            category: category.name.clone(),
            count,
            keyword_counts,
            status,
        }
    }

    fn suggest(&self, analysis: &CategoryAnalysis) -> Option<Suggestion> {
        match analysis.status {
            CoverageStatus::Covered => None,
            CoverageStatus::Underrepresented => {
                let mut keywords: Vec<String> = analysis
                    .missing_keywords()
                    .take(MISSING_SUGGESTION_KEYWORDS)
                    .map(|k| k.keyword.clone())
                    .collect();
                if keywords.is_empty() {
                    keywords = analysis
                        .keyword_counts
                        .iter()
                        .take(MISSING_SUGGESTION_KEYWORDS)
                        .map(|k| k.keyword.clone())
                        .collect();
                }

                let message = if analysis.count == 0 {
                    format!(
                        "Missing {} skills. Consider adding {}",
                        analysis.category,
                        keywords.join(", ")
                    )
                } else {
                    format!(
                        "Consider adding more evidence of {} ({} mention{}): mention skills like {}",
                        analysis.category,
                        analysis.count,
                        if analysis.count == 1 { "" } else { "s" },
                        keywords.join(", ")
                    )
                };

                Some(Suggestion {
                    category: analysis.category.clone(),
                    status: analysis.status,
                    keywords,
                    message,
                })
            }
            CoverageStatus::Narrow => {
                let keywords: Vec<String> = analysis
                    .missing_keywords()
                    .take(FEW_SUGGESTION_KEYWORDS)
                    .map(|k| k.keyword.clone())
                    .collect();
                let message = format!(
                    "Few {} skills. Could add {}",
                    analysis.category,
                    keywords.join(", ")
                );

                Some(Suggestion {
                    category: analysis.category.clone(),
                    status: analysis.status,
                    keywords,
                    message,
                })
            }
        }
    }
}
