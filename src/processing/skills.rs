//! Skill database: category name to keyword aliases

use crate::error::{Result, SkillAnalyzerError};
use log::{debug, info, warn};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Looked up in the working directory when no database is given explicitly.
pub const DEFAULT_SKILLS_FILE: &str = "skills_db.json";

const BUILTIN_SKILLS: &[(&str, &[&str])] = &[
    (
        "Programming",
        &["Python", "Java", "C++", "JavaScript", "SQL", "R", "Go"],
    ),
    (
        "Data",
        &["SQL", "NoSQL", "Spark", "Pandas", "Tableau", "PowerBI", "Excel"],
    ),
    (
        "ML/AI",
        &["Machine Learning", "Deep Learning", "TensorFlow", "PyTorch", "NLP"],
    ),
    (
        "DevOps",
        &["Docker", "Kubernetes", "AWS", "Azure", "CI/CD", "Terraform"],
    ),
    (
        "Soft Skills",
        &["Leadership", "Communication", "Teamwork", "Problem Solving"],
    ),
];

#[derive(Debug, Clone, PartialEq)]
pub struct SkillCategory {
    pub name: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillDatabase {
    categories: Vec<SkillCategory>,
}

/// Where the active skill database came from.
#[derive(Debug, Clone, PartialEq)]
pub enum SkillSource {
    Custom(PathBuf),
    WorkingDirectory(PathBuf),
    BuiltIn,
}

impl fmt::Display for SkillSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillSource::Custom(path) => write!(f, "{}", path.display()),
            SkillSource::WorkingDirectory(path) => write!(f, "{} (working directory)", path.display()),
            SkillSource::BuiltIn => write!(f, "built-in"),
        }
    }
}

impl SkillDatabase {
    pub fn builtin() -> Self {
        let categories = BUILTIN_SKILLS
            .iter()
            .map(|(name, keywords)| SkillCategory {
                name: name.to_string(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            })
            .collect();
        Self { categories }
    }

    /// Build a database from category/keyword pairs, enforcing the same rules as JSON input.
    pub fn from_categories<I, N, K>(categories: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, Vec<K>)>,
        N: Into<String>,
        K: Into<String>,
    {
        let mut seen_names = HashSet::new();
        let mut validated = Vec::new();

        for (name, keywords) in categories {
            let name: String = name.into();
            let keywords: Vec<String> = keywords.into_iter().map(Into::into).collect();
            let category = Self::validate_category(name, keywords)?;

            if !seen_names.insert(category.name.clone()) {
                return Err(SkillAnalyzerError::InvalidDatabase(format!(
                    "duplicate category '{}'",
                    category.name
                )));
            }
            validated.push(category);
        }

        if validated.is_empty() {
            return Err(SkillAnalyzerError::InvalidDatabase(
                "database contains no skill categories".to_string(),
            ));
        }

        Ok(Self {
            categories: validated,
        })
    }

    /// Parse a flat JSON object of `"category": ["keyword", ...]`.
    ///
    /// Keys are read in document order and repeated keys are kept, so a category
    /// defined twice is rejected instead of silently replaced.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let RawCategories(entries) = serde_json::from_str(json).map_err(|e| {
            if e.is_data() {
                SkillAnalyzerError::InvalidDatabase(e.to_string())
            } else {
                SkillAnalyzerError::InvalidDatabase(format!("malformed JSON: {}", e))
            }
        })?;

        let mut categories = Vec::with_capacity(entries.len());
        for (name, keywords) in entries {
            let keywords = match keywords {
                Value::Array(items) => items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(keyword) => Ok(keyword),
                        other => Err(SkillAnalyzerError::InvalidDatabase(format!(
                            "category '{}' contains a {} where a keyword string was expected",
                            name,
                            json_type_name(&other)
                        ))),
                    })
                    .collect::<Result<Vec<String>>>()?,
                other => {
                    return Err(SkillAnalyzerError::InvalidDatabase(format!(
                        "category '{}' must be an array of keywords, found {}",
                        name,
                        json_type_name(&other)
                    )))
                }
            };
            categories.push((name, keywords));
        }

        Self::from_categories(categories)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SkillAnalyzerError::from_io(e, path))?;
        Self::from_json_str(&content).map_err(|e| match e {
            SkillAnalyzerError::InvalidDatabase(msg) => {
                SkillAnalyzerError::InvalidDatabase(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Pick the database for this run.
    ///
    /// An explicit path must load; otherwise `skills_db.json` in `working_dir` is used
    /// when present, and the built-in database as a last resort.
    pub fn resolve(explicit: Option<&Path>, working_dir: &Path) -> Result<(Self, SkillSource)> {
        if let Some(path) = explicit {
            info!("Loading skill database from {}", path.display());
            let database = Self::from_file(path)?;
            return Ok((database, SkillSource::Custom(path.to_path_buf())));
        }

        let local = working_dir.join(DEFAULT_SKILLS_FILE);
        if local.is_file() {
            info!("Loading skill database from {}", local.display());
            let database = Self::from_file(&local)?;
            return Ok((database, SkillSource::WorkingDirectory(local)));
        }

        debug!("Using built-in skill database");
        Ok((Self::builtin(), SkillSource::BuiltIn))
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&SkillCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn keyword_count(&self) -> usize {
        self.categories.iter().map(|c| c.keywords.len()).sum()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        let object: Map<String, Value> = self
            .categories
            .iter()
            .map(|c| {
                let keywords = c.keywords.iter().cloned().map(Value::String).collect();
                (c.name.clone(), Value::Array(keywords))
            })
            .collect();
        Ok(serde_json::to_string_pretty(&Value::Object(object))?)
    }

    fn validate_category(name: String, keywords: Vec<String>) -> Result<SkillCategory> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(SkillAnalyzerError::InvalidDatabase(
                "category names must not be blank".to_string(),
            ));
        }

        if keywords.is_empty() {
            return Err(SkillAnalyzerError::InvalidDatabase(format!(
                "category '{}' has no keywords",
                name
            )));
        }

        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(keywords.len());
        for keyword in keywords {
            let keyword = keyword.trim().to_string();
            if keyword.is_empty() {
                return Err(SkillAnalyzerError::InvalidDatabase(format!(
                    "category '{}' contains a blank keyword",
                    name
                )));
            }
            if seen.insert(keyword.to_lowercase()) {
                unique.push(keyword);
            } else {
                warn!("Ignoring duplicate keyword '{}' in category '{}'", keyword, name);
            }
        }

        Ok(SkillCategory {
            name,
            keywords: unique,
        })
    }
}

/// Top-level categories as written, duplicates included.
struct RawCategories(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for RawCategories {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CategoriesVisitor;

        impl<'de> Visitor<'de> for CategoriesVisitor {
            type Value = RawCategories;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object of skill categories")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Value>()? {
                    entries.push(entry);
                }
                Ok(RawCategories(entries))
            }
        }

        deserializer.deserialize_map(CategoriesVisitor)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
