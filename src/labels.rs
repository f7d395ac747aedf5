//! Categorical labels attached to annotated job descriptions.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    /// Part of the label schema; no rule currently produces it.
    Lead,
}

impl ExperienceLevel {
    pub const ALL: [Self; 4] = [Self::Entry, Self::Mid, Self::Senior, Self::Lead];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Mid => "mid",
            Self::Senior => "senior",
            Self::Lead => "lead",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobCategory {
    Backend,
    Frontend,
    Fullstack,
    Devops,
    Data,
    Mobile,
    Qa,
}

impl JobCategory {
    pub const ALL: [Self; 7] = [
        Self::Backend,
        Self::Frontend,
        Self::Fullstack,
        Self::Devops,
        Self::Data,
        Self::Mobile,
        Self::Qa,
    ];

    /// Categories that are scored from keywords, in tie-break order.
    /// `Fullstack` is never scored; it is the fallback decision.
    pub const SCORED: [Self; 6] = [
        Self::Backend,
        Self::Frontend,
        Self::Devops,
        Self::Data,
        Self::Mobile,
        Self::Qa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backend => "backend",
            Self::Frontend => "frontend",
            Self::Fullstack => "fullstack",
            Self::Devops => "devops",
            Self::Data => "data",
            Self::Mobile => "mobile",
            Self::Qa => "qa",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    None,
    Bachelors,
    Masters,
    Phd,
}

impl EducationLevel {
    pub const ALL: [Self; 4] = [Self::None, Self::Bachelors, Self::Masters, Self::Phd];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bachelors => "bachelors",
            Self::Masters => "masters",
            Self::Phd => "phd",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemotePossible {
    Yes,
    No,
    Hybrid,
    Unknown,
}

impl RemotePossible {
    pub const ALL: [Self; 4] = [Self::Yes, Self::No, Self::Hybrid, Self::Unknown];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Hybrid => "hybrid",
            Self::Unknown => "unknown",
        }
    }
}

/// Provenance tag recording how a set of labels was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationMethod {
    RuleBased,
}

impl AnnotationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RuleBased => "rule_based",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(
    ExperienceLevel,
    JobCategory,
    EducationLevel,
    RemotePossible,
    AnnotationMethod
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_serialize_as_lowercase_strings() {
        assert_eq!(
            serde_json::to_value(JobCategory::Devops).unwrap(),
            serde_json::json!("devops")
        );
        assert_eq!(
            serde_json::to_value(AnnotationMethod::RuleBased).unwrap(),
            serde_json::json!("rule_based")
        );
        assert_eq!(
            serde_json::to_value(RemotePossible::Unknown).unwrap(),
            serde_json::json!("unknown")
        );
    }

    #[test]
    fn test_display_matches_serialized_form() {
        for level in ExperienceLevel::ALL {
            assert_eq!(
                serde_json::to_value(level).unwrap(),
                serde_json::json!(level.to_string())
            );
        }
        for category in JobCategory::ALL {
            assert_eq!(
                serde_json::to_value(category).unwrap(),
                serde_json::json!(category.to_string())
            );
        }
    }

    #[test]
    fn test_scored_categories_exclude_fullstack() {
        assert!(!JobCategory::SCORED.contains(&JobCategory::Fullstack));
        assert_eq!(JobCategory::SCORED[0], JobCategory::Backend);
    }
}
