//! Keyword and regex rules that map job text to categorical labels.
//!
//! Every predictor here is a pure function of its inputs. The tables are
//! compiled once on first use and only ever read afterwards, so they can be
//! shared freely across annotation threads.

use std::sync::LazyLock;

use regex::Regex;

use crate::labels::{EducationLevel, ExperienceLevel, JobCategory, RemotePossible};

/// Share of the top score another category must reach for the posting to be
/// treated as spanning several domains.
const MULTI_DOMAIN_RATIO: f64 = 0.7;

/// Weight of a skill token that belongs to a category's keyword list.
const SKILL_WEIGHT: u32 = 2;

// Unanchored on purpose: "strateg" must catch strategy/strategic, "lead" leadership.
static SENIOR_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"senior",
        r"sr\.",
        r"lead",
        r"principal",
        r"architect",
        r"5\+ years",
        r"8\+ years",
        r"10\+ years",
        r"experienced",
        r"mentor",
        r"guide",
        r"strateg",
        r"expert",
    ])
});

static ENTRY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"entry",
        r"junior",
        r"jr\.",
        r"graduate",
        r"0-2 years",
        r"1\+ years",
        r"2\+ years",
        r"fresher",
        r"beginner",
    ])
});

fn category_keywords(category: JobCategory) -> &'static [&'static str] {
    match category {
        JobCategory::Backend => &[
            "backend", "server", "api", "microservices", "java", "python", "c#", "go", "ruby",
        ],
        JobCategory::Frontend => &[
            "frontend", "react", "angular", "vue", "javascript", "css", "html", "ui/ux",
        ],
        JobCategory::Devops => &[
            "devops", "aws", "azure", "gcp", "docker", "kubernetes", "ci/cd", "infrastructure",
        ],
        JobCategory::Data => &[
            "data", "database", "sql", "nosql", "etl", "warehouse", "analytics", "big data",
        ],
        JobCategory::Mobile => &[
            "mobile", "ios", "android", "swift", "kotlin", "react native", "flutter",
        ],
        JobCategory::Qa => &["qa", "quality", "test", "selenium", "automation", "testing"],
        JobCategory::Fullstack => &[],
    }
}

struct CategoryRule {
    category: JobCategory,
    keywords: &'static [&'static str],
    patterns: Vec<Regex>,
}

static CATEGORY_RULES: LazyLock<Vec<CategoryRule>> = LazyLock::new(|| {
    JobCategory::SCORED
        .into_iter()
        .map(|category| {
            let keywords = category_keywords(category);
            CategoryRule {
                category,
                keywords,
                patterns: keywords.iter().map(|keyword| word_pattern(keyword)).collect(),
            }
        })
        .collect()
});

static EDUCATION_RULES: LazyLock<Vec<(Regex, EducationLevel)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"\bph\.?d\b|\bdoctorate\b").unwrap(),
            EducationLevel::Phd,
        ),
        (
            Regex::new(r"\bmaster'?s\b|\bms\b|\bm\.?s\b|\bma\b").unwrap(),
            EducationLevel::Masters,
        ),
        (
            Regex::new(r"\bbachelor'?s\b|\bbs\b|\bb\.?s\b|\bba\b|\bdegree\b").unwrap(),
            EducationLevel::Bachelors,
        ),
    ]
});

static REMOTE_RULES: LazyLock<Vec<(Regex, RemotePossible)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"\bremote\b|\bwork from home\b|\bwfh\b").unwrap(),
            RemotePossible::Yes,
        ),
        (
            Regex::new(r"\bhybrid\b|\bflexible\b|\bpartial\b").unwrap(),
            RemotePossible::Hybrid,
        ),
        (
            Regex::new(r"\bon.?site\b|\boffice\b|\bin.?person\b").unwrap(),
            RemotePossible::No,
        ),
    ]
});

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

/// Case-sensitive whole-word match for a literal keyword.
pub(crate) fn word_pattern(keyword: &str) -> Regex {
    Regex::new(&format!(r"\b{}\b", regex::escape(keyword))).unwrap()
}

/// Senior signals win over entry signals; anything else is mid-level.
pub fn predict_experience_level(title: &str, description: &str) -> ExperienceLevel {
    let text = format!("{} {}", title, description).to_lowercase();

    if SENIOR_PATTERNS.iter().any(|re| re.is_match(&text)) {
        return ExperienceLevel::Senior;
    }
    if ENTRY_PATTERNS.iter().any(|re| re.is_match(&text)) {
        return ExperienceLevel::Entry;
    }
    ExperienceLevel::Mid
}

/// Score every keyword-backed category against the description and skills.
///
/// Each keyword found in the text adds 1; each skill that is literally one of
/// the category's keywords adds 2. The result follows `JobCategory::SCORED`,
/// which is also the tie-break order.
pub fn category_scores(description: &str, skills: &[String]) -> Vec<(JobCategory, u32)> {
    let text = description.to_lowercase();

    CATEGORY_RULES
        .iter()
        .map(|rule| {
            let text_hits = rule.patterns.iter().filter(|re| re.is_match(&text)).count() as u32;
            let skill_hits = skills
                .iter()
                .filter(|skill| rule.keywords.contains(&skill.as_str()))
                .count() as u32;
            (rule.category, text_hits + SKILL_WEIGHT * skill_hits)
        })
        .collect()
}

/// Pick a category from ordered scores.
///
/// No signal at all, or two or more categories within 70% of the top score,
/// both resolve to `Fullstack`. Otherwise the first category reaching the top
/// score wins.
pub fn decide_category(scores: &[(JobCategory, u32)]) -> JobCategory {
    let max = scores.iter().map(|&(_, score)| score).max().unwrap_or(0);
    if max == 0 {
        return JobCategory::Fullstack;
    }

    let threshold = f64::from(max) * MULTI_DOMAIN_RATIO;
    let strong = scores
        .iter()
        .filter(|&&(_, score)| f64::from(score) >= threshold)
        .count();
    if strong > 1 {
        return JobCategory::Fullstack;
    }

    scores
        .iter()
        .find(|&&(_, score)| score == max)
        .map(|&(category, _)| category)
        .unwrap_or(JobCategory::Fullstack)
}

pub fn predict_job_category(description: &str, skills: &[String]) -> JobCategory {
    decide_category(&category_scores(description, skills))
}

/// Highest degree mentioned wins: phd, then masters, then bachelors.
pub fn predict_education(description: &str) -> EducationLevel {
    let text = description.to_lowercase();
    EDUCATION_RULES
        .iter()
        .find(|(re, _)| re.is_match(&text))
        .map(|&(_, level)| level)
        .unwrap_or(EducationLevel::None)
}

pub fn predict_remote(description: &str, location: &str) -> RemotePossible {
    let text = format!("{} {}", description, location).to_lowercase();
    REMOTE_RULES
        .iter()
        .find(|(re, _)| re.is_match(&text))
        .map(|&(_, remote)| remote)
        .unwrap_or(RemotePossible::Unknown)
}
