pub mod rule_based;
pub mod rules;

pub use rule_based::RuleBasedAnnotator;
pub use rules::{
    category_scores, decide_category, predict_education, predict_experience_level,
    predict_job_category, predict_remote,
};
