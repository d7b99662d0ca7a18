use serde::{Deserialize, Serialize};

use super::types::{CareerGoal, Module};

pub const HIGH_RELEVANCE: &str = "High";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecommendation {
    pub id: String,
    pub title: String,
    pub relevance: String,
}

pub fn career_keywords(goal: CareerGoal) -> &'static [&'static str] {
    match goal {
        CareerGoal::SoftwareDeveloper => {
            &["algorithm", "data structure", "design pattern", "architecture"]
        }
        CareerGoal::DataAnalyst => &["data", "analysis", "visualization", "statistics"],
        CareerGoal::Teacher => &["pedagogy", "instruction", "assessment", "curriculum"],
        CareerGoal::WebDeveloper => &["html", "css", "javascript", "responsive", "frontend"],
        CareerGoal::MlEngineer => &["machine learning", "neural network", "ai", "model"],
        CareerGoal::Other => &[],
    }
}

pub fn matches_career(goal: CareerGoal, module: &Module) -> bool {
    let title = module.title.to_lowercase();
    let description = module.description.to_lowercase();
    career_keywords(goal)
        .iter()
        .any(|keyword| title.contains(keyword) || description.contains(keyword))
}

/// First `limit` modules, in course order, whose title or description mentions
/// one of the goal's keywords.
pub fn get_career_specific_content(
    goal: CareerGoal,
    modules: &[Module],
    limit: usize,
) -> Vec<CareerRecommendation> {
    modules
        .iter()
        .filter(|module| matches_career(goal, module))
        .take(limit)
        .map(|module| CareerRecommendation {
            id: module.id.clone(),
            title: module.title.clone(),
            relevance: HIGH_RELEVANCE.to_string(),
        })
        .collect()
}
