use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Serialize;

use super::types::{CareerGoal, Course, DifficultyLevel, LearnerBackground, LearnerProfile};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationBasis {
    pub background: Option<LearnerBackground>,
    pub career_goal: Option<CareerGoal>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecommendations {
    pub recommendation_basis: RecommendationBasis,
    pub courses: Vec<Course>,
}

pub fn difficulty_allowed(
    background: Option<LearnerBackground>,
    difficulty: DifficultyLevel,
) -> bool {
    match background {
        Some(LearnerBackground::Beginner) => difficulty == DifficultyLevel::Beginner,
        Some(LearnerBackground::Advanced) => matches!(
            difficulty,
            DifficultyLevel::Intermediate | DifficultyLevel::Advanced
        ),
        Some(LearnerBackground::Intermediate) | None => true,
    }
}

pub fn career_allowed(goal: Option<CareerGoal>, course: &Course) -> bool {
    match goal {
        Some(goal) if !goal.is_other() => course.career_goals.contains(&goal),
        _ => true,
    }
}

fn by_popularity(a: &Course, b: &Course) -> Ordering {
    b.average_rating
        .partial_cmp(&a.average_rating)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.enrolled_students.cmp(&a.enrolled_students))
}

/// Published courses matching the profile that the learner is not enrolled in,
/// best rated first.
pub fn recommend_courses(
    profile: &LearnerProfile,
    courses: &[Course],
    excluded_course_ids: &HashSet<String>,
    limit: usize,
) -> CourseRecommendations {
    let mut candidates: Vec<Course> = courses
        .iter()
        .filter(|course| course.is_published)
        .filter(|course| !excluded_course_ids.contains(&course.id))
        .filter(|course| difficulty_allowed(profile.background, course.difficulty_level))
        .filter(|course| career_allowed(profile.career_goal, course))
        .cloned()
        .collect();

    candidates.sort_by(by_popularity);
    candidates.truncate(limit);

    CourseRecommendations {
        recommendation_basis: RecommendationBasis {
            background: profile.background,
            career_goal: profile.career_goal,
        },
        courses: candidates,
    }
}
