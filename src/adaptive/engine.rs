use std::collections::HashSet;

use serde::Deserialize;

use crate::adaptive::advice::generate_recommendations;
use crate::adaptive::career::get_career_specific_content;
use crate::adaptive::catalog::{self, CourseRecommendations};
use crate::adaptive::config::AdaptiveConfig;
use crate::adaptive::gating::is_module_unlocked;
use crate::adaptive::pacing::{adjust_estimated_time, determine_recommended_pace};
use crate::adaptive::performance::{self, PerformanceUpdate};
use crate::adaptive::placement::{determine_starting_point, filter_modules_for_learner};
use crate::adaptive::types::{AnswerRecord, Course, LearnerProfile, Module, ProgressRecord};
use crate::adaptive::view::{
    AdaptivePath, AdaptivePathView, CourseContext, LearnerContext, PathModule,
};
use crate::error::{PathError, PathResult};

/// Inputs for one path computation as handed over by the request layer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathRequest {
    #[serde(default)]
    pub profile: Option<LearnerProfile>,
    #[serde(default)]
    pub course: Option<Course>,
    #[serde(default)]
    pub modules: Vec<Module>,
    #[serde(default)]
    pub progress: Option<ProgressRecord>,
}

/// Stateless rules engine; share one instance or build one per request.
#[derive(Debug, Clone, Default)]
pub struct AdaptivePathEngine {
    config: AdaptiveConfig,
}

impl AdaptivePathEngine {
    pub fn new(mut config: AdaptiveConfig) -> Self {
        config.limits = config.limits.clamped();
        Self { config }
    }

    pub fn config(&self) -> &AdaptiveConfig {
        &self.config
    }

    pub fn generate_for_request(&self, request: &PathRequest) -> PathResult<AdaptivePathView> {
        let profile = request
            .profile
            .as_ref()
            .ok_or_else(|| PathError::validation("learner profile is required"))?;
        let course = request
            .course
            .as_ref()
            .ok_or_else(|| PathError::validation("course is required"))?;
        self.generate_adaptive_path(profile, course, &request.modules, request.progress.as_ref())
    }

    pub fn generate_adaptive_path(
        &self,
        profile: &LearnerProfile,
        course: &Course,
        modules: &[Module],
        progress: Option<&ProgressRecord>,
    ) -> PathResult<AdaptivePathView> {
        let learner = profile.resolve()?;

        let mut ordered = modules.to_vec();
        ordered.sort_by_key(|m| m.order);

        let starting_module = determine_starting_point(
            learner.background,
            course.difficulty_level,
            ordered.len(),
            &self.config.placement,
        );

        let performance_level = progress.map(|p| p.performance_level).unwrap_or_default();
        let recommended_pace = determine_recommended_pace(learner.background, performance_level);

        let filtered =
            filter_modules_for_learner(&ordered, starting_module, learner.background, progress);

        let path_modules: Vec<PathModule> = filtered
            .iter()
            .enumerate()
            .map(|(index, module)| PathModule {
                id: module.id.clone(),
                title: module.title.clone(),
                order: module.order,
                difficulty: module.difficulty_level,
                is_unlocked: is_module_unlocked(module, progress, index),
                is_recommended: index < self.config.limits.recommended_modules,
                estimated_time: adjust_estimated_time(
                    module.estimated_time,
                    recommended_pace,
                    &self.config.pace_multipliers,
                ),
            })
            .collect();

        let career_recommendations = get_career_specific_content(
            learner.career_goal,
            &ordered,
            self.config.limits.career_matches,
        );

        let recommendations = generate_recommendations(
            learner.background,
            progress.map(|p| p.performance_level),
            recommended_pace,
        );

        tracing::debug!(
            course_id = %course.id,
            background = learner.background.as_str(),
            career_goal = learner.career_goal.label(),
            starting_module,
            pace = recommended_pace.as_str(),
            total_modules = path_modules.len(),
            "adaptive path generated"
        );

        Ok(AdaptivePathView {
            user: LearnerContext {
                background: learner.background,
                career_goal: learner.career_goal,
                performance_level,
            },
            course: CourseContext {
                id: course.id.clone(),
                title: course.title.clone(),
                difficulty: course.difficulty_level,
            },
            adaptive_path: AdaptivePath {
                starting_module,
                recommended_pace,
                total_modules: path_modules.len(),
                modules: path_modules,
                career_recommendations,
            },
            recommendations,
        })
    }

    pub fn analyze_performance(&self, recent_answers: &[AnswerRecord]) -> PerformanceUpdate {
        let update = performance::analyze_performance(
            recent_answers,
            &self.config.thresholds,
            &self.config.limits,
        );

        match &update {
            PerformanceUpdate::Updated(snapshot) => tracing::info!(
                level = snapshot.performance_level.as_str(),
                pace = snapshot.recommended_pace.as_str(),
                success_rate = snapshot.success_rate,
                weak_areas = snapshot.weak_areas.len(),
                "performance re-classified"
            ),
            PerformanceUpdate::Unchanged => {
                tracing::debug!("no recent answers, performance unchanged")
            }
        }

        update
    }

    pub fn recommend_courses(
        &self,
        profile: &LearnerProfile,
        published_courses: &[Course],
        excluded_course_ids: &HashSet<String>,
    ) -> CourseRecommendations {
        catalog::recommend_courses(
            profile,
            published_courses,
            excluded_course_ids,
            self.config.limits.recommended_courses,
        )
    }
}
