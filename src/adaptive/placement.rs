use super::config::PlacementConfig;
use super::types::{DifficultyLevel, LearnerBackground, Module, ProgressRecord};

fn skip_count(module_count: usize, fraction: f64) -> usize {
    (module_count as f64 * fraction).floor() as usize
}

/// Index into the ordered module list where the learner starts.
pub fn determine_starting_point(
    background: LearnerBackground,
    course_difficulty: DifficultyLevel,
    module_count: usize,
    config: &PlacementConfig,
) -> usize {
    match (background, course_difficulty) {
        (LearnerBackground::Beginner, _) => 0,
        (LearnerBackground::Intermediate, DifficultyLevel::Beginner) => {
            skip_count(module_count, config.intermediate_skip_beginner)
        }
        (LearnerBackground::Intermediate, _) => 0,
        (LearnerBackground::Advanced, DifficultyLevel::Beginner) => {
            skip_count(module_count, config.advanced_skip_beginner)
        }
        (LearnerBackground::Advanced, DifficultyLevel::Intermediate) => {
            skip_count(module_count, config.advanced_skip_intermediate)
        }
        (LearnerBackground::Advanced, DifficultyLevel::Advanced) => 0,
    }
}

/// Modules that make up the learner's path, in course order.
///
/// Modules the learner has already started are always kept so in-progress
/// work never disappears from the path.
pub fn filter_modules_for_learner<'a>(
    modules: &'a [Module],
    start_index: usize,
    background: LearnerBackground,
    progress: Option<&ProgressRecord>,
) -> Vec<&'a Module> {
    if background == LearnerBackground::Beginner {
        return modules.iter().skip(start_index).collect();
    }

    modules
        .iter()
        .enumerate()
        .filter(|(index, module)| {
            if progress.is_some_and(|record| record.has_started(&module.id)) {
                return true;
            }
            if *index < start_index {
                return false;
            }
            !(background == LearnerBackground::Advanced
                && module.difficulty_level == DifficultyLevel::Beginner)
        })
        .map(|(_, module)| module)
        .collect()
}
