use super::types::{Module, ProgressRecord, ProgressStatus};

/// Whether a module at `index` of the filtered path is open to the learner.
///
/// Without declared prerequisites the check looks at the module's own status:
/// any status other than `not-started`, including a missing entry, unlocks it.
/// This stands in for "previous module completed" and is kept as observed.
pub fn is_module_unlocked(
    module: &Module,
    progress: Option<&ProgressRecord>,
    index: usize,
) -> bool {
    if index == 0 {
        return true;
    }

    let Some(progress) = progress else {
        return false;
    };

    if !module.prerequisites.is_empty() {
        return module
            .prerequisites
            .iter()
            .all(|prereq| progress.is_completed(prereq));
    }

    progress.module_status(&module.id) != Some(ProgressStatus::NotStarted)
}
