#![allow(dead_code)]

use learnpath_engine::adaptive::types::{
    AnswerRecord, Course, DifficultyLevel, Module, ModuleProgress, ProgressRecord, ProgressStatus,
};

pub fn sample_course(difficulty: DifficultyLevel) -> Course {
    Course::new("course-1", "Programming Foundations", difficulty)
}

pub fn sample_modules(count: u32, difficulty: DifficultyLevel) -> Vec<Module> {
    (1..=count)
        .map(|i| {
            let mut module = Module::new(format!("m{i}"), format!("Module {i}"), i, difficulty);
            module.description = format!("Lesson block {i}");
            module.estimated_time = 40;
            module
        })
        .collect()
}

pub fn titled_module(id: &str, order: u32, title: &str, description: &str) -> Module {
    let mut module = Module::new(id, title, order, DifficultyLevel::Intermediate);
    module.description = description.to_string();
    module.estimated_time = 30;
    module
}

pub fn progress_with(entries: &[(&str, ProgressStatus)]) -> ProgressRecord {
    ProgressRecord::with_modules(
        entries
            .iter()
            .map(|(id, status)| ModuleProgress::new(*id, *status))
            .collect(),
    )
}

/// `correct` correct answers first, then misses, each on its own question.
pub fn answer_window(correct: usize, total: usize, seconds: f64) -> Vec<AnswerRecord> {
    (0..total)
        .map(|i| AnswerRecord::new(format!("q{i}"), i < correct, seconds))
        .collect()
}
