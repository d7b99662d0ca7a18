pub mod advice;
pub mod career;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod gating;
pub mod pacing;
pub mod performance;
pub mod placement;
pub mod types;
pub mod view;

pub use config::AdaptiveConfig;
pub use engine::{AdaptivePathEngine, PathRequest};
pub use performance::{PerformanceSnapshot, PerformanceUpdate};
pub use view::AdaptivePathView;
pub use types::{
    AnswerRecord, CareerGoal, Course, DifficultyLevel, LearnerBackground, LearnerProfile, Module,
    ModuleProgress, Pace, PerformanceLevel, ProgressRecord, ProgressStatus, VideoProgress,
};
