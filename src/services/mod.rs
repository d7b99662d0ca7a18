pub mod attendance;
pub mod checkpoint;
pub mod progress;
pub mod streak;
