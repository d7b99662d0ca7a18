use serde::{Deserialize, Serialize};

use crate::adaptive::types::{AnswerRecord, ProgressRecord};
use crate::error::{PathError, PathResult};
use crate::services::progress::{course_status_for, recompute_overall_progress};

fn default_max_retries() -> u32 {
    2
}

fn default_points() -> u32 {
    10
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    Mcq,
    FillInBlank,
    ShortAnswer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOption {
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// Quiz question embedded in a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckpointQuestion {
    pub id: String,
    pub question_type: QuestionType,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    #[serde(default)]
    pub correct_answer: String,
    #[serde(default)]
    pub acceptable_answers: Vec<String>,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    /// Total attempts a learner gets.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_points")]
    pub points: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckpointSubmission {
    pub user_answer: String,
    #[serde(default)]
    pub time_spent_seconds: f64,
    #[serde(default)]
    pub hint_used: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckpointOutcome {
    pub is_correct: bool,
    pub attempt_number: u32,
    pub points_earned: u32,
    pub attempts_remaining: u32,
    /// Shown only after a correct answer.
    pub explanation: Option<String>,
    /// Offered after a wrong answer when no hint was used yet.
    pub hint: Option<String>,
    /// Feeds the rolling window of `analyze_performance`.
    pub answer: AnswerRecord,
}

fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Multiple choice matches the option text exactly; free-text answers are
/// compared trimmed and case-folded against the answer and its alternatives.
pub fn grade_answer(question: &CheckpointQuestion, user_answer: &str) -> bool {
    match question.question_type {
        QuestionType::Mcq => question
            .options
            .iter()
            .find(|option| option.text == user_answer)
            .is_some_and(|option| option.is_correct),
        QuestionType::FillInBlank | QuestionType::ShortAnswer => {
            let given = normalize(user_answer);
            given == normalize(&question.correct_answer)
                || question
                    .acceptable_answers
                    .iter()
                    .any(|alt| normalize(alt) == given)
        }
    }
}

/// Retries keep 70% of the points and a used hint keeps 80%, each rounded down.
pub fn points_earned(
    points: u32,
    is_correct: bool,
    previous_attempts: u32,
    hint_used: bool,
) -> u32 {
    if !is_correct {
        return 0;
    }
    let mut earned = u64::from(points);
    if previous_attempts > 0 {
        earned = earned * 7 / 10;
    }
    if hint_used {
        earned = earned * 4 / 5;
    }
    earned as u32
}

pub fn ensure_attempt_allowed(
    question: &CheckpointQuestion,
    previous_attempts: u32,
) -> PathResult<()> {
    if previous_attempts >= question.max_retries {
        return Err(PathError::validation("Maximum retry attempts reached"));
    }
    Ok(())
}

/// Attempts left after the one being submitted.
pub fn attempts_remaining(max_retries: u32, previous_attempts: u32) -> u32 {
    max_retries.saturating_sub(previous_attempts.saturating_add(1))
}

pub fn submit_checkpoint(
    question: &CheckpointQuestion,
    submission: &CheckpointSubmission,
    previous_attempts: u32,
) -> PathResult<CheckpointOutcome> {
    ensure_attempt_allowed(question, previous_attempts)?;

    let is_correct = grade_answer(question, &submission.user_answer);
    let hint_used = submission.hint_used;
    let points = points_earned(question.points, is_correct, previous_attempts, hint_used);

    tracing::debug!(
        question_id = %question.id,
        is_correct,
        attempt = previous_attempts + 1,
        points,
        "checkpoint graded"
    );

    Ok(CheckpointOutcome {
        is_correct,
        attempt_number: previous_attempts + 1,
        points_earned: points,
        attempts_remaining: attempts_remaining(question.max_retries, previous_attempts),
        explanation: if is_correct {
            question.explanation.clone()
        } else {
            None
        },
        hint: if !is_correct && !hint_used {
            question.hint.clone()
        } else {
            None
        },
        answer: AnswerRecord::new(question.id.clone(), is_correct, submission.time_spent_seconds),
    })
}

/// Counts a correctly answered checkpoint against the video's entry.
///
/// The video completes once every checkpoint is answered. A record without an
/// entry for `video_id` is returned unchanged.
pub fn apply_correct_answer(progress: &ProgressRecord, video_id: &str) -> ProgressRecord {
    let mut next = progress.clone();
    let Some(entry) = next.videos_progress.iter_mut().find(|v| v.video == video_id) else {
        return next;
    };

    entry.checkpoints_completed = entry.checkpoints_completed.saturating_add(1);
    if entry.checkpoints_completed >= entry.total_checkpoints {
        entry.completed = true;
    }
    next.total_checkpoints_completed = next.total_checkpoints_completed.saturating_add(1);
    next.overall_progress = recompute_overall_progress(&next.videos_progress);
    next.status = course_status_for(next.overall_progress, next.status);
    next
}
