use super::types::{LearnerBackground, Pace, PerformanceLevel};

/// Guidance lines in display order: background tips, performance tips, then
/// one cadence line for the pace.
///
/// `performance_level` is `None` when the learner has no progress record.
pub fn generate_recommendations(
    background: LearnerBackground,
    performance_level: Option<PerformanceLevel>,
    pace: Pace,
) -> Vec<String> {
    let mut lines: Vec<&'static str> = Vec::new();

    match background {
        LearnerBackground::Beginner => {
            lines.push("Take your time with fundamentals - they are crucial for long-term success");
            lines.push("Practice with examples before moving to next topics");
        }
        LearnerBackground::Advanced => {
            lines.push("Focus on advanced concepts and real-world applications");
            lines.push("Challenge yourself with complex projects");
        }
        LearnerBackground::Intermediate => {}
    }

    match performance_level {
        Some(PerformanceLevel::Struggling) => {
            lines.push("Review previous modules before continuing");
            lines.push("Consider slowing down and spending more time on practice");
            lines.push("Use hints and explanations in checkpoint questions");
        }
        Some(PerformanceLevel::Excellent) => {
            lines.push("You are doing great! Consider exploring advanced topics");
            lines.push("Try completing bonus challenges");
        }
        Some(PerformanceLevel::Average) | None => {}
    }

    lines.push(match pace {
        Pace::Slow => "Recommended: 2-3 modules per week",
        Pace::Normal => "Recommended: 3-5 modules per week",
        Pace::Fast => "Recommended: 5-7 modules per week",
    });

    lines.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beginner_struggling_slow() {
        let lines = generate_recommendations(
            LearnerBackground::Beginner,
            Some(PerformanceLevel::Struggling),
            Pace::Slow,
        );
        assert_eq!(
            lines,
            vec![
                "Take your time with fundamentals - they are crucial for long-term success",
                "Practice with examples before moving to next topics",
                "Review previous modules before continuing",
                "Consider slowing down and spending more time on practice",
                "Use hints and explanations in checkpoint questions",
                "Recommended: 2-3 modules per week",
            ]
        );
    }

    #[test]
    fn test_intermediate_average_has_only_cadence() {
        let lines = generate_recommendations(
            LearnerBackground::Intermediate,
            Some(PerformanceLevel::Average),
            Pace::Normal,
        );
        assert_eq!(lines, vec!["Recommended: 3-5 modules per week"]);
    }

    #[test]
    fn test_advanced_excellent_fast() {
        let lines = generate_recommendations(
            LearnerBackground::Advanced,
            Some(PerformanceLevel::Excellent),
            Pace::Fast,
        );
        assert_eq!(
            lines,
            vec![
                "Focus on advanced concepts and real-world applications",
                "Challenge yourself with complex projects",
                "You are doing great! Consider exploring advanced topics",
                "Try completing bonus challenges",
                "Recommended: 5-7 modules per week",
            ]
        );
    }

    #[test]
    fn test_no_progress_skips_performance_tips() {
        let lines = generate_recommendations(LearnerBackground::Advanced, None, Pace::Fast);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "Recommended: 5-7 modules per week");
    }
}
