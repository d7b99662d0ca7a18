use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Broken streaks shorter than this are not archived.
const MIN_ARCHIVED_STREAK: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakPeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub length: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakState {
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub longest_streak: u32,
    #[serde(default)]
    pub last_activity_date: Option<NaiveDate>,
    #[serde(default)]
    pub streak_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub total_active_days: u32,
    #[serde(default)]
    pub streak_history: Vec<StreakPeriod>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StreakTransition {
    Started,
    SameDay,
    Extended,
    Reset,
    OutOfOrder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreakChange {
    pub transition: StreakTransition,
    pub state: StreakState,
}

impl StreakChange {
    pub fn changed(&self) -> bool {
        !matches!(
            self.transition,
            StreakTransition::SameDay | StreakTransition::OutOfOrder
        )
    }
}

/// Applies an attended day to the streak.
pub fn register_activity(state: &StreakState, today: NaiveDate) -> StreakChange {
    let mut next = state.clone();

    let Some(last) = state.last_activity_date else {
        next.current_streak = 1;
        next.longest_streak = next.longest_streak.max(1);
        next.total_active_days = 1;
        next.last_activity_date = Some(today);
        next.streak_start_date = Some(today);
        return StreakChange {
            transition: StreakTransition::Started,
            state: next,
        };
    };

    let gap = today.signed_duration_since(last).num_days();
    let transition = match gap {
        0 => StreakTransition::SameDay,
        1 => {
            next.current_streak = next.current_streak.saturating_add(1);
            next.total_active_days = next.total_active_days.saturating_add(1);
            next.last_activity_date = Some(today);
            next.longest_streak = next.longest_streak.max(next.current_streak);
            StreakTransition::Extended
        }
        g if g > 1 => {
            if next.current_streak >= MIN_ARCHIVED_STREAK {
                next.streak_history.push(StreakPeriod {
                    start_date: next.streak_start_date.unwrap_or(last),
                    end_date: last,
                    length: next.current_streak,
                });
            }
            next.current_streak = 1;
            next.total_active_days = next.total_active_days.saturating_add(1);
            next.last_activity_date = Some(today);
            next.streak_start_date = Some(today);
            StreakTransition::Reset
        }
        _ => {
            tracing::warn!(%today, %last, "activity date precedes last recorded activity");
            StreakTransition::OutOfOrder
        }
    };

    StreakChange {
        transition,
        state: next,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn run(days: &[u32]) -> StreakState {
        days.iter().fold(StreakState::default(), |state, d| {
            register_activity(&state, day(*d)).state
        })
    }

    #[test]
    fn test_first_activity_starts_streak() {
        let change = register_activity(&StreakState::default(), day(1));
        assert_eq!(change.transition, StreakTransition::Started);
        assert_eq!(change.state.current_streak, 1);
        assert_eq!(change.state.longest_streak, 1);
        assert_eq!(change.state.total_active_days, 1);
        assert_eq!(change.state.streak_start_date, Some(day(1)));
    }

    #[test]
    fn test_same_day_is_noop() {
        let state = run(&[1]);
        let change = register_activity(&state, day(1));
        assert_eq!(change.transition, StreakTransition::SameDay);
        assert!(!change.changed());
        assert_eq!(change.state, state);
    }

    #[test]
    fn test_consecutive_days_extend() {
        let state = run(&[1, 2, 3, 4]);
        assert_eq!(state.current_streak, 4);
        assert_eq!(state.longest_streak, 4);
        assert_eq!(state.total_active_days, 4);
    }

    #[test]
    fn test_gap_archives_significant_streak() {
        let state = run(&[1, 2, 3, 6]);
        assert_eq!(state.current_streak, 1);
        assert_eq!(state.longest_streak, 3);
        assert_eq!(state.total_active_days, 4);
        assert_eq!(state.streak_start_date, Some(day(6)));
        assert_eq!(
            state.streak_history,
            vec![StreakPeriod {
                start_date: day(1),
                end_date: day(3),
                length: 3
            }]
        );
    }

    #[test]
    fn test_short_streak_not_archived() {
        let state = run(&[1, 2, 5]);
        assert!(state.streak_history.is_empty());
        assert_eq!(state.longest_streak, 2);
    }

    #[test]
    fn test_earlier_date_is_ignored() {
        let state = run(&[5]);
        let change = register_activity(&state, day(3));
        assert_eq!(change.transition, StreakTransition::OutOfOrder);
        assert_eq!(change.state, state);
    }
}
