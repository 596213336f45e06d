use std::collections::HashMap;

use crate::models::{Goal, GoalStatus};

pub fn active_goal_count(goals: &[Goal]) -> usize {
    goals
        .iter()
        .filter(|g| g.status == GoalStatus::Active)
        .count()
}

pub fn goals_by_status(goals: &[Goal]) -> HashMap<GoalStatus, i64> {
    let mut counts = HashMap::new();
    for goal in goals {
        *counts.entry(goal.status).or_insert(0) += 1;
    }
    counts
}

/// Raw completion percent. A non-positive target yields 0 rather than a
/// division error; callers clamp to [0, 100] for display.
pub fn goal_progress_percent(goal: &Goal) -> f64 {
    if goal.target_value > 0.0 {
        (goal.current_value / goal.target_value) * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn goal(current_value: f64, target_value: f64, status: GoalStatus) -> Goal {
        Goal {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            goal_type: "weight_loss".to_string(),
            target_value,
            current_value,
            target_date: None,
            status,
        }
    }

    #[test]
    fn counts_only_active_goals() {
        let goals = vec![
            goal(2.0, 5.0, GoalStatus::Active),
            goal(10.0, 10.0, GoalStatus::Active),
            goal(10.0, 10.0, GoalStatus::Completed),
        ];
        assert_eq!(active_goal_count(&goals), 2);
    }

    #[test]
    fn status_counts_cover_every_goal() {
        let goals = vec![
            goal(1.0, 4.0, GoalStatus::Active),
            goal(4.0, 4.0, GoalStatus::Completed),
            goal(0.0, 4.0, GoalStatus::Paused),
            goal(2.0, 4.0, GoalStatus::Active),
        ];
        let counts = goals_by_status(&goals);
        assert_eq!(counts.get(&GoalStatus::Active), Some(&2));
        assert_eq!(counts.get(&GoalStatus::Completed), Some(&1));
        assert_eq!(counts.get(&GoalStatus::Paused), Some(&1));
        assert_eq!(counts.values().sum::<i64>(), goals.len() as i64);
    }

    #[test]
    fn progress_is_current_over_target() {
        let g = goal(200.0, 400.0, GoalStatus::Active);
        assert_eq!(goal_progress_percent(&g), 50.0);
    }

    #[test]
    fn zero_target_yields_zero_progress() {
        let g = goal(50.0, 0.0, GoalStatus::Active);
        assert_eq!(goal_progress_percent(&g), 0.0);
    }

    #[test]
    fn progress_is_not_clamped_here() {
        let g = goal(450.0, 400.0, GoalStatus::Active);
        assert_eq!(goal_progress_percent(&g), 112.5);
    }
}
