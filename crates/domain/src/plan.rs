use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use derive_more::Deref;
use uuid::Uuid;

use crate::{CreateError, DeleteError, Exercise, ExerciseID, Name, PlayerID, ReadError, Sets,
    Weekday};

#[allow(async_fn_in_trait)]
pub trait PlanService: Send + Sync + 'static {
    async fn get_plans(&self) -> Result<Vec<WorkoutPlan>, ReadError>;
    async fn create_plan(&self, submission: PlanSubmission) -> Result<WorkoutPlan, CreateError>;
    async fn delete_plan(&self, id: PlanID) -> Result<PlanID, DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait PlanRepository: Send + Sync + 'static {
    async fn read_plans(&self) -> Result<Vec<WorkoutPlan>, ReadError>;
    async fn create_plan(&self, submission: PlanSubmission) -> Result<WorkoutPlan, CreateError>;
    async fn delete_plan(&self, id: PlanID) -> Result<PlanID, DeleteError>;
}

/// One exercise prescription within a category group.
///
/// The embedded exercise is a snapshot taken when the prescription is added
/// to a draft. Editing or deleting the source exercise later leaves plans
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prescription {
    pub exercise: Exercise,
    pub sets: Sets,
    pub reps: Option<String>,
    pub weight: Option<String>,
    pub notes: Option<String>,
}

/// One training-day grouping within a plan: a category name, the weekdays
/// it is trained (in selection order, no duplicates) and the prescribed
/// exercises (distinct per group).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: Name,
    pub days: Vec<Weekday>,
    pub exercises: Vec<Prescription>,
}

/// A plan is immutable once created. There is no modify operation, only
/// create, delete and read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutPlan {
    pub id: PlanID,
    pub player_id: PlayerID,
    pub player_name: Name,
    pub categories: Vec<CategoryGroup>,
    pub date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl WorkoutPlan {
    /// Sum of the exercise counts of all category groups (0 for a plan
    /// without groups).
    #[must_use]
    pub fn total_exercises(&self) -> usize {
        self.categories.iter().map(|c| c.exercises.len()).sum()
    }

    #[must_use]
    pub fn exercise_ids(&self) -> BTreeSet<ExerciseID> {
        self.categories
            .iter()
            .flat_map(|c| c.exercises.iter().map(|p| p.exercise.id))
            .collect()
    }
}

/// The completed draft emitted by the plan builder. The store stamps id and
/// creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSubmission {
    pub player_id: PlayerID,
    pub player_name: Name,
    pub categories: Vec<CategoryGroup>,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlanID(Uuid);

impl PlanID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for PlanID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for PlanID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn exercise(id: u128, name: &str, category: &str) -> Exercise {
        Exercise {
            id: id.into(),
            name: Name::new(name).unwrap(),
            category: Name::new(category).unwrap(),
            description: None,
            created_at: DateTime::UNIX_EPOCH,
        }
    }

    fn prescription(id: u128, name: &str, category: &str) -> Prescription {
        Prescription {
            exercise: exercise(id, name, category),
            sets: Sets::default(),
            reps: Some("10-12".to_string()),
            weight: None,
            notes: None,
        }
    }

    fn plan(categories: Vec<CategoryGroup>) -> WorkoutPlan {
        WorkoutPlan {
            id: 1.into(),
            player_id: 1.into(),
            player_name: Name::new("Jane Doe").unwrap(),
            categories,
            date: NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
            notes: None,
            created_at: DateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_total_exercises_empty() {
        assert_eq!(plan(vec![]).total_exercises(), 0);
    }

    #[test]
    fn test_total_exercises() {
        let plan = plan(vec![
            CategoryGroup {
                category: Name::new("chest").unwrap(),
                days: vec![Weekday::Monday],
                exercises: vec![
                    prescription(1, "Bench Press", "chest"),
                    prescription(2, "Cable Fly", "chest"),
                ],
            },
            CategoryGroup {
                category: Name::new("legs").unwrap(),
                days: vec![Weekday::Thursday],
                exercises: vec![prescription(3, "Squats", "legs")],
            },
        ]);
        assert_eq!(plan.total_exercises(), 3);
    }

    #[test]
    fn test_exercise_ids() {
        let plan = plan(vec![
            CategoryGroup {
                category: Name::new("chest").unwrap(),
                days: vec![Weekday::Monday],
                exercises: vec![prescription(2, "Cable Fly", "chest")],
            },
            CategoryGroup {
                category: Name::new("legs").unwrap(),
                days: vec![],
                exercises: vec![prescription(1, "Squats", "legs")],
            },
        ]);
        assert_eq!(
            plan.exercise_ids(),
            BTreeSet::from([ExerciseID::from(1), ExerciseID::from(2)])
        );
    }
}
