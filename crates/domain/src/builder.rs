use chrono::{Local, NaiveDate};

use crate::{
    Category, CategoryGroup, Exercise, ExerciseID, Name, PlanSubmission, PlayerID, Prescription,
    Sets, Weekday,
};

/// Interactive accumulation of a workout plan draft.
///
/// The known categories and exercises are passed to each operation, keeping
/// the builder free of storage concerns. Operations that cannot be applied
/// (index out of range, no unused category left, duplicate exercise) leave
/// the draft unchanged and return `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanBuilder {
    player: Option<(PlayerID, Name)>,
    date: NaiveDate,
    groups: Vec<CategoryGroup>,
    notes: String,
}

impl PlanBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            player: None,
            date: Local::now().date_naive(),
            groups: vec![],
            notes: String::new(),
        }
    }

    /// A builder with the player pre-selected by the caller.
    #[must_use]
    pub fn for_player(id: PlayerID, name: Name) -> Self {
        let mut builder = Self::new();
        builder.player = Some((id, name));
        builder
    }

    pub fn select_player(&mut self, id: PlayerID, name: Name) {
        self.player = Some((id, name));
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn set_notes(&mut self, notes: &str) {
        self.notes = notes.to_string();
    }

    #[must_use]
    pub fn player(&self) -> Option<&(PlayerID, Name)> {
        self.player.as_ref()
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    #[must_use]
    pub fn total_exercises(&self) -> usize {
        self.groups.iter().map(|g| g.exercises.len()).sum()
    }

    /// Category names not used by any group of the draft, in registry order.
    /// These are the valid choices for [`add_group`](Self::add_group) and
    /// [`change_group_category`](Self::change_group_category).
    #[must_use]
    pub fn unused_categories<'a>(&self, categories: &'a [Category]) -> Vec<&'a Name> {
        categories
            .iter()
            .map(|c| &c.name)
            .filter(|name| self.groups.iter().all(|g| g.category != **name))
            .collect()
    }

    /// Appends a group seeded with the first unused category and a default
    /// day selection of Monday.
    pub fn add_group(&mut self, categories: &[Category]) -> bool {
        let Some(category) = self.unused_categories(categories).first().copied() else {
            return false;
        };
        self.groups.push(CategoryGroup {
            category: category.clone(),
            days: vec![Weekday::Monday],
            exercises: vec![],
        });
        true
    }

    pub fn remove_group(&mut self, index: usize) -> bool {
        if index >= self.groups.len() {
            return false;
        }
        self.groups.remove(index);
        true
    }

    /// Replaces the category of the group at `index` and clears its exercise
    /// list, as exercise choices are scoped to the category. Rejected if
    /// another group already uses `category`.
    pub fn change_group_category(&mut self, index: usize, category: &Name) -> bool {
        if self
            .groups
            .iter()
            .enumerate()
            .any(|(i, g)| i != index && g.category == *category)
        {
            return false;
        }
        let Some(group) = self.groups.get_mut(index) else {
            return false;
        };
        if group.category == *category {
            return true;
        }
        group.category = category.clone();
        group.exercises.clear();
        true
    }

    /// Adds `day` to the group's day set if absent, removes it otherwise.
    /// A group may transiently have zero days; submission is gated on it.
    pub fn toggle_day(&mut self, index: usize, day: Weekday) -> bool {
        let Some(group) = self.groups.get_mut(index) else {
            return false;
        };
        if let Some(position) = group.days.iter().position(|d| *d == day) {
            group.days.remove(position);
        } else {
            group.days.push(day);
        }
        true
    }

    /// Appends a default prescription (3 sets, "10-12" reps) for the first
    /// exercise of the group's category not yet present in the group. The
    /// exercise is copied into the draft, so later edits to the registry
    /// leave the draft untouched.
    pub fn add_exercise(&mut self, index: usize, exercises: &[Exercise]) -> bool {
        let Some(group) = self.groups.get_mut(index) else {
            return false;
        };
        let Some(exercise) = exercises
            .iter()
            .filter(|e| e.category == group.category)
            .find(|e| group.exercises.iter().all(|p| p.exercise.id != e.id))
        else {
            return false;
        };
        group.exercises.push(Prescription {
            exercise: exercise.clone(),
            sets: Sets::default(),
            reps: Some("10-12".to_string()),
            weight: None,
            notes: None,
        });
        true
    }

    pub fn remove_exercise(&mut self, index: usize, exercise_index: usize) -> bool {
        let Some(group) = self.groups.get_mut(index) else {
            return false;
        };
        if exercise_index >= group.exercises.len() {
            return false;
        }
        group.exercises.remove(exercise_index);
        true
    }

    /// In-place update of one prescription field. An exercise swap must name
    /// an exercise of the group's category that is not already present in
    /// the group.
    pub fn update_prescription(
        &mut self,
        index: usize,
        exercise_index: usize,
        update: PrescriptionUpdate,
        exercises: &[Exercise],
    ) -> bool {
        let Some(group) = self.groups.get_mut(index) else {
            return false;
        };
        if exercise_index >= group.exercises.len() {
            return false;
        }
        match update {
            PrescriptionUpdate::Sets(sets) => group.exercises[exercise_index].sets = sets,
            PrescriptionUpdate::Reps(reps) => group.exercises[exercise_index].reps = reps,
            PrescriptionUpdate::Weight(weight) => group.exercises[exercise_index].weight = weight,
            PrescriptionUpdate::Notes(notes) => group.exercises[exercise_index].notes = notes,
            PrescriptionUpdate::Exercise(id) => {
                if group.exercises[exercise_index].exercise.id == id {
                    return true;
                }
                let Some(exercise) = exercises
                    .iter()
                    .find(|e| e.id == id && e.category == group.category)
                else {
                    return false;
                };
                if group.exercises.iter().any(|p| p.exercise.id == id) {
                    return false;
                }
                group.exercises[exercise_index].exercise = exercise.clone();
            }
        }
        true
    }

    /// The gate used to enable the submit control.
    pub fn can_submit(&self) -> Result<(), SubmitError> {
        if self.player.is_none() {
            return Err(SubmitError::NoPlayer);
        }
        if self.groups.is_empty() {
            return Err(SubmitError::NoCategories);
        }
        if self.total_exercises() == 0 {
            return Err(SubmitError::NoExercises);
        }
        if let Some(group) = self.groups.iter().find(|g| g.days.is_empty()) {
            return Err(SubmitError::GroupWithoutDays(group.category.clone()));
        }
        Ok(())
    }

    /// Emits the completed draft and resets the builder. The emitted value
    /// is an independent copy; further edits to the builder cannot affect
    /// it.
    pub fn submit(&mut self) -> Result<PlanSubmission, SubmitError> {
        self.can_submit()?;
        let (player_id, player_name) = self
            .player
            .clone()
            .ok_or(SubmitError::NoPlayer)?;
        let submission = PlanSubmission {
            player_id,
            player_name,
            categories: std::mem::take(&mut self.groups),
            date: self.date,
            notes: if self.notes.trim().is_empty() {
                None
            } else {
                Some(self.notes.trim().to_string())
            },
        };
        *self = Self::new();
        Ok(submission)
    }
}

impl Default for PlanBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrescriptionUpdate {
    Sets(Sets),
    Reps(Option<String>),
    Weight(Option<String>),
    Notes(Option<String>),
    Exercise(ExerciseID),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("no player selected")]
    NoPlayer,
    #[error("the plan has no category groups")]
    NoCategories,
    #[error("the plan has no exercises")]
    NoExercises,
    #[error("the group {0} has no training days")]
    GroupWithoutDays(Name),
}
