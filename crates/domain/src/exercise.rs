use chrono::{DateTime, Utc};
use derive_more::Deref;
use uuid::Uuid;

use crate::{CreateError, DeleteError, Name, ReadError, ValidationError};

#[allow(async_fn_in_trait)]
pub trait ExerciseService: Send + Sync + 'static {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    async fn create_exercise(
        &self,
        name: Name,
        category: Name,
        description: Option<String>,
    ) -> Result<Exercise, CreateError>;
    async fn delete_exercise(&self, id: ExerciseID) -> Result<ExerciseID, DeleteError>;

    /// Check that `category` names a known category before an exercise
    /// referencing it is created.
    async fn validate_exercise_category(
        &self,
        category: &Name,
        known_categories: &[Name],
    ) -> Result<(), ValidationError> {
        if known_categories.contains(category) {
            Ok(())
        } else {
            Err(ValidationError::Other(
                format!("unknown category {category}").into(),
            ))
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository: Send + Sync + 'static {
    async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    async fn create_exercise(
        &self,
        name: Name,
        category: Name,
        description: Option<String>,
    ) -> Result<Exercise, CreateError>;
    async fn delete_exercise(&self, id: ExerciseID) -> Result<ExerciseID, DeleteError>;
}

/// An exercise references its category by name. Renaming a category cascades
/// to the `category` field of every dependent exercise (see
/// [`CategoryRepository::modify_category`](crate::CategoryRepository::modify_category)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub category: Name,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
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

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_exercise_id_nil() {
        assert!(ExerciseID::nil().is_nil());
        assert_eq!(ExerciseID::nil(), ExerciseID::default());
    }

    #[test]
    fn test_exercise_id_new() {
        assert!(!ExerciseID::new().is_nil());
        assert_ne!(ExerciseID::new(), ExerciseID::new());
    }
}
