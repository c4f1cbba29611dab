use chrono::{DateTime, Utc};
use derive_more::Deref;
use uuid::Uuid;

use crate::{
    Color, CreateError, DeleteError, ExerciseID, Name, ReadError, UpdateError, ValidationError,
};

#[allow(async_fn_in_trait)]
pub trait CategoryService: Send + Sync + 'static {
    async fn get_categories(&self) -> Result<Vec<Category>, ReadError>;
    async fn create_category(
        &self,
        name: Name,
        color: Color,
        description: Option<String>,
    ) -> Result<Category, CreateError>;
    async fn modify_category(
        &self,
        id: CategoryID,
        name: Option<Name>,
        color: Option<Color>,
        description: Option<Option<String>>,
    ) -> Result<Category, UpdateError>;
    async fn delete_category(&self, id: CategoryID) -> Result<CategoryDeletion, DeleteError>;

    /// Number of exercises that reference the category, for the confirmation
    /// prompt shown before a cascade delete.
    async fn category_usage(&self, id: CategoryID) -> Result<usize, ReadError>;

    /// Category names are unique because exercises and plan groups reference
    /// categories by name.
    async fn validate_category_name(
        &self,
        name: &str,
        id: CategoryID,
    ) -> Result<Name, ValidationError> {
        match Name::new(name) {
            Ok(name) => match self.get_categories().await {
                Ok(categories) => {
                    if categories.iter().all(|c| c.id == id || c.name != name) {
                        Ok(name)
                    } else {
                        Err(ValidationError::Conflict("name".to_string()))
                    }
                }
                Err(err) => Err(ValidationError::Other(err.into())),
            },
            Err(err) => Err(ValidationError::Other(err.into())),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait CategoryRepository: Send + Sync + 'static {
    async fn read_categories(&self) -> Result<Vec<Category>, ReadError>;
    async fn create_category(
        &self,
        name: Name,
        color: Color,
        description: Option<String>,
    ) -> Result<Category, CreateError>;
    /// A name change cascades to the `category` field of every dependent
    /// exercise within the same call.
    async fn modify_category(
        &self,
        id: CategoryID,
        name: Option<Name>,
        color: Option<Color>,
        description: Option<Option<String>>,
    ) -> Result<Category, UpdateError>;
    /// Deletes the category and every exercise referencing it by name.
    async fn delete_category(&self, id: CategoryID) -> Result<CategoryDeletion, DeleteError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryID,
    pub name: Name,
    pub color: Color,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CategoryID(Uuid);

impl CategoryID {
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

impl From<Uuid> for CategoryID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for CategoryID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Outcome of a cascade delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDeletion {
    pub id: CategoryID,
    pub deleted_exercises: Vec<ExerciseID>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_category_id_nil() {
        assert!(CategoryID::nil().is_nil());
        assert_eq!(CategoryID::nil(), CategoryID::default());
    }

    #[test]
    fn test_category_id_new() {
        assert!(!CategoryID::new().is_nil());
        assert_ne!(CategoryID::new(), CategoryID::new());
    }
}
