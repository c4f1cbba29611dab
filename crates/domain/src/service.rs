use chrono::NaiveDate;
use log::{debug, error};

use crate::{
    Category, CategoryDeletion, CategoryID, CategoryRepository, CategoryService, Color,
    CreateError, DeleteError, Exercise, ExerciseID, ExerciseRepository, ExerciseService,
    GymSettings, Name, PlanID, PlanRepository, PlanService, PlanSubmission, Player, PlayerID,
    PlayerRepository, PlayerService, ReadError, SettingsRepository, SettingsService, UpdateError,
    WorkoutPlan,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::Unavailable) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.repository.read_exercises(),
            ReadError,
            "get",
            "exercises"
        )
    }

    async fn create_exercise(
        &self,
        name: Name,
        category: Name,
        description: Option<String>,
    ) -> Result<Exercise, CreateError> {
        log_on_error!(
            self.repository.create_exercise(name, category, description),
            CreateError,
            "create",
            "exercise"
        )
    }

    async fn delete_exercise(&self, id: ExerciseID) -> Result<ExerciseID, DeleteError> {
        log_on_error!(
            self.repository.delete_exercise(id),
            DeleteError,
            "delete",
            "exercise"
        )
    }
}

impl<R: CategoryRepository + ExerciseRepository> CategoryService for Service<R> {
    async fn get_categories(&self) -> Result<Vec<Category>, ReadError> {
        log_on_error!(
            self.repository.read_categories(),
            ReadError,
            "get",
            "categories"
        )
    }

    async fn create_category(
        &self,
        name: Name,
        color: Color,
        description: Option<String>,
    ) -> Result<Category, CreateError> {
        log_on_error!(
            self.repository.create_category(name, color, description),
            CreateError,
            "create",
            "category"
        )
    }

    async fn modify_category(
        &self,
        id: CategoryID,
        name: Option<Name>,
        color: Option<Color>,
        description: Option<Option<String>>,
    ) -> Result<Category, UpdateError> {
        log_on_error!(
            self.repository.modify_category(id, name, color, description),
            UpdateError,
            "modify",
            "category"
        )
    }

    async fn delete_category(&self, id: CategoryID) -> Result<CategoryDeletion, DeleteError> {
        log_on_error!(
            self.repository.delete_category(id),
            DeleteError,
            "delete",
            "category"
        )
    }

    async fn category_usage(&self, id: CategoryID) -> Result<usize, ReadError> {
        let categories =
            log_on_error!(self.repository.read_categories(), ReadError, "get", "categories")?;
        let Some(category) = categories.iter().find(|c| c.id == id) else {
            return Err(ReadError::NotFound);
        };
        let exercises =
            log_on_error!(self.repository.read_exercises(), ReadError, "get", "exercises")?;
        Ok(exercises
            .iter()
            .filter(|e| e.category == category.name)
            .count())
    }
}

impl<R: PlayerRepository> PlayerService for Service<R> {
    async fn get_players(&self) -> Result<Vec<Player>, ReadError> {
        log_on_error!(self.repository.read_players(), ReadError, "get", "players")
    }

    async fn create_player(
        &self,
        full_name: Name,
        email: Option<String>,
        phone: Option<String>,
        join_date: NaiveDate,
    ) -> Result<Player, CreateError> {
        log_on_error!(
            self.repository
                .create_player(full_name, email, phone, join_date),
            CreateError,
            "create",
            "player"
        )
    }
}

impl<R: PlanRepository> PlanService for Service<R> {
    async fn get_plans(&self) -> Result<Vec<WorkoutPlan>, ReadError> {
        log_on_error!(self.repository.read_plans(), ReadError, "get", "plans")
    }

    async fn create_plan(&self, submission: PlanSubmission) -> Result<WorkoutPlan, CreateError> {
        log_on_error!(
            self.repository.create_plan(submission),
            CreateError,
            "create",
            "plan"
        )
    }

    async fn delete_plan(&self, id: PlanID) -> Result<PlanID, DeleteError> {
        log_on_error!(self.repository.delete_plan(id), DeleteError, "delete", "plan")
    }
}

impl<R: SettingsRepository> SettingsService for Service<R> {
    async fn get_settings(&self) -> Result<GymSettings, ReadError> {
        log_on_error!(
            self.repository.read_settings(),
            ReadError,
            "get",
            "settings"
        )
    }

    async fn replace_settings(&self, settings: GymSettings) -> Result<GymSettings, UpdateError> {
        log_on_error!(
            self.repository.replace_settings(settings),
            UpdateError,
            "replace",
            "settings"
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::{DateTime, Utc};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ValidationError;

    struct FakeRepository {
        categories: Mutex<Vec<Category>>,
        exercises: Mutex<Vec<Exercise>>,
    }

    impl FakeRepository {
        fn new(categories: Vec<Category>, exercises: Vec<Exercise>) -> Self {
            Self {
                categories: Mutex::new(categories),
                exercises: Mutex::new(exercises),
            }
        }
    }

    impl CategoryRepository for FakeRepository {
        async fn read_categories(&self) -> Result<Vec<Category>, ReadError> {
            Ok(self.categories.lock().unwrap().clone())
        }

        async fn create_category(
            &self,
            name: Name,
            color: Color,
            description: Option<String>,
        ) -> Result<Category, CreateError> {
            let category = Category {
                id: CategoryID::new(),
                name,
                color,
                description,
                created_at: Utc::now(),
            };
            self.categories.lock().unwrap().push(category.clone());
            Ok(category)
        }

        async fn modify_category(
            &self,
            _id: CategoryID,
            _name: Option<Name>,
            _color: Option<Color>,
            _description: Option<Option<String>>,
        ) -> Result<Category, UpdateError> {
            Err(UpdateError::NotFound)
        }

        async fn delete_category(&self, _id: CategoryID) -> Result<CategoryDeletion, DeleteError> {
            Err(DeleteError::NotFound)
        }
    }

    impl ExerciseRepository for FakeRepository {
        async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
            Ok(self.exercises.lock().unwrap().clone())
        }

        async fn create_exercise(
            &self,
            name: Name,
            category: Name,
            description: Option<String>,
        ) -> Result<Exercise, CreateError> {
            let exercise = Exercise {
                id: ExerciseID::new(),
                name,
                category,
                description,
                created_at: Utc::now(),
            };
            self.exercises.lock().unwrap().push(exercise.clone());
            Ok(exercise)
        }

        async fn delete_exercise(&self, _id: ExerciseID) -> Result<ExerciseID, DeleteError> {
            Err(DeleteError::NotFound)
        }
    }

    fn category(id: u128, name: &str) -> Category {
        Category {
            id: id.into(),
            name: Name::new(name).unwrap(),
            color: Color::new("#F97316").unwrap(),
            description: None,
            created_at: DateTime::UNIX_EPOCH,
        }
    }

    fn exercise(id: u128, name: &str, category: &str) -> Exercise {
        Exercise {
            id: id.into(),
            name: Name::new(name).unwrap(),
            category: Name::new(category).unwrap(),
            description: None,
            created_at: DateTime::UNIX_EPOCH,
        }
    }

    #[tokio::test]
    async fn test_category_usage() {
        let service = Service::new(FakeRepository::new(
            vec![category(1, "chest"), category(2, "legs")],
            vec![
                exercise(1, "Bench Press", "chest"),
                exercise(2, "Cable Fly", "chest"),
                exercise(3, "Squats", "legs"),
            ],
        ));

        assert_eq!(service.category_usage(1.into()).await.unwrap(), 2);
        assert_eq!(service.category_usage(2.into()).await.unwrap(), 1);
        assert!(matches!(
            service.category_usage(3.into()).await,
            Err(ReadError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_validate_category_name() {
        let service = Service::new(FakeRepository::new(
            vec![category(1, "chest"), category(2, "legs")],
            vec![],
        ));

        assert_eq!(
            service
                .validate_category_name("back", CategoryID::nil())
                .await
                .unwrap(),
            Name::new("back").unwrap()
        );
        // a category may keep its own name
        assert_eq!(
            service.validate_category_name("chest", 1.into()).await.unwrap(),
            Name::new("chest").unwrap()
        );
        assert!(matches!(
            service.validate_category_name("chest", 2.into()).await,
            Err(ValidationError::Conflict(field)) if field == "name"
        ));
        assert!(matches!(
            service.validate_category_name("  ", CategoryID::nil()).await,
            Err(ValidationError::Other(_))
        ));
    }

    #[tokio::test]
    async fn test_validate_exercise_category() {
        let service = Service::new(FakeRepository::new(vec![category(1, "chest")], vec![]));
        let known = [Name::new("chest").unwrap()];

        assert!(service
            .validate_exercise_category(&Name::new("chest").unwrap(), &known)
            .await
            .is_ok());
        assert!(matches!(
            service
                .validate_exercise_category(&Name::new("back").unwrap(), &known)
                .await,
            Err(ValidationError::Other(_))
        ));
    }
}
