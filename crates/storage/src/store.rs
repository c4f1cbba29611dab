use std::sync::Mutex;

use chrono::{NaiveDate, Utc};
use liftplan_domain::{
    Category, CategoryDeletion, CategoryID, CategoryRepository, Color, CreateError, DeleteError,
    Exercise, ExerciseID, ExerciseRepository, GymSettings, Name, PlanID, PlanRepository,
    PlanSubmission, Player, PlayerID, PlayerRepository, ReadError, SettingsRepository,
    UpdateError, WorkoutPlan, catalog,
};
use log::warn;
use serde::Serialize;

use crate::{Kv, dto, keys};

/// Write-through entity store. All collections are held in memory and
/// mirrored to the key-value store on every mutation. Mirror writes are
/// best-effort: a failed write is logged and does not fail the operation.
///
/// On first run (key absent) the store seeds the starter catalog and the
/// default settings.
pub struct LocalStore<K> {
    kv: K,
    exercises: Mutex<Vec<Exercise>>,
    categories: Mutex<Vec<Category>>,
    players: Mutex<Vec<Player>>,
    plans: Mutex<Vec<WorkoutPlan>>,
    settings: Mutex<GymSettings>,
}

impl<K: Kv> LocalStore<K> {
    pub fn open(kv: K) -> Result<Self, ReadError> {
        let categories = match Self::load::<dto::Category, Category>(&kv, keys::CATEGORIES)? {
            Some(categories) => categories,
            None => {
                let seeded = catalog::CATEGORIES
                    .iter()
                    .map(|seed| {
                        Ok(Category {
                            id: CategoryID::new(),
                            name: Name::new(seed.name)
                                .map_err(|err| ReadError::Other(err.into()))?,
                            color: Color::new(seed.color)
                                .map_err(|err| ReadError::Other(err.into()))?,
                            description: Some(seed.description.to_string()),
                            created_at: Utc::now(),
                        })
                    })
                    .collect::<Result<Vec<_>, ReadError>>()?;
                Self::persist(&kv, keys::CATEGORIES, &dtos::<_, dto::Category>(&seeded));
                seeded
            }
        };
        let exercises = match Self::load::<dto::Exercise, Exercise>(&kv, keys::EXERCISES)? {
            Some(exercises) => exercises,
            None => {
                let seeded = catalog::EXERCISES
                    .iter()
                    .map(|seed| {
                        Ok(Exercise {
                            id: ExerciseID::new(),
                            name: Name::new(seed.name)
                                .map_err(|err| ReadError::Other(err.into()))?,
                            category: Name::new(seed.category)
                                .map_err(|err| ReadError::Other(err.into()))?,
                            description: Some(seed.description.to_string()),
                            created_at: Utc::now(),
                        })
                    })
                    .collect::<Result<Vec<_>, ReadError>>()?;
                Self::persist(&kv, keys::EXERCISES, &dtos::<_, dto::Exercise>(&seeded));
                seeded
            }
        };
        let players = Self::load::<dto::Player, Player>(&kv, keys::PLAYERS)?.unwrap_or_default();
        let plans = Self::load::<dto::WorkoutPlan, WorkoutPlan>(&kv, keys::PLANS)?
            .unwrap_or_default();
        let settings = match kv
            .get::<dto::GymSettings>(keys::SETTINGS)
            .map_err(|err| ReadError::Storage(err.into()))?
        {
            Some(settings) => GymSettings::try_from(settings)
                .map_err(|err| ReadError::Other(Box::new(err)))?,
            None => {
                let settings = GymSettings::default();
                Self::persist(&kv, keys::SETTINGS, &dto::GymSettings::from(&settings));
                settings
            }
        };
        Ok(Self {
            kv,
            exercises: Mutex::new(exercises),
            categories: Mutex::new(categories),
            players: Mutex::new(players),
            plans: Mutex::new(plans),
            settings: Mutex::new(settings),
        })
    }

    fn load<D, T>(kv: &K, key: &str) -> Result<Option<Vec<T>>, ReadError>
    where
        D: serde::de::DeserializeOwned,
        T: TryFrom<D, Error = dto::DtoError>,
    {
        let Some(entries) = kv
            .get::<Vec<D>>(key)
            .map_err(|err| ReadError::Storage(err.into()))?
        else {
            return Ok(None);
        };
        Ok(Some(
            entries
                .into_iter()
                .map(|entry| T::try_from(entry).map_err(Into::into))
                .collect::<Result<Vec<_>, ReadError>>()?,
        ))
    }

    fn persist<T: Serialize>(kv: &K, key: &str, value: &T) {
        if let Err(err) = kv.set(key, value) {
            warn!("failed to persist {key}: {err}");
        }
    }

    fn mirror_exercises(&self, exercises: &[Exercise]) {
        Self::persist(
            &self.kv,
            keys::EXERCISES,
            &dtos::<_, dto::Exercise>(exercises),
        );
    }

    fn mirror_categories(&self, categories: &[Category]) {
        Self::persist(
            &self.kv,
            keys::CATEGORIES,
            &dtos::<_, dto::Category>(categories),
        );
    }
}

fn dtos<'a, T, D: From<&'a T>>(entries: &'a [T]) -> Vec<D> {
    entries.iter().map(D::from).collect()
}

impl<K: Kv> ExerciseRepository for LocalStore<K> {
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
        let mut exercises = self.exercises.lock().unwrap();
        exercises.push(exercise.clone());
        self.mirror_exercises(&exercises);
        Ok(exercise)
    }

    async fn delete_exercise(&self, id: ExerciseID) -> Result<ExerciseID, DeleteError> {
        let mut exercises = self.exercises.lock().unwrap();
        let Some(position) = exercises.iter().position(|e| e.id == id) else {
            return Err(DeleteError::NotFound);
        };
        exercises.remove(position);
        self.mirror_exercises(&exercises);
        Ok(id)
    }
}

impl<K: Kv> CategoryRepository for LocalStore<K> {
    async fn read_categories(&self) -> Result<Vec<Category>, ReadError> {
        Ok(self.categories.lock().unwrap().clone())
    }

    async fn create_category(
        &self,
        name: Name,
        color: Color,
        description: Option<String>,
    ) -> Result<Category, CreateError> {
        let mut categories = self.categories.lock().unwrap();
        if categories.iter().any(|c| c.name == name) {
            return Err(CreateError::Conflict);
        }
        let category = Category {
            id: CategoryID::new(),
            name,
            color,
            description,
            created_at: Utc::now(),
        };
        categories.push(category.clone());
        self.mirror_categories(&categories);
        Ok(category)
    }

    async fn modify_category(
        &self,
        id: CategoryID,
        name: Option<Name>,
        color: Option<Color>,
        description: Option<Option<String>>,
    ) -> Result<Category, UpdateError> {
        let mut categories = self.categories.lock().unwrap();
        let Some(position) = categories.iter().position(|c| c.id == id) else {
            return Err(UpdateError::NotFound);
        };
        if let Some(name) = &name {
            if categories.iter().any(|c| c.id != id && c.name == *name) {
                return Err(UpdateError::Conflict);
            }
        }
        let old_name = categories[position].name.clone();
        if let Some(name) = name {
            categories[position].name = name;
        }
        if let Some(color) = color {
            categories[position].color = color;
        }
        if let Some(description) = description {
            categories[position].description = description;
        }
        let category = categories[position].clone();
        self.mirror_categories(&categories);

        // rename cascade, part of the same operation
        if category.name != old_name {
            let mut exercises = self.exercises.lock().unwrap();
            for exercise in exercises.iter_mut().filter(|e| e.category == old_name) {
                exercise.category = category.name.clone();
            }
            self.mirror_exercises(&exercises);
        }

        Ok(category)
    }

    async fn delete_category(&self, id: CategoryID) -> Result<CategoryDeletion, DeleteError> {
        let mut categories = self.categories.lock().unwrap();
        let Some(position) = categories.iter().position(|c| c.id == id) else {
            return Err(DeleteError::NotFound);
        };
        let category = categories.remove(position);
        self.mirror_categories(&categories);

        let mut exercises = self.exercises.lock().unwrap();
        let deleted_exercises = exercises
            .iter()
            .filter(|e| e.category == category.name)
            .map(|e| e.id)
            .collect::<Vec<_>>();
        exercises.retain(|e| e.category != category.name);
        self.mirror_exercises(&exercises);

        Ok(CategoryDeletion {
            id,
            deleted_exercises,
        })
    }
}

impl<K: Kv> PlayerRepository for LocalStore<K> {
    async fn read_players(&self) -> Result<Vec<Player>, ReadError> {
        Ok(self.players.lock().unwrap().clone())
    }

    async fn create_player(
        &self,
        full_name: Name,
        email: Option<String>,
        phone: Option<String>,
        join_date: NaiveDate,
    ) -> Result<Player, CreateError> {
        let player = Player {
            id: PlayerID::new(),
            full_name,
            email,
            phone,
            join_date,
            created_at: Utc::now(),
        };
        let mut players = self.players.lock().unwrap();
        players.push(player.clone());
        Self::persist(&self.kv, keys::PLAYERS, &dtos::<_, dto::Player>(&players));
        Ok(player)
    }
}

impl<K: Kv> PlanRepository for LocalStore<K> {
    async fn read_plans(&self) -> Result<Vec<WorkoutPlan>, ReadError> {
        Ok(self.plans.lock().unwrap().clone())
    }

    async fn create_plan(&self, submission: PlanSubmission) -> Result<WorkoutPlan, CreateError> {
        let plan = WorkoutPlan {
            id: PlanID::new(),
            player_id: submission.player_id,
            player_name: submission.player_name,
            categories: submission.categories,
            date: submission.date,
            notes: submission.notes,
            created_at: Utc::now(),
        };
        let mut plans = self.plans.lock().unwrap();
        plans.push(plan.clone());
        Self::persist(&self.kv, keys::PLANS, &dtos::<_, dto::WorkoutPlan>(&plans));
        Ok(plan)
    }

    async fn delete_plan(&self, id: PlanID) -> Result<PlanID, DeleteError> {
        let mut plans = self.plans.lock().unwrap();
        let Some(position) = plans.iter().position(|p| p.id == id) else {
            return Err(DeleteError::NotFound);
        };
        plans.remove(position);
        Self::persist(&self.kv, keys::PLANS, &dtos::<_, dto::WorkoutPlan>(&plans));
        Ok(id)
    }
}

impl<K: Kv> SettingsRepository for LocalStore<K> {
    async fn read_settings(&self) -> Result<GymSettings, ReadError> {
        Ok(self.settings.lock().unwrap().clone())
    }

    async fn replace_settings(&self, settings: GymSettings) -> Result<GymSettings, UpdateError> {
        let mut current = self.settings.lock().unwrap();
        *current = settings.clone();
        Self::persist(&self.kv, keys::SETTINGS, &dto::GymSettings::from(&settings));
        Ok(settings)
    }
}
