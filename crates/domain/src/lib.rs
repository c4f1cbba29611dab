#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod builder;
mod category;
mod error;
mod exercise;
mod plan;
mod player;
mod service;
mod settings;
mod value;

pub use builder::{PlanBuilder, PrescriptionUpdate, SubmitError};
pub use category::{
    Category, CategoryDeletion, CategoryID, CategoryRepository, CategoryService,
};
pub use error::{
    CreateError, DeleteError, ReadError, StorageError, UpdateError, ValidationError,
};
pub use exercise::{Exercise, ExerciseID, ExerciseRepository, ExerciseService};
pub use plan::{
    CategoryGroup, PlanID, PlanRepository, PlanService, PlanSubmission, Prescription, WorkoutPlan,
};
pub use player::{Player, PlayerID, PlayerRepository, PlayerService};
pub use service::Service;
pub use settings::{GymSettings, SettingsRepository, SettingsService, SocialLinks};
pub use value::{
    Color, ColorError, Name, NameError, Sets, SetsError, Weekday, WeekdayError,
};
