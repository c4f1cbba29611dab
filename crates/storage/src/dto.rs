//! Serde representations of the domain entities as stored in the key-value
//! store. Dates round-trip through ISO-8601 strings, ids through their UUID
//! form. Invalid stored values surface as [`DtoError`].

use chrono::{DateTime, NaiveDate, Utc};
use liftplan_domain as domain;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(thiserror::Error, Debug)]
pub enum DtoError {
    #[error(transparent)]
    Name(#[from] domain::NameError),
    #[error(transparent)]
    Color(#[from] domain::ColorError),
    #[error(transparent)]
    Sets(#[from] domain::SetsError),
    #[error(transparent)]
    Weekday(#[from] domain::WeekdayError),
}

impl From<DtoError> for domain::ReadError {
    fn from(value: DtoError) -> Self {
        domain::ReadError::Other(Box::new(value))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            category: value.category.to_string(),
            description: value.description.clone(),
            created_at: value.created_at,
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = DtoError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            category: domain::Name::new(&value.category)?,
            description: value.description,
            created_at: value.created_at,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&domain::Category> for Category {
    fn from(value: &domain::Category) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            color: value.color.to_string(),
            description: value.description.clone(),
            created_at: value.created_at,
        }
    }
}

impl TryFrom<Category> for domain::Category {
    type Error = DtoError;

    fn try_from(value: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            color: domain::Color::new(&value.color)?,
            description: value.description,
            created_at: value.created_at,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Player {
    pub id: Uuid,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub join_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<&domain::Player> for Player {
    fn from(value: &domain::Player) -> Self {
        Self {
            id: *value.id,
            full_name: value.full_name.to_string(),
            email: value.email.clone(),
            phone: value.phone.clone(),
            join_date: value.join_date,
            created_at: value.created_at,
        }
    }
}

impl TryFrom<Player> for domain::Player {
    type Error = DtoError;

    fn try_from(value: Player) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            full_name: domain::Name::new(&value.full_name)?,
            email: value.email,
            phone: value.phone,
            join_date: value.join_date,
            created_at: value.created_at,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Prescription {
    pub exercise: Exercise,
    pub sets: u32,
    pub reps: Option<String>,
    pub weight: Option<String>,
    pub notes: Option<String>,
}

impl From<&domain::Prescription> for Prescription {
    fn from(value: &domain::Prescription) -> Self {
        Self {
            exercise: (&value.exercise).into(),
            sets: value.sets.into(),
            reps: value.reps.clone(),
            weight: value.weight.clone(),
            notes: value.notes.clone(),
        }
    }
}

impl TryFrom<Prescription> for domain::Prescription {
    type Error = DtoError;

    fn try_from(value: Prescription) -> Result<Self, Self::Error> {
        Ok(Self {
            exercise: value.exercise.try_into()?,
            sets: domain::Sets::new(value.sets)?,
            reps: value.reps,
            weight: value.weight,
            notes: value.notes,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: String,
    pub days: Vec<String>,
    pub exercises: Vec<Prescription>,
}

impl From<&domain::CategoryGroup> for CategoryGroup {
    fn from(value: &domain::CategoryGroup) -> Self {
        Self {
            category: value.category.to_string(),
            days: value.days.iter().map(|d| d.name().to_string()).collect(),
            exercises: value.exercises.iter().map(Into::into).collect(),
        }
    }
}

impl TryFrom<CategoryGroup> for domain::CategoryGroup {
    type Error = DtoError;

    fn try_from(value: CategoryGroup) -> Result<Self, Self::Error> {
        Ok(Self {
            category: domain::Name::new(&value.category)?,
            days: value
                .days
                .iter()
                .map(|d| domain::Weekday::try_from(d.as_str()))
                .collect::<Result<_, _>>()?,
            exercises: value
                .exercises
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<_, _>>()?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkoutPlan {
    pub id: Uuid,
    pub player_id: Uuid,
    pub player_name: String,
    pub categories: Vec<CategoryGroup>,
    pub date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&domain::WorkoutPlan> for WorkoutPlan {
    fn from(value: &domain::WorkoutPlan) -> Self {
        Self {
            id: *value.id,
            player_id: *value.player_id,
            player_name: value.player_name.to_string(),
            categories: value.categories.iter().map(Into::into).collect(),
            date: value.date,
            notes: value.notes.clone(),
            created_at: value.created_at,
        }
    }
}

impl TryFrom<WorkoutPlan> for domain::WorkoutPlan {
    type Error = DtoError;

    fn try_from(value: WorkoutPlan) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            player_id: value.player_id.into(),
            player_name: domain::Name::new(&value.player_name)?,
            categories: value
                .categories
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<_, _>>()?,
            date: value.date,
            notes: value.notes,
            created_at: value.created_at,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SocialLinks {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GymSettings {
    pub name: String,
    pub logo: Option<String>,
    pub contact_email: String,
    pub contact_phone: String,
    pub location: String,
    pub social: SocialLinks,
    pub custom_font: Option<String>,
    pub theme_color: String,
    pub language: String,
    pub dark_mode: bool,
}

impl From<&domain::GymSettings> for GymSettings {
    fn from(value: &domain::GymSettings) -> Self {
        Self {
            name: value.name.clone(),
            logo: value.logo.clone(),
            contact_email: value.contact_email.clone(),
            contact_phone: value.contact_phone.clone(),
            location: value.location.clone(),
            social: SocialLinks {
                facebook: value.social.facebook.clone(),
                instagram: value.social.instagram.clone(),
                twitter: value.social.twitter.clone(),
            },
            custom_font: value.custom_font.clone(),
            theme_color: value.theme_color.to_string(),
            language: value.language.clone(),
            dark_mode: value.dark_mode,
        }
    }
}

impl TryFrom<GymSettings> for domain::GymSettings {
    type Error = DtoError;

    fn try_from(value: GymSettings) -> Result<Self, Self::Error> {
        Ok(Self {
            name: value.name,
            logo: value.logo,
            contact_email: value.contact_email,
            contact_phone: value.contact_phone,
            location: value.location,
            social: domain::SocialLinks {
                facebook: value.social.facebook,
                instagram: value.social.instagram,
                twitter: value.social.twitter,
            },
            custom_font: value.custom_font,
            theme_color: domain::Color::new(&value.theme_color)?,
            language: value.language,
            dark_mode: value.dark_mode,
        })
    }
}
