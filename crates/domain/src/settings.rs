use crate::{Color, ReadError, UpdateError};

#[allow(async_fn_in_trait)]
pub trait SettingsService: Send + Sync + 'static {
    async fn get_settings(&self) -> Result<GymSettings, ReadError>;
    async fn replace_settings(&self, settings: GymSettings) -> Result<GymSettings, UpdateError>;
}

#[allow(async_fn_in_trait)]
pub trait SettingsRepository: Send + Sync + 'static {
    /// Returns the default record when no settings have been saved yet.
    async fn read_settings(&self) -> Result<GymSettings, ReadError>;
    /// Replaces the whole record.
    async fn replace_settings(&self, settings: GymSettings) -> Result<GymSettings, UpdateError>;
}

/// Gym-wide configuration. A single record, loaded at startup and replaced
/// wholesale on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GymSettings {
    pub name: String,
    /// Logo image as a base64 data URL.
    pub logo: Option<String>,
    pub contact_email: String,
    pub contact_phone: String,
    pub location: String,
    pub social: SocialLinks,
    /// Path to a TTF file used for document text instead of the built-in
    /// fonts.
    pub custom_font: Option<String>,
    pub theme_color: Color,
    /// Display language code. Unrecognized codes fall back to English.
    pub language: String,
    pub dark_mode: bool,
}

impl Default for GymSettings {
    fn default() -> Self {
        Self {
            name: "IRON PARADISE GYM CENTER".to_string(),
            logo: None,
            contact_email: "info@ironparadise.com".to_string(),
            contact_phone: "+1 (555) 123-4567".to_string(),
            location: "New York, USA".to_string(),
            social: SocialLinks::default(),
            custom_font: None,
            theme_color: Color::new("#F97316").expect("literal color"),
            language: "en".to_string(),
            dark_mode: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialLinks {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
}
