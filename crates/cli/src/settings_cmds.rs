use std::path::Path;

use anyhow::{Context, bail};
use base64::{Engine, engine::general_purpose::STANDARD};
use liftplan_domain::{Color, SettingsService};

use crate::Store;

pub async fn show(store: &Store) -> anyhow::Result<()> {
    let settings = store.get_settings().await?;
    println!("name:        {}", settings.name);
    println!("email:       {}", settings.contact_email);
    println!("phone:       {}", settings.contact_phone);
    println!("location:    {}", settings.location);
    println!("theme color: {}", settings.theme_color);
    println!("language:    {}", settings.language);
    println!("dark mode:   {}", settings.dark_mode);
    println!(
        "logo:        {}",
        if settings.logo.is_some() { "set" } else { "-" }
    );
    println!(
        "custom font: {}",
        settings.custom_font.as_deref().unwrap_or("-")
    );
    Ok(())
}

#[derive(Default)]
pub struct Update {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub logo_file: Option<String>,
    pub clear_logo: bool,
    pub font: Option<String>,
    pub clear_font: bool,
    pub theme_color: Option<String>,
    pub language: Option<String>,
    pub dark_mode: Option<bool>,
}

pub async fn set(store: &Store, update: Update) -> anyhow::Result<()> {
    let mut settings = store.get_settings().await?;
    if let Some(name) = update.name {
        settings.name = name;
    }
    if let Some(email) = update.email {
        settings.contact_email = email;
    }
    if let Some(phone) = update.phone {
        settings.contact_phone = phone;
    }
    if let Some(location) = update.location {
        settings.location = location;
    }
    if update.clear_logo {
        settings.logo = None;
    } else if let Some(path) = update.logo_file {
        settings.logo = Some(logo_data_url(Path::new(&path))?);
    }
    if update.clear_font {
        settings.custom_font = None;
    } else if let Some(font) = update.font {
        settings.custom_font = Some(font);
    }
    if let Some(color) = update.theme_color {
        settings.theme_color = Color::new(&color)?;
    }
    if let Some(language) = update.language {
        settings.language = language;
    }
    if let Some(dark_mode) = update.dark_mode {
        settings.dark_mode = dark_mode;
    }
    store.replace_settings(settings).await?;
    println!("settings saved");
    Ok(())
}

fn logo_data_url(path: &Path) -> anyhow::Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    let mime = match path.extension().and_then(|e| e.to_str()) {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        _ => bail!("logo must be a .png, .jpg or .jpeg file"),
    };
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tests::store;

    #[tokio::test]
    async fn test_set_and_show() {
        let (store, _dir) = store();
        set(
            &store,
            Update {
                name: Some("Northside Strength".to_string()),
                theme_color: Some("#1D4ED8".to_string()),
                language: Some("de".to_string()),
                ..Update::default()
            },
        )
        .await
        .unwrap();

        let settings = store.get_settings().await.unwrap();
        assert_eq!(settings.name, "Northside Strength");
        assert_eq!(settings.theme_color, Color::new("#1D4ED8").unwrap());
        assert_eq!(settings.language, "de");
    }

    #[tokio::test]
    async fn test_logo_from_file() {
        let (store, dir) = store();
        let path = dir.path().join("logo.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();
        set(
            &store,
            Update {
                logo_file: Some(path.display().to_string()),
                ..Update::default()
            },
        )
        .await
        .unwrap();

        let logo = store.get_settings().await.unwrap().logo.unwrap();
        assert!(logo.starts_with("data:image/png;base64,"));

        set(
            &store,
            Update {
                clear_logo: true,
                ..Update::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(store.get_settings().await.unwrap().logo, None);
    }
}
