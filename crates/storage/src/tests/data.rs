use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use liftplan_domain as domain;

fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 6, 10, 30, 15).unwrap()
}

pub static CATEGORY: std::sync::LazyLock<domain::Category> =
    std::sync::LazyLock::new(|| domain::Category {
        id: 1.into(),
        name: domain::Name::new("chest").unwrap(),
        color: domain::Color::new("#F97316").unwrap(),
        description: Some("Chest and pectoral exercises".to_string()),
        created_at: timestamp(),
    });

pub static CATEGORY_2: std::sync::LazyLock<domain::Category> =
    std::sync::LazyLock::new(|| domain::Category {
        id: 2.into(),
        name: domain::Name::new("legs").unwrap(),
        color: domain::Color::new("#3B82F6").unwrap(),
        description: None,
        created_at: timestamp(),
    });

pub static EXERCISE: std::sync::LazyLock<domain::Exercise> =
    std::sync::LazyLock::new(|| domain::Exercise {
        id: 1.into(),
        name: domain::Name::new("Bench Press").unwrap(),
        category: domain::Name::new("chest").unwrap(),
        description: Some("Classic chest exercise with barbell".to_string()),
        created_at: timestamp(),
    });

pub static EXERCISE_2: std::sync::LazyLock<domain::Exercise> =
    std::sync::LazyLock::new(|| domain::Exercise {
        id: 2.into(),
        name: domain::Name::new("Squats").unwrap(),
        category: domain::Name::new("legs").unwrap(),
        description: None,
        created_at: timestamp(),
    });

pub static PLAYER: std::sync::LazyLock<domain::Player> =
    std::sync::LazyLock::new(|| domain::Player {
        id: 1.into(),
        full_name: domain::Name::new("Jane Doe").unwrap(),
        email: Some("jane@example.com".to_string()),
        phone: None,
        join_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        created_at: timestamp(),
    });

pub static PLAN: std::sync::LazyLock<domain::WorkoutPlan> =
    std::sync::LazyLock::new(|| domain::WorkoutPlan {
        id: 1.into(),
        player_id: 1.into(),
        player_name: domain::Name::new("Jane Doe").unwrap(),
        categories: vec![domain::CategoryGroup {
            category: domain::Name::new("chest").unwrap(),
            days: vec![domain::Weekday::Monday, domain::Weekday::Thursday],
            exercises: vec![domain::Prescription {
                exercise: EXERCISE.clone(),
                sets: domain::Sets::new(4).unwrap(),
                reps: Some("8-10".to_string()),
                weight: Some("60kg".to_string()),
                notes: Some("pause at the bottom".to_string()),
            }],
        }],
        date: NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
        notes: Some("deload next week".to_string()),
        created_at: timestamp(),
    });

pub static SETTINGS: std::sync::LazyLock<domain::GymSettings> =
    std::sync::LazyLock::new(|| domain::GymSettings {
        name: "IRON PARADISE GYM CENTER".to_string(),
        logo: None,
        contact_email: "info@ironparadise.com".to_string(),
        contact_phone: "+1 (555) 123-4567".to_string(),
        location: "New York, USA".to_string(),
        social: domain::SocialLinks {
            facebook: Some("https://facebook.com/ironparadise".to_string()),
            instagram: None,
            twitter: None,
        },
        custom_font: None,
        theme_color: domain::Color::new("#10B981").unwrap(),
        language: "de".to_string(),
        dark_mode: true,
    });
