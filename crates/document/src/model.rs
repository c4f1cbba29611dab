//! The intermediate document model. A [`Document`] is the fully resolved,
//! label-free input of the PDF serializer: every string is final, the logo
//! is decoded, the custom font is parsed. Constructing one cannot yield an
//! empty section list.

use liftplan_domain::{GymSettings, WorkoutPlan};

use crate::{
    font::{FontError, TrueTypeFont},
    image::{Image, ImageError},
    labels::Labels,
};

#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    #[error("logo: {0}")]
    Logo(#[from] ImageError),
    #[error("font {path}: could not be read: {source}")]
    FontFile {
        path: String,
        source: std::io::Error,
    },
    #[error("font {path}: {source}")]
    Font { path: String, source: FontError },
}

/// Presentation inputs resolved from the gym settings. The plain fallback
/// layout drops all of them.
pub struct Style {
    pub accent: (u8, u8, u8),
    pub logo: Option<Image>,
    pub font: Option<TrueTypeFont>,
}

pub struct Document {
    pub style: Style,
    /// Heading above the category blocks, e.g. "Exercises (3)".
    pub exercises_title: String,
    sections: Vec<Section>,
}

pub enum Section {
    Header {
        gym_name: String,
        title: String,
    },
    PlayerInfo {
        title: String,
        fields: Vec<Field>,
        total_label: String,
        total: usize,
    },
    CategoryBlock {
        title: String,
        days: String,
        exercises: Vec<ExerciseRow>,
    },
    Notes {
        title: String,
        text: String,
    },
    Footer {
        left: String,
        right: String,
    },
}

pub struct Field {
    pub label: String,
    pub value: String,
}

pub struct ExerciseRow {
    pub number: usize,
    pub name: String,
    /// Short sets/reps/weight markers rendered as badges.
    pub badges: Vec<String>,
    pub description: Option<String>,
    pub note: Option<String>,
}

impl Document {
    /// The full-fidelity layout: accent color, decoded logo, custom font
    /// when configured.
    pub fn styled(plan: &WorkoutPlan, settings: &GymSettings) -> Result<Self, LayoutError> {
        let logo = settings
            .logo
            .as_deref()
            .map(Image::from_data_url)
            .transpose()?;
        let font = settings
            .custom_font
            .as_deref()
            .map(|path| {
                let data = std::fs::read(path).map_err(|source| LayoutError::FontFile {
                    path: path.to_string(),
                    source,
                })?;
                TrueTypeFont::parse(data).map_err(|source| LayoutError::Font {
                    path: path.to_string(),
                    source,
                })
            })
            .transpose()?;
        Ok(Self::build(
            plan,
            settings,
            Style {
                accent: settings.theme_color.rgb(),
                logo,
                font,
            },
        ))
    }

    /// The reduced-fidelity fallback: built-in font, no logo, no accent.
    #[must_use]
    pub fn plain(plan: &WorkoutPlan, settings: &GymSettings) -> Self {
        Self::build(
            plan,
            settings,
            Style {
                accent: (0, 0, 0),
                logo: None,
                font: None,
            },
        )
    }

    fn build(plan: &WorkoutPlan, settings: &GymSettings, style: Style) -> Self {
        let labels = Labels::for_language(&settings.language);
        let total = plan.total_exercises();

        let mut sections = vec![
            Section::Header {
                gym_name: settings.name.clone(),
                title: labels.workout_plan.to_string(),
            },
            Section::PlayerInfo {
                title: labels.player_information.to_string(),
                fields: vec![
                    Field {
                        label: labels.name.to_uppercase(),
                        value: plan.player_name.to_string(),
                    },
                    Field {
                        label: labels.date.to_uppercase(),
                        value: plan.date.format("%B %d, %Y").to_string(),
                    },
                    Field {
                        label: labels.plan_id.to_uppercase(),
                        value: plan.id.to_string(),
                    },
                ],
                total_label: labels.total_exercises.to_uppercase(),
                total,
            },
        ];

        for group in &plan.categories {
            sections.push(Section::CategoryBlock {
                title: group.category.to_string().to_uppercase(),
                days: format!(
                    "{}: {}",
                    labels.days,
                    group
                        .days
                        .iter()
                        .map(|day| day.name())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
                exercises: group
                    .exercises
                    .iter()
                    .enumerate()
                    .map(|(index, prescription)| {
                        let mut badges = vec![format!("{}: {}", labels.sets, prescription.sets)];
                        if let Some(reps) = &prescription.reps {
                            badges.push(format!("{}: {reps}", labels.reps));
                        }
                        if let Some(weight) = &prescription.weight {
                            badges.push(format!("{}: {weight}", labels.weight));
                        }
                        ExerciseRow {
                            number: index + 1,
                            name: prescription.exercise.name.to_string(),
                            badges,
                            description: prescription.exercise.description.clone(),
                            note: prescription
                                .notes
                                .as_ref()
                                .map(|notes| format!("{}: {notes}", labels.note)),
                        }
                    })
                    .collect(),
            });
        }

        if let Some(notes) = &plan.notes {
            sections.push(Section::Notes {
                title: labels.notes.to_string(),
                text: notes.clone(),
            });
        }

        sections.push(Section::Footer {
            left: format!(
                "{} | {} | {}",
                settings.name, settings.location, settings.contact_phone
            ),
            right: format!(
                "{}: {}",
                labels.created_on,
                plan.created_at.format("%b %d, %Y %H:%M")
            ),
        });

        Self {
            style,
            exercises_title: format!("{} ({total})", labels.exercises),
            sections,
        }
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use liftplan_domain::{
        CategoryGroup, Exercise, Name, Prescription, Sets, Weekday, WorkoutPlan,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    fn plan() -> WorkoutPlan {
        let exercise = Exercise {
            id: 7.into(),
            name: Name::new("Bench Press").unwrap(),
            category: Name::new("chest").unwrap(),
            description: Some("Classic chest exercise with barbell".to_string()),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
        };
        WorkoutPlan {
            id: 1.into(),
            player_id: 1.into(),
            player_name: Name::new("Jane Doe").unwrap(),
            categories: vec![CategoryGroup {
                category: Name::new("chest").unwrap(),
                days: vec![Weekday::Monday, Weekday::Thursday],
                exercises: vec![Prescription {
                    exercise,
                    sets: Sets::new(4).unwrap(),
                    reps: Some("8-10".to_string()),
                    weight: None,
                    notes: Some("pause at the bottom".to_string()),
                }],
            }],
            date: NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
            notes: Some("deload next week".to_string()),
            created_at: Utc.with_ymd_and_hms(2024, 5, 6, 10, 30, 15).unwrap(),
        }
    }

    #[test]
    fn test_section_order() {
        let document = Document::plain(&plan(), &GymSettings::default());
        let kinds = document
            .sections()
            .iter()
            .map(|section| match section {
                Section::Header { .. } => "header",
                Section::PlayerInfo { .. } => "player",
                Section::CategoryBlock { .. } => "category",
                Section::Notes { .. } => "notes",
                Section::Footer { .. } => "footer",
            })
            .collect::<Vec<_>>();
        assert_eq!(kinds, vec!["header", "player", "category", "notes", "footer"]);
    }

    #[test]
    fn test_plan_without_notes_has_no_notes_section() {
        let mut plan = plan();
        plan.notes = None;
        let document = Document::plain(&plan, &GymSettings::default());
        assert!(
            !document
                .sections()
                .iter()
                .any(|section| matches!(section, Section::Notes { .. }))
        );
    }

    #[test]
    fn test_category_block_content() {
        let document = Document::plain(&plan(), &GymSettings::default());
        let Section::CategoryBlock {
            title,
            days,
            exercises,
        } = &document.sections()[2]
        else {
            panic!("expected a category block");
        };
        assert_eq!(title, "CHEST");
        assert_eq!(days, "Days: Monday, Thursday");
        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].number, 1);
        assert_eq!(exercises[0].name, "Bench Press");
        assert_eq!(
            exercises[0].badges,
            vec!["Sets: 4".to_string(), "Reps: 8-10".to_string()]
        );
        assert_eq!(
            exercises[0].note,
            Some("Note: pause at the bottom".to_string())
        );
    }

    #[test]
    fn test_player_info_and_footer() {
        let document = Document::plain(&plan(), &GymSettings::default());
        let Section::PlayerInfo { fields, total, .. } = &document.sections()[1] else {
            panic!("expected player info");
        };
        assert_eq!(fields[0].value, "Jane Doe");
        assert_eq!(fields[1].value, "May 06, 2024");
        assert_eq!(*total, 1);
        assert_eq!(document.exercises_title, "Exercises (1)");

        let Section::Footer { left, right } = document.sections().last().unwrap() else {
            panic!("expected a footer");
        };
        assert_eq!(
            left,
            "IRON PARADISE GYM CENTER | New York, USA | +1 (555) 123-4567"
        );
        assert_eq!(right, "Created on: May 06, 2024 10:30");
    }

    #[test]
    fn test_language_selection_with_fallback() {
        let mut settings = GymSettings::default();
        settings.language = "de".to_string();
        let document = Document::plain(&plan(), &settings);
        let Section::Header { title, .. } = &document.sections()[0] else {
            panic!("expected a header");
        };
        assert_eq!(title, "Trainingsplan");

        settings.language = "tlh".to_string();
        let document = Document::plain(&plan(), &settings);
        let Section::Header { title, .. } = &document.sections()[0] else {
            panic!("expected a header");
        };
        assert_eq!(title, "Workout Plan");
    }

    #[test]
    fn test_styled_layout_uses_theme_color() {
        let document = Document::styled(&plan(), &GymSettings::default()).unwrap();
        assert_eq!(document.style.accent, (0xF9, 0x73, 0x16));
        assert!(document.style.logo.is_none());
    }

    #[test]
    fn test_styled_layout_rejects_malformed_logo() {
        let mut settings = GymSettings::default();
        settings.logo = Some("data:image/png;base64,!!!".to_string());
        assert!(matches!(
            Document::styled(&plan(), &settings),
            Err(LayoutError::Logo(_))
        ));
    }
}
