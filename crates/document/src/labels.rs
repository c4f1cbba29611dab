//! Fixed document strings in the supported display languages. A static
//! lookup table, not a translation engine.

pub struct Labels {
    pub workout_plan: &'static str,
    pub player_information: &'static str,
    pub name: &'static str,
    pub date: &'static str,
    pub plan_id: &'static str,
    pub exercises: &'static str,
    pub notes: &'static str,
    pub created_on: &'static str,
    pub total_exercises: &'static str,
    pub days: &'static str,
    pub sets: &'static str,
    pub reps: &'static str,
    pub weight: &'static str,
    pub note: &'static str,
}

static ENGLISH: Labels = Labels {
    workout_plan: "Workout Plan",
    player_information: "Player Information",
    name: "Name",
    date: "Date",
    plan_id: "Plan ID",
    exercises: "Exercises",
    notes: "Notes",
    created_on: "Created on",
    total_exercises: "Total Exercises",
    days: "Days",
    sets: "Sets",
    reps: "Reps",
    weight: "Weight",
    note: "Note",
};

static GERMAN: Labels = Labels {
    workout_plan: "Trainingsplan",
    player_information: "Spielerinformationen",
    name: "Name",
    date: "Datum",
    plan_id: "Plan-ID",
    exercises: "Übungen",
    notes: "Notizen",
    created_on: "Erstellt am",
    total_exercises: "Übungen insgesamt",
    days: "Tage",
    sets: "Sätze",
    reps: "Wdh.",
    weight: "Gewicht",
    note: "Notiz",
};

static FRENCH: Labels = Labels {
    workout_plan: "Plan d'entraînement",
    player_information: "Informations sur le joueur",
    name: "Nom",
    date: "Date",
    plan_id: "ID du plan",
    exercises: "Exercices",
    notes: "Remarques",
    created_on: "Créé le",
    total_exercises: "Nombre total d'exercices",
    days: "Jours",
    sets: "Séries",
    reps: "Répétitions",
    weight: "Poids",
    note: "Remarque",
};

impl Labels {
    /// Labels for the given language code. Unrecognized codes fall back to
    /// English.
    #[must_use]
    pub fn for_language(code: &str) -> &'static Labels {
        match code {
            "de" => &GERMAN,
            "fr" => &FRENCH,
            _ => &ENGLISH,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("en", "Workout Plan")]
    #[case("de", "Trainingsplan")]
    #[case("fr", "Plan d'entraînement")]
    fn test_label_selection(#[case] code: &str, #[case] title: &str) {
        assert_eq!(Labels::for_language(code).workout_plan, title);
    }

    #[rstest]
    #[case("")]
    #[case("xx")]
    #[case("EN")]
    fn test_unknown_code_falls_back_to_english(#[case] code: &str) {
        assert_eq!(Labels::for_language(code).workout_plan, "Workout Plan");
    }
}
