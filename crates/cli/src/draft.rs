//! Plan draft files. A draft is a TOML description of the desired plan
//! that gets applied to the plan builder operation by operation, so the
//! same rules gate file-driven creation as interactive editing.

use anyhow::{Context, bail};
use chrono::NaiveDate;
use liftplan_domain::{
    Category, Exercise, Name, PlanBuilder, PlanSubmission, Player, PrescriptionUpdate, Sets,
    Weekday,
};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Draft {
    pub player: String,
    pub date: Option<String>,
    pub notes: Option<String>,
    #[serde(default, rename = "group")]
    pub groups: Vec<Group>,
}

#[derive(Deserialize, Debug)]
pub struct Group {
    pub category: String,
    #[serde(default)]
    pub days: Vec<String>,
    #[serde(default, rename = "exercise")]
    pub exercises: Vec<DraftExercise>,
}

#[derive(Deserialize, Debug)]
pub struct DraftExercise {
    pub name: String,
    pub sets: Option<u32>,
    pub reps: Option<String>,
    pub weight: Option<String>,
    pub notes: Option<String>,
}

pub fn parse(text: &str) -> anyhow::Result<Draft> {
    toml::from_str(text).context("invalid draft file")
}

/// Runs the draft through the plan builder against the current registry.
pub fn apply(
    draft: &Draft,
    players: &[Player],
    categories: &[Category],
    exercises: &[Exercise],
) -> anyhow::Result<PlanSubmission> {
    let player_name = Name::new(&draft.player).context("invalid player name")?;
    let Some(player) = players.iter().find(|p| p.full_name == player_name) else {
        bail!("unknown player {:?}", draft.player);
    };
    let mut builder = PlanBuilder::for_player(player.id, player.full_name.clone());

    if let Some(date) = &draft.date {
        let date = date
            .parse::<NaiveDate>()
            .with_context(|| format!("invalid date {date:?}"))?;
        builder.set_date(date);
    }
    if let Some(notes) = &draft.notes {
        builder.set_notes(notes);
    }

    for (index, group) in draft.groups.iter().enumerate() {
        let category = Name::new(&group.category).context("invalid category name")?;
        if !categories.iter().any(|c| c.name == category) {
            bail!("unknown category {:?}", group.category);
        }
        if !builder.add_group(categories) {
            bail!("no category left for group {}", index + 1);
        }
        if !builder.change_group_category(index, &category) {
            bail!("category {:?} is already used by another group", group.category);
        }

        let days = group
            .days
            .iter()
            .map(|day| Weekday::try_from(day.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        if !days.is_empty() {
            for day in &days {
                if !builder.groups()[index].days.contains(day) {
                    builder.toggle_day(index, *day);
                }
            }
            if !days.contains(&Weekday::Monday) {
                builder.toggle_day(index, Weekday::Monday);
            }
        }

        for entry in &group.exercises {
            let Some(exercise) = exercises
                .iter()
                .find(|e| e.name.as_ref() == &entry.name && e.category == category)
            else {
                bail!(
                    "unknown exercise {:?} in category {:?}",
                    entry.name,
                    group.category
                );
            };
            if !builder.add_exercise(index, exercises) {
                bail!(
                    "cannot add {:?}: no unused exercise left in {:?}",
                    entry.name,
                    group.category
                );
            }
            let position = builder.groups()[index].exercises.len() - 1;
            if builder.groups()[index].exercises[position].exercise.id != exercise.id
                && !builder.update_prescription(
                    index,
                    position,
                    PrescriptionUpdate::Exercise(exercise.id),
                    exercises,
                )
            {
                bail!("exercise {:?} is already part of the group", entry.name);
            }
            if let Some(sets) = entry.sets {
                let sets = Sets::new(sets)?;
                builder.update_prescription(index, position, PrescriptionUpdate::Sets(sets), exercises);
            }
            if entry.reps.is_some() {
                builder.update_prescription(
                    index,
                    position,
                    PrescriptionUpdate::Reps(entry.reps.clone()),
                    exercises,
                );
            }
            if entry.weight.is_some() {
                builder.update_prescription(
                    index,
                    position,
                    PrescriptionUpdate::Weight(entry.weight.clone()),
                    exercises,
                );
            }
            if entry.notes.is_some() {
                builder.update_prescription(
                    index,
                    position,
                    PrescriptionUpdate::Notes(entry.notes.clone()),
                    exercises,
                );
            }
        }
    }

    builder.submit().context("the draft does not form a complete plan")
}
