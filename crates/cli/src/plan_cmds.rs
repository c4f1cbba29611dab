use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use liftplan_domain::{
    CategoryService, ExerciseService, PlanID, PlanService, PlayerService, SettingsService,
    WorkoutPlan,
};
use uuid::Uuid;

use crate::{Store, draft};

pub async fn create(store: &Store, file: &Path) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("cannot read {}", file.display()))?;
    let draft = draft::parse(&text)?;
    let players = store.get_players().await?;
    let categories = store.get_categories().await?;
    let exercises = store.get_exercises().await?;
    let submission = draft::apply(&draft, &players, &categories, &exercises)?;
    let plan = store.create_plan(submission).await?;
    println!(
        "created plan {} for {} ({} exercises)",
        *plan.id,
        plan.player_name,
        plan.total_exercises()
    );
    Ok(())
}

pub async fn list(store: &Store) -> anyhow::Result<()> {
    for plan in store.get_plans().await? {
        println!(
            "{}  {}  {}  {} group(s), {} exercise(s)",
            *plan.id,
            plan.player_name,
            plan.date,
            plan.categories.len(),
            plan.total_exercises()
        );
    }
    Ok(())
}

pub async fn show(store: &Store, id: &str) -> anyhow::Result<()> {
    let plan = find(store, id).await?;
    println!("plan for {} ({})", plan.player_name, plan.date);
    for group in &plan.categories {
        let days = group
            .days
            .iter()
            .map(|d| d.name())
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {} on {days}", group.category);
        for prescription in &group.exercises {
            print!(
                "    {}  sets {}",
                prescription.exercise.name, prescription.sets
            );
            if let Some(reps) = &prescription.reps {
                print!("  reps {reps}");
            }
            if let Some(weight) = &prescription.weight {
                print!("  weight {weight}");
            }
            println!();
            if let Some(notes) = &prescription.notes {
                println!("      note: {notes}");
            }
        }
    }
    if let Some(notes) = &plan.notes {
        println!("notes: {notes}");
    }
    Ok(())
}

pub async fn delete(store: &Store, id: &str) -> anyhow::Result<()> {
    let id = PlanID::from(id.parse::<Uuid>()?);
    store.delete_plan(id).await?;
    println!("deleted plan {}", *id);
    Ok(())
}

pub async fn export(store: &Store, id: &str, output: Option<PathBuf>) -> anyhow::Result<()> {
    let plan = find(store, id).await?;
    let settings = store.get_settings().await?;
    match liftplan_document::render(&plan, &settings).await {
        Ok(bytes) => {
            let dir = output.unwrap_or_else(|| PathBuf::from("."));
            let path = dir.join(liftplan_document::file_name(&plan));
            std::fs::write(&path, bytes)
                .with_context(|| format!("cannot write {}", path.display()))?;
            println!("wrote {}", path.display());
            Ok(())
        }
        Err(err) => bail!("{}", err.user_message()),
    }
}

async fn find(store: &Store, id: &str) -> anyhow::Result<WorkoutPlan> {
    let id = PlanID::from(id.parse::<Uuid>()?);
    let Some(plan) = store.get_plans().await?.into_iter().find(|p| p.id == id) else {
        bail!("no plan with id {}", *id);
    };
    Ok(plan)
}
