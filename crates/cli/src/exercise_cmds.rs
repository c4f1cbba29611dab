use liftplan_domain::{CategoryService, ExerciseID, ExerciseService, Name};
use uuid::Uuid;

use crate::Store;

pub async fn add(
    store: &Store,
    name: &str,
    category: &str,
    description: Option<String>,
) -> anyhow::Result<()> {
    let name = Name::new(name)?;
    let category = Name::new(category)?;
    let known = store
        .get_categories()
        .await?
        .into_iter()
        .map(|c| c.name)
        .collect::<Vec<_>>();
    store.validate_exercise_category(&category, &known).await?;
    let exercise = store.create_exercise(name, category, description).await?;
    println!("created exercise {} ({})", exercise.name, *exercise.id);
    Ok(())
}

pub async fn list(store: &Store) -> anyhow::Result<()> {
    for exercise in store.get_exercises().await? {
        println!(
            "{}  {}  [{}]  {}",
            *exercise.id,
            exercise.name,
            exercise.category,
            exercise.description.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

pub async fn delete(store: &Store, id: &str) -> anyhow::Result<()> {
    let id = ExerciseID::from(id.parse::<Uuid>()?);
    store.delete_exercise(id).await?;
    println!("deleted exercise {}", *id);
    Ok(())
}
