use dialoguer::Confirm;
use liftplan_domain::{CategoryID, CategoryService, Color};
use uuid::Uuid;

use crate::Store;

pub async fn add(
    store: &Store,
    name: &str,
    color: &str,
    description: Option<String>,
) -> anyhow::Result<()> {
    let name = store.validate_category_name(name, CategoryID::nil()).await?;
    let color = Color::new(color)?;
    let category = store.create_category(name, color, description).await?;
    println!("created category {} ({})", category.name, *category.id);
    Ok(())
}

pub async fn list(store: &Store) -> anyhow::Result<()> {
    for category in store.get_categories().await? {
        println!(
            "{}  {}  {}  {}",
            *category.id,
            category.name,
            category.color,
            category.description.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

pub async fn edit(
    store: &Store,
    id: &str,
    name: Option<String>,
    color: Option<String>,
    description: Option<String>,
    clear_description: bool,
) -> anyhow::Result<()> {
    let id = CategoryID::from(id.parse::<Uuid>()?);
    let name = match name {
        Some(name) => Some(store.validate_category_name(&name, id).await?),
        None => None,
    };
    let color = color.as_deref().map(Color::new).transpose()?;
    let description = if clear_description {
        Some(None)
    } else {
        description.map(Some)
    };
    let category = store.modify_category(id, name, color, description).await?;
    println!("updated category {}", category.name);
    Ok(())
}

/// Prints the dependent-exercise count and asks for confirmation before the
/// cascade delete, unless `--yes` was given.
pub async fn delete(store: &Store, id: &str, yes: bool) -> anyhow::Result<()> {
    let id = CategoryID::from(id.parse::<Uuid>()?);
    let usage = store.category_usage(id).await?;
    if usage > 0 && !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Deleting this category also deletes {usage} exercise(s). Continue?"
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("aborted");
            return Ok(());
        }
    }
    let deletion = store.delete_category(id).await?;
    println!(
        "deleted category {} and {} dependent exercise(s)",
        *deletion.id,
        deletion.deleted_exercises.len()
    );
    Ok(())
}
