use chrono::{Local, NaiveDate};
use liftplan_domain::{Name, PlayerService};

use crate::Store;

pub async fn add(
    store: &Store,
    name: &str,
    email: Option<String>,
    phone: Option<String>,
    join_date: Option<String>,
) -> anyhow::Result<()> {
    let name = Name::new(name)?;
    let join_date = match join_date {
        Some(date) => date.parse::<NaiveDate>()?,
        None => Local::now().date_naive(),
    };
    let player = store.create_player(name, email, phone, join_date).await?;
    println!("created player {} ({})", player.full_name, *player.id);
    Ok(())
}

pub async fn list(store: &Store) -> anyhow::Result<()> {
    for player in store.get_players().await? {
        println!(
            "{}  {}  joined {}  {}",
            *player.id,
            player.full_name,
            player.join_date,
            player.email.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}
