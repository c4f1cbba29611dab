use chrono::{DateTime, NaiveDate, Utc};
use derive_more::Deref;
use uuid::Uuid;

use crate::{CreateError, Name, ReadError};

#[allow(async_fn_in_trait)]
pub trait PlayerService: Send + Sync + 'static {
    async fn get_players(&self) -> Result<Vec<Player>, ReadError>;
    async fn create_player(
        &self,
        full_name: Name,
        email: Option<String>,
        phone: Option<String>,
        join_date: NaiveDate,
    ) -> Result<Player, CreateError>;
}

#[allow(async_fn_in_trait)]
pub trait PlayerRepository: Send + Sync + 'static {
    async fn read_players(&self) -> Result<Vec<Player>, ReadError>;
    async fn create_player(
        &self,
        full_name: Name,
        email: Option<String>,
        phone: Option<String>,
        join_date: NaiveDate,
    ) -> Result<Player, CreateError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerID,
    pub full_name: Name,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub join_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlayerID(Uuid);

impl PlayerID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for PlayerID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for PlayerID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}
