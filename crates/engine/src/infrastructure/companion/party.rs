//! Party roster storage.
//!
//! The roster is saved as a single JSON document, replaced wholesale on
//! every save - the same shape the roster editor previously kept in
//! browser local storage.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};

use bg3companion_domain::PartyMember;

use super::CompanionDb;
use crate::infrastructure::ports::{PartyRepo, RepoError};

pub struct SqlitePartyRepo {
    pool: SqlitePool,
}

impl SqlitePartyRepo {
    pub fn new(db: &CompanionDb) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }
}

#[async_trait]
impl PartyRepo for SqlitePartyRepo {
    async fn load(&self) -> Result<Vec<PartyMember>, RepoError> {
        let row = sqlx::query("SELECT roster_json FROM party_roster WHERE id = 0")
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("party", e))?;

        match row {
            Some(row) => {
                let json: String = row.get("roster_json");
                serde_json::from_str(&json).map_err(|e| RepoError::Serialization(e.to_string()))
            }
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, roster: &[PartyMember]) -> Result<(), RepoError> {
        let json =
            serde_json::to_string(roster).map_err(|e| RepoError::Serialization(e.to_string()))?;
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO party_roster (id, roster_json, updated_at) VALUES (0, ?, ?) \
             ON CONFLICT(id) DO UPDATE SET \
             roster_json = excluded.roster_json, \
             updated_at = excluded.updated_at",
        )
        .bind(json)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("party", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::companion::test_db;
    use bg3companion_domain::EquipmentSlot;

    #[tokio::test]
    async fn unsaved_roster_loads_empty() {
        let (_dir, db) = test_db().await;
        let repo = SqlitePartyRepo::new(&db);
        assert!(repo.load().await.expect("load").is_empty());
    }

    #[tokio::test]
    async fn save_then_load_roundtrips() {
        let (_dir, db) = test_db().await;
        let repo = SqlitePartyRepo::new(&db);

        let roster = vec![
            PartyMember::new("Karlach")
                .with_level(5)
                .with_class("Barbarian")
                .with_equipment(EquipmentSlot::MainHand, "Greataxe"),
            PartyMember::new("Gale").with_level(5).with_class("Wizard"),
        ];
        repo.save(&roster).await.expect("save");

        let loaded = repo.load().await.expect("load");
        assert_eq!(loaded, roster);
    }

    #[tokio::test]
    async fn save_replaces_the_previous_roster() {
        let (_dir, db) = test_db().await;
        let repo = SqlitePartyRepo::new(&db);

        repo.save(&[PartyMember::new("Wyll")]).await.expect("save");
        let replacement = vec![PartyMember::new("Minthara")];
        repo.save(&replacement).await.expect("save again");

        let loaded = repo.load().await.expect("load");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Minthara");
    }
}
