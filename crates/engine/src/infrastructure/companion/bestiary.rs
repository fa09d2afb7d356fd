//! Bestiary repository.

use sqlx::{Row, SqlitePool};

use bg3companion_domain::{Enemy, EnemyPatch, NewEnemy};

use super::CompanionDb;
use crate::infrastructure::ports::RepoError;

pub struct SqliteBestiaryRepo {
    pool: SqlitePool,
}

impl SqliteBestiaryRepo {
    pub fn new(db: &CompanionDb) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }

    pub async fn list(&self) -> Result<Vec<Enemy>, RepoError> {
        let rows = sqlx::query(
            "SELECT id, name, stats, resistances, weaknesses, abilities, notes FROM enemies \
             ORDER BY name COLLATE NOCASE",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("bestiary", e))?;

        Ok(rows.iter().map(row_to_enemy).collect())
    }

    pub async fn create(&self, enemy: NewEnemy) -> Result<Enemy, RepoError> {
        let result = sqlx::query(
            "INSERT INTO enemies (name, stats, resistances, weaknesses, abilities, notes) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&enemy.name)
        .bind(&enemy.stats)
        .bind(&enemy.resistances)
        .bind(&enemy.weaknesses)
        .bind(&enemy.abilities)
        .bind(&enemy.notes)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("bestiary", e))?;

        self.get(result.last_insert_rowid()).await
    }

    /// Apply a partial update; unset patch fields leave the row unchanged.
    pub async fn update(&self, id: i64, patch: EnemyPatch) -> Result<Enemy, RepoError> {
        self.get(id).await?;

        if !patch.is_empty() {
            sqlx::query(
                "UPDATE enemies SET \
                 name = COALESCE(?, name), \
                 stats = COALESCE(?, stats), \
                 resistances = COALESCE(?, resistances), \
                 weaknesses = COALESCE(?, weaknesses), \
                 abilities = COALESCE(?, abilities), \
                 notes = COALESCE(?, notes) \
                 WHERE id = ?",
            )
            .bind(&patch.name)
            .bind(&patch.stats)
            .bind(&patch.resistances)
            .bind(&patch.weaknesses)
            .bind(&patch.abilities)
            .bind(&patch.notes)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("bestiary", e))?;
        }

        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), RepoError> {
        sqlx::query("DELETE FROM enemies WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("bestiary", e))?;
        Ok(())
    }

    async fn get(&self, id: i64) -> Result<Enemy, RepoError> {
        let row = sqlx::query(
            "SELECT id, name, stats, resistances, weaknesses, abilities, notes FROM enemies \
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("bestiary", e))?;

        row.as_ref().map(row_to_enemy).ok_or(RepoError::NotFound)
    }
}

fn row_to_enemy(row: &sqlx::sqlite::SqliteRow) -> Enemy {
    Enemy {
        id: row.get("id"),
        name: row.get("name"),
        stats: row.get("stats"),
        resistances: row.get("resistances"),
        weaknesses: row.get("weaknesses"),
        abilities: row.get("abilities"),
        notes: row.get("notes"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::companion::test_db;

    fn grym() -> NewEnemy {
        NewEnemy {
            name: "Grym".to_string(),
            stats: Some("AC 19".to_string()),
            resistances: None,
            weaknesses: Some("Bludgeoning while superheated".to_string()),
            abilities: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn create_and_patch_enemy() {
        let (_dir, db) = test_db().await;
        let repo = SqliteBestiaryRepo::new(&db);
        let enemy = repo.create(grym()).await.expect("create");

        let updated = repo
            .update(
                enemy.id,
                EnemyPatch {
                    notes: Some("Lure it onto the forge".to_string()),
                    ..Default::default()
                },
            )
            .await
            .expect("update");

        assert_eq!(updated.name, "Grym");
        assert_eq!(updated.notes.as_deref(), Some("Lure it onto the forge"));
        assert_eq!(
            updated.weaknesses.as_deref(),
            Some("Bludgeoning while superheated")
        );
    }

    #[tokio::test]
    async fn delete_then_update_is_not_found() {
        let (_dir, db) = test_db().await;
        let repo = SqliteBestiaryRepo::new(&db);
        let enemy = repo.create(grym()).await.expect("create");
        repo.delete(enemy.id).await.expect("delete");
        let err = repo
            .update(enemy.id, EnemyPatch::default())
            .await
            .expect_err("deleted");
        assert!(matches!(err, RepoError::NotFound));
    }
}
