//! Saved build repository.
//!
//! Builds own their level rows; create and update replace the level set
//! inside a transaction so a failed write never leaves a half-updated
//! build behind.

use sqlx::{Row, SqlitePool};

use bg3companion_domain::{normalize_skill_choices, Build, BuildLevel, NewBuild};

use super::CompanionDb;
use crate::infrastructure::ports::RepoError;

pub struct SqliteBuildRepo {
    pool: SqlitePool,
}

impl SqliteBuildRepo {
    pub fn new(db: &CompanionDb) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }

    pub async fn list(&self) -> Result<Vec<Build>, RepoError> {
        let rows = sqlx::query(
            "SELECT id, name, race, class, subclass, notes, skill_choices FROM builds \
             ORDER BY name COLLATE NOCASE",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("builds", e))?;

        // One pass over all level rows instead of a query per build
        let level_rows = sqlx::query(
            "SELECT build_id, id, level, spells, feats, subclass_choice, multiclass_choice, note \
             FROM build_levels ORDER BY level",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("builds", e))?;

        let mut grouped: std::collections::HashMap<i64, Vec<BuildLevel>> =
            std::collections::HashMap::new();
        for row in &level_rows {
            grouped
                .entry(row.get("build_id"))
                .or_default()
                .push(row_to_level(row));
        }

        Ok(rows
            .iter()
            .map(|row| {
                let mut build = row_to_build(row);
                build.levels = grouped.remove(&build.id).unwrap_or_default();
                build
            })
            .collect())
    }

    pub async fn get(&self, id: i64) -> Result<Build, RepoError> {
        let row = sqlx::query(
            "SELECT id, name, race, class, subclass, notes, skill_choices FROM builds WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("builds", e))?;

        let mut build = row.as_ref().map(row_to_build).ok_or(RepoError::NotFound)?;
        build.levels = self.levels_for(id).await?;
        Ok(build)
    }

    pub async fn create(&self, payload: NewBuild) -> Result<Build, RepoError> {
        let skill_choices = serialize_skill_choices(&payload.skill_choices)?;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::database("builds", e))?;

        let result = sqlx::query(
            "INSERT INTO builds (name, race, class, subclass, notes, skill_choices) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&payload.name)
        .bind(&payload.race)
        .bind(&payload.class_name)
        .bind(&payload.subclass)
        .bind(&payload.notes)
        .bind(&skill_choices)
        .execute(&mut *tx)
        .await
        .map_err(|e| RepoError::database("builds", e))?;

        let id = result.last_insert_rowid();
        insert_levels(&mut tx, id, &payload).await?;

        tx.commit()
            .await
            .map_err(|e| RepoError::database("builds", e))?;

        self.get(id).await
    }

    /// Replace a build and its level rows.
    pub async fn update(&self, id: i64, payload: NewBuild) -> Result<Build, RepoError> {
        let skill_choices = serialize_skill_choices(&payload.skill_choices)?;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::database("builds", e))?;

        let result = sqlx::query(
            "UPDATE builds SET name = ?, race = ?, class = ?, subclass = ?, notes = ?, \
             skill_choices = ? WHERE id = ?",
        )
        .bind(&payload.name)
        .bind(&payload.race)
        .bind(&payload.class_name)
        .bind(&payload.subclass)
        .bind(&payload.notes)
        .bind(&skill_choices)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| RepoError::database("builds", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }

        sqlx::query("DELETE FROM build_levels WHERE build_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepoError::database("builds", e))?;

        insert_levels(&mut tx, id, &payload).await?;

        tx.commit()
            .await
            .map_err(|e| RepoError::database("builds", e))?;

        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), RepoError> {
        sqlx::query("DELETE FROM build_levels WHERE build_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("builds", e))?;
        sqlx::query("DELETE FROM builds WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("builds", e))?;
        Ok(())
    }

    async fn levels_for(&self, build_id: i64) -> Result<Vec<BuildLevel>, RepoError> {
        let rows = sqlx::query(
            "SELECT id, level, spells, feats, subclass_choice, multiclass_choice, note \
             FROM build_levels WHERE build_id = ? ORDER BY level",
        )
        .bind(build_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("builds", e))?;

        Ok(rows.iter().map(row_to_level).collect())
    }
}

fn row_to_level(row: &sqlx::sqlite::SqliteRow) -> BuildLevel {
    BuildLevel {
        id: Some(row.get("id")),
        level: row.get::<i64, _>("level") as u8,
        spells: row.get("spells"),
        feats: row.get("feats"),
        subclass_choice: row.get("subclass_choice"),
        multiclass_choice: row.get("multiclass_choice"),
        note: row.get("note"),
    }
}

async fn insert_levels(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    build_id: i64,
    payload: &NewBuild,
) -> Result<(), RepoError> {
    for level in &payload.levels {
        sqlx::query(
            "INSERT INTO build_levels \
             (build_id, level, spells, feats, subclass_choice, multiclass_choice, note) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(build_id)
        .bind(i64::from(level.level))
        .bind(&level.spells)
        .bind(&level.feats)
        .bind(&level.subclass_choice)
        .bind(&level.multiclass_choice)
        .bind(&level.note)
        .execute(&mut **tx)
        .await
        .map_err(|e| RepoError::database("builds", e))?;
    }
    Ok(())
}

fn serialize_skill_choices(choices: &[String]) -> Result<String, RepoError> {
    serde_json::to_string(&normalize_skill_choices(choices))
        .map_err(|e| RepoError::Serialization(e.to_string()))
}

/// Stored skill choices are JSON; older rows may hold a comma-separated
/// string instead, which still normalizes cleanly.
fn deserialize_skill_choices(value: Option<String>) -> Vec<String> {
    let Some(text) = value else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<String>>(&text) {
        Ok(list) => normalize_skill_choices(list),
        Err(_) => normalize_skill_choices(text.split(',')),
    }
}

fn row_to_build(row: &sqlx::sqlite::SqliteRow) -> Build {
    Build {
        id: row.get("id"),
        name: row.get("name"),
        race: row.get("race"),
        class_name: row.get("class"),
        subclass: row.get("subclass"),
        notes: row.get("notes"),
        skill_choices: deserialize_skill_choices(row.get("skill_choices")),
        levels: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::companion::test_db;
    use bg3companion_domain::NewBuildLevel;

    fn payload(name: &str, levels: &[u8]) -> NewBuild {
        NewBuild {
            name: name.to_string(),
            race: Some("Githyanki".to_string()),
            class_name: Some("Fighter".to_string()),
            subclass: Some("Battle Master".to_string()),
            notes: None,
            skill_choices: vec!["Athletics".to_string(), "athletics".to_string()],
            levels: levels
                .iter()
                .map(|&level| NewBuildLevel {
                    level,
                    spells: String::new(),
                    feats: String::new(),
                    subclass_choice: String::new(),
                    multiclass_choice: String::new(),
                    note: format!("level {level}"),
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn create_persists_levels_and_normalizes_skills() {
        let (_dir, db) = test_db().await;
        let repo = SqliteBuildRepo::new(&db);

        let build = repo.create(payload("Archer", &[1, 2, 3])).await.expect("create");
        assert_eq!(build.skill_choices, vec!["Athletics"]);
        assert_eq!(build.levels.len(), 3);
        assert_eq!(build.levels[2].note, "level 3");
    }

    #[tokio::test]
    async fn update_replaces_the_level_set() {
        let (_dir, db) = test_db().await;
        let repo = SqliteBuildRepo::new(&db);
        let build = repo.create(payload("Archer", &[1, 2, 3])).await.expect("create");

        let updated = repo
            .update(build.id, payload("Sharpshooter", &[1, 4]))
            .await
            .expect("update");
        assert_eq!(updated.name, "Sharpshooter");
        let levels: Vec<u8> = updated.levels.iter().map(|l| l.level).collect();
        assert_eq!(levels, vec![1, 4]);
    }

    #[tokio::test]
    async fn update_of_missing_build_is_not_found() {
        let (_dir, db) = test_db().await;
        let repo = SqliteBuildRepo::new(&db);
        let err = repo
            .update(42, payload("Ghost", &[]))
            .await
            .expect_err("missing build");
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn delete_removes_build_and_levels() {
        let (_dir, db) = test_db().await;
        let repo = SqliteBuildRepo::new(&db);
        let build = repo.create(payload("Archer", &[1])).await.expect("create");
        repo.delete(build.id).await.expect("delete");
        assert!(repo.list().await.expect("list").is_empty());
        assert!(matches!(
            repo.get(build.id).await.expect_err("gone"),
            RepoError::NotFound
        ));
    }

    #[tokio::test]
    async fn comma_separated_legacy_skill_choices_still_parse() {
        let choices = deserialize_skill_choices(Some("Stealth, Arcana, stealth".to_string()));
        assert_eq!(choices, vec!["Stealth", "Arcana"]);
    }
}
