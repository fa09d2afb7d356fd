//! SQLite-backed storage for the user-editable companion tables.
//!
//! One database file holds the loot checklist, saved builds, bestiary
//! notes and the party roster. The schema is bootstrapped on connect.

mod bestiary;
mod builds;
mod loot;
mod party;

pub use bestiary::SqliteBestiaryRepo;
pub use builds::SqliteBuildRepo;
pub use loot::SqliteLootRepo;
pub use party::SqlitePartyRepo;

use sqlx::SqlitePool;

use super::ports::RepoError;

/// Connection to the companion database.
#[derive(Clone)]
pub struct CompanionDb {
    pool: SqlitePool,
}

impl CompanionDb {
    /// Open (creating if needed) the companion database and ensure its
    /// schema.
    pub async fn connect(db_path: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{db_path}?mode=rwc"))
            .await
            .map_err(|e| RepoError::database("companion", e))?;

        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&pool)
                .await
                .map_err(|e| RepoError::database("companion", e))?;
        }

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

const SCHEMA: [&str; 5] = [
    r#"
    CREATE TABLE IF NOT EXISTS items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        type TEXT,
        region TEXT,
        description TEXT,
        is_collected INTEGER NOT NULL DEFAULT 0
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS builds (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        race TEXT,
        class TEXT,
        subclass TEXT,
        notes TEXT,
        skill_choices TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS build_levels (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        build_id INTEGER NOT NULL REFERENCES builds(id) ON DELETE CASCADE,
        level INTEGER NOT NULL,
        spells TEXT NOT NULL DEFAULT '',
        feats TEXT NOT NULL DEFAULT '',
        subclass_choice TEXT NOT NULL DEFAULT '',
        multiclass_choice TEXT NOT NULL DEFAULT '',
        note TEXT NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS enemies (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        stats TEXT,
        resistances TEXT,
        weaknesses TEXT,
        abilities TEXT,
        notes TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS party_roster (
        id INTEGER PRIMARY KEY CHECK (id = 0),
        roster_json TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
];

#[cfg(test)]
pub(crate) async fn test_db() -> (tempfile::TempDir, CompanionDb) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("companion.db");
    let db = CompanionDb::connect(&path.to_string_lossy())
        .await
        .expect("connect");
    (dir, db)
}
