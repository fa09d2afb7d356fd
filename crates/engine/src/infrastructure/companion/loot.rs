//! Loot checklist repository.

use sqlx::{Row, SqlitePool};

use bg3companion_domain::{LootItem, LootItemPatch, NewLootItem};

use super::CompanionDb;
use crate::infrastructure::ports::RepoError;

pub struct SqliteLootRepo {
    pool: SqlitePool,
}

impl SqliteLootRepo {
    pub fn new(db: &CompanionDb) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }

    /// All loot items, name-ordered like the checklist view.
    pub async fn list(&self) -> Result<Vec<LootItem>, RepoError> {
        let rows = sqlx::query(
            "SELECT id, name, type, region, description, is_collected FROM items \
             ORDER BY name COLLATE NOCASE",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("loot", e))?;

        Ok(rows.iter().map(row_to_item).collect())
    }

    pub async fn create(&self, item: NewLootItem) -> Result<LootItem, RepoError> {
        let result = sqlx::query(
            "INSERT INTO items (name, type, region, description, is_collected) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&item.name)
        .bind(&item.item_type)
        .bind(&item.region)
        .bind(&item.description)
        .bind(i64::from(item.is_collected))
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("loot", e))?;

        self.get(result.last_insert_rowid()).await
    }

    /// Apply a partial update; unset patch fields leave the row unchanged.
    pub async fn update(&self, id: i64, patch: LootItemPatch) -> Result<LootItem, RepoError> {
        // Confirm existence first so an empty patch still 404s correctly.
        self.get(id).await?;

        if !patch.is_empty() {
            sqlx::query(
                "UPDATE items SET \
                 name = COALESCE(?, name), \
                 type = COALESCE(?, type), \
                 region = COALESCE(?, region), \
                 description = COALESCE(?, description), \
                 is_collected = COALESCE(?, is_collected) \
                 WHERE id = ?",
            )
            .bind(&patch.name)
            .bind(&patch.item_type)
            .bind(&patch.region)
            .bind(&patch.description)
            .bind(patch.is_collected.map(i64::from))
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("loot", e))?;
        }

        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), RepoError> {
        sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("loot", e))?;
        Ok(())
    }

    async fn get(&self, id: i64) -> Result<LootItem, RepoError> {
        let row = sqlx::query(
            "SELECT id, name, type, region, description, is_collected FROM items WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("loot", e))?;

        row.as_ref().map(row_to_item).ok_or(RepoError::NotFound)
    }
}

fn row_to_item(row: &sqlx::sqlite::SqliteRow) -> LootItem {
    LootItem {
        id: row.get("id"),
        name: row.get("name"),
        item_type: row.get("type"),
        region: row.get("region"),
        description: row.get("description"),
        is_collected: row.get::<i64, _>("is_collected") != 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::companion::test_db;

    fn new_item(name: &str) -> NewLootItem {
        NewLootItem {
            name: name.to_string(),
            item_type: Some("Weapon".to_string()),
            region: Some("Act 1".to_string()),
            description: None,
            is_collected: false,
        }
    }

    #[tokio::test]
    async fn create_list_roundtrip() {
        let (_dir, db) = test_db().await;
        let repo = SqliteLootRepo::new(&db);

        repo.create(new_item("Everburn Blade")).await.expect("create");
        repo.create(new_item("Amulet of Misty Step")).await.expect("create");

        let items = repo.list().await.expect("list");
        assert_eq!(items.len(), 2);
        // NOCASE name ordering
        assert_eq!(items[0].name, "Amulet of Misty Step");
        assert!(!items[0].is_collected);
    }

    #[tokio::test]
    async fn patch_updates_only_set_fields() {
        let (_dir, db) = test_db().await;
        let repo = SqliteLootRepo::new(&db);
        let created = repo.create(new_item("Everburn Blade")).await.expect("create");

        let updated = repo
            .update(
                created.id,
                LootItemPatch {
                    is_collected: Some(true),
                    ..Default::default()
                },
            )
            .await
            .expect("update");

        assert!(updated.is_collected);
        assert_eq!(updated.name, "Everburn Blade");
        assert_eq!(updated.region.as_deref(), Some("Act 1"));
    }

    #[tokio::test]
    async fn update_of_missing_row_is_not_found() {
        let (_dir, db) = test_db().await;
        let repo = SqliteLootRepo::new(&db);
        let err = repo
            .update(999, LootItemPatch::default())
            .await
            .expect_err("missing row");
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let (_dir, db) = test_db().await;
        let repo = SqliteLootRepo::new(&db);
        let created = repo.create(new_item("Everburn Blade")).await.expect("create");
        repo.delete(created.id).await.expect("delete");
        assert!(repo.list().await.expect("list").is_empty());
    }
}
