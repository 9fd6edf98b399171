//! SQLite-backed catalog store.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use stockbook_core::{Product, ProductDraft, ProductId, ProductKind};

use crate::error::{StoreError, StoreResult};
use crate::export;

/// Durable store for product records.
///
/// Each operation runs a single statement against a shared SQLite pool and
/// is durably persisted before it returns; there is no write-behind
/// buffering. Accepting only [`ProductDraft`] on the write paths means an
/// invalid row cannot be persisted even if the shell skipped its own
/// validation.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    pool: SqlitePool,
}

impl CatalogStore {
    /// Open the database at `path`, creating the file and the products
    /// table if either is missing.
    pub async fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true);
        Self::connect(options).await
    }

    /// Open a fresh in-memory database (tests, scratch sessions).
    pub async fn open_in_memory() -> StoreResult<Self> {
        Self::connect(SqliteConnectOptions::new().in_memory(true)).await
    }

    async fn connect(options: SqliteConnectOptions) -> StoreResult<Self> {
        // Single connection: one desktop user, and an in-memory database
        // lives exactly as long as its connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(StoreError::Unavailable)?;

        let store = Self { pool };
        store.initialize().await?;
        Ok(store)
    }

    /// Ensure the products table exists. Idempotent; runs on every open.
    ///
    /// AUTOINCREMENT keeps ids monotonically increasing and never reused
    /// after deletion, including a full `delete_all`.
    pub async fn initialize(&self) -> StoreResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                description TEXT NOT NULL,
                quantity    INTEGER NOT NULL,
                value       REAL NOT NULL,
                type        TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Insert a new product and return its assigned id.
    pub async fn create(&self, draft: &ProductDraft) -> StoreResult<ProductId> {
        let result = sqlx::query(
            "INSERT INTO products (description, quantity, value, type) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(draft.description())
        .bind(draft.quantity())
        .bind(draft.value())
        .bind(draft.kind().as_str())
        .execute(&self.pool)
        .await?;

        let id = ProductId::new(result.last_insert_rowid());
        tracing::debug!(%id, "product created");
        Ok(id)
    }

    /// Snapshot of all products, ordered by id ascending. Empty table gives
    /// an empty vector; there is no pagination.
    pub async fn list(&self) -> StoreResult<Vec<Product>> {
        let rows = sqlx::query(
            "SELECT id, description, quantity, value, type FROM products ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_product).collect()
    }

    /// Replace every non-id field of the product with the given id.
    pub async fn update(&self, id: ProductId, draft: &ProductDraft) -> StoreResult<()> {
        let result = sqlx::query(
            "UPDATE products SET description = ?1, quantity = ?2, value = ?3, type = ?4 WHERE id = ?5",
        )
        .bind(draft.description())
        .bind(draft.quantity())
        .bind(draft.value())
        .bind(draft.kind().as_str())
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        tracing::debug!(%id, "product updated");
        Ok(())
    }

    /// Delete the product with the given id.
    ///
    /// Keyed strictly on the persisted id — never on a presentation-layer
    /// row position, which would drift after filtering or re-sorting.
    pub async fn delete_one(&self, id: ProductId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        tracing::debug!(%id, "product deleted");
        Ok(())
    }

    /// Delete every product and return how many rows were removed.
    ///
    /// Irreversible; the shell obtains user confirmation before calling
    /// this. The store itself deletes unconditionally.
    pub async fn delete_all(&self) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await?;

        let removed = result.rows_affected();
        tracing::info!(removed, "all products deleted");
        Ok(removed)
    }

    /// Write the current `list()` snapshot to an xlsx workbook at `path`
    /// and return the number of exported rows.
    pub async fn export_snapshot(&self, path: impl AsRef<Path>) -> StoreResult<u64> {
        let products = self.list().await?;
        export::write_workbook(&products, path.as_ref())?;

        let rows = products.len() as u64;
        tracing::info!(rows, path = %path.as_ref().display(), "snapshot exported");
        Ok(rows)
    }
}

fn row_to_product(row: SqliteRow) -> StoreResult<Product> {
    let id: i64 = row.try_get("id")?;
    let description: String = row.try_get("description")?;
    let quantity: i64 = row.try_get("quantity")?;
    let value: f64 = row.try_get("value")?;
    let kind: String = row.try_get("type")?;

    // Rows only ever enter through validated drafts, so this fails solely
    // if the file was edited behind our back.
    let kind = kind.parse::<ProductKind>()?;
    let draft = ProductDraft::new(description, quantity, value, kind)?;
    Ok(Product::from_draft(ProductId::new(id), draft))
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> CatalogStore {
        CatalogStore::open_in_memory().await.unwrap()
    }

    fn draft(description: &str, quantity: i64, value: f64, kind: ProductKind) -> ProductDraft {
        ProductDraft::new(description, quantity, value, kind).unwrap()
    }

    #[tokio::test]
    async fn create_then_list_contains_the_new_row() {
        let store = store().await;

        let id = store
            .create(&draft("Box A", 10, 5.50, ProductKind::Box))
            .await
            .unwrap();

        let products = store.list().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id(), id);
        assert_eq!(products[0].description(), "Box A");
        assert_eq!(products[0].quantity(), 10);
        assert_eq!(products[0].value(), 5.50);
        assert_eq!(products[0].kind(), ProductKind::Box);
    }

    #[tokio::test]
    async fn ids_are_fresh_and_ascending() {
        let store = store().await;

        let first = store
            .create(&draft("Box A", 1, 1.0, ProductKind::Box))
            .await
            .unwrap();
        let second = store
            .create(&draft("Bag B", 2, 2.0, ProductKind::Bag))
            .await
            .unwrap();

        assert!(second > first);

        let listed: Vec<_> = store.list().await.unwrap().iter().map(|p| p.id()).collect();
        assert_eq!(listed, vec![first, second]);
    }

    #[tokio::test]
    async fn update_replaces_fields_and_leaves_other_rows_alone() {
        let store = store().await;

        let target = store
            .create(&draft("Box A", 10, 5.50, ProductKind::Box))
            .await
            .unwrap();
        let bystander = store
            .create(&draft("Bag B", 3, 1.25, ProductKind::Bag))
            .await
            .unwrap();

        store
            .update(target, &draft("Box A2", 7, 9.99, ProductKind::Unit))
            .await
            .unwrap();

        let products = store.list().await.unwrap();
        assert_eq!(products[0].id(), target);
        assert_eq!(products[0].description(), "Box A2");
        assert_eq!(products[0].quantity(), 7);
        assert_eq!(products[0].value(), 9.99);
        assert_eq!(products[0].kind(), ProductKind::Unit);

        assert_eq!(products[1].id(), bystander);
        assert_eq!(products[1].description(), "Bag B");
        assert_eq!(products[1].quantity(), 3);
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let store = store().await;

        let missing = ProductId::new(42);
        let err = store
            .update(missing, &draft("Ghost", 1, 1.0, ProductKind::Unit))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id == missing));
    }

    #[tokio::test]
    async fn delete_one_removes_exactly_that_row() {
        let store = store().await;

        let first = store
            .create(&draft("Box A", 10, 5.50, ProductKind::Box))
            .await
            .unwrap();
        let second = store
            .create(&draft("Bag B", 3, 1.25, ProductKind::Bag))
            .await
            .unwrap();

        store.delete_one(first).await.unwrap();

        let listed: Vec<_> = store.list().await.unwrap().iter().map(|p| p.id()).collect();
        assert_eq!(listed, vec![second]);

        // Second delete of the same id fails.
        let err = store.delete_one(first).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id == first));
    }

    #[tokio::test]
    async fn delete_all_empties_the_table() {
        let store = store().await;

        for i in 0..4 {
            store
                .create(&draft(&format!("Item {i}"), i, 1.0, ProductKind::Unit))
                .await
                .unwrap();
        }

        assert_eq!(store.delete_all().await.unwrap(), 4);
        assert!(store.list().await.unwrap().is_empty());

        // Emptying an empty table is not an error.
        assert_eq!(store.delete_all().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete_all() {
        let store = store().await;

        let before = store
            .create(&draft("Box A", 1, 1.0, ProductKind::Box))
            .await
            .unwrap();
        store.delete_all().await.unwrap();

        let after = store
            .create(&draft("Bag B", 2, 2.0, ProductKind::Bag))
            .await
            .unwrap();
        assert!(after > before);
    }

    #[tokio::test]
    async fn initialize_is_idempotent() {
        let store = store().await;
        store.initialize().await.unwrap();
        store.initialize().await.unwrap();

        store
            .create(&draft("Box A", 1, 1.0, ProductKind::Box))
            .await
            .unwrap();
        store.initialize().await.unwrap();
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_is_stable_without_mutation() {
        let store = store().await;

        store
            .create(&draft("Box A", 10, 5.50, ProductKind::Box))
            .await
            .unwrap();
        store
            .create(&draft("Bag B", 3, 1.25, ProductKind::Bag))
            .await
            .unwrap();

        let first = store.list().await.unwrap();
        let second = store.list().await.unwrap();
        assert_eq!(first, second);
    }

    /// The end-to-end registration scenario: two inserts, a listing, a
    /// keyed delete, and the remaining row.
    #[tokio::test]
    async fn registration_scenario() {
        let store = store().await;

        let box_id = store
            .create(&draft("Box A", 10, 5.50, ProductKind::Box))
            .await
            .unwrap();
        let bag_id = store
            .create(&draft("Bag B", 3, 1.25, ProductKind::Bag))
            .await
            .unwrap();
        assert_eq!(box_id, ProductId::new(1));
        assert_eq!(bag_id, ProductId::new(2));

        let products = store.list().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(
            (
                products[0].id(),
                products[0].description(),
                products[0].quantity(),
                products[0].value(),
                products[0].kind(),
            ),
            (box_id, "Box A", 10, 5.50, ProductKind::Box)
        );

        store.delete_one(box_id).await.unwrap();

        let products = store.list().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(
            (
                products[0].id(),
                products[0].description(),
                products[0].quantity(),
                products[0].value(),
                products[0].kind(),
            ),
            (bag_id, "Bag B", 3, 1.25, ProductKind::Bag)
        );
    }

    #[tokio::test]
    async fn reopening_a_file_keeps_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.db");

        {
            let store = CatalogStore::open(&path).await.unwrap();
            store
                .create(&draft("Box A", 10, 5.50, ProductKind::Box))
                .await
                .unwrap();
        }

        let store = CatalogStore::open(&path).await.unwrap();
        let products = store.list().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].description(), "Box A");
    }

    #[tokio::test]
    async fn open_fails_when_the_path_is_unusable() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a database file.
        let err = CatalogStore::open(dir.path()).await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[tokio::test]
    async fn export_snapshot_reports_row_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.xlsx");
        let store = store().await;

        store
            .create(&draft("Box A", 10, 5.50, ProductKind::Box))
            .await
            .unwrap();
        store
            .create(&draft("Bag B", 3, 1.25, ProductKind::Bag))
            .await
            .unwrap();

        assert_eq!(store.export_snapshot(&path).await.unwrap(), 2);
        assert!(path.exists());
    }

    #[tokio::test]
    async fn export_snapshot_surfaces_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let store = store().await;

        // The destination parent directory does not exist.
        let path = dir.path().join("missing").join("products.xlsx");
        let err = store.export_snapshot(&path).await.unwrap_err();
        assert!(matches!(err, StoreError::Export(_)));
    }
}
