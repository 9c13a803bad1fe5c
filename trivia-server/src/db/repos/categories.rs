//! Category repository
//!
//! Categories are read-only over HTTP; seeding happens out of band.

use sqlx::PgPool;

use crate::db::StoreError;
use crate::models::Category;

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all categories, ordered by id.
    pub async fn list(&self) -> Result<Vec<Category>, StoreError> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, type
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Get a single category by id.
    pub async fn get(&self, id: i32) -> Result<Option<Category>, StoreError> {
        let category = sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(category)
    }

    /// Insert `names` in order, but only into an empty table.
    ///
    /// Returns the number of rows inserted (0 when categories already exist).
    pub async fn seed(&self, names: &[&str]) -> Result<u64, StoreError> {
        let names: Vec<String> = names.iter().map(|n| (*n).to_owned()).collect();
        let result = sqlx::query(
            r#"
            INSERT INTO categories (type)
            SELECT name FROM unnest($1::text[]) WITH ORDINALITY AS t(name, ord)
            WHERE NOT EXISTS (SELECT 1 FROM categories)
            ORDER BY ord
            "#,
        )
        .bind(names)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations, DEFAULT_CATEGORIES};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p trivia-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn seed_only_fills_empty_table() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");

        let repo = CategoryRepo::new(&pool);
        repo.seed(&DEFAULT_CATEGORIES).await.expect("seed failed");
        let before = repo.list().await.expect("list failed").len();

        let inserted = repo.seed(&DEFAULT_CATEGORIES).await.expect("reseed failed");
        assert_eq!(inserted, 0);
        assert_eq!(repo.list().await.expect("list failed").len(), before);
    }
}
