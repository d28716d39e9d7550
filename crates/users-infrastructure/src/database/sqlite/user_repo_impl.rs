// ============================================================================
// Users Infrastructure - SQLite User Repository
// File: crates/users-infrastructure/src/database/sqlite/user_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use tracing::{debug, error};

use users_core::domain::{User, UserRecord};
use users_core::error::DomainError;
use users_core::repositories::UserRepository;
use users_shared::EntityId;

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub zipcode: Option<String>,
    pub geo_lat: Option<String>,
    pub geo_lng: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            street: row.street,
            city: row.city,
            zipcode: row.zipcode,
            geo_lat: row.geo_lat,
            geo_lng: row.geo_lng,
        }
    }
}

/// Classifies a failed write. The unique index on `email` is the only
/// constraint a client can trip, so a unique violation means a duplicate email.
fn map_write_error(e: sqlx::Error, action: &str, email: &str) -> DomainError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.is_unique_violation() {
            debug!("Unique constraint rejected {}", action);
            return DomainError::EmailAlreadyExists(email.to_string());
        }
    }
    error!("Database error {}: {}", action, e);
    DomainError::DatabaseError(e.to_string())
}

fn map_read_error(e: sqlx::Error, action: &str) -> DomainError {
    error!("Database error {}: {}", action, e);
    DomainError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, phone, street, city, zipcode, geo_lat, geo_lng
            FROM users
            ORDER BY id DESC
            "#
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_read_error(e, "listing users"))?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, phone, street, city, zipcode, geo_lat, geo_lng
            FROM users
            WHERE id = ?1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_read_error(e, "finding user by id"))?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, record: &UserRecord) -> Result<EntityId, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (
                name, email, phone,
                street, city, zipcode, geo_lat, geo_lng
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#
        )
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.phone)
        .bind(&record.street)
        .bind(&record.city)
        .bind(&record.zipcode)
        .bind(&record.geo_lat)
        .bind(&record.geo_lng)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "creating user", &record.email))?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, id: EntityId, record: &UserRecord) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET
                name = ?1,
                email = ?2,
                phone = ?3,
                street = ?4,
                city = ?5,
                zipcode = ?6,
                geo_lat = ?7,
                geo_lng = ?8
            WHERE id = ?9
            "#
        )
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.phone)
        .bind(&record.street)
        .bind(&record.city)
        .bind(&record.zipcode)
        .bind(&record.geo_lat)
        .bind(&record.geo_lng)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "updating user", &record.email))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: EntityId) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_read_error(e, "deleting user"))?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| map_read_error(e, "pinging database"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{create_memory_pool, run_migrations};

    async fn repo() -> SqliteUserRepository {
        let pool = create_memory_pool().await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteUserRepository::new(pool)
    }

    fn record(name: &str, email: &str) -> UserRecord {
        UserRecord {
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            street: None,
            city: None,
            zipcode: None,
            geo_lat: None,
            geo_lng: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = repo().await;
        let full = UserRecord {
            phone: Some("010-692-6593".to_string()),
            street: Some("Norberto Crossing".to_string()),
            city: Some("South Christy".to_string()),
            zipcode: Some("23505-1337".to_string()),
            geo_lat: Some("-71.4197".to_string()),
            geo_lng: Some("71.7478".to_string()),
            ..record("Nicholas Runolfsdottir", "sherwood@rosamond.me")
        };

        let id = repo.create(&full).await.unwrap();
        let user = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(user, User::from_record(id, full));
    }

    #[tokio::test]
    async fn test_find_missing() {
        let repo = repo().await;
        assert!(repo.find_by_id(12345).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_on_create() {
        let repo = repo().await;
        repo.create(&record("A", "same@example.com")).await.unwrap();

        let err = repo.create(&record("B", "same@example.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::EmailAlreadyExists(email) if email == "same@example.com"));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_email_uniqueness_is_case_sensitive() {
        let repo = repo().await;
        repo.create(&record("A", "case@example.com")).await.unwrap();
        assert!(repo.create(&record("B", "CASE@example.com")).await.is_ok());
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_creates() {
        let repo = repo().await;
        let first = record("A", "race@example.com");
        let second = record("B", "race@example.com");

        let (a, b) = futures::join!(repo.create(&first), repo.create(&second));

        assert_eq!(a.is_ok() as u8 + b.is_ok() as u8, 1);
        let failure = if a.is_err() { a.unwrap_err() } else { b.unwrap_err() };
        assert!(matches!(failure, DomainError::EmailAlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let repo = repo().await;
        let original = UserRecord {
            city: Some("Aliyaview".to_string()),
            ..record("Mrs. Dennis Schulist", "karley_dach@jasper.info")
        };
        let id = repo.create(&original).await.unwrap();

        let replacement = record("Dennis Schulist", "karley@jasper.info");
        assert_eq!(repo.update(id, &replacement).await.unwrap(), 1);

        let user = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(user.record(), replacement);
        assert_eq!(user.city, None);
    }

    #[tokio::test]
    async fn test_update_missing_returns_zero() {
        let repo = repo().await;
        assert_eq!(repo.update(99, &record("A", "a@example.com")).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_to_taken_email_leaves_row_unchanged() {
        let repo = repo().await;
        repo.create(&record("A", "a@example.com")).await.unwrap();
        let b = repo.create(&record("B", "b@example.com")).await.unwrap();

        let err = repo.update(b, &record("B2", "a@example.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::EmailAlreadyExists(_)));

        let user = repo.find_by_id(b).await.unwrap().unwrap();
        assert_eq!(user.name, "B");
        assert_eq!(user.email, "b@example.com");
    }

    #[tokio::test]
    async fn test_update_keeping_own_email() {
        let repo = repo().await;
        let id = repo.create(&record("A", "a@example.com")).await.unwrap();
        assert_eq!(repo.update(id, &record("A2", "a@example.com")).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = repo().await;
        let id = repo.create(&record("A", "a@example.com")).await.unwrap();

        assert_eq!(repo.delete(id).await.unwrap(), 1);
        assert_eq!(repo.delete(id).await.unwrap(), 0);
        assert!(repo.find_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = repo().await;
        let first = repo.create(&record("A", "a@example.com")).await.unwrap();
        repo.delete(first).await.unwrap();

        let second = repo.create(&record("A", "a@example.com")).await.unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_list_orders_by_id_desc() {
        let repo = repo().await;
        for i in 0..4 {
            repo.create(&record("User", &format!("user{}@example.com", i))).await.unwrap();
        }

        let ids: Vec<EntityId> = repo.list().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), 4);
        assert!(ids.windows(2).all(|w| w[0] > w[1]));
    }

    #[tokio::test]
    async fn test_ping() {
        let repo = repo().await;
        assert!(repo.ping().await.is_ok());
    }
}
