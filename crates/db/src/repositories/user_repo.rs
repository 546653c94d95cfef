//! Repository for the `users` table.

use confera_core::ids::new_user_id;
use rand::Rng;
use sqlx::PgPool;

use crate::models::user::{User, UserRole};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "user_id, username, email, password_hash, role, first_name, \
                       last_name, created_at, updated_at";

/// Attempts at generating an unused user id before giving up. The id
/// space is only 10^4, so collisions are expected once the table fills.
const MAX_ID_ATTEMPTS: usize = 64;

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user with a generated `USER####` id, returning the
    /// created row. The password must already be hashed.
    pub async fn create<R: Rng + ?Sized>(
        pool: &PgPool,
        username: &str,
        email: &str,
        password_hash: &str,
        role: UserRole,
        first_name: &str,
        last_name: &str,
        rng: &mut R,
    ) -> Result<User, sqlx::Error> {
        let user_id = Self::reserve_user_id(pool, rng).await?;

        let query = format!(
            "INSERT INTO users (user_id, username, email, password_hash, role, first_name, last_name)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&user_id)
            .bind(username)
            .bind(email)
            .bind(password_hash)
            .bind(role)
            .bind(first_name)
            .bind(last_name)
            .fetch_one(pool)
            .await
    }

    /// Generate a user id not yet present in the table.
    async fn reserve_user_id<R: Rng + ?Sized>(
        pool: &PgPool,
        rng: &mut R,
    ) -> Result<String, sqlx::Error> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = new_user_id(rng);
            let taken: bool =
                sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE user_id = $1)")
                    .bind(&id)
                    .fetch_one(pool)
                    .await?;
            if !taken {
                return Ok(id);
            }
        }
        Err(sqlx::Error::Protocol(
            "exhausted user id generation attempts".into(),
        ))
    }

    /// Fetch a user by id.
    pub async fn find_by_id(pool: &PgPool, user_id: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE user_id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List all users ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY user_id");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }
}
