//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::conversions::{is_unique_violation, violated_constraint};
use kernel::id::{GameId, UserId};
use platform::password::HashedPassword;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entity::{Achievement, OwnedNft, PurchasedGame, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{AccountError, AccountResult};

const USER_COLUMNS: &str = r#"
    user_id, username, email, password_hash, bio, nfts, achievements,
    is_active, date_joined, games
"#;

/// Unique index on `lower(username)`
const USERNAME_CONSTRAINT: &str = "users_username_lower_key";

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgAccountRepository {
    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn exists_by_username(&self, username: &UserName) -> AccountResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM users WHERE lower(username) = $1)",
        )
        .bind(username.canonical())
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn create(&self, user: &User) -> AccountResult<()> {
        let games: Vec<Uuid> = user.games.iter().map(|g| g.into_uuid()).collect();

        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                username,
                email,
                password_hash,
                bio,
                nfts,
                achievements,
                is_active,
                date_joined,
                games
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(user.bio.as_deref())
        .bind(Json(&user.nfts))
        .bind(Json(&user.achievements))
        .bind(user.is_active)
        .bind(user.date_joined)
        .bind(&games)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                // Lost a race with a concurrent registration
                return match violated_constraint(&e) {
                    Some(USERNAME_CONSTRAINT) => AccountError::UsernameTaken,
                    _ => AccountError::EmailTaken,
                };
            }
            AccountError::Database(e)
        })?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: UserId) -> AccountResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_id = $1"
        ))
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_username(&self, username: &UserName) -> AccountResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE lower(username) = $1"
        ))
        .bind(username.canonical())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn list(&self) -> AccountResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY date_joined, user_id"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(UserRow::into_user).collect()
    }

    async fn purchased_games(&self, user_id: UserId) -> AccountResult<Vec<PurchasedGame>> {
        let rows = sqlx::query_as::<_, PurchasedGameRow>(
            r#"
            SELECT g.game_id, g.title, g.price
            FROM users u
            CROSS JOIN LATERAL unnest(u.games) AS owned(game_id)
            JOIN games g ON g.game_id = owned.game_id
            WHERE u.user_id = $1
            ORDER BY g.title NULLS LAST, g.game_id
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| PurchasedGame {
                game_id: GameId::from_uuid(r.game_id),
                title: r.title,
                price: r.price,
            })
            .collect())
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    username: String,
    email: String,
    password_hash: String,
    bio: Option<String>,
    nfts: Json<Vec<OwnedNft>>,
    achievements: Json<Vec<Achievement>>,
    is_active: bool,
    date_joined: DateTime<Utc>,
    games: Vec<Uuid>,
}

impl UserRow {
    fn into_user(self) -> AccountResult<User> {
        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| AccountError::Internal(format!("user {}: {e}", self.user_id)))?;

        Ok(User {
            id: UserId::from_uuid(self.user_id),
            username: UserName::from_db(self.username),
            email: Email::from_db(self.email),
            password_hash,
            bio: self.bio,
            nfts: self.nfts.0,
            achievements: self.achievements.0,
            is_active: self.is_active,
            date_joined: self.date_joined,
            games: self.games.into_iter().map(GameId::from_uuid).collect(),
        })
    }
}

#[derive(sqlx::FromRow)]
struct PurchasedGameRow {
    game_id: Uuid,
    title: Option<String>,
    price: Option<f64>,
}
