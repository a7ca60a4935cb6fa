//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::conversions::{is_unique_violation, violated_constraint};
use kernel::id::{BountyId, GameId, NftId};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entities::{
    Bounty, BountyDetails, BountyScope, DeveloperData, Game, GameDetails, Nft, NftDetails,
    NftScope, Review, Reward, SystemRequirements,
};
use crate::domain::repository::{BountyRepository, GameRepository, NftRepository};
use crate::error::{CatalogError, CatalogResult};

const GAME_COLUMNS: &str = r#"
    game_id, external_id, title, price, genre, description, nft_rewards,
    images, tags, rating, system_requirements, developer_data, reviews,
    created_at, updated_at
"#;

const BOUNTY_COLUMNS: &str = "bounty_id, game_id, name, description, created_at, updated_at";

const NFT_COLUMNS: &str =
    "nft_id, game_id, bounty_id, name, description, uri, created_at, updated_at";

/// PostgreSQL-backed catalog repository
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23503"),
        _ => false,
    }
}

fn duplicate_game(err: sqlx::Error, details: &GameDetails) -> CatalogError {
    if is_unique_violation(&err) {
        tracing::warn!(
            constraint = violated_constraint(&err).unwrap_or("unknown"),
            "Game uniqueness violated at insert time"
        );
        return CatalogError::DuplicateGame {
            title: details.title.clone().unwrap_or_default(),
            external_id: details.external_id.clone().unwrap_or_default(),
        };
    }
    CatalogError::Database(err)
}

impl GameRepository for PgCatalogRepository {
    async fn list_games(&self) -> CatalogResult<Vec<Game>> {
        let rows = sqlx::query_as::<_, GameRow>(&format!(
            "SELECT {GAME_COLUMNS} FROM games ORDER BY created_at, game_id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(GameRow::into_game).collect())
    }

    async fn find_game(&self, game_id: GameId) -> CatalogResult<Option<Game>> {
        let row = sqlx::query_as::<_, GameRow>(&format!(
            "SELECT {GAME_COLUMNS} FROM games WHERE game_id = $1"
        ))
        .bind(game_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(GameRow::into_game))
    }

    async fn game_exists_with(
        &self,
        title: Option<&str>,
        external_id: Option<&str>,
    ) -> CatalogResult<bool> {
        if title.is_none() && external_id.is_none() {
            return Ok(false);
        }

        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM games
                WHERE ($1::TEXT IS NOT NULL AND title = $1)
                   OR ($2::TEXT IS NOT NULL AND external_id = $2)
            )
            "#,
        )
        .bind(title)
        .bind(external_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn insert_game(&self, game: &Game) -> CatalogResult<()> {
        let d = &game.details;
        sqlx::query(
            r#"
            INSERT INTO games (
                game_id, external_id, title, price, genre, description, nft_rewards,
                images, tags, rating, system_requirements, developer_data, reviews,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(game.id.as_uuid())
        .bind(&d.external_id)
        .bind(&d.title)
        .bind(d.price)
        .bind(&d.genre)
        .bind(&d.description)
        .bind(Json(&d.nft_rewards))
        .bind(&d.images)
        .bind(&d.tags)
        .bind(d.rating)
        .bind(d.system_requirements.as_ref().map(Json))
        .bind(d.developer_data.as_ref().map(Json))
        .bind(Json(&game.reviews))
        .bind(game.created_at)
        .bind(game.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| duplicate_game(e, d))?;

        Ok(())
    }

    async fn replace_game(
        &self,
        game_id: GameId,
        details: &GameDetails,
    ) -> CatalogResult<Option<Game>> {
        let row = sqlx::query_as::<_, GameRow>(&format!(
            r#"
            UPDATE games SET
                external_id = $2,
                title = $3,
                price = $4,
                genre = $5,
                description = $6,
                nft_rewards = $7,
                images = $8,
                tags = $9,
                rating = $10,
                system_requirements = $11,
                developer_data = $12,
                updated_at = now()
            WHERE game_id = $1
            RETURNING {GAME_COLUMNS}
            "#
        ))
        .bind(game_id.as_uuid())
        .bind(&details.external_id)
        .bind(&details.title)
        .bind(details.price)
        .bind(&details.genre)
        .bind(&details.description)
        .bind(Json(&details.nft_rewards))
        .bind(&details.images)
        .bind(&details.tags)
        .bind(details.rating)
        .bind(details.system_requirements.as_ref().map(Json))
        .bind(details.developer_data.as_ref().map(Json))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| duplicate_game(e, details))?;

        Ok(row.map(GameRow::into_game))
    }

    async fn delete_game(&self, game_id: GameId) -> CatalogResult<bool> {
        let deleted = sqlx::query("DELETE FROM games WHERE game_id = $1")
            .bind(game_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

impl BountyRepository for PgCatalogRepository {
    async fn list_bounties(&self, game_id: GameId) -> CatalogResult<Vec<Bounty>> {
        let rows = sqlx::query_as::<_, BountyRow>(&format!(
            "SELECT {BOUNTY_COLUMNS} FROM bounties WHERE game_id = $1 ORDER BY created_at, bounty_id"
        ))
        .bind(game_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BountyRow::into_bounty).collect())
    }

    async fn find_bounty(&self, scope: BountyScope) -> CatalogResult<Option<Bounty>> {
        let row = sqlx::query_as::<_, BountyRow>(&format!(
            "SELECT {BOUNTY_COLUMNS} FROM bounties WHERE game_id = $1 AND bounty_id = $2"
        ))
        .bind(scope.game_id.as_uuid())
        .bind(scope.bounty_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BountyRow::into_bounty))
    }

    async fn insert_bounty(&self, bounty: &Bounty) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO bounties (bounty_id, game_id, name, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(bounty.id.as_uuid())
        .bind(bounty.game_id.as_uuid())
        .bind(&bounty.details.name)
        .bind(&bounty.details.description)
        .bind(bounty.created_at)
        .bind(bounty.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                CatalogError::GameNotFound(bounty.game_id)
            } else {
                CatalogError::Database(e)
            }
        })?;

        Ok(())
    }

    async fn replace_bounty(
        &self,
        scope: BountyScope,
        details: &BountyDetails,
    ) -> CatalogResult<Option<Bounty>> {
        let row = sqlx::query_as::<_, BountyRow>(&format!(
            r#"
            UPDATE bounties SET name = $3, description = $4, updated_at = now()
            WHERE game_id = $1 AND bounty_id = $2
            RETURNING {BOUNTY_COLUMNS}
            "#
        ))
        .bind(scope.game_id.as_uuid())
        .bind(scope.bounty_id.as_uuid())
        .bind(&details.name)
        .bind(&details.description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BountyRow::into_bounty))
    }

    async fn delete_bounty(&self, scope: BountyScope) -> CatalogResult<bool> {
        let deleted = sqlx::query("DELETE FROM bounties WHERE game_id = $1 AND bounty_id = $2")
            .bind(scope.game_id.as_uuid())
            .bind(scope.bounty_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

impl NftRepository for PgCatalogRepository {
    async fn list_nfts(&self, game_id: GameId, bounty_id: BountyId) -> CatalogResult<Vec<Nft>> {
        let rows = sqlx::query_as::<_, NftRow>(&format!(
            r#"
            SELECT {NFT_COLUMNS} FROM nfts
            WHERE game_id = $1 AND bounty_id = $2
            ORDER BY created_at, nft_id
            "#
        ))
        .bind(game_id.as_uuid())
        .bind(bounty_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(NftRow::into_nft).collect())
    }

    async fn find_nft(&self, scope: NftScope) -> CatalogResult<Option<Nft>> {
        let row = sqlx::query_as::<_, NftRow>(&format!(
            "SELECT {NFT_COLUMNS} FROM nfts WHERE game_id = $1 AND bounty_id = $2 AND nft_id = $3"
        ))
        .bind(scope.game_id.as_uuid())
        .bind(scope.bounty_id.as_uuid())
        .bind(scope.nft_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(NftRow::into_nft))
    }

    async fn insert_nft(&self, nft: &Nft) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO nfts (
                nft_id, game_id, bounty_id, name, description, uri, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(nft.id.as_uuid())
        .bind(nft.game_id.as_uuid())
        .bind(nft.bounty_id.as_uuid())
        .bind(&nft.details.name)
        .bind(&nft.details.description)
        .bind(&nft.details.uri)
        .bind(nft.created_at)
        .bind(nft.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                CatalogError::BountyNotFound {
                    game_id: nft.game_id,
                    bounty_id: nft.bounty_id,
                }
            } else {
                CatalogError::Database(e)
            }
        })?;

        Ok(())
    }

    async fn replace_nft(
        &self,
        scope: NftScope,
        details: &NftDetails,
    ) -> CatalogResult<Option<Nft>> {
        let row = sqlx::query_as::<_, NftRow>(&format!(
            r#"
            UPDATE nfts SET name = $4, description = $5, uri = $6, updated_at = now()
            WHERE game_id = $1 AND bounty_id = $2 AND nft_id = $3
            RETURNING {NFT_COLUMNS}
            "#
        ))
        .bind(scope.game_id.as_uuid())
        .bind(scope.bounty_id.as_uuid())
        .bind(scope.nft_id.as_uuid())
        .bind(&details.name)
        .bind(&details.description)
        .bind(&details.uri)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(NftRow::into_nft))
    }

    async fn delete_nft(&self, scope: NftScope) -> CatalogResult<bool> {
        let deleted = sqlx::query(
            "DELETE FROM nfts WHERE game_id = $1 AND bounty_id = $2 AND nft_id = $3",
        )
        .bind(scope.game_id.as_uuid())
        .bind(scope.bounty_id.as_uuid())
        .bind(scope.nft_id.as_uuid())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(deleted > 0)
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct GameRow {
    game_id: Uuid,
    external_id: Option<String>,
    title: Option<String>,
    price: Option<f64>,
    genre: Option<String>,
    description: Option<String>,
    nft_rewards: Json<Vec<Reward>>,
    images: Vec<String>,
    tags: Vec<String>,
    rating: Option<f64>,
    system_requirements: Option<Json<SystemRequirements>>,
    developer_data: Option<Json<DeveloperData>>,
    reviews: Json<Vec<Review>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl GameRow {
    fn into_game(self) -> Game {
        Game {
            id: GameId::from_uuid(self.game_id),
            details: GameDetails {
                external_id: self.external_id,
                title: self.title,
                price: self.price,
                genre: self.genre,
                description: self.description,
                nft_rewards: self.nft_rewards.0,
                images: self.images,
                tags: self.tags,
                rating: self.rating,
                system_requirements: self.system_requirements.map(|j| j.0),
                developer_data: self.developer_data.map(|j| j.0),
            },
            reviews: self.reviews.0,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BountyRow {
    bounty_id: Uuid,
    game_id: Uuid,
    name: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BountyRow {
    fn into_bounty(self) -> Bounty {
        Bounty {
            id: BountyId::from_uuid(self.bounty_id),
            game_id: GameId::from_uuid(self.game_id),
            details: BountyDetails {
                name: self.name,
                description: self.description,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct NftRow {
    nft_id: Uuid,
    game_id: Uuid,
    bounty_id: Uuid,
    name: String,
    description: Option<String>,
    uri: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NftRow {
    fn into_nft(self) -> Nft {
        Nft {
            id: NftId::from_uuid(self.nft_id),
            game_id: GameId::from_uuid(self.game_id),
            bounty_id: BountyId::from_uuid(self.bounty_id),
            details: NftDetails {
                name: self.name,
                description: self.description,
                uri: self.uri,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
