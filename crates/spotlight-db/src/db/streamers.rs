use chrono::{DateTime, Utc};
use spotlight_core::models::{NewStreamer, Streamer, VoteCounts, VoteKind};
use spotlight_core::AppError;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

/// Row shape of the `streamers` table. Vote counters are flat columns here
/// and folded into `VoteCounts` on conversion to the domain model.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StreamerRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub platforms: Vec<String>,
    pub votes_up: i64,
    pub votes_down: i64,
    pub image: Option<Vec<u8>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<StreamerRow> for Streamer {
    fn from(row: StreamerRow) -> Self {
        Streamer {
            id: row.id,
            name: row.name,
            description: row.description,
            platforms: row.platforms,
            votes: VoteCounts {
                up: row.votes_up,
                down: row.votes_down,
            },
            image: row.image,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Streamer repository
///
/// All access to the `streamers` table goes through here. Vote increments are
/// single atomic UPDATE statements so concurrent votes on the same record
/// never lose updates.
#[derive(Clone)]
pub struct StreamerRepository {
    pool: PgPool,
}

impl StreamerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(
        skip(self, streamer),
        fields(db.table = "streamers", db.operation = "insert", streamer_name = %streamer.name)
    )]
    pub async fn create(&self, streamer: NewStreamer) -> Result<Streamer, AppError> {
        let row = sqlx::query_as::<Postgres, StreamerRow>(
            r#"
            INSERT INTO streamers (name, description, platforms, image)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&streamer.name)
        .bind(&streamer.description)
        .bind(&streamer.platforms)
        .bind(&streamer.image)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // The unique index closes the race behind the handler pre-check;
            // surface it as the domain duplicate error, not a raw 500.
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::DuplicateName(streamer.name.clone());
                }
            }
            AppError::Database(e)
        })?;

        Ok(row.into())
    }

    #[tracing::instrument(
        skip(self),
        fields(db.table = "streamers", db.operation = "select", streamer_name = %name)
    )]
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Streamer>, AppError> {
        let row =
            sqlx::query_as::<Postgres, StreamerRow>(r#"SELECT * FROM streamers WHERE name = $1"#)
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(Into::into))
    }

    /// Offset-paginated listing. The page fetch and the total count answer
    /// different questions and run concurrently on separate pool connections.
    #[tracing::instrument(
        skip(self),
        fields(db.table = "streamers", db.operation = "select", page = page, page_size = page_size)
    )]
    pub async fn find_all(
        &self,
        page: i64,
        page_size: i64,
    ) -> Result<(Vec<Streamer>, i64), AppError> {
        let offset = (page - 1) * page_size;

        let rows_fut = sqlx::query_as::<Postgres, StreamerRow>(
            r#"
            SELECT * FROM streamers
            ORDER BY created_at ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page_size)
        .bind(offset)
        .fetch_all(&self.pool);

        let count_fut =
            sqlx::query_scalar::<Postgres, i64>(r#"SELECT COUNT(*) FROM streamers"#)
                .fetch_one(&self.pool);

        let (rows, total) = tokio::try_join!(rows_fut, count_fut)?;

        Ok((rows.into_iter().map(Into::into).collect(), total))
    }

    /// Atomic +1 on the chosen counter, returning the post-update record.
    /// Returns None when no row matched the id.
    #[tracing::instrument(
        skip(self),
        fields(db.table = "streamers", db.operation = "update", db.record_id = %id, vote = kind.as_str())
    )]
    pub async fn increment_vote(
        &self,
        id: Uuid,
        kind: VoteKind,
    ) -> Result<Option<Streamer>, AppError> {
        let sql = match kind {
            VoteKind::Up => {
                r#"
                UPDATE streamers
                SET votes_up = votes_up + 1, updated_at = NOW()
                WHERE id = $1
                RETURNING *
                "#
            }
            VoteKind::Down => {
                r#"
                UPDATE streamers
                SET votes_down = votes_down + 1, updated_at = NOW()
                WHERE id = $1
                RETURNING *
                "#
            }
        };

        let row = sqlx::query_as::<Postgres, StreamerRow>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Top streamers by upvote count; ties break oldest-first so the order is
    /// deterministic. Fewer than `limit` rows (or none) is a valid result.
    #[tracing::instrument(
        skip(self),
        fields(db.table = "streamers", db.operation = "select", limit = limit)
    )]
    pub async fn top_by_upvotes(&self, limit: i64) -> Result<Vec<Streamer>, AppError> {
        let rows = sqlx::query_as::<Postgres, StreamerRow>(
            r#"
            SELECT * FROM streamers
            ORDER BY votes_up DESC, created_at ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(skip(self), fields(db.table = "streamers", db.operation = "select"))]
    pub async fn list_names(&self) -> Result<Vec<String>, AppError> {
        let names = sqlx::query_scalar::<Postgres, String>(
            r#"SELECT name FROM streamers ORDER BY created_at ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }
}
