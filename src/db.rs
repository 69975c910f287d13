use crate::models::ShortLink;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::time::Duration;

// ── Pool lifecycle ─────────────────────────────────────────────────────────

/// Open the SQLite pool and bring the schema up to date.
///
/// The database file is created if it does not exist yet. WAL mode plus a
/// busy timeout lets concurrent upserts queue on the single writer instead
/// of failing with `SQLITE_BUSY`.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            database_url
                .parse::<SqliteConnectOptions>()?
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .busy_timeout(Duration::from_secs(5)),
        )
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

// ── Short links ────────────────────────────────────────────────────────────

/// Insert a mapping for `key`, or replace its URL if the key already exists.
///
/// The conflict is resolved inside the storage engine in a single statement,
/// so concurrent upserts of the same key can neither duplicate the row nor
/// lose an update. Returns the surviving row.
pub async fn upsert_link(
    pool: &SqlitePool,
    key: &str,
    url: &str,
) -> Result<ShortLink, sqlx::Error> {
    let link: ShortLink = sqlx::query_as(
        "INSERT INTO short_links (key, url) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET url = excluded.url
         RETURNING id, key, url",
    )
    .bind(key)
    .bind(url)
    .fetch_one(pool)
    .await?;

    Ok(link)
}

/// Fetch a single mapping by its key.
pub async fn get_link(pool: &SqlitePool, key: &str) -> Result<Option<ShortLink>, sqlx::Error> {
    let link: Option<ShortLink> =
        sqlx::query_as("SELECT id, key, url FROM short_links WHERE key = ?1")
            .bind(key)
            .fetch_optional(pool)
            .await?;

    Ok(link)
}

/// Return every mapping, oldest registration first.
pub async fn list_links(pool: &SqlitePool) -> Result<Vec<ShortLink>, sqlx::Error> {
    let links: Vec<ShortLink> =
        sqlx::query_as("SELECT id, key, url FROM short_links ORDER BY id")
            .fetch_all(pool)
            .await?;

    Ok(links)
}

/// Remove a mapping by its key. Returns `true` iff a row was removed.
pub async fn delete_link(pool: &SqlitePool, key: &str) -> Result<bool, sqlx::Error> {
    let affected = sqlx::query("DELETE FROM short_links WHERE key = ?1")
        .bind(key)
        .execute(pool)
        .await?
        .rows_affected();

    Ok(affected > 0)
}

// ── Tests ──────────────────────────────────────────────────────────────────
