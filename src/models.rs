/// A shortcode registration from the `short_links` table.
///
/// `key` is unique across the table; `url` is stored verbatim and never
/// validated as a well-formed URL.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ShortLink {
    pub id: i64,
    pub key: String,
    pub url: String,
}
