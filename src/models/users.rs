// Schema-only for now: seeded at startup, read by no endpoint.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub role: Option<String>,
}
