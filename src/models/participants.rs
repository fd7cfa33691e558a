#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ParticipantRow {
    pub id: i64,
    pub activity_id: i64,
    pub user_email: String,
    pub joined_at: String,
}
