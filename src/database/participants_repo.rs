use sqlx::SqlitePool;

use crate::models::ParticipantRow;

const SQL_LIST_EMAILS_FOR_ACTIVITY: &str = r#"
SELECT user_email
FROM participants
WHERE activity_id = ?
ORDER BY id ASC
"#;

pub async fn list_emails_for_activity(
    pool: &SqlitePool,
    activity_id: i64,
) -> sqlx::Result<Vec<String>> {
    sqlx::query_scalar(SQL_LIST_EMAILS_FOR_ACTIVITY)
        .bind(activity_id)
        .fetch_all(pool)
        .await
}

const SQL_FIND_PARTICIPANT: &str = r#"
SELECT
  id,
  activity_id,
  user_email,
  joined_at
FROM participants
WHERE activity_id = ?
  AND user_email = ?
LIMIT 1
"#;

pub async fn find_participant(
    pool: &SqlitePool,
    activity_id: i64,
    user_email: &str,
) -> sqlx::Result<Option<ParticipantRow>> {
    sqlx::query_as::<_, ParticipantRow>(SQL_FIND_PARTICIPANT)
        .bind(activity_id)
        .bind(user_email)
        .fetch_optional(pool)
        .await
}

const SQL_COUNT_FOR_ACTIVITY: &str = r#"
SELECT COUNT(*)
FROM participants
WHERE activity_id = ?
"#;

pub async fn count_for_activity(pool: &SqlitePool, activity_id: i64) -> sqlx::Result<i64> {
    sqlx::query_scalar(SQL_COUNT_FOR_ACTIVITY)
        .bind(activity_id)
        .fetch_one(pool)
        .await
}

const SQL_INSERT_PARTICIPANT: &str = r#"
INSERT INTO participants (activity_id, user_email)
VALUES (?, ?)
"#;

pub async fn insert_participant(
    pool: &SqlitePool,
    activity_id: i64,
    user_email: &str,
) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_PARTICIPANT)
        .bind(activity_id)
        .bind(user_email)
        .execute(pool)
        .await?;
    Ok(res.last_insert_rowid())
}

const SQL_DELETE_PARTICIPANT: &str = r#"
DELETE FROM participants
WHERE id = ?
"#;

pub async fn delete_participant(pool: &SqlitePool, id: i64) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_PARTICIPANT)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
