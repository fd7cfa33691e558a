use sqlx::SqlitePool;

use crate::models::ActivityRow;

const SQL_LIST_ACTIVITIES: &str = r#"
SELECT
  id,
  name,
  description,
  schedule,
  max_participants
FROM activities
ORDER BY id ASC
"#;

pub async fn list_activities(pool: &SqlitePool) -> sqlx::Result<Vec<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_LIST_ACTIVITIES)
        .fetch_all(pool)
        .await
}

const SQL_FIND_ACTIVITY_BY_NAME: &str = r#"
SELECT
  id,
  name,
  description,
  schedule,
  max_participants
FROM activities
WHERE name = ?
LIMIT 1
"#;

pub async fn find_activity_by_name(
    pool: &SqlitePool,
    name: &str,
) -> sqlx::Result<Option<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_FIND_ACTIVITY_BY_NAME)
        .bind(name)
        .fetch_optional(pool)
        .await
}

const SQL_COUNT_ACTIVITIES: &str = "SELECT COUNT(*) FROM activities";

pub async fn count_activities(pool: &SqlitePool) -> sqlx::Result<i64> {
    sqlx::query_scalar(SQL_COUNT_ACTIVITIES).fetch_one(pool).await
}

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (name, description, schedule, max_participants)
VALUES (?, ?, ?, ?)
"#;

pub struct NewActivity<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub schedule: Option<&'a str>,
    pub max_participants: Option<i64>,
}

pub async fn insert_activity(pool: &SqlitePool, activity: NewActivity<'_>) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_ACTIVITY)
        .bind(activity.name)
        .bind(activity.description)
        .bind(activity.schedule)
        .bind(activity.max_participants)
        .execute(pool)
        .await?;
    Ok(res.last_insert_rowid())
}
