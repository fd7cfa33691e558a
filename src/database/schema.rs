use sqlx::SqlitePool;

const SQL_CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS activities (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL UNIQUE,
  description TEXT,
  schedule TEXT,
  max_participants INTEGER
);

CREATE TABLE IF NOT EXISTS participants (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  activity_id INTEGER NOT NULL REFERENCES activities(id) ON DELETE CASCADE,
  user_email TEXT NOT NULL,
  joined_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Backstop for the duplicate-signup check in the service layer.
CREATE UNIQUE INDEX IF NOT EXISTS idx_participants_activity_email
  ON participants(activity_id, user_email);

CREATE TABLE IF NOT EXISTS users (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  email TEXT NOT NULL UNIQUE,
  name TEXT,
  role TEXT
);
"#;

pub async fn init_db(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::raw_sql(SQL_CREATE_TABLES).execute(pool).await?;
    Ok(())
}
