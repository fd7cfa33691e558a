use sqlx::SqlitePool;

const SQL_INSERT_USER: &str = r#"
INSERT INTO users (email, name, role)
VALUES (?, ?, ?)
"#;

pub struct NewUser<'a> {
    pub email: &'a str,
    pub name: Option<&'a str>,
    pub role: Option<&'a str>,
}

pub async fn insert_user(pool: &SqlitePool, user: NewUser<'_>) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_USER)
        .bind(user.email)
        .bind(user.name)
        .bind(user.role)
        .execute(pool)
        .await?;
    Ok(res.last_insert_rowid())
}
