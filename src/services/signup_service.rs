use sqlx::SqlitePool;

use crate::database::{activities_repo, participants_repo};

#[derive(Debug)]
pub enum SignupError {
    ActivityNotFound,
    AlreadySignedUp,
    ActivityFull,
    NotSignedUp,
    Db(sqlx::Error),
}

impl SignupError {
    pub fn detail(&self) -> &'static str {
        match self {
            SignupError::ActivityNotFound => "Activity not found",
            SignupError::AlreadySignedUp => "Student is already signed up",
            SignupError::ActivityFull => "Activity is full",
            SignupError::NotSignedUp => "Student is not signed up for this activity",
            SignupError::Db(_) => "Internal server error",
        }
    }
}

impl std::fmt::Display for SignupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignupError::Db(e) => write!(f, "database error: {}", e),
            other => f.write_str(other.detail()),
        }
    }
}

impl From<sqlx::Error> for SignupError {
    fn from(e: sqlx::Error) -> Self {
        SignupError::Db(e)
    }
}

pub async fn signup(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    let activity = activities_repo::find_activity_by_name(pool, activity_name)
        .await?
        .ok_or(SignupError::ActivityNotFound)?;

    if participants_repo::find_participant(pool, activity.id, email)
        .await?
        .is_some()
    {
        return Err(SignupError::AlreadySignedUp);
    }

    if let Some(max) = activity.max_participants {
        let current = participants_repo::count_for_activity(pool, activity.id).await?;
        if current >= max {
            return Err(SignupError::ActivityFull);
        }
    }

    participants_repo::insert_participant(pool, activity.id, email).await?;
    Ok(format!("Signed up {} for {}", email, activity_name))
}

pub async fn unregister(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    let activity = activities_repo::find_activity_by_name(pool, activity_name)
        .await?
        .ok_or(SignupError::ActivityNotFound)?;

    let participant = participants_repo::find_participant(pool, activity.id, email)
        .await?
        .ok_or(SignupError::NotSignedUp)?;

    participants_repo::delete_participant(pool, participant.id).await?;
    Ok(format!("Unregistered {} from {}", email, activity_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::activities_repo::NewActivity;
    use crate::database::schema;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        schema::init_db(&pool).await.unwrap();
        pool
    }

    async fn add_activity(pool: &SqlitePool, name: &str, max: Option<i64>) -> i64 {
        activities_repo::insert_activity(
            pool,
            NewActivity {
                name,
                description: None,
                schedule: None,
                max_participants: max,
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn signup_unknown_activity_is_not_found() {
        let pool = test_pool().await;
        let err = signup(&pool, "Unknown Club", "a@x.com").await.unwrap_err();
        assert!(matches!(err, SignupError::ActivityNotFound));
    }

    #[tokio::test]
    async fn duplicate_signup_is_rejected_before_capacity() {
        let pool = test_pool().await;
        // Capacity 1, so a duplicate would also trip the full check; the
        // duplicate message must win.
        add_activity(&pool, "Chess Club", Some(1)).await;

        signup(&pool, "Chess Club", "a@x.com").await.unwrap();
        let err = signup(&pool, "Chess Club", "a@x.com").await.unwrap_err();
        assert!(matches!(err, SignupError::AlreadySignedUp));
    }

    #[tokio::test]
    async fn capacity_limit_is_enforced() {
        let pool = test_pool().await;
        add_activity(&pool, "Chess Club", Some(2)).await;

        signup(&pool, "Chess Club", "a@x.com").await.unwrap();
        signup(&pool, "Chess Club", "b@x.com").await.unwrap();
        let err = signup(&pool, "Chess Club", "c@x.com").await.unwrap_err();
        assert!(matches!(err, SignupError::ActivityFull));
    }

    #[tokio::test]
    async fn unlimited_activity_never_fills() {
        let pool = test_pool().await;
        let id = add_activity(&pool, "Open Mic", None).await;

        for i in 0..40 {
            signup(&pool, "Open Mic", &format!("s{}@x.com", i))
                .await
                .unwrap();
        }
        assert_eq!(
            participants_repo::count_for_activity(&pool, id).await.unwrap(),
            40
        );
    }

    #[tokio::test]
    async fn unregister_requires_membership() {
        let pool = test_pool().await;
        add_activity(&pool, "Chess Club", Some(2)).await;

        let err = unregister(&pool, "Chess Club", "a@x.com").await.unwrap_err();
        assert!(matches!(err, SignupError::NotSignedUp));
    }

    #[tokio::test]
    async fn signup_then_unregister_round_trips() {
        let pool = test_pool().await;
        let id = add_activity(&pool, "Chess Club", Some(2)).await;

        let before = participants_repo::count_for_activity(&pool, id).await.unwrap();
        signup(&pool, "Chess Club", "a@x.com").await.unwrap();
        let msg = unregister(&pool, "Chess Club", "a@x.com").await.unwrap();
        assert_eq!(msg, "Unregistered a@x.com from Chess Club");
        let after = participants_repo::count_for_activity(&pool, id).await.unwrap();
        assert_eq!(before, after);
    }
}
