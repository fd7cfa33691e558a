use serde::Serialize;
use sqlx::SqlitePool;
use std::collections::BTreeMap;

use crate::database::{activities_repo, participants_repo};

#[derive(Debug, Clone, Serialize)]
pub struct ActivityView {
    pub description: Option<String>,
    pub schedule: Option<String>,
    pub max_participants: Option<i64>,
    pub participants: Vec<String>,
}

pub async fn list_activities(
    pool: &SqlitePool,
) -> sqlx::Result<BTreeMap<String, ActivityView>> {
    let activities = activities_repo::list_activities(pool).await?;

    let mut result = BTreeMap::new();
    for activity in activities {
        let participants =
            participants_repo::list_emails_for_activity(pool, activity.id).await?;
        result.insert(
            activity.name,
            ActivityView {
                description: activity.description,
                schedule: activity.schedule,
                max_participants: activity.max_participants,
                participants,
            },
        );
    }
    Ok(result)
}
