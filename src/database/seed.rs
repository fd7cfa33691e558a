use sqlx::SqlitePool;
use tracing::info;

use crate::database::{activities_repo, participants_repo, users_repo};
use crate::database::activities_repo::NewActivity;
use crate::database::users_repo::NewUser;

struct SeedActivity<'a> {
    name: &'a str,
    description: &'a str,
    schedule: &'a str,
    max_participants: Option<i64>,
    participants: &'a [&'a str],
}

const SEED_ACTIVITIES: &[SeedActivity<'static>] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: Some(12),
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: Some(20),
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: Some(30),
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Soccer Team",
        description: "Join the school soccer team and compete in matches",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: Some(22),
        participants: &["liam@mergington.edu", "noah@mergington.edu"],
    },
    SeedActivity {
        name: "Art Club",
        description: "Explore various art techniques and create masterpieces",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: Some(15),
        participants: &["amelia@mergington.edu", "harper@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Act, direct, and produce plays and performances",
        schedule: "Mondays and Wednesdays, 3:30 PM - 5:30 PM",
        max_participants: Some(20),
        participants: &["ella@mergington.edu", "scarlett@mergington.edu"],
    },
];

const SEED_USERS: &[(&str, &str, &str)] = &[
    ("principal@mergington.edu", "Principal Martinez", "admin"),
    ("teacher@mergington.edu", "Ms. Rodriguez", "teacher"),
];

// Fills an empty database with the standard Mergington catalogue. A store
// that already has activities is left untouched, so restarts are safe.
pub async fn seed_if_empty(pool: &SqlitePool) -> sqlx::Result<()> {
    if activities_repo::count_activities(pool).await? > 0 {
        return Ok(());
    }

    for seed in SEED_ACTIVITIES {
        let activity_id = activities_repo::insert_activity(
            pool,
            NewActivity {
                name: seed.name,
                description: Some(seed.description),
                schedule: Some(seed.schedule),
                max_participants: seed.max_participants,
            },
        )
        .await?;

        for email in seed.participants {
            participants_repo::insert_participant(pool, activity_id, email).await?;
        }
    }

    for (email, name, role) in SEED_USERS {
        users_repo::insert_user(
            pool,
            NewUser {
                email,
                name: Some(name),
                role: Some(role),
            },
        )
        .await?;
    }

    info!(activities = SEED_ACTIVITIES.len(), "Seeded empty database");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
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

    #[tokio::test]
    async fn seeds_an_empty_database_once() {
        let pool = test_pool().await;

        seed_if_empty(&pool).await.unwrap();
        let after_first = activities_repo::count_activities(&pool).await.unwrap();
        assert_eq!(after_first, SEED_ACTIVITIES.len() as i64);

        seed_if_empty(&pool).await.unwrap();
        let after_second = activities_repo::count_activities(&pool).await.unwrap();
        assert_eq!(after_second, after_first);
    }

    #[tokio::test]
    async fn leaves_existing_data_alone() {
        let pool = test_pool().await;
        activities_repo::insert_activity(
            &pool,
            NewActivity {
                name: "Debate Team",
                description: None,
                schedule: None,
                max_participants: None,
            },
        )
        .await
        .unwrap();

        seed_if_empty(&pool).await.unwrap();
        assert_eq!(activities_repo::count_activities(&pool).await.unwrap(), 1);
    }
}
