pub mod activities_repo;
pub mod participants_repo;
pub mod schema;
pub mod seed;
pub mod users_repo;
