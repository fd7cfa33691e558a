pub mod activities;
pub mod participants;
#[allow(dead_code)]
pub mod users;

pub use activities::ActivityRow;
pub use participants::ParticipantRow;
pub use users::UserRow;
