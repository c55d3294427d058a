pub mod matches;
pub mod players;
pub mod sub_matches;
pub mod teams;
pub mod tournaments;
