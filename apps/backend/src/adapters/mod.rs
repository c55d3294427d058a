pub mod matches_sea;
pub mod players_sea;
pub mod sub_matches_sea;
pub mod teams_sea;
pub mod tournaments_sea;
