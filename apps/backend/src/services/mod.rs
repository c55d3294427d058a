pub mod fixtures;
pub mod match_results;
pub mod standings;
pub mod tournaments;
