pub mod matches;
pub mod players;
pub mod sub_matches;
pub mod teams;
pub mod tournaments;

pub use matches::Entity as Matches;
pub use matches::Model as Match;
pub use players::Entity as Players;
pub use players::Model as Player;
pub use sub_matches::Entity as SubMatches;
pub use sub_matches::Model as SubMatch;
pub use teams::Entity as Teams;
pub use teams::Model as Team;
pub use tournaments::Entity as Tournaments;
pub use tournaments::Model as Tournament;
