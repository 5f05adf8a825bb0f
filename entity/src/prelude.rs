pub use super::matches::Entity as Match;
pub use super::people::Entity as People;
pub use super::sponsors::Entity as Sponsors;
pub use super::teams::Entity as Teams;
