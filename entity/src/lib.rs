pub mod prelude;

pub mod matches;
pub mod people;
pub mod sponsors;
pub mod teams;
