//! Data models shared across the lookup pipeline

pub mod conditions;
pub mod place;

pub use conditions::CurrentConditions;
pub use place::Place;
