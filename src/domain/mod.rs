//! Core business entities and logic.

pub mod avatar;
mod password;
mod user;

pub use password::Password;
pub use user::{ContactType, SignupRequest, User};
