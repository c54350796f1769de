//! Infrastructure concerns: database access and the user store adapter.

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{UserRepository, UserStore, UserSummary};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
