//! User store adapter - the only I/O in the signup pipeline.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, FromQueryResult,
    QueryFilter, QuerySelect, SqlErr,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{ChatError, ChatResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Partial identity returned by the duplicate pre-check. Carries no
/// credential data and at most two rows come back: the caller only needs to
/// know whether any conflicting record exists.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct UserSummary {
    pub id: uuid::Uuid,
    pub email: Option<String>,
    pub username: String,
}

/// User repository trait for dependency injection.
///
/// Lookups return `Ok(None)` / an empty list for absence; only store faults
/// and uniqueness violations are errors.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new identity atomically.
    ///
    /// A uniqueness violation on username or email surfaces as
    /// `ChatError::Conflict`, distinct from generic database failures. On
    /// success the identity that was written is returned.
    async fn create(&self, user: User) -> ChatResult<User>;

    /// Find the full stored identity by exact normalized username
    async fn find_full_details_by_username(&self, username: &str) -> ChatResult<Option<User>>;

    /// Duplicate pre-check: rows matching the email or the username,
    /// projected to `{id, email, username}` and capped at 2
    async fn find_by_username_or_email<'a>(
        &self,
        email: Option<&'a str>,
        username: &str,
    ) -> ChatResult<Vec<UserSummary>>;
}

/// Concrete implementation of UserRepository over SeaORM/Postgres
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Translate a constraint violation reported by the store. A duplicate
    /// username or email is a conflict the caller can act on; any other
    /// violation is a store fault.
    fn constraint_violation_error(err: SqlErr) -> ChatError {
        match err {
            SqlErr::UniqueConstraintViolation(_) => ChatError::conflict("Username already taken"),
            SqlErr::ForeignKeyConstraintViolation(detail) => ChatError::server(detail),
            other => ChatError::server(other.to_string()),
        }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, user: User) -> ChatResult<User> {
        let active_model = ActiveModel::from(user);

        match active_model.insert(self.db.as_ref()).await {
            Ok(model) => {
                tracing::info!(user_id = %model.id, "inserted user");
                Ok(User::from(model))
            }
            Err(err) => {
                tracing::warn!("failed to insert user: {}", err);
                match err.sql_err() {
                    Some(sql_err) => Err(Self::constraint_violation_error(sql_err)),
                    None => Err(ChatError::from(err)),
                }
            }
        }
    }

    async fn find_full_details_by_username(&self, username: &str) -> ChatResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(self.db.as_ref())
            .await
            .map_err(ChatError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_username_or_email<'a>(
        &self,
        email: Option<&'a str>,
        username: &str,
    ) -> ChatResult<Vec<UserSummary>> {
        let mut condition = Condition::any().add(user::Column::Username.eq(username));
        if let Some(email) = email {
            condition = condition.add(user::Column::Email.eq(email));
        }

        UserEntity::find()
            .filter(condition)
            .select_only()
            .column(user::Column::Id)
            .column(user::Column::Email)
            .column(user::Column::Username)
            .limit(2)
            .into_model::<UserSummary>()
            .all(self.db.as_ref())
            .await
            .map_err(ChatError::from)
    }
}
