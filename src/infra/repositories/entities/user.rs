//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::{ContactType, User};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: Option<String>,
    pub password_digest: String,
    pub name: String,
    pub avatar: String,
    pub description: String,
    pub contact_type: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            username: model.username,
            email: model.email,
            password_digest: model.password_digest,
            name: model.name,
            avatar: model.avatar,
            description: model.description,
            contact_type: ContactType::from(model.contact_type.as_str()),
            created_at: model.created_at,
        }
    }
}

/// Convert a domain identity into an insertable row
impl From<User> for ActiveModel {
    fn from(user: User) -> Self {
        ActiveModel {
            id: Set(user.id),
            username: Set(user.username),
            email: Set(user.email),
            password_digest: Set(user.password_digest),
            name: Set(user.name),
            avatar: Set(user.avatar),
            description: Set(user.description),
            contact_type: Set(user.contact_type.to_string()),
            created_at: Set(user.created_at),
        }
    }
}
