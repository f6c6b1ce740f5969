use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Portal account. Passwords are stored and compared in plaintext for
/// compatibility with the legacy store; verification is isolated behind
/// `services::user_service::PasswordVerifier` so a hashed scheme can be
/// introduced without touching callers.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i32,
    pub company_id: i32,
    #[sea_orm(unique)]
    pub user_name: String,
    // Never echoed back in responses
    #[serde(skip_serializing, default)]
    pub user_password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
