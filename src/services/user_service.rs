use std::sync::Arc;

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::database::entities::{users, users::Entity as Users};
use crate::errors::PortalError;

/// Seam for credential checks. The legacy store keeps passwords in
/// plaintext, so the default verifier is an exact string comparison; a
/// salted-hash implementation can replace it without touching callers.
pub trait PasswordVerifier: Send + Sync {
    fn verify(&self, candidate: &str, stored: &str) -> bool;
}

/// Exact plaintext comparison, matching the legacy behavior. Known-weak and
/// kept deliberately for compatibility with existing rows.
pub struct PlaintextVerifier;

impl PasswordVerifier for PlaintextVerifier {
    fn verify(&self, candidate: &str, stored: &str) -> bool {
        candidate == stored
    }
}

#[derive(Clone)]
pub struct UserService {
    db: DatabaseConnection,
    verifier: Arc<dyn PasswordVerifier>,
}

impl UserService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_verifier(db, Arc::new(PlaintextVerifier))
    }

    pub fn with_verifier(db: DatabaseConnection, verifier: Arc<dyn PasswordVerifier>) -> Self {
        Self { db, verifier }
    }

    /// Looks up the user by name and checks the credential. Unknown user,
    /// wrong password, and a storage failure are indistinguishable to the
    /// caller: all come back as `None`.
    pub async fn authenticate(&self, username: &str, password: &str) -> Option<users::Model> {
        let user = Users::find()
            .filter(users::Column::UserName.eq(username))
            .one(&self.db)
            .await
            .ok()
            .flatten()?;

        if self.verifier.verify(password, &user.user_password) {
            Some(user)
        } else {
            None
        }
    }

    pub async fn create_user(
        &self,
        user: users::ActiveModel,
    ) -> Result<users::Model, PortalError> {
        user.insert(&self.db)
            .await
            .map_err(|e| PortalError::operation("Failed to create user", e))
    }

    pub async fn read_user(&self, user_id: i32) -> Option<users::Model> {
        Users::find_by_id(user_id).one(&self.db).await.ok().flatten()
    }

    pub async fn read_all_users(&self) -> Result<Vec<users::Model>, PortalError> {
        Users::find()
            .all(&self.db)
            .await
            .map_err(|e| PortalError::operation("Failed to list users", e))
    }

    pub async fn update_user(
        &self,
        user: users::ActiveModel,
    ) -> Result<users::Model, PortalError> {
        user.update(&self.db)
            .await
            .map_err(|e| PortalError::operation("Failed to update user", e))
    }

    pub async fn delete_user(&self, user_id: i32) -> Result<(), PortalError> {
        let result = Users::delete_by_id(user_id)
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::operation("Failed to delete user", e))?;

        if result.rows_affected == 0 {
            return Err(PortalError::not_found("user", user_id));
        }
        Ok(())
    }
}
