//! User account repository.

use std::collections::HashMap;

use tokio::sync::RwLock;

use emporium_core::{Email, UserId};

use super::RepositoryError;
use crate::models::{Profile, User};

/// A user row together with its password hash.
#[derive(Debug, Clone)]
struct UserRow {
    user: User,
    password_hash: String,
}

#[derive(Debug, Default)]
struct UserTable {
    rows: HashMap<UserId, UserRow>,
    by_email: HashMap<Email, UserId>,
    next_id: u64,
}

/// Account storage keyed by id with a unique email index.
#[derive(Debug, Default)]
pub struct UserRepository {
    table: RwLock<UserTable>,
}

impl UserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new account with an empty profile.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email is already registered.
    pub async fn create_with_password(
        &self,
        email: &Email,
        password_hash: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<User, RepositoryError> {
        let mut table = self.table.write().await;

        if table.by_email.contains_key(email) {
            return Err(RepositoryError::Conflict(format!(
                "email already registered: {email}"
            )));
        }

        table.next_id += 1;
        let id = UserId::new(table.next_id);
        let user = User {
            id,
            email: email.clone(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            profile: Profile::default(),
        };

        table.by_email.insert(email.clone(), id);
        table.rows.insert(
            id,
            UserRow {
                user: user.clone(),
                password_hash: password_hash.to_string(),
            },
        );

        Ok(user)
    }

    /// Get a user and their password hash by email.
    pub async fn get_password_hash(&self, email: &Email) -> Option<(User, String)> {
        let table = self.table.read().await;
        let id = table.by_email.get(email)?;
        table
            .rows
            .get(id)
            .map(|row| (row.user.clone(), row.password_hash.clone()))
    }

    /// Get a user by id.
    pub async fn get_by_id(&self, id: UserId) -> Option<User> {
        self.table
            .read()
            .await
            .rows
            .get(&id)
            .map(|row| row.user.clone())
    }

    /// Replace a user's name and profile.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the user does not exist.
    pub async fn update_profile(
        &self,
        id: UserId,
        first_name: &str,
        last_name: &str,
        profile: Profile,
    ) -> Result<User, RepositoryError> {
        let mut table = self.table.write().await;
        let row = table
            .rows
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::NotFound(format!("user {id}")))?;

        row.user.first_name = first_name.to_string();
        row.user.last_name = last_name.to_string();
        row.user.profile = profile;

        Ok(row.user.clone())
    }

    /// Number of registered accounts.
    pub async fn count(&self) -> usize {
        self.table.read().await.rows.len()
    }
}
