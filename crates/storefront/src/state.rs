//! Application state shared across handlers.

use std::sync::Arc;

use secrecy::ExposeSecret;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::db::{OrderRepository, UserRepository};
use crate::services::{AuthError, AuthService};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog, the in-memory repositories and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    users: UserRepository,
    orders: OrderRepository,
}

impl AppState {
    /// Create a new application state with empty repositories.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                users: UserRepository::new(),
                orders: OrderRepository::new(),
            }),
        }
    }

    /// Register the configured demo account, if any.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the demo credentials are rejected.
    pub async fn seed_demo_user(&self) -> Result<(), AuthError> {
        let Some(demo) = &self.inner.config.demo_user else {
            return Ok(());
        };

        let user = AuthService::new(self.users())
            .register_with_password(&demo.email, demo.password.expose_secret(), "Demo", "Shopper")
            .await?;
        tracing::info!(user_id = %user.id, "Demo user seeded");
        Ok(())
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    #[must_use]
    pub fn users(&self) -> &UserRepository {
        &self.inner.users
    }

    #[must_use]
    pub fn orders(&self) -> &OrderRepository {
        &self.inner.orders
    }
}
