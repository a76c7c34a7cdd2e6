//! Module registration.
//!
//! Each functional area implements `RouteProvider`. The `ModuleRegistry` collects the
//! providers, orders them by priority and merges their routes into one router. Shared
//! services reach the handlers through `AppState`.

use axum::Router;

use crate::server::{error::internal::InternalError, state::AppState};

/// A functional area contributing routes to the application.
pub trait RouteProvider: Send + Sync {
    /// Unique module name, e.g. `security`.
    fn name(&self) -> &'static str;

    /// Lower priorities are registered first.
    fn priority(&self) -> i32;

    fn routes(&self) -> Router<AppState>;
}

/// Ordered collection of route providers.
#[derive(Default)]
pub struct ModuleRegistry {
    providers: Vec<Box<dyn RouteProvider>>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a provider, keeping the list sorted by ascending priority.
    ///
    /// Providers with equal priority keep the order they were registered in.
    ///
    /// # Returns
    /// - `Ok(())` - Provider registered
    /// - `Err(InternalError::DuplicateModule)` - A provider with the same name exists
    pub fn register<P>(&mut self, provider: P) -> Result<(), InternalError>
    where
        P: RouteProvider + 'static,
    {
        if self
            .providers
            .iter()
            .any(|existing| existing.name() == provider.name())
        {
            return Err(InternalError::DuplicateModule(provider.name().to_string()));
        }

        let position = self
            .providers
            .partition_point(|existing| existing.priority() <= provider.priority());
        self.providers.insert(position, Box::new(provider));

        Ok(())
    }

    /// Module names in registration order.
    pub fn module_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|provider| provider.name()).collect()
    }

    /// Merges every provider's routes in registration order.
    pub fn into_router(self) -> Router<AppState> {
        self.providers
            .iter()
            .fold(Router::new(), |router, provider| {
                tracing::debug!(
                    "Registering module {} (priority {})",
                    provider.name(),
                    provider.priority()
                );
                router.merge(provider.routes())
            })
    }
}
