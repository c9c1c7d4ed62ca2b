//! Test-only, in-memory implementations of the collaborator traits used by
//! unit and behaviour tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    IdentityError, IdentityResolver, InteractionEvent, InteractionStore, NearbyQuery, PlacePage,
    PlacesProvider, ProviderError, StoreError, UserId,
};

/// Provider that returns a fixed page and records every query it receives.
#[derive(Debug, Default)]
pub struct StaticPlacesProvider {
    page: PlacePage,
    seen: Mutex<Vec<NearbyQuery>>,
}

impl StaticPlacesProvider {
    /// Create a provider that always answers with `page`.
    #[must_use]
    pub fn new(page: PlacePage) -> Self {
        Self {
            page,
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Queries received so far, in call order.
    #[must_use]
    pub fn seen_queries(&self) -> Vec<NearbyQuery> {
        self.seen.lock().expect("query log poisoned").clone()
    }
}

#[async_trait]
impl PlacesProvider for StaticPlacesProvider {
    async fn search_nearby(&self, query: &NearbyQuery) -> Result<PlacePage, ProviderError> {
        self.seen.lock().expect("query log poisoned").push(query.clone());
        Ok(self.page.clone())
    }
}

/// Provider whose every call fails with a fetch error.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingPlacesProvider;

#[async_trait]
impl PlacesProvider for FailingPlacesProvider {
    async fn search_nearby(&self, _query: &NearbyQuery) -> Result<PlacePage, ProviderError> {
        Err(ProviderError::Fetch {
            message: "upstream offline".into(),
        })
    }
}

/// In-memory interaction log keyed by user id.
#[derive(Debug, Default)]
pub struct MemoryInteractionStore {
    events: HashMap<String, Vec<InteractionEvent>>,
}

impl MemoryInteractionStore {
    /// Create a store holding `events` for a single user.
    #[must_use]
    pub fn with_events(user: &str, events: Vec<InteractionEvent>) -> Self {
        Self {
            events: HashMap::from([(user.to_owned(), events)]),
        }
    }
}

#[async_trait]
impl InteractionStore for MemoryInteractionStore {
    async fn events_for_user(
        &self,
        user: &UserId,
    ) -> Result<Vec<InteractionEvent>, StoreError> {
        Ok(self.events.get(user.as_str()).cloned().unwrap_or_default())
    }
}

/// Store whose every read fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingInteractionStore;

#[async_trait]
impl InteractionStore for FailingInteractionStore {
    async fn events_for_user(
        &self,
        _user: &UserId,
    ) -> Result<Vec<InteractionEvent>, StoreError> {
        Err(StoreError::Unavailable {
            message: "log store offline".into(),
        })
    }
}

/// Resolver that ignores the credential and returns a fixed identity.
#[derive(Debug, Default)]
pub struct StaticIdentityResolver {
    identity: Option<UserId>,
}

impl StaticIdentityResolver {
    /// Create a resolver that always answers with `identity`.
    #[must_use]
    pub fn new(identity: Option<UserId>) -> Self {
        Self { identity }
    }
}

#[async_trait]
impl IdentityResolver for StaticIdentityResolver {
    async fn resolve(&self, _credential: &str) -> Result<Option<UserId>, IdentityError> {
        Ok(self.identity.clone())
    }
}

/// Resolver whose every call rejects the credential.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingIdentityResolver;

#[async_trait]
impl IdentityResolver for FailingIdentityResolver {
    async fn resolve(&self, _credential: &str) -> Result<Option<UserId>, IdentityError> {
        Err(IdentityError::Rejected {
            message: "credential expired".into(),
        })
    }
}
