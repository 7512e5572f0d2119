//! Authenticated JSON fetches and the per-site stale-response guard.

use contracts::system::access::{RequestGeneration, Ticket};
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use super::api_utils::{api_url, with_tenant};
use crate::system::auth::context::use_tenant;
use crate::system::auth::storage;

fn auth_header() -> Option<String> {
    storage::get_access_token().map(|token| format!("Bearer {}", token))
}

/// GET `path` and hand back the raw JSON body; envelope handling is left to
/// the caller's mapper.
pub async fn fetch_json(path: &str) -> Result<Value, String> {
    let auth_header = auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&api_url(path))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// [`RequestGeneration`] owned by one component.
#[derive(Clone, Copy)]
pub struct LatestRequest {
    generation: StoredValue<RequestGeneration>,
}

impl LatestRequest {
    pub fn new() -> Self {
        Self {
            generation: StoredValue::new(RequestGeneration::new()),
        }
    }

    pub fn begin(&self) -> Ticket {
        let mut generation = self.generation.get_value();
        let ticket = generation.begin();
        self.generation.set_value(generation);
        ticket
    }

    pub fn invalidate(&self) {
        let mut generation = self.generation.get_value();
        generation.invalidate();
        self.generation.set_value(generation);
    }

    pub fn accept<T>(&self, ticket: Ticket, value: T) -> Option<T> {
        self.generation.get_value().accept(ticket, value)
    }
}

impl Default for LatestRequest {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub is_loaded: bool,
    pub error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loaded: false,
            error: None,
        }
    }
}

/// Fetch `path`, map it with `mapper` and store the result in `state`,
/// unless a newer load from the same site has started meanwhile.
///
/// A failed request leaves an empty list plus the error text.
pub fn load_list<T>(
    path: String,
    mapper: fn(&Value) -> Vec<T>,
    state: RwSignal<ListState<T>>,
    latest: LatestRequest,
) where
    T: Clone + Send + Sync + 'static,
{
    let ticket = latest.begin();
    state.update(|s| s.error = None);

    spawn_local(async move {
        let result = fetch_json(&path).await;
        let Some(result) = latest.accept(ticket, result) else {
            return;
        };
        match result {
            Ok(response) => {
                let items = mapper(&response);
                log::debug!("{} -> {} records", path, items.len());
                state.set(ListState {
                    items,
                    is_loaded: true,
                    error: None,
                });
            }
            Err(e) => {
                log::warn!("{}: {}", path, e);
                state.set(ListState {
                    items: Vec::new(),
                    is_loaded: true,
                    error: Some(e),
                });
            }
        }
    });
}

/// List state for `path`, scoped to the session tenant and reloaded whenever
/// the tenant changes.
pub fn use_tenant_list<T>(path: &'static str, mapper: fn(&Value) -> Vec<T>) -> RwSignal<ListState<T>>
where
    T: Clone + Send + Sync + 'static,
{
    let tenant = use_tenant();
    let state = RwSignal::new(ListState::default());
    let latest = LatestRequest::new();

    Effect::new(move |_| {
        let tenant_id = tenant.get();
        load_list(with_tenant(path, tenant_id.as_deref()), mapper, state, latest);
    });

    state
}
