//! Resilient resource client.

use crate::backend::Backend;
use crate::error::Result;
use crate::operation::{Operation, Outcome};
use crate::remote::RemoteApi;
use crate::types::{ClientConfig, Mode, ProbePolicy};
use postboard_core::Post;
use postboard_store::{FallbackStore, Stored};
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, warn};

/// CRUD client for one collection that falls back to the in-memory store
/// whenever the remote API is unreachable.
///
/// Every public operation runs in two steps: [`probe`](Self::probe) picks a
/// [`Mode`], then [`dispatch`](Self::dispatch) runs the operation against the
/// matching backend. Remote and fallback data are never mixed within a call.
///
/// # Example
///
/// ```ignore
/// use postboard_client::{ClientConfig, ResourceClient};
/// use postboard_core::{NewUser, User};
/// use postboard_store::FallbackStore;
///
/// let users: ResourceClient<User> =
///     ResourceClient::new(ClientConfig::default(), FallbackStore::new())?;
///
/// let created = users.create(NewUser::new("A", "a", "a@x.com")).await?;
/// println!("Created user {}", created.id);
/// ```
pub struct ResourceClient<R> {
    remote: RemoteApi,
    store: FallbackStore,
    probe_timeout: Duration,
    fallback_latency: Duration,
    probe_policy: ProbePolicy,
    last_probe: Arc<RwLock<Option<(Mode, Instant)>>>,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            remote: self.remote.clone(),
            store: self.store.clone(),
            probe_timeout: self.probe_timeout,
            fallback_latency: self.fallback_latency,
            probe_policy: self.probe_policy,
            last_probe: Arc::clone(&self.last_probe),
            _resource: PhantomData,
        }
    }
}

impl<R: Stored> ResourceClient<R> {
    /// Create a client for `R`'s collection backed by `store` when offline.
    pub fn new(config: ClientConfig, store: FallbackStore) -> Result<Self> {
        let remote = RemoteApi::new(&config)?;
        Ok(Self::from_parts(remote, store, &config))
    }

    pub(crate) fn from_parts(
        remote: RemoteApi,
        store: FallbackStore,
        config: &ClientConfig,
    ) -> Self {
        Self {
            remote,
            store,
            probe_timeout: config.probe_timeout,
            fallback_latency: config.fallback_latency,
            probe_policy: config.probe_policy,
            last_probe: Arc::new(RwLock::new(None)),
            _resource: PhantomData,
        }
    }

    /// The fallback store this client routes to when offline.
    pub fn store(&self) -> &FallbackStore {
        &self.store
    }

    /// Normalized base URL of the remote API.
    pub fn base_url(&self) -> &str {
        self.remote.base_url()
    }

    /// Decide where the next operation goes.
    ///
    /// Never fails: an unreachable API (timeout, network error, non-2xx)
    /// yields [`Mode::Fallback`].
    pub async fn probe(&self) -> Mode {
        if let ProbePolicy::Sticky { reprobe_interval } = self.probe_policy {
            if let Some((mode, probed_at)) = *self.last_probe.read().await {
                if probed_at.elapsed() < reprobe_interval {
                    debug!(resource = %R::KIND, mode = %mode, "Reusing previous probe result");
                    return mode;
                }
            }
        }

        let mode = match self.remote.probe(R::KIND, self.probe_timeout).await {
            Ok(()) => Mode::Live,
            Err(reason) => {
                warn!(
                    resource = %R::KIND,
                    reason = %reason,
                    "Remote API unreachable, using fallback store"
                );
                Mode::Fallback
            }
        };

        if matches!(self.probe_policy, ProbePolicy::Sticky { .. }) {
            *self.last_probe.write().await = Some((mode, Instant::now()));
        }

        mode
    }

    /// Run `operation` against the backend selected by `mode`.
    ///
    /// Fallback dispatch waits for the configured latency first. Failures
    /// propagate unchanged; there is no retry and no switch to the other
    /// backend.
    pub async fn dispatch(&self, mode: Mode, operation: Operation<R>) -> Result<Outcome<R>> {
        debug!(
            resource = %R::KIND,
            operation = operation.name(),
            mode = %mode,
            "Dispatching operation"
        );

        let backend: &dyn Backend<R> = match mode {
            Mode::Live => &self.remote,
            Mode::Fallback => {
                if !self.fallback_latency.is_zero() {
                    tokio::time::sleep(self.fallback_latency).await;
                }
                &self.store
            }
        };

        operation.run(backend).await
    }

    /// Probe, then dispatch.
    pub async fn execute(&self, operation: Operation<R>) -> Result<Outcome<R>> {
        let mode = self.probe().await;
        self.dispatch(mode, operation).await
    }

    /// Every entity of the collection.
    pub async fn get_all(&self) -> Result<Vec<R>> {
        self.execute(Operation::GetAll).await?.into_many()
    }

    /// One entity by id; `NotFound` if the active backend has no such id.
    pub async fn get_by_id(&self, id: i64) -> Result<R> {
        self.execute(Operation::GetById(id)).await?.into_one()
    }

    /// Create an entity; the backend assigns its id.
    pub async fn create(&self, data: R::New) -> Result<R> {
        self.execute(Operation::Create(data)).await?.into_one()
    }

    /// Merge a partial update over an existing entity.
    pub async fn update(&self, id: i64, patch: R::Patch) -> Result<R> {
        self.execute(Operation::Update(id, patch)).await?.into_one()
    }

    /// Remove an entity. Absent ids are not an error.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.execute(Operation::Delete(id)).await?.into_deleted()
    }
}

impl ResourceClient<Post> {
    /// Posts written by `user_id`, possibly none.
    pub async fn get_by_user_id(&self, user_id: i64) -> Result<Vec<Post>> {
        self.execute(Operation::GetByUserId(user_id))
            .await?
            .into_many()
    }
}
