//! Feed controller with dependency injection
//!
//! Owns the view state of one feed and drives exactly one fetch cycle per
//! mount. Results that arrive after the mount they belong to has been torn
//! down are dropped.

use shared::{component_info, component_warn, logging, ComponentId, MountId};

use crate::core::{fetch_collections, ViewState};
use crate::error::{FeedError, FeedResult};
use crate::state::{create_shared_state, SharedFeedState};
use crate::traits::ResourceSource;
use crate::types::FeedConfig;

/// Feed with an injected resource source
pub struct Feed<S>
where
    S: ResourceSource,
{
    config: FeedConfig,
    source: S,
    state: SharedFeedState,
}

impl<S> Feed<S>
where
    S: ResourceSource,
{
    /// Create an unmounted feed
    pub fn new(config: FeedConfig, source: S) -> Self {
        Self {
            config,
            source,
            state: create_shared_state(),
        }
    }

    /// Mount the feed and run its single fetch cycle
    ///
    /// Returns once the view has left `Loading` (or the mount was torn down
    /// meanwhile). A fetch failure is not an `Err` here: it lands in the view
    /// as `ViewState::Error`. Mounting an already mounted feed is rejected.
    pub async fn mount(&self) -> FeedResult<MountId> {
        let component = ComponentId::current();

        let mount_id = {
            let mut state = self.state.write().await;
            if let Some(existing) = state.mount_id {
                return Err(FeedError::AlreadyMounted { mount_id: existing });
            }
            let mount_id = MountId::new();
            state.mount_id = Some(mount_id);
            state.view = ViewState::Loading;
            mount_id
        };

        component_info!(
            component,
            mount = %mount_id,
            variant = %self.config.variant,
            "📋 Mounted feed, fetching {} resource(s)",
            self.config.variant.resources().len()
        );

        if !self.config.startup_delay.is_zero() {
            tokio::time::sleep(self.config.startup_delay).await;
        }

        let outcome = fetch_collections(&self.source, self.config.variant).await;
        if let Err(error) = &outcome {
            logging::log_error(component, "Feed fetch", error);
        }

        let mut state = self.state.write().await;
        if state.mount_id != Some(mount_id) {
            component_warn!(component, mount = %mount_id, "Discarding fetch result for a torn-down mount");
            return Ok(mount_id);
        }

        if state.view.settle(outcome) {
            component_info!(component, mount = %mount_id, phase = %state.view.phase(), "Feed settled");
        }

        Ok(mount_id)
    }

    /// Tear down the current mount; the next `mount` starts from `Loading`
    pub async fn unmount(&self) {
        let mut state = self.state.write().await;
        if let Some(mount_id) = state.mount_id.take() {
            component_info!(ComponentId::current(), mount = %mount_id, "Unmounted feed");
        }
        state.view = ViewState::Loading;
    }

    pub async fn is_mounted(&self) -> bool {
        self.state.read().await.is_mounted()
    }

    /// Snapshot of the current view state
    pub async fn view(&self) -> ViewState {
        self.state.read().await.view.clone()
    }
}
