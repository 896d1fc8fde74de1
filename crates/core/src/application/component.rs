// Webform component lifecycle service

use crate::application::events::{EventBus, LifecycleEvent};
use crate::domain::{ComponentId, NewComponent, NodeId, WebformComponent};
use crate::error::Result;
use crate::port::ComponentRepository;
use std::sync::Arc;
use tracing::{info, warn};

pub struct ComponentService {
    component_repo: Arc<dyn ComponentRepository>,
    events: Arc<EventBus>,
}

impl ComponentService {
    pub fn new(component_repo: Arc<dyn ComponentRepository>, events: Arc<EventBus>) -> Self {
        Self {
            component_repo,
            events,
        }
    }

    pub async fn insert(&self, component: NewComponent) -> Result<ComponentId> {
        component.validate()?;
        let cid = self.component_repo.insert(&component).await?;

        info!(
            nid = component.nid,
            cid = cid,
            form_key = %component.form_key,
            component_type = %component.component_type,
            "Webform component created"
        );
        Ok(cid)
    }

    pub async fn get(&self, nid: NodeId, cid: ComponentId) -> Result<Option<WebformComponent>> {
        self.component_repo.find(nid, cid).await
    }

    /// Delete a component and notify subscribers.
    ///
    /// Queue entries key on cid alone, so the event is only published once
    /// no node holds that cid anymore. A delete under the wrong node leaves
    /// the live component's entries alone.
    pub async fn delete(&self, nid: NodeId, cid: ComponentId) -> Result<bool> {
        let existed = self.component_repo.delete(nid, cid).await?;
        info!(nid = nid, cid = cid, existed = existed, "Webform component deleted");

        if !existed && self.component_repo.cid_in_use(cid).await? {
            warn!(nid = nid, cid = cid, "Component lives under another node, not cascading");
            return Ok(false);
        }

        self.events
            .publish(LifecycleEvent::ComponentDeleted { nid, cid })
            .await?;
        Ok(existed)
    }
}
