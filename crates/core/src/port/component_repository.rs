// Webform Component Repository Port (Interface)

use crate::domain::{ComponentId, NewComponent, NodeId, WebformComponent};
use crate::error::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ComponentRepository: Send + Sync {
    /// Insert a component and return its allocated cid
    async fn insert(&self, component: &NewComponent) -> Result<ComponentId>;

    async fn find(&self, nid: NodeId, cid: ComponentId) -> Result<Option<WebformComponent>>;

    /// Returns false if the component did not exist
    async fn delete(&self, nid: NodeId, cid: ComponentId) -> Result<bool>;

    /// Whether any node still has a component with this cid
    async fn cid_in_use(&self, cid: ComponentId) -> Result<bool>;
}
