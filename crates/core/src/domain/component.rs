// Webform Component Domain Model

use super::error::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// Webform component identifier
pub type ComponentId = i64;

/// Node identifier (the webform a component belongs to)
pub type NodeId = i64;

/// Component type that collects a payment
pub const PAYMENT_COMPONENT_TYPE: &str = "payment_webform";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebformComponent {
    pub nid: NodeId,
    pub cid: ComponentId,
    pub form_key: String,
    pub name: String,
    pub component_type: String,
    pub mandatory: bool,
    pub weight: i32,
}

/// Component to be inserted; `cid` is allocated by storage.
#[derive(Debug, Clone)]
pub struct NewComponent {
    pub nid: NodeId,
    pub form_key: String,
    pub name: String,
    pub component_type: String,
    pub mandatory: bool,
    pub weight: i32,
}

impl NewComponent {
    /// Payment component with the given key, used as both key and label.
    pub fn payment(nid: NodeId, form_key: impl Into<String>) -> Self {
        let form_key = form_key.into();
        Self {
            nid,
            name: form_key.clone(),
            form_key,
            component_type: PAYMENT_COMPONENT_TYPE.to_string(),
            mandatory: true,
            weight: 0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        super::queue::validate_id("nid", self.nid)?;
        if self.form_key.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "form_key cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_component_defaults() {
        let c = NewComponent::payment(7, "foo");
        assert_eq!(c.name, "foo");
        assert_eq!(c.component_type, PAYMENT_COMPONENT_TYPE);
        assert!(c.mandatory);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_key_and_bad_node() {
        assert!(NewComponent::payment(7, "  ").validate().is_err());
        assert!(NewComponent::payment(0, "foo").validate().is_err());
    }
}
