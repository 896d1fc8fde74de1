// Queue Domain Model

use super::component::ComponentId;
use super::error::{DomainError, Result};
use super::payment::PaymentId;
use serde::{Deserialize, Serialize};

/// Association between a webform component and a payment awaiting use.
///
/// The entry owns neither side. It must be removed when either the payment
/// or the component is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub cid: ComponentId,
    pub pid: PaymentId,
    pub queued_at: i64, // epoch ms
}

impl QueueEntry {
    /// Build a validated entry. Both identifiers must be positive.
    pub fn new(cid: ComponentId, pid: PaymentId, queued_at: i64) -> Result<Self> {
        validate_id("cid", cid)?;
        validate_id("pid", pid)?;
        Ok(Self {
            cid,
            pid,
            queued_at,
        })
    }
}

pub(crate) fn validate_id(field: &'static str, value: i64) -> Result<()> {
    if value <= 0 {
        return Err(DomainError::InvalidId { field, value });
    }
    Ok(())
}
