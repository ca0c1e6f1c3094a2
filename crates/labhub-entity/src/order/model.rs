//! Purchase order attachment entity model.
//!
//! Order records themselves are owned by the orders application; the
//! authorization layer only reads their attachments.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A document attached to a purchase order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderFile {
    /// Unique file identifier.
    pub id: Uuid,
    /// The order this file belongs to.
    pub order_id: Uuid,
    /// Media path of the stored attachment.
    pub path: String,
    /// The user who uploaded the attachment.
    pub created_by: Uuid,
}
