//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Who a link belongs to.
///
/// `Anonymous` is an explicit marker rather than a missing value: lookups for
/// anonymous links match only other anonymous links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOwner {
    Anonymous,
    User(Uuid),
}

impl LinkOwner {
    /// Normalizes an optional user id into an owner.
    pub fn from_user_id(user_id: Option<Uuid>) -> Self {
        match user_id {
            Some(id) => Self::User(id),
            None => Self::Anonymous,
        }
    }

    /// Returns the user id stored in the `owner_id` column, if any.
    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            Self::Anonymous => None,
            Self::User(id) => Some(*id),
        }
    }
}

/// A shortened URL with ownership and click metadata.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: Uuid,
    pub original_url: String,
    pub code: String,
    pub clicks: i64,
    pub owner_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Link {
    /// Returns true if `user_id` owns this link. Anonymous links have no owner.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == Some(user_id)
    }

    /// Returns true if the link has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Input data for creating a new link. Click count always starts at zero.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub original_url: String,
    pub owner: LinkOwner,
}
