//! Account link entity resolved by the identity store.

/// Mapping between a carrier msisdn, an external shared id, and the owning
/// internal user. Resolved read-only from persistence; never mutated here.
#[derive(Debug, Clone)]
pub struct AccountLink {
    pub id: i64,
    pub msisdn: String,
    /// Stable external identifier. Nullable in storage: links created from
    /// carrier feeds may not carry one yet.
    pub unique_shared_id: Option<String>,
    pub user_id: String,
}

impl AccountLink {
    pub fn new(id: i64, msisdn: String, unique_shared_id: Option<String>, user_id: String) -> Self {
        Self {
            id,
            msisdn,
            unique_shared_id,
            user_id,
        }
    }

    /// Returns the shared id only when it is present and non-blank.
    pub fn effective_shared_id(&self) -> Option<&str> {
        self.unique_shared_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
    }
}
