//! Authentication middleware
//!
//! The admin allow-list is static configuration: identifiers listed in
//! `bot.admin_ids` get routing/broadcast/schedule privileges and bypass the
//! spam guard. There is no other authorization concept.

use std::collections::HashSet;

/// Static admin allow-list
#[derive(Debug, Clone)]
pub struct AuthMiddleware {
    admin_ids: HashSet<i64>,
}

impl AuthMiddleware {
    /// Create a new AuthMiddleware instance
    pub fn new(admin_ids: &[i64]) -> Self {
        Self {
            admin_ids: admin_ids.iter().copied().collect(),
        }
    }

    /// Check if user is an admin
    pub fn is_admin(&self, user_id: i64) -> bool {
        self.admin_ids.contains(&user_id)
    }

    /// Get list of admin IDs
    pub fn admin_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.admin_ids.iter().copied()
    }
}
