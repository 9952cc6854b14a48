//! Token-keyed list loading with stale-response discard.
//!
//! DESIGN
//! ======
//! Each load is stamped with a generation. Starting a new load (or resetting)
//! bumps the generation, so a response that resolves after a newer load began
//! is recognized as stale and dropped instead of overwriting fresher data.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

/// Handle for one in-flight list load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    token: String,
}

impl LoadTicket {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

#[derive(Clone, Debug, Default)]
pub struct CarListLoader {
    generation: u64,
    token: Option<String>,
}

impl CarListLoader {
    /// Start a load for `token` unless one was already started for it.
    pub fn begin(&mut self, token: &str) -> Option<LoadTicket> {
        if self.token.as_deref() == Some(token) {
            return None;
        }
        Some(self.restart(token))
    }

    /// Start a load for `token` unconditionally.
    pub fn restart(&mut self, token: &str) -> LoadTicket {
        self.generation += 1;
        self.token = Some(token.to_owned());
        LoadTicket { generation: self.generation, token: token.to_owned() }
    }

    /// Whether a completed load is still the newest one.
    #[must_use]
    pub fn accepts(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation && self.token.as_deref() == Some(ticket.token.as_str())
    }

    /// Forget the current token and invalidate every outstanding ticket.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.token = None;
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
