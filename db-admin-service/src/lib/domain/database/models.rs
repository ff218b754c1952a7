use std::fmt;
use std::time::Duration;

/// Databases the server creates for itself: the maintenance database and the templates.
pub const SYSTEM_DATABASES: [&str; 3] = ["postgres", "template0", "template1"];

/// Name of a database hosted by the server.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DatabaseName(String);

impl DatabaseName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn is_system(&self) -> bool {
        SYSTEM_DATABASES.contains(&self.0.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatabaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Outcome of a successful connection check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionStatus {
    /// Round trip of the ping
    pub latency: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_databases() {
        assert!(DatabaseName::new("postgres").is_system());
        assert!(DatabaseName::new("template0").is_system());
        assert!(DatabaseName::new("template1").is_system());
        assert!(!DatabaseName::new("auth").is_system());
        assert!(!DatabaseName::new("Postgres").is_system());
    }
}
