use std::fmt;

/// Identifies one session instance.
///
/// Async continuations carry the id they were spawned for; a result whose id
/// differs from the active session is stale and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(u64);

impl SessionId {
    pub fn first() -> Self {
        SessionId(1)
    }

    pub fn next(self) -> Self {
        SessionId(self.0 + 1)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

/// Format seconds as zero-padded `mm:ss`. Minutes keep growing past 99.
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
