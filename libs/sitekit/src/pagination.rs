//! Limit/offset pagination for list endpoints

use serde::Deserialize;

/// Default page size when the client sends none
pub const DEFAULT_LIMIT: u64 = 50;

/// Upper bound on page size
pub const MAX_LIMIT: u64 = 200;

/// Common `?limit=&offset=` query parameters
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl PageQuery {
    /// Resolve to effective `(limit, offset)`, clamping the limit into `1..=MAX_LIMIT`
    pub fn clamp(self) -> (u64, u64) {
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        (limit, self.offset.unwrap_or(0))
    }
}
