use chrono::{DateTime, Utc};
use hyper::HeaderMap;

const LIMIT_HEADER: &str = "x-rate-limit-limit";
const REMAINING_HEADER: &str = "x-rate-limit-remaining";
const RESET_HEADER: &str = "x-rate-limit-reset";

/// Server-side quota bucket a request is charged against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RateLimitCategory {
    Core,
    GroupsGetUpdateDelete,
    GroupsCreateList,
    UsersGetById,
    UsersCreateUpdateDeleteById,
}

impl RateLimitCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            RateLimitCategory::Core => "core",
            RateLimitCategory::GroupsGetUpdateDelete => "groups_get_update_delete",
            RateLimitCategory::GroupsCreateList => "groups_create_list",
            RateLimitCategory::UsersGetById => "users_get_by_id",
            RateLimitCategory::UsersCreateUpdateDeleteById => "users_create_update_delete_by_id",
        }
    }
}

/// Quota state reported by the server on a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rate {
    pub limit: u64,
    pub remaining: u64,
    pub reset: DateTime<Utc>,
}

impl Rate {
    /// Returns `None` unless all three quota headers are present and valid.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let number = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok())
        };
        let reset = i64::try_from(number(RESET_HEADER)?).ok()?;
        Some(Self {
            limit: number(LIMIT_HEADER)?,
            remaining: number(REMAINING_HEADER)?,
            reset: DateTime::from_timestamp(reset, 0)?,
        })
    }
}
