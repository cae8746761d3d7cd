use hyper::{header::LINK, HeaderMap, StatusCode};

use crate::ratelimit::{Rate, RateLimitCategory};

/// Metadata of the last response an operation received.
#[derive(Clone, Debug)]
pub struct Response {
    pub status: StatusCode,
    pub pagination: Pagination,
    pub rate: Option<Rate>,
    pub category: RateLimitCategory,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Absolute link to the next page, `None` on the last page.
    pub next: Option<String>,
}

impl Response {
    pub(crate) fn new(
        status: StatusCode,
        headers: &HeaderMap,
        category: RateLimitCategory,
    ) -> Self {
        Self {
            status,
            pagination: Pagination::from_headers(headers),
            rate: Rate::from_headers(headers),
            category,
        }
    }
}

impl Pagination {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let next = headers
            .get_all(LINK)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find_map(next_link);
        Self { next }
    }
}

// `<https://host/api/v1/groups?after=x>; rel="next", <...>; rel="self"`
//
// Targets may contain commas, so entries are only split on commas that
// follow a closing `>`.
fn next_link(value: &str) -> Option<String> {
    let mut rest = value;
    loop {
        let open = rest.find('<')?;
        let close = open + rest[open..].find('>')?;
        let target = &rest[open + 1..close];
        let after = &rest[close + 1..];
        let (params, tail) = after.split_once(',').unwrap_or((after, ""));
        if !target.is_empty() && is_next(params) {
            return Some(target.to_owned());
        }
        rest = tail;
    }
}

fn is_next(params: &str) -> bool {
    params.split(';').any(|param| {
        let mut kv = param.splitn(2, '=');
        let key = kv.next().map(str::trim);
        let value = kv.next().map(|v| v.trim().trim_matches('"'));
        key == Some("rel") && value.is_some_and(|v| v.split_whitespace().any(|r| r == "next"))
    })
}
