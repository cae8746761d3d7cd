use hyper::Method;
use serde::de::DeserializeOwned;

use crate::{ratelimit::RateLimitCategory, response::Response, Client, Result};

impl Client {
    /// Drains a paginated list endpoint starting at `path`, following `next`
    /// links until the server stops handing them out.
    ///
    /// Items keep server order across pages. The first failing page aborts the
    /// whole drain and nothing collected so far is returned.
    pub(crate) async fn list_paginated<T: DeserializeOwned>(
        &self,
        path: String,
        category: RateLimitCategory,
    ) -> Result<(Vec<T>, Response)> {
        let mut acc = Vec::new();
        let mut path = path;
        let mut pages = 0_usize;
        loop {
            let req = self.new_request::<()>(Method::GET, &path, None)?;
            let (page, response) = self.execute::<Vec<T>>(req, category).await?;
            pages += 1;
            tracing::trace!(page = pages, items = page.len(), "Decoded page");
            acc.extend(page);

            match response.pagination.next.clone() {
                Some(next) => path = next,
                None => {
                    tracing::debug!(pages, items = acc.len(), "Finished paginated listing");
                    return Ok((acc, response));
                }
            }
        }
    }
}
