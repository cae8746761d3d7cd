#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::missing_errors_doc,
    clippy::must_use_candidate
)]

//! Typed client for the Okta users and groups APIs.
//!
//! ```no_run
//! # async fn run() -> Result<(), okta::Error> {
//! let client = okta::Client::new(okta::Config::from_env()?);
//! let (groups, _) = client.groups().list_filter(r#"type eq "BUILT_IN""#).await?;
//! for group in groups {
//!     let (members, _) = client.groups().list_members(&group.id).await?;
//!     println!("{:?}: {} members", group.profile.name, members.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod groups;
pub mod models;
pub mod ratelimit;
pub mod response;
pub mod route;
pub mod users;

mod pagination;

use hyper::{
    body::{self, Buf},
    client::HttpConnector,
    header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE},
    Body, Client as HyperClient, Method, Request,
};
use hyper_rustls::HttpsConnector;
use serde::{de::DeserializeOwned, Serialize};
use std::{result::Result as StdResult, sync::Arc};

pub use config::Config;
pub use error::{ApiErrorBody, Error};
pub use groups::GroupsService;
pub use ratelimit::{Rate, RateLimitCategory};
pub use response::{Pagination, Response};
pub use users::UsersService;

type Result<T> = StdResult<T, Error>;

#[derive(Clone)]
pub struct Client {
    client: HyperClient<HttpsConnector<HttpConnector>>,
    config: Arc<Config>,
}

impl Client {
    pub fn new(config: Config) -> Self {
        let connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .enable_http2()
            .build();
        let client = HyperClient::builder().build(connector);
        Self {
            client,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn groups(&self) -> GroupsService<'_> {
        GroupsService::new(self)
    }

    pub fn users(&self) -> UsersService<'_> {
        UsersService::new(self)
    }

    /// Builds a request for `path`, which is either relative to the base URL
    /// or an absolute link handed out by the server.
    pub fn new_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Request<Body>> {
        let url = self.config.url_for(path)?;
        let builder = Request::builder()
            .uri(url.as_str())
            .method(method)
            .header(AUTHORIZATION, self.config.authorization.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        let req = if let Some(body) = body {
            let bytes = serde_json::to_vec(body)?;
            let len = bytes.len();
            builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .header(CONTENT_LENGTH, len)
                .body(Body::from(bytes))?
        } else {
            builder.body(Body::empty())?
        };
        Ok(req)
    }

    /// Sends `req` and decodes the response body into `T`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        req: Request<Body>,
        category: RateLimitCategory,
    ) -> Result<(T, Response)> {
        let (bytes, response) = self.send(req, category).await?;
        let result = serde_json::from_slice(&bytes)?;
        Ok((result, response))
    }

    /// Sends `req` for its status and headers only.
    pub async fn execute_empty(
        &self,
        req: Request<Body>,
        category: RateLimitCategory,
    ) -> Result<Response> {
        let (_, response) = self.send(req, category).await?;
        Ok(response)
    }

    async fn send(
        &self,
        req: Request<Body>,
        category: RateLimitCategory,
    ) -> Result<(Vec<u8>, Response)> {
        tracing::debug!(
            method = %req.method(),
            url = %req.uri(),
            category = category.as_str(),
            "Sending request"
        );
        let res = self.client.request(req).await?;

        let response = Response::new(res.status(), res.headers(), category);

        let mut buf = body::aggregate(res.into_body()).await?;
        let mut bytes = vec![0; buf.remaining()];
        buf.copy_to_slice(&mut bytes);

        if !response.status.is_success() {
            let error = serde_json::from_slice::<ApiErrorBody>(&bytes).ok();
            tracing::warn!(
                status = %response.status,
                error_code = error.as_ref().map(|e| e.error_code.as_str()),
                category = category.as_str(),
                "API returned an error"
            );
            return Err(Error::APIError(response, error));
        }

        Ok((bytes, response))
    }
}
