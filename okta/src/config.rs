use hyper::header::HeaderValue;
use std::env;
use url::Url;

use crate::error::Error;

pub const API_KEY_ENV: &str = "OKTA_API_KEY";
pub const BASE_URL_ENV: &str = "OKTA_BASE_URL";

#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) base_url: Url,
    pub(crate) authorization: HeaderValue,
}

impl Config {
    /// `base_url` is the API root, e.g. `https://example.okta.com/api/v1/`.
    pub fn new(api_key: &str, base_url: &str) -> Result<Self, Error> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let mut authorization = HeaderValue::from_str(&format!("SSWS {}", api_key))?;
        authorization.set_sensitive(true);
        Ok(Self {
            base_url,
            authorization,
        })
    }

    pub fn from_env() -> Result<Self, Error> {
        let api_key = env::var(API_KEY_ENV).map_err(|_| Error::MissingEnv(API_KEY_ENV))?;
        let base_url = env::var(BASE_URL_ENV).map_err(|_| Error::MissingEnv(BASE_URL_ENV))?;
        Self::new(&api_key, &base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn url_for(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }
}
