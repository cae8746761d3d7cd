use hyper::Method;
use serde_json::value::RawValue;

use crate::{
    models::{id::UserId, user::User, ProfileBody},
    ratelimit::RateLimitCategory,
    response::Response,
    route::Route,
    Client, Result,
};

const USERS_PAGE_LIMIT: u32 = 200;
const USERS_FILTER_PAGE_LIMIT: u32 = 100;

/// Operations on the `users` collection.
#[derive(Clone, Copy)]
pub struct UsersService<'a> {
    client: &'a Client,
}

impl<'a> UsersService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn get_by_id(&self, id: &UserId) -> Result<(User, Response)> {
        let path = Route::User { user_id: id }.to_string();
        let req = self.client.new_request::<()>(Method::GET, &path, None)?;
        self.client
            .execute(req, RateLimitCategory::UsersGetById)
            .await
    }

    /// Partial profile update. `profile` is sent verbatim and merged with the
    /// existing profile by the server.
    pub async fn update_profile_delta(
        &self,
        id: &UserId,
        profile: &RawValue,
    ) -> Result<(User, Response)> {
        let path = Route::User { user_id: id }.to_string();
        let body = ProfileBody { profile };
        let req = self.client.new_request(Method::POST, &path, Some(&body))?;
        self.client
            .execute(req, RateLimitCategory::UsersCreateUpdateDeleteById)
            .await
    }

    pub async fn list(&self) -> Result<(Vec<User>, Response)> {
        let path = Route::UsersList {
            limit: USERS_PAGE_LIMIT,
        }
        .to_string();
        self.client
            .list_paginated(path, RateLimitCategory::Core)
            .await
    }

    pub async fn list_filter(&self, filter: &str) -> Result<(Vec<User>, Response)> {
        let path = Route::UsersFilter {
            limit: USERS_FILTER_PAGE_LIMIT,
            filter,
        }
        .to_string();
        // Filtered user listings are charged to the groups create/list bucket.
        self.client
            .list_paginated(path, RateLimitCategory::GroupsCreateList)
            .await
    }
}
