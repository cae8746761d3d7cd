use hyper::Method;

use crate::{
    models::{
        group::{Group, GroupProfile},
        id::GroupId,
        user::User,
        ProfileBody,
    },
    ratelimit::RateLimitCategory,
    response::Response,
    route::Route,
    Client, Result,
};

const GROUPS_PAGE_LIMIT: u32 = 100;
const MEMBERS_PAGE_LIMIT: u32 = 200;

/// Operations on the `groups` collection.
#[derive(Clone, Copy)]
pub struct GroupsService<'a> {
    client: &'a Client,
}

impl<'a> GroupsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn get_by_id(&self, id: &GroupId) -> Result<(Group, Response)> {
        let path = Route::Group { group_id: id }.to_string();
        let req = self.client.new_request::<()>(Method::GET, &path, None)?;
        self.client
            .execute(req, RateLimitCategory::GroupsGetUpdateDelete)
            .await
    }

    pub async fn list(&self) -> Result<(Vec<Group>, Response)> {
        let path = Route::GroupsList {
            limit: GROUPS_PAGE_LIMIT,
        }
        .to_string();
        self.client
            .list_paginated(path, RateLimitCategory::GroupsCreateList)
            .await
    }

    /// Groups whose name starts with `partial_name`. Cannot be combined with a
    /// filter expression.
    pub async fn list_search_by_name(&self, partial_name: &str) -> Result<(Vec<Group>, Response)> {
        let path = Route::GroupsSearch {
            limit: GROUPS_PAGE_LIMIT,
            query: partial_name,
        }
        .to_string();
        self.client
            .list_paginated(path, RateLimitCategory::GroupsCreateList)
            .await
    }

    /// Groups matching a server-side filter such as `type eq "OKTA_GROUP"`.
    pub async fn list_filter(&self, filter: &str) -> Result<(Vec<Group>, Response)> {
        let path = Route::GroupsFilter {
            limit: GROUPS_PAGE_LIMIT,
            filter,
        }
        .to_string();
        self.client
            .list_paginated(path, RateLimitCategory::GroupsCreateList)
            .await
    }

    pub async fn add(&self, profile: &GroupProfile) -> Result<(Group, Response)> {
        let path = Route::Groups.to_string();
        let body = ProfileBody { profile };
        let req = self.client.new_request(Method::POST, &path, Some(&body))?;
        self.client
            .execute(req, RateLimitCategory::GroupsCreateList)
            .await
    }

    /// Replaces the group's profile with `profile`. Delta updates are not
    /// supported: fields missing from `profile` are cleared on the server.
    pub async fn update(&self, id: &GroupId, profile: &GroupProfile) -> Result<(Group, Response)> {
        let path = Route::Group { group_id: id }.to_string();
        let body = ProfileBody { profile };
        let req = self.client.new_request(Method::PUT, &path, Some(&body))?;
        self.client
            .execute(req, RateLimitCategory::GroupsGetUpdateDelete)
            .await
    }

    pub async fn update_with_profile(
        &self,
        id: &GroupId,
        profile: &GroupProfile,
    ) -> Result<(Group, Response)> {
        self.update(id, profile).await
    }

    /// Same as [`update`](Self::update) with the profile taken from `group`.
    pub async fn update_with_group(
        &self,
        id: &GroupId,
        group: &Group,
    ) -> Result<(Group, Response)> {
        self.update(id, &group.profile).await
    }

    pub async fn remove(&self, id: &GroupId) -> Result<Response> {
        let path = Route::Group { group_id: id }.to_string();
        let req = self.client.new_request::<()>(Method::DELETE, &path, None)?;
        self.client
            .execute_empty(req, RateLimitCategory::GroupsGetUpdateDelete)
            .await
    }

    pub async fn list_members(&self, id: &GroupId) -> Result<(Vec<User>, Response)> {
        let path = Route::GroupUsers {
            group_id: id,
            limit: MEMBERS_PAGE_LIMIT,
        }
        .to_string();
        self.client
            .list_paginated(path, RateLimitCategory::Core)
            .await
    }
}
