use std::fmt::{Display, Formatter, Result as FmtResult};
use urlencoding::encode;

use crate::models::id::{GroupId, UserId};

/// Relative request paths, joined onto the configured base URL.
pub enum Route<'a> {
    Group {
        group_id: &'a GroupId,
    },
    Groups,
    GroupsList {
        limit: u32,
    },
    GroupsSearch {
        limit: u32,
        query: &'a str,
    },
    GroupsFilter {
        limit: u32,
        filter: &'a str,
    },
    GroupUsers {
        group_id: &'a GroupId,
        limit: u32,
    },
    User {
        user_id: &'a UserId,
    },
    UsersList {
        limit: u32,
    },
    UsersFilter {
        limit: u32,
        filter: &'a str,
    },
}

impl Display for Route<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Route::Group { group_id } => write!(f, "groups/{}", encode(group_id.as_str())),
            Route::Groups => f.write_str("groups"),
            Route::GroupsList { limit } => write!(f, "groups?limit={}", limit),
            Route::GroupsSearch { limit, query } => {
                write!(f, "groups?limit={}&q={}", limit, encode(query))
            }
            Route::GroupsFilter { limit, filter } => {
                write!(f, "groups?limit={}&filter={}", limit, encode(filter))
            }
            Route::GroupUsers { group_id, limit } => write!(
                f,
                "groups/{}/users?limit={}",
                encode(group_id.as_str()),
                limit
            ),
            Route::User { user_id } => write!(f, "users/{}", encode(user_id.as_str())),
            Route::UsersList { limit } => write!(f, "users?limit={}", limit),
            Route::UsersFilter { limit, filter } => {
                write!(f, "users?limit={}&filter={}", limit, encode(filter))
            }
        }
    }
}
