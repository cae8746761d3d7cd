pub mod group;
pub mod id;
pub mod user;

use serde::Serialize;

/// Request body wrapper: every write endpoint nests its payload under `profile`.
#[derive(Serialize)]
pub(crate) struct ProfileBody<'a, P: ?Sized> {
    pub profile: &'a P,
}
