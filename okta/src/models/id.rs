use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct GroupId(pub String);

#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct UserId(pub String);

macro_rules! impl_id {
    ($($id:ident),*) => {
        $(
            impl $id {
                pub fn as_str(&self) -> &str {
                    &self.0
                }

                pub fn is_empty(&self) -> bool {
                    self.0.is_empty()
                }
            }

            impl Display for $id {
                fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                    f.write_str(&self.0)
                }
            }

            impl From<&str> for $id {
                fn from(id: &str) -> Self {
                    Self(id.to_owned())
                }
            }

            impl From<String> for $id {
                fn from(id: String) -> Self {
                    Self(id)
                }
            }
        )*
    };
}

impl_id!(GroupId, UserId);
