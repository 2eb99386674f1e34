//! Shared query parameter types for API handlers.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer};
use todo_core::error::CoreError;
use todo_core::paging::PageRequest;

/// Paging and sorting parameters for the work list
/// (`?pageNo=&pageSize=&sortBy=&sortDirection=`).
///
/// A parameter that is absent or empty takes its default. Non-numeric or
/// negative numbers fail at extraction; field and direction names are
/// checked by [`ListWorksParams::into_page_request`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListWorksParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page_no: Option<u32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page_size: Option<u32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub sort_by: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub sort_direction: Option<String>,
}

impl ListWorksParams {
    pub fn into_page_request(self) -> Result<PageRequest, CoreError> {
        PageRequest::from_parts(
            self.page_no,
            self.page_size,
            self.sort_by.as_deref(),
            self.sort_direction.as_deref(),
        )
    }
}

/// Deserialize `key=` as `None` and anything else through `FromStr`.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(de::Error::custom),
    }
}
