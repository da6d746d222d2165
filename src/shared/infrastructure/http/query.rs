use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use std::convert::Infallible;

/// The `id` query parameter. Missing means the empty string; when repeated,
/// the first occurrence is used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemId(pub String);

impl ItemId {
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        pairs
            .into_iter()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| Self(value))
            .unwrap_or_default()
    }
}

impl<S: Send + Sync> FromRequestParts<S> for ItemId {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();
        Ok(Self::from_pairs(pairs))
    }
}
