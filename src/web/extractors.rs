//! Request extractors

use axum::{
    extract::{FromRequestParts, Query},
    http::{StatusCode, request::Parts},
};

/// Query string of `/img/{width}/{height}`
///
/// Both values are kept as raw strings; `square` is validated by the
/// handler so malformed values map to 400 instead of a query rejection.
/// When a key is repeated the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageQuery {
    pub square: Option<String>,
    pub text: Option<String>,
}

impl ImageQuery {
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "square" => &mut query.square,
                "text" => &mut query.text,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

impl<S> FromRequestParts<S> for ImageQuery
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs): Query<Vec<(String, String)>> = Query::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::BAD_REQUEST)?;
        Ok(Self::from_pairs(pairs))
    }
}
