use axum::extract::{FromRequest, Request};
use axum::Json;
use nook_service::validate::Validate;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// `Json<T>` that also runs `T::validate`. Both kinds of failure are a 400,
/// raised before the handler touches the store.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidJson(value))
    }
}
