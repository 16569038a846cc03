use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON body extractor that ignores the `Content-Type` header.
///
/// Clients post JSON without declaring it, so only the body itself is checked.
/// Bodies that are not JSON still get axum's `JsonRejection`.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let Json(value) = Json::<T>::from_bytes(&bytes).map_err(IntoResponse::into_response)?;

        Ok(JsonBody(value))
    }
}
