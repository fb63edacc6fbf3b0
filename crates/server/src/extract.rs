//! Extractors that turn malformed requests into [`ServerError`]s, so every
//! failure is answered with the same JSON body.

use api_types::favorite::FavoriteNew;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::request::Parts,
};

use crate::ServerError;

/// Numeric id taken from the route. Anything that does not parse is a 404,
/// the route simply does not exist for it.
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub i32);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("rejected path id: {rejection}");
                ServerError::NotFound("Not found".to_string())
            })?;
        Ok(Self(id))
    }
}

/// Validated body of the favorite mutation endpoints.
#[derive(Debug, Clone, Copy)]
pub struct FavoriteBody {
    pub user_id: i32,
}

impl<S> FromRequest<S> for FavoriteBody
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<FavoriteNew>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::MissingJsonContentType(_) => {
                    ServerError::UnsupportedMediaType("Request must be JSON".to_string())
                }
                JsonRejection::JsonSyntaxError(_) => {
                    ServerError::BadRequest("Malformed JSON body".to_string())
                }
                JsonRejection::JsonDataError(_) => {
                    ServerError::BadRequest("user_id must be an integer".to_string())
                }
                other => ServerError::BadRequest(other.body_text()),
            })?;

        match payload.user_id {
            Some(user_id) if user_id != 0 => Ok(Self { user_id }),
            _ => Err(ServerError::BadRequest("user_id is required".to_string())),
        }
    }
}
