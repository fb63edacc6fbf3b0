//! Favorites API endpoints

use api_types::{
    Message,
    favorite::{FavoritePerson, FavoritePlanet, FavoritesQuery, FavoritesResponse},
};
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};

use crate::{
    ServerError,
    extract::{EntityId, FavoriteBody},
    people::map_person,
    planets::map_planet,
    server::ServerState,
};

fn map_favorite_person(favorite: engine::FavoritePerson) -> FavoritePerson {
    FavoritePerson {
        id: favorite.id,
        user_id: favorite.user_id,
        people_id: favorite.people_id(),
        people: map_person(favorite.person),
    }
}

fn map_favorite_planet(favorite: engine::FavoritePlanet) -> FavoritePlanet {
    FavoritePlanet {
        id: favorite.id,
        user_id: favorite.user_id,
        planet_id: favorite.planet_id(),
        planet: map_planet(favorite.planet),
    }
}

fn parse_user_id(raw: Option<&str>) -> Result<i32, ServerError> {
    let raw = raw
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ServerError::BadRequest("user_id is required".to_string()))?;
    raw.parse()
        .map_err(|_| ServerError::BadRequest("user_id must be an integer".to_string()))
}

/// Handle requests for listing the favorites of `?user_id=`
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<FavoritesQuery>, QueryRejection>,
) -> Result<Json<FavoritesResponse>, ServerError> {
    let Query(query) = query.map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;
    let user_id = parse_user_id(query.user_id.as_deref())?;

    let favorites = state.engine.favorites(user_id).await?;
    Ok(Json(FavoritesResponse {
        favorite_people: favorites
            .people
            .into_iter()
            .map(map_favorite_person)
            .collect(),
        favorite_planets: favorites
            .planets
            .into_iter()
            .map(map_favorite_planet)
            .collect(),
    }))
}

pub async fn add_planet(
    State(state): State<ServerState>,
    EntityId(planet_id): EntityId,
    body: FavoriteBody,
) -> Result<(StatusCode, Json<Message>), ServerError> {
    state
        .engine
        .add_favorite_planet(body.user_id, planet_id)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(Message::new("Planet added to favorites")),
    ))
}

pub async fn add_person(
    State(state): State<ServerState>,
    EntityId(people_id): EntityId,
    body: FavoriteBody,
) -> Result<(StatusCode, Json<Message>), ServerError> {
    state
        .engine
        .add_favorite_person(body.user_id, people_id)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(Message::new("Person added to favorites")),
    ))
}

pub async fn remove_planet(
    State(state): State<ServerState>,
    EntityId(planet_id): EntityId,
    body: FavoriteBody,
) -> Result<Json<Message>, ServerError> {
    state
        .engine
        .remove_favorite_planet(body.user_id, planet_id)
        .await?;
    Ok(Json(Message::new("Planet removed from favorites")))
}

pub async fn remove_person(
    State(state): State<ServerState>,
    EntityId(people_id): EntityId,
    body: FavoriteBody,
) -> Result<Json<Message>, ServerError> {
    state
        .engine
        .remove_favorite_person(body.user_id, people_id)
        .await?;
    Ok(Json(Message::new("Person removed from favorites")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_is_required() {
        for raw in [None, Some(""), Some("   ")] {
            let Err(ServerError::BadRequest(msg)) = parse_user_id(raw) else {
                panic!("{raw:?} should be rejected");
            };
            assert_eq!(msg, "user_id is required");
        }
    }

    #[test]
    fn user_id_must_be_numeric() {
        let Err(ServerError::BadRequest(msg)) = parse_user_id(Some("luke")) else {
            panic!("non numeric id should be rejected");
        };
        assert_eq!(msg, "user_id must be an integer");
    }

    #[test]
    fn user_id_is_parsed() {
        assert!(matches!(parse_user_id(Some(" 5 ")), Ok(5)));
    }
}
