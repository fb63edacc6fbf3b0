//! Planets API endpoints

use api_types::planet::Planet;
use axum::{Json, extract::State};

use crate::{ServerError, extract::EntityId, server::ServerState};

pub(crate) fn map_planet(planet: engine::Planet) -> Planet {
    Planet {
        id: planet.id,
        name: planet.name,
        diameter: planet.diameter,
        population: planet.population,
        climate: planet.climate,
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Planet>>, ServerError> {
    let planets = state
        .engine
        .list_planets()
        .await?
        .into_iter()
        .map(map_planet)
        .collect();
    Ok(Json(planets))
}

pub async fn get(
    State(state): State<ServerState>,
    EntityId(id): EntityId,
) -> Result<Json<Planet>, ServerError> {
    let planet = state.engine.planet(id).await?;
    Ok(Json(map_planet(planet)))
}
