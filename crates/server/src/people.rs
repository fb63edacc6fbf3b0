//! People API endpoints

use api_types::people::Person;
use axum::{Json, extract::State};

use crate::{ServerError, extract::EntityId, server::ServerState};

pub(crate) fn map_person(person: engine::Person) -> Person {
    Person {
        id: person.id,
        name: person.name,
        height: person.height,
        mass: person.mass,
        hair_color: person.hair_color,
        skin_color: person.skin_color,
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Person>>, ServerError> {
    let people = state
        .engine
        .list_people()
        .await?
        .into_iter()
        .map(map_person)
        .collect();
    Ok(Json(people))
}

pub async fn get(
    State(state): State<ServerState>,
    EntityId(id): EntityId,
) -> Result<Json<Person>, ServerError> {
    let person = state.engine.person(id).await?;
    Ok(Json(map_person(person)))
}
