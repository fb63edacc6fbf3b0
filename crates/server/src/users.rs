use api_types::user::User;
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

fn map_user(user: engine::User) -> User {
    User {
        id: user.id,
        email: user.email,
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<User>>, ServerError> {
    let users = state
        .engine
        .list_users()
        .await?
        .into_iter()
        .map(map_user)
        .collect();
    Ok(Json(users))
}
