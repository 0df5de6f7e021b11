use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

/// A user record as stored and served. Field names match the wire format.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub user: String,
    pub nombre: String,
    pub edad: u32,
}

/// Incoming payload for create and update. The client sends a whole record
/// including its id; the server decides what the id means (ignored on
/// create, overridden by the path on update).
#[derive(Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub id: i64,
    pub user: String,
    pub nombre: String,
    pub edad: u32,
}

#[derive(Default)]
pub struct Store {
    users: BTreeMap<i64, User>,
    next_id: i64,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/usuarios/all", get(list_users))
        .route("/usuarios", post(create_user))
        .route("/usuarios/{id}", put(update_user).delete(delete_user))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Listing is ordered by id; the map keeps that stable across calls.
async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    let store = db.read().await;
    Json(store.users.values().cloned().collect())
}

async fn create_user(
    State(db): State<Db>,
    Json(input): Json<UserPayload>,
) -> (StatusCode, Json<User>) {
    let mut store = db.write().await;
    store.next_id += 1;
    let user = User {
        id: store.next_id,
        user: input.user,
        nombre: input.nombre,
        edad: input.edad,
    };
    store.users.insert(user.id, user.clone());
    tracing::info!(id = user.id, "created user");
    (StatusCode::CREATED, Json(user))
}

async fn update_user(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UserPayload>,
) -> StatusCode {
    let mut store = db.write().await;
    match store.users.get_mut(&id) {
        Some(user) => {
            user.user = input.user;
            user.nombre = input.nombre;
            user.edad = input.edad;
            tracing::info!(id, "updated user");
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_user(State(db): State<Db>, Path(id): Path<i64>) -> StatusCode {
    let mut store = db.write().await;
    match store.users.remove(&id) {
        Some(_) => {
            tracing::info!(id, "deleted user");
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}
