//! HTTP handlers written once over [`Resource`], mounted per entity.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use service::{
    crud,
    pagination::{Page, Pagination},
    Resource,
};

use crate::errors::JsonApiError;
use crate::routes::auth::ServerState;
use crate::routes::payload::Payload;

pub async fn list<R: Resource>(
    State(state): State<ServerState>,
    query: Result<Query<Pagination>, QueryRejection>,
) -> Result<Json<Page<R::Model>>, JsonApiError> {
    let Query(opts) = query?;
    let page = crud::list::<R>(&state.db, opts).await?;
    Ok(Json(page))
}

pub async fn retrieve<R: Resource>(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<R::Model>, JsonApiError> {
    let Path(id) = id?;
    let found = crud::get::<R, _>(&state.db, id).await?;
    Ok(Json(found))
}

pub async fn create<R: Resource>(
    State(state): State<ServerState>,
    Payload(input): Payload<R::Input>,
) -> Result<(StatusCode, Json<R::Model>), JsonApiError> {
    let created = crud::create::<R>(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn replace<R: Resource>(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    Payload(input): Payload<R::Input>,
) -> Result<Json<R::Model>, JsonApiError> {
    let Path(id) = id?;
    let updated = crud::replace::<R>(&state.db, id, input).await?;
    Ok(Json(updated))
}

pub async fn destroy<R: Resource>(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    crud::delete::<R>(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
