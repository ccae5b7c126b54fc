use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::database::activities_repo::ActivityDirectory;
use crate::error::ApiResult;
use crate::models::{Directory, SignupMessage};
use crate::services::signup_service;

#[derive(Debug, Deserialize)]
pub struct StudentQuery {
    pub email: String,
}

pub async fn activities_handler(State(directory): State<Arc<ActivityDirectory>>) -> Json<Directory> {
    Json(signup_service::list_activities(&directory))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    query: Result<Query<StudentQuery>, QueryRejection>,
    State(directory): State<Arc<ActivityDirectory>>,
) -> ApiResult<Json<SignupMessage>> {
    let Query(query) = query?;
    let msg = signup_service::enroll(&directory, &activity_name, &query.email)?;
    Ok(Json(msg))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    query: Result<Query<StudentQuery>, QueryRejection>,
    State(directory): State<Arc<ActivityDirectory>>,
) -> ApiResult<Json<SignupMessage>> {
    let Query(query) = query?;
    let msg = signup_service::withdraw(&directory, &activity_name, &query.email)?;
    Ok(Json(msg))
}
