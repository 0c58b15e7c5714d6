use axum::extract::{Path, State};
use axum::Json;
use nook_database::basic_db::SafeDatabase;
use nook_service::ops::profiles;
use nook_service::parser::profile::{ChangeProfile, CreateProfile, Profile};
use nook_service::store::Tables;

use crate::error::ApiError;
use crate::extract::ValidJson;


pub async fn get_all_profiles<T: SafeDatabase<Tables>>(
    State(database): State<T>,
) -> Result<Json<Vec<Profile>>, ApiError> {
    let profiles = database.read(profiles::list)?;
    Ok(Json(profiles))
}

pub async fn get_profile_by_id<T: SafeDatabase<Tables>>(
    State(database): State<T>,
    Path(id): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    let profile = database.read(|tables| profiles::get(tables, &id))??;
    Ok(Json(profile))
}

pub async fn create_profile<T: SafeDatabase<Tables>>(
    State(database): State<T>,
    ValidJson(payload): ValidJson<CreateProfile>,
) -> Result<Json<Profile>, ApiError> {
    let profile = database.transact(|tables| profiles::create(tables, payload))??;
    Ok(Json(profile))
}

pub async fn delete_profile<T: SafeDatabase<Tables>>(
    State(database): State<T>,
    Path(id): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    let profile = database.transact(|tables| profiles::delete(tables, &id))??;
    Ok(Json(profile))
}

pub async fn change_profile<T: SafeDatabase<Tables>>(
    State(database): State<T>,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<ChangeProfile>,
) -> Result<Json<Profile>, ApiError> {
    let profile = database.transact(|tables| profiles::change(tables, &id, payload))??;
    Ok(Json(profile))
}
