use axum::extract::{Path, State};
use axum::Json;
use nook_database::basic_db::SafeDatabase;
use nook_service::ops::member_types;
use nook_service::parser::member_type::{ChangeMemberType, MemberType};
use nook_service::store::Tables;

use crate::error::ApiError;
use crate::extract::ValidJson;

// Member-type ids are catalog keys, not UUIDs.

pub async fn get_all_member_types<T: SafeDatabase<Tables>>(
    State(database): State<T>,
) -> Result<Json<Vec<MemberType>>, ApiError> {
    let member_types = database.read(member_types::list)?;
    Ok(Json(member_types))
}

pub async fn get_member_type_by_id<T: SafeDatabase<Tables>>(
    State(database): State<T>,
    Path(id): Path<String>,
) -> Result<Json<MemberType>, ApiError> {
    let member_type = database.read(|tables| member_types::get(tables, &id))??;
    Ok(Json(member_type))
}

pub async fn change_member_type<T: SafeDatabase<Tables>>(
    State(database): State<T>,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<ChangeMemberType>,
) -> Result<Json<MemberType>, ApiError> {
    let member_type = database.transact(|tables| member_types::change(tables, &id, payload))??;
    Ok(Json(member_type))
}
