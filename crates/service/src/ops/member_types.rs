use nook_database::table::Filter;

use crate::error::ServiceError;
use crate::parser::member_type::{ChangeMemberType, MemberType, BASIC};
use crate::store::Tables;

const KIND: &str = "member type";

pub fn list(tables: &Tables) -> Vec<MemberType> {
    tables.member_types.find_many(None)
}

pub fn get(tables: &Tables, id: &str) -> Result<MemberType, ServiceError> {
    tables
        .member_types
        .find_one(&Filter::equals("id", id))
        .ok_or_else(|| ServiceError::not_found(KIND, id))
}

/// Only the `basic` tier is editable.
pub fn change(tables: &mut Tables, id: &str, payload: ChangeMemberType) -> Result<MemberType, ServiceError> {
    if id != BASIC {
        return Err(ServiceError::BadRequest(format!("member type {id} cannot be changed")));
    }
    let member_type = get(tables, id)?;
    tables
        .member_types
        .change(id, member_type.merge(payload))
        .ok_or_else(|| ServiceError::not_found(KIND, id))
}
