use nook_database::table::Filter;

use crate::error::ServiceError;
use crate::parser::member_type::BASIC;
use crate::parser::profile::{ChangeProfile, CreateProfile, Profile};
use crate::store::Tables;
use crate::validate::is_uuid_v4;

const KIND: &str = "profile";

pub fn list(tables: &Tables) -> Vec<Profile> {
    tables.profiles.find_many(None)
}

pub fn get(tables: &Tables, id: &str) -> Result<Profile, ServiceError> {
    tables
        .profiles
        .find_one(&Filter::equals("id", id))
        .ok_or_else(|| ServiceError::not_found(KIND, id))
}

/// Only the `basic` tier can be picked at creation, and a user owns at most one profile.
pub fn create(tables: &mut Tables, payload: CreateProfile) -> Result<Profile, ServiceError> {
    if payload.member_type_id != BASIC {
        return Err(ServiceError::BadRequest(format!(
            "member type {} is not available for new profiles",
            payload.member_type_id
        )));
    }
    if tables.member_types.find_one(&Filter::equals("id", &payload.member_type_id)).is_none() {
        return Err(ServiceError::BadRequest(format!("unknown member type {}", payload.member_type_id)));
    }
    if tables.profiles.find_one(&Filter::equals("userId", &payload.user_id)).is_some() {
        return Err(ServiceError::BadRequest(format!("user {} already has a profile", payload.user_id)));
    }

    Ok(tables.profiles.create(payload))
}

pub fn delete(tables: &mut Tables, id: &str) -> Result<Profile, ServiceError> {
    if !is_uuid_v4(id) {
        return Err(ServiceError::malformed_id(id));
    }
    tables.profiles.delete(id).ok_or_else(|| ServiceError::not_found(KIND, id))
}

pub fn change(tables: &mut Tables, id: &str, payload: ChangeProfile) -> Result<Profile, ServiceError> {
    if !is_uuid_v4(id) {
        return Err(ServiceError::malformed_id(id));
    }
    let profile = get(tables, id)?;

    if let Some(member_type_id) = &payload.member_type_id {
        if tables.member_types.find_one(&Filter::equals("id", member_type_id)).is_none() {
            return Err(ServiceError::BadRequest(format!("unknown member type {member_type_id}")));
        }
    }

    tables.profiles.change(id, profile.merge(payload)).ok_or_else(|| ServiceError::not_found(KIND, id))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::users;
    use crate::parser::user::CreateUser;

    fn draft(user_id: &str, member_type_id: &str) -> CreateProfile {
        CreateProfile {
            user_id: user_id.to_string(),
            member_type_id: member_type_id.to_string(),
            avatar: "a.png".to_string(),
            sex: "m".to_string(),
            birthday: 946684800000,
            country: "DE".to_string(),
            street: "Hauptstr".to_string(),
            city: "Berlin".to_string(),
        }
    }

    fn owner(tables: &mut Tables) -> String {
        users::create(tables, CreateUser { name: "Ada".into(), balance: 0.0 }).id
    }

    #[test]
    fn test_create_requires_basic_member_type() {
        let mut tables = Tables::seeded();
        let user_id = owner(&mut tables);

        assert!(matches!(create(&mut tables, draft(&user_id, "business")), Err(ServiceError::BadRequest(_))));
        assert!(tables.profiles.is_empty());
        assert!(create(&mut tables, draft(&user_id, "basic")).is_ok());
    }

    #[test]
    fn test_second_profile_for_user_is_bad_request() {
        let mut tables = Tables::seeded();
        let user_id = owner(&mut tables);

        create(&mut tables, draft(&user_id, "basic")).unwrap();
        assert!(matches!(create(&mut tables, draft(&user_id, "basic")), Err(ServiceError::BadRequest(_))));
        assert_eq!(tables.profiles.len(), 1);
    }

    #[test]
    fn test_basic_must_exist_in_catalog() {
        let mut tables = Tables::default();
        let user_id = owner(&mut tables);

        assert!(matches!(create(&mut tables, draft(&user_id, "basic")), Err(ServiceError::BadRequest(_))));
    }

    #[test]
    fn test_delete_and_change_check_id() {
        let mut tables = Tables::seeded();
        let user_id = owner(&mut tables);
        let profile = create(&mut tables, draft(&user_id, "basic")).unwrap();
        let missing = uuid::Uuid::new_v4().to_string();

        assert!(matches!(delete(&mut tables, "oops"), Err(ServiceError::BadRequest(_))));
        assert!(matches!(delete(&mut tables, &missing), Err(ServiceError::NotFound(_))));
        assert!(matches!(change(&mut tables, "oops", ChangeProfile::default()), Err(ServiceError::BadRequest(_))));
        assert!(matches!(change(&mut tables, &missing, ChangeProfile::default()), Err(ServiceError::NotFound(_))));

        assert_eq!(delete(&mut tables, &profile.id), Ok(profile));
        assert!(tables.profiles.is_empty());
    }

    #[test]
    fn test_change_merges_and_checks_member_type() {
        let mut tables = Tables::seeded();
        let user_id = owner(&mut tables);
        let profile = create(&mut tables, draft(&user_id, "basic")).unwrap();

        let changed = change(
            &mut tables,
            &profile.id,
            ChangeProfile { city: Some("Bonn".into()), member_type_id: Some("business".into()), ..Default::default() },
        )
        .unwrap();
        assert_eq!(changed.city, "Bonn");
        assert_eq!(changed.member_type_id, "business");
        assert_eq!(changed.street, profile.street);

        let unknown = ChangeProfile { member_type_id: Some("gold".into()), ..Default::default() };
        assert!(matches!(change(&mut tables, &profile.id, unknown), Err(ServiceError::BadRequest(_))));
        assert_eq!(get(&tables, &profile.id), Ok(changed));
    }
}
