use nook_database::table::{FieldRef, Record};
use serde::{Deserialize, Serialize};

use crate::validate::{non_empty, uuid_shaped, Validate, ValidationError};


#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub user_id: String,           // at most one profile per user
    pub member_type_id: String,
    pub avatar: String,
    pub sex: String,
    pub birthday: i64,             // unix millis
    pub country: String,
    pub street: String,
    pub city: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateProfile {
    pub user_id: String,
    pub member_type_id: String,
    pub avatar: String,
    pub sex: String,
    pub birthday: i64,
    pub country: String,
    pub street: String,
    pub city: String,
}

// userId is fixed once the profile exists.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChangeProfile {
    pub member_type_id: Option<String>,
    pub avatar: Option<String>,
    pub sex: Option<String>,
    pub birthday: Option<i64>,
    pub country: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
}

impl Profile {
    pub fn merge(self, change: ChangeProfile) -> Self {
        Profile {
            member_type_id: change.member_type_id.unwrap_or(self.member_type_id),
            avatar: change.avatar.unwrap_or(self.avatar),
            sex: change.sex.unwrap_or(self.sex),
            birthday: change.birthday.unwrap_or(self.birthday),
            country: change.country.unwrap_or(self.country),
            street: change.street.unwrap_or(self.street),
            city: change.city.unwrap_or(self.city),
            ..self
        }
    }
}

impl Record for Profile {
    type Draft = CreateProfile;

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<FieldRef<'_>> {
        match key {
            "id" => Some(FieldRef::Text(&self.id)),
            "userId" => Some(FieldRef::Text(&self.user_id)),
            _ => None,
        }
    }

    fn from_draft(id: String, draft: CreateProfile) -> Self {
        Profile {
            id,
            user_id: draft.user_id,
            member_type_id: draft.member_type_id,
            avatar: draft.avatar,
            sex: draft.sex,
            birthday: draft.birthday,
            country: draft.country,
            street: draft.street,
            city: draft.city,
        }
    }

    fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }
}

impl Validate for CreateProfile {
    fn validate(&self) -> Result<(), ValidationError> {
        uuid_shaped("userId", &self.user_id)?;
        non_empty("memberTypeId", &self.member_type_id)
    }
}

impl Validate for ChangeProfile {
    fn validate(&self) -> Result<(), ValidationError> {
        match &self.member_type_id {
            Some(member_type_id) => non_empty("memberTypeId", member_type_id),
            None => Ok(()),
        }
    }
}
