use nook_database::table::{FieldRef, Record};
use serde::{Deserialize, Serialize};

use crate::validate::{finite, non_empty, Validate, ValidationError};


#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub balance: f64,
    pub subscribed_to_user_ids: Vec<String>,   // ids of users that subscribed to this one
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateUser {
    pub name: String,
    pub balance: f64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChangeUser {
    pub name: Option<String>,
    pub balance: Option<f64>,
}

/// Body of `subscribeTo` / `unsubscribeFrom`: the user being (un)subscribed to.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SubscribeBody {
    pub user_id: String,
}

impl User {
    /// Shallow merge: provided fields overwrite, absent ones are kept.
    pub fn merge(self, change: ChangeUser) -> Self {
        User {
            name: change.name.unwrap_or(self.name),
            balance: change.balance.unwrap_or(self.balance),
            ..self
        }
    }
}

impl Record for User {
    type Draft = CreateUser;

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<FieldRef<'_>> {
        match key {
            "id" => Some(FieldRef::Text(&self.id)),
            "subscribedToUserIds" => Some(FieldRef::List(&self.subscribed_to_user_ids)),
            _ => None,
        }
    }

    fn from_draft(id: String, draft: CreateUser) -> Self {
        User {
            id,
            name: draft.name,
            balance: draft.balance,
            subscribed_to_user_ids: Vec::new(),
        }
    }

    fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }
}

impl Validate for CreateUser {
    fn validate(&self) -> Result<(), ValidationError> {
        finite("balance", self.balance)
    }
}

impl Validate for ChangeUser {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.balance {
            Some(balance) => finite("balance", balance),
            None => Ok(()),
        }
    }
}

impl Validate for SubscribeBody {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty("userId", &self.user_id)
    }
}
