use nook_database::table::{FieldRef, Record};
use serde::{Deserialize, Serialize};

use crate::validate::{uuid_shaped, Validate, ValidationError};


#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreatePost {
    pub user_id: String,
    pub title: String,
    pub content: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChangePost {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Post {
    pub fn merge(self, change: ChangePost) -> Self {
        Post {
            title: change.title.unwrap_or(self.title),
            content: change.content.unwrap_or(self.content),
            ..self
        }
    }
}

impl Record for Post {
    type Draft = CreatePost;

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

    fn from_draft(id: String, draft: CreatePost) -> Self {
        Post {
            id,
            user_id: draft.user_id,
            title: draft.title,
            content: draft.content,
        }
    }

    fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }
}

impl Validate for CreatePost {
    fn validate(&self) -> Result<(), ValidationError> {
        uuid_shaped("userId", &self.user_id)
    }
}

impl Validate for ChangePost {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
