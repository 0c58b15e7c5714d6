use std::convert::Infallible;

use nook_database::table::{FieldRef, Record};
use serde::{Deserialize, Serialize};

use crate::validate::{finite, Validate, ValidationError};

pub const BASIC: &str = "basic";
pub const BUSINESS: &str = "business";


#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberType {
    pub id: String,                 // catalog key, e.g. "basic"
    pub discount: f64,              // percent
    pub month_posts_limit: u32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChangeMemberType {
    pub discount: Option<f64>,
    pub month_posts_limit: Option<u32>,
}

impl MemberType {
    /// The fixed catalog every fresh store starts with.
    pub fn catalog() -> Vec<MemberType> {
        vec![
            MemberType { id: BASIC.to_string(), discount: 0.0, month_posts_limit: 20 },
            MemberType { id: BUSINESS.to_string(), discount: 5.0, month_posts_limit: 100 },
        ]
    }

    pub fn merge(self, change: ChangeMemberType) -> Self {
        MemberType {
            discount: change.discount.unwrap_or(self.discount),
            month_posts_limit: change.month_posts_limit.unwrap_or(self.month_posts_limit),
            ..self
        }
    }
}

// Member types are never created over the API, only seeded with `Table::insert`.
impl Record for MemberType {
    type Draft = Infallible;

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<FieldRef<'_>> {
        match key {
            "id" => Some(FieldRef::Text(&self.id)),
            _ => None,
        }
    }

    fn from_draft(_id: String, draft: Infallible) -> Self {
        match draft {}
    }

    fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }
}

impl Validate for ChangeMemberType {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.discount {
            Some(discount) => finite("discount", discount),
            None => Ok(()),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_basic_and_business() {
        let ids: Vec<_> = MemberType::catalog().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["basic", "business"]);
    }

    #[test]
    fn test_discount_only_needs_to_be_finite() {
        let negative = ChangeMemberType { discount: Some(-1.0), month_posts_limit: None };
        assert!(negative.validate().is_ok());

        let infinite = ChangeMemberType { discount: Some(f64::INFINITY), month_posts_limit: None };
        assert_eq!(infinite.validate().unwrap_err().field, "discount");
    }

    #[test]
    fn test_month_posts_limit_parses_camel_case() {
        let change: ChangeMemberType = serde_json::from_str(r#"{"monthPostsLimit": 42}"#).unwrap();
        let merged = MemberType::catalog().remove(0).merge(change);

        assert_eq!(merged.month_posts_limit, 42);
        assert_eq!(merged.discount, 0.0);
    }
}
