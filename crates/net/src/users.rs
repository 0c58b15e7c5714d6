use axum::extract::{Path, State};
use axum::Json;
use nook_database::basic_db::SafeDatabase;
use nook_service::ops::users;
use nook_service::parser::user::{ChangeUser, CreateUser, SubscribeBody, User};
use nook_service::store::Tables;

use crate::error::ApiError;
use crate::extract::ValidJson;


pub async fn get_all_users<T: SafeDatabase<Tables>>(
    State(database): State<T>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = database.read(users::list)?;
    Ok(Json(users))
}

pub async fn get_user_by_id<T: SafeDatabase<Tables>>(
    State(database): State<T>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = database.read(|tables| users::get(tables, &id))??;
    Ok(Json(user))
}

pub async fn create_user<T: SafeDatabase<Tables>>(
    State(database): State<T>,
    ValidJson(payload): ValidJson<CreateUser>,
) -> Result<Json<User>, ApiError> {
    let user = database.transact(|tables| users::create(tables, payload))?;
    Ok(Json(user))
}

pub async fn delete_user<T: SafeDatabase<Tables>>(
    State(database): State<T>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = database.transact(|tables| users::delete(tables, &id))??;
    Ok(Json(user))
}

/// `POST /users/{id}/subscribeTo`: user `id` subscribes to `body.userId`.
pub async fn subscribe_to<T: SafeDatabase<Tables>>(
    State(database): State<T>,
    Path(id): Path<String>,
    ValidJson(body): ValidJson<SubscribeBody>,
) -> Result<Json<User>, ApiError> {
    let parent = database.transact(|tables| users::subscribe(tables, &id, &body.user_id))??;
    Ok(Json(parent))
}

pub async fn unsubscribe_from<T: SafeDatabase<Tables>>(
    State(database): State<T>,
    Path(id): Path<String>,
    ValidJson(body): ValidJson<SubscribeBody>,
) -> Result<Json<User>, ApiError> {
    let parent = database.transact(|tables| users::unsubscribe(tables, &id, &body.user_id))??;
    Ok(Json(parent))
}

pub async fn change_user<T: SafeDatabase<Tables>>(
    State(database): State<T>,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<ChangeUser>,
) -> Result<Json<User>, ApiError> {
    let user = database.transact(|tables| users::change(tables, &id, payload))??;
    Ok(Json(user))
}


#[cfg(test)]
mod tests {
    use super::*;
    use nook_database::basic_db::InnerDatabase;

    fn database() -> InnerDatabase<Tables> {
        InnerDatabase::new(Tables::seeded())
    }

    async fn create(db: &InnerDatabase<Tables>, name: &str) -> Result<User, ApiError> {
        let payload = CreateUser { name: name.to_string(), balance: 10.0 };
        let Json(user) = create_user(State(db.clone()), ValidJson(payload)).await?;
        Ok(user)
    }

    #[tokio::test]
    async fn test_create_then_get() -> Result<(), Box<dyn std::error::Error>> {
        let db = database();
        let user = create(&db, "Ada").await?;

        let Json(fetched) = get_user_by_id(State(db.clone()), Path(user.id.clone())).await?;
        assert_eq!(fetched, user);

        let Json(all) = get_all_users(State(db)).await?;
        assert_eq!(all, vec![user]);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_malformed_id_is_not_found() {
        let result = get_user_by_id(State(database()), Path("abc".to_string())).await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_subscribe_and_unsubscribe() -> Result<(), Box<dyn std::error::Error>> {
        let db = database();
        let ada = create(&db, "Ada").await?;
        let bob = create(&db, "Bob").await?;
        let body = || ValidJson(SubscribeBody { user_id: bob.id.clone() });

        let Json(parent) = subscribe_to(State(db.clone()), Path(ada.id.clone()), body()).await?;
        assert_eq!(parent.id, bob.id);
        assert_eq!(parent.subscribed_to_user_ids, vec![ada.id.clone()]);

        let again = subscribe_to(State(db.clone()), Path(ada.id.clone()), body()).await;
        assert!(matches!(again, Err(ApiError::BadRequest(_))));

        let Json(parent) = unsubscribe_from(State(db.clone()), Path(ada.id.clone()), body()).await?;
        assert!(parent.subscribed_to_user_ids.is_empty());

        let again = unsubscribe_from(State(db), Path(ada.id.clone()), body()).await;
        assert!(matches!(again, Err(ApiError::BadRequest(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_change_and_delete() -> Result<(), Box<dyn std::error::Error>> {
        let db = database();
        let ada = create(&db, "Ada").await?;

        let change = ChangeUser { name: None, balance: Some(99.5) };
        let Json(changed) = change_user(State(db.clone()), Path(ada.id.clone()), ValidJson(change)).await?;
        assert_eq!(changed.balance, 99.5);
        assert_eq!(changed.name, "Ada");

        let bad = delete_user(State(db.clone()), Path("1".to_string())).await;
        assert!(matches!(bad, Err(ApiError::BadRequest(_))));

        let Json(deleted) = delete_user(State(db.clone()), Path(ada.id.clone())).await?;
        assert_eq!(deleted, changed);

        let gone = delete_user(State(db), Path(ada.id)).await;
        assert!(matches!(gone, Err(ApiError::NotFound(_))));
        Ok(())
    }
}
