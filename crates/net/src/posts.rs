use axum::extract::{Path, State};
use axum::Json;
use nook_database::basic_db::SafeDatabase;
use nook_service::ops::posts;
use nook_service::parser::post::{ChangePost, CreatePost, Post};
use nook_service::store::Tables;

use crate::error::ApiError;
use crate::extract::ValidJson;


pub async fn get_all_posts<T: SafeDatabase<Tables>>(
    State(database): State<T>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = database.read(posts::list)?;
    Ok(Json(posts))
}

pub async fn get_post_by_id<T: SafeDatabase<Tables>>(
    State(database): State<T>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let post = database.read(|tables| posts::get(tables, &id))??;
    Ok(Json(post))
}

pub async fn create_post<T: SafeDatabase<Tables>>(
    State(database): State<T>,
    ValidJson(payload): ValidJson<CreatePost>,
) -> Result<Json<Post>, ApiError> {
    let post = database.transact(|tables| posts::create(tables, payload))?;
    Ok(Json(post))
}

pub async fn delete_post<T: SafeDatabase<Tables>>(
    State(database): State<T>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let post = database.transact(|tables| posts::delete(tables, &id))??;
    Ok(Json(post))
}

pub async fn change_post<T: SafeDatabase<Tables>>(
    State(database): State<T>,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<ChangePost>,
) -> Result<Json<Post>, ApiError> {
    let post = database.transact(|tables| posts::change(tables, &id, payload))??;
    Ok(Json(post))
}


#[cfg(test)]
mod tests {
    use super::*;
    use nook_database::basic_db::InnerDatabase;

    #[tokio::test]
    async fn test_post_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
        let db = InnerDatabase::new(Tables::seeded());
        let payload = CreatePost {
            user_id: "6a1b2c3d-4e5f-4a6b-8c7d-8e9f0a1b2c3d".to_string(),
            title: "Hello".to_string(),
            content: "First post".to_string(),
        };

        let Json(post) = create_post(State(db.clone()), ValidJson(payload)).await?;
        let Json(fetched) = get_post_by_id(State(db.clone()), Path(post.id.clone())).await?;
        assert_eq!(fetched, post);

        let change = ChangePost { title: Some("Hello again".to_string()), content: None };
        let Json(changed) = change_post(State(db.clone()), Path(post.id.clone()), ValidJson(change)).await?;
        assert_eq!(changed.title, "Hello again");
        assert_eq!(changed.content, "First post");

        let Json(deleted) = delete_post(State(db.clone()), Path(post.id.clone())).await?;
        assert_eq!(deleted, changed);

        let Json(all) = get_all_posts(State(db)).await?;
        assert!(all.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_and_missing_ids() {
        let db = InnerDatabase::new(Tables::seeded());

        let malformed = change_post(State(db.clone()), Path("42".to_string()), ValidJson(ChangePost::default())).await;
        assert!(matches!(malformed, Err(ApiError::BadRequest(_))));

        let missing = delete_post(State(db.clone()), Path("6a1b2c3d-4e5f-4a6b-8c7d-8e9f0a1b2c3d".to_string())).await;
        assert!(matches!(missing, Err(ApiError::NotFound(_))));

        let unknown = get_post_by_id(State(db), Path("42".to_string())).await;
        assert!(matches!(unknown, Err(ApiError::NotFound(_))));
    }
}
