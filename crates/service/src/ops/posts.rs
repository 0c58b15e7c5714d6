use nook_database::table::Filter;

use crate::error::ServiceError;
use crate::parser::post::{ChangePost, CreatePost, Post};
use crate::store::Tables;
use crate::validate::is_uuid_v4;

const KIND: &str = "post";

pub fn list(tables: &Tables) -> Vec<Post> {
    tables.posts.find_many(None)
}

pub fn get(tables: &Tables, id: &str) -> Result<Post, ServiceError> {
    tables
        .posts
        .find_one(&Filter::equals("id", id))
        .ok_or_else(|| ServiceError::not_found(KIND, id))
}

pub fn create(tables: &mut Tables, payload: CreatePost) -> Post {
    tables.posts.create(payload)
}

pub fn delete(tables: &mut Tables, id: &str) -> Result<Post, ServiceError> {
    if !is_uuid_v4(id) {
        return Err(ServiceError::malformed_id(id));
    }
    tables.posts.delete(id).ok_or_else(|| ServiceError::not_found(KIND, id))
}

pub fn change(tables: &mut Tables, id: &str, payload: ChangePost) -> Result<Post, ServiceError> {
    if !is_uuid_v4(id) {
        return Err(ServiceError::malformed_id(id));
    }
    let post = get(tables, id)?;
    tables.posts.change(id, post.merge(payload)).ok_or_else(|| ServiceError::not_found(KIND, id))
}
