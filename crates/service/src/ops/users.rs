use nook_database::table::Filter;
use tracing::{debug, info};

use crate::error::ServiceError;
use crate::parser::user::{ChangeUser, CreateUser, User};
use crate::store::Tables;
use crate::validate::is_uuid_v4;

const KIND: &str = "user";

pub fn list(tables: &Tables) -> Vec<User> {
    tables.users.find_many(None)
}

/// Malformed and unknown ids are both reported as not-found on this route.
pub fn get(tables: &Tables, id: &str) -> Result<User, ServiceError> {
    let user = tables.users.find_one(&Filter::equals("id", id));
    if !is_uuid_v4(id) {
        return Err(ServiceError::not_found(KIND, id));
    }
    user.ok_or_else(|| ServiceError::not_found(KIND, id))
}

pub fn create(tables: &mut Tables, payload: CreateUser) -> User {
    tables.users.create(payload)
}

/// Removes the user together with everything that points at it: its id in other
/// users' subscription lists, its profile and all of its posts.
///
/// Steps are not rolled back; they run under the caller's lock so none can fail halfway.
pub fn delete(tables: &mut Tables, id: &str) -> Result<User, ServiceError> {
    if !is_uuid_v4(id) {
        return Err(ServiceError::malformed_id(id));
    }
    if tables.users.find_one(&Filter::equals("id", id)).is_none() {
        return Err(ServiceError::not_found(KIND, id));
    }

    let parents = tables.users.find_many(Some(&Filter::in_array("subscribedToUserIds", id)));
    for mut parent in parents {
        parent.subscribed_to_user_ids.retain(|subscriber| subscriber != id);
        let parent_id = parent.id.clone();
        tables.users.change(&parent_id, parent);
    }

    if let Some(profile) = tables.profiles.find_one(&Filter::equals("userId", id)) {
        debug!(user = id, profile = %profile.id, "removing profile of deleted user");
        tables.profiles.delete(&profile.id);
    }

    let posts = tables.posts.find_many(Some(&Filter::equals("userId", id)));
    for post in &posts {
        tables.posts.delete(&post.id);
    }

    info!(user = id, posts = posts.len(), "user deleted");
    tables.users.delete(id).ok_or_else(|| ServiceError::not_found(KIND, id))
}

/// Records `subscriber_id` as a subscriber of `parent_id`; returns the updated parent.
pub fn subscribe(tables: &mut Tables, subscriber_id: &str, parent_id: &str) -> Result<User, ServiceError> {
    let mut parent = subscription_parent(tables, subscriber_id, parent_id)?;

    if subscriber_id == parent_id {
        return Err(ServiceError::BadRequest(format!("user {subscriber_id} cannot subscribe to itself")));
    }
    if parent.subscribed_to_user_ids.iter().any(|id| id == subscriber_id) {
        return Err(ServiceError::BadRequest(format!(
            "user {subscriber_id} is already subscribed to {parent_id}"
        )));
    }

    parent.subscribed_to_user_ids.push(subscriber_id.to_string());
    tables.users.change(parent_id, parent).ok_or_else(|| ServiceError::not_found(KIND, parent_id))
}

pub fn unsubscribe(tables: &mut Tables, subscriber_id: &str, parent_id: &str) -> Result<User, ServiceError> {
    let mut parent = subscription_parent(tables, subscriber_id, parent_id)?;

    if !parent.subscribed_to_user_ids.iter().any(|id| id == subscriber_id) {
        return Err(ServiceError::BadRequest(format!(
            "user {subscriber_id} is not subscribed to {parent_id}"
        )));
    }

    parent.subscribed_to_user_ids.retain(|id| id != subscriber_id);
    tables.users.change(parent_id, parent).ok_or_else(|| ServiceError::not_found(KIND, parent_id))
}

pub fn change(tables: &mut Tables, id: &str, payload: ChangeUser) -> Result<User, ServiceError> {
    if !is_uuid_v4(id) {
        return Err(ServiceError::malformed_id(id));
    }
    let user = tables
        .users
        .find_one(&Filter::equals("id", id))
        .ok_or_else(|| ServiceError::not_found(KIND, id))?;

    tables.users.change(id, user.merge(payload)).ok_or_else(|| ServiceError::not_found(KIND, id))
}

// Subscriber is checked first, so an unknown subscriber wins over an unknown parent.
fn subscription_parent(tables: &Tables, subscriber_id: &str, parent_id: &str) -> Result<User, ServiceError> {
    if tables.users.find_one(&Filter::equals("id", subscriber_id)).is_none() {
        return Err(ServiceError::not_found(KIND, subscriber_id));
    }
    tables
        .users
        .find_one(&Filter::equals("id", parent_id))
        .ok_or_else(|| ServiceError::not_found(KIND, parent_id))
}
