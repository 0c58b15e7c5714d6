use std::time::Duration;

use axum::{http, Router};
use crate::router::*;
use crate::users::*;
use crate::profiles::*;
use crate::posts::*;
use crate::member_types::*;
use crate::config::Config;
use nook_database::basic_db::{SafeDatabase, InnerDatabase};
use nook_service::store::Tables;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

pub async fn build_server(config: Config) -> Result<(), ServerError> {
    let shared_state = InnerDatabase::new(Tables::seeded());
    let app = app(shared_state, &config);

    let address = config.address();
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| ServerError::Bind { address: address.clone(), source })?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

/// The full HTTP surface over `database`, with CORS and per-request tracing.
pub fn app<T: SafeDatabase<Tables>>(database: T, config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            http::Method::GET,
            http::Method::POST,
            http::Method::PATCH,
            http::Method::DELETE,
            http::Method::OPTIONS
        ])
        .allow_headers(Any)
        .allow_credentials(false)
        .max_age(Duration::from_secs(config.cors_max_age_secs));

    main_router(collect_components::<T>(), database)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}



fn collect_components<T: SafeDatabase<Tables>>() -> Vec<(String, Router<T>)> {
    vec![
        // users
        get_router_builder("/users".to_string(), get_all_users::<T>),
        post_router_builder("/users".to_string(), create_user::<T>),
        get_router_builder("/users/{id}".to_string(), get_user_by_id::<T>),
        delete_router_builder("/users/{id}".to_string(), delete_user::<T>),
        patch_router_builder("/users/{id}".to_string(), change_user::<T>),
        post_router_builder("/users/{id}/subscribeTo".to_string(), subscribe_to::<T>),
        post_router_builder("/users/{id}/unsubscribeFrom".to_string(), unsubscribe_from::<T>),

        // profiles
        get_router_builder("/profiles".to_string(), get_all_profiles::<T>),
        post_router_builder("/profiles".to_string(), create_profile::<T>),
        get_router_builder("/profiles/{id}".to_string(), get_profile_by_id::<T>),
        delete_router_builder("/profiles/{id}".to_string(), delete_profile::<T>),
        patch_router_builder("/profiles/{id}".to_string(), change_profile::<T>),

        // posts
        get_router_builder("/posts".to_string(), get_all_posts::<T>),
        post_router_builder("/posts".to_string(), create_post::<T>),
        get_router_builder("/posts/{id}".to_string(), get_post_by_id::<T>),
        delete_router_builder("/posts/{id}".to_string(), delete_post::<T>),
        patch_router_builder("/posts/{id}".to_string(), change_post::<T>),

        // member types
        get_router_builder("/member-types".to_string(), get_all_member_types::<T>),
        get_router_builder("/member-types/{id}".to_string(), get_member_type_by_id::<T>),
        patch_router_builder("/member-types/{id}".to_string(), change_member_type::<T>),
    ]
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install terminate handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
