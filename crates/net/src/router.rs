use axum::{
    handler::Handler,
    routing::{delete, get, patch, post, MethodRouter},
    Router,
};



/// Merges every `(path, router)` component into one app. Components sharing a path
/// but using different methods are combined into a single route.
pub fn main_router<STATE>(components: Vec<(String, Router<STATE>)>, state: STATE) -> Router
where
    STATE: Clone + Send + Sync + 'static
{
    let mut app = Router::<STATE>::new();

    for (_, router) in components {
        app = app.merge(router);
    }

    app.with_state(state)
}


fn router_builder<S>(path: String, method_router: MethodRouter<S>) -> (String, Router<S>)
where
    S: Clone + Send + Sync + 'static,
{
    let app = Router::<S>::new().route(&path, method_router);
    (path, app)
}


pub fn get_router_builder<T, S>(
    path: String,
    handler: impl Handler<T, S>  + Clone + Send + 'static
) -> (String, Router<S>)
where
    T: 'static,
    S: Clone + Send + Sync + 'static,
{
    router_builder(path, get(handler))
}


pub fn post_router_builder<T, S>(
    path: String,
    handler: impl Handler<T, S>  + Clone + Send + 'static
) -> (String, Router<S>)
where
    T: 'static,
    S: Clone + Send + Sync + 'static,
{
    router_builder(path, post(handler))
}


pub fn patch_router_builder<T, S>(
    path: String,
    handler: impl Handler<T, S>  + Clone + Send + 'static
) -> (String, Router<S>)
where
    T: 'static,
    S: Clone + Send + Sync + 'static,
{
    router_builder(path, patch(handler))
}


pub fn delete_router_builder<T, S>(
    path: String,
    handler: impl Handler<T, S>  + Clone + Send + 'static
) -> (String, Router<S>)
where
    T: 'static,
    S: Clone + Send + Sync + 'static,
{
    router_builder(path, delete(handler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    async fn hello_handler() -> String {
        "Hello, World!".to_string()
    }

    async fn echo_handler(body: String) -> String {
        body
    }

    #[tokio::test]
    async fn test_get_router_builder() {

        let (path, router) = get_router_builder::<_ ,_>(
            "/hello".to_string(),
            hello_handler
        );
        assert_eq!(path, "/hello");
        let app = Router::new().merge(router);

        let request = Request::builder()
            .uri("/hello")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_same_path_components_merge_methods() {
        let components = vec![
            get_router_builder("/items".to_string(), hello_handler),
            post_router_builder("/items".to_string(), echo_handler),
        ];
        let app = main_router(components, ());

        let post_request = Request::builder()
            .method(Method::POST)
            .uri("/items")
            .body(Body::from("ping"))
            .unwrap();
        let response = app.clone().oneshot(post_request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let delete_request = Request::builder()
            .method(Method::DELETE)
            .uri("/items")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(delete_request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

}
