#![cfg(feature = "tower")]

use std::{convert::Infallible, sync::Arc};
use tower::{ServiceBuilder, ServiceExt};
use wayfinder::{
    Method, Route, RouterBuilder,
    tower::{Resolved, RouteLayer},
};

async fn echo(request: http::Request<()>) -> Result<Option<Resolved>, Infallible> {
    Ok(request.extensions().get::<Resolved>().cloned())
}

fn layer() -> RouteLayer<()> {
    let mut builder = RouterBuilder::new();
    builder
        .insert(
            Route::new(r"posts/<id \d+>")
                .unwrap()
                .method(Method::GET)
                .to("blog::posts::show"),
        )
        .unwrap();
    RouteLayer::new(Arc::new(builder.build()))
}

#[tokio::test]
async fn test_layer_stores_resolution() {
    let service = ServiceBuilder::new().layer(layer()).service_fn(echo);
    let request = http::Request::get("/posts/42").body(()).unwrap();

    let resolved = service.oneshot(request).await.unwrap().unwrap();
    assert_eq!(resolved.index, 0);
    assert_eq!(resolved.template, r"posts/<id \d+>");
    assert_eq!(resolved.module.as_deref(), Some("blog"));
    assert_eq!(resolved.controller.as_deref(), Some("posts"));
    assert_eq!(resolved.action.as_deref(), Some("show"));
    assert_eq!(resolved.params.get("id"), Some("42"));
    assert_eq!(resolved.handler, None);
}

#[tokio::test]
async fn test_unrouted_request_passes_through() {
    let service = ServiceBuilder::new().layer(layer()).service_fn(echo);

    let request = http::Request::post("/posts/42").body(()).unwrap();
    assert_eq!(service.clone().oneshot(request).await.unwrap(), None);

    let request = http::Request::get("/elsewhere").body(()).unwrap();
    assert_eq!(service.oneshot(request).await.unwrap(), None);
}

#[tokio::test]
async fn test_handler_is_cloned_into_extensions() {
    let mut builder = RouterBuilder::new();
    builder
        .insert(Route::new("health").unwrap().with_handler("health-check"))
        .unwrap();
    let layer = RouteLayer::new(Arc::new(builder.build()));

    let service = ServiceBuilder::new().layer(layer).service_fn(
        |request: http::Request<()>| async move {
            Ok::<_, Infallible>(request.extensions().get::<Resolved<&'static str>>().cloned())
        },
    );

    let request = http::Request::get("/health").body(()).unwrap();
    let resolved = service.oneshot(request).await.unwrap().unwrap();
    assert_eq!(resolved.handler, Some("health-check"));
    assert_eq!(resolved.controller, None);
}
