#![allow(dead_code)]

use wayfinder::{Route, Router, RouterBuilder};

// ============================================================================
// Route Tables
// ============================================================================

/// The classic catch-all: `[controller[/action[/id]]]` with `home::index`
/// filling whatever the path leaves out.
pub fn mvc_router() -> Router {
    let mut builder = RouterBuilder::new();
    builder
        .insert(
            Route::new(r"[<controller>[/<action>[/<id \d+>]]]")
                .unwrap()
                .to("home::index")
                .named("default"),
        )
        .unwrap();
    builder.build()
}

/// Build a router from `(template, target)` pairs, in order.
pub fn router_of(routes: &[(&str, &str)]) -> Router {
    let mut builder = RouterBuilder::new();
    for (template, target) in routes {
        builder.route(template, target).unwrap();
    }
    builder.build()
}

/// A blog-ish table mixing handler routes, method filters and modules.
pub fn blog_router() -> Router<&'static str> {
    let mut builder = RouterBuilder::new();
    builder
        .insert(Route::new("health").unwrap().with_handler("health-check"))
        .unwrap();
    builder
        .insert(
            Route::new(r"posts/<id \d+>")
                .unwrap()
                .method(wayfinder::Method::POST)
                .to("blog::posts::update")
                .named("posts.update"),
        )
        .unwrap();
    builder
        .insert(
            Route::new(r"posts/<id \d+>[/<slug>]")
                .unwrap()
                .to("blog::posts::show")
                .named("posts.show"),
        )
        .unwrap();
    builder.route("<controller>/<action>", "").unwrap();
    builder.build()
}
