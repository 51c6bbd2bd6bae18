use moviehub_core::routing::{MemoryHistory, Route, Router, RouterContext, RouterError};

fn home_router() -> Router<&'static str, MemoryHistory> {
    let routes = vec![
        Route::new("/", "home").expect("route"),
        Route::new("/favorites", "favorites").expect("route"),
    ];
    Router::new(routes, MemoryHistory::new("/"))
}

#[test]
fn empty_context_fails_fast() {
    let mut ctx: RouterContext<&'static str, MemoryHistory> = RouterContext::empty();
    assert!(!ctx.is_initialized());
    assert_eq!(ctx.router().unwrap_err(), RouterError::OutsideContext);
    assert_eq!(ctx.current_path().unwrap_err(), RouterError::OutsideContext);
    assert_eq!(ctx.navigate("/favorites").unwrap_err(), RouterError::OutsideContext);
}

#[test]
fn provided_context_forwards_to_router() {
    let mut ctx = RouterContext::provide(home_router());
    assert!(ctx.is_initialized());
    assert_eq!(ctx.current_path().expect("path"), "/");

    ctx.navigate("/favorites").expect("navigate");
    let router = ctx.router().expect("router");
    assert_eq!(router.render(), Some(&"favorites"));
}

#[test]
fn teardown_ends_the_router_lifecycle() {
    let mut ctx = RouterContext::provide(home_router());
    let router = ctx.teardown().expect("router was installed");
    assert_eq!(router.current_path(), "/");

    assert!(!ctx.is_initialized());
    assert_eq!(ctx.router_mut().unwrap_err(), RouterError::OutsideContext);
}
