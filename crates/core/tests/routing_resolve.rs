use moviehub_core::routing::{resolve, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Home,
    Search,
    Detail,
    Favorites,
    NewRelease,
}

fn app_routes() -> Vec<Route<View>> {
    vec![
        Route::new("/", View::Home).expect("route"),
        Route::new("/search", View::Search).expect("route"),
        Route::new("/movie/:id", View::Detail).expect("route"),
        Route::new("/favorites", View::Favorites).expect("route"),
    ]
}

#[test]
fn extracts_id_parameter() {
    let routes = vec![Route::new("/movie/:id", View::Detail).expect("route")];
    let matched = resolve("/movie/tt1375666", &routes).expect("should match");
    assert_eq!(*matched.view(), View::Detail);
    assert_eq!(matched.param("id"), Some("tt1375666"));
    assert_eq!(matched.params.len(), 1);
}

#[test]
fn literal_routes_have_empty_params() {
    let routes = app_routes();
    let matched = resolve("/search", &routes).expect("should match");
    assert_eq!(*matched.view(), View::Search);
    assert!(matched.params.is_empty());

    let home = resolve("/", &routes).expect("root should match");
    assert_eq!(*home.view(), View::Home);
}

#[test]
fn unknown_path_is_no_match() {
    let routes = app_routes();
    assert!(resolve("/unknown", &routes).is_none());
    assert!(resolve("/movies-archive", &routes).is_none());
    assert!(resolve("/movie/", &routes).is_none());
    assert!(resolve("/movie/tt1/extra", &routes).is_none());
}

#[test]
fn exact_match_beats_earlier_parameterized_route() {
    let routes = vec![
        Route::new("/movie/:id", View::Detail).expect("route"),
        Route::new("/movie/new", View::NewRelease).expect("route"),
    ];
    let matched = resolve("/movie/new", &routes).expect("should match");
    assert_eq!(*matched.view(), View::NewRelease);
    assert!(matched.params.is_empty());

    let other = resolve("/movie/tt9", &routes).expect("should match");
    assert_eq!(*other.view(), View::Detail);
}

#[test]
fn first_parameterized_route_in_declaration_order_wins() {
    let routes = vec![
        Route::new("/movie/:id", View::Detail).expect("route"),
        Route::new("/movie/:slug", View::NewRelease).expect("route"),
    ];
    let matched = resolve("/movie/x", &routes).expect("should match");
    assert_eq!(*matched.view(), View::Detail);
    assert_eq!(matched.param("id"), Some("x"));
    assert_eq!(matched.param("slug"), None);
}

#[test]
fn resolution_is_deterministic() {
    let routes = app_routes();
    for path in ["/", "/search", "/movie/tt5", "/favorites", "/nope", "/movie/"] {
        let first = resolve(path, &routes);
        for _ in 0..3 {
            assert_eq!(resolve(path, &routes), first, "path {path}");
        }
    }
}
