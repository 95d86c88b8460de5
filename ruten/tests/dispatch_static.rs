use ruten::testing::RecordingStrategy;
use ruten::{Action, CollectionBuilder, DispatchEngine, HttpMethod, RouteError};

fn action(tag: &str) -> Action<()> {
    Action::controller(tag, "run")
}

#[test]
fn test_static_route_dispatches_with_empty_params() {
    let collection = CollectionBuilder::new()
        .route(HttpMethod::Get, "/users", action("index"))
        .unwrap()
        .build()
        .unwrap();
    let strategy: RecordingStrategy<()> = RecordingStrategy::new();
    let engine = DispatchEngine::new(collection, strategy.clone());

    engine.dispatch("GET", "/users").unwrap();

    let calls = strategy.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, action("index"));
    assert!(calls[0].1.is_empty());
}

#[test]
fn test_static_wins_over_dynamic() {
    let collection = CollectionBuilder::new()
        .route(HttpMethod::Get, "/users/{id}", action("show"))
        .unwrap()
        .route(HttpMethod::Get, "/users/new", action("new"))
        .unwrap()
        .build()
        .unwrap();
    let strategy: RecordingStrategy<()> = RecordingStrategy::new();
    let engine = DispatchEngine::new(collection, strategy.clone());

    engine.dispatch("GET", "/users/new").unwrap();

    let calls = strategy.calls();
    assert_eq!(calls[0].0, action("new"));
    assert!(calls[0].1.is_empty());
}

#[test]
fn test_method_name_is_case_insensitive() {
    let collection = CollectionBuilder::new()
        .route(HttpMethod::Get, "/users", action("index"))
        .unwrap()
        .build()
        .unwrap();
    let strategy: RecordingStrategy<()> = RecordingStrategy::new();
    let engine = DispatchEngine::new(collection, strategy.clone());

    engine.dispatch("get", "/users").unwrap();
    engine.dispatch("Get", "/users").unwrap();

    assert_eq!(strategy.count(), 2);
}

#[test]
fn test_unrecognized_method_is_rejected_before_routing() {
    let collection = CollectionBuilder::new()
        .route(HttpMethod::Get, "/users", action("index"))
        .unwrap()
        .build()
        .unwrap();
    let strategy: RecordingStrategy<()> = RecordingStrategy::new();
    let engine = DispatchEngine::new(collection, strategy.clone());

    let err = engine.dispatch("TRACE", "/users").unwrap_err();
    assert_eq!(
        err,
        RouteError::UnsupportedMethod {
            method: "TRACE".to_string(),
        }
    );
    assert_eq!(strategy.count(), 0);
}

#[test]
fn test_malformed_uri_is_rejected() {
    let collection = CollectionBuilder::new()
        .route(HttpMethod::Get, "/users", action("index"))
        .unwrap()
        .build()
        .unwrap();
    let strategy: RecordingStrategy<()> = RecordingStrategy::new();
    let engine = DispatchEngine::new(collection, strategy.clone());

    let err = engine.dispatch("GET", "/fo o").unwrap_err();
    assert!(matches!(err, RouteError::MalformedUri { .. }));
}

#[test]
fn test_query_string_does_not_affect_matching() {
    let collection = CollectionBuilder::new()
        .route(HttpMethod::Get, "/users", action("index"))
        .unwrap()
        .build()
        .unwrap();
    let strategy: RecordingStrategy<()> = RecordingStrategy::new();
    let engine = DispatchEngine::new(collection, strategy.clone());

    engine.dispatch("GET", "/users?page=2&sort=name").unwrap();
    assert_eq!(strategy.count(), 1);
}
