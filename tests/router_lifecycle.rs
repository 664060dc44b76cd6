use nyroute::{MatchFamily, Methods, Router, RouterError};

#[test]
fn router_when_never_built_then_find_is_a_miss() {
    let router = Router::default();
    router
        .add(None, b"/pending", Methods::GET, MatchFamily::Exact, 0, 1)
        .expect("route should register");

    assert!(router.find(None, b"/pending", Methods::GET).is_none());
}

#[test]
fn router_when_add_called_with_empty_path_then_returns_invalid() {
    let router = Router::default();
    let err = router.add(None, b"", Methods::GET, MatchFamily::Exact, 0, 1);
    assert!(matches!(err, Err(RouterError::EmptyPath)));
}

#[test]
fn router_when_add_called_with_zero_methods_then_returns_invalid() {
    let router = Router::default();
    let err = router.add(None, b"/x", Methods::empty(), MatchFamily::Exact, 0, 1);
    assert!(matches!(err, Err(RouterError::ZeroMethods)));
}

#[test]
fn router_when_add_called_after_build_then_not_visible_until_rebuild() {
    let router = Router::default();
    router
        .add(None, b"/once", Methods::GET, MatchFamily::Exact, 0, 1)
        .unwrap();
    router.build();

    router
        .add(None, b"/twice", Methods::GET, MatchFamily::Exact, 0, 2)
        .unwrap();
    assert!(router.find(None, b"/twice", Methods::GET).is_none());

    router.build();
    assert_eq!(
        router.find(None, b"/twice", Methods::GET).unwrap().handler,
        2
    );
}

#[test]
fn router_when_built_twice_in_a_row_then_outcomes_are_identical() {
    let router = Router::default();
    router
        .add(None, b"/a", Methods::ALL, MatchFamily::Exact, 0, 1)
        .unwrap();
    router
        .add(None, b"/a/b", Methods::ALL, MatchFamily::Prefix, 0, 2)
        .unwrap();

    router.build();
    let before: Vec<_> = ["/a", "/a/b", "/a/b/c", "/missing"]
        .iter()
        .map(|p| router.find(None, p.as_bytes(), Methods::GET).map(|m| m.handler))
        .collect();

    router.build();
    let after: Vec<_> = ["/a", "/a/b", "/a/b/c", "/missing"]
        .iter()
        .map(|p| router.find(None, p.as_bytes(), Methods::GET).map(|m| m.handler))
        .collect();

    assert_eq!(before, after);
}

#[test]
fn router_when_cleared_then_registrations_and_index_are_both_empty() {
    let router = Router::default();
    router
        .add(None, b"/x", Methods::ALL, MatchFamily::Exact, 0, 1)
        .unwrap();
    router.build();
    assert_eq!(router.count(), 1);

    router.clear();
    assert_eq!(router.count(), 0);
    assert!(router.find(None, b"/x", Methods::GET).is_none());
}

#[test]
fn router_when_counting_then_reflects_registrations_not_build_state() {
    let router = Router::default();
    assert_eq!(router.count(), 0);
    for i in 0..5 {
        router
            .add(
                None,
                format!("/r{i}").as_bytes(),
                Methods::ALL,
                MatchFamily::Exact,
                0,
                i,
            )
            .unwrap();
    }
    assert_eq!(router.count(), 5);
    router.build();
    assert_eq!(router.count(), 5);
}
