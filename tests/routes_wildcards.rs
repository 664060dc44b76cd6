use nyroute::{MatchFamily, Methods, Router};

#[test]
fn terminal_wildcard_captures_remaining_bytes_including_slashes() {
    let router = Router::default();
    router
        .add(None, b"/file/*", Methods::GET, MatchFamily::Param, 0, 5)
        .unwrap();
    router.build();

    let hit = router.find(None, b"/file/a/b/c", Methods::GET).unwrap();
    assert_eq!(hit.handler, 5);
    assert_eq!(hit.match_family, MatchFamily::Param);
    assert_eq!(hit.params.len(), 1);
    assert_eq!(&*hit.params[0].name, "*");
    assert_eq!(hit.params[0].value(b"/file/a/b/c"), b"a/b/c");
}

#[test]
fn terminal_wildcard_matches_the_empty_remainder() {
    let router = Router::default();
    router
        .add(None, b"/file/*", Methods::GET, MatchFamily::Param, 0, 5)
        .unwrap();
    router.build();

    let hit = router.find(None, b"/file/", Methods::GET).unwrap();
    assert_eq!(hit.params[0].value(b"/file/"), b"");
}

#[test]
fn prefix_wildcard_normalizes_to_the_segment_boundary_at_registration() {
    let router = Router::default();
    router
        .add(None, b"/assets/*", Methods::ALL, MatchFamily::Prefix, 0, 9)
        .unwrap();
    router.build();

    assert!(router.find(None, b"/assets", Methods::GET).is_some());
    assert!(router.find(None, b"/assets/app.js", Methods::GET).is_some());
    assert!(router.find(None, b"/assets_old", Methods::GET).is_none());
}

#[test]
fn degenerate_param_pattern_starting_with_a_capture_lands_in_root_bucket() {
    let router = Router::default();
    router
        .add(None, b"{anything}", Methods::GET, MatchFamily::Param, 0, 1)
        .unwrap();
    router.build();

    let hit = router.find(None, b"whatever", Methods::GET).unwrap();
    assert_eq!(hit.handler, 1);
    assert_eq!(hit.params[0].value(b"whatever"), b"whatever");
}
