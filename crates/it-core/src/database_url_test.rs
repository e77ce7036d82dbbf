use super::*;

#[test]
fn test_relative_url_anchored_at_home() {
    let url = resolve_database_url(
        Path::new("/opt/irontest"),
        "jdbc:h2:./data/irontest;AUTO_SERVER=TRUE",
    )
    .unwrap();
    assert_eq!(url, "jdbc:h2:/opt/irontest/data/irontest;IFEXISTS=TRUE");
}

#[test]
fn test_absolute_url_path_unchanged() {
    for home in ["/opt/irontest", "/somewhere/else", "relative/home"] {
        let url =
            resolve_database_url(Path::new(home), "jdbc:h2:/var/irontest/data/irontest").unwrap();
        assert_eq!(url, "jdbc:h2:/var/irontest/data/irontest;IFEXISTS=TRUE");
    }
}

#[test]
fn test_all_configured_params_dropped() {
    let url = resolve_database_url(
        Path::new("/opt/irontest"),
        "jdbc:h2:/data/system;AUTO_SERVER=TRUE;IFEXISTS=FALSE;MODE=MySQL",
    )
    .unwrap();
    assert_eq!(url, "jdbc:h2:/data/system;IFEXISTS=TRUE");
}

#[test]
fn test_only_leading_dot_slash_is_rewritten() {
    let url =
        resolve_database_url(Path::new("/home/it"), "jdbc:h2:./db/./system").unwrap();
    assert_eq!(url, "jdbc:h2:/home/it/db/./system;IFEXISTS=TRUE");
}

#[test]
fn test_non_h2_url_rejected() {
    let err = resolve_database_url(Path::new("/opt"), "jdbc:postgresql://db/irontest").unwrap_err();
    assert!(matches!(err, CoreError::InvalidDatabaseUrl { .. }));
}

#[test]
fn test_empty_path_rejected() {
    let err = resolve_database_url(Path::new("/opt"), "jdbc:h2:;AUTO_SERVER=TRUE").unwrap_err();
    assert!(matches!(err, CoreError::InvalidDatabaseUrl { .. }));
}

#[test]
fn test_parse_resolved_url() {
    let url = DatabaseUrl::parse("jdbc:h2:/opt/irontest/data/irontest;IFEXISTS=TRUE").unwrap();
    assert_eq!(url.path, PathBuf::from("/opt/irontest/data/irontest"));
    assert_eq!(url.param("ifexists"), Some("TRUE"));
    assert!(url.requires_existing());
}

#[test]
fn test_parse_without_guard() {
    let url = DatabaseUrl::parse("jdbc:h2:/data/system").unwrap();
    assert!(url.params.is_empty());
    assert!(!url.requires_existing());
}

#[test]
fn test_guard_false_does_not_require_existing() {
    let url = DatabaseUrl::parse("jdbc:h2:/data/system;IFEXISTS=FALSE").unwrap();
    assert!(!url.requires_existing());
}

#[test]
fn test_parse_rejects_bare_parameter() {
    let err = DatabaseUrl::parse("jdbc:h2:/data/system;AUTO_SERVER").unwrap_err();
    assert!(matches!(err, CoreError::InvalidDatabaseUrl { .. }));
}

#[test]
fn test_display_matches_resolved_form() {
    let raw = "jdbc:h2:/opt/irontest/data/irontest;IFEXISTS=TRUE";
    assert_eq!(DatabaseUrl::parse(raw).unwrap().to_string(), raw);
}
