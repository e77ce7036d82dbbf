use super::*;

fn v(s: &str) -> SchemaVersion {
    SchemaVersion::parse(s).unwrap()
}

#[test]
fn test_parse_full_version() {
    let version = v("2.1.3");
    assert_eq!(version, SchemaVersion::new(2, 1, 3));
    assert!(!version.is_snapshot());
}

#[test]
fn test_parse_qualifier() {
    let version = v("3.0.0-SNAPSHOT");
    assert_eq!(version.qualifier.as_deref(), Some("SNAPSHOT"));
    assert!(version.is_snapshot());
}

#[test]
fn test_lowercase_snapshot_is_not_snapshot() {
    assert!(!v("3.0.0-snapshot").is_snapshot());
    assert!(!v("3.0.0-RC1").is_snapshot());
}

#[test]
fn test_missing_components_default_to_zero() {
    assert_eq!(v("1.2"), v("1.2.0"));
    assert_eq!(v("4"), SchemaVersion::new(4, 0, 0));
}

#[test]
fn test_parse_trims_whitespace() {
    assert_eq!(v("  0.9.1\n"), SchemaVersion::new(0, 9, 1));
}

#[test]
fn test_parse_rejects_garbage() {
    for input in ["", "   ", "a.b.c", "1..2", "1.2.3.4", "1.2.3-", "-SNAPSHOT", "1.+2"] {
        let err = SchemaVersion::parse(input).unwrap_err();
        assert!(
            matches!(err, CoreError::InvalidVersion { .. }),
            "expected InvalidVersion for {input:?}, got {err:?}"
        );
    }
}

#[test]
fn test_numeric_ordering() {
    assert!(v("2.1.0") < v("2.1.1"));
    assert!(v("2.1.1") < v("2.2.0"));
    assert!(v("2.2.0") < v("10.0.0"));
    assert!(v("1.10.0") > v("1.9.9"));
}

#[test]
fn test_ordering_is_antisymmetric() {
    let versions = ["0.1.0", "1.0.0", "1.0.1", "1.2.0", "1.10.0", "2.0.0"];
    for a in versions {
        for b in versions {
            let ab = v(a).cmp(&v(b));
            let ba = v(b).cmp(&v(a));
            assert_eq!(ab, ba.reverse(), "{a} vs {b}");
            assert_eq!(ab == Ordering::Equal, a == b, "{a} vs {b}");
        }
    }
}

#[test]
fn test_release_ranks_above_qualified() {
    assert!(v("1.0.0-SNAPSHOT") < v("1.0.0"));
    assert!(v("1.0.0-SNAPSHOT") > v("0.9.9"));
    assert!(v("1.0.0-RC1") < v("1.0.0-RC2"));
}

#[test]
fn test_qualifier_numbers_compare_as_integers() {
    assert!(v("1.3.0-RC10") > v("1.3.0-RC9"));
    assert!(v("1.3.0-beta-2") < v("1.3.0-beta-11"));
    assert_eq!(v("1.3.0-RC10").cmp(&v("1.3.0-RC9")), Ordering::Greater);
}

#[test]
fn test_qualifiers_ignore_case() {
    assert_eq!(v("1.3.0-rc1"), v("1.3.0-RC1"));
    assert!(v("1.3.0-Beta") < v("1.3.0-rc"));
}

#[test]
fn test_well_known_qualifier_precedence() {
    let ordered = [
        "1.0.0-alpha",
        "1.0.0-beta",
        "1.0.0-milestone",
        "1.0.0-RC1",
        "1.0.0-SNAPSHOT",
        "1.0.0",
        "1.0.0-sp1",
    ];
    for pair in ordered.windows(2) {
        assert!(v(pair[0]) < v(pair[1]), "{} < {}", pair[0], pair[1]);
    }
    assert_eq!(v("1.0.0-ga"), v("1.0.0"));
    assert_eq!(v("1.0.0-final"), v("1.0.0"));
}

#[test]
fn test_display_round_trip() {
    assert_eq!(v("1.2").to_string(), "1.2.0");
    assert_eq!(v("3.0.0-SNAPSHOT").to_string(), "3.0.0-SNAPSHOT");
}

#[test]
fn test_from_str() {
    let version: SchemaVersion = "1.3.0".parse().unwrap();
    assert_eq!(version, SchemaVersion::new(1, 3, 0));
}
