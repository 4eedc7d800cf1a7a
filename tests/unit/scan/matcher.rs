use super::*;

#[test]
fn matches_whole_path_only() {
    let m = PathMatcher::new(r".*\.png").unwrap();
    assert!(m.matches("/a.png"));
    assert!(m.matches("/sub/b.png"));
    assert!(!m.matches("/a.png.bak"));
    assert!(!m.matches("/a.jpg"));

    let m = PathMatcher::new(r"b\.png").unwrap();
    assert!(!m.matches("/sub/b.png"));
    assert!(m.matches("b.png"));
}

#[test]
fn alternation_is_anchored_as_a_whole() {
    let m = PathMatcher::new(r"/a\.png|/b\.png").unwrap();
    assert!(m.matches("/a.png"));
    assert!(m.matches("/b.png"));
    assert!(!m.matches("/a.png/b.png"));
    assert!(!m.matches("/x/b.png"));
}

#[test]
fn paths_are_matched_with_leading_slash() {
    let m = PathMatcher::new(r"/sub/.*").unwrap();
    assert!(m.matches("/sub/b.png"));
    assert!(!m.matches("sub/b.png"));
}

#[test]
fn invalid_pattern_is_rejected() {
    let err = PathMatcher::new("(").unwrap_err();
    assert!(matches!(err, ImgHeaderError::InvalidPattern { ref pattern, .. } if pattern == "("));
}

#[test]
fn unbalanced_group_is_not_rescued_by_anchoring() {
    assert!(PathMatcher::new("a)(b").is_err());
}

#[test]
fn keeps_original_source() {
    let m = PathMatcher::new(r".*\.jpe?g").unwrap();
    assert_eq!(m.as_str(), r".*\.jpe?g");
}
