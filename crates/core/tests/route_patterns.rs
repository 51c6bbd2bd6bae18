use moviehub_core::routing::{PatternError, RoutePattern, Segment};

#[test]
fn parses_literal_and_param_segments() {
    let pattern = RoutePattern::parse("/movie/:id").expect("parse");
    assert_eq!(
        pattern.segments(),
        &[Segment::Literal("movie".to_string()), Segment::Param("id".to_string())]
    );
    assert_eq!(pattern.param_name(), Some("id"));
    assert!(pattern.is_parameterized());
    assert_eq!(pattern.to_string(), "/movie/:id");
}

#[test]
fn root_pattern_is_literal() {
    let pattern = RoutePattern::parse("/").expect("parse root");
    assert!(!pattern.is_parameterized());
    assert_eq!(pattern.match_segments("/"), Some(None));
}

#[test]
fn rejects_malformed_patterns() {
    assert_eq!(
        RoutePattern::parse("movie/:id"),
        Err(PatternError::MissingLeadingSlash("movie/:id".to_string()))
    );
    assert_eq!(
        RoutePattern::parse("/movie/:"),
        Err(PatternError::EmptyParamName("/movie/:".to_string()))
    );
    assert_eq!(
        RoutePattern::parse("/a/:x/:y"),
        Err(PatternError::TooManyParams("/a/:x/:y".to_string()))
    );
}

#[test]
fn param_segment_requires_non_empty_value_and_equal_length() {
    let pattern: RoutePattern = "/movie/:id".parse().expect("parse");
    assert_eq!(
        pattern.match_segments("/movie/tt0111161"),
        Some(Some(("id".to_string(), "tt0111161".to_string())))
    );
    assert_eq!(pattern.match_segments("/movie/"), None);
    assert_eq!(pattern.match_segments("/movie/tt1/cast"), None);
    assert_eq!(pattern.match_segments("/movies-archive"), None);
    assert_eq!(pattern.match_segments("movie/tt1"), None);
}

#[test]
fn reverse_fills_the_parameter() {
    let pattern = RoutePattern::parse("/movie/:id").expect("parse");
    assert_eq!(pattern.reverse("tt5").as_deref(), Some("/movie/tt5"));
    assert_eq!(pattern.reverse(""), None);
    assert_eq!(pattern.reverse("a/b"), None);

    let literal = RoutePattern::parse("/favorites").expect("parse");
    assert_eq!(literal.reverse("ignored").as_deref(), Some("/favorites"));
}
