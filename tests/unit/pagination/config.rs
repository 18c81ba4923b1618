use super::*;

#[test]
fn empty_json_yields_defaults() {
    let c = PaginationConfig::from_json("{}").unwrap();
    assert_eq!(c, PaginationConfig::default());
    assert_eq!(c.inactive_dot_opacity, 0.5);
    assert_eq!(c.inactive_dot_scale, 0.5);
    assert_eq!(c.timing().duration_ms, 250);
    assert_eq!(c.spring(), SpringConfig::new(4.0, 50.0));
    assert_eq!(c.axis(), Axis::Horizontal);
}

#[test]
fn colors_parse_from_strings() {
    let c = PaginationConfig::from_json(
        r##"{"dot_color": "#ff0000", "inactive_dot_color": "rgba(0, 0, 0, 0.5)"}"##,
    )
    .unwrap();
    assert_eq!(
        c.color_pair(),
        Some((Rgba8::opaque(255, 0, 0), Rgba8::new(0, 0, 0, 128)))
    );
}

#[test]
fn bad_color_is_a_serde_error() {
    let err = PaginationConfig::from_json(r#"{"dot_color": "mauve"}"#).unwrap_err();
    assert!(matches!(err, CarouselError::Serde(_)));
}

#[test]
fn consistent_config_reports_nothing() {
    assert!(PaginationConfig::default().inconsistencies(false).is_empty());
}

#[test]
fn half_configured_pairs_are_reported() {
    let c = PaginationConfig {
        dot_color: Some(Rgba8::opaque(1, 2, 3)),
        inactive_dot_element: Some("ring".into()),
        tappable_dots: true,
        ..PaginationConfig::default()
    };
    assert!(c.color_pair().is_none());
    assert!(c.element_pair().is_none());
    assert_eq!(c.inconsistencies(false).len(), 3);
    assert_eq!(c.inconsistencies(true).len(), 2);
}
