use crate::{DEFAULT_FRAME_COUNT, Error, InputMode, MAX_FRAME_COUNT, TextureSet, ViewerConfig};

#[test]
fn default_config_is_valid_and_matches_turntable_ring() {
    let config = ViewerConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.frame_count, DEFAULT_FRAME_COUNT);
    assert_eq!(config.frame_count, 36);
    assert_eq!(config.canvas_id, "canvas");
    assert_eq!(config.viewport_divisor, 1.2);
    assert_eq!(config.image_scale, 0.5);
    assert_eq!(config.input_mode, None);
    assert!(config.mobile_agents.iter().any(|a| a == "iPhone"));
}

#[test]
fn validate_rejects_non_positive_divisor_and_scale() {
    for divisor in [0.0, -1.2, f64::NAN, f64::INFINITY] {
        let config = ViewerConfig {
            viewport_divisor: divisor,
            ..ViewerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfig { .. })
        ));
    }

    let config = ViewerConfig {
        image_scale: 0.0,
        ..ViewerConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("image scale"), "{err}");
}

#[test]
fn validate_rejects_empty_paths() {
    let config = ViewerConfig {
        base_path: "  ".to_string(),
        ..ViewerConfig::default()
    };
    assert!(config.validate().is_err());

    let config = ViewerConfig {
        extension: String::new(),
        ..ViewerConfig::default()
    };
    assert!(config.validate().is_err());

    let config = ViewerConfig {
        canvas_id: String::new(),
        ..ViewerConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn validate_bounds_frame_count() {
    let config = ViewerConfig {
        frame_count: MAX_FRAME_COUNT,
        ..ViewerConfig::default()
    };
    assert!(config.validate().is_ok());

    let config = ViewerConfig {
        frame_count: MAX_FRAME_COUNT + 1,
        ..ViewerConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { .. }), "{err:?}");
    assert!(err.to_string().contains("frame count"), "{err}");
}

#[test]
fn texture_urls_are_numbered_from_one() {
    let textures = TextureSet::from_config(&ViewerConfig::default());
    assert_eq!(textures.len(), 36);
    assert_eq!(textures.url(0), Some("/assets/1.jpg"));
    assert_eq!(textures.url(35), Some("/assets/36.jpg"));
    assert_eq!(textures.url(36), None);
}

#[test]
fn texture_urls_normalize_separators() {
    let textures = TextureSet::new("cdn/products/chair/", ".png", 2);
    let urls: Vec<_> = textures.iter().collect();
    assert_eq!(
        urls,
        vec![(0, "cdn/products/chair/1.png"), (1, "cdn/products/chair/2.png")]
    );
}

#[test]
fn empty_ring_has_no_textures() {
    let textures = TextureSet::new("/assets", "jpg", 0);
    assert!(textures.is_empty());
    assert_eq!(textures.iter().count(), 0);
}

#[cfg(feature = "json")]
#[test]
fn json_config_fills_missing_fields_with_defaults() {
    let config = ViewerConfig::from_json_str(
        r#"{ "frameCount": 24, "basePath": "/spin/shoe", "inputMode": "touch" }"#,
    )
    .unwrap();
    assert_eq!(config.frame_count, 24);
    assert_eq!(config.base_path, "/spin/shoe");
    assert_eq!(config.extension, "jpg");
    assert_eq!(config.input_mode, Some(InputMode::Touch));
    assert_eq!(config.redraw_timeout_ms, crate::DEFAULT_REDRAW_TIMEOUT_MS);
}

#[cfg(feature = "json")]
#[test]
fn json_config_reports_parse_and_validation_errors() {
    let err = ViewerConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, Error::ConfigParse { .. }), "{err:?}");

    let err = ViewerConfig::from_json_str(r#"{ "viewportDivisor": 0 }"#).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { .. }), "{err:?}");

    let err = ViewerConfig::from_json_str(r#"{ "frameCount": 4000000000 }"#).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { .. }), "{err:?}");
}

#[test]
fn input_mode_display_names() {
    assert_eq!(InputMode::Touch.to_string(), "touch");
    assert_eq!(InputMode::Pointer.to_string(), "pointer");
}
