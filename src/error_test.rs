use super::*;

#[test]
fn syntax_codes_are_distinct() {
    let errors = [
        SyntaxError::NoDescription,
        SyntaxError::Malformed { found: 'x', offset: 0 },
        SyntaxError::TrailingInput { offset: 0 },
        SyntaxError::UnexpectedChar { found: 'x', offset: 0 },
        SyntaxError::MismatchedClose { expected: ')', found: ']', offset: 0 },
        SyntaxError::Unterminated { open: '(', offset: 0 },
        SyntaxError::MissingPrefix { offset: 0 },
        SyntaxError::UnknownPrefix { prefix: "X".into(), offset: 0 },
        SyntaxError::DefinitionsUnsupported { offset: 0 },
        SyntaxError::TooDeep { limit: 1, offset: 0 },
    ];
    let mut codes: Vec<&str> = errors.iter().map(ErrorCode::error_code).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), errors.len());
}

#[test]
fn offset_is_reported_except_for_empty_input() {
    assert_eq!(SyntaxError::NoDescription.offset(), None);
    assert_eq!(SyntaxError::MissingPrefix { offset: 7 }.offset(), Some(7));
    assert_eq!(SyntaxError::TooDeep { limit: 3, offset: 9 }.offset(), Some(9));
}

#[test]
fn parse_error_delegates_its_code() {
    let syntax: ParseError = SyntaxError::NoDescription.into();
    assert_eq!(syntax.error_code(), "E_NO_DESCRIPTION");

    let structure: ParseError = StructureError::NoComponents { shape: Shape::Unit }.into();
    assert_eq!(structure.error_code(), "E_NO_COMPONENTS");
    assert_eq!(structure.to_string(), "structure error: unit needs at least one component");
}

#[test]
fn leaf_error_names_the_rune() {
    let err = RenderError::Leaf {
        name: "fire".into(),
        source: AssetError::NotFound { name: "fire".into() },
    };
    assert_eq!(err.error_code(), "E_RENDER_LEAF");
    assert_eq!(err.to_string(), "cannot draw rune 'fire': glyph not found: fire");
    assert!(!err.retryable());
}

#[test]
fn io_failures_are_retryable() {
    let io = AssetError::Io {
        name: "fire".into(),
        source: std::io::Error::other("disk went away"),
    };
    assert!(io.retryable());
    assert_eq!(io.error_code(), "E_ASSET_IO");

    let leaf = RenderError::Leaf { name: "fire".into(), source: io };
    assert!(leaf.retryable());
}

#[test]
fn surface_and_structure_errors_pass_through_render() {
    let surface: RenderError = SurfaceError::new("closed").into();
    assert_eq!(surface.error_code(), "E_SURFACE");
    assert_eq!(surface.to_string(), "surface error: closed");

    let structure: RenderError = StructureError::TooManyComponents { shape: Shape::Spell, count: 3 }.into();
    assert_eq!(structure.error_code(), "E_TOO_MANY_COMPONENTS");
}

#[test]
fn config_error_codes() {
    let parse = ConfigError::Parse { key: "SIGIL_SIDE", value: "wide".into() };
    assert_eq!(parse.error_code(), "E_CONFIG_PARSE");
    assert_eq!(parse.to_string(), "config parse failed: SIGIL_SIDE=wide");

    let range = ConfigError::NotPositive { key: "SIGIL_SIDE", value: "-1".into() };
    assert_eq!(range.error_code(), "E_CONFIG_RANGE");
}

#[test]
fn describe_marks_retryable_failures() {
    let missing = AssetError::NotFound { name: "fire".into() };
    assert_eq!(describe(&missing), "error [E_ASSET_NOT_FOUND]: glyph not found: fire");

    let io = RenderError::Leaf {
        name: "fire".into(),
        source: AssetError::Io { name: "fire".into(), source: std::io::Error::other("busy") },
    };
    assert_eq!(
        describe(&io),
        "error [E_RENDER_LEAF] (retryable): cannot draw rune 'fire': glyph 'fire' could not be read: busy"
    );
}
