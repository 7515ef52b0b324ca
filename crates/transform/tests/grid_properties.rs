use gridshim_core::{Template, TransformError};
use gridshim_transform::{Declaration, DeclarationList, Transformer};
use pretty_assertions::assert_eq;

/// 测试用 emitter：原样返回 (字面量, 替换值)
fn css(t: &Template) -> (Vec<&'static str>, Vec<String>) {
    (t.literals().to_vec(), t.substitutions().to_vec())
}

fn mixin(declaration: &str) -> (Vec<&'static str>, Vec<String>) {
    Transformer::new(css).transform(declaration).unwrap()
}

fn mixin_err(declaration: &str) -> TransformError {
    Transformer::new(css).transform(declaration).unwrap_err()
}

fn subs(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_display_static() {
    assert_eq!(mixin("display: static"), (vec!["display:", ";"], subs(&["static"])));
}

#[test]
fn test_display_grid() {
    assert_eq!(
        mixin("display: grid"),
        (vec!["display:-ms-grid;display:grid;"], vec![])
    );
}

#[test]
fn test_grid_column_shorthand() {
    assert_eq!(
        mixin("grid-column: 1 / 2"),
        (
            vec!["-ms-grid-column:", ";-ms-grid-column-span:", ";grid-column:", ";"],
            subs(&["1", "1", "1 / 2"])
        )
    );
}

#[test]
fn test_grid_column_optional_span() {
    assert_eq!(
        mixin("grid-column: 1"),
        (
            vec!["-ms-grid-column:", ";-ms-grid-column-span:", ";grid-column:", ";"],
            subs(&["1", "1", "1"])
        )
    );
}

#[test]
fn test_grid_row_shorthand() {
    assert_eq!(
        mixin("grid-row: 1 / 2"),
        (
            vec!["-ms-grid-row:", ";-ms-grid-row-span:", ";grid-row:", ";"],
            subs(&["1", "1", "1 / 2"])
        )
    );
}

#[test]
fn test_grid_row_optional_span() {
    assert_eq!(
        mixin("grid-row: 1"),
        (
            vec!["-ms-grid-row:", ";-ms-grid-row-span:", ";grid-row:", ";"],
            subs(&["1", "1", "1"])
        )
    );
}

#[test]
fn test_grid_template_columns() {
    let literals = vec!["-ms-grid-columns:", ";grid-template-columns:", ";"];
    let cases = [
        ("1fr", "1fr"),
        ("1fr 2fr 3fr", "1fr 2fr 3fr"),
        ("repeat(12, 1fr 20px) 1fr", "(1fr 20px)[12] 1fr"),
        ("minmax(200px, 500px)", "minmax(200px, 500px)"),
        ("repeat(12, minmax(200px, 1fr))", "(minmax(200px, 1fr))[12]"),
    ];

    for (value, fallback) in cases {
        assert_eq!(
            mixin(&format!("grid-template-columns: {}", value)),
            (literals.clone(), subs(&[fallback, value])),
            "value: {}",
            value
        );
    }
}

#[test]
fn test_grid_template_rows() {
    let literals = vec!["-ms-grid-rows:", ";grid-template-rows:", ";"];
    let cases = [
        ("1fr", "1fr"),
        ("1fr 2fr 3fr", "1fr 2fr 3fr"),
        ("repeat(12, 1fr 20px) 1fr", "(1fr 20px)[12] 1fr"),
        ("minmax(200px, 500px)", "minmax(200px, 500px)"),
        ("repeat(12, minmax(200px, 1fr))", "(minmax(200px, 1fr))[12]"),
    ];

    for (value, fallback) in cases {
        assert_eq!(
            mixin(&format!("grid-template-rows: {}", value)),
            (literals.clone(), subs(&[fallback, value])),
            "value: {}",
            value
        );
    }
}

#[test]
fn test_auto_placement_rejected() {
    for key in ["grid-template-columns", "grid-template-rows"] {
        assert_eq!(
            mixin_err(&format!("{}: repeat(auto-fit, minmax(200px, 1fr))", key)),
            TransformError::UnsupportedFeature("auto-fit".into())
        );
        assert_eq!(
            mixin_err(&format!("{}: repeat(auto-fill, minmax(200px, 1fr))", key)),
            TransformError::UnsupportedFeature("auto-fill".into())
        );
    }
}

#[test]
fn test_align_self() {
    assert_eq!(
        mixin("align-self: center"),
        (
            vec!["-ms-grid-row-align:", ";align-self:", ";"],
            subs(&["center", "center"])
        )
    );
}

#[test]
fn test_justify_self() {
    assert_eq!(
        mixin("justify-self: center"),
        (
            vec!["-ms-grid-column-align:", ";justify-self:", ";"],
            subs(&["center", "center"])
        )
    );
}

#[test]
fn test_all_multiple_rules() {
    let batch = Transformer::new(css)
        .all(["display: grid", "grid-template-columns: 1fr 2fr"])
        .unwrap();

    assert_eq!(
        batch.into_vec(),
        vec![
            (vec!["", "", ""], subs(&["", ""])),
            (vec!["display:-ms-grid;display:grid;"], vec![]),
            (
                vec!["-ms-grid-columns:", ";grid-template-columns:", ";"],
                subs(&["1fr 2fr", "1fr 2fr"])
            ),
        ]
    );
}

#[test]
fn test_invalid_keyword() {
    let err = mixin_err("position: absolute");
    assert_eq!(err, TransformError::UnsupportedProperty("position".into()));
    assert!(err.to_string().contains("position"));
}

#[test]
fn test_trailing_semicolon_and_whitespace() {
    assert_eq!(
        mixin("  align-self :  end ;  "),
        (
            vec!["-ms-grid-row-align:", ";align-self:", ";"],
            subs(&["end", "end"])
        )
    );
}

#[test]
fn test_declaration_list_output() {
    let decls = Transformer::new(DeclarationList)
        .transform("grid-template-columns: repeat(2, 100px) 1fr;")
        .unwrap();
    assert_eq!(
        decls,
        vec![
            Declaration::new("-ms-grid-columns", "(100px)[2] 1fr"),
            Declaration::new("grid-template-columns", "repeat(2, 100px) 1fr"),
        ]
    );
}
