use super::*;

#[test]
fn error_codes_are_distinct() {
    let errors = [
        UiError::NoWindow,
        UiError::NoDocument,
        UiError::NoDocumentElement,
        UiError::NoBody,
        UiError::Style { property: "--color".into(), message: "denied".into() },
        UiError::Schedule("x".into()),
        UiError::Config("x".into()),
    ];
    for (i, a) in errors.iter().enumerate() {
        for (j, b) in errors.iter().enumerate() {
            if i != j {
                assert_ne!(a.error_code(), b.error_code());
            }
        }
    }
}

#[test]
fn style_error_names_the_property() {
    let err = UiError::Style { property: "--background-color".into(), message: "readonly".into() };
    assert_eq!(err.to_string(), "failed to set style property --background-color: readonly");
}

#[test]
fn json_errors_become_config_errors() {
    let Err(err) = serde_json::from_str::<u32>("not json") else {
        panic!("expected parse failure");
    };
    let ui: UiError = err.into();
    assert_eq!(ui.error_code(), "E_CONFIG");
}
