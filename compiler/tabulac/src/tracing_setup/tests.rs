use super::*;

#[test]
fn tabula_log_wins() {
    assert_eq!(
        select_directives(Some("tabula_parse=trace".into()), Some("debug".into())),
        Some("tabula_parse=trace".to_string())
    );
}

#[test]
fn falls_back_to_rust_log() {
    assert_eq!(
        select_directives(None, Some("debug".into())),
        Some("debug".to_string())
    );
    assert_eq!(
        select_directives(Some("  ".into()), Some("info".into())),
        Some("info".to_string())
    );
}

#[test]
fn unset_means_no_subscriber() {
    assert_eq!(select_directives(None, None), None);
    assert_eq!(select_directives(Some(String::new()), None), None);
}

#[test]
fn tree_flag_values() {
    assert!(tree_requested(Some("1")));
    assert!(tree_requested(Some("true")));
    assert!(!tree_requested(Some("0")));
    assert!(!tree_requested(None));
}

#[test]
fn init_is_idempotent() {
    init_tracing();
    init_tracing();
}
