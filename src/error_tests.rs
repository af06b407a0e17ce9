use std::path::PathBuf;

use super::*;

#[test]
fn file_not_found_display_names_path() {
    let err = ArticleGuardError::FileNotFound {
        path: PathBuf::from("missing.html"),
    };
    assert_eq!(err.to_string(), "File not found: missing.html");
}

#[test]
fn file_read_display_includes_cause() {
    let err = ArticleGuardError::FileRead {
        path: PathBuf::from("article.html"),
        source: std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "stream did not contain valid UTF-8",
        ),
    };
    let msg = err.to_string();
    assert!(msg.starts_with("Failed to read file: article.html"));
    assert!(msg.contains("UTF-8"));
}

#[test]
fn io_error_converts_via_from() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: ArticleGuardError = io_err.into();
    assert!(matches!(err, ArticleGuardError::Io(_)));
}
