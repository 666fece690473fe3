//! Tests for domain file parsing (comments, blank lines, whitespace)

use dns_lookup::input::{create_sample_domains_file, read_domains, validate_file_path};
use dns_lookup::FileError;
use tempfile::TempDir;

async fn parse(contents: &str) -> Vec<String> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("domains.txt");
    std::fs::write(&path, contents).unwrap();
    read_domains(&path).await.unwrap()
}

#[tokio::test]
async fn test_comment_lines_are_skipped() {
    let domains = parse("# This is a comment\nexample.com\n# Another comment\n  # Comment with leading whitespace\n").await;

    assert_eq!(domains, vec!["example.com"]);
}

#[tokio::test]
async fn test_blank_lines_are_skipped() {
    let domains = parse("example.com\n\n   \n\t\t\nrust-lang.org\n").await;

    assert_eq!(domains, vec!["example.com", "rust-lang.org"]);
}

#[tokio::test]
async fn test_inline_hash_is_kept() {
    // Only whole-line comments are stripped
    let domains = parse("example.com # trailing\n").await;

    assert_eq!(domains, vec!["example.com # trailing"]);
}

#[tokio::test]
async fn test_empty_file_yields_no_domains() {
    assert!(parse("").await.is_empty());
    assert!(parse("# only comments\n\n").await.is_empty());
}

#[tokio::test]
async fn test_missing_file_message() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.txt");

    let err = read_domains(&path).await.unwrap_err();

    assert!(matches!(err, FileError::NotFound(_)));
    assert_eq!(err.to_string(), format!("File not found: {}", path.display()));
    assert!(!validate_file_path(&path).await);
}

#[tokio::test]
async fn test_sample_file_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("samples/domains.txt");

    create_sample_domains_file(&path).await.unwrap();

    assert!(validate_file_path(&path).await);
    assert_eq!(
        read_domains(&path).await.unwrap(),
        vec!["google.com", "github.com", "stackoverflow.com", "python.org"]
    );
}
