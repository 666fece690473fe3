//! Tests for command-line parsing.

use clap::error::ErrorKind;
use clap::Parser;
use dns_lookup::config::LogFormat;
use dns_lookup::{Config, LogLevel, OutputFormat, RecordType};
use std::net::SocketAddr;
use std::path::PathBuf;

#[test]
fn test_defaults() {
    let config = Config::try_parse_from(["dns_lookup", "google.com"]).expect("Should parse");

    assert_eq!(config.domains, vec!["google.com"]);
    assert_eq!(config.record_type, RecordType::A);
    assert_eq!(config.output, OutputFormat::Table);
    assert!(config.file.is_none());
    assert!(config.server.is_none());
    assert!(!config.all_types);
    assert!(config.output_file.is_none());
    assert!(config.create_sample.is_none());
    // LogLevel doesn't implement PartialEq, so compare via conversion
    assert_eq!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::from(LogLevel::Warn)
    );
    assert!(matches!(config.log_format, LogFormat::Plain));
}

#[test]
fn test_multiple_domains_keep_order() {
    let config = Config::try_parse_from(["dns_lookup", "google.com", "facebook.com", "google.com"])
        .expect("Should parse");

    assert_eq!(config.domains, vec!["google.com", "facebook.com", "google.com"]);
}

#[test]
fn test_all_options() {
    let args = [
        "dns_lookup",
        "-t",
        "MX",
        "-f",
        "domains.txt",
        "-o",
        "json",
        "-s",
        "8.8.8.8",
        "--all-types",
        "--output-file",
        "out/results.txt",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ];
    let config = Config::try_parse_from(args).expect("Should parse");

    assert_eq!(config.record_type, RecordType::MX);
    assert_eq!(config.file, Some(PathBuf::from("domains.txt")));
    assert_eq!(config.output, OutputFormat::Json);
    assert_eq!(
        config.server,
        Some("8.8.8.8:53".parse::<SocketAddr>().unwrap())
    );
    assert!(config.all_types);
    assert_eq!(config.output_file, Some(PathBuf::from("out/results.txt")));
    assert_eq!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::Debug
    );
    assert!(matches!(config.log_format, LogFormat::Json));
}

#[test]
fn test_long_type_flag_is_case_insensitive() {
    for value in ["aaaa", "AAAA", "Aaaa"] {
        let config = Config::try_parse_from(["dns_lookup", "example.com", "--type", value])
            .expect("Should parse");
        assert_eq!(config.record_type, RecordType::AAAA);
    }
}

#[test]
fn test_every_supported_type_parses() {
    for (value, expected) in [
        ("A", RecordType::A),
        ("AAAA", RecordType::AAAA),
        ("MX", RecordType::MX),
        ("CNAME", RecordType::CNAME),
        ("NS", RecordType::NS),
        ("TXT", RecordType::TXT),
        ("SOA", RecordType::SOA),
    ] {
        let config = Config::try_parse_from(["dns_lookup", "example.com", "-t", value])
            .expect("Should parse");
        assert_eq!(config.record_type, expected);
    }
}

#[test]
fn test_unsupported_type_is_rejected() {
    let err = Config::try_parse_from(["dns_lookup", "example.com", "-t", "PTR"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn test_unsupported_output_format_is_rejected() {
    let err = Config::try_parse_from(["dns_lookup", "example.com", "-o", "csv"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn test_server_with_port() {
    let config = Config::try_parse_from(["dns_lookup", "example.com", "--server", "127.0.0.1:5353"])
        .expect("Should parse");
    assert_eq!(config.server.unwrap().port(), 5353);
}

#[test]
fn test_invalid_server_is_rejected() {
    let err = Config::try_parse_from(["dns_lookup", "example.com", "-s", "not-an-ip"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn test_no_arguments_parses_to_empty_input() {
    // The run decides what to do with no input; parsing itself succeeds
    let config = Config::try_parse_from(["dns_lookup"]).expect("Should parse");
    assert!(config.domains.is_empty());
    assert!(config.file.is_none());
}

#[test]
fn test_help_is_not_an_error_exit() {
    let err = Config::try_parse_from(["dns_lookup", "--help"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    assert!(!err.use_stderr());
    assert!(err.to_string().contains("Examples:"));
}

#[test]
fn test_create_sample_flag() {
    let config = Config::try_parse_from(["dns_lookup", "--create-sample", "sample.txt"])
        .expect("Should parse");
    assert_eq!(config.create_sample, Some(PathBuf::from("sample.txt")));
}
