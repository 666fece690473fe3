//! Configuration constants.
//!
//! This module defines the fixed values shared by the resolver adapter, the
//! formatter and the CLI.

use crate::models::RecordType;

/// Record types queried by `--all-types`, in output order.
pub const SUPPORTED_RECORD_TYPES: [RecordType; 7] = [
    RecordType::A,
    RecordType::AAAA,
    RecordType::MX,
    RecordType::CNAME,
    RecordType::NS,
    RecordType::TXT,
    RecordType::SOA,
];

/// Port used when `--server` is given without one.
pub const DEFAULT_DNS_PORT: u16 = 53;

/// Width of the `=` rule under a per-domain header, added to the domain length.
/// Matches the length of "DNS Lookup Results for: " plus one.
pub const HEADER_RULE_BASE_WIDTH: usize = 25;

/// Width of the `=` rule under the bulk results header.
pub const BULK_RULE_WIDTH: usize = 50;

/// Marker printed in front of failed lookups.
pub const FAILURE_MARKER: &str = "❌";

/// Contents written by `--create-sample`.
pub const SAMPLE_DOMAINS: &[&str] = &[
    "# Sample domains file for DNS lookup",
    "# Lines starting with # are ignored",
    "google.com",
    "github.com",
    "stackoverflow.com",
    "python.org",
];

/// Usage examples shown after `--help`.
pub const USAGE_EXAMPLES: &str = "\
Examples:
  dns_lookup google.com                    # Basic A record lookup
  dns_lookup google.com --type MX          # MX record lookup
  dns_lookup google.com facebook.com       # Multiple domains
  dns_lookup --file domains.txt            # Bulk processing
  dns_lookup google.com --all-types        # All record types
  dns_lookup google.com --server 8.8.8.8   # Custom DNS server
  dns_lookup google.com --output json      # JSON output format";
