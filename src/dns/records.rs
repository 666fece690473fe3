//! Record rendering.
//!
//! Turns resolver record data into the strings shown to users:
//! - Mail exchanger records (MX) as `"{preference} {exchange}"`
//! - Start of authority records (SOA) as `"{mname} {rname} {serial}"`
//! - Text records (TXT) with their character strings joined
//! - Everything else in its natural presentation form

use hickory_resolver::proto::rr::RData;

/// Renders one answer record as a display string.
pub fn render_record(rdata: &RData) -> String {
    match rdata {
        RData::MX(mx) => format!("{} {}", mx.preference(), mx.exchange()),
        RData::SOA(soa) => format!("{} {} {}", soa.mname(), soa.rname(), soa.serial()),
        // TXT records can contain multiple strings - join them
        RData::TXT(txt) => txt
            .iter()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .collect::<Vec<String>>()
            .join(""),
        other => other.to_string(),
    }
}
