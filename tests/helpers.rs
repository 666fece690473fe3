// Shared test helpers: an in-memory resolver and config builders.
//
// Integration tests never touch the network; every answer is scripted here.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use dns_lookup::dns::RecordLookup;
use dns_lookup::{Config, LookupError, RecordType};

/// Answers lookups from a fixed table; unknown names are NXDOMAIN.
#[derive(Default)]
pub struct ScriptedLookup {
    answers: HashMap<(String, RecordType), Result<Vec<String>, LookupError>>,
    pub calls: RefCell<Vec<(String, RecordType)>>,
}

#[allow(dead_code)] // Not every test file uses every helper
impl ScriptedLookup {
    pub fn answer(mut self, domain: &str, record_type: RecordType, records: &[&str]) -> Self {
        self.answers.insert(
            (domain.to_string(), record_type),
            Ok(records.iter().map(|r| r.to_string()).collect()),
        );
        self
    }

    pub fn fail(mut self, domain: &str, record_type: RecordType, error: LookupError) -> Self {
        self.answers
            .insert((domain.to_string(), record_type), Err(error));
        self
    }

    pub fn queried_domains(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(d, _)| d.clone()).collect()
    }
}

#[async_trait(?Send)]
impl RecordLookup for ScriptedLookup {
    async fn lookup(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, LookupError> {
        self.calls
            .borrow_mut()
            .push((domain.to_string(), record_type));
        self.answers
            .get(&(domain.to_string(), record_type))
            .cloned()
            .unwrap_or(Err(LookupError::NotFound))
    }
}

/// Config for a direct lookup of `domains`.
#[allow(dead_code)]
pub fn direct_config(domains: &[&str]) -> Config {
    Config {
        domains: domains.iter().map(|d| d.to_string()).collect(),
        ..Default::default()
    }
}
