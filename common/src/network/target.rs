//! # Probe Target Model
//!
//! A target is an address string handed verbatim to the probe, plus an
//! optional site label used for display. The address is not validated: IPv4
//! and IPv6 literals and hostnames are all passed through as-is.

use std::fmt;

/// Sites watched by a default run, in output order.
const DEFAULT_TARGETS: &[(&str, &str)] = &[
    ("10.219.161.15", "PI_PUNE"),
    ("10.166.52.22", "SO_SHOP5"),
    ("10.166.50.22", "AO_ADMIN2"),
    ("10.166.54.20", "EI_ESS"),
    ("10.167.68.19", "HO_HASAN"),
    ("10.167.70.17", "MM_CHENNAI1"),
    ("10.166.52.20", "SI_SHOP1"),
    ("10.166.52.21", "SI_SHOP3"),
    ("10.219.161.14", "PO_PUNE"),
];

/// A single address to probe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    pub address: String,
    pub location: Option<String>,
}

impl Target {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

/// Builds the built-in target list. Duplicates are kept and order is preserved.
pub fn default_targets() -> Vec<Target> {
    DEFAULT_TARGETS
        .iter()
        .map(|(address, location)| Target::new(*address).with_location(*location))
        .collect()
}
