//! Data model and line parsers for the output of `ufw` and `ss`.
//!
//! Every parser here is lenient: a line that does not have the expected
//! shape is dropped from the result instead of failing the whole parse.

pub mod profile;
pub mod rule;
pub mod socket;
pub mod status;

pub use profile::parse_app_list;
pub use rule::{Rule, RuleAction, parse_status_numbered};
pub use socket::{ListeningSocket, parse_listening_sockets};
pub use status::FirewallStatus;
