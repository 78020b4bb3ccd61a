use clap::{Command, crate_description, crate_version};

const ENVIRONMENT: &str = "\
Environment:
  UFW_TUI_TIMEOUT    Seconds to wait for ufw or ss before giving up (default: 10)
  UFW_TUI_ELEVATION  'sudo' to run ufw through sudo -n, 'none' to run it directly
  UFW_TUI_UFW        ufw binary (default: ufw)
  UFW_TUI_SS         ss binary (default: ss)
  RUST_LOG           Log filter, e.g. info";

pub fn cli() -> Command {
    Command::new("ufw-tui")
        .about(crate_description!())
        .version(crate_version!())
        .after_help(ENVIRONMENT)
}
