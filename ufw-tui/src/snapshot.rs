use log::{info, warn};
use ufw_common::{
    FirewallStatus, ListeningSocket, Rule, parse_app_list, parse_listening_sockets,
    parse_status_numbered,
};

use crate::{runner::Runner, view::ViewKind};

/// Everything fetched from the tools in one refresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSnapshot {
    pub status: FirewallStatus,
    pub rules: Vec<Rule>,
    pub apps: Vec<String>,
    pub sockets: Vec<ListeningSocket>,
}

impl DataSnapshot {
    /// Queries every collection. A failing call leaves only its own
    /// collection empty.
    pub fn fetch(runner: &dyn Runner) -> Self {
        let mut snapshot = DataSnapshot::default();

        let status = runner.ufw(&["status", "numbered"]);
        if status.success() {
            snapshot.status = FirewallStatus::parse(&status.stdout);
            snapshot.rules = parse_status_numbered(&status.stdout);
        } else {
            warn!("Unable to read ufw rules: {}", status.error_message("ufw"));
        }

        let apps = runner.ufw(&["app", "list"]);
        if apps.success() {
            snapshot.apps = parse_app_list(&apps.stdout);
        } else {
            warn!(
                "Unable to read ufw applications: {}",
                apps.error_message("ufw")
            );
        }

        let sockets = runner.sockets();
        if sockets.success() {
            snapshot.sockets = parse_listening_sockets(&sockets.stdout);
        } else {
            warn!(
                "Unable to list listening sockets: {}",
                sockets.error_message("ss")
            );
        }

        info!(
            "Snapshot refreshed: {} rules, {} apps, {} sockets",
            snapshot.rules.len(),
            snapshot.apps.len(),
            snapshot.sockets.len()
        );

        snapshot
    }

    pub fn len(&self, kind: ViewKind) -> usize {
        match kind {
            ViewKind::Rules => self.rules.len(),
            ViewKind::Applications => self.apps.len(),
            ViewKind::ListeningPorts => self.sockets.len(),
        }
    }

    pub fn is_empty(&self, kind: ViewKind) -> bool {
        self.len(kind) == 0
    }

    /// Display lines of the collection shown for `kind`.
    pub fn rows(&self, kind: ViewKind) -> Vec<String> {
        match kind {
            ViewKind::Rules => self.rules.iter().map(Rule::to_string).collect(),
            ViewKind::Applications => self.apps.clone(),
            ViewKind::ListeningPorts => self.sockets.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{runner::CommandOutput, testing::FakeRunner};

    #[test]
    fn fetch_all_collections() {
        let runner = FakeRunner::default();
        let snapshot = DataSnapshot::fetch(&runner);

        assert_eq!(snapshot.status, FirewallStatus::Active);
        assert_eq!(snapshot.rules.len(), 2);
        assert_eq!(snapshot.apps, vec!["Nginx Full", "OpenSSH"]);
        assert_eq!(snapshot.sockets.len(), 2);
        assert_eq!(
            runner.calls(),
            vec![vec!["status", "numbered"], vec!["app", "list"]]
        );
    }

    #[test]
    fn failed_collection_stays_empty() {
        let runner = FakeRunner::default();
        runner.respond("app", CommandOutput::failure("ERROR: boom"));
        runner.set_sockets(CommandOutput::failure("Timeout"));

        let snapshot = DataSnapshot::fetch(&runner);
        assert_eq!(snapshot.rules.len(), 2);
        assert!(snapshot.apps.is_empty());
        assert!(snapshot.sockets.is_empty());
    }

    #[test]
    fn failed_status_is_unknown() {
        let runner = FakeRunner::default();
        runner.respond("status", CommandOutput::failure(""));

        let snapshot = DataSnapshot::fetch(&runner);
        assert_eq!(snapshot.status, FirewallStatus::Unknown);
        assert!(snapshot.is_empty(ViewKind::Rules));
        assert_eq!(snapshot.len(ViewKind::Applications), 2);
    }

    #[test]
    fn rows_follow_view_kind() {
        let snapshot = DataSnapshot::fetch(&FakeRunner::default());
        assert_eq!(
            snapshot.rows(ViewKind::Rules)[0],
            "  1 ALLOW  22/tcp IN            from Anywhere"
        );
        assert_eq!(snapshot.rows(ViewKind::Applications)[1], "OpenSSH");
        assert_eq!(
            snapshot.rows(ViewKind::ListeningPorts)[0],
            "tcp  22     LISTEN"
        );
    }
}
