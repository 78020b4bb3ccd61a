use log::{debug, info};

use crate::{
    app::App,
    prompt::{Prompt, PromptKind},
    runner::Runner,
    view::ViewKind,
};

/// Every command the left panel can trigger.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    AddAllow,
    AddDeny,
    DeleteSelected,
    ToggleFirewall,
    ResetFirewall,
    SetView(ViewKind),
    Refresh,
    Quit,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum RuleVerb {
    Allow,
    Deny,
}

/// `ufw` arguments for a new rule: the verb followed by the user text split
/// on whitespace.
pub fn rule_args(verb: RuleVerb, text: &str) -> Vec<String> {
    std::iter::once(verb.as_ref().to_string())
        .chain(text.split_whitespace().map(String::from))
        .collect()
}

fn confirmed(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y")
}

impl App {
    pub fn perform(&mut self, action: Action, runner: &dyn Runner) {
        debug!("Performing {:?}", action);
        match action {
            Action::AddAllow => {
                self.prompt = Some(Prompt::new(PromptKind::AddRule(RuleVerb::Allow)));
            }
            Action::AddDeny => {
                self.prompt = Some(Prompt::new(PromptKind::AddRule(RuleVerb::Deny)));
            }
            Action::DeleteSelected => match self.selected_rule() {
                Some(rule) => {
                    self.prompt = Some(Prompt::new(PromptKind::ConfirmDelete {
                        num: rule.num.clone(),
                    }));
                }
                None => self.notify("Select a rule to delete"),
            },
            Action::ToggleFirewall => self.toggle_firewall(runner),
            Action::ResetFirewall => {
                self.prompt = Some(Prompt::new(PromptKind::ConfirmReset));
            }
            Action::SetView(kind) => self.change_view(kind),
            Action::Refresh => {
                self.refresh(runner);
                self.notify("Data refreshed");
            }
            Action::Quit => self.quit(),
        }
    }

    /// Completes the action that opened a prompt with the user's answer.
    pub fn submit_prompt(&mut self, kind: PromptKind, answer: &str, runner: &dyn Runner) {
        match kind {
            PromptKind::AddRule(verb) => {
                if answer.is_empty() {
                    return;
                }
                let args = rule_args(verb, answer);
                let args: Vec<&str> = args.iter().map(String::as_str).collect();
                let output = runner.ufw(&args);
                if output.success() {
                    info!("Rule added: {}", answer);
                    self.notify("Rule added successfully");
                    self.refresh(runner);
                } else {
                    self.notify(output.error_message("ufw"));
                }
            }

            PromptKind::ConfirmDelete { num } => {
                if !confirmed(answer) {
                    return;
                }
                let output = runner.ufw(&["delete", num.as_str()]);
                if output.success() {
                    info!("Rule {} deleted", num);
                    self.notify("Rule deleted successfully");
                    self.refresh(runner);
                } else {
                    self.notify(output.error_message("ufw"));
                }
            }

            PromptKind::ConfirmReset => {
                if !confirmed(answer) {
                    return;
                }
                let output = runner.ufw(&["--force", "reset"]);
                if output.success() {
                    info!("Firewall reset");
                    self.notify("UFW reset");
                } else {
                    self.notify(format!("Error: {}", output.error_message("ufw")));
                }
                self.refresh(runner);
            }
        }
    }

    fn toggle_firewall(&mut self, runner: &dyn Runner) {
        let status = runner.ufw(&["status"]);
        let active = status.success() && status.stdout.contains("Status: active");

        let (args, done) = if active {
            (["disable"], "UFW disabled")
        } else {
            (["enable"], "UFW enabled")
        };

        let output = runner.ufw(&args);
        if output.success() {
            info!("{}", done);
            self.notify(done);
            self.refresh(runner);
        } else {
            self.notify(output.error_message("ufw"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        runner::CommandOutput,
        snapshot::DataSnapshot,
        testing::{FakeRunner, STATUS_ACTIVE},
    };

    fn app(runner: &FakeRunner) -> App {
        let app = App::new(DataSnapshot::fetch(runner));
        runner.clear();
        app
    }

    #[test]
    fn rule_args_tokenize_text() {
        assert_eq!(rule_args(RuleVerb::Allow, "22"), vec!["allow", "22"]);
        assert_eq!(
            rule_args(RuleVerb::Deny, " from  192.168.1.0/24 "),
            vec!["deny", "from", "192.168.1.0/24"]
        );
    }

    #[test]
    fn add_rule_opens_prompt_then_calls_ufw() {
        let runner = FakeRunner::default();
        let mut app = app(&runner);

        app.perform(Action::AddAllow, &runner);
        let kind = app.prompt.as_ref().map(|p| p.kind.clone());
        assert_eq!(kind, Some(PromptKind::AddRule(RuleVerb::Allow)));
        assert!(runner.calls().is_empty());

        app.prompt = None;
        app.submit_prompt(PromptKind::AddRule(RuleVerb::Allow), "22", &runner);
        assert_eq!(runner.mutations(), vec![vec!["allow", "22"]]);
        assert_eq!(app.message.as_deref(), Some("Rule added successfully"));
        // the list is re-fetched after the mutation
        assert!(runner.calls().contains(&vec![
            "status".to_string(),
            "numbered".to_string()
        ]));
    }

    #[test]
    fn empty_rule_text_does_nothing() {
        let runner = FakeRunner::default();
        let mut app = app(&runner);
        app.submit_prompt(PromptKind::AddRule(RuleVerb::Deny), "", &runner);
        assert!(runner.calls().is_empty());
        assert!(app.message.is_none());
    }

    #[test]
    fn failed_add_reports_stderr() {
        let runner = FakeRunner::default();
        runner.respond("deny", CommandOutput::failure("ERROR: Bad port\n"));
        let mut app = app(&runner);

        app.submit_prompt(PromptKind::AddRule(RuleVerb::Deny), "99999", &runner);
        assert_eq!(app.message.as_deref(), Some("ERROR: Bad port"));
        assert_eq!(runner.calls(), vec![vec!["deny", "99999"]]);
    }

    #[test]
    fn delete_requires_rules_view_and_selection() {
        let runner = FakeRunner::default();
        let mut app = app(&runner);

        app.change_view(ViewKind::Applications);
        app.perform(Action::DeleteSelected, &runner);
        assert!(app.prompt.is_none());
        assert_eq!(app.message.as_deref(), Some("Select a rule to delete"));

        app.change_view(ViewKind::Rules);
        app.view.right_selection = 1;
        app.perform(Action::DeleteSelected, &runner);
        let kind = app.prompt.as_ref().map(|p| p.kind.clone());
        assert_eq!(
            kind,
            Some(PromptKind::ConfirmDelete {
                num: "2".to_string()
            })
        );
    }

    #[test]
    fn delete_only_on_confirmation() {
        let runner = FakeRunner::default();
        let mut app = app(&runner);
        let kind = PromptKind::ConfirmDelete {
            num: "2".to_string(),
        };

        app.submit_prompt(kind.clone(), "n", &runner);
        assert!(runner.calls().is_empty());

        app.submit_prompt(kind, "Y", &runner);
        assert_eq!(runner.mutations(), vec![vec!["delete", "2"]]);
        assert_eq!(app.message.as_deref(), Some("Rule deleted successfully"));
    }

    #[test]
    fn toggle_disables_active_firewall() {
        let runner = FakeRunner::default();
        let mut app = app(&runner);

        app.perform(Action::ToggleFirewall, &runner);
        assert_eq!(runner.calls()[0], vec!["status"]);
        assert_eq!(runner.mutations(), vec![vec!["disable"]]);
        assert_eq!(app.message.as_deref(), Some("UFW disabled"));
    }

    #[test]
    fn toggle_enables_inactive_firewall() {
        let runner = FakeRunner::default();
        runner.respond("status", CommandOutput::ok("Status: inactive\n"));
        let mut app = app(&runner);

        app.perform(Action::ToggleFirewall, &runner);
        assert_eq!(runner.mutations(), vec![vec!["enable"]]);
        assert_eq!(app.message.as_deref(), Some("UFW enabled"));
    }

    #[test]
    fn reset_refreshes_even_on_failure() {
        let runner = FakeRunner::default();
        runner.respond("--force", CommandOutput::failure("Timeout"));
        let mut app = app(&runner);

        app.perform(Action::ResetFirewall, &runner);
        assert_eq!(
            app.prompt.as_ref().map(|p| p.kind.clone()),
            Some(PromptKind::ConfirmReset)
        );

        app.prompt = None;
        app.submit_prompt(PromptKind::ConfirmReset, "y", &runner);
        assert_eq!(runner.mutations(), vec![vec!["--force", "reset"]]);
        assert_eq!(app.message.as_deref(), Some("Error: Timeout"));
        assert_eq!(runner.calls().len(), 3);
    }

    #[test]
    fn refresh_replaces_snapshot() {
        let runner = FakeRunner::default();
        let mut app = app(&runner);
        assert_eq!(app.snapshot.rules.len(), 2);

        runner.respond(
            "status",
            CommandOutput::ok(STATUS_ACTIVE.lines().take(5).collect::<Vec<_>>().join("\n")),
        );
        app.perform(Action::Refresh, &runner);
        assert_eq!(app.snapshot.rules.len(), 1);
        assert_eq!(app.message.as_deref(), Some("Data refreshed"));
    }

    #[test]
    fn quit_stops_the_app() {
        let runner = FakeRunner::default();
        let mut app = app(&runner);
        app.perform(Action::Quit, &runner);
        assert!(!app.running);
    }
}
