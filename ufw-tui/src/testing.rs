use std::{cell::RefCell, collections::HashMap};

use crate::runner::{CommandOutput, Runner};

pub const STATUS_ACTIVE: &str = "Status: active

     To                         Action      From
     --                         ------      ----
[ 1] 22/tcp                     ALLOW IN    Anywhere
[ 2] 80/tcp                     DENY IN     10.0.0.0/8
";

pub const APP_LIST: &str = "Available applications:
  Nginx Full
  OpenSSH
";

pub const SS_OUTPUT: &str = "Netid State  Recv-Q Send-Q Local Address:Port Peer Address:Port
tcp   LISTEN 0      128    0.0.0.0:22         0.0.0.0:*
udp   UNCONN 0      0      [::1]:323          [::]:*
";

/// Records every ufw call and answers from canned outputs keyed by the
/// first argument.
#[derive(Debug)]
pub struct FakeRunner {
    calls: RefCell<Vec<Vec<String>>>,
    responses: RefCell<HashMap<String, CommandOutput>>,
    sockets: RefCell<CommandOutput>,
}

impl Default for FakeRunner {
    fn default() -> Self {
        let responses = HashMap::from([
            ("status".to_string(), CommandOutput::ok(STATUS_ACTIVE)),
            ("app".to_string(), CommandOutput::ok(APP_LIST)),
        ]);
        Self {
            calls: RefCell::new(Vec::new()),
            responses: RefCell::new(responses),
            sockets: RefCell::new(CommandOutput::ok(SS_OUTPUT)),
        }
    }
}

impl FakeRunner {
    pub fn respond(&self, first_arg: &str, output: CommandOutput) {
        self.responses
            .borrow_mut()
            .insert(first_arg.to_string(), output);
    }

    pub fn set_sockets(&self, output: CommandOutput) {
        *self.sockets.borrow_mut() = output;
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// Calls other than the read-only refresh queries.
    pub fn mutations(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter(|args| {
                !matches!(
                    args.iter().map(String::as_str).collect::<Vec<_>>().as_slice(),
                    ["status", "numbered"] | ["app", "list"] | ["status"]
                )
            })
            .collect()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl Runner for FakeRunner {
    fn ufw(&self, args: &[&str]) -> CommandOutput {
        self.calls
            .borrow_mut()
            .push(args.iter().map(|arg| arg.to_string()).collect());

        args.first()
            .and_then(|first| self.responses.borrow().get(*first).cloned())
            .unwrap_or_default()
    }

    fn sockets(&self) -> CommandOutput {
        self.sockets.borrow().clone()
    }
}
