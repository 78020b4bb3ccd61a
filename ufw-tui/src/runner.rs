use std::{
    io::{self, Read},
    process::{Command, Stdio},
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use itertools::Itertools;
use log::{error, info};

use crate::config::{Config, Elevation};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// `(stdout, stderr, exit code)` of one tool invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub code: i32,
}

impl CommandOutput {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            code: 0,
        }
    }

    pub fn failure(stderr: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
            code: 1,
        }
    }

    pub fn success(&self) -> bool {
        self.code == 0
    }

    /// Text shown to the user when the call failed.
    pub fn error_message(&self, tool: &str) -> String {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            format!("{} exited with status {}", tool, self.code)
        } else {
            stderr.to_string()
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to wait for {program}: {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Timeout: {program} did not finish within {}s", .timeout.as_secs())]
    Timeout { program: String, timeout: Duration },
}

/// Synchronous access to the external tools.
///
/// Implementations never fail: errors are reported through a non zero
/// `code` and a human readable `stderr`.
pub trait Runner {
    fn ufw(&self, args: &[&str]) -> CommandOutput;
    fn sockets(&self) -> CommandOutput;
}

#[derive(Debug, Clone)]
pub struct SystemRunner {
    config: Config,
}

impl SystemRunner {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn ufw_command(&self, args: &[&str]) -> Command {
        match self.config.elevation {
            Elevation::Sudo => {
                let mut cmd = Command::new("sudo");
                cmd.arg("-n").arg(&self.config.ufw).args(args);
                cmd
            }
            Elevation::Direct => {
                let mut cmd = Command::new(&self.config.ufw);
                cmd.args(args);
                cmd
            }
        }
    }

    fn run(&self, program: &str, command: Command) -> CommandOutput {
        match execute(program, command, self.config.timeout) {
            Ok(output) => {
                if !output.success() {
                    error!(
                        "{} exited with status {}: {}",
                        program,
                        output.code,
                        output.stderr.trim()
                    );
                }
                output
            }
            Err(e) => {
                error!("{}", e);
                CommandOutput::failure(e.to_string())
            }
        }
    }
}

impl Runner for SystemRunner {
    fn ufw(&self, args: &[&str]) -> CommandOutput {
        info!("Running {} {}", self.config.ufw, args.iter().join(" "));
        self.run(&self.config.ufw, self.ufw_command(args))
    }

    fn sockets(&self) -> CommandOutput {
        let mut cmd = Command::new(&self.config.ss);
        cmd.arg("-tuln");
        self.run(&self.config.ss, cmd)
    }
}

fn drain<R: Read + Send + 'static>(mut reader: R) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buffer = Vec::new();
        let _ = reader.read_to_end(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    })
}

fn collect(handle: Option<JoinHandle<String>>) -> String {
    handle
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default()
}

/// Runs `command` to completion, killing it once `timeout` elapses.
pub fn execute(
    program: &str,
    mut command: Command,
    timeout: Duration,
) -> Result<CommandOutput, ExecError> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| ExecError::Spawn {
            program: program.to_string(),
            source,
        })?;

    // Pipes are drained concurrently so a chatty child cannot block on a full pipe.
    let stdout = child.stdout.take().map(drain);
    let stderr = child.stderr.take().map(drain);

    let deadline = Instant::now() + timeout;
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(ExecError::Timeout {
                    program: program.to_string(),
                    timeout,
                });
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(source) => {
                return Err(ExecError::Wait {
                    program: program.to_string(),
                    source,
                });
            }
        }
    };

    Ok(CommandOutput {
        stdout: collect(stdout),
        stderr: collect(stderr),
        code: status.code().unwrap_or(1),
    })
}
