//! Blocking process execution on the user's terminal
//!
//! Callers must release the terminal (leave raw mode and the alternate
//! screen) before invoking these; the child inherits stdin/stdout/stderr.

use std::io;
use std::process::{Command, ExitStatus, Stdio};

use crate::actions::ActionError;

#[cfg_attr(test, mockall::automock)]
pub trait ShellExecutor: Send + Sync {
    /// Run a program attached to the terminal and wait for it
    fn exec(&self, program: &str, args: &[String]) -> Result<(), ActionError>;

    /// Run a program and page its output
    fn pager(&self, program: &str, args: &[String]) -> Result<(), ActionError>;
}

/// Runs commands through the operating system
#[derive(Debug, Clone, Default)]
pub struct SystemShell {
    /// Pager override; falls back to `$PAGER`, then `less`
    pager: Option<String>,
}

impl SystemShell {
    pub fn new(pager: Option<String>) -> Self {
        Self {
            pager: pager.filter(|p| !p.trim().is_empty()),
        }
    }

    /// The pager command line used for paged output
    pub fn pager_command(&self) -> String {
        let pager = self
            .pager
            .clone()
            .or_else(|| std::env::var("PAGER").ok().filter(|p| !p.trim().is_empty()))
            .unwrap_or_else(|| "less".to_string());
        // bat cannot guess the language from a pipe
        if pager == "bat" {
            "bat -l yaml --paging always".to_string()
        } else {
            pager
        }
    }
}

impl ShellExecutor for SystemShell {
    fn exec(&self, program: &str, args: &[String]) -> Result<(), ActionError> {
        tracing::info!(cmd = %program, ?args, "Executing shell command");
        let command = command_line(program, args);
        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|source| ActionError::Spawn {
                command: command.clone(),
                source,
            })?;
        if status.success() {
            Ok(())
        } else {
            Err(ActionError::Failed {
                command,
                status: status.to_string(),
            })
        }
    }

    fn pager(&self, program: &str, args: &[String]) -> Result<(), ActionError> {
        let command = command_line(program, args);
        let pager = self.pager_command();
        tracing::info!(cmd = %command, %pager, "Paging command output");

        let mut producer = Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|source| ActionError::Spawn {
                command: command.clone(),
                source,
            })?;
        let output = producer.stdout.take().ok_or_else(|| ActionError::Spawn {
            command: command.clone(),
            source: io::Error::other("stdout was not captured"),
        })?;

        let pager_status = Command::new("sh")
            .arg("-c")
            .arg(&pager)
            .stdin(Stdio::from(output))
            .status();
        // Reap the producer even when the pager never started
        let producer_status = producer.wait().map_err(|source| ActionError::Spawn {
            command: command.clone(),
            source,
        })?;

        if !producer_status.success() && !closed_by_reader(&producer_status) {
            return Err(ActionError::Failed {
                command,
                status: producer_status.to_string(),
            });
        }
        let pager_status = pager_status.map_err(|source| ActionError::Spawn {
            command: pager.clone(),
            source,
        })?;
        if pager_status.success() {
            Ok(())
        } else {
            Err(ActionError::Failed {
                command: pager,
                status: pager_status.to_string(),
            })
        }
    }
}

/// The pager exited before reading everything (e.g. `q` in less)
#[cfg(unix)]
fn closed_by_reader(status: &ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;
    const SIGPIPE: i32 = 13;
    status.signal() == Some(SIGPIPE)
}

#[cfg(not(unix))]
fn closed_by_reader(_status: &ExitStatus) -> bool {
    false
}

fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_pager_wins() {
        let shell = SystemShell::new(Some("more".to_string()));
        assert_eq!(shell.pager_command(), "more");
    }

    #[cfg(unix)]
    #[test]
    fn test_paged_command_failure_is_reported() {
        let shell = SystemShell::new(Some("cat".to_string()));
        match shell.pager("false", &[]) {
            Err(ActionError::Failed { command, .. }) => assert_eq!(command, "false"),
            other => panic!("expected the failing command to be reported, got {other:?}"),
        }
        assert!(shell.pager("true", &[]).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_pager_failure_is_reported() {
        let shell = SystemShell::new(Some("false".to_string()));
        match shell.pager("true", &[]) {
            Err(ActionError::Failed { command, .. }) => assert_eq!(command, "false"),
            other => panic!("expected the pager to be reported, got {other:?}"),
        }
    }

    #[test]
    fn test_bat_gets_yaml_language() {
        let shell = SystemShell::new(Some("bat".to_string()));
        assert_eq!(shell.pager_command(), "bat -l yaml --paging always");
    }
}
