//! Trace sources
//!
//! A source produces a fresh resource tree on every fetch, either by running
//! an external trace command or by re-parsing a captured input stream.

use async_trait::async_trait;
use std::io::Read;
use tokio::process::Command;

use crate::trace::error::TraceError;
use crate::trace::models::Resource;
use crate::trace::parser;

/// Produces a resource tree snapshot on demand
#[async_trait]
pub trait TraceSource: Send + Sync {
    async fn fetch(&self) -> Result<Resource, TraceError>;

    /// Short human readable description used in logs and the status bar
    fn describe(&self) -> String;
}

/// The resource a trace is requested for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceTarget {
    pub kind: String,
    pub name: String,
}

impl TraceTarget {
    /// Parse `<kind>/<name>` or `<kind> <name>` from positional arguments
    pub fn from_args(args: &[String]) -> Result<Self, TraceError> {
        let (kind, name) = match args {
            [single] => single
                .split_once('/')
                .ok_or_else(|| TraceError::InvalidTarget(single.clone()))?,
            [kind, name] => (kind.as_str(), name.as_str()),
            _ => return Err(TraceError::InvalidTarget(args.join(" "))),
        };
        if kind.is_empty() || name.is_empty() || name.contains('/') || kind.contains('/') {
            return Err(TraceError::InvalidTarget(args.join(" ")));
        }
        Ok(Self {
            kind: kind.to_string(),
            name: name.to_string(),
        })
    }
}

impl std::fmt::Display for TraceTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.kind, self.name)
    }
}

/// Runs an external trace-producing command, e.g. `crossplane beta trace -o json`
#[derive(Debug, Clone)]
pub struct CommandTraceSource {
    program: String,
    args: Vec<String>,
}

impl CommandTraceSource {
    pub fn new(
        command: &str,
        namespace: Option<&str>,
        context: Option<&str>,
        target: &TraceTarget,
    ) -> Result<Self, TraceError> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(TraceError::EmptyCommand)?;
        let mut args: Vec<String> = parts.collect();

        // "-" is accepted as an explicit "use the default"
        if let Some(ns) = namespace.filter(|ns| !ns.is_empty() && *ns != "-") {
            args.push("--namespace".to_string());
            args.push(ns.to_string());
        }
        if let Some(ctx) = context.filter(|ctx| !ctx.is_empty() && *ctx != "-") {
            args.push("--context".to_string());
            args.push(ctx.to_string());
        }
        args.push(target.to_string());

        Ok(Self { program, args })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[async_trait]
impl TraceSource for CommandTraceSource {
    async fn fetch(&self) -> Result<Resource, TraceError> {
        tracing::info!(cmd = %self.program, args = ?self.args, "Executing trace command");

        let output = Command::new(&self.program)
            .args(&self.args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| TraceError::Spawn {
                command: self.command_line(),
                source,
            })?;

        if !output.status.success() {
            let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
            combined.push_str(&String::from_utf8_lossy(&output.stderr));
            return Err(TraceError::Fetch {
                command: self.command_line(),
                status: output.status.to_string(),
                output: combined.trim().to_string(),
            });
        }

        if !output.stderr.is_empty() {
            tracing::debug!(
                stderr = %String::from_utf8_lossy(&output.stderr),
                "Trace command wrote to stderr"
            );
        }

        parser::parse(&output.stdout)
    }

    fn describe(&self) -> String {
        self.command_line()
    }
}

/// Serves a trace captured once from a stream (stdin or a file)
///
/// Every fetch re-parses the captured bytes, so watch mode against a static
/// snapshot yields identical trees.
#[derive(Debug, Clone)]
pub struct ReaderTraceSource {
    label: String,
    contents: Vec<u8>,
}

impl ReaderTraceSource {
    pub fn from_reader<R: Read>(label: impl Into<String>, mut reader: R) -> Result<Self, TraceError> {
        let mut contents = Vec::new();
        reader.read_to_end(&mut contents)?;
        Ok(Self {
            label: label.into(),
            contents,
        })
    }

    pub fn from_bytes(label: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            label: label.into(),
            contents: contents.into(),
        }
    }
}

#[async_trait]
impl TraceSource for ReaderTraceSource {
    async fn fetch(&self) -> Result<Resource, TraceError> {
        parser::parse(&self.contents)
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
