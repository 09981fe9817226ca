//! kubectl invocations for the focused row

use std::sync::Arc;

use crate::actions::ActionError;
use crate::actions::shell::ShellExecutor;
use crate::navigator::signals::ClusterAction;

pub const DEFAULT_BINARY: &str = "kubectl";

pub struct Kubectl {
    binary: String,
    context: Option<String>,
    shell: Arc<dyn ShellExecutor>,
}

impl Kubectl {
    pub fn new(binary: impl Into<String>, context: Option<String>, shell: Arc<dyn ShellExecutor>) -> Self {
        Self {
            binary: binary.into(),
            context: context.filter(|c| !c.is_empty() && c != "-"),
            shell,
        }
    }

    /// Build the argument list for an action against a row identifier
    pub fn args_for(
        &self,
        action: ClusterAction,
        namespace: Option<&str>,
        id: &str,
    ) -> Result<Vec<String>, ActionError> {
        let resource = resource_ref(id)?;
        let mut args = vec![action.verb().to_string(), resource];
        if action == ClusterAction::GetManifest {
            args.extend(["-o".to_string(), "yaml".to_string()]);
        }
        if let Some(context) = &self.context {
            args.extend(["--context".to_string(), context.clone()]);
        }
        if let Some(ns) = namespace.filter(|ns| !ns.is_empty()) {
            args.extend(["-n".to_string(), ns.to_string()]);
        }
        Ok(args)
    }

    /// Run an action, blocking until the child process exits
    pub fn run(
        &self,
        action: ClusterAction,
        namespace: Option<&str>,
        id: &str,
    ) -> Result<(), ActionError> {
        let args = self.args_for(action, namespace, id)?;
        tracing::info!(action = action.verb(), %id, "Running kubectl");
        match action {
            ClusterAction::GetManifest | ClusterAction::Describe => {
                self.shell.pager(&self.binary, &args)
            }
            ClusterAction::Edit | ClusterAction::Delete => self.shell.exec(&self.binary, &args),
        }
    }
}

/// Turn `{kind}.{group}/{name}` into a kubectl resource reference
///
/// Core kinds have an empty group, which leaves a trailing dot on the kind.
fn resource_ref(id: &str) -> Result<String, ActionError> {
    let (kind, name) = id
        .split_once('/')
        .ok_or_else(|| ActionError::InvalidId(id.to_string()))?;
    let kind = kind.trim_end_matches('.');
    if kind.is_empty() || name.is_empty() {
        return Err(ActionError::InvalidId(id.to_string()));
    }
    Ok(format!("{kind}/{name}"))
}
