//! Tree flattening
//!
//! Walks a trace tree in pre-order and produces one display row per node,
//! with tree-branch prefixes and breadcrumb paths.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::navigator::layout::{ColumnKey, ColumnLayout};
use crate::trace::models::Resource;
use crate::trace::status::{KindClass, ResourceStatus, classify, derive_status};

const BRANCH: &str = "├─ ";
const LAST_BRANCH: &str = "└─ ";
const CONTINUATION: &str = "│  ";
const GAP: &str = "   ";
const PAUSED_SUFFIX: &str = " (paused)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowColor {
    #[default]
    Neutral,
    Warning,
    Error,
}

/// One row of the navigator table
#[derive(Debug, Clone)]
pub struct DisplayRow {
    /// `{kind}.{group}/{name}`
    pub id: String,
    pub resource: Arc<Resource>,
    /// Cell values, one per column of the layout
    pub columns: Vec<String>,
    pub color: RowColor,
    /// Tree-branch glyphs for the node's depth
    pub prefix: String,
    /// `{Kind}/{Name}`, with " (paused)" when paused
    pub label: String,
    /// Ancestor labels followed by this row's label
    pub path: Vec<String>,
    pub depth: usize,
}

impl DisplayRow {
    pub fn display_label(&self) -> String {
        format!("{}{}", self.prefix, self.label)
    }
}

/// Result of flattening a trace tree
#[derive(Debug, Clone, Default)]
pub struct Flattened {
    pub rows: Vec<DisplayRow>,
    pub layout: ColumnLayout,
}

/// Flatten a trace tree into display rows in pre-order
///
/// The layout is selected once from the root's kind so every row shares the
/// same schema.
pub fn flatten(root: &Arc<Resource>, short: bool) -> Flattened {
    let class = classify(root.group());
    let layout = ColumnLayout::select(class, short);
    let mut rows = Vec::with_capacity(count_nodes(root));
    let mut walker = Walker {
        layout,
        class,
        rows: &mut rows,
    };
    walker.visit(root, &[], &mut Vec::new());
    Flattened { rows, layout }
}

/// Total number of nodes in a tree
pub fn count_nodes(root: &Resource) -> usize {
    1 + root.children.iter().map(|c| count_nodes(c)).sum::<usize>()
}

/// RFC 822 rendering, "-" when the timestamp is unknown
pub fn format_timestamp(ts: Option<DateTime<Utc>>) -> String {
    match ts {
        Some(ts) => ts.format("%d %b %y %H:%M UTC").to_string(),
        None => "-".to_string(),
    }
}

struct Walker<'a> {
    layout: ColumnLayout,
    class: KindClass,
    rows: &'a mut Vec<DisplayRow>,
}

impl Walker<'_> {
    fn visit(&mut self, node: &Arc<Resource>, parent_path: &[String], is_last: &mut Vec<bool>) {
        let depth = is_last.len();
        let mut label = format!("{}/{}", node.kind(), node.name());
        let mut color = RowColor::Neutral;
        if node.is_paused() {
            label.push_str(PAUSED_SUFFIX);
            color = RowColor::Warning;
        }

        let prefix = tree_prefix(is_last);
        // Status follows the root's class so cells always line up
        let status = derive_status(node, self.class);
        if !status.ok() && color == RowColor::Neutral {
            color = RowColor::Error;
        }

        let display = format!("{prefix}{label}");
        let columns = self
            .layout
            .columns()
            .iter()
            .map(|c| cell(c.key, &display, node, &status))
            .collect();

        let mut path = parent_path.to_vec();
        path.push(label.clone());

        self.rows.push(DisplayRow {
            id: node.id(),
            resource: Arc::clone(node),
            columns,
            color,
            prefix,
            label,
            path: path.clone(),
            depth,
        });

        let count = node.children.len();
        for (i, child) in node.children.iter().enumerate() {
            is_last.push(i + 1 == count);
            self.visit(child, &path, is_last);
            is_last.pop();
        }
    }
}

fn tree_prefix(is_last: &[bool]) -> String {
    let Some((own, ancestors)) = is_last.split_last() else {
        return String::new();
    };
    let mut prefix: String = ancestors
        .iter()
        .map(|last| if *last { GAP } else { CONTINUATION })
        .collect();
    prefix.push_str(if *own { LAST_BRANCH } else { BRANCH });
    prefix
}

fn cell(key: ColumnKey, display: &str, node: &Resource, status: &ResourceStatus) -> String {
    match (key, status) {
        (ColumnKey::Object, _) => display.to_string(),
        (ColumnKey::Group, _) => node.group().to_string(),
        (ColumnKey::Status, _) => status.message().to_string(),
        (ColumnKey::Synced, ResourceStatus::Object(s)) => s.synced.clone(),
        (ColumnKey::SyncedLast, ResourceStatus::Object(s)) => {
            format_timestamp(s.synced_last_transition)
        }
        (ColumnKey::Ready, ResourceStatus::Object(s)) => s.ready.clone(),
        (ColumnKey::ReadyLast, ResourceStatus::Object(s)) => format_timestamp(s.ready_last_transition),
        (ColumnKey::Version, ResourceStatus::Package(s)) => s.version.clone(),
        (ColumnKey::Installed, ResourceStatus::Package(s)) => s.installed.clone(),
        (ColumnKey::InstalledLast, ResourceStatus::Package(s)) => {
            format_timestamp(s.installed_last_transition)
        }
        (ColumnKey::Healthy, ResourceStatus::Package(s)) => s.healthy.clone(),
        (ColumnKey::HealthyLast, ResourceStatus::Package(s)) => {
            format_timestamp(s.healthy_last_transition)
        }
        (ColumnKey::State, ResourceStatus::Package(s)) => s.state.clone(),
        _ => String::new(),
    }
}
