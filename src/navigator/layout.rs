//! Column layouts
//!
//! Four fixed schemas, picked from the kind class of the traced root and the
//! short/wide display mode.

use crate::trace::status::KindClass;

/// Horizontal gap between two rendered columns
pub const COLUMN_SPACING: u16 = 1;
/// Left and right table border
pub const TABLE_BORDER: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    Object,
    Group,
    Version,
    Synced,
    SyncedLast,
    Ready,
    ReadyLast,
    Installed,
    InstalledLast,
    Healthy,
    HealthyLast,
    State,
    Status,
}

impl ColumnKey {
    pub fn title(self) -> &'static str {
        match self {
            ColumnKey::Object => "OBJECT",
            ColumnKey::Group => "GROUP",
            ColumnKey::Version => "VERSION",
            ColumnKey::Synced => "SYNCED",
            ColumnKey::SyncedLast => "SYNCED LAST",
            ColumnKey::Ready => "READY",
            ColumnKey::ReadyLast => "READY LAST",
            ColumnKey::Installed => "INSTALLED",
            ColumnKey::InstalledLast => "INSTALLED LAST",
            ColumnKey::Healthy => "HEALTHY",
            ColumnKey::HealthyLast => "HEALTHY LAST",
            ColumnKey::State => "STATE",
            ColumnKey::Status => "STATUS",
        }
    }
}

/// A column with its nominal width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: ColumnKey,
    pub width: u16,
}

const fn col(key: ColumnKey, width: u16) -> Column {
    Column { key, width }
}

const SHORT_OBJECT: &[Column] = &[
    col(ColumnKey::Object, 60),
    col(ColumnKey::Group, 30),
    col(ColumnKey::Synced, 7),
    col(ColumnKey::Ready, 7),
    col(ColumnKey::Status, 68),
];

const WIDE_OBJECT: &[Column] = &[
    col(ColumnKey::Object, 60),
    col(ColumnKey::Group, 30),
    col(ColumnKey::Synced, 7),
    col(ColumnKey::SyncedLast, 19),
    col(ColumnKey::Ready, 7),
    col(ColumnKey::ReadyLast, 19),
    col(ColumnKey::Status, 68),
];

const SHORT_PACKAGE: &[Column] = &[
    col(ColumnKey::Object, 60),
    col(ColumnKey::Version, 8),
    col(ColumnKey::Installed, 8),
    col(ColumnKey::Healthy, 7),
    col(ColumnKey::State, 7),
    col(ColumnKey::Status, 68),
];

const WIDE_PACKAGE: &[Column] = &[
    col(ColumnKey::Object, 60),
    col(ColumnKey::Version, 8),
    col(ColumnKey::Installed, 10),
    col(ColumnKey::InstalledLast, 19),
    col(ColumnKey::Healthy, 7),
    col(ColumnKey::HealthyLast, 19),
    col(ColumnKey::State, 7),
    col(ColumnKey::Status, 68),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnLayout {
    #[default]
    ShortObject,
    WideObject,
    ShortPackage,
    WidePackage,
}

impl ColumnLayout {
    pub fn select(class: KindClass, short: bool) -> Self {
        match (class, short) {
            (KindClass::Object, true) => ColumnLayout::ShortObject,
            (KindClass::Object, false) => ColumnLayout::WideObject,
            (KindClass::Package, true) => ColumnLayout::ShortPackage,
            (KindClass::Package, false) => ColumnLayout::WidePackage,
        }
    }

    pub fn columns(self) -> &'static [Column] {
        match self {
            ColumnLayout::ShortObject => SHORT_OBJECT,
            ColumnLayout::WideObject => WIDE_OBJECT,
            ColumnLayout::ShortPackage => SHORT_PACKAGE,
            ColumnLayout::WidePackage => WIDE_PACKAGE,
        }
    }

    pub fn titles(self) -> Vec<&'static str> {
        self.columns().iter().map(|c| c.key.title()).collect()
    }

    /// Rendered widths for a table `available` cells wide
    ///
    /// Every column keeps its nominal width except the last, which grows to
    /// fill whatever the others and the borders leave over.
    pub fn widths(self, available: u16) -> Vec<u16> {
        let columns = self.columns();
        let Some((last, rest)) = columns.split_last() else {
            return Vec::new();
        };
        let others: u16 = rest.iter().map(|c| c.width).sum();
        let gaps = COLUMN_SPACING * (columns.len() as u16).saturating_sub(1);
        let remaining = available
            .saturating_sub(others)
            .saturating_sub(gaps)
            .saturating_sub(TABLE_BORDER);

        rest.iter()
            .map(|c| c.width)
            .chain(std::iter::once(last.width.max(remaining)))
            .collect()
    }
}
