//! Navigator state machine
//!
//! Owns the flattened rows, the cursor and the search/filter state. Every
//! interaction goes through [`Navigator::handle`], which returns the signal
//! (if any) the coordinator should act on.

use crate::navigator::flatten::{DisplayRow, Flattened};
use crate::navigator::layout::ColumnLayout;
use crate::navigator::signals::{KeyAction, NavigatorSignal};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Off,
    /// Query input focused, nothing filtered yet
    Editing,
    /// Query committed, matches highlighted
    Filtering,
}

#[derive(Debug, Clone)]
pub struct Navigator {
    rows: Vec<DisplayRow>,
    layout: ColumnLayout,
    cursor: usize,
    mode: SearchMode,
    input: String,
    query: String,
    /// Strictly ascending row indices matching `query`
    matches: Vec<usize>,
    search_cursor: usize,
    show_help: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Navigator {
    pub fn new(show_help: bool) -> Self {
        Self {
            rows: Vec::new(),
            layout: ColumnLayout::default(),
            cursor: 0,
            mode: SearchMode::Off,
            input: String::new(),
            query: String::new(),
            matches: Vec::new(),
            search_cursor: 0,
            show_help,
        }
    }

    /// Replace the rows after a trace fetch
    ///
    /// The cursor is clamped into the new row range. An active filter is
    /// re-applied to the new rows without moving the cursor.
    pub fn set_rows(&mut self, flattened: Flattened) {
        self.rows = flattened.rows;
        self.layout = flattened.layout;
        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
        if self.mode == SearchMode::Filtering {
            self.matches = self.find_matches(&self.query);
            self.search_cursor = self.search_cursor.min(self.matches.len().saturating_sub(1));
        }
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn layout(&self) -> ColumnLayout {
        self.layout
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Live text of the search box
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Last committed query
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    pub fn is_match(&self, index: usize) -> bool {
        self.mode == SearchMode::Filtering && self.matches.binary_search(&index).is_ok()
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The focused row, `None` only when there are no rows
    pub fn current(&self) -> Option<&DisplayRow> {
        self.rows.get(self.cursor)
    }

    pub fn handle(&mut self, action: KeyAction) -> Option<NavigatorSignal> {
        if matches!(action, KeyAction::Quit | KeyAction::ForceQuit) {
            return Some(NavigatorSignal::Quit);
        }
        if self.mode == SearchMode::Editing {
            return self.handle_editing(action);
        }

        match action {
            KeyAction::MoveUp => self.move_by(-1),
            KeyAction::MoveDown => self.move_by(1),
            KeyAction::StartSearch => {
                self.start_search();
                None
            }
            KeyAction::Cancel => {
                self.cancel_search();
                None
            }
            KeyAction::NextMatch => self.next_match(),
            KeyAction::PrevMatch => self.prev_match(),
            KeyAction::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            KeyAction::Copy => self
                .current()
                .map(|row| NavigatorSignal::Copied { id: row.id.clone() }),
            KeyAction::Show => self.current().map(|row| NavigatorSignal::Selected {
                id: row.id.clone(),
                resource: row.resource.clone(),
            }),
            KeyAction::Cluster(action) => self.current().map(|row| NavigatorSignal::Action {
                action,
                id: row.id.clone(),
                resource: row.resource.clone(),
            }),
            KeyAction::TextInput(_)
            | KeyAction::TextBackspace
            | KeyAction::ConfirmSearch
            | KeyAction::Accept
            | KeyAction::Reject
            | KeyAction::Quit
            | KeyAction::ForceQuit => None,
        }
    }

    fn handle_editing(&mut self, action: KeyAction) -> Option<NavigatorSignal> {
        match action {
            KeyAction::TextInput(c) => self.input.push(c),
            KeyAction::TextBackspace => {
                self.input.pop();
            }
            KeyAction::ConfirmSearch => return self.confirm_search(),
            KeyAction::Cancel => self.cancel_search(),
            _ => {}
        }
        None
    }

    fn start_search(&mut self) {
        self.mode = SearchMode::Editing;
        self.input.clear();
        self.query.clear();
        self.matches.clear();
        self.search_cursor = 0;
    }

    fn confirm_search(&mut self) -> Option<NavigatorSignal> {
        self.query = self.input.clone();
        self.mode = SearchMode::Filtering;
        self.matches = self.find_matches(&self.query);
        self.search_cursor = 0;
        let first = *self.matches.first()?;
        self.focus(first)
    }

    fn cancel_search(&mut self) {
        if self.mode == SearchMode::Off {
            return;
        }
        self.mode = SearchMode::Off;
        self.input.clear();
        self.query.clear();
        self.matches.clear();
        self.search_cursor = 0;
    }

    fn find_matches(&self, query: &str) -> Vec<usize> {
        let needle = query.to_lowercase();
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.id.to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect()
    }

    fn move_by(&mut self, delta: isize) -> Option<NavigatorSignal> {
        if self.rows.is_empty() {
            return None;
        }
        let last = self.rows.len() - 1;
        let target = self.cursor.saturating_add_signed(delta).min(last);
        if target == self.cursor {
            return None;
        }
        self.focus(target)
    }

    fn next_match(&mut self) -> Option<NavigatorSignal> {
        let (&first, &last) = (self.matches.first()?, self.matches.last()?);
        let count = self.matches.len();
        self.search_cursor = if (first..=last).contains(&self.cursor) {
            match self.matches.binary_search(&self.cursor) {
                Ok(i) => (i + 1) % count,
                // Cursor sits between two matches: resume at the next one
                Err(i) => i % count,
            }
        } else {
            0
        };
        self.focus(self.matches[self.search_cursor])
    }

    fn prev_match(&mut self) -> Option<NavigatorSignal> {
        let (&first, &last) = (self.matches.first()?, self.matches.last()?);
        let count = self.matches.len();
        self.search_cursor = if (first..=last).contains(&self.cursor) {
            match self.matches.binary_search(&self.cursor) {
                Ok(0) => count - 1,
                Ok(i) => i - 1,
                Err(i) => i.saturating_sub(1),
            }
        } else if self.cursor < first {
            0
        } else {
            count - 1
        };
        self.focus(self.matches[self.search_cursor])
    }

    fn focus(&mut self, index: usize) -> Option<NavigatorSignal> {
        let row = self.rows.get(index)?;
        self.cursor = index;
        Some(NavigatorSignal::FocusChanged {
            id: row.id.clone(),
            resource: row.resource.clone(),
        })
    }
}
