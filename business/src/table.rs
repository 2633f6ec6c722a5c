//! Render-independent half of the generic table.
//!
//! The egui widget asks this module which rows are visible, which
//! placeholder to show, and which default actions exist; it only paints.

use std::convert::Infallible;

use crate::row::{Row, RowKey};

/// Rows shown when the caller does not set a limit.
pub const DEFAULT_MAX_ROWS: usize = 10;

pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "No data found";

/// Message shown instead of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Loading,
    Empty,
}

impl Placeholder {
    pub fn text(self) -> &'static str {
        match self {
            Self::Loading => LOADING_TEXT,
            Self::Empty => EMPTY_TEXT,
        }
    }
}

/// What the table body contains for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TableBody<'r> {
    Rows(&'r [Row]),
    Placeholder(Placeholder),
}

/// The first `max_rows` rows in caller order. No sorting is applied.
pub fn visible_rows(rows: &[Row], max_rows: usize) -> &[Row] {
    &rows[..rows.len().min(max_rows)]
}

/// Decides the body: truncated rows, or a placeholder chosen by `loading` alone.
pub fn table_body(rows: &[Row], max_rows: usize, loading: bool) -> TableBody<'_> {
    let visible = visible_rows(rows, max_rows);
    if visible.is_empty() {
        TableBody::Placeholder(if loading {
            Placeholder::Loading
        } else {
            Placeholder::Empty
        })
    } else {
        TableBody::Rows(visible)
    }
}

/// Built-in per-row actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultAction {
    View,
    Edit,
    Delete,
}

impl DefaultAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::View => "View",
            Self::Edit => "Edit",
            Self::Delete => "Delete",
        }
    }
}

/// Which default actions the caller handles. Unhandled actions get no button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionSet {
    pub view: bool,
    pub edit: bool,
    pub delete: bool,
}

impl ActionSet {
    pub const NONE: Self = Self {
        view: false,
        edit: false,
        delete: false,
    };

    pub fn with_view(mut self) -> Self {
        self.view = true;
        self
    }

    pub fn with_edit(mut self) -> Self {
        self.edit = true;
        self
    }

    pub fn with_delete(mut self) -> Self {
        self.delete = true;
        self
    }

    /// Enabled actions in display order: view, edit, delete.
    pub fn enabled(self) -> impl Iterator<Item = DefaultAction> {
        [
            (self.view, DefaultAction::View),
            (self.edit, DefaultAction::Edit),
            (self.delete, DefaultAction::Delete),
        ]
        .into_iter()
        .filter_map(|(on, action)| on.then_some(action))
    }

    pub fn is_empty(self) -> bool {
        self.enabled().next().is_none()
    }
}

/// An action triggered on a row, either built-in or produced by a custom renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionKind<A = Infallible> {
    Default(DefaultAction),
    Custom(A),
}

/// A clicked action together with the identity of the row it targets.
#[derive(Debug, Clone, PartialEq)]
pub struct RowAction<A = Infallible> {
    pub key: RowKey,
    pub kind: ActionKind<A>,
}
