//! Rendering Layer
//!
//! Row projection of the item list. The controller describes what changed
//! as [`ViewChange`]s and this module turns them into rows; the Leptos
//! components only draw what is here.

use crate::filter::Filter;

/// A state change the view has to reflect
#[derive(Clone, Debug, PartialEq)]
pub enum ViewChange {
    Rows(RowChange),
    SetSubmitMode(SubmitMode),
    /// Show or hide the clear-all button and the filter box
    SetControlsVisible(bool),
    /// Replace the text in the item input
    SetInput(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum RowChange {
    /// Replace every row
    Render(Vec<String>),
    Append(String),
    Remove(usize),
    Clear,
    /// Mark one row (or none) as the row being edited
    MarkEditing(Option<usize>),
    ApplyFilter(String),
}

/// What the submit button does
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitMode {
    #[default]
    Add,
    Update,
}

impl SubmitMode {
    pub fn button_label(&self) -> &'static str {
        match self {
            SubmitMode::Add => "Add Item",
            SubmitMode::Update => "Update Item",
        }
    }

    /// Font Awesome classes for the button icon
    pub fn button_icon(&self) -> &'static str {
        match self {
            SubmitMode::Add => "fa-solid fa-plus",
            SubmitMode::Update => "fa-solid fa-pen",
        }
    }

    pub fn button_class(&self) -> &'static str {
        match self {
            SubmitMode::Add => "btn",
            SubmitMode::Update => "btn btn-update",
        }
    }
}

/// One rendered list row
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    /// Stable identity for keyed rendering, unique within a list
    pub key: u64,
    pub label: String,
    pub visible: bool,
    pub editing: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderedList {
    rows: Vec<Row>,
    filter: Filter,
    next_key: u64,
}

impl RenderedList {
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Current position of the row with `key`
    pub fn index_of(&self, key: u64) -> Option<usize> {
        self.rows.iter().position(|row| row.key == key)
    }

    #[cfg(test)]
    pub fn visible_labels(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|row| row.visible)
            .map(|row| row.label.as_str())
            .collect()
    }

    #[cfg(test)]
    pub fn editing_index(&self) -> Option<usize> {
        self.rows.iter().position(|row| row.editing)
    }

    pub fn apply(&mut self, change: RowChange) {
        match change {
            RowChange::Render(labels) => {
                self.rows.clear();
                for label in labels {
                    self.append(label);
                }
            }
            RowChange::Append(label) => self.append(label),
            RowChange::Remove(index) => {
                if index < self.rows.len() {
                    self.rows.remove(index);
                }
            }
            RowChange::Clear => self.rows.clear(),
            RowChange::MarkEditing(index) => {
                for (i, row) in self.rows.iter_mut().enumerate() {
                    row.editing = Some(i) == index;
                }
            }
            RowChange::ApplyFilter(text) => {
                self.filter.set(&text);
                for row in &mut self.rows {
                    row.visible = self.filter.matches(&row.label);
                }
            }
        }
    }

    fn append(&mut self, label: String) {
        let row = Row {
            key: self.next_key,
            visible: self.filter.matches(&label),
            label,
            editing: false,
        };
        self.next_key += 1;
        self.rows.push(row);
    }
}
