//! App Controller
//!
//! Owns the item list, the edit cursor and the filter text. Each operation
//! mutates the model and returns the [`ViewChange`]s the view must apply.

use tracing::{debug, error};

use crate::config::{
    CLEAR_CONFIRM_MESSAGE, EMPTY_ITEM_MESSAGE, REMOVE_CONFIRM_MESSAGE, SAVE_FAILED_MESSAGE,
};
use crate::error::{TodoError, TodoResult};
use crate::list::{validate_label, ItemList};
use crate::prompt::UserPrompt;
use crate::render::{RowChange, SubmitMode, ViewChange};
use crate::storage::KeyValueStore;

/// The item staged for edit
#[derive(Clone, Debug, PartialEq)]
pub struct EditCursor {
    /// Row the edit was started from
    pub index: usize,
    pub label: String,
}

/// Raised by a rendered row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    /// Row body clicked
    Edit(usize),
    /// Removal control clicked
    Remove(usize),
}

pub struct AppController<S, P> {
    list: ItemList<S>,
    prompt: P,
    cursor: Option<EditCursor>,
}

impl<S: KeyValueStore, P: UserPrompt> AppController<S, P> {
    pub fn new(list: ItemList<S>, prompt: P) -> Self {
        Self {
            list,
            prompt,
            cursor: None,
        }
    }

    /// Initial render of the hydrated list
    pub fn start(&self) -> Vec<ViewChange> {
        vec![
            ViewChange::Rows(RowChange::Render(self.list.all().to_vec())),
            ViewChange::SetSubmitMode(SubmitMode::Add),
            self.evaluate(),
        ]
    }

    /// Controls are only shown while there is something to clear or filter
    pub fn evaluate(&self) -> ViewChange {
        ViewChange::SetControlsVisible(!self.list.is_empty())
    }

    pub fn dispatch(&mut self, action: RowAction) -> TodoResult<Vec<ViewChange>> {
        debug!(?action, "row action");
        match action {
            RowAction::Edit(index) => self.select_for_edit(index),
            RowAction::Remove(index) => self.remove(index),
        }
    }

    /// Stage the item at `index` for edit
    pub fn select_for_edit(&mut self, index: usize) -> TodoResult<Vec<ViewChange>> {
        let label = self.label_at(index)?;
        self.cursor = Some(EditCursor {
            index,
            label: label.clone(),
        });
        Ok(vec![
            ViewChange::Rows(RowChange::MarkEditing(Some(index))),
            ViewChange::SetInput(label),
            ViewChange::SetSubmitMode(SubmitMode::Update),
        ])
    }

    /// Add `input`, or replace the staged item with it when editing
    pub fn submit(&mut self, input: &str) -> TodoResult<Vec<ViewChange>> {
        if let Err(e) = validate_label(input) {
            self.prompt.notify(EMPTY_ITEM_MESSAGE);
            return Err(e);
        }

        let mut changes = match self.cursor.take() {
            Some(cursor) => {
                let removed = match self.list.update(&cursor.label, input) {
                    Ok(removed) => removed,
                    Err(e) => {
                        self.cursor = Some(cursor);
                        return Err(self.report(e));
                    }
                };
                let mut changes = Vec::new();
                if let Some(index) = removed {
                    changes.push(ViewChange::Rows(RowChange::Remove(index)));
                }
                changes.push(ViewChange::Rows(RowChange::Append(input.to_string())));
                changes.push(ViewChange::Rows(RowChange::MarkEditing(None)));
                changes.push(ViewChange::SetSubmitMode(SubmitMode::Add));
                changes
            }
            None => {
                self.list.add(input).map_err(|e| self.report(e))?;
                vec![ViewChange::Rows(RowChange::Append(input.to_string()))]
            }
        };
        changes.push(ViewChange::SetInput(String::new()));
        changes.push(self.evaluate());
        Ok(changes)
    }

    /// Remove the item at `index` once the user confirms.
    ///
    /// The model drops the first item with that label, which may be an
    /// earlier duplicate of the clicked row; rows follow the model.
    pub fn remove(&mut self, index: usize) -> TodoResult<Vec<ViewChange>> {
        let label = self.label_at(index)?;
        let mut changes = Vec::new();
        if self.prompt.confirm(REMOVE_CONFIRM_MESSAGE) {
            match self.list.remove(&label) {
                Ok(Some(removed)) => {
                    changes.push(ViewChange::Rows(RowChange::Remove(removed)));
                    changes.extend(self.shift_cursor(index, removed));
                }
                Ok(None) => {}
                Err(e) => {
                    self.report(e);
                }
            }
        }
        changes.push(self.evaluate());
        Ok(changes)
    }

    /// Remove every item once the user confirms
    pub fn clear_all(&mut self) -> Vec<ViewChange> {
        let mut changes = Vec::new();
        if self.prompt.confirm(CLEAR_CONFIRM_MESSAGE) {
            match self.list.clear() {
                Ok(()) => {
                    changes.push(ViewChange::Rows(RowChange::Clear));
                    if self.cursor.take().is_some() {
                        changes.push(ViewChange::SetInput(String::new()));
                        changes.push(ViewChange::SetSubmitMode(SubmitMode::Add));
                    }
                }
                Err(e) => {
                    self.report(e);
                }
            }
        }
        changes.push(self.evaluate());
        changes
    }

    /// Filtering only changes row visibility; the model is untouched
    pub fn filter(&self, text: &str) -> Vec<ViewChange> {
        vec![ViewChange::Rows(RowChange::ApplyFilter(text.to_string()))]
    }

    #[cfg(test)]
    pub fn list(&self) -> &ItemList<S> {
        &self.list
    }

    #[cfg(test)]
    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    #[cfg(test)]
    pub fn cursor(&self) -> Option<&EditCursor> {
        self.cursor.as_ref()
    }

    fn label_at(&self, index: usize) -> TodoResult<String> {
        self.list
            .get(index)
            .map(str::to_string)
            .ok_or(TodoError::NoSuchRow(index))
    }

    /// Edit mode ends when the clicked row or the removed row was being
    /// edited; otherwise the cursor follows its row.
    fn shift_cursor(&mut self, clicked: usize, removed: usize) -> Vec<ViewChange> {
        let Some(cursor) = self.cursor.as_mut() else {
            return Vec::new();
        };
        if cursor.index != clicked && cursor.index != removed {
            if cursor.index > removed {
                cursor.index -= 1;
            }
            return Vec::new();
        }
        self.cursor = None;
        vec![
            ViewChange::Rows(RowChange::MarkEditing(None)),
            ViewChange::SetInput(String::new()),
            ViewChange::SetSubmitMode(SubmitMode::Add),
        ]
    }

    fn report(&self, e: TodoError) -> TodoError {
        error!(error = %e, "item list not saved");
        if matches!(e, TodoError::StorageWrite(_)) {
            self.prompt.notify(SAVE_FAILED_MESSAGE);
        }
        e
    }
}
