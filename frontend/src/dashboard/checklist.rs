//! Sidebar checklist of library books used to seed a run.

use common::model::checklist::{ChecklistEntry, SidebarOutcome, SidebarUpdate};

pub const FETCHING_TEXT: &str = "Accessing Readarr API";
pub const RETRIEVED_TEXT: &str = "Readarr List Retrieved";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChecklistPanel {
    entries: Vec<ChecklistEntry>,
    /// State of the master checkbox. Recomputed from the entries on every
    /// entry change and every list render, but `set_all` only broadcasts.
    select_all: bool,
    select_all_visible: bool,
    fetching: bool,
    status_text: String,
}

impl ChecklistPanel {
    pub fn entries(&self) -> &[ChecklistEntry] {
        &self.entries
    }

    pub fn select_all(&self) -> bool {
        self.select_all
    }

    pub fn select_all_visible(&self) -> bool {
        self.select_all_visible
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// True iff every entry is checked. An empty list counts as all checked.
    pub fn all_checked(&self) -> bool {
        self.entries.iter().all(|entry| entry.checked)
    }

    pub fn selected_names(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| entry.checked)
            .map(|entry| entry.name.clone())
            .collect()
    }

    pub fn replace(&mut self, entries: Vec<ChecklistEntry>) {
        self.entries = entries;
        self.select_all_visible = true;
        self.select_all = self.all_checked();
    }

    pub fn toggle(&mut self, index: usize, checked: bool) -> bool {
        let Some(entry) = self.entries.get_mut(index) else {
            return false;
        };
        entry.checked = checked;
        self.select_all = self.all_checked();
        true
    }

    pub fn set_all(&mut self, checked: bool) {
        self.select_all = checked;
        for entry in &mut self.entries {
            entry.checked = checked;
        }
    }

    /// A fresh list was requested: drop the current one until it arrives.
    pub fn begin_fetch(&mut self) {
        self.fetching = true;
        self.status_text = FETCHING_TEXT.to_string();
        self.entries.clear();
    }

    pub fn apply_update(&mut self, update: &SidebarUpdate) {
        match update.outcome() {
            SidebarOutcome::Retrieved(entries) => {
                self.status_text = RETRIEVED_TEXT.to_string();
                self.replace(entries);
            }
            SidebarOutcome::Failed { code } => {
                self.status_text = code;
                self.select_all = self.all_checked();
            }
        }
        self.fetching = false;
    }
}
