//! Book cards and their reconciliation against server pushes.
//!
//! Cards are keyed by the normalized display name. Pushes are matched by that
//! key only, so applying the same push twice leaves the list unchanged.

use std::sync::LazyLock;

use common::model::book::{BookItem, BookStatus, StatusTone};
use regex::Regex;

static YEAR_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(\d{4}\)$").expect("year suffix pattern"));

/// Identity of a book for reconciliation: trimmed, trailing `(1965)` removed,
/// lowercased.
pub fn identity(name: &str) -> String {
    YEAR_SUFFIX.replace(name.trim(), "").trim().to_lowercase()
}

pub const ADD_LABEL: &str = "Add";
pub const ADDING_LABEL: &str = "Adding...";

#[derive(Debug, Clone, PartialEq)]
pub struct BookCard {
    key: String,
    book: BookItem,
    adding: bool,
    overview_busy: bool,
}

impl BookCard {
    fn new(book: BookItem) -> Self {
        Self {
            key: identity(&book.name),
            book,
            adding: false,
            overview_busy: false,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn book(&self) -> &BookItem {
        &self.book
    }

    pub fn status(&self) -> &BookStatus {
        &self.book.status
    }

    pub fn tone(&self) -> StatusTone {
        self.book.status.tone()
    }

    pub fn action_enabled(&self) -> bool {
        self.tone() == StatusTone::Pending && !self.adding
    }

    pub fn action_label(&self) -> &str {
        match self.tone() {
            StatusTone::Success | StatusTone::Failure => self.book.status.as_str(),
            StatusTone::Pending if self.adding => ADDING_LABEL,
            StatusTone::Pending => ADD_LABEL,
        }
    }

    pub fn overview_enabled(&self) -> bool {
        !self.overview_busy
    }

    fn patch_status(&mut self, status: &BookStatus) {
        self.book.status = status.clone();
        self.adding = false;
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookList {
    cards: Vec<BookCard>,
}

impl BookList {
    pub fn cards(&self) -> &[BookCard] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&BookCard> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Appends in arrival order. A book that already has a card only has its
    /// status reconciled. Returns the number of new cards.
    pub fn append(&mut self, books: Vec<BookItem>) -> usize {
        let mut appended = 0;
        for book in books {
            if self.apply_status(&book) == 0 {
                self.cards.push(BookCard::new(book));
                appended += 1;
            }
        }
        appended
    }

    /// Patches the status of every card matching `book`. Never appends.
    pub fn apply_status(&mut self, book: &BookItem) -> usize {
        let key = identity(&book.name);
        let mut touched = 0;
        for card in self.cards.iter_mut().filter(|card| card.key == key) {
            card.patch_status(&book.status);
            touched += 1;
        }
        touched
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Locks the card's add button and hands back the book to send. Does
    /// nothing for a card that is locked already.
    pub fn begin_add(&mut self, index: usize) -> Option<BookItem> {
        let card = self.cards.get_mut(index)?;
        if !card.action_enabled() {
            return None;
        }
        card.adding = true;
        Some(card.book.clone())
    }

    pub fn mark_overview_busy(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.overview_busy = true;
        }
    }

    pub fn release_overview_buttons(&mut self) {
        for card in &mut self.cards {
            card.overview_busy = false;
        }
    }
}
