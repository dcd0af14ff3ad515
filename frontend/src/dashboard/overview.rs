use common::model::book::BookItem;

/// Book overview modal. Replaced wholesale by each `overview` push.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverviewDialog {
    shown: Option<BookItem>,
}

impl OverviewDialog {
    pub fn is_open(&self) -> bool {
        self.shown.is_some()
    }

    /// Returns true when the dialog was closed before, i.e. the page scroll
    /// needs locking.
    pub fn show(&mut self, book: BookItem) -> bool {
        self.shown.replace(book).is_none()
    }

    /// Returns true when the dialog was open.
    pub fn close(&mut self) -> bool {
        self.shown.take().is_some()
    }

    pub fn title(&self) -> String {
        self.shown
            .as_ref()
            .map(|book| format!("{} - {}", book.author, book.name))
            .unwrap_or_default()
    }

    /// Body paragraphs in display order.
    pub fn lines(&self) -> Vec<String> {
        let Some(book) = &self.shown else {
            return Vec::new();
        };
        vec![
            book.overview.clone(),
            format!("Published Date: {}", book.published_date),
            format!("Page Count: {}", book.page_count),
            format!("Recommendation from: {}", book.base_book),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_title_and_body() {
        let mut dialog = OverviewDialog::default();
        assert!(dialog.show(BookItem {
            name: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            overview: "Desert planet.".to_string(),
            published_date: "1965".to_string(),
            page_count: "412".to_string(),
            base_book: "Frank Herbert - Dune Messiah".to_string(),
            ..BookItem::default()
        }));

        assert_eq!(dialog.title(), "Frank Herbert - Dune");
        assert_eq!(
            dialog.lines(),
            vec![
                "Desert planet.",
                "Published Date: 1965",
                "Page Count: 412",
                "Recommendation from: Frank Herbert - Dune Messiah",
            ]
        );
    }

    #[test]
    fn second_push_replaces_without_relocking() {
        let mut dialog = OverviewDialog::default();
        assert!(dialog.show(BookItem::default()));
        assert!(!dialog.show(BookItem::default()));
        assert!(dialog.close());
        assert!(!dialog.close());
    }
}
