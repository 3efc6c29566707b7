// FAQ accordion: at most one answer is expanded at a time

// (question key, answer key) pairs in display order
pub const FAQ_KEYS: [(&str, &str); 5] = [
    ("faq1-q", "faq1-a"),
    ("faq2-q", "faq2-a"),
    ("faq3-q", "faq3-a"),
    ("faq4-q", "faq4-a"),
    ("faq5-q", "faq5-a"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, item: usize) -> bool {
        self.open == Some(item)
    }

    // Opening an item closes every other one; toggling the open item closes it.
    pub fn toggle(&mut self, item: usize) -> Option<usize> {
        if item >= self.len {
            return self.open;
        }
        self.open = if self.open == Some(item) {
            None
        } else {
            Some(item)
        };
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::TranslationTable;
    use crate::tour::Locale;

    #[test]
    fn test_toggle_keeps_single_item_open() {
        let mut faq = Accordion::new(FAQ_KEYS.len());
        assert_eq!(faq.open_item(), None);

        assert_eq!(faq.toggle(1), Some(1));
        assert_eq!(faq.toggle(3), Some(3));
        assert!(!faq.is_open(1));
        assert!(faq.is_open(3));

        assert_eq!(faq.toggle(3), None);
        assert_eq!(faq.toggle(99), None);
    }

    #[test]
    fn test_faq_keys_are_translated() {
        let table = TranslationTable::bundled().unwrap();
        for (question, answer) in FAQ_KEYS {
            for locale in Locale::ALL {
                assert!(table.get(locale, question).is_some(), "{question}");
                assert!(table.get(locale, answer).is_some(), "{answer}");
            }
        }
    }
}
