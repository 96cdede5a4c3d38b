//! Vocabulary store: fixed defaults plus learned history per input field.
//!
//! Colors and sizes ship with bilingual defaults the operator can pick
//! without typing. Anything typed in by hand (a new item code, an odd
//! color) lands in the history for that field so it can be re-selected
//! later. Defaults are never duplicated into history - exact string
//! equality, no fuzzy matching.

/// Fixed color options offered before any history exists.
pub const DEFAULT_COLORS: [&str; 7] = [
    "黑/Hitam",
    "白/Putih",
    "灰/Abu",
    "藍/Biru",
    "深藍/Biru Tua",
    "淺藍/Biru Muda",
    "米色/Krem",
];

/// Fixed size options offered before any history exists.
pub const DEFAULT_SIZES: [&str; 7] = ["XS", "S", "M", "L", "XL", "2XL", "3XL"];

/// The three vocabularies the store tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabKind {
    Item,
    Color,
    Size,
}

impl VocabKind {
    /// Fixed defaults for this kind. Item codes have none.
    pub fn defaults(self) -> &'static [&'static str] {
        match self {
            VocabKind::Item => &[],
            VocabKind::Color => &DEFAULT_COLORS,
            VocabKind::Size => &DEFAULT_SIZES,
        }
    }
}

/// Growable, insertion-ordered history sets for item / color / size input.
#[derive(Debug, Clone, Default)]
pub struct VocabularyStore {
    items: Vec<String>,
    colors: Vec<String>,
    sizes: Vec<String>,
}

impl VocabularyStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn history_mut(&mut self, kind: VocabKind) -> &mut Vec<String> {
        match kind {
            VocabKind::Item => &mut self.items,
            VocabKind::Color => &mut self.colors,
            VocabKind::Size => &mut self.sizes,
        }
    }

    /// Learned values for a kind, in first-seen order.
    pub fn history(&self, kind: VocabKind) -> &[String] {
        match kind {
            VocabKind::Item => &self.items,
            VocabKind::Color => &self.colors,
            VocabKind::Size => &self.sizes,
        }
    }

    /// Add a value to history unless it is blank, a default for this kind,
    /// or already known. Returns whether anything was added.
    pub fn record_if_new(&mut self, kind: VocabKind, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        if kind.defaults().contains(&value) {
            return false;
        }
        let history = self.history_mut(kind);
        if history.iter().any(|known| known == value) {
            return false;
        }
        history.push(value.to_string());
        true
    }

    /// Everything selectable for a kind: defaults first, then history, in
    /// a stable order for UI presentation.
    pub fn options(&self, kind: VocabKind) -> Vec<String> {
        kind.defaults()
            .iter()
            .map(|s| s.to_string())
            .chain(self.history(kind).iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_if_new_is_idempotent() {
        let mut vocab = VocabularyStore::new();
        assert!(vocab.record_if_new(VocabKind::Item, "A01"));
        assert!(!vocab.record_if_new(VocabKind::Item, "A01"));
        assert_eq!(vocab.history(VocabKind::Item), ["A01"]);
    }

    #[test]
    fn test_defaults_never_enter_history() {
        let mut vocab = VocabularyStore::new();
        assert!(!vocab.record_if_new(VocabKind::Color, "黑/Hitam"));
        assert!(vocab.history(VocabKind::Color).is_empty());
    }

    #[test]
    fn test_blank_values_are_skipped() {
        let mut vocab = VocabularyStore::new();
        assert!(!vocab.record_if_new(VocabKind::Size, ""));
        assert!(!vocab.record_if_new(VocabKind::Size, "   "));
        assert!(vocab.history(VocabKind::Size).is_empty());
    }

    #[test]
    fn test_default_match_is_literal_per_kind() {
        let mut vocab = VocabularyStore::new();
        // A size default is not a color default; it goes into color history.
        assert!(vocab.record_if_new(VocabKind::Color, "XL"));
        // Differing only by suffix is still a different string.
        assert!(vocab.record_if_new(VocabKind::Color, "黑/Hitam Tua"));
        assert_eq!(vocab.history(VocabKind::Color), ["XL", "黑/Hitam Tua"]);
    }

    #[test]
    fn test_options_lists_defaults_then_history() {
        let mut vocab = VocabularyStore::new();
        vocab.record_if_new(VocabKind::Size, "4XL");
        vocab.record_if_new(VocabKind::Size, "Free");

        let options = vocab.options(VocabKind::Size);
        assert_eq!(options.len(), DEFAULT_SIZES.len() + 2);
        assert_eq!(options[0], "XS");
        assert_eq!(options[options.len() - 2], "4XL");
        assert_eq!(options[options.len() - 1], "Free");
    }

    #[test]
    fn test_items_have_no_defaults() {
        let vocab = VocabularyStore::new();
        assert!(vocab.options(VocabKind::Item).is_empty());
    }
}
