//! Final wizard selection handed to the assembly engine

use std::collections::BTreeSet;

use crate::catalog::{Locale, CHARACTERS, LOCALES, SENTINEL_INDEX};

/// Snapshot of every page's selection, taken once when the session ends
/// normally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalSelection {
    /// Selected character indices (may contain [`SENTINEL_INDEX`])
    pub characters: BTreeSet<usize>,
    /// Selected locale index
    pub locale: usize,
}

impl FinalSelection {
    pub fn new(characters: impl IntoIterator<Item = usize>, locale: usize) -> Self {
        Self {
            characters: characters.into_iter().collect(),
            locale,
        }
    }

    /// Whether the stock voice stays selected (keep-mode build).
    pub fn keeps_stock_voice(&self) -> bool {
        self.characters.contains(&SENTINEL_INDEX)
    }

    /// Character folders to expand, ascending by index, sentinel excluded.
    pub fn voice_folders(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.characters
            .iter()
            .filter(|&&index| index != SENTINEL_INDEX)
            .filter_map(|&index| CHARACTERS.get(index).copied())
    }

    /// The chosen locale, if the index is inside the catalog.
    pub fn target_locale(&self) -> Option<&'static Locale> {
        LOCALES.get(self.locale)
    }
}

impl Default for FinalSelection {
    /// The wizard's initial state: stock voice kept, first locale.
    fn default() -> Self {
        Self::new([SENTINEL_INDEX], 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keeps_stock_voice() {
        let selection = FinalSelection::default();
        assert!(selection.keeps_stock_voice());
        assert_eq!(selection.voice_folders().count(), 0);
        assert_eq!(selection.target_locale().map(|l| l.code), Some("zh-CN"));
    }

    #[test]
    fn test_voice_folders_sorted_and_skip_sentinel() {
        let selection = FinalSelection::new([9, SENTINEL_INDEX, 0], 1);
        let folders: Vec<_> = selection.voice_folders().collect();
        assert_eq!(folders, vec!["1yoshino", "$yasuharu"]);
    }

    #[test]
    fn test_out_of_range_indices_are_ignored() {
        let selection = FinalSelection::new([42], 7);
        assert_eq!(selection.voice_folders().count(), 0);
        assert!(selection.target_locale().is_none());
    }
}
