//! 向导状态机
//!
//! 所有页面的状态集中在一个 `WizardState` 里，用 `active` 字段显式指明
//! 当前页面。翻页只改变 `active`，各页面的光标与选择互不影响。

use std::collections::BTreeSet;

use yuzu_pack_core::catalog::{CHARACTERS, LOCALES, SENTINEL_INDEX};
use yuzu_pack_core::FinalSelection;

use super::page::{PageId, PageKind, PageState, Selection};
use crate::i18n::tr;

/// 向导状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pages: Vec<PageState>,
    active: usize,
}

impl WizardState {
    /// 由页面列表创建，第一页为当前页
    pub fn new(pages: Vec<PageState>) -> Self {
        debug_assert!(!pages.is_empty(), "wizard needs at least one page");
        Self { pages, active: 0 }
    }

    /// 按内置目录创建两页向导：
    /// - 角色页（多选），默认选中“保留原版语音”
    /// - 语言页（单选），默认选中第一项
    pub fn from_catalog() -> Self {
        let characters = PageState::new(
            PageId::Characters,
            CHARACTERS
                .iter()
                .map(|folder| tr(&format!("char.{folder}")).to_string()),
            Selection::Multi(BTreeSet::from([SENTINEL_INDEX])),
        );
        let locales = PageState::new(
            PageId::Locale,
            LOCALES
                .iter()
                .map(|locale| tr(&format!("lang.{}", locale.code)).to_string()),
            Selection::Single(0),
        );
        Self::new(vec![characters, locales])
    }

    /// 当前页面
    pub fn active_page(&self) -> &PageState {
        &self.pages[self.active]
    }

    fn active_page_mut(&mut self) -> &mut PageState {
        &mut self.pages[self.active]
    }

    /// 当前页面序号
    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page(&self, id: PageId) -> Option<&PageState> {
        self.pages.iter().find(|page| page.id == id)
    }

    /// 是否存在上一页
    pub fn has_prev(&self) -> bool {
        self.active > 0
    }

    /// 是否存在下一页
    pub fn has_next(&self) -> bool {
        self.active + 1 < self.pages.len()
    }

    pub fn move_cursor(&mut self, delta: isize) {
        self.active_page_mut().move_cursor(delta);
    }

    pub fn toggle_at_cursor(&mut self) {
        self.active_page_mut().toggle_at_cursor();
    }

    pub fn toggle_at(&mut self, index: usize) -> bool {
        self.active_page_mut().toggle_at(index)
    }

    /// 点击某一项：切换该项；多选页的光标同时移到该项，单选页光标不动
    pub fn click_item(&mut self, index: usize) {
        let page = self.active_page_mut();
        if page.toggle_at(index) && page.kind() == PageKind::Multi {
            page.cursor = index;
        }
    }

    /// 下一页，越界时不动
    pub fn next_page(&mut self) -> bool {
        if self.has_next() {
            self.active += 1;
            true
        } else {
            false
        }
    }

    /// 上一页，越界时不动
    pub fn prev_page(&mut self) -> bool {
        if self.has_prev() {
            self.active -= 1;
            true
        } else {
            false
        }
    }

    /// 汇总各页的最终选择
    pub fn snapshot(&self) -> FinalSelection {
        let characters = self
            .page(PageId::Characters)
            .map(|page| page.selection.indices())
            .unwrap_or_default();
        let locale = self
            .page(PageId::Locale)
            .and_then(|page| page.selection.indices().first().copied())
            .unwrap_or(0);

        FinalSelection { characters, locale }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::from_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let wizard = WizardState::from_catalog();
        assert_eq!(wizard.active_index(), 0);
        assert_eq!(wizard.page_count(), 2);

        let characters = wizard.active_page();
        assert_eq!(characters.kind(), PageKind::Multi);
        assert_eq!(characters.items.len(), CHARACTERS.len());
        assert_eq!(characters.selection.indices(), BTreeSet::from([SENTINEL_INDEX]));

        let locale = wizard.page(PageId::Locale).map(|p| &p.selection);
        assert_eq!(locale, Some(&Selection::Single(0)));
        assert_eq!(wizard.snapshot(), FinalSelection::default());
    }

    #[test]
    fn test_page_navigation_is_bounded() {
        let mut wizard = WizardState::from_catalog();
        assert!(!wizard.prev_page());
        assert_eq!(wizard.active_index(), 0);
        assert!(wizard.next_page());
        assert!(!wizard.next_page());
        assert_eq!(wizard.active_index(), 1);
        assert!(wizard.prev_page());
        assert_eq!(wizard.active_index(), 0);
    }

    #[test]
    fn test_page_switch_preserves_each_page_state() {
        let mut wizard = WizardState::from_catalog();
        wizard.move_cursor(4);
        wizard.toggle_at_cursor();
        let characters_before = wizard.active_page().clone();

        wizard.next_page();
        wizard.move_cursor(2);
        wizard.toggle_at_cursor();
        let locale_before = wizard.active_page().clone();

        wizard.prev_page();
        assert_eq!(wizard.active_page(), &characters_before);
        wizard.next_page();
        assert_eq!(wizard.active_page(), &locale_before);
    }

    #[test]
    fn test_operations_only_touch_active_page() {
        let mut wizard = WizardState::from_catalog();
        let locale_before = wizard.page(PageId::Locale).cloned();
        wizard.move_cursor(3);
        wizard.toggle_at(7);
        assert_eq!(wizard.page(PageId::Locale).cloned(), locale_before);
    }

    #[test]
    fn test_click_item_moves_cursor() {
        let mut wizard = WizardState::from_catalog();
        wizard.click_item(5);
        assert_eq!(wizard.active_page().cursor, 5);
        assert!(wizard.active_page().is_selected(5));

        wizard.click_item(99);
        assert_eq!(wizard.active_page().cursor, 5);
    }

    #[test]
    fn test_click_item_on_single_page_keeps_cursor() {
        let mut wizard = WizardState::from_catalog();
        wizard.next_page();
        wizard.click_item(2);
        assert_eq!(wizard.active_page().cursor, 0);
        assert_eq!(wizard.active_page().selection, Selection::Single(2));
    }

    #[test]
    fn test_snapshot_scenario_c() {
        let mut wizard = WizardState::from_catalog();
        wizard.toggle_at(SENTINEL_INDEX);
        wizard.toggle_at(0);
        wizard.next_page();
        wizard.toggle_at(2);

        let selection = wizard.snapshot();
        assert_eq!(selection.characters, BTreeSet::from([0]));
        assert_eq!(selection.locale, 2);
        assert!(!selection.keeps_stock_voice());
    }
}
