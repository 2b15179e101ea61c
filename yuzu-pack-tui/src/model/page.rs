//! 向导页面状态定义

use std::collections::BTreeSet;

/// 页面标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    /// 角色语音（多选）
    Characters,
    /// 目标语言（单选）
    Locale,
}

/// 选择模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// 多选：任意子集
    Multi,
    /// 单选：恰好一项
    Single,
}

/// 列表项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// 在页面中的固定位置索引
    pub index: usize,
    /// 显示文本
    pub label: String,
}

/// 选择集合
///
/// 变体即选择模式：`Single` 在结构上就只能容纳一个索引。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Multi(BTreeSet<usize>),
    Single(usize),
}

impl Selection {
    /// 选择模式
    pub fn kind(&self) -> PageKind {
        match self {
            Selection::Multi(_) => PageKind::Multi,
            Selection::Single(_) => PageKind::Single,
        }
    }

    /// 是否选中
    pub fn contains(&self, index: usize) -> bool {
        match self {
            Selection::Multi(set) => set.contains(&index),
            Selection::Single(selected) => *selected == index,
        }
    }

    /// 切换：多选取异或，单选整体替换
    pub fn toggle(&mut self, index: usize) {
        match self {
            Selection::Multi(set) => {
                if !set.remove(&index) {
                    set.insert(index);
                }
            }
            Selection::Single(selected) => *selected = index,
        }
    }

    /// 已选索引（升序）
    pub fn indices(&self) -> BTreeSet<usize> {
        match self {
            Selection::Multi(set) => set.clone(),
            Selection::Single(selected) => BTreeSet::from([*selected]),
        }
    }
}

/// 单个页面的状态：列表、选择集合、光标
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub id: PageId,
    pub items: Vec<Item>,
    pub selection: Selection,
    /// 光标位置，始终满足 0 <= cursor < items.len()
    pub cursor: usize,
}

impl PageState {
    /// 创建页面，光标位于第一项
    pub fn new(id: PageId, labels: impl IntoIterator<Item = String>, selection: Selection) -> Self {
        let items: Vec<Item> = labels
            .into_iter()
            .enumerate()
            .map(|(index, label)| Item { index, label })
            .collect();
        debug_assert!(!items.is_empty(), "wizard pages are never empty");

        Self {
            id,
            items,
            selection,
            cursor: 0,
        }
    }

    /// 选择模式
    pub fn kind(&self) -> PageKind {
        self.selection.kind()
    }

    /// 移动光标，夹在 [0, len-1] 内，不回绕
    pub fn move_cursor(&mut self, delta: isize) {
        let last = self.items.len().saturating_sub(1);
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    /// 切换指定项；越界索引被忽略，返回是否生效
    pub fn toggle_at(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.selection.toggle(index);
        true
    }

    /// 切换光标所在项
    pub fn toggle_at_cursor(&mut self) {
        self.toggle_at(self.cursor);
    }

    /// 是否选中
    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.contains(index)
    }
}
