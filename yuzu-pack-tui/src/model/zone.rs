//! 鼠标点击区域
//!
//! 每次渲染都会生成一张新的 `ZoneMap`（控件 ID → 本次渲染的矩形），
//! 并整体替换上一张。鼠标事件只与最近一次渲染的区域比对，
//! 旧区域在替换后即失效。

use ratatui::layout::{Position, Rect};

use super::page::PageId;

/// 可点击控件的稳定标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    /// 列表项
    Item { page: PageId, index: usize },
    /// 上一页按钮
    PrevButton,
    /// 下一页按钮
    NextButton,
    /// 确认按钮
    ConfirmButton,
}

/// 一个控件的点击区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    pub id: ControlId,
    pub area: Rect,
}

impl Zone {
    /// 记录的起始行
    pub fn row(&self) -> u16 {
        self.area.y
    }

    /// 坐标是否落在区域内
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }
}

/// 一次渲染产生的全部点击区域
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneMap {
    generation: u64,
    zones: Vec<Zone>,
}

impl ZoneMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记控件区域，同一控件重复登记时以最后一次为准
    pub fn mark(&mut self, id: ControlId, area: Rect) {
        if area.is_empty() {
            return;
        }
        match self.zones.iter_mut().find(|zone| zone.id == id) {
            Some(zone) => zone.area = area,
            None => self.zones.push(Zone { id, area }),
        }
    }

    pub fn get(&self, id: ControlId) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.id == id)
    }

    /// 渲染代数，每次替换加一
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 用新一轮渲染的区域整体替换当前区域
    pub fn replace_with(&mut self, mut next: ZoneMap) {
        next.generation = self.generation.wrapping_add(1);
        *self = next;
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_and_get() {
        let mut zones = ZoneMap::new();
        zones.mark(ControlId::ConfirmButton, Rect::new(10, 5, 6, 1));
        let zone = zones.get(ControlId::ConfirmButton).copied();
        assert_eq!(zone.map(|z| z.row()), Some(5));
        assert!(zone.is_some_and(|z| z.contains(10, 5) && z.contains(15, 5)));
        assert!(zone.is_some_and(|z| !z.contains(16, 5) && !z.contains(10, 6)));
        assert!(zones.get(ControlId::PrevButton).is_none());
    }

    #[test]
    fn test_mark_twice_keeps_latest() {
        let mut zones = ZoneMap::new();
        zones.mark(ControlId::NextButton, Rect::new(0, 0, 4, 1));
        zones.mark(ControlId::NextButton, Rect::new(0, 3, 4, 1));
        assert_eq!(zones.len(), 1);
        assert_eq!(zones.get(ControlId::NextButton).map(Zone::row), Some(3));
    }

    #[test]
    fn test_empty_area_is_not_marked() {
        let mut zones = ZoneMap::new();
        zones.mark(ControlId::PrevButton, Rect::new(3, 3, 0, 1));
        assert!(zones.is_empty());
    }

    #[test]
    fn test_replace_invalidates_previous_pass() {
        let item = ControlId::Item {
            page: PageId::Characters,
            index: 0,
        };
        let mut current = ZoneMap::new();
        let mut first = ZoneMap::new();
        first.mark(item, Rect::new(0, 2, 20, 1));
        current.replace_with(first);
        assert_eq!(current.generation(), 1);

        let mut second = ZoneMap::new();
        second.mark(ControlId::ConfirmButton, Rect::new(0, 9, 6, 1));
        current.replace_with(second);

        assert_eq!(current.generation(), 2);
        assert!(current.get(item).is_none());
    }
}
