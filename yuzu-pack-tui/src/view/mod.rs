//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改状态。
//! 每次渲染顺带登记可点击控件的区域，返回一张新的 `ZoneMap`，
//! 由主循环交给 `App::install_zones` 替换旧区域。
//!
//!
//!     ┌─ 标题 ──────────────────────────────┐
//!     │ 帮助说明                             │
//!     │                                      │
//!     │ > [x] 列表项                         │  ← components/item_list.rs
//!     │   [ ] 列表项                         │
//!     │                                      │
//!     │ ••                                   │  ← components/paginator.rs
//!     │                                      │
//!     │ [ 上一页 ]  [ 下一页 ]  [ 完成 ]      │  ← components/button_bar.rs
//!     │                                      │
//!     │ ↑↓ 移动 • ←→ 翻页 • ...              │  ← components/statusbar.rs
//!     └──────────────────────────────────────┘
//!

mod components;
mod layout;
pub mod theme;

pub use layout::render;
