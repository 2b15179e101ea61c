//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层只保存数据，不处理输入也不负责渲染。
//! 由 Update 层修改，由 View 层读取。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、应用主状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         App {
//!             exit: Option<ExitRequest>,  // None = 继续运行
//!             wizard: WizardState,        // 向导状态
//!             zones: ZoneMap,             // 最近一次渲染的点击区域
//!         }
//!
//!     ExitRequest::Confirm 表示正常退出（随后构建资源包），
//!     ExitRequest::Interrupt 表示 Ctrl+C 中断（直接退出，不构建）。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、向导状态（WizardState / PageState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/wizard.rs 与 src/model/page.rs 中定义：
//!
//!         WizardState {
//!             pages: Vec<PageState>,  // [角色页, 语言页]
//!             active: usize,          // 当前页面序号
//!         }
//!
//!         PageState {
//!             id: PageId,             // Characters / Locale
//!             items: Vec<Item>,       // 列表项
//!             selection: Selection,   // Multi(集合) / Single(索引)
//!             cursor: usize,          // 光标
//!         }
//!
//!     所有操作都作用于 active 指向的页面，翻页时其余页面原样保留。
//!
//!     数据流：
//!         用户按 ↓
//!             ↓
//!         event/handler.rs 返回 Wizard(CursorDown)
//!             ↓
//!         update/wizard.rs 调用 app.wizard.move_cursor(1)
//!             ↓
//!         view/components/item_list.rs 高亮光标所在行
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、点击区域（ZoneMap）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/zone.rs 中定义：
//!
//!         ControlId → Rect 的映射，每次渲染由 View 层重新生成，
//!         主循环通过 App::install_zones 整体替换。
//!         鼠标事件只与最新一轮的区域比对。
//!
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;
mod page;
mod wizard;
mod zone;

pub use app::{App, ExitRequest};
pub use page::{PageId, PageKind, PageState};
pub use wizard::WizardState;
pub use zone::{ControlId, ZoneMap};
