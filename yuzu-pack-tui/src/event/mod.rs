//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘/鼠标等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , read_event};
//!
//!
//!     其中有：
//!         · read_event      阻塞读取下一个事件，受 ~/app.rs 调用
//!                           没有超时，界面只在有事件时重绘
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件，仅处理 Press
//!             Event::Mouse(MouseEvent)            // 鼠标事件，仅处理左键按下
//!             Event::Resize(width , height)       // 终端窗口大小发生变化，重绘终端
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 鼠标命中测试
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     与 app.zones（最近一次渲染的区域）比对，按以下顺序：
//!         1. [ Prev ]  仅当存在上一页      → Wizard(PrevPage)
//!         2. [ Next ]  仅当存在下一页      → Wizard(NextPage)
//!         3. [ OK ]                        → Quit
//!         4. 当前页的列表项，落在区域内且行号一致 → Wizard(Click(index))
//!
//!     命中第一个即返回，每次按下最多一条消息。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, read_event};
