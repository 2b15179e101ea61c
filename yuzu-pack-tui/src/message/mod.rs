//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁
//! 所有的用户操作都通过 Message 来表达，
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;
//!         mod wizard;
//!
//!         pub use app::AppMessage;
//!         pub use wizard::WizardMessage;
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!
//!         pub enum AppMessage {
//!             Quit,                       // 正常退出，随后汇总选择并构建
//!             Interrupt,                  // Ctrl+C，跳过构建
//!             Wizard(WizardMessage),      // 向导子消息，与主消息分离
//!             Noop,                       // 无操作，用于代替 Option::None
//!         }
//!
//!     键盘与鼠标产生的是同一套消息：
//!         ↓ / j / s           → Wizard(CursorDown)
//!         点击列表第 3 项      → Wizard(Click(3))
//!         点击 [ Next ]       → Wizard(NextPage)
//!         点击 [ OK ]         → Quit
//!
//!
//! 最后，Event 将从 Message 处获取的消息传入 Update 层进行处理。
//!     → 去往 src/update/mod.rs 吧
//!

mod app;
mod wizard;

pub use app::AppMessage;
pub use wizard::WizardMessage;
