//! 界面组件

pub mod button_bar;
pub mod item_list;
pub mod paginator;
pub mod statusbar;
