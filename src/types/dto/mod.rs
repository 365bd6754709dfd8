pub mod common;
pub mod widget;
