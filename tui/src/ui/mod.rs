pub mod draw;
pub mod layout;
pub mod theme;
pub mod widgets;
