pub mod app;
pub mod format;
pub mod terminal;
pub mod theme;
pub mod views;

pub use app::{App, CycleFailure, View};
pub use terminal::{init as init_terminal, restore as restore_terminal, Tui};
