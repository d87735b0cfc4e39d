//! Terminal user interface.

mod app;
mod practice;
pub mod theme;
mod widgets;

pub use app::App;
