mod board;
mod fragment;
mod log_view;
mod panel;
mod roster;
mod session;
mod visibility;

pub mod commands;

pub use board::*;
pub use fragment::{compose, extract};
pub use log_view::*;
pub use panel::*;
pub use roster::*;
pub use session::*;
pub use visibility::*;
