mod game;
mod protocol;

pub use game::*;
pub use protocol::*;
