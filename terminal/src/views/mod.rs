pub mod game;
pub mod sign_in;

pub use game::GameViewState;
pub use sign_in::SignInState;

use client::Session;
use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::app::AppCommand;

pub trait View {
    fn handle_input(&mut self, key: KeyEvent, session: &mut Session) -> Option<AppCommand>;
    fn render(&self, frame: &mut Frame, session: &Session);
}
