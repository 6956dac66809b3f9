use anyhow::Result;
use client::{Effect, Session};
use common::{ClientCommand, ServerEvent};
use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::transport::Transport;
use crate::views::{GameViewState, SignInState, View};

#[derive(Debug)]
pub enum AppCommand {
    Quit,
    Send(ClientCommand),
    ConfirmActive,
    AcknowledgeNotice,
}

pub enum AppState {
    SignIn(Box<SignInState>),
    Game(Box<GameViewState>),
}

pub struct App {
    pub session: Session,
    pub state: AppState,
    nickname: Option<String>,
}

impl App {
    pub fn new(nickname: Option<String>, fragment: Option<&str>) -> Self {
        let sign_in = SignInState::from_bootstrap(nickname.clone(), fragment);
        App {
            session: Session::new(),
            state: AppState::SignIn(Box::new(sign_in)),
            nickname,
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand> {
        match &mut self.state {
            AppState::SignIn(view) => view.handle_input(key, &mut self.session),
            AppState::Game(view) => view.handle_input(key, &mut self.session),
        }
    }

    /// Applies one inbound event and swaps views when the session says so.
    /// Board state is never patched: a reset effect drops the view's local
    /// state and the next frame rebuilds everything from the snapshot.
    pub fn handle_server_event(&mut self, event: ServerEvent) {
        match self.session.handle_event(event) {
            Effect::EnterRoom => {
                self.state = AppState::Game(Box::new(GameViewState::new()));
            }
            Effect::LeaveRoom => {
                let sign_in = SignInState::from_bootstrap(self.nickname.clone(), None);
                self.state = AppState::SignIn(Box::new(sign_in));
            }
            Effect::FullReset => {
                if let AppState::Game(view) = &mut self.state {
                    view.reset();
                }
            }
            Effect::Redraw | Effect::None => {}
        }
    }

    pub async fn handle_command(
        &mut self,
        command: AppCommand,
        transport: &mut Transport,
    ) -> Result<()> {
        match command {
            AppCommand::Send(cmd) => transport.send(&cmd).await?,
            AppCommand::ConfirmActive => {
                if let Some(cmd) = self.session.confirm_active() {
                    transport.send(&cmd).await?;
                }
            }
            AppCommand::AcknowledgeNotice => self.session.acknowledge_notice(),
            AppCommand::Quit => {
                // Handled in main loop
            }
        }
        Ok(())
    }

    pub fn render(&self, frame: &mut Frame) {
        match &self.state {
            AppState::SignIn(view) => view.render(frame, &self.session),
            AppState::Game(view) => view.render(frame, &self.session),
        }
    }
}
