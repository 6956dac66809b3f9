use client::Session;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::View;
use crate::app::AppCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Nickname,
    Room,
    Password,
}

impl Field {
    fn next(self) -> Field {
        match self {
            Field::Nickname => Field::Room,
            Field::Room => Field::Password,
            Field::Password => Field::Nickname,
        }
    }

    fn prev(self) -> Field {
        match self {
            Field::Nickname => Field::Password,
            Field::Room => Field::Nickname,
            Field::Password => Field::Room,
        }
    }
}

pub struct SignInState {
    nickname: String,
    room: String,
    password: String,
    focus: Field,
}

impl SignInState {
    /// Prefills the form from CLI arguments and the bootstrap fragment, the
    /// way a shared room link would.
    pub fn from_bootstrap(nickname: Option<String>, fragment: Option<&str>) -> Self {
        let room = fragment
            .and_then(|f| client::extract(f, "room"))
            .unwrap_or_default();
        let password = fragment
            .and_then(|f| client::extract(f, "password"))
            .unwrap_or_default();
        SignInState {
            nickname: nickname.unwrap_or_default(),
            room,
            password,
            focus: Field::Nickname,
        }
    }

    fn focused_value(&mut self) -> &mut String {
        match self.focus {
            Field::Nickname => &mut self.nickname,
            Field::Room => &mut self.room,
            Field::Password => &mut self.password,
        }
    }

    fn field_widget(&self, title: &'static str, value: &str, field: Field, masked: bool) -> Paragraph<'_> {
        let display = if masked {
            "*".repeat(value.chars().count())
        } else {
            value.to_string()
        };
        let border = if self.focus == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Paragraph::new(display).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border),
        )
    }
}

impl View for SignInState {
    fn handle_input(&mut self, key: KeyEvent, session: &mut Session) -> Option<AppCommand> {
        match key.code {
            KeyCode::Esc => Some(AppCommand::Quit),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                None
            }
            KeyCode::Backspace => {
                self.focused_value().pop();
                None
            }
            KeyCode::Enter => Some(AppCommand::Send(session.join_intent(
                &self.nickname,
                &self.room,
                &self.password,
            ))),
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppCommand::Send(session.create_intent(
                    &self.nickname,
                    &self.room,
                    &self.password,
                )))
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.focused_value().push(c);
                None
            }
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame, session: &Session) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new("CODEGRID")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let form = centered_form(chunks[1]);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(2),
            ])
            .split(form);

        frame.render_widget(
            self.field_widget("Nickname", &self.nickname, Field::Nickname, false),
            rows[0],
        );
        frame.render_widget(
            self.field_widget("Room", &self.room, Field::Room, false),
            rows[1],
        );
        frame.render_widget(
            self.field_widget("Password", &self.password, Field::Password, true),
            rows[2],
        );

        if let Some(msg) = session.error() {
            let error = Paragraph::new(Line::from(msg))
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center);
            frame.render_widget(error, rows[3]);
        }

        let footer = match session.stats() {
            Some(stats) => format!(
                "Players: {} | Rooms: {}   Tab: Next field | Enter: Join | Ctrl+N: Create | Esc: Quit",
                stats.players, stats.rooms
            ),
            None => "Tab: Next field | Enter: Join | Ctrl+N: Create | Esc: Quit".to_string(),
        };
        let help = Paragraph::new(footer)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }
}

fn centered_form(area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(11),
            Constraint::Min(1),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(44),
            Constraint::Min(1),
        ])
        .split(vertical[1]);
    horizontal[1]
}
