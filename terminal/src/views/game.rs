use std::cell::{Cell, RefCell};

use client::{
    InfoPanel, Notice, RenderPlan, Roster, RosterEntry, Session, TileAttr, TileDescriptor,
    commands, toggle_enabled,
};
use common::{BOARD_SIZE, Consensus, Difficulty, Mode, Pack, Role, Team, TileKind};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
    },
};

use super::View;
use crate::app::AppCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClueField {
    Word,
    Count,
}

struct ClueEntry {
    word: String,
    count: String,
    focus: ClueField,
}

impl ClueEntry {
    fn new() -> Self {
        ClueEntry {
            word: String::new(),
            count: "1".to_string(),
            focus: ClueField::Word,
        }
    }

    fn focused_value(&mut self) -> &mut String {
        match self.focus {
            ClueField::Word => &mut self.word,
            ClueField::Count => &mut self.count,
        }
    }
}

pub struct GameViewState {
    cursor: (usize, usize),
    clue_entry: Option<ClueEntry>,
    log_scroll: u16,
    log_total_lines: Cell<u16>,
    log_scrollbar_state: RefCell<ScrollbarState>,
}

impl GameViewState {
    pub fn new() -> Self {
        GameViewState {
            cursor: (0, 0),
            clue_entry: None,
            log_scroll: 0,
            log_total_lines: Cell::new(0),
            log_scrollbar_state: RefCell::new(ScrollbarState::default()),
        }
    }

    /// Drops all view-local state. Called when visibility semantics changed
    /// (role or difficulty switch, new game) so nothing stale survives; the
    /// next frame rebuilds the board entirely from the snapshot.
    pub fn reset(&mut self) {
        *self = GameViewState::new();
    }

    fn scroll_log_up(&mut self, lines: u16) {
        self.log_scroll = self.log_scroll.saturating_sub(lines);
        let mut scrollbar_state = self.log_scrollbar_state.borrow_mut();
        *scrollbar_state = scrollbar_state.position(self.log_scroll as usize);
    }

    fn scroll_log_down(&mut self, lines: u16) {
        let max_scroll = self.log_total_lines.get().saturating_sub(1);
        self.log_scroll = (self.log_scroll + lines).min(max_scroll);
        let mut scrollbar_state = self.log_scrollbar_state.borrow_mut();
        *scrollbar_state = scrollbar_state.position(self.log_scroll as usize);
    }

    fn move_cursor(&mut self, di: isize, dj: isize) {
        let (i, j) = self.cursor;
        let clamp = |v: isize| v.clamp(0, BOARD_SIZE as isize - 1) as usize;
        self.cursor = (clamp(i as isize + di), clamp(j as isize + dj));
    }

    fn handle_clue_input(&mut self, key: KeyEvent) -> Option<AppCommand> {
        match key.code {
            KeyCode::Esc => {
                self.clue_entry = None;
                None
            }
            KeyCode::Enter => self
                .clue_entry
                .take()
                .map(|entry| AppCommand::Send(commands::declare_clue(&entry.word, &entry.count))),
            KeyCode::Tab | KeyCode::BackTab => {
                if let Some(entry) = &mut self.clue_entry {
                    entry.focus = match entry.focus {
                        ClueField::Word => ClueField::Count,
                        ClueField::Count => ClueField::Word,
                    };
                }
                None
            }
            KeyCode::Backspace => {
                if let Some(entry) = &mut self.clue_entry {
                    entry.focused_value().pop();
                }
                None
            }
            KeyCode::Char(c) => {
                if let Some(entry) = &mut self.clue_entry {
                    entry.focused_value().push(c);
                }
                None
            }
            _ => None,
        }
    }

    fn clue_entry_available(&self, session: &Session) -> bool {
        session
            .snapshot()
            .map(|snapshot| {
                session.prefs().role == Role::Spymaster
                    && snapshot.game.clue.is_none()
                    && session.viewer_team() == snapshot.game.turn
            })
            .unwrap_or(false)
    }
}

impl View for GameViewState {
    fn handle_input(&mut self, key: KeyEvent, session: &mut Session) -> Option<AppCommand> {
        // A blocking notice swallows everything until it is dealt with.
        if let Some(notice) = session.notice() {
            return match (notice, key.code) {
                (Notice::AfkWarning, KeyCode::Enter | KeyCode::Char(' ')) => {
                    Some(AppCommand::ConfirmActive)
                }
                (Notice::AfkWarning, _) => None,
                (_, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) => {
                    Some(AppCommand::AcknowledgeNotice)
                }
                _ => None,
            };
        }

        if self.clue_entry.is_some() {
            return self.handle_clue_input(key);
        }

        match key.code {
            KeyCode::Char('Q') => Some(AppCommand::Quit),
            KeyCode::Esc => Some(AppCommand::Send(commands::leave_room())),
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(-1, 0);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(1, 0);
                None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.move_cursor(0, -1);
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.move_cursor(0, 1);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(AppCommand::Send(commands::click_tile(
                self.cursor.0,
                self.cursor.1,
            ))),
            KeyCode::Char('e') => Some(AppCommand::Send(commands::end_turn())),
            KeyCode::Char('n') => Some(AppCommand::Send(commands::new_game())),
            KeyCode::Char('x') => Some(AppCommand::Send(commands::randomize_teams())),
            KeyCode::Char('r') => Some(AppCommand::Send(commands::join_team(Team::Red))),
            KeyCode::Char('b') => Some(AppCommand::Send(commands::join_team(Team::Blue))),
            KeyCode::Char('g') => Some(AppCommand::Send(commands::switch_role(Role::Guesser))),
            KeyCode::Char('s') => Some(AppCommand::Send(commands::switch_role(Role::Spymaster))),
            KeyCode::Char('d') => Some(AppCommand::Send(commands::switch_difficulty(
                session.prefs().difficulty.toggled(),
            ))),
            KeyCode::Char('m') => Some(AppCommand::Send(commands::switch_mode(
                session.prefs().mode.toggled(),
            ))),
            KeyCode::Char('c') => Some(AppCommand::Send(commands::switch_consensus(
                session.prefs().consensus.toggled(),
            ))),
            KeyCode::Char('i') => {
                if self.clue_entry_available(session) {
                    self.clue_entry = Some(ClueEntry::new());
                }
                None
            }
            KeyCode::Char('1') => Some(AppCommand::Send(commands::change_cards(Pack::Base))),
            KeyCode::Char('2') => Some(AppCommand::Send(commands::change_cards(Pack::Duet))),
            KeyCode::Char('3') => Some(AppCommand::Send(commands::change_cards(Pack::Undercover))),
            KeyCode::Char('4') => Some(AppCommand::Send(commands::change_cards(Pack::Custom))),
            KeyCode::Char('5') => Some(AppCommand::Send(commands::change_cards(Pack::Nsfw))),
            KeyCode::Char('+') | KeyCode::Char('-') => {
                let snapshot = session.snapshot()?;
                if session.prefs().mode != Mode::Timed {
                    return None;
                }
                let minutes = snapshot.game.timer_amount.saturating_sub(1) / 60;
                let minutes = if key.code == KeyCode::Char('+') {
                    minutes + 1
                } else {
                    minutes.saturating_sub(1).max(1)
                };
                Some(AppCommand::Send(commands::timer_slider(minutes)))
            }
            KeyCode::Char('K') | KeyCode::PageUp => {
                self.scroll_log_up(if key.code == KeyCode::PageUp { 5 } else { 1 });
                None
            }
            KeyCode::Char('J') | KeyCode::PageDown => {
                self.scroll_log_down(if key.code == KeyCode::PageDown { 5 } else { 1 });
                None
            }
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame, session: &Session) {
        let Some(plan) = session.render_plan() else {
            let waiting = Paragraph::new("Waiting for game state from the server...")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(waiting, frame.area());
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),  // Header: turn, score, clue, timer
                Constraint::Min(17),    // Board and side panel
                Constraint::Length(10), // Log feed
                Constraint::Length(3),  // Help and fragment
            ])
            .split(frame.area());

        self.render_header(frame, chunks[0], session, &plan);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(chunks[1]);
        self.render_board(frame, columns[0], &plan);
        self.render_side(frame, columns[1], &plan);

        self.render_log(frame, chunks[2], &plan);
        self.render_footer(frame, chunks[3], session);

        if let Some(entry) = &self.clue_entry {
            render_clue_entry(frame, entry);
        }
        if let Some(notice) = session.notice() {
            render_notice(frame, notice);
        }
    }
}

impl GameViewState {
    fn render_header(&self, frame: &mut Frame, area: Rect, session: &Session, plan: &RenderPlan<'_>) {
        let info = &plan.info;
        let mut spans = vec![
            Span::styled(
                info.turn_text.clone(),
                Style::default()
                    .fg(team_color(info.turn_color))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(format!("Red: {}", info.score_red), Style::default().fg(Color::Red)),
            Span::raw("  "),
            Span::styled(format!("Blue: {}", info.score_blue), Style::default().fg(Color::Blue)),
            Span::raw("   "),
            Span::raw(format!("Clue: {}", info.clue_text)),
        ];
        if info.mode == Mode::Timed {
            if let Some(timer) = session.timer() {
                spans.push(Span::raw("   "));
                spans.push(Span::styled(
                    format!("[{timer}]"),
                    Style::default().fg(Color::Yellow),
                ));
            }
        }
        let header = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, area);
    }

    fn render_board(&self, frame: &mut Frame, area: Rect, plan: &RenderPlan<'_>) {
        let block = Block::default().title("Board").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, 5); BOARD_SIZE])
            .split(inner);
        for (i, row_area) in rows.iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, 5); BOARD_SIZE])
                .split(*row_area);
            for (j, tile_area) in cols.iter().enumerate() {
                let descriptor = &plan.board[i][j];
                let selected = self.cursor == (i, j);
                let border = if selected {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                let tile = Paragraph::new(descriptor.word)
                    .style(tile_style(descriptor))
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL).border_style(border));
                frame.render_widget(tile, *tile_area);
            }
        }
    }

    fn render_side(&self, frame: &mut Frame, area: Rect, plan: &RenderPlan<'_>) {
        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Min(5)])
            .split(area);
        frame.render_widget(settings_panel(&plan.info), sections[0]);
        frame.render_widget(roster_panel(&plan.roster), sections[1]);
    }

    fn render_log(&self, frame: &mut Frame, area: Rect, plan: &RenderPlan<'_>) {
        let lines: Vec<Line> = plan
            .log
            .iter()
            .map(|entry| {
                Line::from(Span::styled(
                    entry.text.clone(),
                    Style::default().fg(team_color(entry.team)),
                ))
            })
            .collect();

        let total_lines = lines.len();
        self.log_total_lines.set(total_lines as u16);
        let mut scrollbar_state = self.log_scrollbar_state.borrow_mut();
        *scrollbar_state = scrollbar_state
            .content_length(total_lines)
            .position(self.log_scroll as usize);

        let log = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(format!("Log ({} entries)", total_lines))
                    .borders(Borders::ALL),
            )
            .scroll((self.log_scroll, 0));
        frame.render_widget(log, area);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        frame.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut *scrollbar_state,
        );
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, session: &Session) {
        let mut lines = vec![Line::from(
            "Arrows: Cursor | Enter: Flip | e: End turn | i: Clue | g/s: Role | d/m/c: Toggles | Esc: Leave | Q: Quit",
        )];
        if let Some(fragment) = session.fragment() {
            lines.push(Line::from(format!("Share link fragment: #{fragment}")));
        }
        let footer = Paragraph::new(lines)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, area);
    }
}

fn settings_panel(info: &InfoPanel) -> Paragraph<'static> {
    let end_turn = if info.end_turn_enabled {
        Span::styled("End Turn [e]", Style::default().fg(Color::Green))
    } else {
        Span::styled("End Turn [e]", Style::default().fg(Color::DarkGray))
    };
    let clue_hint = if info.clue_entry_visible {
        Span::styled("Declare clue [i]", Style::default().fg(Color::Green))
    } else {
        Span::raw("")
    };

    let lines = vec![
        Line::from(vec![end_turn, Span::raw("  "), clue_hint]),
        toggle_line("Mode", info.mode, Mode::Casual, Mode::Timed, "casual", "timed"),
        toggle_line(
            "Difficulty",
            info.difficulty,
            Difficulty::Normal,
            Difficulty::Hard,
            "normal",
            "hard",
        ),
        toggle_line(
            "Consensus",
            info.consensus,
            Consensus::Single,
            Consensus::Consensus,
            "single",
            "consensus",
        ),
        pack_line(info),
        Line::from(info.packs.word_pool_text()),
        match &info.timer_slider {
            Some(slider) => Line::from(format!("{} (+/-)", slider.label())),
            None => Line::from(""),
        },
    ];
    Paragraph::new(lines).block(Block::default().title("Room").borders(Borders::ALL))
}

/// Renders one mutually-exclusive toggle pair; the active value is the
/// disabled (highlighted) one.
fn toggle_line<T: PartialEq + Copy>(
    name: &'static str,
    active: T,
    first: T,
    second: T,
    first_label: &'static str,
    second_label: &'static str,
) -> Line<'static> {
    let style_for = |option: T| {
        if toggle_enabled(&active, &option) {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        }
    };
    Line::from(vec![
        Span::raw(format!("{name}: ")),
        Span::styled(first_label, style_for(first)),
        Span::raw(" / "),
        Span::styled(second_label, style_for(second)),
    ])
}

fn pack_line(info: &InfoPanel) -> Line<'static> {
    let packs = [
        ("base", info.packs.base),
        ("duet", info.packs.duet),
        ("undercover", info.packs.undercover),
        ("custom", info.packs.custom),
        ("nsfw", info.packs.nsfw),
    ];
    let mut spans = vec![Span::raw("Packs: ")];
    for (idx, (label, enabled)) in packs.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if *enabled {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(*label, style));
    }
    spans.push(Span::raw("  [1-5]"));
    Line::from(spans)
}

fn roster_panel(roster: &Roster) -> Paragraph<'static> {
    let mut lines = Vec::new();
    let mut section = |title: &'static str, color: Color, entries: &[RosterEntry]| {
        lines.push(Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        for entry in entries {
            let mut spans = vec![Span::raw("  "), Span::raw(entry.label.clone())];
            if let Some(proposal) = &entry.proposal {
                spans.push(Span::styled(
                    format!(" -> {proposal}"),
                    Style::default().fg(Color::Yellow),
                ));
            }
            lines.push(Line::from(spans));
        }
    };
    section("Red team [r]", Color::Red, &roster.red);
    section("Blue team [b]", Color::Blue, &roster.blue);
    section("Undecided", Color::Gray, &roster.undecided);
    Paragraph::new(lines).block(Block::default().title("Players [x]").borders(Borders::ALL))
}

/// Maps a tile descriptor onto a terminal style. Attribute order matters:
/// later markers compose on top of the color.
pub fn tile_style(descriptor: &TileDescriptor<'_>) -> Style {
    let mut style = Style::default().fg(Color::White);
    for attr in &descriptor.attrs {
        style = match attr {
            TileAttr::Color(kind) => style.fg(tile_color(*kind)),
            TileAttr::Flipped => style.add_modifier(Modifier::REVERSED),
            TileAttr::Proposed => style.add_modifier(Modifier::UNDERLINED),
            TileAttr::Revealed => style.add_modifier(Modifier::ITALIC),
            TileAttr::Hard => style.add_modifier(Modifier::DIM),
        };
    }
    style
}

fn tile_color(kind: TileKind) -> Color {
    match kind {
        TileKind::Red => Color::Red,
        TileKind::Blue => Color::Blue,
        TileKind::Neutral => Color::Yellow,
        TileKind::Death => Color::Magenta,
    }
}

fn team_color(team: Team) -> Color {
    match team {
        Team::Red => Color::Red,
        Team::Blue => Color::Blue,
    }
}

fn render_notice(frame: &mut Frame, notice: &Notice) {
    let area = centered_box(frame.area(), 50, 7);
    frame.render_widget(Clear, area);
    let (title, hint) = match notice {
        Notice::AfkWarning => ("Still there?", "Enter: I'm here"),
        _ => ("Server message", "Enter: Okay"),
    };
    let body = vec![
        Line::from(""),
        Line::from(notice.text().to_string()),
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ];
    let widget = Paragraph::new(body)
        .alignment(Alignment::Center)
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn render_clue_entry(frame: &mut Frame, entry: &ClueEntry) {
    let area = centered_box(frame.area(), 40, 8);
    frame.render_widget(Clear, area);
    let block = Block::default().title("Declare clue").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(inner);
    let field = |title: &'static str, value: &str, focused: bool| {
        let border = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Paragraph::new(value.to_string()).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border),
        )
    };
    frame.render_widget(
        field("Word", &entry.word, entry.focus == ClueField::Word),
        rows[0],
    );
    frame.render_widget(
        field("Count (number or unlimited)", &entry.count, entry.focus == ClueField::Count),
        rows[1],
    );
}

fn centered_box(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
