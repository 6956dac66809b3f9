use common::{
    ClientCommand, Consensus, Difficulty, Mode, PlayerTeam, Role, ServerEvent, Snapshot,
};
use tracing::{debug, info};

use crate::{board, commands, fragment, log_view, panel, roster, visibility};
use crate::board::BoardPlan;
use crate::log_view::LogLine;
use crate::panel::InfoPanel;
use crate::roster::Roster;

/// Where the viewer is in the session lifecycle. Transitions happen only on
/// confirmed server responses, never on optimistic local prediction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    SignedOut,
    InRoom,
}

/// The viewer's locally-selected presentation settings. These decide how to
/// render, never what is true; the authoritative state is the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerPrefs {
    pub role: Role,
    pub difficulty: Difficulty,
    pub mode: Mode,
    pub consensus: Consensus,
}

impl Default for ViewerPrefs {
    fn default() -> Self {
        ViewerPrefs {
            role: Role::Guesser,
            difficulty: Difficulty::Normal,
            mode: Mode::Casual,
            consensus: Consensus::Single,
        }
    }
}

/// A blocking overlay. Warnings are cleared by confirming activity; the other
/// two require explicit acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    AfkWarning,
    Kicked,
    Message(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::AfkWarning => "Are you still there?",
            Notice::Kicked => "You were kicked for being AFK",
            Notice::Message(msg) => msg,
        }
    }
}

/// What the front-end must do after an event has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Re-render from current state.
    Redraw,
    /// Visibility semantics changed: drop every cached tile attribute and
    /// rebuild the whole board, not just repaint it.
    FullReset,
    /// Sign-in succeeded; switch to the in-room view and publish the fragment.
    EnterRoom,
    /// Back to the sign-in view with the board wiped.
    LeaveRoom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerStats {
    pub players: u32,
    pub rooms: u32,
}

/// Everything needed to draw one frame, derived in full from the session.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan<'a> {
    pub board: BoardPlan<'a>,
    pub info: InfoPanel,
    pub log: Vec<LogLine>,
    pub roster: Roster,
}

/// Owns the last authoritative snapshot, the viewer's preferences, and the
/// overlay/error slots, and maps inbound events to state transitions.
#[derive(Debug, Default)]
pub struct Session {
    phase: Phase,
    prefs: ViewerPrefs,
    snapshot: Option<Snapshot>,
    viewer_team: PlayerTeam,
    notice: Option<Notice>,
    error: Option<String>,
    stats: Option<ServerStats>,
    timer: Option<f64>,
    credentials: Option<(String, String)>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn prefs(&self) -> ViewerPrefs {
        self.prefs
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn viewer_team(&self) -> PlayerTeam {
        self.viewer_team
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn stats(&self) -> Option<ServerStats> {
        self.stats
    }

    pub fn timer(&self) -> Option<f64> {
        self.timer
    }

    /// The fragment to publish for the current room, if signed in.
    pub fn fragment(&self) -> Option<String> {
        if self.phase != Phase::InRoom {
            return None;
        }
        self.credentials
            .as_ref()
            .map(|(room, password)| fragment::compose(room, password))
    }

    /// Builds the join command and remembers the credentials so the fragment
    /// can be published once the server confirms.
    pub fn join_intent(&mut self, nickname: &str, room: &str, password: &str) -> ClientCommand {
        self.credentials = Some((room.trim().to_string(), password.to_string()));
        commands::join_room(nickname, room, password)
    }

    pub fn create_intent(&mut self, nickname: &str, room: &str, password: &str) -> ClientCommand {
        self.credentials = Some((room.trim().to_string(), password.to_string()));
        commands::create_room(nickname, room, password)
    }

    /// Dismisses a kicked/server-message notice. An AFK warning is not
    /// dismissible this way; it is cleared by [`Session::confirm_active`].
    pub fn acknowledge_notice(&mut self) {
        if matches!(self.notice, Some(Notice::Kicked) | Some(Notice::Message(_))) {
            self.notice = None;
        }
    }

    /// Clears the AFK warning and returns the activity confirmation to send.
    pub fn confirm_active(&mut self) -> Option<ClientCommand> {
        if matches!(self.notice, Some(Notice::AfkWarning)) {
            self.notice = None;
            Some(commands::active())
        } else {
            None
        }
    }

    /// Applies one inbound event. Failed responses surface their message and
    /// leave every other piece of state untouched.
    pub fn handle_event(&mut self, event: ServerEvent) -> Effect {
        match event {
            ServerEvent::ServerStats { players, rooms } => {
                self.stats = Some(ServerStats { players, rooms });
                Effect::Redraw
            }
            ServerEvent::JoinResponse { success, msg }
            | ServerEvent::CreateResponse { success, msg } => {
                if success {
                    self.phase = Phase::InRoom;
                    self.error = None;
                    // A rejoin counts as activity.
                    if self.notice == Some(Notice::AfkWarning) {
                        self.notice = None;
                    }
                    info!("signed into room");
                    Effect::EnterRoom
                } else {
                    self.error = Some(msg.unwrap_or_default());
                    Effect::Redraw
                }
            }
            ServerEvent::LeaveResponse { success } => {
                if success {
                    self.phase = Phase::SignedOut;
                    self.snapshot = None;
                    self.viewer_team = PlayerTeam::Undecided;
                    self.timer = None;
                    self.notice = None;
                    self.credentials = None;
                    info!("left room");
                    Effect::LeaveRoom
                } else {
                    Effect::None
                }
            }
            ServerEvent::TimerUpdate { timer } => {
                self.timer = Some(timer);
                Effect::Redraw
            }
            ServerEvent::NewGameResponse { success } => {
                if success {
                    Effect::FullReset
                } else {
                    Effect::None
                }
            }
            ServerEvent::AfkWarning => {
                self.notice = Some(Notice::AfkWarning);
                Effect::Redraw
            }
            ServerEvent::AfkKicked => {
                self.notice = Some(Notice::Kicked);
                Effect::Redraw
            }
            ServerEvent::ServerMessage { msg } => {
                self.notice = Some(Notice::Message(msg));
                Effect::Redraw
            }
            ServerEvent::SwitchRoleResponse { success, role } => {
                if success && role != self.prefs.role {
                    debug!(?role, "role switch confirmed");
                    self.prefs.role = role;
                    Effect::FullReset
                } else if success {
                    Effect::Redraw
                } else {
                    Effect::None
                }
            }
            ServerEvent::GameState(update) => {
                let difficulty_changed = self.prefs.difficulty != update.difficulty;
                self.prefs.difficulty = update.difficulty;
                self.prefs.mode = update.mode;
                self.prefs.consensus = update.consensus;
                let (snapshot, team) = update.into_snapshot();
                self.viewer_team = team;
                self.snapshot = Some(snapshot);
                if difficulty_changed {
                    debug!("difficulty changed, forcing board rebuild");
                    Effect::FullReset
                } else {
                    Effect::Redraw
                }
            }
        }
    }

    /// Derives everything drawable from the current state. Total and
    /// incremental-free: calling this twice against the same snapshot yields
    /// the same plan.
    pub fn render_plan(&self) -> Option<RenderPlan<'_>> {
        let snapshot = self.snapshot.as_ref()?;
        let visible = visibility::project(
            &snapshot.game.board,
            self.prefs.role,
            snapshot.game.over,
        );
        let proposed = board::proposals(&snapshot.players);
        let board = board::render(
            &visible,
            &proposed,
            self.prefs.difficulty,
            self.prefs.role,
            snapshot.game.over,
        );
        Some(RenderPlan {
            board,
            info: panel::reconcile(snapshot, self.viewer_team, self.prefs.role),
            log: log_view::render_log(&snapshot.game.log),
            roster: roster::roster(&snapshot.players),
        })
    }
}
