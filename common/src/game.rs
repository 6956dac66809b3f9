use std::fmt;

use serde::{Deserialize, Serialize};

/// Boards are always square, five tiles a side.
pub const BOARD_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Red,
    Blue,
}

impl Team {
    pub fn other(self) -> Team {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Red => write!(f, "red"),
            Team::Blue => write!(f, "blue"),
        }
    }
}

/// A player's affiliation. Unlike [`Team`] this includes the lobby state for
/// players who have not picked a side yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerTeam {
    Red,
    Blue,
    #[default]
    Undecided,
}

impl From<Team> for PlayerTeam {
    fn from(team: Team) -> Self {
        match team {
            Team::Red => PlayerTeam::Red,
            Team::Blue => PlayerTeam::Blue,
        }
    }
}

impl PartialEq<Team> for PlayerTeam {
    fn eq(&self, other: &Team) -> bool {
        matches!(
            (self, other),
            (PlayerTeam::Red, Team::Red) | (PlayerTeam::Blue, Team::Blue)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    Red,
    Blue,
    Neutral,
    Death,
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileKind::Red => write!(f, "red"),
            TileKind::Blue => write!(f, "blue"),
            TileKind::Neutral => write!(f, "neutral"),
            TileKind::Death => write!(f, "death"),
        }
    }
}

/// One board cell. `kind` is ground truth; whether a viewer may see it is a
/// rendering question, never answered here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub word: String,
    #[serde(rename = "type")]
    pub kind: TileKind,
    pub flipped: bool,
}

/// Fixed 5x5 grid. Anything else fails to decode, so downstream code never
/// sees a malformed board.
pub type Board = [[Tile; BOARD_SIZE]; BOARD_SIZE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Guesser,
    Spymaster,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Normal,
    Hard,
}

impl Difficulty {
    pub fn toggled(self) -> Difficulty {
        match self {
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Normal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Casual,
    Timed,
}

impl Mode {
    pub fn toggled(self) -> Mode {
        match self {
            Mode::Casual => Mode::Timed,
            Mode::Timed => Mode::Casual,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Consensus {
    Single,
    Consensus,
}

impl Consensus {
    pub fn toggled(self) -> Consensus {
        match self {
            Consensus::Single => Consensus::Consensus,
            Consensus::Consensus => Consensus::Single,
        }
    }
}

/// Clue counts are either a positive number of guesses or unlimited. On the
/// wire an unlimited count is the literal string "unlimited".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ClueCountRepr", into = "ClueCountRepr")]
pub enum ClueCount {
    Limited(u32),
    Unlimited,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum ClueCountRepr {
    Number(u32),
    Word(String),
}

impl From<ClueCount> for ClueCountRepr {
    fn from(count: ClueCount) -> Self {
        match count {
            ClueCount::Limited(n) => ClueCountRepr::Number(n),
            ClueCount::Unlimited => ClueCountRepr::Word("unlimited".to_string()),
        }
    }
}

impl TryFrom<ClueCountRepr> for ClueCount {
    type Error = String;

    fn try_from(repr: ClueCountRepr) -> Result<Self, Self::Error> {
        match repr {
            ClueCountRepr::Number(n) => Ok(ClueCount::Limited(n)),
            ClueCountRepr::Word(word) if word == "unlimited" => Ok(ClueCount::Unlimited),
            ClueCountRepr::Word(word) => Err(format!("unknown clue count {word:?}")),
        }
    }
}

impl fmt::Display for ClueCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClueCount::Limited(n) => write!(f, "{n}"),
            ClueCount::Unlimited => write!(f, "∞"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub word: String,
    pub count: ClueCount,
}

/// One line of the append-only game log. The server owns the order; clients
/// only ever change presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum LogEntry {
    #[serde(rename_all = "camelCase")]
    FlipTile {
        team: Team,
        word: String,
        #[serde(rename = "type")]
        kind: TileKind,
        ended_turn: bool,
    },
    SwitchTurn {
        team: Team,
    },
    DeclareClue {
        team: Team,
        clue: Clue,
    },
    EndTurn {
        team: Team,
    },
}

impl LogEntry {
    pub fn team(&self) -> Team {
        match self {
            LogEntry::FlipTile { team, .. }
            | LogEntry::SwitchTurn { team }
            | LogEntry::DeclareClue { team, .. }
            | LogEntry::EndTurn { team } => *team,
        }
    }

    /// The wire tag of this entry, usable as a style class.
    pub fn event(&self) -> &'static str {
        match self {
            LogEntry::FlipTile { .. } => "flipTile",
            LogEntry::SwitchTurn { .. } => "switchTurn",
            LogEntry::DeclareClue { .. } => "declareClue",
            LogEntry::EndTurn { .. } => "endTurn",
        }
    }
}

/// The `game` object the authority ships whole on every update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub board: Board,
    pub turn: Team,
    pub over: bool,
    #[serde(default)]
    pub winner: Option<Team>,
    pub red: u8,
    pub blue: u8,
    #[serde(default)]
    pub clue: Option<Clue>,
    pub timer_amount: u32,
    pub log: Vec<LogEntry>,
    pub base: bool,
    pub duet: bool,
    pub undercover: bool,
    pub custom: bool,
    pub nsfw: bool,
    pub words: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub nickname: String,
    pub team: PlayerTeam,
    pub role: Role,
    #[serde(default)]
    pub guess_proposal: Option<String>,
}

/// The full authoritative room state as assembled on the client: the game
/// object plus the room-level settings and roster that ride alongside it.
/// Received whole; each snapshot fully replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub game: Game,
    pub players: Vec<Player>,
    pub mode: Mode,
    pub consensus: Consensus,
    pub difficulty: Difficulty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clue_count_accepts_numbers_and_the_unlimited_sentinel() {
        let limited: ClueCount = serde_json::from_str("3").unwrap();
        assert_eq!(limited, ClueCount::Limited(3));

        let unlimited: ClueCount = serde_json::from_str("\"unlimited\"").unwrap();
        assert_eq!(unlimited, ClueCount::Unlimited);

        assert!(serde_json::from_str::<ClueCount>("\"lots\"").is_err());
    }

    #[test]
    fn clue_count_displays_the_infinity_glyph() {
        assert_eq!(ClueCount::Limited(2).to_string(), "2");
        assert_eq!(ClueCount::Unlimited.to_string(), "∞");
    }

    #[test]
    fn log_entries_are_tagged_by_event_name() {
        let entry: LogEntry = serde_json::from_str(
            r#"{"event":"flipTile","team":"red","word":"CAT","type":"death","endedTurn":false}"#,
        )
        .unwrap();
        assert_eq!(
            entry,
            LogEntry::FlipTile {
                team: Team::Red,
                word: "CAT".to_string(),
                kind: TileKind::Death,
                ended_turn: false,
            }
        );
        assert_eq!(entry.event(), "flipTile");
        assert_eq!(entry.team(), Team::Red);
    }

    #[test]
    fn player_affiliation_compares_against_turn() {
        assert_eq!(PlayerTeam::Red, Team::Red);
        assert_ne!(PlayerTeam::Blue, Team::Red);
        assert_ne!(PlayerTeam::Undecided, Team::Red);
        assert_ne!(PlayerTeam::Undecided, Team::Blue);
    }
}
