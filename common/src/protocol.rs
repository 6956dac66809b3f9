use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    ClueCount, Consensus, Difficulty, Game, Mode, Player, PlayerTeam, Role, Snapshot, Team,
};

/// A word pack the room can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pack {
    Base,
    Duet,
    Undercover,
    Custom,
    Nsfw,
}

/// Outbound viewer intent. Each variant is one named message on the wire:
/// `{"event": "<name>", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ClientCommand {
    JoinRoom {
        nickname: String,
        room: String,
        password: String,
    },
    CreateRoom {
        nickname: String,
        room: String,
        password: String,
    },
    LeaveRoom,
    JoinTeam {
        team: Team,
    },
    RandomizeTeams,
    NewGame,
    DeclareClue {
        word: String,
        count: ClueCount,
    },
    SwitchRole {
        role: Role,
    },
    SwitchDifficulty {
        difficulty: Difficulty,
    },
    SwitchMode {
        mode: Mode,
    },
    SwitchConsensus {
        consensus: Consensus,
    },
    EndTurn,
    ClickTile {
        i: usize,
        j: usize,
    },
    ChangeCards {
        pack: Pack,
    },
    TimerSlider {
        value: u32,
    },
    Active,
}

impl ClientCommand {
    pub fn to_frame(&self) -> Result<String> {
        serde_json::to_string(self).context("failed to encode command frame")
    }
}

/// Inbound authority message, same framing as [`ClientCommand`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerEvent {
    ServerStats {
        players: u32,
        rooms: u32,
    },
    JoinResponse {
        success: bool,
        #[serde(default)]
        msg: Option<String>,
    },
    CreateResponse {
        success: bool,
        #[serde(default)]
        msg: Option<String>,
    },
    LeaveResponse {
        success: bool,
    },
    TimerUpdate {
        timer: f64,
    },
    NewGameResponse {
        success: bool,
    },
    AfkWarning,
    AfkKicked,
    ServerMessage {
        msg: String,
    },
    SwitchRoleResponse {
        success: bool,
        role: Role,
    },
    GameState(GameStateUpdate),
}

impl ServerEvent {
    pub fn from_frame(text: &str) -> Result<ServerEvent> {
        serde_json::from_str(text).context("failed to decode server frame")
    }
}

/// Payload of the `gameState` event: the game object plus the room settings
/// and roster, and the receiving viewer's own team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStateUpdate {
    pub game: Game,
    pub team: PlayerTeam,
    pub mode: Mode,
    pub consensus: Consensus,
    pub difficulty: Difficulty,
    pub players: Vec<Player>,
}

impl GameStateUpdate {
    /// Splits the update into the assembled room snapshot and the viewer's
    /// team, which is per-connection rather than room state.
    pub fn into_snapshot(self) -> (Snapshot, PlayerTeam) {
        let GameStateUpdate {
            game,
            team,
            mode,
            consensus,
            difficulty,
            players,
        } = self;
        (
            Snapshot {
                game,
                players,
                mode,
                consensus,
                difficulty,
            },
            team,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_encode_as_named_events() {
        let frame = ClientCommand::ClickTile { i: 1, j: 3 }.to_frame().unwrap();
        let value: serde_json::Value = serde_json::from_str(&frame).unwrap();
        assert_eq!(value["event"], "clickTile");
        assert_eq!(value["data"]["i"], 1);
        assert_eq!(value["data"]["j"], 3);

        let frame = ClientCommand::LeaveRoom.to_frame().unwrap();
        let value: serde_json::Value = serde_json::from_str(&frame).unwrap();
        assert_eq!(value["event"], "leaveRoom");
    }

    #[test]
    fn responses_decode_with_and_without_msg() {
        let rejected =
            ServerEvent::from_frame(r#"{"event":"joinResponse","data":{"success":false,"msg":"bad password"}}"#)
                .unwrap();
        assert_eq!(
            rejected,
            ServerEvent::JoinResponse {
                success: false,
                msg: Some("bad password".to_string()),
            }
        );

        let accepted =
            ServerEvent::from_frame(r#"{"event":"joinResponse","data":{"success":true}}"#).unwrap();
        assert_eq!(
            accepted,
            ServerEvent::JoinResponse {
                success: true,
                msg: None,
            }
        );
    }

    #[test]
    fn role_switch_response_carries_the_confirmed_role() {
        let event = ServerEvent::from_frame(
            r#"{"event":"switchRoleResponse","data":{"success":true,"role":"spymaster"}}"#,
        )
        .unwrap();
        assert_eq!(
            event,
            ServerEvent::SwitchRoleResponse {
                success: true,
                role: Role::Spymaster,
            }
        );
    }
}
