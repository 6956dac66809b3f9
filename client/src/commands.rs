//! Translates discrete user intents into outbound command messages. Stateless:
//! every function builds a fresh [`ClientCommand`] from its arguments.

use common::{
    BOARD_SIZE, ClientCommand, ClueCount, Consensus, Difficulty, Mode, Pack, Role, Team,
};

pub fn join_room(nickname: &str, room: &str, password: &str) -> ClientCommand {
    ClientCommand::JoinRoom {
        nickname: nickname.trim().to_string(),
        room: room.trim().to_string(),
        password: password.to_string(),
    }
}

pub fn create_room(nickname: &str, room: &str, password: &str) -> ClientCommand {
    ClientCommand::CreateRoom {
        nickname: nickname.trim().to_string(),
        room: room.trim().to_string(),
        password: password.to_string(),
    }
}

pub fn leave_room() -> ClientCommand {
    ClientCommand::LeaveRoom
}

pub fn join_team(team: Team) -> ClientCommand {
    ClientCommand::JoinTeam { team }
}

pub fn randomize_teams() -> ClientCommand {
    ClientCommand::RandomizeTeams
}

pub fn new_game() -> ClientCommand {
    ClientCommand::NewGame
}

/// Builds a clue declaration from raw form input. The count accepts a positive
/// number or "unlimited"; anything else falls back to 1, matching the
/// authority's own parsing.
pub fn declare_clue(word: &str, count_input: &str) -> ClientCommand {
    ClientCommand::DeclareClue {
        word: word.trim().to_string(),
        count: parse_count(count_input),
    }
}

fn parse_count(input: &str) -> ClueCount {
    let input = input.trim();
    if input.eq_ignore_ascii_case("unlimited") {
        return ClueCount::Unlimited;
    }
    match input.parse::<u32>() {
        Ok(n) if n >= 1 => ClueCount::Limited(n),
        _ => ClueCount::Limited(1),
    }
}

pub fn switch_role(role: Role) -> ClientCommand {
    ClientCommand::SwitchRole { role }
}

pub fn switch_difficulty(difficulty: Difficulty) -> ClientCommand {
    ClientCommand::SwitchDifficulty { difficulty }
}

pub fn switch_mode(mode: Mode) -> ClientCommand {
    ClientCommand::SwitchMode { mode }
}

pub fn switch_consensus(consensus: Consensus) -> ClientCommand {
    ClientCommand::SwitchConsensus { consensus }
}

pub fn end_turn() -> ClientCommand {
    ClientCommand::EndTurn
}

pub fn click_tile(i: usize, j: usize) -> ClientCommand {
    debug_assert!(i < BOARD_SIZE && j < BOARD_SIZE);
    ClientCommand::ClickTile { i, j }
}

pub fn change_cards(pack: Pack) -> ClientCommand {
    ClientCommand::ChangeCards { pack }
}

pub fn timer_slider(minutes: u32) -> ClientCommand {
    ClientCommand::TimerSlider { value: minutes }
}

pub fn active() -> ClientCommand {
    ClientCommand::Active
}
