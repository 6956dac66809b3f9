use common::{Player, PlayerTeam, Role};

/// One roster row. Spymasters are bracketed; a guesser with an active
/// proposal shows it next to their name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub label: String,
    pub proposal: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub undecided: Vec<RosterEntry>,
    pub red: Vec<RosterEntry>,
    pub blue: Vec<RosterEntry>,
}

/// Groups the player list by team, preserving arrival order within each group.
pub fn roster(players: &[Player]) -> Roster {
    let mut out = Roster::default();
    for player in players {
        let entry = if player.role == Role::Spymaster {
            RosterEntry {
                label: format!("[{}]", player.nickname),
                proposal: None,
            }
        } else {
            RosterEntry {
                label: player.nickname.clone(),
                proposal: player.guess_proposal.clone(),
            }
        };
        match player.team {
            PlayerTeam::Undecided => out.undecided.push(entry),
            PlayerTeam::Red => out.red.push(entry),
            PlayerTeam::Blue => out.blue.push(entry),
        }
    }
    out
}
