use common::{LogEntry, Team, TileKind};

/// One formatted log line, plus the entry's tag and team for styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub text: String,
    pub event: &'static str,
    pub team: Team,
}

/// Formats the append-only server log for display, newest entry first. The
/// reversal is the only reordering the client ever performs.
pub fn render_log(log: &[LogEntry]) -> Vec<LogLine> {
    log.iter().rev().map(line).collect()
}

fn line(entry: &LogEntry) -> LogLine {
    let text = match entry {
        LogEntry::FlipTile {
            team,
            word,
            kind,
            ended_turn,
        } => {
            let suffix = if *kind == TileKind::Death {
                " ending the game"
            } else if *ended_turn {
                " ending their turn"
            } else {
                ""
            };
            format!("{team} team flipped {word} ({kind}){suffix}")
        }
        LogEntry::SwitchTurn { team } => format!("Switched to {team} team's turn"),
        LogEntry::DeclareClue { team, clue } => {
            format!("{team} team was given the clue \"{}\" ({})", clue.word, clue.count)
        }
        LogEntry::EndTurn { team } => format!("{team} team ended their turn"),
    };
    LogLine {
        text,
        event: entry.event(),
        team: entry.team(),
    }
}
