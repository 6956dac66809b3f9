use common::{BOARD_SIZE, Board, Role, TileKind};

/// What the viewer is allowed to know about a tile's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayType {
    Unknown,
    Known(TileKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleTile<'a> {
    pub word: &'a str,
    pub flipped: bool,
    pub display: DisplayType,
}

pub type VisibleBoard<'a> = [[VisibleTile<'a>; BOARD_SIZE]; BOARD_SIZE];

/// Projects the authoritative board down to what this viewer may see.
///
/// A tile's true kind is visible iff it has been publicly flipped, the viewer
/// is a spymaster, or the game is over. Pure and total; identical inputs
/// always produce identical output, which the renderer relies on to make
/// repeated snapshots flicker-free.
pub fn project(board: &Board, viewer_role: Role, game_over: bool) -> VisibleBoard<'_> {
    std::array::from_fn(|i| {
        std::array::from_fn(|j| {
            let tile = &board[i][j];
            let display = if tile.flipped || viewer_role == Role::Spymaster || game_over {
                DisplayType::Known(tile.kind)
            } else {
                DisplayType::Unknown
            };
            VisibleTile {
                word: &tile.word,
                flipped: tile.flipped,
                display,
            }
        })
    })
}
