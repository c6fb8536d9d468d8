/// Aggregated view of how far a game has got, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameProgress {
    /// Questions in this game.
    pub total: usize,
    /// Questions already put in front of the player, including the current one.
    pub served: usize,
    /// Questions still waiting in the play queue.
    pub remaining: usize,
    pub is_over: bool,
}
