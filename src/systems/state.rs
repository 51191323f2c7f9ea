/// Identifies one specific loss of a life, so a deferred resume can tell whether it is still
/// the pause it was scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LifeLossId(pub u32);

/// How a round finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// Every pickup was eaten.
    Won,
    /// The last life was lost.
    Lost,
}

/// The high-level stage of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundPhase {
    /// Waiting for a round to be started.
    #[default]
    Menu,
    /// The simulation is advancing.
    Playing,
    /// A life was just lost; play resumes after a wall-clock delay.
    Paused { life_loss: LifeLossId },
    /// Terminal for this round.
    Ended(RoundOutcome),
}

impl RoundPhase {
    /// Returns true while a round is in progress (playing or briefly paused).
    pub fn is_active(self) -> bool {
        matches!(self, RoundPhase::Playing | RoundPhase::Paused { .. })
    }

    pub fn is_ended(self) -> bool {
        matches!(self, RoundPhase::Ended(_))
    }
}
