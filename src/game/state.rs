use glam::Vec2;
use tracing::{debug, info, trace};

use crate::config::{Difficulty, GameConfig};
use crate::constants::movement::PLAYER_SPEED;
use crate::error::{GameError, GameResult};
use crate::events::GameEvent;
use crate::map::direction::Direction;
use crate::map::maze::Maze;
use crate::systems::ghost::pursue;
use crate::systems::item::collect_pickup;
use crate::systems::player::promote_buffered_direction;
use crate::systems::{advance, characters_collide, Behavior, Character, LifeLossId, RoundOutcome, RoundPhase};

/// The heading the adversary leaves its spawn with.
const ADVERSARY_START_HEADING: Direction = Direction::Right;

/// The `Session` holds all the mutable data of a game: the maze overlay, both characters, and
/// the round counters.
///
/// It is the only owner of that state. Everything that changes it goes through [`Session::tick`]
/// or one of the command methods, so the order of a tick is visible in one place.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    maze: Maze,
    player: Character,
    adversary: Character,
    difficulty: Difficulty,
    phase: RoundPhase,
    score: u32,
    lives: u8,
    high_score: u32,
    life_losses: u32,
    events: Vec<GameEvent>,
}

/// What a renderer needs to know about a character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterView {
    pub position: Vec2,
    pub radius: f32,
    pub heading: Option<Direction>,
}

impl From<&Character> for CharacterView {
    fn from(character: &Character) -> Self {
        Self {
            position: character.motion.position,
            radius: character.motion.radius,
            heading: character.motion.heading,
        }
    }
}

/// A read-only view of the session, taken after a tick.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub maze: &'a Maze,
    pub player: CharacterView,
    pub adversary: CharacterView,
    pub score: u32,
    pub lives: u8,
    pub high_score: u32,
    pub phase: RoundPhase,
    pub difficulty: Difficulty,
}

impl Session {
    /// Creates a session sitting in the menu.
    ///
    /// `high_score` is the best score known to the persistence collaborator.
    pub fn new(maze: Maze, config: GameConfig, high_score: u32) -> Self {
        let difficulty = Difficulty::default();
        let (player, adversary) = spawn_characters(&maze, difficulty);

        Self {
            lives: config.starting_lives,
            config,
            maze,
            player,
            adversary,
            difficulty,
            phase: RoundPhase::Menu,
            score: 0,
            high_score,
            life_losses: 0,
            events: Vec::new(),
        }
    }

    /// Starts a fresh round: full maze, zero score, full lives, characters on their spawns.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidTransition`] if a round is already in progress.
    pub fn start(&mut self, difficulty: Difficulty) -> GameResult<()> {
        if self.phase.is_active() {
            return Err(GameError::InvalidTransition {
                action: "start a round",
                phase: self.phase,
            });
        }

        self.maze.reset();
        self.difficulty = difficulty;
        self.score = 0;
        self.lives = self.config.starting_lives;
        self.respawn_characters();
        self.phase = RoundPhase::Playing;

        info!(%difficulty, lives = self.lives, pickups = self.maze.remaining_pickups(), "Round started");
        Ok(())
    }

    /// Leaves the end-of-round screen for the menu.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidTransition`] unless the round has ended.
    pub fn return_to_menu(&mut self) -> GameResult<()> {
        if !self.phase.is_ended() {
            return Err(GameError::InvalidTransition {
                action: "return to the menu",
                phase: self.phase,
            });
        }
        self.phase = RoundPhase::Menu;
        debug!("Returned to menu");
        Ok(())
    }

    /// Buffers the player's next direction. Ignored unless the round is being played.
    pub fn set_requested_direction(&mut self, direction: Direction) {
        if self.phase != RoundPhase::Playing {
            return;
        }
        if let Behavior::Player { buffered } = &mut self.player.behavior {
            *buffered = Some(direction);
            trace!(?direction, "Direction buffered");
        }
    }

    /// Advances the round by one tick. Does nothing outside [`RoundPhase::Playing`].
    ///
    /// The order is fixed: promote the buffered direction, move the player, steer and move the
    /// adversary, eat, check for a catch, check for a win.
    pub fn tick(&mut self) {
        if self.phase != RoundPhase::Playing {
            return;
        }
        let policy = self.config.reject_policy;

        let player = &mut self.player;
        let kind = player.kind();
        if let Behavior::Player { buffered } = &mut player.behavior {
            promote_buffered_direction(&mut player.motion, buffered, &self.maze);
        }
        advance(
            &mut player.motion,
            &self.maze,
            kind.traversal_flags(),
            policy,
            kind.wraps_horizontally(),
        );

        let target = self.player.motion.cell();
        let adversary = &mut self.adversary;
        let kind = adversary.kind();
        pursue(&mut adversary.motion, &self.maze, target);
        advance(
            &mut adversary.motion,
            &self.maze,
            kind.traversal_flags(),
            policy,
            kind.wraps_horizontally(),
        );

        if let Some((cell, pickup)) = collect_pickup(&mut self.maze, &self.player.motion) {
            self.score += pickup.score_value();
            self.events.push(GameEvent::PickupConsumed {
                cell,
                pickup,
                score: self.score,
            });
        }

        if characters_collide(&self.player.motion, &self.adversary.motion) {
            self.lose_life();
        }

        // A round lost this tick stays lost
        if !self.phase.is_ended() && self.maze.remaining_pickups() == 0 {
            self.end_round(RoundOutcome::Won);
        }
    }

    /// Puts both characters back on their spawns after a lost life and resumes play.
    ///
    /// This is the deferred half of losing a life. It only acts if the round is still paused for
    /// exactly `life_loss`; a resume that arrives after the round ended or restarted is ignored.
    /// Returns whether play resumed.
    pub fn resume_after_life_loss(&mut self, life_loss: LifeLossId) -> bool {
        if self.phase != (RoundPhase::Paused { life_loss }) {
            debug!(?life_loss, phase = ?self.phase, "Ignoring stale resume");
            return false;
        }

        self.respawn_characters();
        self.phase = RoundPhase::Playing;
        debug!(?life_loss, lives = self.lives, "Play resumed after lost life");
        true
    }

    /// Removes and returns the events produced since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            maze: &self.maze,
            player: CharacterView::from(&self.player),
            adversary: CharacterView::from(&self.adversary),
            score: self.score,
            lives: self.lives,
            high_score: self.high_score,
            phase: self.phase,
            difficulty: self.difficulty,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> &Character {
        &self.player
    }

    pub fn adversary(&self) -> &Character {
        &self.adversary
    }

    /// Direct access for hosts and tests that need to stage the board.
    pub fn maze_mut(&mut self) -> &mut Maze {
        &mut self.maze
    }

    /// Direct access for hosts and tests that need to stage a position.
    pub fn player_mut(&mut self) -> &mut Character {
        &mut self.player
    }

    /// Direct access for hosts and tests that need to stage a position.
    pub fn adversary_mut(&mut self) -> &mut Character {
        &mut self.adversary
    }

    fn respawn_characters(&mut self) {
        (self.player, self.adversary) = spawn_characters(&self.maze, self.difficulty);
    }

    fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.events.push(GameEvent::LifeLost {
            lives_remaining: self.lives,
        });

        if self.lives == 0 {
            self.end_round(RoundOutcome::Lost);
            return;
        }

        self.life_losses += 1;
        let life_loss = LifeLossId(self.life_losses);
        self.phase = RoundPhase::Paused { life_loss };
        info!(lives = self.lives, ?life_loss, "Player caught");
    }

    fn end_round(&mut self, outcome: RoundOutcome) {
        self.phase = RoundPhase::Ended(outcome);
        self.events.push(GameEvent::RoundEnded(outcome));
        info!(?outcome, score = self.score, "Round ended");

        if self.score > self.high_score {
            debug!(previous = self.high_score, score = self.score, "New high score");
            self.high_score = self.score;
            self.events.push(GameEvent::HighScoreUpdated(self.score));
        }
    }
}

fn spawn_characters(maze: &Maze, difficulty: Difficulty) -> (Character, Character) {
    (
        Character::player(maze.player_spawn(), PLAYER_SPEED),
        Character::adversary(maze.adversary_spawn(), difficulty.adversary_speed(), ADVERSARY_START_HEADING),
    )
}
