use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u8,
    pub computer: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Computer => self.computer += 1,
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Player => self.player,
            Side::Computer => self.computer,
        }
    }

    /// Whether either side has reached the win threshold
    pub fn threshold_reached(&self, win_score: u8) -> bool {
        self.player >= win_score || self.computer >= win_score
    }

    /// Final result, decided by comparing scores
    pub fn outcome(&self) -> Outcome {
        match self.player.cmp(&self.computer) {
            std::cmp::Ordering::Greater => Outcome::Winner(Side::Player),
            std::cmp::Ordering::Less => Outcome::Winner(Side::Computer),
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}

/// How a finished match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Side),
    Tie,
}

impl Outcome {
    /// Banner shown on the game over screen
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Winner(Side::Computer) => "COMPUTER WIN",
            Outcome::Winner(Side::Player) => "USER WIN",
            Outcome::Tie => "MATCH TIE",
        }
    }
}

/// Something the presentation layer should react to (usually with a sound)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallBounce,
    PaddleHit(Side),
    PointScored(Side),
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    list: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn push(&mut self, event: GameEvent) {
        self.list.push(event);
    }

    pub fn as_slice(&self) -> &[GameEvent] {
        &self.list
    }

    pub fn contains(&self, event: GameEvent) -> bool {
        self.list.contains(&event)
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

/// Latest pointer sample, consumed on the next tick
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerInput {
    pub x: Option<f32>,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite any sample not yet applied
    pub fn set(&mut self, x: f32) {
        self.x = Some(x);
    }

    pub fn take(&mut self) -> Option<f32> {
        self.x.take()
    }
}
