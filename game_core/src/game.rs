use hecs::World;

use crate::{
    initial_ball, initial_paddle, render, step, Ball, Config, DrawCommand, Events, GameEvent,
    MatchAction, MatchFsm, MatchState, Net, Paddle, PointerInput, Score, Side, Snapshot,
    TransitionResult,
};

/// A single match against the computer, owning all game state
pub struct Match {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub pointer: PointerInput,
    pub fsm: MatchFsm,
    pub net: Net,
    pub tick: u32,
}

impl Match {
    pub fn new(config: Config) -> Self {
        let mut world = World::new();
        crate::create_paddle(&mut world, initial_paddle(Side::Player, &config));
        crate::create_paddle(&mut world, initial_paddle(Side::Computer, &config));
        crate::create_ball(&mut world, initial_ball(&config));

        let net = Net::new(&config);

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            pointer: PointerInput::new(),
            fsm: MatchFsm::new(),
            net,
            tick: 0,
        }
    }

    pub fn state(&self) -> MatchState {
        self.fsm.state()
    }

    /// Begin play; ignored once the match is running or over
    pub fn start(&mut self) -> TransitionResult {
        self.fsm.transition(MatchAction::Start)
    }

    /// Record a pointer x in board coordinates; the latest sample wins
    pub fn set_pointer_x(&mut self, x: f32) {
        self.pointer.set(x);
    }

    /// Advance one tick and return what happened.
    ///
    /// Outside `Playing` this does nothing and reports no events.
    pub fn tick(&mut self) -> &[GameEvent] {
        if !self.fsm.is_playing() {
            self.events.clear();
            return self.events.as_slice();
        }

        self.tick += 1;
        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.pointer,
        );

        if self.score.threshold_reached(self.config.win_score) {
            let outcome = self.score.outcome();
            self.fsm.transition(MatchAction::Finish(outcome));
            log::info!(
                "Match over after {} ticks: {}",
                self.tick,
                outcome.message()
            );
        }

        self.events.as_slice()
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state(),
            ball: self.ball().unwrap_or_else(|| initial_ball(&self.config)),
            player: self
                .paddle(Side::Player)
                .unwrap_or_else(|| initial_paddle(Side::Player, &self.config)),
            computer: self
                .paddle(Side::Computer)
                .unwrap_or_else(|| initial_paddle(Side::Computer, &self.config)),
            score: self.score,
            tick: self.tick,
        }
    }

    /// Drawing intents for the current frame
    pub fn render(&self) -> Vec<DrawCommand> {
        render(&self.snapshot(), &self.net, &self.config)
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
