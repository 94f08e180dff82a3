//! Sound cues for game events

use game_core::{GameEvent, Side};

/// One of the four sounds the game can play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    PaddleHit,
    WallBounce,
    ComputerScored,
    PlayerScored,
}

impl Cue {
    pub fn for_event(event: GameEvent) -> Self {
        match event {
            GameEvent::PaddleHit(_) => Cue::PaddleHit,
            GameEvent::WallBounce => Cue::WallBounce,
            GameEvent::PointScored(Side::Computer) => Cue::ComputerScored,
            GameEvent::PointScored(Side::Player) => Cue::PlayerScored,
        }
    }

    pub fn src(self) -> &'static str {
        match self {
            Cue::PaddleHit => "sounds/hit.mp3",
            Cue::WallBounce => "sounds/wall.mp3",
            // File names are swapped on disk
            Cue::ComputerScored => "sounds/userScore.mp3",
            Cue::PlayerScored => "sounds/comScore.mp3",
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use player::Sounds;

#[cfg(target_arch = "wasm32")]
mod player {
    use super::Cue;
    use wasm_bindgen::JsValue;
    use web_sys::HtmlAudioElement;

    /// Preloaded audio elements, one per cue
    pub struct Sounds {
        hit: HtmlAudioElement,
        wall: HtmlAudioElement,
        computer_scored: HtmlAudioElement,
        player_scored: HtmlAudioElement,
    }

    impl Sounds {
        pub fn load() -> Result<Self, JsValue> {
            Ok(Self {
                hit: HtmlAudioElement::new_with_src(Cue::PaddleHit.src())?,
                wall: HtmlAudioElement::new_with_src(Cue::WallBounce.src())?,
                computer_scored: HtmlAudioElement::new_with_src(Cue::ComputerScored.src())?,
                player_scored: HtmlAudioElement::new_with_src(Cue::PlayerScored.src())?,
            })
        }

        fn element(&self, cue: Cue) -> &HtmlAudioElement {
            match cue {
                Cue::PaddleHit => &self.hit,
                Cue::WallBounce => &self.wall,
                Cue::ComputerScored => &self.computer_scored,
                Cue::PlayerScored => &self.player_scored,
            }
        }

        /// Fire and forget; restarts the clip if it is still playing
        pub fn play(&self, cue: Cue) {
            let element = self.element(cue);
            element.set_current_time(0.0);
            if let Err(err) = element.play() {
                log::warn!("Could not play {}: {:?}", cue.src(), err);
            }
        }
    }
}
