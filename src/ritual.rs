//! Fortune poem ritual
//!
//! Hold to shake the fortune tube; once the progress bar fills, one poem is
//! drawn. Letting go early starts over. The page drives `tick` from a 40 ms
//! interval, so a full shake takes two seconds.

use rand::Rng;
use serde::Serialize;

/// Progress added per tick while held
pub const PROGRESS_PER_TICK: u8 = 2;
/// Progress at which the poem is revealed
pub const PROGRESS_FULL: u8 = 100;
/// Interval the page ticks at
pub const TICK_INTERVAL_MS: u32 = 40;

/// A fortune poem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FortunePoem {
    pub title: &'static str,
    pub lines: [&'static str; 4],
    pub meaning: &'static str,
}

pub const POEMS: [FortunePoem; 6] = [
    FortunePoem {
        title: "Upper Upper: The Golden Horse",
        lines: [
            "A golden horse runs east at dawn",
            "Its hooves strike sparks on frozen ground",
            "The road ahead is wide and long",
            "Where it stops, the gold is found",
        ],
        meaning: "Bold moves pay off. Act early and keep going.",
    },
    FortunePoem {
        title: "Upper: Lanterns on the River",
        lines: [
            "A thousand lanterns on the stream",
            "Each one carries someone's wish",
            "The current bends but does not break",
            "And every light comes home at last",
        ],
        meaning: "Patience brings what you hoped for.",
    },
    FortunePoem {
        title: "Upper: The Full Granary",
        lines: [
            "Seed sown in spring with steady hands",
            "Grows tall beneath the summer sun",
            "By autumn every bin is full",
            "The careful farmer's work is done",
        ],
        meaning: "Steady effort, steady reward.",
    },
    FortunePoem {
        title: "Middle: Clouds Part at Noon",
        lines: [
            "Grey morning hides the mountain peak",
            "The traveler waits beside the pine",
            "At noon the wind sweeps clouds away",
            "And shows the path was always there",
        ],
        meaning: "Confusion clears. Wait for the right moment.",
    },
    FortunePoem {
        title: "Middle: The Koi and the Gate",
        lines: [
            "The koi swims hard against the falls",
            "A hundred times it tumbles back",
            "But on the day it clears the gate",
            "It rises as a dragon does",
        ],
        meaning: "Persistence turns setbacks into a breakthrough.",
    },
    FortunePoem {
        title: "Lower Middle: Quiet Waters",
        lines: [
            "Do not cast nets in muddy water",
            "Let the silt settle, let it clear",
            "The fish will wait, the tide returns",
            "Fortune favors those who hear",
        ],
        meaning: "Hold back for now. Better chances are coming.",
    },
];

/// Where the ritual is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RitualPhase {
    /// Waiting for a press
    Idle,
    /// Held down, progress filling
    Shaking,
    /// Poem drawn; ignores input until reset
    Revealed,
}

/// Long-press state machine
#[derive(Debug, Clone)]
pub struct FortuneRitual {
    phase: RitualPhase,
    progress: u8,
    poem: Option<FortunePoem>,
}

impl Default for FortuneRitual {
    fn default() -> Self {
        Self::new()
    }
}

impl FortuneRitual {
    pub fn new() -> Self {
        Self {
            phase: RitualPhase::Idle,
            progress: 0,
            poem: None,
        }
    }

    pub fn phase(&self) -> RitualPhase {
        self.phase
    }

    /// 0-100
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn poem(&self) -> Option<&FortunePoem> {
        self.poem.as_ref()
    }

    /// Start holding
    pub fn press(&mut self) {
        if self.phase == RitualPhase::Revealed {
            return;
        }
        self.phase = RitualPhase::Shaking;
        self.progress = 0;
    }

    /// Advance one interval. Returns the poem on the tick that reveals it.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> Option<&FortunePoem> {
        if self.phase != RitualPhase::Shaking {
            return None;
        }

        self.progress = (self.progress + PROGRESS_PER_TICK).min(PROGRESS_FULL);
        if self.progress < PROGRESS_FULL {
            return None;
        }

        let poem = POEMS[rng.random_range(0..POEMS.len())];
        log::info!("Fortune drawn: {}", poem.title);
        self.phase = RitualPhase::Revealed;
        self.poem = Some(poem);
        self.poem.as_ref()
    }

    /// Let go. Before the reveal this throws the progress away.
    pub fn release(&mut self) {
        if self.phase == RitualPhase::Shaking {
            self.phase = RitualPhase::Idle;
            self.progress = 0;
        }
    }

    /// Close the poem and allow another ritual
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
