//! Bounded uniform random draws
//!
//! The primary zone is sampled without replacement and returned ascending.
//! The bonus zone is sampled with replacement and returned in draw order.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::range::{DrawRequest, DrawResult, Range, clamp_count};
use crate::error::DrawError;
use crate::games::GameConfig;

/// Draw engine over any `rand` generator
#[derive(Debug, Clone)]
pub struct DrawEngine<R = Pcg32> {
    rng: R,
}

impl DrawEngine<Pcg32> {
    /// Reproducible engine (tests, replays)
    pub fn seeded(seed: u64) -> Self {
        Self::new(Pcg32::seed_from_u64(seed))
    }

    /// Engine seeded from the platform entropy source
    pub fn from_entropy() -> Self {
        let seed = crate::platform::entropy_seed();
        log::debug!("Draw engine seeded with {}", seed);
        Self::seeded(seed)
    }
}

impl<R: Rng> DrawEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Access the generator (the fortune ritual shares it)
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Draw `count` distinct values from `range`, ascending.
    ///
    /// `count` is clamped to the domain size, so asking for 50 numbers out of
    /// `1..=39` returns all 39.
    pub fn draw_unique(&mut self, range: Range, count: usize) -> Result<Vec<i32>, DrawError> {
        range.validate()?;

        let domain = range.domain_size();
        let effective = clamp_count(range, count);
        if effective < count {
            log::warn!(
                "Requested {} numbers from {}..={}, clamped to {}",
                count,
                range.min,
                range.max,
                effective
            );
        }
        if effective == 0 {
            return Ok(Vec::new());
        }

        // Rejection sampling degrades as the draw covers most of the domain;
        // past the halfway point a partial shuffle is bounded instead.
        let values = if (effective as u64) * 2 <= domain {
            self.rejection_sample(range, effective)
        } else {
            self.partial_shuffle(range, effective)
        };

        debug_assert_eq!(values.len(), effective);
        Ok(values)
    }

    /// Draw `count` independent values from `range` (repeats allowed)
    pub fn draw_with_replacement(
        &mut self,
        range: Range,
        count: usize,
    ) -> Result<Vec<i32>, DrawError> {
        range.validate()?;
        Ok((0..count)
            .map(|_| self.rng.random_range(range.min..=range.max))
            .collect())
    }

    /// Draw a primary zone and an optional independent bonus zone
    pub fn draw_pair(
        &mut self,
        primary: &DrawRequest,
        secondary: Option<&DrawRequest>,
    ) -> Result<DrawResult, DrawError> {
        let primary = self.draw_unique(primary.range, primary.count)?;
        let secondary = secondary
            .map(|req| self.draw_with_replacement(req.range, req.count))
            .transpose()?;
        Ok(DrawResult { primary, secondary })
    }

    /// Draw both zones of a game
    pub fn draw_game(&mut self, game: &GameConfig) -> Result<DrawResult, DrawError> {
        let result = self.draw_pair(&game.primary, game.secondary.as_ref())?;
        log::debug!("{} drew {:?}", game.id, result);
        Ok(result)
    }

    /// Throwaway numbers to flash while a draw is being revealed.
    ///
    /// Both zones sample with replacement; only the primary is sorted.
    pub fn preview(&mut self, game: &GameConfig) -> Result<DrawResult, DrawError> {
        let mut primary = self.draw_with_replacement(game.primary.range, game.primary.count)?;
        primary.sort_unstable();
        let secondary = game
            .secondary
            .as_ref()
            .map(|req| self.draw_with_replacement(req.range, req.count))
            .transpose()?;
        Ok(DrawResult { primary, secondary })
    }

    fn rejection_sample(&mut self, range: Range, count: usize) -> Vec<i32> {
        let mut picked = BTreeSet::new();
        while picked.len() < count {
            picked.insert(self.rng.random_range(range.min..=range.max));
        }
        picked.into_iter().collect()
    }

    fn partial_shuffle(&mut self, range: Range, count: usize) -> Vec<i32> {
        // Only reached when the domain is at most twice the result size
        let mut pool: Vec<i32> = (range.min..=range.max).collect();
        let (picked, _) = pool.partial_shuffle(&mut self.rng, count);
        let mut values = picked.to_vec();
        values.sort_unstable();
        values
    }
}
