//! Lottery game definitions
//!
//! Three preset games plus user-defined custom picks.

use serde::{Deserialize, Serialize};

use crate::draw::DrawRequest;
use crate::error::DrawError;

/// Id used for custom games in history
pub const CUSTOM_GAME_ID: &str = "custom";

/// A drawable game: one primary zone and an optional bonus zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub id: String,
    /// Display name, also used as the history label
    pub name: String,
    pub primary: DrawRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<DrawRequest>,
}

/// (id, name, primary min/max/count, bonus min/max/count)
type PresetRow = (&'static str, &'static str, (i32, i32, usize), Option<(i32, i32, usize)>);

const PRESETS: [PresetRow; 3] = [
    ("bigLotto", "Big Lotto", (1, 49, 6), None),
    ("powerLottery", "Power Lottery", (1, 38, 6), Some((1, 8, 1))),
    ("539", "Daily 539", (1, 39, 5), None),
];

impl GameConfig {
    /// All preset games, in display order
    pub fn presets() -> Vec<Self> {
        PRESETS.iter().map(Self::from_row).collect()
    }

    /// Look up a preset by id
    pub fn preset(id: &str) -> Option<Self> {
        PRESETS
            .iter()
            .find(|row| row.0 == id)
            .map(Self::from_row)
    }

    /// Build a custom single-zone game
    pub fn custom(min: i32, max: i32, count: usize) -> Result<Self, DrawError> {
        Ok(Self {
            id: CUSTOM_GAME_ID.to_string(),
            name: "Custom Pick".to_string(),
            primary: DrawRequest::new(min, max, count)?,
            secondary: None,
        })
    }

    pub fn has_bonus_zone(&self) -> bool {
        self.secondary.is_some()
    }

    /// Check both zones (configs loaded from storage bypass the constructors)
    pub fn validate(&self) -> Result<(), DrawError> {
        self.primary.range.validate()?;
        if let Some(bonus) = &self.secondary {
            bonus.range.validate()?;
        }
        Ok(())
    }

    fn from_row(row: &PresetRow) -> Self {
        let (id, name, (min, max, count), bonus) = *row;
        let zone = |min, max, count| DrawRequest {
            range: crate::draw::Range { min, max },
            count,
        };
        Self {
            id: id.to_string(),
            name: name.to_string(),
            primary: zone(min, max, count),
            secondary: bonus.map(|(min, max, count)| zone(min, max, count)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Range;

    #[test]
    fn test_presets_in_display_order() {
        let ids: Vec<_> = GameConfig::presets().into_iter().map(|g| g.id).collect();
        assert_eq!(ids, ["bigLotto", "powerLottery", "539"]);
    }

    #[test]
    fn test_preset_zones() {
        let big = GameConfig::preset("bigLotto").unwrap();
        assert_eq!(big.primary.range, Range { min: 1, max: 49 });
        assert_eq!(big.primary.count, 6);
        assert!(!big.has_bonus_zone());

        let power = GameConfig::preset("powerLottery").unwrap();
        assert_eq!(power.primary.range, Range { min: 1, max: 38 });
        let bonus = power.secondary.unwrap();
        assert_eq!(bonus.range, Range { min: 1, max: 8 });
        assert_eq!(bonus.count, 1);

        let daily = GameConfig::preset("539").unwrap();
        assert_eq!(daily.primary.range, Range { min: 1, max: 39 });
        assert_eq!(daily.primary.count, 5);
    }

    #[test]
    fn test_presets_are_valid() {
        for game in GameConfig::presets() {
            assert!(game.validate().is_ok(), "{}", game.id);
        }
        assert!(GameConfig::preset("keno").is_none());
    }

    #[test]
    fn test_custom_game() {
        let game = GameConfig::custom(1, 10, 3).unwrap();
        assert_eq!(game.id, CUSTOM_GAME_ID);
        assert!(!game.has_bonus_zone());

        assert_eq!(
            GameConfig::custom(10, 1, 3),
            Err(DrawError::InvalidRange { min: 10, max: 1 })
        );
    }
}
