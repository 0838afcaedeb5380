//! Provides the [DifficultySetting](DifficultySetting) struct and the static
//! catalog of difficulty items a new profile starts from.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// The catalog of difficulty items a new profile's custom difficulty is
    /// seeded with, in the order the player profile renders them.
    pub static ref ITEM_CATALOG: Vec<DifficultyItem> = vec![
        DifficultyItem::flag("reducedDamage", false, false),
        DifficultyItem::numeric("groupIndicators", 1.0, false),
        DifficultyItem::numeric("friendlyTags", 1.0, false),
        DifficultyItem::numeric("enemyTags", 0.0, false),
        DifficultyItem::flag("detectedMines", true, false),
        DifficultyItem::numeric("commands", 1.0, false),
        DifficultyItem::numeric("waypoints", 1.0, false),
        DifficultyItem::numeric("weaponInfo", 1.0, false),
        DifficultyItem::flag("weaponCrosshair", true, false),
        DifficultyItem::flag("visionAid", false, false),
        DifficultyItem::flag("thirdPersonView", true, false),
        DifficultyItem::flag("cameraShake", true, false),
        DifficultyItem::flag("scoreTable", true, false),
        DifficultyItem::flag("deathMessages", true, false),
        DifficultyItem::flag("vonID", true, false),
        DifficultyItem::flag("mapContent", false, false),
        DifficultyItem::flag("autoReport", true, false),
        DifficultyItem::flag("multipleSaves", false, false),
        DifficultyItem::flag("ultraAI", false, false),
        DifficultyItem::flag("stanceIndicator", true, true),
        DifficultyItem::flag("staminaBar", true, true),
        DifficultyItem::flag("tacticalPing", true, true),
    ];
}

/// A difficulty item's value together with its formatting rule.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(rename_all = "lowercase")]
pub enum ItemValue {
    /// A boolean flag, rendered as `name=0;` or `name=1;`.
    Flag(bool),
    /// A numeric value, rendered as `name=<value>;`.
    Numeric(f64),
    /// A raw expression, rendered verbatim as its own line.
    Expression(String),
}

/// One named item in the custom difficulty ruleset.
///
/// Items come into being when a profile is created or its difficulty is reset
/// from the [catalog](ITEM_CATALOG), are mutated by the user from there on and
/// live for as long as the profile does.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct DifficultyItem {
    /// The item's name, unique within the ruleset.
    pub name: String,
    /// The item's value and formatting rule.
    pub value: ItemValue,
    /// Whether the item exists only in Arma 3's difficulty options. Such
    /// items are skipped when rendering a profile for the older games.
    pub arma3_only: bool,
}

impl DifficultyItem {
    /// Returns a new flag item.
    pub fn flag(name: &str, value: bool, arma3_only: bool) -> Self {
        Self {
            name: name.to_string(),
            value: ItemValue::Flag(value),
            arma3_only,
        }
    }

    /// Returns a new numeric item.
    pub fn numeric(name: &str, value: f64, arma3_only: bool) -> Self {
        Self {
            name: name.to_string(),
            value: ItemValue::Numeric(value),
            arma3_only,
        }
    }

    /// Returns a new raw expression item.
    pub fn expression(name: &str, expression: &str, arma3_only: bool) -> Self {
        Self {
            name: name.to_string(),
            value: ItemValue::Expression(expression.to_string()),
            arma3_only,
        }
    }

    /// Returns the item's line in the player profile's Options block.
    pub fn render(&self) -> String {
        match &self.value {
            ItemValue::Flag(value) => format!("{}={};", self.name, *value as u8),
            ItemValue::Numeric(value) => format!("{}={};", self.name, value),
            ItemValue::Expression(expression) => expression.clone(),
        }
    }
}

/// Contains a profile's custom difficulty: the AI settings and the difficulty
/// item ruleset.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct DifficultySetting {
    /// The default difficulty code for missions without an explicit one
    /// (0 recruit, 1 regular, 2 veteran, 3 custom).
    pub default_difficulty: u8,
    /// Corresponds to the `aiLevelPreset` setting (0 to 3).
    pub ai_level_preset: u8,
    /// Corresponds to the `skillAI` setting (0.0 to 1.0).
    pub skill_ai: f64,
    /// Corresponds to the `precisionAI` setting (0.0 to 1.0).
    pub precision_ai: f64,
    /// The difficulty items, in render order.
    pub items: Vec<DifficultyItem>,
}

impl Default for DifficultySetting {
    fn default() -> Self {
        Self {
            default_difficulty: 1,
            ai_level_preset: 3,
            skill_ai: 0.6,
            precision_ai: 0.28,
            items: ITEM_CATALOG.clone(),
        }
    }
}

impl DifficultySetting {
    /// Looks up a difficulty item by name.
    pub fn item(&self, name: &str) -> Option<&DifficultyItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Looks up a difficulty item by name for mutation.
    pub fn item_mut(&mut self, name: &str) -> Option<&mut DifficultyItem> {
        self.items.iter_mut().find(|item| item.name == name)
    }

    /// Resets the difficulty items back to the catalog's values.
    pub fn reset_items(&mut self) {
        self.items = ITEM_CATALOG.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_renders_as_binary() {
        assert_eq!(DifficultyItem::flag("mapContent", false, false).render(), "mapContent=0;");
        assert_eq!(DifficultyItem::flag("mapContent", true, false).render(), "mapContent=1;");
    }

    #[test]
    fn numeric_renders_value() {
        assert_eq!(
            DifficultyItem::numeric("groupIndicators", 2.0, false).render(),
            "groupIndicators=2;"
        );
        assert_eq!(
            DifficultyItem::numeric("recoilCoef", 0.5, false).render(),
            "recoilCoef=0.5;"
        );
    }

    #[test]
    fn expression_renders_verbatim() {
        let item = DifficultyItem::expression("custom", "aiKillReported=1;", false);
        assert_eq!(item.render(), "aiKillReported=1;");
    }

    #[test]
    fn catalog_names_are_unique() {
        for (i, item) in ITEM_CATALOG.iter().enumerate() {
            assert!(
                !ITEM_CATALOG.iter().skip(i + 1).any(|other| other.name == item.name),
                "duplicate catalog item {}",
                item.name
            );
        }
    }

    #[test]
    fn item_lookup_and_reset() {
        let mut setting = DifficultySetting::default();
        if let Some(item) = setting.item_mut("thirdPersonView") {
            item.value = ItemValue::Flag(false);
        }
        assert_eq!(
            setting.item("thirdPersonView").map(DifficultyItem::render),
            Some(String::from("thirdPersonView=0;"))
        );

        setting.reset_items();
        assert_eq!(
            setting.item("thirdPersonView").map(DifficultyItem::render),
            Some(String::from("thirdPersonView=1;"))
        );
    }
}
