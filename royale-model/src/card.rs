//! Card data models.

use std::str::FromStr;

use derive_more::{Display, Error};

use serde::{Deserialize, Serialize};

/// A single card.
///
/// Only the fields this crate cares about are modeled; anything else the API
/// returns is ignored.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// The unique identifier of the card.
    pub id: u32,
    /// The card's name.
    pub name: String,
    /// The highest level the card can reach.
    pub max_level: u32,
    /// The highest evolution level, if the card can evolve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_evolution_level: Option<u32>,
    /// How much elixir it costs to play the card.
    ///
    /// Some cards, like the Mirror, have no fixed cost.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elixir_cost: Option<u32>,
    /// The card's rarity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<Rarity>,
    /// Card artwork.
    #[serde(default)]
    pub icon_urls: IconUrls,
}

/// Card artwork urls.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IconUrls {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evolution_medium: Option<String>,
}

/// Card rarity.
///
/// Rarities this crate does not know yet decode as [`Rarity::Unknown`].
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    Champion,
    #[serde(other)]
    Unknown,
}

impl Rarity {
    /// Creates a string representation of the rarity that can be used to get
    /// back the rarity with [`FromStr`].
    pub fn to_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
            Rarity::Champion => "champion",
            Rarity::Unknown => "unknown",
        }
    }
}

impl FromStr for Rarity {
    type Err = NoSuchRarity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "common" => Ok(Rarity::Common),
            "rare" => Ok(Rarity::Rare),
            "epic" => Ok(Rarity::Epic),
            "legendary" => Ok(Rarity::Legendary),
            "champion" => Ok(Rarity::Champion),
            "unknown" => Ok(Rarity::Unknown),
            _ => Err(NoSuchRarity(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, Display, Error)]
#[display("no such rarity \"{_0}\" exists")]
pub struct NoSuchRarity(#[error(not(source))] String);
