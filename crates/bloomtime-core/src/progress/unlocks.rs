//! Points-gated cosmetic catalogs.
//!
//! Purely decorative rewards: flower styles for the flower timer and scene
//! backdrops, each unlocked once total points reach its threshold.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FlowerStyle {
    Rose,
    Sunflower,
    Lily,
    Tulip,
    CherryBlossom,
    Lotus,
}

impl FlowerStyle {
    pub const ALL: [FlowerStyle; 6] = [
        FlowerStyle::Rose,
        FlowerStyle::Sunflower,
        FlowerStyle::Lily,
        FlowerStyle::Tulip,
        FlowerStyle::CherryBlossom,
        FlowerStyle::Lotus,
    ];

    pub fn required_points(self) -> u32 {
        match self {
            FlowerStyle::Rose => 0,
            FlowerStyle::Sunflower => 50,
            FlowerStyle::Lily => 100,
            FlowerStyle::Tulip => 200,
            FlowerStyle::CherryBlossom => 300,
            FlowerStyle::Lotus => 500,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FlowerStyle::Rose => "Rose",
            FlowerStyle::Sunflower => "Sunflower",
            FlowerStyle::Lily => "Lily",
            FlowerStyle::Tulip => "Tulip",
            FlowerStyle::CherryBlossom => "Cherry Blossom",
            FlowerStyle::Lotus => "Lotus",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            FlowerStyle::Rose => "🌹",
            FlowerStyle::Sunflower => "🌻",
            FlowerStyle::Lily => "🌷",
            FlowerStyle::Tulip => "🌺",
            FlowerStyle::CherryBlossom => "🌸",
            FlowerStyle::Lotus => "🪷",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Backdrop {
    Garden,
    Forest,
    Beach,
    Mountain,
    Space,
}

impl Backdrop {
    pub const ALL: [Backdrop; 5] = [
        Backdrop::Garden,
        Backdrop::Forest,
        Backdrop::Beach,
        Backdrop::Mountain,
        Backdrop::Space,
    ];

    pub fn required_points(self) -> u32 {
        match self {
            Backdrop::Garden => 0,
            Backdrop::Forest => 100,
            Backdrop::Beach => 200,
            Backdrop::Mountain => 300,
            Backdrop::Space => 500,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Backdrop::Garden => "Garden",
            Backdrop::Forest => "Forest",
            Backdrop::Beach => "Beach",
            Backdrop::Mountain => "Mountain",
            Backdrop::Space => "Space",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Backdrop::Garden => "🏡",
            Backdrop::Forest => "🌲",
            Backdrop::Beach => "🏖️",
            Backdrop::Mountain => "🏔️",
            Backdrop::Space => "🌌",
        }
    }
}

/// Flower styles unlocked at the given point total.
pub fn unlocked_flowers(points: u32) -> Vec<FlowerStyle> {
    FlowerStyle::ALL
        .into_iter()
        .filter(|f| points >= f.required_points())
        .collect()
}

/// Backdrops unlocked at the given point total.
pub fn unlocked_backdrops(points: u32) -> Vec<Backdrop> {
    Backdrop::ALL
        .into_iter()
        .filter(|b| points >= b.required_points())
        .collect()
}
