//! Platforms, genres and the titles recommended for each combination.

mod titles;

pub use titles::*;

use serde::{Deserialize, Serialize};

/// Gaming platform class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Pc,
    /// PlayStation or Xbox.
    Console,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Pc, Platform::Console];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Pc => "pc",
            Platform::Console => "console",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Pc => f.write_str("PC"),
            Platform::Console => f.write_str("console"),
        }
    }
}

/// Genre tags that can become available to the user.
///
/// Simulators have no tag of their own: liking them makes `Strategy` available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Action,
    Rpg,
    Strategy,
    Adventure,
}

impl Genre {
    pub const ALL: [Genre; 4] = [Genre::Action, Genre::Rpg, Genre::Strategy, Genre::Adventure];

    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Action => "action",
            Genre::Rpg => "rpg",
            Genre::Strategy => "strategy",
            Genre::Adventure => "adventure",
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A genre playable on a platform, e.g. `action-pc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Combination {
    pub genre: Genre,
    pub platform: Platform,
}

impl Combination {
    pub const fn new(genre: Genre, platform: Platform) -> Self {
        Self { genre, platform }
    }

    /// All eight combinations, genre-major.
    pub fn all() -> impl Iterator<Item = Combination> {
        Genre::ALL
            .into_iter()
            .flat_map(|genre| Platform::ALL.into_iter().map(move |p| Combination::new(genre, p)))
    }

    /// Kebab name such as `rpg-console`.
    pub fn name(&self) -> String {
        format!("{}-{}", self.genre.as_str(), self.platform.as_str())
    }
}

impl std::fmt::Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}
