//! Game titles and the recommendation table.

use serde::{Deserialize, Serialize};

use super::{Combination, Genre, Platform};

/// Titles the advisor can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameTitle {
    CounterStrike,
    Battlefield,
    Halo,
    GodOfWar,
    TheWitcher,
    Skyrim,
    FinalFantasy,
    AgeOfEmpires,
    Civilization,
    Xcom,
    BatmanArkham,
    Uncharted,
    TheLegendOfZelda,
}

impl GameTitle {
    /// Display name of the title.
    pub fn name(self) -> &'static str {
        match self {
            GameTitle::CounterStrike => "Counter-Strike",
            GameTitle::Battlefield => "Battlefield",
            GameTitle::Halo => "Halo",
            GameTitle::GodOfWar => "God of War",
            GameTitle::TheWitcher => "The Witcher",
            GameTitle::Skyrim => "Skyrim",
            GameTitle::FinalFantasy => "Final Fantasy",
            GameTitle::AgeOfEmpires => "Age of Empires",
            GameTitle::Civilization => "Civilization",
            GameTitle::Xcom => "XCOM",
            GameTitle::BatmanArkham => "Batman: Arkham",
            GameTitle::Uncharted => "Uncharted",
            GameTitle::TheLegendOfZelda => "The Legend of Zelda",
        }
    }
}

impl std::fmt::Display for GameTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a questionnaire run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    Game(GameTitle),
    /// The user owns no platform.
    NoRecommendation,
}

impl Recommendation {
    pub fn title(&self) -> Option<GameTitle> {
        match self {
            Recommendation::Game(title) => Some(*title),
            Recommendation::NoRecommendation => None,
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recommendation::Game(title) => f.write_str(title.name()),
            Recommendation::NoRecommendation => f.write_str("no recommendation"),
        }
    }
}

/// One row of the recommendation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleRule {
    pub combination: Combination,
    /// Required value of the short-sessions answer.
    pub short_sessions: bool,
    pub title: GameTitle,
}

const fn row(genre: Genre, platform: Platform, short_sessions: bool, title: GameTitle) -> TitleRule {
    TitleRule {
        combination: Combination::new(genre, platform),
        short_sessions,
        title,
    }
}

/// Thirteen rows. `rpg-console`, `strategy-console` and `adventure-pc` have no
/// long-session title.
pub const TITLE_TABLE: [TitleRule; 13] = [
    row(Genre::Action, Platform::Pc, true, GameTitle::CounterStrike),
    row(Genre::Action, Platform::Pc, false, GameTitle::Battlefield),
    row(Genre::Action, Platform::Console, true, GameTitle::Halo),
    row(Genre::Action, Platform::Console, false, GameTitle::GodOfWar),
    row(Genre::Rpg, Platform::Pc, true, GameTitle::TheWitcher),
    row(Genre::Rpg, Platform::Pc, false, GameTitle::Skyrim),
    row(Genre::Rpg, Platform::Console, true, GameTitle::FinalFantasy),
    row(Genre::Strategy, Platform::Pc, true, GameTitle::AgeOfEmpires),
    row(Genre::Strategy, Platform::Pc, false, GameTitle::Civilization),
    row(Genre::Strategy, Platform::Console, true, GameTitle::Xcom),
    row(Genre::Adventure, Platform::Pc, true, GameTitle::BatmanArkham),
    row(Genre::Adventure, Platform::Console, true, GameTitle::Uncharted),
    row(Genre::Adventure, Platform::Console, false, GameTitle::TheLegendOfZelda),
];

/// Look up the title for a combination and session preference.
pub fn title_for(combination: Combination, short_sessions: bool) -> Option<GameTitle> {
    TITLE_TABLE
        .iter()
        .find(|r| r.combination == combination && r.short_sessions == short_sessions)
        .map(|r| r.title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_lookup() {
        let action_pc = Combination::new(Genre::Action, Platform::Pc);
        assert_eq!(title_for(action_pc, true), Some(GameTitle::CounterStrike));
        assert_eq!(title_for(action_pc, false), Some(GameTitle::Battlefield));
    }

    #[test]
    fn test_uncovered_rows() {
        let missing: Vec<_> = Combination::all()
            .filter(|c| title_for(*c, false).is_none())
            .map(|c| c.name())
            .collect();
        assert_eq!(missing, vec!["rpg-console", "strategy-console", "adventure-pc"]);
        assert!(Combination::all().all(|c| title_for(c, true).is_some()));
    }

    #[test]
    fn test_recommendation_display() {
        assert_eq!(Recommendation::Game(GameTitle::Xcom).to_string(), "XCOM");
        assert_eq!(Recommendation::NoRecommendation.to_string(), "no recommendation");
        assert_eq!(Recommendation::NoRecommendation.title(), None);
    }
}
