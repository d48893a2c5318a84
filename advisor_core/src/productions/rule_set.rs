//! The fixed production set of the game advisor.
//!
//! Declaration order matters: it is the last tie-break of conflict resolution.

use game_catalog::{
    Answer, Combination, Genre, Platform, Question, Recommendation, Stage, TITLE_TABLE,
};

use super::{Effect, Production, Tier};
use crate::working_memory::{Fact, Pattern};

/// Build every production, in declaration order.
pub fn standard_rules() -> Vec<Production> {
    let mut rules = vec![
        Production::new("advance-stage", Tier::Setup)
            .when(Pattern::Stage(Stage::AwaitingInput))
            .then(Effect::CollectAnswers)
            .then(Effect::Retract(0))
            .then_assert(Fact::Stage(Stage::Inference))
            .then_say("Answers recorded, working out a recommendation."),
    ];

    rules.extend(platform_rules());
    rules.extend(genre_rules());
    rules.extend(Combination::all().map(combination_rule));
    rules.extend(recommendation_rules());

    rules.push(
        Production::new("report-result", Tier::Report)
            .when(Pattern::AnyFinalResult)
            .unless(Pattern::ResultDisplayed)
            .then(Effect::DisplayResult(0))
            .then_assert(Fact::ResultDisplayed),
    );
    rules.push(
        Production::new("finish", Tier::Terminate)
            .when(Pattern::ResultDisplayed)
            .unless(Pattern::Finalized)
            .then_assert(Fact::Finalized)
            .then_say("Thank you for using the game advisor!"),
    );

    rules
}

fn yes(question: Question) -> Pattern {
    Pattern::Answer(question, Answer::Yes)
}

fn no(question: Question) -> Pattern {
    Pattern::Answer(question, Answer::No)
}

fn platform_rules() -> Vec<Production> {
    vec![
        Production::new("platform-pc", Tier::Default)
            .when(yes(Question::HasPc))
            .unless(Pattern::AnyPlatform)
            .then_assert(Fact::Platform(Platform::Pc))
            .then_say("Platform: PC."),
        Production::new("platform-console", Tier::Default)
            .when_any([yes(Question::HasPlaystation), yes(Question::HasXbox)])
            .unless(Pattern::AnyPlatform)
            .then_assert(Fact::Platform(Platform::Console))
            .then_say("Platform: console."),
        Production::new("no-platform", Tier::Default)
            .when(no(Question::HasPc))
            .when(no(Question::HasPlaystation))
            .when(no(Question::HasXbox))
            .unless(Pattern::NoPlatform)
            .then_assert(Fact::NoPlatform)
            .then_say("No gaming platform available."),
    ]
}

fn genre_rule(name: &str, likes: Question, genre: Genre) -> Production {
    Production::new(name, Tier::Default)
        .when(yes(likes))
        .unless(Pattern::GenreAvailable(genre))
        .then_assert(Fact::GenreAvailable(genre))
        .then_say(format!("Genre available: {}.", genre))
}

fn genre_rules() -> Vec<Production> {
    vec![
        genre_rule("genre-action", Question::LikesAction, Genre::Action),
        genre_rule("genre-rpg", Question::LikesRpg, Genre::Rpg),
        genre_rule("genre-strategy", Question::LikesStrategy, Genre::Strategy),
        genre_rule(
            "genre-strategy-from-simulators",
            Question::LikesSimulators,
            Genre::Strategy,
        ),
        Production::new("genre-adventure", Tier::Default)
            .when(yes(Question::LikesAdventure))
            .when(yes(Question::HasOnline))
            .unless(Pattern::GenreAvailable(Genre::Adventure))
            .then_assert(Fact::GenreAvailable(Genre::Adventure))
            .then_say("Genre available: adventure."),
        Production::new("adventure-not-available", Tier::Default)
            .when(yes(Question::LikesAdventure))
            .when(no(Question::HasOnline))
            .unless(Pattern::AdventureNotAvailable)
            .then_assert(Fact::AdventureNotAvailable)
            .then_say("Adventure games need online access, skipping them."),
    ]
}

fn combination_rule(combination: Combination) -> Production {
    Production::new(format!("combine-{}", combination), Tier::Default)
        .when(Pattern::Platform(combination.platform))
        .when(Pattern::GenreAvailable(combination.genre))
        .unless(Pattern::Combination(combination))
        .then_assert(Fact::Combination(combination))
}

fn recommendation_rules() -> Vec<Production> {
    let mut rules: Vec<Production> = TITLE_TABLE
        .iter()
        .map(|row| {
            let session = if row.short_sessions { "short" } else { "long" };
            Production::new(
                format!("recommend-{}-{}", row.combination, session),
                Tier::Derivation,
            )
            .when(Pattern::Combination(row.combination))
            .when(Pattern::Answer(
                Question::ShortSessions,
                Answer::from(row.short_sessions),
            ))
            .unless(Pattern::AnyFinalResult)
            .then_assert(Fact::FinalResult(Recommendation::Game(row.title)))
        })
        .collect();

    rules.push(
        Production::new("recommend-nothing", Tier::Derivation)
            .when(Pattern::NoPlatform)
            .unless(Pattern::AnyFinalResult)
            .then_assert(Fact::FinalResult(Recommendation::NoRecommendation)),
    );

    rules
}
