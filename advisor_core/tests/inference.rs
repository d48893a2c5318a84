//! End-to-end runs of the standard production set.

use std::collections::BTreeSet;

use advisor_core::{
    ConflictStrategy, Engine, Explainer, Fact, FactKind, RecordingReporter, RunReport,
    ScriptedIntake,
};
use game_catalog::{
    title_for, Combination, GameTitle, Genre, Platform, Question, Recommendation, UserAnswers,
};

struct Outcome {
    engine: Engine,
    report: RunReport,
    reporter: RecordingReporter,
}

fn run(answers: UserAnswers, strategy: ConflictStrategy) -> Outcome {
    let mut engine = Engine::load().with_strategy(strategy);
    engine.reset();
    let mut intake = ScriptedIntake::new(answers);
    let mut reporter = RecordingReporter::new();
    let report = engine
        .run(&mut intake, &mut reporter)
        .expect("scripted run never fails");
    Outcome {
        engine,
        report,
        reporter,
    }
}

fn facts(engine: &Engine, kind: FactKind) -> Vec<Fact> {
    engine
        .memory()
        .facts_of_kind(kind)
        .into_iter()
        .map(|record| record.fact)
        .collect()
}

fn genres(engine: &Engine) -> BTreeSet<Genre> {
    facts(engine, FactKind::GenreAvailable)
        .into_iter()
        .filter_map(|fact| match fact {
            Fact::GenreAvailable(genre) => Some(genre),
            _ => None,
        })
        .collect()
}

fn combinations(engine: &Engine) -> BTreeSet<Combination> {
    facts(engine, FactKind::Combination)
        .into_iter()
        .filter_map(|fact| match fact {
            Fact::Combination(combination) => Some(combination),
            _ => None,
        })
        .collect()
}

fn expected_platform(answers: &UserAnswers) -> Option<Platform> {
    if answers.is_yes(Question::HasPc) {
        Some(Platform::Pc)
    } else if answers.is_yes(Question::HasPlaystation) || answers.is_yes(Question::HasXbox) {
        Some(Platform::Console)
    } else {
        None
    }
}

/// Genres in the order their productions are declared.
fn expected_genres(answers: &UserAnswers) -> Vec<Genre> {
    let mut available = Vec::new();
    if answers.is_yes(Question::LikesAction) {
        available.push(Genre::Action);
    }
    if answers.is_yes(Question::LikesRpg) {
        available.push(Genre::Rpg);
    }
    if answers.is_yes(Question::LikesStrategy) || answers.is_yes(Question::LikesSimulators) {
        available.push(Genre::Strategy);
    }
    if answers.is_yes(Question::LikesAdventure) && answers.is_yes(Question::HasOnline) {
        available.push(Genre::Adventure);
    }
    available
}

/// Result under recency ordering: the first available genre with a title wins.
fn expected_recommendation(answers: &UserAnswers) -> Option<Recommendation> {
    let Some(platform) = expected_platform(answers) else {
        return Some(Recommendation::NoRecommendation);
    };
    let short = answers.is_yes(Question::ShortSessions);
    expected_genres(answers)
        .into_iter()
        .find_map(|genre| title_for(Combination::new(genre, platform), short))
        .map(Recommendation::Game)
}

fn all_answers() -> impl Iterator<Item = UserAnswers> {
    (0u16..1024).map(UserAnswers::from_bits)
}

#[test]
fn test_exhaustive_sweep() {
    let mut uncovered = Vec::new();

    for answers in all_answers() {
        let outcome = run(answers, ConflictStrategy::Recency);
        let engine = &outcome.engine;

        assert!(engine.agenda().is_empty(), "not quiescent for {}", answers);
        assert!(facts(engine, FactKind::Platform).len() <= 1);
        assert!(facts(engine, FactKind::FinalResult).len() <= 1);
        assert!(facts(engine, FactKind::ResultDisplayed).len() <= 1);
        assert_eq!(outcome.report.fire_count("advance-stage"), 1);

        let expected = expected_recommendation(&answers);
        assert_eq!(outcome.report.recommendation, expected, "answers {}", answers);
        assert_eq!(engine.final_result(), expected);

        match expected {
            Some(result) => {
                assert_eq!(outcome.reporter.displayed, vec![result]);
                assert_eq!(outcome.report.fire_count("report-result"), 1);
                assert_eq!(outcome.report.fire_count("finish"), 1);
            }
            None => {
                assert!(outcome.reporter.displayed.is_empty());
                assert!(!outcome.report.fired("report-result"));
                assert!(!outcome.report.fired("finish"));
                uncovered.push(answers);
            }
        }
    }

    // Known gap: some answers own a platform yet match no recommendation rule.
    assert!(!uncovered.is_empty());
    for answers in &uncovered {
        assert!(expected_platform(answers).is_some());
    }
}

#[test]
fn test_non_competing_facts_are_strategy_independent() {
    for answers in all_answers() {
        let outcomes: Vec<Outcome> = [
            ConflictStrategy::Recency,
            ConflictStrategy::Order,
            ConflictStrategy::Specificity,
        ]
        .into_iter()
        .map(|strategy| run(answers, strategy))
        .collect();

        let expected_genres: BTreeSet<Genre> = expected_genres(&answers).into_iter().collect();
        let expected_combinations: BTreeSet<Combination> = match expected_platform(&answers) {
            Some(platform) => expected_genres
                .iter()
                .map(|genre| Combination::new(*genre, platform))
                .collect(),
            None => BTreeSet::new(),
        };
        let adventure_blocked =
            answers.is_yes(Question::LikesAdventure) && !answers.is_yes(Question::HasOnline);

        for outcome in &outcomes {
            let engine = &outcome.engine;
            assert_eq!(genres(engine), expected_genres, "answers {}", answers);
            assert_eq!(combinations(engine), expected_combinations, "answers {}", answers);
            assert_eq!(
                facts(engine, FactKind::AdventureNotAvailable).len(),
                usize::from(adventure_blocked)
            );
            assert_eq!(
                facts(engine, FactKind::NoPlatform).len(),
                usize::from(expected_platform(&answers).is_none())
            );
            assert!(facts(engine, FactKind::FinalResult).len() <= 1);
        }
    }
}

#[test]
fn test_no_platform_means_no_recommendation() {
    for answers in all_answers().filter(|a| expected_platform(a).is_none()) {
        let outcome = run(answers, ConflictStrategy::Recency);

        assert_eq!(
            outcome.report.recommendation,
            Some(Recommendation::NoRecommendation)
        );
        assert!(facts(&outcome.engine, FactKind::Platform).is_empty());
        assert_eq!(facts(&outcome.engine, FactKind::NoPlatform), vec![Fact::NoPlatform]);
        assert!(outcome.report.fired("recommend-nothing"));
    }
}

#[test]
fn test_scenario_pc_action_short_sessions() {
    let answers = UserAnswers::with_yes(&[
        Question::HasPc,
        Question::LikesAction,
        Question::ShortSessions,
    ]);
    let outcome = run(answers, ConflictStrategy::Recency);
    let engine = &outcome.engine;

    assert_eq!(facts(engine, FactKind::Platform), vec![Fact::Platform(Platform::Pc)]);
    assert_eq!(genres(engine), BTreeSet::from([Genre::Action]));
    assert_eq!(
        combinations(engine),
        BTreeSet::from([Combination::new(Genre::Action, Platform::Pc)])
    );
    assert_eq!(
        outcome.report.recommendation,
        Some(Recommendation::Game(GameTitle::CounterStrike))
    );
    assert_eq!(facts(engine, FactKind::Finalized), vec![Fact::Finalized]);
}

#[test]
fn test_scenario_console_adventure_without_online_has_no_result() {
    let answers = UserAnswers::with_yes(&[Question::HasPlaystation, Question::LikesAdventure]);
    let outcome = run(answers, ConflictStrategy::Recency);
    let engine = &outcome.engine;

    assert_eq!(
        facts(engine, FactKind::Platform),
        vec![Fact::Platform(Platform::Console)]
    );
    assert_eq!(
        facts(engine, FactKind::AdventureNotAvailable),
        vec![Fact::AdventureNotAvailable]
    );
    assert!(genres(engine).is_empty());
    assert!(combinations(engine).is_empty());

    // Reproduces the coverage gap: quiescence with no final result.
    assert_eq!(outcome.report.recommendation, None);
    assert!(facts(engine, FactKind::FinalResult).is_empty());
    assert!(facts(engine, FactKind::ResultDisplayed).is_empty());
    assert!(outcome.reporter.displayed.is_empty());
}

#[test]
fn test_platform_tie_picks_exactly_one() {
    for strategy in [
        ConflictStrategy::Recency,
        ConflictStrategy::Order,
        ConflictStrategy::Specificity,
    ] {
        let answers = UserAnswers::with_yes(&[
            Question::HasPc,
            Question::HasPlaystation,
            Question::LikesRpg,
        ]);
        let outcome = run(answers, strategy);
        let platforms = facts(&outcome.engine, FactKind::Platform);

        assert_eq!(platforms.len(), 1);
        assert_eq!(
            outcome.report.fire_count("platform-pc") + outcome.report.fire_count("platform-console"),
            1
        );
        // Declaration order settles the tie.
        assert_eq!(platforms, vec![Fact::Platform(Platform::Pc)]);
        assert_eq!(
            outcome.report.recommendation,
            Some(Recommendation::Game(GameTitle::Skyrim))
        );
    }
}

#[test]
fn test_several_combinations_yield_one_result() {
    let answers = UserAnswers::with_yes(&[
        Question::HasXbox,
        Question::LikesAction,
        Question::LikesRpg,
        Question::LikesStrategy,
        Question::ShortSessions,
    ]);
    let outcome = run(answers, ConflictStrategy::Recency);

    assert_eq!(combinations(&outcome.engine).len(), 3);
    assert_eq!(facts(&outcome.engine, FactKind::FinalResult).len(), 1);
    assert_eq!(
        outcome.report.recommendation,
        Some(Recommendation::Game(GameTitle::Halo))
    );
}

#[test]
fn test_strategy_from_simulators() {
    let answers = UserAnswers::with_yes(&[
        Question::HasPc,
        Question::LikesStrategy,
        Question::LikesSimulators,
    ]);
    let outcome = run(answers, ConflictStrategy::Recency);

    assert_eq!(genres(&outcome.engine), BTreeSet::from([Genre::Strategy]));
    assert!(outcome.report.fired("genre-strategy"));
    assert!(!outcome.report.fired("genre-strategy-from-simulators"));
    assert_eq!(
        outcome.report.recommendation,
        Some(Recommendation::Game(GameTitle::Civilization))
    );
}

#[test]
fn test_explanation_traces_back_to_answers() {
    let answers = UserAnswers::with_yes(&[
        Question::HasXbox,
        Question::LikesAdventure,
        Question::HasOnline,
    ]);
    let outcome = run(answers, ConflictStrategy::Recency);
    assert_eq!(
        outcome.report.recommendation,
        Some(Recommendation::Game(GameTitle::TheLegendOfZelda))
    );

    let text = Explainer::new(outcome.engine.memory())
        .explain_final_result()
        .unwrap();
    assert!(text.starts_with("- 'final result The Legend of Zelda' was derived by recommend-adventure-console-long"));
    assert!(text.contains("was derived by combine-adventure-console"));
    assert!(text.contains("was derived by platform-console"));
    assert!(text.contains("was answered by the user"));
}

#[test]
fn test_messages_reach_the_reporter() {
    let answers = UserAnswers::with_yes(&[Question::HasPc, Question::LikesRpg]);
    let outcome = run(answers, ConflictStrategy::Recency);

    assert_eq!(
        outcome.reporter.notices.first().map(String::as_str),
        Some("Answers recorded, working out a recommendation.")
    );
    assert!(outcome.reporter.notices.iter().any(|n| n == "Platform: PC."));
    assert!(outcome.reporter.notices.iter().any(|n| n == "Genre available: rpg."));
    assert_eq!(
        outcome.reporter.displayed,
        vec![Recommendation::Game(GameTitle::Skyrim)]
    );
}
