//! Full game walkthroughs against the public engine surface.

use gallows::{Engine, GameError, GameStatus, GuessOutcome, HintOutcome, WordBook, WordEntry};
use pretty_assertions::assert_eq;

fn cat() -> Vec<WordEntry> {
    vec![WordEntry::new("CAT", "a pet")]
}

#[test]
fn winning_a_game_letter_by_letter() {
    let mut engine = Engine::seeded(3);
    engine.start(&cat()).unwrap();
    assert_eq!(engine.session().unwrap().mask(), "___");

    assert_eq!(engine.guess('C'), Ok(GuessOutcome::Hit('C')));
    assert_eq!(engine.session().unwrap().mask(), "C__");
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.session().unwrap().letters().len(), 25);

    assert_eq!(engine.guess('A'), Ok(GuessOutcome::Hit('A')));
    assert_eq!(engine.session().unwrap().mask(), "CA_");
    assert_eq!(engine.session().unwrap().letters().len(), 24);

    assert_eq!(engine.guess('T'), Ok(GuessOutcome::Hit('T')));
    assert_eq!(engine.session().unwrap().mask(), "CAT");
    assert_eq!(engine.status(), GameStatus::Won);
    assert_eq!(engine.session().unwrap().mistakes(), 0);
}

#[test]
fn losing_on_six_straight_misses() {
    let mut engine = Engine::seeded(3);
    engine.start(&cat()).unwrap();

    for (i, letter) in ['B', 'D', 'E', 'F', 'G', 'H'].into_iter().enumerate() {
        assert_eq!(engine.guess(letter), Ok(GuessOutcome::Miss(letter)));
        assert_eq!(engine.session().unwrap().mistakes(), i as u8 + 1);
        assert_eq!(engine.session().unwrap().letters().len(), 25 - i);
    }

    assert_eq!(engine.status(), GameStatus::Lost);
    assert_eq!(engine.session().unwrap().mask(), "___");
    assert_eq!(engine.session().unwrap().mistakes(), 6);
}

#[test]
fn the_first_hint_is_free() {
    let mut engine = Engine::seeded(3);
    engine.start(&cat()).unwrap();
    assert_eq!(engine.session().unwrap().hint(), None);

    let outcome = engine.use_hint().unwrap();
    assert_eq!(outcome, HintOutcome::Text("a pet".to_owned()));

    let session = engine.session().unwrap();
    assert_eq!(session.hint(), Some("a pet"));
    assert_eq!(session.hint_level(), 2);
    assert_eq!(session.mistakes(), 0);
    assert_eq!(session.mask(), "___");
    assert_eq!(engine.status(), GameStatus::InProgress);
}

#[test]
fn the_vowel_hint_only_reveals_vowels_in_the_phrase() {
    let mut engine = Engine::seeded(3);
    engine
        .start(&[WordEntry::new("OWL", "a nocturnal bird")])
        .unwrap();

    engine.use_hint().unwrap(); // text
    engine.use_hint().unwrap(); // prune
    let outcome = engine.use_hint().unwrap();
    assert_eq!(outcome, HintOutcome::Vowels(vec!['O']));

    let session = engine.session().unwrap();
    assert_eq!(session.mask(), "O__");
    assert!(!session.letters().contains('O'));
    assert!(session.letters().contains('W'));
    assert!(session.letters().contains('L'));
}

#[test]
fn replaying_a_spent_letter_changes_nothing() {
    let mut engine = Engine::seeded(3);
    engine.start(&cat()).unwrap();
    engine.guess('Z').unwrap();
    engine.guess('C').unwrap();

    let before = engine.session().unwrap().clone();
    assert_eq!(engine.guess('Z'), Err(GameError::LetterNotAvailable('Z')));
    assert_eq!(engine.guess('C'), Err(GameError::LetterNotAvailable('C')));
    assert_eq!(engine.session().unwrap(), &before);
}

#[test]
fn six_mistakes_lose_even_when_the_mask_completes() {
    // "AI" is all vowels, so the tier-three hint finishes the mask on the
    // same move that spends the sixth mistake
    let mut engine = Engine::seeded(3);
    engine.start(&[WordEntry::new("AI", "it thinks")]).unwrap();

    engine.use_hint().unwrap();
    for letter in ['B', 'C', 'D', 'F'] {
        engine.guess(letter).unwrap();
    }
    engine.use_hint().unwrap();
    assert_eq!(engine.session().unwrap().mistakes(), 5);

    let outcome = engine.use_hint().unwrap();
    assert_eq!(outcome, HintOutcome::Vowels(vec!['A', 'I']));
    assert_eq!(engine.session().unwrap().mask(), "AI");
    assert_eq!(engine.status(), GameStatus::Lost);
}

#[test]
fn phrases_with_spaces_keep_them_visible() {
    let mut engine = Engine::seeded(3);
    engine
        .start(&[WordEntry::new("BIG O NOTATION", "complexity")])
        .unwrap();
    assert_eq!(engine.session().unwrap().mask(), "___ _ ________");

    engine.guess('O').unwrap();
    assert_eq!(engine.session().unwrap().mask(), "___ O _O____O_");
}

#[test]
fn a_loaded_word_book_feeds_the_engine() {
    let book = WordBook::from_json(
        r#"[{"phrase": "Stack Overflow", "hint": "Where recursion goes to die"}]"#,
    )
    .unwrap();

    let mut engine = Engine::seeded(3);
    engine.start(book.entries()).unwrap();
    assert_eq!(engine.session().unwrap().phrase(), "STACK OVERFLOW");
    assert_eq!(engine.session().unwrap().mask(), "_____ ________");

    engine.use_hint().unwrap();
    assert_eq!(
        engine.session().unwrap().hint(),
        Some("Where recursion goes to die")
    );
}

#[test]
fn seeded_engines_pick_the_same_word() {
    let words = vec![
        WordEntry::new("CAT", "a pet"),
        WordEntry::new("OWL", "a bird"),
        WordEntry::new("FERRIS", "a crab"),
        WordEntry::new("GALLOWS", "where this game ends"),
    ];

    let mut first = Engine::seeded(1234);
    let mut second = Engine::seeded(1234);
    first.start(&words).unwrap();
    second.start(&words).unwrap();

    assert_eq!(
        first.session().unwrap().phrase(),
        second.session().unwrap().phrase()
    );
}
