use super::*;

fn engine() -> MatchEngine {
    MatchEngine::standard("scalawag_bot")
}

fn pattern(phrase: &str) -> &'static ErrorPattern {
    PatternRegistry::standard()
        .iter()
        .find(|p| p.phrase() == phrase)
        .unwrap()
}

#[test]
fn standard_registry_keeps_registration_order() {
    let phrases: Vec<_> = PatternRegistry::standard()
        .iter()
        .map(|p| p.phrase())
        .collect();
    assert_eq!(
        phrases,
        vec![
            "its not", "its a", "its ok", "its the", "its really", "of it's", "with it's",
            "on it's", "in it's", "for it's", "under it's", "above it's", "around it's",
            "inside it's",
        ]
    );
    assert!(PatternRegistry::standard()
        .iter()
        .take(5)
        .all(|p| p.category() == ErrorCategory::ForgottenApostrophe));
    assert!(PatternRegistry::standard()
        .iter()
        .skip(5)
        .all(|p| p.category() == ErrorCategory::ExtraApostrophe));
}

#[test]
fn patterns_respect_word_boundaries() {
    let registry = PatternRegistry::standard();
    assert!(registry.find_pattern("itsok with me").is_none());
    assert!(registry.find_pattern("it's ok").is_none());
    assert!(registry.find_pattern("bits nothing").is_none());
    assert_eq!(registry.find_pattern("its ok, really").unwrap().phrase(), "its ok");
}

#[test]
fn earliest_registered_pattern_wins() {
    let registry = PatternRegistry::standard();
    // "for it's" comes first in the text, but forgotten-apostrophe phrases are
    // registered first.
    let text = "For it's own sake. Its the best.";
    assert_eq!(registry.find_pattern(text).unwrap().phrase(), "its the");

    let text = "Its the end, its not over";
    assert_eq!(registry.find_pattern(text).unwrap().phrase(), "its not");
}

#[test]
fn find_keeps_original_casing() {
    let m = pattern("its not").find("Well ITS NOT fine").unwrap();
    assert_eq!(m.as_str(), "ITS NOT");
}

#[test]
fn registry_rejects_bad_seeds() {
    let none: [&str; 0] = [];
    assert!(matches!(
        PatternRegistry::from_word_lists(&none, &["of"]),
        Err(RegistryError::EmptyWordList(ErrorCategory::ForgottenApostrophe))
    ));
    assert!(matches!(
        PatternRegistry::from_word_lists(&["not"], &none),
        Err(RegistryError::EmptyWordList(ErrorCategory::ExtraApostrophe))
    ));
    assert!(matches!(
        PatternRegistry::from_word_lists(&["not at"], &["of"]),
        Err(RegistryError::InvalidWord { .. })
    ));
    assert!(matches!(
        PatternRegistry::from_word_lists(&["not"], &["-of"]),
        Err(RegistryError::InvalidWord { .. })
    ));
}

#[test]
fn registry_from_custom_lists_lowercases_and_dedups() {
    let registry = PatternRegistry::from_word_lists(&["Not", "not"], &["BY"]).unwrap();
    let phrases: Vec<_> = registry.iter().map(|p| p.phrase()).collect();
    assert_eq!(phrases, vec!["its not", "by it's"]);
    assert!(registry.find_pattern("Judge a book By It's cover").is_some());
}

#[test]
fn swap_is_order_safe() {
    assert_eq!(swap("a", "b", "abba"), "baab");
    assert_eq!(swap("it's", "its", "its it's"), "it's its");
}

#[test]
fn toggle_apostrophe_round_trips() {
    assert_eq!(toggle_apostrophe("its ok"), "it's ok");
    assert_eq!(toggle_apostrophe("it's ok"), "its ok");
    assert_eq!(toggle_apostrophe(&toggle_apostrophe("its ok")), "its ok");
    assert_eq!(toggle_apostrophe("ITS NOT"), "IT'S NOT");
    assert_eq!(toggle_apostrophe("Of It's"), "Of Its");
    assert_eq!(toggle_apostrophe("inside IT'S"), "inside ITS");
}

#[test]
fn all_lowercase_comment_is_suppressed() {
    let engine = engine();
    let p = pattern("its not");

    let quiet = Item::new("someone", "honestly its not that bad");
    assert!(engine.should_suppress(&quiet, p));
    assert_eq!(
        engine.policy().reason(&quiet, p),
        Some(SuppressReason::AllLowercase)
    );

    let mixed = Item::new("someone", "Honestly its not that bad");
    assert!(!engine.should_suppress(&mixed, p));
}

#[test]
fn quoted_line_is_suppressed() {
    let engine = engine();
    let p = pattern("for it's");
    let item = Item::new("someone", "> Do it for it's own sake.\nNo, Thanks.");
    assert_eq!(
        engine.policy().reason(&item, p),
        Some(SuppressReason::QuotedLine)
    );

    let unquoted = Item::new("someone", "Sure.\nDo it for it's own sake.");
    assert!(!engine.should_suppress(&unquoted, p));
}

#[test]
fn own_comments_are_suppressed() {
    let engine = engine();
    let item = Item::new("scalawag_bot", "I think you want \"its not\".");
    assert_eq!(
        engine.evaluate(&item),
        Verdict::Suppressed {
            pattern: pattern("its not"),
            reason: SuppressReason::OwnComment,
        }
    );
}

#[test]
fn quoted_match_falls_through_to_later_pattern() {
    let engine = engine();
    let item = Item::new("someone", "> Its not mine.\nDo it for it's own sake.");

    let verdict = engine.evaluate(&item);
    assert!(verdict.is_flag());
    assert_eq!(verdict.pattern().unwrap().phrase(), "for it's");

    let result = engine.build_reply(&item, verdict.pattern().unwrap()).unwrap();
    assert_eq!(result.snippet, "Do it **for it's** own sake.");
}

#[test]
fn every_match_vetoed_reports_the_first() {
    let engine = engine();
    let item = Item::new("someone", "> Its not mine.\n> Do it for it's own sake.");
    assert_eq!(
        engine.evaluate(&item),
        Verdict::Suppressed {
            pattern: pattern("its not"),
            reason: SuppressReason::QuotedLine,
        }
    );
}

#[test]
fn evaluate_reports_no_match_and_flag() {
    let engine = engine();
    assert_eq!(
        engine.evaluate(&Item::new("someone", "Nothing To See")),
        Verdict::NoMatch
    );

    let verdict = engine.evaluate(&Item::new("someone", "Its a trap!"));
    assert!(verdict.is_flag());
    assert_eq!(verdict.pattern().unwrap().phrase(), "its a");
}

#[test]
fn snippet_keeps_whole_short_line() {
    let text = "I think for it's own sake we should stop";
    let s = snippet(text, pattern("for it's"), true).unwrap();
    assert_eq!(s, "I think **for it's** own sake we should stop");
}

#[test]
fn snippet_adds_ellipses_when_cut() {
    let text = "one two three four five six seven I think for it's own sake we should stop right now";
    let s = snippet(text, pattern("for it's"), true).unwrap();
    assert_eq!(s, "...five six seven I think **for it's** own sake we should stop...");

    let plain = snippet(text, pattern("for it's"), false).unwrap();
    assert_eq!(plain, "...five six seven I think for it's own sake we should stop...");
}

#[test]
fn snippet_stays_on_the_matching_line() {
    let text = "First line here.\nWell ITS NOT fine\nLast line here.";
    let s = snippet(text, pattern("its not"), true).unwrap();
    assert_eq!(s, "Well **ITS NOT** fine");
    assert!(!s.contains('\n'));
}

#[test]
fn snippet_window_can_start_inside_punctuated_word() {
    // Context words are anchored on a word boundary, so a leading "(" on the
    // earliest kept word is cut off along with the words before it.
    let text = "one (hello b c d e for it's end";
    let s = snippet(text, pattern("for it's"), true).unwrap();
    assert_eq!(s, "...hello b c d e **for it's** end");
}

#[test]
fn snippet_without_match_is_an_error() {
    let err = snippet("Nothing here", pattern("its not"), true).unwrap_err();
    assert!(matches!(err, SnippetError::NoMatchingLine { ref phrase } if phrase == "its not"));
}

#[test]
fn build_reply_end_to_end() {
    let engine = engine();
    let item = Item::new("someone", "ITS NOT a big deal");
    let Verdict::Flag(p) = engine.evaluate(&item) else {
        panic!("expected a flag");
    };

    let result = engine.build_reply(&item, p).unwrap();
    assert_eq!(result.category, ErrorCategory::ForgottenApostrophe);
    assert_eq!(result.matched_phrase, "ITS NOT");
    assert_eq!(result.corrected_phrase, "IT'S NOT");
    assert_eq!(result.snippet, "**ITS NOT** a big deal");
}

#[test]
fn build_reply_rejects_absent_pattern() {
    let engine = engine();
    let item = Item::new("someone", "Its a trap!");
    assert!(matches!(
        engine.build_reply(&item, pattern("of it's")),
        Err(EngineError::PatternAbsent { .. })
    ));
}
