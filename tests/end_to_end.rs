//! Concrete end-to-end scenarios against the public façades.

mod common;

use lowmem_ac::{Options, StringMatcher, ValueMatcher};

fn string_matches(m: &StringMatcher, input: &str) -> Vec<(usize, usize, String)> {
    m.parse(input)
        .unwrap()
        .map(|sm| (sm.start, sm.end, sm.text.to_string()))
        .collect()
}

#[test]
fn bobcat_cat_at_nested_in_sentence() {
    let mut m = StringMatcher::new(Options::new());
    m.add_all(["bobcat", "cat", "at"]).unwrap();
    m.build().unwrap();
    let found = string_matches(&m, "I have a bobcat");
    assert_eq!(
        found,
        vec![
            (9, 15, "bobcat".to_string()),
            (12, 15, "cat".to_string()),
            (13, 15, "at".to_string()),
        ]
    );
}

#[test]
fn cat_at_catapult_tap_a_t_on_catapult() {
    let mut m = StringMatcher::new(Options::new());
    m.add_all(["cat", "at", "catapult", "tap", "a", "t"]).unwrap();
    m.build().unwrap();
    let found = string_matches(&m, "catapult");
    let triples: Vec<(usize, usize, &str)> = found.iter().map(|(s, e, t)| (*s, *e, t.as_str())).collect();
    assert!(triples.contains(&(0, 3, "cat")));
    assert!(triples.contains(&(1, 3, "at")));
    assert!(triples.contains(&(0, 8, "catapult")));
    assert!(triples.contains(&(2, 5, "tap")));
    assert!(triples.contains(&(1, 2, "a")));
    assert!(triples.contains(&(2, 3, "t")));
    assert!(triples.contains(&(7, 8, "t")));
}

#[test]
fn baby_byte_overlap_on_babyte() {
    let mut m = StringMatcher::new(Options::new());
    m.add_all(["baby", "byte"]).unwrap();
    m.build().unwrap();
    assert_eq!(
        string_matches(&m, "babyte"),
        vec![(0, 4, "baby".to_string()), (2, 6, "byte".to_string())]
    );
}

#[test]
fn case_sensitive_default_matches_only_exact_casing() {
    let mut m = StringMatcher::new(Options::new());
    m.add_all(["cAt", "CaT"]).unwrap();
    m.build().unwrap();
    let input = "CAT CaT CAt Cat cAT caT cAt cat";
    let found = string_matches(&m, input);
    let texts: Vec<&str> = found.iter().map(|(_, _, t)| t.as_str()).collect();
    assert!(texts.iter().all(|&t| t == "CaT" || t == "cAt"));
    assert_eq!(texts.iter().filter(|&&t| t == "CaT").count(), 1);
    assert_eq!(texts.iter().filter(|&&t| t == "cAt").count(), 1);
}

#[test]
fn whole_words_only_across_varied_whitespace() {
    let mut m = StringMatcher::new(Options::new().whole_words_only(true));
    m.add_all(["Expected", "Double Expected", "Exp"]).unwrap();
    m.build().unwrap();
    let input = "Double Expected\tnotExpected notDouble\rExpected Expected\nExpectedNot Exp";
    let found = string_matches(&m, input);
    let mut starts: Vec<usize> = found.iter().map(|(s, _, _)| *s).collect();
    starts.sort_unstable();
    starts.dedup();
    assert_eq!(starts, vec![0, 7, 38, 47, 68]);
}

#[test]
fn generic_facade_np_ty_abbreviation_expansion() {
    let mut m = ValueMatcher::new(Options::new());
    m.add("np", "no problem").unwrap();
    m.add("ty", "thank you").unwrap();
    m.build().unwrap();
    let found: Vec<&str> = m.parse("It was np, ty though.").unwrap().map(|vm| *vm.value).collect();
    assert_eq!(found, vec!["no problem", "thank you"]);
}

#[test]
fn empty_automaton_parses_to_nothing() {
    let mut m = StringMatcher::new(Options::new());
    m.build().unwrap();
    assert!(string_matches(&m, "any text").is_empty());
}

#[test]
fn multibyte_keys_are_matched_correctly() {
    let mut m = StringMatcher::new(Options::new());
    m.add_all(["caf\u{e9}", "\u{1F600}"]).unwrap();
    m.build().unwrap();
    let found = string_matches(&m, "the caf\u{e9} served \u{1F600} today");
    let texts: Vec<&str> = found.iter().map(|(_, _, t)| t.as_str()).collect();
    assert!(texts.contains(&"caf\u{e9}"));
    assert!(texts.contains(&"\u{1F600}"));
}

#[test]
fn cab_then_aa_builds_without_error() {
    common::init_tracing();
    let mut m = StringMatcher::new(Options::new());
    m.add("cab").unwrap();
    m.add("aa").unwrap();
    m.build().unwrap();
    assert!(m.contains("cab"));
    assert!(m.contains("aa"));
}

#[test]
fn replace_after_build_is_rejected() {
    let mut m = ValueMatcher::new(Options::new());
    m.add("cat", 1).unwrap();
    m.build().unwrap();
    assert!(m.replace("cat", 2, true).is_err());
}
