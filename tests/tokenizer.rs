use expsolver::interpreter::lexer::{DEFAULT_OPERATORS, Tokenizer, words};
use proptest::prelude::*;

fn tokens_of(source: &str, operators: &str) -> Vec<String> {
    Tokenizer::new(source, operators).tokens().to_vec()
}

#[test]
fn multi_character_operators_are_never_split() {
    assert_eq!(tokens_of("4<<2", DEFAULT_OPERATORS), ["4", "<<", "2"]);
    assert_eq!(tokens_of("8>>1", DEFAULT_OPERATORS), ["8", ">>", "1"]);
    assert_eq!(tokens_of("4<2", DEFAULT_OPERATORS), ["4", "<", "2"]);
}

#[test]
fn declaration_order_decides_overlapping_operators() {
    assert_eq!(tokens_of("4<<2", "< <<"), ["4", "<", "<", "2"]);
}

#[test]
fn single_character_operators() {
    assert_eq!(tokens_of("4+2", "* / + - ( ) , < > ? :"), ["4", "+", "2"]);
    assert_eq!(tokens_of("inc(2+1, 2)", DEFAULT_OPERATORS),
               ["inc", "(", "2", "+", "1", ",", "2", ")"]);
    assert_eq!(tokens_of("4<1?4*2+1:3", DEFAULT_OPERATORS),
               ["4", "<", "1", "?", "4", "*", "2", "+", "1", ":", "3"]);
}

#[test]
fn whitespace_separates_but_is_never_a_token() {
    assert_eq!(tokens_of("  t +\t1\n inc (1) ", DEFAULT_OPERATORS),
               ["t", "+", "1", "inc", "(", "1", ")"]);
    assert_eq!(tokens_of("ab cd", DEFAULT_OPERATORS), ["ab", "cd"]);
}

#[test]
fn prefixed_literals_stay_whole() {
    assert_eq!(tokens_of("$ff>>4", DEFAULT_OPERATORS), ["$ff", ">>", "4"]);
    assert_eq!(tokens_of("%101*x1A", DEFAULT_OPERATORS), ["%101", "*", "x1A"]);
    assert_eq!(tokens_of("3.25/2", DEFAULT_OPERATORS), ["3.25", "/", "2"]);
}

#[test]
fn non_ascii_text_is_kept_intact() {
    assert_eq!(tokens_of("π*2", DEFAULT_OPERATORS), ["π", "*", "2"]);
}

#[test]
fn empty_input_yields_no_tokens() {
    for source in ["", "   ", "\t\n"] {
        let tokenizer = Tokenizer::new(source, DEFAULT_OPERATORS);
        assert!(tokenizer.is_empty());
        assert!(!tokenizer.has_more());
        assert_eq!(tokenizer.peek(), None);
    }
}

#[test]
fn whitespace_only_vocabulary_declares_no_operators() {
    let tokenizer = Tokenizer::new("4<<2 + 1", " ");
    assert!(tokenizer.operators().is_empty());
    assert_eq!(tokenizer.tokens(), ["4<<2", "+", "1"]);

    let tokenizer = Tokenizer::whitespace("a b\tc\n");
    assert_eq!(tokenizer.tokens(), ["a", "b", "c"]);
}

#[test]
fn whitespace_tokenizer_keeps_operators_inside_words() {
    let mut tokenizer = Tokenizer::whitespace("4<<2 x");
    assert_eq!(tokenizer.tokens(), ["4<<2", "x"]);
    assert!(tokenizer.operators().is_empty());
    assert_eq!(tokenizer.next(), Some("4<<2"));
    assert_eq!(tokenizer.next(), Some("x"));
    assert!(!tokenizer.has_more());
}

#[test]
fn peek_does_not_advance() {
    let mut tokenizer = Tokenizer::new("4<<2", DEFAULT_OPERATORS);
    assert_eq!(tokenizer.next(), Some("4"));
    assert_eq!(tokenizer.peek(), Some("<<"));
    assert_eq!(tokenizer.peek(), Some("<<"));
    assert_eq!(tokenizer.position(), 1);
}

#[test]
fn next_walks_to_the_end_and_stops() {
    let mut tokenizer = Tokenizer::new("1 + 2", DEFAULT_OPERATORS);
    assert_eq!(tokenizer.len(), 3);
    assert_eq!(tokenizer.next(), Some("1"));
    assert_eq!(tokenizer.next(), Some("+"));
    assert!(tokenizer.has_more());
    assert_eq!(tokenizer.next(), Some("2"));
    assert!(!tokenizer.has_more());
    assert_eq!(tokenizer.next(), None);
    assert_eq!(tokenizer.peek(), None);
    assert_eq!(tokenizer.position(), 3);
}

#[test]
fn previous_pushes_back_one_token() {
    let mut tokenizer = Tokenizer::new("1 + 2", DEFAULT_OPERATORS);
    assert_eq!(tokenizer.previous(), None);
    assert_eq!(tokenizer.position(), 0);

    tokenizer.next();
    tokenizer.next();
    assert_eq!(tokenizer.previous(), Some("+"));
    assert_eq!(tokenizer.position(), 1);
    assert_eq!(tokenizer.next(), Some("+"));

    assert_eq!(tokenizer.previous(), Some("+"));
    assert_eq!(tokenizer.previous(), Some("1"));
    assert_eq!(tokenizer.previous(), None);
    assert_eq!(tokenizer.peek(), Some("1"));
}

#[test]
fn classify_finds_the_position_among_candidates() {
    assert_eq!(Tokenizer::classify("<<", "<< >>"), Some(0));
    assert_eq!(Tokenizer::classify(">>", "<< >>"), Some(1));
    assert_eq!(Tokenizer::classify("/", "<< >> + - * /"), Some(5));
    assert_eq!(Tokenizer::classify("<", "<< >>"), None);
    assert_eq!(Tokenizer::classify("", "a b"), None);
    assert_eq!(Tokenizer::classify("a", ""), None);
}

#[test]
fn words_split_on_every_whitespace_kind() {
    assert_eq!(words("a\x0Bb\x0Cc\r\nd"), ["a", "b", "c", "d"]);
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0B' | '\x0C')
}

proptest! {
    #[test]
    fn tokens_cover_every_non_whitespace_character(source in "[ -~\t\n]{0,48}") {
        let tokenizer = Tokenizer::new(&source, DEFAULT_OPERATORS);
        let joined: String = tokenizer.tokens().concat();
        let expected: String = source.chars().filter(|c| !is_separator(*c)).collect();
        prop_assert_eq!(joined, expected);
    }

    #[test]
    fn tokens_are_never_empty_or_contain_whitespace(source in "[ -~\t\n]{0,48}") {
        let tokenizer = Tokenizer::new(&source, DEFAULT_OPERATORS);
        for token in tokenizer.tokens() {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.chars().any(is_separator));
        }
    }
}
