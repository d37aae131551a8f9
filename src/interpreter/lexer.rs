use logos::Logos;

/// The operator vocabulary used by [`crate::expression::Expression`].
///
/// Longer operators come before the shorter ones they share a prefix with, so
/// `<<` is never split into two `<` tokens.
pub const DEFAULT_OPERATORS: &str = "<< >> * / + - ( ) , < > ? :";

/// Whitespace segmentation of the raw source.
///
/// Whitespace is never a token; every other maximal run of characters is a
/// [`Segment::Word`] that still has to be split against the operator
/// vocabulary.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Segment {
    /// A run of non-whitespace characters.
    #[regex(r"[^ \t\r\n\x0B\x0C]+", allow_greedy = true)]
    Word,
    /// Spaces, tabs, line breaks, vertical tabs and form feeds.
    #[regex(r"[ \t\r\n\x0B\x0C]+", logos::skip)]
    Whitespace,
}

/// Returns the whitespace-separated words of `input`, in order.
///
/// # Example
/// ```
/// use expsolver::interpreter::lexer::words;
///
/// assert_eq!(words("  << >>\t*  "), vec!["<<", ">>", "*"]);
/// assert!(words("   ").is_empty());
/// ```
#[must_use]
pub fn words(input: &str) -> Vec<&str> {
    let mut lexer = Segment::lexer(input);
    let mut words = Vec::new();
    while let Some(segment) = lexer.next() {
        if let Ok(Segment::Word) = segment {
            words.push(lexer.slice());
        }
    }
    words
}

/// An eagerly tokenized source text with a cursor.
///
/// The token sequence is produced once, at construction, and never changes.
/// The cursor moves by at most one position per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    tokens:    Vec<String>,
    operators: Vec<String>,
    cursor:    usize,
}

impl Tokenizer {
    /// Tokenizes `input` against a whitespace-separated operator vocabulary.
    ///
    /// Operators are tried in declaration order and the first literal prefix
    /// match wins, so a longer operator must be declared before a shorter one
    /// sharing its prefix. A vocabulary of `" "` declares no operators.
    ///
    /// # Example
    /// ```
    /// use expsolver::interpreter::lexer::{DEFAULT_OPERATORS, Tokenizer};
    ///
    /// let tokenizer = Tokenizer::new("4<<2", DEFAULT_OPERATORS);
    /// assert_eq!(tokenizer.tokens(), ["4", "<<", "2"]);
    /// ```
    #[must_use]
    pub fn new(input: &str, operators: &str) -> Self {
        let operators: Vec<String> = words(operators).into_iter().map(str::to_owned).collect();
        let mut tokens = Vec::new();
        for word in words(input) {
            split_word(word, &operators, &mut tokens);
        }
        tracing::trace!(tokens = tokens.len(), "tokenized input");
        Self { tokens,
               operators,
               cursor: 0 }
    }

    /// Tokenizes `input` using whitespace as the only separator.
    #[must_use]
    pub fn whitespace(input: &str) -> Self {
        Self::new(input, " ")
    }

    /// Returns `true` while the cursor has not passed the last token.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.cursor < self.tokens.len()
    }

    /// Returns the token under the cursor without advancing.
    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.tokens.get(self.cursor).map(String::as_str)
    }

    /// Returns the token under the cursor and advances past it.
    ///
    /// At the end of input this returns `None` and leaves the cursor alone.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&str> {
        let token = self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(token.as_str())
    }

    /// Moves the cursor back by one and returns the token now under it.
    ///
    /// Returns `None` when the cursor is already at the start.
    pub fn previous(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.tokens.get(self.cursor).map(String::as_str)
    }

    /// The cursor index, i.e. the position of the token `peek` would return.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Number of tokens.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` when the input produced no tokens.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The full token sequence.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The operator vocabulary, in declaration order.
    #[must_use]
    pub fn operators(&self) -> &[String] {
        &self.operators
    }

    /// Returns the zero-based position of `value` among the
    /// whitespace-separated `candidates`, or `None`.
    ///
    /// # Example
    /// ```
    /// use expsolver::interpreter::lexer::Tokenizer;
    ///
    /// assert_eq!(Tokenizer::classify(">>", "<< >>"), Some(1));
    /// assert_eq!(Tokenizer::classify("<", "<< >>"), None);
    /// ```
    #[must_use]
    pub fn classify(value: &str, candidates: &str) -> Option<usize> {
        words(candidates).into_iter().position(|candidate| candidate == value)
    }
}

/// Returns the first operator that is a literal prefix of `input`.
fn match_operator<'o>(input: &str, operators: &'o [String]) -> Option<&'o str> {
    operators.iter()
             .map(String::as_str)
             .find(|operator| input.starts_with(operator))
}

/// Splits one whitespace-free word into operator and non-operator tokens.
///
/// A non-operator token runs until the end of the word or until an operator
/// match starts.
fn split_word(word: &str, operators: &[String], tokens: &mut Vec<String>) {
    let mut rest = word;
    while !rest.is_empty() {
        if let Some(operator) = match_operator(rest, operators) {
            tokens.push(operator.to_owned());
            rest = &rest[operator.len()..];
            continue;
        }
        let end = rest.char_indices()
                      .skip(1)
                      .map(|(i, _)| i)
                      .find(|&i| match_operator(&rest[i..], operators).is_some())
                      .unwrap_or(rest.len());
        tokens.push(rest[..end].to_owned());
        rest = &rest[end..];
    }
}
