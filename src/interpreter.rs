/// The evaluator module walks a tree and computes its value.
///
/// The evaluator performs arithmetic, shift and comparison operations, picks
/// conditional branches and hands variables and calls to the registered
/// resolvers.
///
/// # Responsibilities
/// - Evaluates every node variant.
/// - Evaluates call arguments left to right before invoking the resolver.
/// - Never evaluates the unselected branch of a conditional.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// Whitespace segmentation is done by a `logos` lexer; each segment is then
/// split against a runtime operator vocabulary. The resulting tokens are held
/// by a [`lexer::Tokenizer`] with a cursor supporting lookahead and pushback.
///
/// # Responsibilities
/// - Splits the source into tokens, longest declared operator first.
/// - Provides `peek`, `next` and `previous` over the token sequence.
/// - Answers "is this symbol one of these" questions via `classify`.
pub mod lexer;
/// Decodes numeric literal tokens.
///
/// Handles the decimal, hexadecimal (`$`, `x`) and binary (`%`) forms.
pub mod literal;
/// The parser module builds the tree from tokens.
///
/// A recursive-descent parser with one function per precedence level, from
/// conditionals (loosest) down to primaries (tightest).
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Expr`] nodes with the correct
///   precedence and associativity.
/// - Reports structural errors together with the token position.
pub mod parser;
/// Resolver capabilities supplied by the caller.
///
/// Defines the narrow interfaces through which variables are looked up and
/// functions are invoked.
pub mod resolver;
