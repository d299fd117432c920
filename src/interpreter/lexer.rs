use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5`, `42` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// `let`
    #[token("let")]
    Let,
    /// `const`
    #[token("const")]
    Const,
    /// Identifier tokens; variable, constant, function or command names.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Line breaks separate statements.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Token::NewLine
    })]
    NewLine,
    /// Spaces, tabs, feeds and carriage returns.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Whether the token ends a statement.
    #[must_use]
    pub const fn is_terminator(&self) -> bool {
        matches!(self, Self::NewLine | Self::Semicolon)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Let => write!(f, "let"),
            Self::Const => write!(f, "const"),
            Self::Comment => write!(f, "comment"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Equals => write!(f, "="),
            Self::Comma => write!(f, ","),
            Self::Semicolon => write!(f, ";"),
            Self::NewLine => write!(f, "end of line"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a numeric literal from the current token slice.
///
/// Returns `None` when the slice does not denote a finite `f64` (for example
/// `1e999`), which the lexer reports as an error token.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Splits source text into `(token, line)` pairs.
///
/// Lines are counted from 1. Any character sequence the lexer does not
/// recognize is reported as [`ParseError::UnexpectedToken`], and a numeric
/// literal that overflows `f64` as [`ParseError::InvalidLiteral`].
///
/// ## Example
/// ```
/// use numscript::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 2\ny").unwrap();
/// assert_eq!(tokens[2], (Token::Number(2.0), 1));
/// assert_eq!(tokens[4], (Token::Identifier("y".to_string()), 2));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        match token {
            // A newline token is attributed to the line it terminates.
            Ok(Token::NewLine) => tokens.push((Token::NewLine, line - 1)),
            Ok(tok) => tokens.push((tok, line)),
            Err(()) => {
                let slice = lexer.slice();
                if slice.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
                    return Err(ParseError::InvalidLiteral { text: slice.to_string(),
                                                            line });
                }
                return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                         line });
            },
        }
    }

    Ok(tokens)
}
