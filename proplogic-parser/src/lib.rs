//! Parser for propositional sentences.
//!
//! The surface syntax has identifiers (a letter followed by letters or digits), the constants
//! `TRUE` and `FALSE`, the connectives `NOT`, `AND`, `OR`, `=>` and `<=>`, and parentheses for
//! grouping:
//!
//! ```text
//! Sentence := '(' Sentence ')' | NOT Sentence | TRUE | FALSE | Identifier
//!             [ (AND | OR | '=>' | '<=>') Sentence ]
//! ```
//!
//! The binary connectives have no precedence. A chain of binary connectives nests to the right, so
//! `A AND B OR C` is read as `A AND (B OR C)`, and `NOT` applies to the complete sentence
//! following it, so `NOT A AND B` is read as `NOT (A AND B)`. Use parentheses to get anything
//! else.
//!
//! Parsing recurses once per nesting level and once per connective of a chain, so extremely long
//! chains or deeply nested parentheses can exhaust the stack.

use thiserror::Error;

use proplogic_formula::Expr;

pub mod lexer;

pub use lexer::{Lexer, LexerError, Token, TokenKind};

/// Possible errors while parsing a sentence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error(transparent)]
    Lexer(#[from] LexerError),
    #[error("position {}: Unexpected {}, expected {}", position, found, expected)]
    UnexpectedToken {
        position: usize,
        found: Token,
        expected: &'static str,
    },
}

/// Parses a complete sentence.
///
/// The whole input has to be consumed by the sentence.
pub fn parse(input: &str) -> Result<Expr, ParserError> {
    Parser::new(input).parse()
}

/// Recursive-descent parser for propositional sentences.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Parser<'a> {
        Parser {
            lexer: Lexer::new(input),
        }
    }

    /// Parse a sentence followed by the end of the input.
    pub fn parse(mut self) -> Result<Expr, ParserError> {
        let sentence = self.sentence()?;
        self.expect(TokenKind::End, "end of input")?;
        Ok(sentence)
    }

    /// Parse a single sentence, leaving any following input unread.
    pub fn sentence(&mut self) -> Result<Expr, ParserError> {
        let token = self.lexer.next_token()?;

        let left = match token.kind {
            TokenKind::LeftParen => {
                let inner = self.sentence()?;
                self.expect(TokenKind::RightParen, "')'")?;
                inner
            }
            TokenKind::Not => Expr::negation(self.sentence()?),
            TokenKind::True => Expr::True,
            TokenKind::False => Expr::False,
            TokenKind::Identifier => Expr::var(token.text),
            _ => return Err(self.unexpected(token, "a sentence")),
        };

        self.lexer.mark();

        let connective: fn(Expr, Expr) -> Expr = match self.lexer.next_token()?.kind {
            TokenKind::And => Expr::and,
            TokenKind::Or => Expr::or,
            TokenKind::Implication => Expr::implies,
            TokenKind::Biconditional => Expr::iff,
            _ => {
                self.lexer.rollback()?;
                return Ok(left);
            }
        };

        let right = self.sentence()?;
        Ok(connective(left, right))
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<(), ParserError> {
        let token = self.lexer.next_token()?;
        if token.kind == kind {
            Ok(())
        } else {
            Err(self.unexpected(token, expected))
        }
    }

    fn unexpected(&self, found: Token, expected: &'static str) -> ParserError {
        ParserError::UnexpectedToken {
            position: self.lexer.token_start(),
            found,
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    use proplogic_formula::expr::strategy::expr;

    fn v(name: &str) -> Expr {
        Expr::var(name)
    }

    macro_rules! expect_error {
        ( $input:expr, $( $cases:tt )* ) => {
            match parse($input) {
                Ok(parsed) => panic!("Expected error but got {:?}", parsed),
                Err(err) => match err {
                    $( $cases )*,
                    _ => panic!("Unexpected error {:?}", err),
                },
            }
        };
    }

    #[test]
    fn atoms() -> Result<(), ParserError> {
        assert_eq!(parse("A")?, v("A"));
        assert_eq!(parse("TRUE")?, Expr::True);
        assert_eq!(parse(" FALSE ")?, Expr::False);
        assert_eq!(parse("(((P11)))")?, v("P11"));
        Ok(())
    }

    #[test]
    fn connectives() -> Result<(), ParserError> {
        assert_eq!(parse("A AND B")?, v("A") & v("B"));
        assert_eq!(parse("A OR B")?, v("A") | v("B"));
        assert_eq!(parse("A => B")?, Expr::implies(v("A"), v("B")));
        assert_eq!(parse("A <=> B")?, Expr::iff(v("A"), v("B")));
        assert_eq!(parse("NOT A")?, !v("A"));
        Ok(())
    }

    #[test]
    fn chains_nest_to_the_right() -> Result<(), ParserError> {
        assert_eq!(parse("A AND B OR C")?, v("A") & (v("B") | v("C")));
        assert_eq!(parse("(A AND B) OR C")?, (v("A") & v("B")) | v("C"));
        assert_eq!(
            parse("A => B <=> C")?,
            Expr::implies(v("A"), Expr::iff(v("B"), v("C")))
        );
        Ok(())
    }

    #[test]
    fn negation_scope() -> Result<(), ParserError> {
        assert_eq!(parse("NOT A AND B")?, !(v("A") & v("B")));
        assert_eq!(parse("(NOT A) AND B")?, !v("A") & v("B"));
        assert_eq!(parse("NOT NOT A")?, !!v("A"));
        Ok(())
    }

    #[test]
    fn wumpus_sentence() -> Result<(), ParserError> {
        assert_eq!(
            parse("(B21 <=> ((P11 OR P22) OR P31))")?,
            Expr::iff(v("B21"), (v("P11") | v("P22")) | v("P31"))
        );
        Ok(())
    }

    #[test]
    fn syntax_errors() {
        expect_error!("", ParserError::UnexpectedToken { position: 0, .. } => ());
        expect_error!("A AND", ParserError::UnexpectedToken { position: 5, .. } => ());
        expect_error!("(A OR B", ParserError::UnexpectedToken { position: 7, .. } => ());
        expect_error!("A OR B)", ParserError::UnexpectedToken { position: 6, .. } => ());
        expect_error!("A B", ParserError::UnexpectedToken { position: 2, .. } => ());
        expect_error!("AND B", ParserError::UnexpectedToken { position: 0, .. } => ());
        expect_error!("NOT", ParserError::UnexpectedToken { position: 3, .. } => ());
        expect_error!("()", ParserError::UnexpectedToken { position: 1, .. } => ());
    }

    #[test]
    fn unexpected_token_is_reported() {
        assert_eq!(
            parse("A OR OR B"),
            Err(ParserError::UnexpectedToken {
                position: 5,
                found: Token::word("OR"),
                expected: "a sentence",
            })
        );
        assert_eq!(
            parse("A OR OR B").unwrap_err().to_string(),
            "position 5: Unexpected 'OR', expected a sentence"
        );
    }

    #[test]
    fn lexical_errors() {
        expect_error!(
            "A AND ?",
            ParserError::Lexer(LexerError::UnexpectedCharacter { unexpected: '?', .. }) => ()
        );
        expect_error!(
            "A =",
            ParserError::Lexer(LexerError::UnexpectedEnd { expected: '>', .. }) => ()
        );
    }

    proptest! {
        #[test]
        fn roundtrip(sentence in expr(6, 6)) {
            let parsed = parse(&sentence.to_string());
            prop_assert_eq!(parsed, Ok(sentence));
        }
    }
}
