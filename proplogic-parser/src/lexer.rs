//! Tokenizer for propositional sentences.
use std::fmt;

use thiserror::Error;

/// Possible errors while tokenizing a sentence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("position {}: Unexpected character '{}'", position, unexpected)]
    UnexpectedCharacter { position: usize, unexpected: char },
    #[error("position {}: Unexpected end of input, expected '{}'", position, expected)]
    UnexpectedEnd { position: usize, expected: char },
    #[error("Attempt to rollback with no mark")]
    NoMark,
}

/// Kinds of tokens.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TokenKind {
    End,
    Biconditional,
    Implication,
    Not,
    Or,
    And,
    LeftParen,
    RightParen,
    True,
    False,
    Identifier,
}

/// Keywords and the tokens they produce.
const KEYWORDS: &[(&str, TokenKind)] = &[
    ("NOT", TokenKind::Not),
    ("AND", TokenKind::And),
    ("OR", TokenKind::Or),
    ("TRUE", TokenKind::True),
    ("FALSE", TokenKind::False),
];

/// A token together with the text it was read from.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Token {
        Token {
            kind,
            text: text.into(),
        }
    }

    /// The token marking the end of the input.
    pub fn end() -> Token {
        Token::new(TokenKind::End, "")
    }

    pub fn identifier(name: impl Into<String>) -> Token {
        Token::new(TokenKind::Identifier, name)
    }

    /// The keyword token for `text` or an identifier token if `text` is no keyword.
    pub fn word(text: &str) -> Token {
        let kind = KEYWORDS
            .iter()
            .find(|&&(keyword, _)| keyword == text)
            .map_or(TokenKind::Identifier, |&(_, kind)| kind);
        Token::new(kind, text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            TokenKind::End => f.write_str("end of input"),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

/// Splits a sentence into tokens.
///
/// A single position can be marked and returned to later, which provides the lookahead needed by
/// the parser.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    token_start: usize,
    mark: Option<usize>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Lexer<'a> {
        Lexer {
            input,
            position: 0,
            token_start: 0,
            mark: None,
        }
    }

    /// Byte offset at which the most recently returned token starts.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Remember the current position.
    pub fn mark(&mut self) {
        self.mark = Some(self.position);
    }

    /// Return to the last marked position.
    pub fn rollback(&mut self) -> Result<(), LexerError> {
        match self.mark {
            Some(mark) => {
                self.position = mark;
                Ok(())
            }
            None => Err(LexerError::NoMark),
        }
    }

    /// Reads the next token.
    ///
    /// Returns an end token once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Token, LexerError> {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump();
        }

        self.token_start = self.position;

        let c = match self.bump() {
            None => return Ok(Token::end()),
            Some(c) => c,
        };

        match c {
            '<' => {
                self.expect('=')?;
                self.expect('>')?;
                Ok(Token::new(TokenKind::Biconditional, "<=>"))
            }
            '=' => {
                self.expect('>')?;
                Ok(Token::new(TokenKind::Implication, "=>"))
            }
            '(' => Ok(Token::new(TokenKind::LeftParen, "(")),
            ')' => Ok(Token::new(TokenKind::RightParen, ")")),
            c if c.is_alphabetic() => {
                while let Some(c) = self.peek() {
                    if !c.is_alphanumeric() {
                        break;
                    }
                    self.bump();
                }
                Ok(Token::word(&self.input[self.token_start..self.position]))
            }
            unexpected => Err(LexerError::UnexpectedCharacter {
                position: self.token_start,
                unexpected,
            }),
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    fn expect(&mut self, expected: char) -> Result<(), LexerError> {
        let position = self.position;
        match self.bump() {
            Some(c) if c == expected => Ok(()),
            Some(unexpected) => Err(LexerError::UnexpectedCharacter {
                position,
                unexpected,
            }),
            None => Err(LexerError::UnexpectedEnd { position, expected }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Result<Vec<Token>, LexerError> {
        let mut lexer = Lexer::new(input);
        let mut tokens = vec![];
        loop {
            let token = lexer.next_token()?;
            let end = token.kind == TokenKind::End;
            tokens.push(token);
            if end {
                return Ok(tokens);
            }
        }
    }

    fn keyword(kind: TokenKind, text: &str) -> Token {
        Token::new(kind, text)
    }

    #[test]
    fn identifiers() {
        assert_eq!(
            tokens("Hello lexer").unwrap(),
            [
                Token::identifier("Hello"),
                Token::identifier("lexer"),
                Token::end()
            ]
        );
        assert_eq!(
            tokens("  P12\tB3x ").unwrap(),
            [
                Token::identifier("P12"),
                Token::identifier("B3x"),
                Token::end()
            ]
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(tokens("").unwrap(), [Token::end()]);
        assert_eq!(tokens(" \n ").unwrap(), [Token::end()]);
    }

    #[test]
    fn different_tokens() {
        assert_eq!(
            tokens("NOT TRUE AND FALSE <=> Me => (You OR They)").unwrap(),
            [
                keyword(TokenKind::Not, "NOT"),
                keyword(TokenKind::True, "TRUE"),
                keyword(TokenKind::And, "AND"),
                keyword(TokenKind::False, "FALSE"),
                keyword(TokenKind::Biconditional, "<=>"),
                Token::identifier("Me"),
                keyword(TokenKind::Implication, "=>"),
                keyword(TokenKind::LeftParen, "("),
                Token::identifier("You"),
                keyword(TokenKind::Or, "OR"),
                Token::identifier("They"),
                keyword(TokenKind::RightParen, ")"),
                Token::end(),
            ]
        );
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(
            tokens("and NOTA").unwrap(),
            [
                Token::identifier("and"),
                Token::identifier("NOTA"),
                Token::end()
            ]
        );
    }

    #[test]
    fn no_whitespace_needed_around_symbols() {
        assert_eq!(
            tokens("(A)=>B<=>C").unwrap(),
            [
                keyword(TokenKind::LeftParen, "("),
                Token::identifier("A"),
                keyword(TokenKind::RightParen, ")"),
                keyword(TokenKind::Implication, "=>"),
                Token::identifier("B"),
                keyword(TokenKind::Biconditional, "<=>"),
                Token::identifier("C"),
                Token::end(),
            ]
        );
    }

    #[test]
    fn marking() {
        let mut lexer = Lexer::new("Hello AND lexer");
        assert_eq!(lexer.next_token(), Ok(Token::identifier("Hello")));
        lexer.mark();

        assert_eq!(lexer.next_token(), Ok(keyword(TokenKind::And, "AND")));
        assert_eq!(lexer.next_token(), Ok(Token::identifier("lexer")));

        lexer.rollback().unwrap();
        assert_eq!(lexer.next_token(), Ok(keyword(TokenKind::And, "AND")));
        assert_eq!(lexer.next_token(), Ok(Token::identifier("lexer")));
        assert_eq!(lexer.next_token(), Ok(Token::end()));
    }

    #[test]
    fn rollback_without_mark() {
        let mut lexer = Lexer::new("A");
        assert_eq!(lexer.rollback(), Err(LexerError::NoMark));
    }

    #[test]
    fn lexical_errors() {
        assert_eq!(
            tokens("A & B"),
            Err(LexerError::UnexpectedCharacter {
                position: 2,
                unexpected: '&'
            })
        );
        assert_eq!(
            tokens("A <-> B"),
            Err(LexerError::UnexpectedCharacter {
                position: 3,
                unexpected: '-'
            })
        );
        assert_eq!(
            tokens("A =< B"),
            Err(LexerError::UnexpectedCharacter {
                position: 3,
                unexpected: '<'
            })
        );
        assert_eq!(
            tokens("A <="),
            Err(LexerError::UnexpectedEnd {
                position: 4,
                expected: '>'
            })
        );
        assert_eq!(
            tokens("1A"),
            Err(LexerError::UnexpectedCharacter {
                position: 0,
                unexpected: '1'
            })
        );
    }

    #[test]
    fn token_display() {
        assert_eq!(Token::end().to_string(), "end of input");
        assert_eq!(Token::word("AND").to_string(), "'AND'");
    }
}
