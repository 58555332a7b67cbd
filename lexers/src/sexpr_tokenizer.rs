#![deny(warnings)]

use crate::scanner::Scanner;
use std::str::Chars;

static PARENS: &[char] = &['(', ')'];
static BREAKS: &[char] = &['(', ')', ' ', '\n', '\r', '\t'];

/// Splits s-expression source into string tokens. Each paren is a token of
/// its own, everything else is a maximal run of non-blank, non-paren chars.
/// There are no lexical errors, unbalanced input is the reader's problem.
pub struct SExprTokenizer<I: Iterator<Item=char>>(Scanner<I>);

impl<'a> SExprTokenizer<Chars<'a>> {
    pub fn new(source: &'a str) -> Self {
        SExprTokenizer(Scanner::from_str(source))
    }

    pub fn scanner(source: &'a str) -> Scanner<Self> {
        Scanner::new(Self::new(source))
    }
}

impl<I: Iterator<Item=char>> Iterator for SExprTokenizer<I> {
    type Item = String;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.skip_whitespace();
        if self.0.accept_any(PARENS).is_some() || self.0.until_any(BREAKS) {
            Some(self.0.extract_string())
        } else {
            None
        }
    }
}

pub fn tokenize(source: &str) -> Vec<String> {
    SExprTokenizer::new(source).collect()
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{tokenize, SExprTokenizer};

    #[test]
    fn test_sexpr_tokenizer() {
        assert_eq!(tokenize("(+ 1 2)"), vec!["(", "+", "1", "2", ")"]);
        assert_eq!(tokenize("(begin (define r 10) (* pi (* r r)))"),
                   vec!["(", "begin", "(", "define", "r", "10", ")",
                        "(", "*", "pi", "(", "*", "r", "r", ")", ")", ")"]);
    }

    #[test]
    fn test_blank_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\r\n  ").is_empty());
    }

    #[test]
    fn test_parens_glued_to_atoms() {
        assert_eq!(tokenize("((f)x)(y"), vec!["(", "(", "f", ")", "x", ")", "(", "y"]);
        assert_eq!(tokenize(")("), vec![")", "("]);
        assert_eq!(tokenize("\n  (>=  2.5\t-3)\r\n"), vec!["(", ">=", "2.5", "-3", ")"]);
    }

    #[test]
    fn test_unicode_symbols() {
        assert_eq!(tokenize("(* π 𝑒)"), vec!["(", "*", "π", "𝑒", ")"]);
    }

    #[test]
    fn test_token_scanner_lookahead() {
        let mut lx = SExprTokenizer::scanner("(quote x)");
        assert_eq!(lx.peek(), Some(format!("(")));
        assert_eq!(lx.next(), Some(format!("(")));
        assert_eq!(lx.accept(&format!("quote")), Some(format!("quote")));
        assert_eq!(lx.accept(&format!(")")), None);
        assert_eq!(lx.next(), Some(format!("x")));
        assert_eq!(lx.next(), Some(format!(")")));
        assert!(lx.exhausted());
    }
}
