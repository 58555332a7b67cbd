use crate::error::{LispError, TRAILING_TOKENS, UNEXPECTED_CPAREN, UNEXPECTED_EOF};
use crate::expr::LispExpr;
use lexers::{SExprTokenizer, Scanner};
use std::str::FromStr;

pub struct Parser;

impl Parser {
    /// Read exactly one expression out of `source`.
    pub fn parse_str(source: &str) -> Result<LispExpr, LispError> {
        let mut tokens = SExprTokenizer::scanner(source);
        let expr = Self::read(&mut tokens)?;
        if !tokens.exhausted() {
            return Err(LispError::syntax(TRAILING_TOKENS));
        }
        Ok(expr)
    }

    /// Read the next expression off a token stream, leaving the scanner
    /// right after it.
    pub fn read<I>(tokens: &mut Scanner<I>) -> Result<LispExpr, LispError>
    where I: Iterator<Item=String> {
        let token = tokens.next().ok_or_else(|| LispError::syntax(UNEXPECTED_EOF))?;
        match &token[..] {
            "(" => {
                let close = format!(")");
                let mut list = Vec::new();
                while tokens.accept(&close).is_none() { // EOF is reported by read
                    list.push(Self::read(tokens)?);
                }
                Ok(LispExpr::List(list))
            },
            ")" => Err(LispError::syntax(UNEXPECTED_CPAREN)),
            _ => Ok(Self::atom(token)),
        }
    }

    /// Integers become integers, then floats, every other token is a symbol.
    pub fn atom(token: String) -> LispExpr {
        if let Ok(n) = i64::from_str(&token) {
            LispExpr::Integer(n)
        } else if let Ok(n) = f64::from_str(&token) {
            LispExpr::Float(n)
        } else {
            LispExpr::Symbol(token)
        }
    }
}
