use crate::builtin::standard_env;
use crate::env::Env;
use crate::error::LispError;
use crate::eval::eval;
use crate::expr::{stringify, LispExpr};
use crate::parser::Parser;
use std::rc::Rc;

/// A persistent session: definitions made by one line are visible to the
/// next. Two interpreters never share globals.
pub struct Interpreter {
    global: Rc<Env>,
}

impl Default for Interpreter {
    fn default() -> Self { Self::new() }
}

impl Interpreter {
    pub fn new() -> Interpreter {
        Interpreter{global: standard_env()}
    }

    pub fn global_env(&self) -> &Rc<Env> { &self.global }

    pub fn eval_str(&self, source: &str) -> Result<Option<LispExpr>, LispError> {
        let expr = Parser::parse_str(source)?;
        eval(&expr, &self.global)
    }

    /// Parse, evaluate and print one line. `Ok(None)` for forms with no
    /// result, like `define`.
    pub fn interpret(&self, line: &str) -> Result<Option<String>, LispError> {
        Ok(self.eval_str(line)?.as_ref().map(stringify))
    }

    /// Interpret `source` one line at a time, skipping blank lines. A failing
    /// line doesn't stop the ones after it.
    pub fn run_script<'a>(&'a self, source: &'a str)
        -> impl Iterator<Item=Result<Option<String>, LispError>> + 'a
    {
        source.lines()
            .filter(|line| !line.trim().is_empty())
            .map(move |line| self.interpret(line))
    }
}

#[cfg(test)]
mod tests {
    use super::Interpreter;
    use crate::error::LispError;

    #[test]
    fn test_session_keeps_definitions() {
        let lisp = Interpreter::new();
        assert_eq!(lisp.interpret("(define r 10)"), Ok(None));
        assert_eq!(lisp.interpret("(* r r)"), Ok(Some(format!("100"))));
        assert_eq!(lisp.interpret("r"), Ok(Some(format!("10"))));
    }

    #[test]
    fn test_sessions_are_isolated() {
        let a = Interpreter::new();
        let b = Interpreter::new();
        a.interpret("(define x 1)").unwrap();
        assert_eq!(b.interpret("x"), Ok(Some(format!("x"))));
        a.interpret("(define + 7)").unwrap();
        assert_eq!(b.interpret("(+ 1 2)"), Ok(Some(format!("3"))));
    }

    #[test]
    fn test_run_script() {
        let lisp = Interpreter::new();
        let script = "(define sq (lambda (x) (* x x)))\n\n   \n(sq 12)\n(car 1)\n(sq 1.5)\n";
        let out: Vec<_> = lisp.run_script(script).collect();
        assert_eq!(out, vec![
            Ok(None),
            Ok(Some(format!("144"))),
            Err(LispError::SyntaxError(format!("invalid procedure input"))),
            Ok(Some(format!("2.25"))),
        ]);
    }

    #[test]
    fn test_factorial_program() {
        let lisp = Interpreter::new();
        lisp.interpret("(define fact (lambda (n) (if (<= n 1) 1 (* n (fact (- n 1))))))").unwrap();
        assert_eq!(lisp.interpret("(fact 10)"), Ok(Some(format!("3628800"))));
        assert_eq!(lisp.interpret("(fact 20)"), Ok(Some(format!("2432902008176640000"))));
    }
}
