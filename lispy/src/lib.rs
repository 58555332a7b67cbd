extern crate lexers;

mod builtin;
mod env;
mod error;
mod eval;
mod expr;
mod interpreter;
mod parser;
mod procedure;

pub use builtin::{builtins, standard_env};
pub use env::Env;
pub use error::LispError;
pub use eval::eval;
pub use expr::{stringify, LispExpr};
pub use interpreter::Interpreter;
pub use lexers::tokenize;
pub use parser::Parser;
pub use procedure::{Fp, Procedure};

/// Read a single expression from `source`.
pub fn parse(source: &str) -> Result<LispExpr, LispError> {
    Parser::parse_str(source)
}
