use crate::env::Env;
use crate::error::LispError;
use crate::expr::LispExpr;
use crate::procedure::Procedure;
use std::collections::HashMap;
use std::rc::Rc;

// natives check their own arity, the evaluator passes arguments through as is
macro_rules! nargs {
    ($args:expr, $n:expr) => {
        if $args.len() != $n { return Err(LispError::invalid_input()); }
    }
}

mod library;
mod math;
mod operators;

/// Name -> value table every interpreter starts from.
pub fn builtins() -> HashMap<String, LispExpr> {
    use std::f64::consts;
    let mut procs: HashMap<String, LispExpr> = HashMap::new();
    procs.insert(format!("pi"), LispExpr::Float(consts::PI));
    procs.insert(format!("π"), LispExpr::Float(consts::PI));
    procs.insert(format!("e"), LispExpr::Float(consts::E));
    procs.insert(format!("𝑒"), LispExpr::Float(consts::E));
    operators::install(&mut procs);
    library::install(&mut procs);
    math::install(&mut procs);
    procs
}

/// A fresh root frame holding the standard procedures. Each call builds a
/// new one so interpreters never share globals.
pub fn standard_env() -> Rc<Env> {
    Env::new(builtins(), None)
}

fn register<F>(procs: &mut HashMap<String, LispExpr>, name: &str, func: F)
where F: Fn(&[LispExpr]) -> Result<LispExpr, LispError> + 'static {
    let p = Procedure::builtin(name, Rc::new(func));
    procs.insert(name.to_string(), LispExpr::Proc(Rc::new(p)));
}

// Exact integer results stay integers while they fit, otherwise they are
// promoted to float rather than wrapping.
fn integer_or_float(exact: i128) -> LispExpr {
    match i64::try_from(exact) {
        Ok(n) => LispExpr::Integer(n),
        Err(_) => LispExpr::Float(exact as f64),
    }
}

fn float_arg(arg: &LispExpr) -> Result<f64, LispError> {
    match *arg {
        LispExpr::Integer(n) => Ok(n as f64),
        LispExpr::Float(n) => Ok(n),
        _ => Err(LispError::invalid_input()),
    }
}

fn integer_arg(arg: &LispExpr) -> Result<i64, LispError> {
    match *arg {
        LispExpr::Integer(n) => Ok(n),
        _ => Err(LispError::invalid_input()),
    }
}

fn list_arg(arg: &LispExpr) -> Result<&[LispExpr], LispError> {
    match arg {
        LispExpr::List(items) => Ok(items),
        _ => Err(LispError::invalid_input()),
    }
}
