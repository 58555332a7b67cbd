use super::{float_arg, integer_or_float, register};
use crate::error::LispError;
use crate::expr::LispExpr;
use std::cmp::Ordering;
use std::collections::HashMap;

pub fn install(procs: &mut HashMap<String, LispExpr>) {
    register(procs, "+", add);
    register(procs, "-", subtract);
    register(procs, "*", |args| arith(args, |a, b| a * b, |a, b| a * b));
    register(procs, "/", divide);
    register(procs, "%", modulo);
    register(procs, ">", |args| compare(args, |o| o == Some(Ordering::Greater)));
    register(procs, "<", |args| compare(args, |o| o == Some(Ordering::Less)));
    register(procs, ">=", |args| compare(args, |o| matches!(o, Some(Ordering::Greater | Ordering::Equal))));
    register(procs, "<=", |args| compare(args, |o| matches!(o, Some(Ordering::Less | Ordering::Equal))));
    register(procs, "=", |args| compare(args, |o| o == Some(Ordering::Equal)));
}

// binary numeric op: int/int is computed exactly, anything with a float
// involved is done in floating point
fn arith(args: &[LispExpr], int_op: fn(i128, i128) -> i128, float_op: fn(f64, f64) -> f64)
        -> Result<LispExpr, LispError> {
    nargs!(args, 2);
    match (&args[0], &args[1]) {
        (&LispExpr::Integer(a), &LispExpr::Integer(b)) =>
            Ok(integer_or_float(int_op(a as i128, b as i128))),
        (a, b) => Ok(LispExpr::Float(float_op(float_arg(a)?, float_arg(b)?))),
    }
}

fn add(args: &[LispExpr]) -> Result<LispExpr, LispError> {
    match args {
        [LispExpr::Symbol(a), LispExpr::Symbol(b)] => Ok(LispExpr::Symbol(format!("{}{}", a, b))),
        _ => arith(args, |a, b| a + b, |a, b| a + b),
    }
}

fn subtract(args: &[LispExpr]) -> Result<LispExpr, LispError> {
    match args {
        [LispExpr::Integer(n)] => Ok(integer_or_float(-(*n as i128))),
        [LispExpr::Float(n)] => Ok(LispExpr::Float(-n)),
        _ => arith(args, |a, b| a - b, |a, b| a - b),
    }
}

fn divide(args: &[LispExpr]) -> Result<LispExpr, LispError> {
    nargs!(args, 2);
    if args[1] == LispExpr::Integer(0) && matches!(args[0], LispExpr::Integer(_)) {
        return Err(LispError::invalid_input());
    }
    // i128 division truncates toward zero
    arith(args, |a, b| a / b, |a, b| a / b)
}

fn modulo(args: &[LispExpr]) -> Result<LispExpr, LispError> {
    match args {
        [LispExpr::Integer(_), LispExpr::Integer(0)] => Err(LispError::invalid_input()),
        [LispExpr::Integer(a), LispExpr::Integer(b)] =>
            Ok(integer_or_float(*a as i128 % *b as i128)),
        _ => Err(LispError::invalid_input()),
    }
}

// comparisons accept int/int, float/float or symbol/symbol, nothing mixed
fn compare(args: &[LispExpr], test: fn(Option<Ordering>) -> bool) -> Result<LispExpr, LispError> {
    nargs!(args, 2);
    let ordering = match (&args[0], &args[1]) {
        (LispExpr::Integer(a), LispExpr::Integer(b)) => a.partial_cmp(b),
        (LispExpr::Float(a), LispExpr::Float(b)) => a.partial_cmp(b),
        (LispExpr::Symbol(a), LispExpr::Symbol(b)) => a.partial_cmp(b),
        _ => return Err(LispError::invalid_input()),
    };
    Ok(LispExpr::Boolean(test(ordering)))
}
