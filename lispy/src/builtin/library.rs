use super::{integer_or_float, list_arg, register};
use crate::error::LispError;
use crate::expr::LispExpr;
use std::collections::HashMap;

pub fn install(procs: &mut HashMap<String, LispExpr>) {
    register(procs, "abs", abs);
    register(procs, "append", append);
    register(procs, "car", car);
    register(procs, "cdr", cdr);
    register(procs, "length", length);
    register(procs, "list", |args| Ok(LispExpr::List(args.to_vec())));
    register(procs, "list?", |args| {
        nargs!(args, 1);
        Ok(LispExpr::Boolean(matches!(args[0], LispExpr::List(_))))
    });
    register(procs, "max", max);
    register(procs, "min", min);
    register(procs, "not", not);
    register(procs, "number?", |args| {
        nargs!(args, 1);
        Ok(LispExpr::Boolean(args[0].is_number()))
    });
    register(procs, "round", round);
}

fn abs(args: &[LispExpr]) -> Result<LispExpr, LispError> {
    match args {
        [LispExpr::Integer(n)] => Ok(integer_or_float((*n as i128).abs())),
        [LispExpr::Float(n)] => Ok(LispExpr::Float(n.abs())),
        _ => Err(LispError::invalid_input()),
    }
}

fn append(args: &[LispExpr]) -> Result<LispExpr, LispError> {
    nargs!(args, 2);
    let mut joined = list_arg(&args[0])?.to_vec();
    joined.extend_from_slice(list_arg(&args[1])?);
    Ok(LispExpr::List(joined))
}

fn car(args: &[LispExpr]) -> Result<LispExpr, LispError> {
    nargs!(args, 1);
    match list_arg(&args[0])?.first() {
        Some(head) => Ok(head.clone()),
        None => Err(LispError::invalid_input()),
    }
}

fn cdr(args: &[LispExpr]) -> Result<LispExpr, LispError> {
    nargs!(args, 1);
    match list_arg(&args[0])? {
        [] => Err(LispError::invalid_input()),
        [_, tail @ ..] => Ok(LispExpr::List(tail.to_vec())),
    }
}

fn length(args: &[LispExpr]) -> Result<LispExpr, LispError> {
    nargs!(args, 1);
    Ok(LispExpr::Integer(list_arg(&args[0])?.len() as i64))
}

// Splits numeric arguments by representation, rejecting anything else.
fn numbers(args: &[LispExpr]) -> Result<(Vec<i64>, Vec<f64>), LispError> {
    if args.is_empty() {
        return Err(LispError::invalid_input());
    }
    let (mut ints, mut floats) = (Vec::new(), Vec::new());
    for arg in args {
        match *arg {
            LispExpr::Integer(n) => ints.push(n),
            LispExpr::Float(n) => floats.push(n),
            _ => return Err(LispError::invalid_input()),
        }
    }
    Ok((ints, floats))
}

// max/min keep the representation of whichever subtotal wins, ties go to
// the integer
fn max(args: &[LispExpr]) -> Result<LispExpr, LispError> {
    let (ints, floats) = numbers(args)?;
    let best_int = ints.into_iter().max();
    let best_float = floats.into_iter().reduce(f64::max);
    Ok(match (best_int, best_float) {
        (Some(i), Some(f)) if f > i as f64 => LispExpr::Float(f),
        (Some(i), _) => LispExpr::Integer(i),
        (None, f) => LispExpr::Float(f.unwrap_or(f64::NEG_INFINITY)),
    })
}

fn min(args: &[LispExpr]) -> Result<LispExpr, LispError> {
    let (ints, floats) = numbers(args)?;
    let best_int = ints.into_iter().min();
    let best_float = floats.into_iter().reduce(f64::min);
    Ok(match (best_int, best_float) {
        (Some(i), Some(f)) if f < i as f64 => LispExpr::Float(f),
        (Some(i), _) => LispExpr::Integer(i),
        (None, f) => LispExpr::Float(f.unwrap_or(f64::INFINITY)),
    })
}

fn not(args: &[LispExpr]) -> Result<LispExpr, LispError> {
    nargs!(args, 1);
    let negated = match &args[0] {
        LispExpr::Boolean(b) => !b,
        LispExpr::Integer(n) => *n == 0,
        LispExpr::Float(n) => *n == 0.0,
        LispExpr::Symbol(s) => match &s[..] {
            "true" => false,
            "false" => true,
            _ => return Err(LispError::invalid_input()),
        },
        _ => return Err(LispError::invalid_input()),
    };
    Ok(LispExpr::Boolean(negated))
}

fn round(args: &[LispExpr]) -> Result<LispExpr, LispError> {
    match args {
        [LispExpr::Integer(n)] => Ok(LispExpr::Integer(*n)),
        // halfway cases round away from zero
        [LispExpr::Float(n)] => Ok(LispExpr::Float(n.round())),
        _ => Err(LispError::invalid_input()),
    }
}
