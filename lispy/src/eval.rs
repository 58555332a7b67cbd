use crate::env::Env;
use crate::error::*;
use crate::expr::LispExpr;
use crate::procedure::Procedure;
use std::rc::Rc;

macro_rules! check {
    ($argcheck:expr, $err:expr) => {
        if ! $argcheck { return Err(LispError::syntax($err)); }
    }
}

/// Evaluate `expr` in `env`. `Ok(None)` means there's nothing to print,
/// which is what `define` and `set!` produce.
pub fn eval(expr: &LispExpr, env: &Rc<Env>) -> Result<Option<LispExpr>, LispError> {
    match expr {
        // unbound symbols are literals
        LispExpr::Symbol(sym) => Ok(Some(env.lookup(sym).unwrap_or_else(|| expr.clone()))),
        LispExpr::List(list) => match list.first() {
            Some(LispExpr::Symbol(first)) => match &first[..] {
                "quote" => {
                    check!(list.len() == 2, INVALID_QUOTATION);
                    Ok(Some(list[1].clone()))
                },
                "if" => eval_if(list, env),
                "define" => eval_define(list, env),
                "set!" => eval_set(list, env),
                "lambda" => eval_lambda(list, env),
                _ => apply(list, env),
            },
            Some(_) => apply(list, env),
            None => Err(LispError::evaluation(INVALID_CALL)),
        },
        LispExpr::Integer(_) | LispExpr::Float(_) |
        LispExpr::Boolean(_) | LispExpr::Proc(_) => Ok(Some(expr.clone())),
    }
}

// evaluate something that has to produce a value
fn eval_value(expr: &LispExpr, env: &Rc<Env>, err: LispError) -> Result<LispExpr, LispError> {
    eval(expr, env)?.ok_or(err)
}

fn eval_if(list: &[LispExpr], env: &Rc<Env>) -> Result<Option<LispExpr>, LispError> {
    check!(list.len() == 4, INVALID_CONDITIONAL);
    let (test, conseq, alt) = (&list[1], &list[2], &list[3]);
    match eval_value(test, env, LispError::syntax(INVALID_CONDITIONAL))? {
        LispExpr::Boolean(true) => eval(conseq, env),
        LispExpr::Boolean(false) => eval(alt, env),
        _ => Err(LispError::syntax(INVALID_CONDITIONAL)),
    }
}

fn eval_define(list: &[LispExpr], env: &Rc<Env>) -> Result<Option<LispExpr>, LispError> {
    check!(list.len() == 3, INVALID_DEFINITION);
    match &list[1] {
        LispExpr::Symbol(var) => {
            let value = eval_value(&list[2], env, LispError::syntax(INVALID_DEFINITION))?;
            env.set(var, value);
            Ok(None)
        },
        _ => Err(LispError::syntax(INVALID_DEFINITION)),
    }
}

fn eval_set(list: &[LispExpr], env: &Rc<Env>) -> Result<Option<LispExpr>, LispError> {
    check!(list.len() == 3, INVALID_ASSIGNMENT);
    let var = match &list[1] {
        LispExpr::Symbol(var) => var,
        _ => return Err(LispError::syntax(INVALID_ASSIGNMENT)),
    };
    // assignment never creates a binding
    let frame = env.find(var)
        .ok_or_else(|| LispError::EvaluationError(format!("unbound symbol: {}", var)))?;
    let value = eval_value(&list[2], env, LispError::syntax(INVALID_ASSIGNMENT))?;
    frame.set(var, value);
    Ok(None)
}

fn eval_lambda(list: &[LispExpr], env: &Rc<Env>) -> Result<Option<LispExpr>, LispError> {
    check!(list.len() == 3, INVALID_LAMBDA);
    let params = match &list[1] {
        LispExpr::List(varlist) => varlist.iter()
            .map(|var| match var {
                LispExpr::Symbol(v) => Ok(v.clone()),
                _ => Err(LispError::syntax(INVALID_LAMBDA)),
            })
            .collect::<Result<Vec<_>, _>>()?,
        _ => return Err(LispError::syntax(INVALID_LAMBDA)),
    };
    let body = list[2].clone();
    Ok(Some(LispExpr::Proc(Rc::new(Procedure::lambda(params, body, env.clone())))))
}

fn apply(list: &[LispExpr], env: &Rc<Env>) -> Result<Option<LispExpr>, LispError> {
    let head = eval_value(&list[0], env, LispError::evaluation(INVALID_CALL))?;
    // arguments are evaluated left to right, before the call
    let mut args = Vec::with_capacity(list.len() - 1);
    for arg in list.iter().skip(1) {
        args.push(eval_value(arg, env, LispError::evaluation(INVALID_CALL))?);
    }
    match head {
        LispExpr::Proc(pr) => pr.call(args),
        // (x) reads the value of x
        value if args.is_empty() => Ok(Some(value)),
        _ => Err(LispError::evaluation(INVALID_CALL)),
    }
}
