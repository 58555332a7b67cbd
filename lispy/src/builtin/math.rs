use super::{float_arg, integer_arg, integer_or_float, list_arg, register};
use crate::error::LispError;
use crate::expr::LispExpr;
use std::collections::HashMap;

// The special functions std doesn't provide come straight from libm.
mod libm {
    use std::os::raw::c_int;

    #[link(name = "m")]
    extern "C" {
        fn erf(x: f64) -> f64;
        fn erfc(x: f64) -> f64;
        fn tgamma(x: f64) -> f64;
        fn lgamma(x: f64) -> f64;
        fn frexp(x: f64, exp: *mut c_int) -> f64;
        fn ldexp(x: f64, exp: c_int) -> f64;
    }

    pub fn error_fn(x: f64) -> f64 { unsafe { erf(x) } }
    pub fn error_fn_compl(x: f64) -> f64 { unsafe { erfc(x) } }
    pub fn gamma(x: f64) -> f64 { unsafe { tgamma(x) } }
    pub fn log_gamma(x: f64) -> f64 { unsafe { lgamma(x) } }

    pub fn split_exponent(x: f64) -> (f64, i64) {
        let mut exp: c_int = 0;
        let mantissa = unsafe { frexp(x, &mut exp) };
        (mantissa, exp as i64)
    }

    pub fn load_exponent(x: f64, exp: i64) -> f64 {
        let exp = exp.clamp(c_int::MIN as i64, c_int::MAX as i64) as c_int;
        unsafe { ldexp(x, exp) }
    }
}

pub fn install(procs: &mut HashMap<String, LispExpr>) {
    let unary: &[(&str, fn(f64) -> f64)] = &[
        // number-theoretic and representation
        ("ceil", f64::ceil),
        ("floor", f64::floor),
        ("trunc", f64::trunc),
        ("fabs", f64::abs),
        // power and logarithmic
        ("exp", f64::exp),
        ("log", f64::ln),
        ("log1p", f64::ln_1p),
        ("log10", f64::log10),
        ("sqrt", f64::sqrt),
        // trigonometric
        ("acos", f64::acos),
        ("asin", f64::asin),
        ("atan", f64::atan),
        ("cos", f64::cos),
        ("sin", f64::sin),
        ("tan", f64::tan),
        // angular conversion
        ("degrees", f64::to_degrees),
        ("radians", f64::to_radians),
        // hyperbolic
        ("acosh", f64::acosh),
        ("asinh", f64::asinh),
        ("atanh", f64::atanh),
        ("cosh", f64::cosh),
        ("sinh", f64::sinh),
        ("tanh", f64::tanh),
        // special
        ("erf", libm::error_fn),
        ("erfc", libm::error_fn_compl),
        ("gamma", libm::gamma),
        ("lgamma", libm::log_gamma),
    ];
    for &(name, f) in unary {
        register(procs, name, move |args| {
            nargs!(args, 1);
            Ok(LispExpr::Float(f(float_arg(&args[0])?)))
        });
    }

    let binary: &[(&str, fn(f64, f64) -> f64)] = &[
        ("fmod", |x, y| x % y),
        ("atan2", f64::atan2),
        ("hypot", f64::hypot),
    ];
    for &(name, f) in binary {
        register(procs, name, move |args| {
            nargs!(args, 2);
            Ok(LispExpr::Float(f(float_arg(&args[0])?, float_arg(&args[1])?)))
        });
    }

    register(procs, "copysign", copysign);
    register(procs, "pow", pow);
    register(procs, "factorial", factorial);
    register(procs, "frexp", |args| {
        nargs!(args, 1);
        let (mantissa, exp) = libm::split_exponent(float_arg(&args[0])?);
        Ok(LispExpr::List(vec![LispExpr::Float(mantissa), LispExpr::Integer(exp)]))
    });
    register(procs, "ldexp", |args| {
        nargs!(args, 2);
        let (x, exp) = (float_arg(&args[0])?, integer_arg(&args[1])?);
        Ok(LispExpr::Float(libm::load_exponent(x, exp)))
    });
    register(procs, "fsum", fsum);
    register(procs, "isinf", |args| classify(args, f64::is_infinite));
    register(procs, "isnan", |args| classify(args, f64::is_nan));
}

fn copysign(args: &[LispExpr]) -> Result<LispExpr, LispError> {
    match args {
        [LispExpr::Integer(mag), LispExpr::Integer(sign)] => {
            let mag = (*mag as i128).abs();
            Ok(integer_or_float(if *sign < 0 { -mag } else { mag }))
        },
        [mag, sign] => Ok(LispExpr::Float(float_arg(mag)?.copysign(float_arg(sign)?))),
        _ => Err(LispError::invalid_input()),
    }
}

fn pow(args: &[LispExpr]) -> Result<LispExpr, LispError> {
    match args {
        // non-negative integer powers stay exact while they fit
        [LispExpr::Integer(base), LispExpr::Integer(exp)] if *exp >= 0 => {
            let exact = u32::try_from(*exp).ok().and_then(|e| base.checked_pow(e));
            Ok(match exact {
                Some(n) => LispExpr::Integer(n),
                None => LispExpr::Float((*base as f64).powf(*exp as f64)),
            })
        },
        [base, exp] => Ok(LispExpr::Float(float_arg(base)?.powf(float_arg(exp)?))),
        _ => Err(LispError::invalid_input()),
    }
}

// n! for whole, non-negative n. Past 170! every double is infinite so
// there's no point recursing any deeper.
fn factorial(args: &[LispExpr]) -> Result<LispExpr, LispError> {
    nargs!(args, 1);
    match args[0] {
        LispExpr::Integer(n) if n >= 0 => Ok(integer_factorial(n)),
        LispExpr::Float(n) if n >= 0.0 && n.fract() == 0.0 => Ok(LispExpr::Float(float_factorial(n))),
        _ => Err(LispError::invalid_input()),
    }
}

fn integer_factorial(n: i64) -> LispExpr {
    if n == 0 {
        return LispExpr::Integer(1);
    }
    if n > 170 {
        return LispExpr::Float(f64::INFINITY);
    }
    match integer_factorial(n - 1) {
        LispExpr::Integer(acc) => integer_or_float(n as i128 * acc as i128),
        LispExpr::Float(acc) => LispExpr::Float(n as f64 * acc),
        other => other,
    }
}

fn float_factorial(n: f64) -> f64 {
    if n == 0.0 {
        1.0
    } else if n > 170.0 {
        f64::INFINITY
    } else {
        n * float_factorial(n - 1.0)
    }
}

fn fsum(args: &[LispExpr]) -> Result<LispExpr, LispError> {
    nargs!(args, 1);
    let items = list_arg(&args[0])?;
    if items.iter().all(|item| matches!(item, LispExpr::Integer(_))) {
        let total = items.iter()
            .map(|item| integer_arg(item).map(|n| n as i128))
            .sum::<Result<i128, _>>()?;
        return Ok(integer_or_float(total));
    }
    let total = items.iter().map(float_arg).sum::<Result<f64, _>>()?;
    Ok(LispExpr::Float(total))
}

// isinf/isnan: integers are always finite numbers
fn classify(args: &[LispExpr], test: fn(f64) -> bool) -> Result<LispExpr, LispError> {
    nargs!(args, 1);
    match args[0] {
        LispExpr::Integer(_) => Ok(LispExpr::Boolean(false)),
        LispExpr::Float(n) => Ok(LispExpr::Boolean(test(n))),
        _ => Err(LispError::invalid_input()),
    }
}
