use crate::env::Env;
use crate::error::LispError;
use crate::eval::eval;
use crate::expr::LispExpr;
use std::fmt;
use std::rc::Rc;

pub type Fp = Rc<dyn Fn(&[LispExpr]) -> Result<LispExpr, LispError>>;

pub enum Procedure {
    /// Host function, validates its own arguments.
    Native { name: String, func: Fp },
    /// A lambda together with the frame that was live when it was created.
    Closure { params: Vec<String>, body: LispExpr, env: Rc<Env> },
}

// procedures are only equal to themselves
impl PartialEq for Procedure {
    fn eq(&self, other: &Procedure) -> bool { std::ptr::eq(self, other) }
}

impl fmt::Debug for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Procedure::Native { name, .. } => write!(f, "Native({:?})", name),
            Procedure::Closure { params, .. } => write!(f, "(lambda ({:?}) ...)", params),
        }
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Procedure::Native { name, .. } => write!(f, "#<builtin {}>", name),
            Procedure::Closure { params, body, .. } =>
                write!(f, "(lambda ({}) {})", params.join(" "), body),
        }
    }
}

impl Procedure {
    pub fn builtin(name: &str, func: Fp) -> Procedure {
        Procedure::Native { name: name.to_string(), func }
    }

    pub fn lambda(params: Vec<String>, body: LispExpr, env: Rc<Env>) -> Procedure {
        Procedure::Closure { params, body, env }
    }

    pub fn call(&self, args: Vec<LispExpr>) -> Result<Option<LispExpr>, LispError> {
        match self {
            Procedure::Native { func, .. } => func(args.as_slice()).map(Some),
            Procedure::Closure { params, body, env } => {
                if params.len() != args.len() {
                    return Err(LispError::invalid_input());
                }
                // parent is the captured frame, not the caller's
                let frame = Env::nested(params, args, env);
                eval(body, &frame)
            }
        }
    }
}
