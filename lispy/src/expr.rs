use crate::procedure::Procedure;
use std::fmt;
use std::rc::Rc;

/// Code and data share one representation: the reader produces these and
/// the evaluator consumes and returns them.
#[derive(Clone, PartialEq, Debug)]
pub enum LispExpr {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    /// Identifiers, but also the only string type: an unbound symbol
    /// evaluates to itself.
    Symbol(String),
    List(Vec<LispExpr>),
    Proc(Rc<Procedure>),
}

impl LispExpr {
    pub fn symbol(s: &str) -> LispExpr {
        LispExpr::Symbol(s.to_string())
    }

    pub fn is_number(&self) -> bool {
        matches!(self, LispExpr::Integer(_) | LispExpr::Float(_))
    }
}

impl fmt::Display for LispExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LispExpr::Integer(n) => write!(f, "{}", n),
            // Debug keeps the '.' on whole floats so they read back as floats
            LispExpr::Float(n) => write!(f, "{:?}", n),
            LispExpr::Boolean(b) => write!(f, "{}", b),
            LispExpr::Symbol(s) => write!(f, "{}", s),
            LispExpr::List(items) => {
                write!(f, "(")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 { write!(f, " ")?; }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            },
            LispExpr::Proc(p) => write!(f, "{}", p),
        }
    }
}

/// Render a value the way the reader would accept it back.
pub fn stringify(expr: &LispExpr) -> String {
    expr.to_string()
}

///////////////////////////////////////////////////////////////////////////////
