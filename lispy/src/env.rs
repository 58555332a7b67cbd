use crate::expr::LispExpr;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// One frame of the scope chain. Frames are shared through `Rc` since
/// closures keep the frame they were created in alive.
pub struct Env {
    syms: RefCell<HashMap<String, LispExpr>>,
    outer: Option<Rc<Env>>,
}

impl Env {
    pub fn new(bindings: HashMap<String, LispExpr>, outer: Option<Rc<Env>>) -> Rc<Env> {
        Rc::new(Env{syms: RefCell::new(bindings), outer})
    }

    pub fn empty() -> Rc<Env> {
        Env::new(HashMap::new(), None)
    }

    /// Frame for a procedure call, params and args are zipped positionally.
    pub fn nested(params: &[String], args: Vec<LispExpr>, outer: &Rc<Env>) -> Rc<Env> {
        let bindings = params.iter().cloned().zip(args).collect();
        Env::new(bindings, Some(outer.clone()))
    }

    pub fn outer(&self) -> Option<&Rc<Env>> {
        self.outer.as_ref()
    }

    /// Innermost frame, starting at self, that binds `sym`.
    pub fn find(&self, sym: &str) -> Option<&Env> {
        if self.syms.borrow().contains_key(sym) {
            Some(self)
        } else {
            self.outer.as_ref()?.find(sym)
        }
    }

    // get/set only ever look at this frame
    pub fn get(&self, sym: &str) -> Option<LispExpr> {
        self.syms.borrow().get(sym).cloned()
    }

    pub fn set(&self, sym: &str, value: LispExpr) {
        self.syms.borrow_mut().insert(sym.to_string(), value);
    }

    pub fn lookup(&self, sym: &str) -> Option<LispExpr> {
        self.find(sym)?.get(sym)
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Env;
    use crate::expr::LispExpr;
    use std::collections::HashMap;

    #[test]
    fn test_find_walks_outwards() {
        let root = Env::empty();
        root.set("x", LispExpr::Integer(1));
        root.set("y", LispExpr::Integer(2));
        let inner = Env::nested(&[format!("x")], vec![LispExpr::Integer(10)], &root);
        assert!(std::ptr::eq(inner.find("x").unwrap(), &*inner));
        assert!(std::ptr::eq(inner.find("y").unwrap(), &*root));
        assert!(inner.find("z").is_none());
        assert_eq!(inner.lookup("x"), Some(LispExpr::Integer(10)));
        assert_eq!(inner.lookup("y"), Some(LispExpr::Integer(2)));
        assert_eq!(root.lookup("x"), Some(LispExpr::Integer(1)));
    }

    #[test]
    fn test_set_is_frame_local() {
        let mut bindings = HashMap::new();
        bindings.insert(format!("a"), LispExpr::symbol("outer"));
        let root = Env::new(bindings, None);
        let inner = Env::nested(&[], vec![], &root);
        inner.set("a", LispExpr::symbol("inner"));
        assert_eq!(inner.get("a"), Some(LispExpr::symbol("inner")));
        assert_eq!(root.get("a"), Some(LispExpr::symbol("outer")));
        assert!(inner.get("b").is_none());
        assert!(root.outer().is_none());
        assert!(inner.outer().is_some());
    }

    #[test]
    fn test_mutation_visible_through_shared_frame() {
        let root = Env::empty();
        let child = Env::nested(&[], vec![], &root);
        root.set("n", LispExpr::Integer(1));
        assert_eq!(child.lookup("n"), Some(LispExpr::Integer(1)));
        root.find("n").unwrap().set("n", LispExpr::Integer(2));
        assert_eq!(child.lookup("n"), Some(LispExpr::Integer(2)));
    }
}
