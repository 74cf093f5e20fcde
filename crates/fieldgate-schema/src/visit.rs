//! Validation traversal over the rule-table AST.
//!
//! Validation is non-failing at the traversal level: every node reports
//! its local issues and the visitor aggregates them by route, so one
//! pass over the table surfaces everything at once.

use crate::error::ErrorTree;

///
/// ValidateNode
///

pub trait ValidateNode {
    fn validate(&self) -> Result<(), ErrorTree> {
        Ok(())
    }
}

///
/// Visitor
///

pub trait Visitor {
    fn push(&mut self, key: &str);
    fn pop(&mut self);
    fn visit(&mut self, node: &dyn ValidateNode);
}

///
/// VisitableNode
///

pub trait VisitableNode: ValidateNode {
    /// Route segment this node contributes, empty for structural nodes.
    fn route_key(&self) -> String {
        String::new()
    }

    /// Drive the visitor through child nodes.
    fn drive<V: Visitor>(&self, _v: &mut V) {}

    fn accept<V: Visitor>(&self, v: &mut V)
    where
        Self: Sized,
    {
        let key = self.route_key();
        let scoped = !key.is_empty();

        if scoped {
            v.push(&key);
        }
        v.visit(self);
        self.drive(v);
        if scoped {
            v.pop();
        }
    }
}

///
/// ValidateVisitor
///

#[derive(Debug, Default)]
pub struct ValidateVisitor {
    pub errors: ErrorTree,
    route: Vec<String>,
}

impl ValidateVisitor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn route(&self) -> String {
        self.route.join("/")
    }
}

impl Visitor for ValidateVisitor {
    fn push(&mut self, key: &str) {
        self.route.push(key.to_string());
    }

    fn pop(&mut self) {
        self.route.pop();
    }

    fn visit(&mut self, node: &dyn ValidateNode) {
        if let Err(errs) = node.validate() {
            self.errors.merge(&self.route(), errs);
        }
    }
}
