use serde::Serialize;
use std::fmt;

///
/// ErrorTree
/// Flat, ordered collection of validation issues keyed by node route.
/// Validation never short-circuits; every issue is collected so the
/// whole table can be fixed in one pass.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct ErrorTree {
    issues: Vec<Issue>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self { issues: Vec::new() }
    }

    /// Record an issue at the current (empty) route.
    pub fn add(&mut self, message: impl Into<String>) {
        self.add_at("", message);
    }

    /// Record an issue at an explicit route.
    pub fn add_at(&mut self, route: impl Into<String>, message: impl Into<String>) {
        self.issues.push(Issue {
            route: route.into(),
            message: message.into(),
        });
    }

    /// Fold another tree into this one, prefixing its routes.
    pub fn merge(&mut self, prefix: &str, other: Self) {
        for issue in other.issues {
            let route = match (prefix.is_empty(), issue.route.is_empty()) {
                (true, _) => issue.route,
                (false, true) => prefix.to_string(),
                (false, false) => format!("{prefix}/{}", issue.route),
            };

            self.issues.push(Issue {
                route,
                message: issue.message,
            });
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            if issue.route.is_empty() {
                write!(f, "{}", issue.message)?;
            } else {
                write!(f, "{}: {}", issue.route, issue.message)?;
            }
        }

        Ok(())
    }
}

///
/// Issue
///

#[derive(Clone, Debug, Serialize)]
pub struct Issue {
    pub route: String,
    pub message: String,
}

/// Push a formatted issue onto an [`ErrorTree`].
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::ErrorTree;

    #[test]
    fn result_is_ok_only_when_empty() {
        let errs = ErrorTree::new();
        assert!(errs.result().is_ok());

        let mut errs = ErrorTree::new();
        err!(errs, "broken");
        assert!(errs.result().is_err());
    }

    #[test]
    fn merge_prefixes_routes() {
        let mut inner = ErrorTree::new();
        inner.add("message at node");
        inner.add_at("child", "message below node");

        let mut outer = ErrorTree::new();
        outer.merge("property/house", inner);

        let routes: Vec<&str> = outer.issues().iter().map(|i| i.route.as_str()).collect();
        assert_eq!(routes, ["property/house", "property/house/child"]);
    }

    #[test]
    fn display_joins_issues_with_routes() {
        let mut errs = ErrorTree::new();
        errs.add_at("a/b", "first");
        errs.add("second");

        assert_eq!(errs.to_string(), "a/b: first; second");
    }
}
