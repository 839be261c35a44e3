//! Debug tree printing.
//!
//! One line per node: the display name, then a space and the suffix when
//! the node has one. Children follow at two more spaces of indent. Every
//! line ends with `\n`.
//!
//! ```text
//! AddExpression
//!   ValueExpression 1.5
//!   MultiplyExpression
//!     ValueExpression "20"
//!     ValueExpression true
//! ```

use std::fmt::Write as _;

use crate::visitor::{walk, ExpressionVisitor, Visiting};
use crate::Expression;

const INDENT: usize = 2;

/// Accumulates the tree-print text of one or more expressions.
#[derive(Debug, Default)]
pub struct TreePrinter {
    out: String,
    depth: usize,
}

impl TreePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `expr` and its subtree.
    pub fn print(&mut self, expr: &Expression) {
        walk(self, expr);
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn finish(self) -> String {
        self.out
    }
}

impl ExpressionVisitor for TreePrinter {
    fn start_visit(&mut self, expr: &Expression) -> Visiting {
        let indent = self.depth * INDENT;
        let _ = write!(self.out, "{:indent$}{}", "", expr.display_name());
        if let Some(suffix) = expr.suffix() {
            self.out.push(' ');
            self.out.push_str(&suffix);
        }
        self.out.push('\n');
        self.depth += 1;
        Visiting::Continue
    }

    fn end_visit(&mut self, _expr: &Expression) {
        self.depth -= 1;
    }
}

impl Expression {
    /// The tree-print text of this expression.
    pub fn print_tree(&self) -> String {
        let mut printer = TreePrinter::new();
        printer.print(self);
        printer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fx_number::{BigDecimal, ExpressionNumber};
    use pretty_assertions::assert_eq;

    #[test]
    fn prints_nested_binary_tree() {
        let expr = Expression::add(
            Expression::number(ExpressionNumber::Binary(1.5)),
            Expression::multiply(Expression::text("20"), Expression::boolean(true)),
        );
        assert_eq!(
            expr.print_tree(),
            "AddExpression\n  ValueExpression 1.5\n  MultiplyExpression\n    ValueExpression \"20\"\n    ValueExpression true\n"
        );
    }

    #[test]
    fn prints_leaf_suffixes() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap_or_default();
        let expr = Expression::list([
            Expression::null(),
            Expression::date(date),
            Expression::number(ExpressionNumber::Decimal(BigDecimal::from(100))),
        ]);
        assert_eq!(
            expr.print_tree(),
            "ListExpression\n  ValueExpression null\n  ValueExpression 2024-02-29 (LocalDate)\n  ValueExpression 100\n"
        );
    }

    #[test]
    fn printer_accumulates_several_trees() {
        let mut printer = TreePrinter::new();
        printer.print(&Expression::not(Expression::boolean(false)));
        printer.print(&Expression::boolean(true));
        assert_eq!(
            printer.as_str(),
            "NotExpression\n  ValueExpression false\nValueExpression true\n"
        );
    }
}
