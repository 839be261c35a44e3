use super::*;
use fx_number::ExpressionNumber;
use pretty_assertions::assert_eq;

/// Records every hook as one line.
#[derive(Default)]
struct Recorder {
    events: Vec<String>,
    skip_general: Option<&'static str>,
    skip_specific: Option<&'static str>,
}

impl Recorder {
    fn general(&self, expr: &Expression) -> Visiting {
        if self.skip_general == Some(expr.display_name()) {
            Visiting::Skip
        } else {
            Visiting::Continue
        }
    }

    fn specific(&self, expr: &Expression) -> Visiting {
        if self.skip_specific == Some(expr.display_name()) {
            Visiting::Skip
        } else {
            Visiting::Continue
        }
    }

    fn log(&mut self, event: impl Into<String>) {
        self.events.push(event.into());
    }
}

impl ExpressionVisitor for Recorder {
    fn start_visit(&mut self, expr: &Expression) -> Visiting {
        self.log(format!("start {}", expr.display_name()));
        self.general(expr)
    }

    fn end_visit(&mut self, expr: &Expression) {
        self.log(format!("end {}", expr.display_name()));
    }

    fn start_visit_value(&mut self, expr: &Expression) -> Visiting {
        self.log("start value");
        self.specific(expr)
    }

    fn visit_value(&mut self, value: &ExpressionValue) {
        self.log(format!("value {value}"));
    }

    fn end_visit_value(&mut self, _expr: &Expression) {
        self.log("end value");
    }

    fn start_visit_reference(&mut self, expr: &Expression) -> Visiting {
        self.log("start reference");
        self.specific(expr)
    }

    fn visit_reference(&mut self, reference: &ExpressionReference) {
        self.log(format!("reference {reference}"));
    }

    fn end_visit_reference(&mut self, _expr: &Expression) {
        self.log("end reference");
    }

    fn start_visit_named_function(&mut self, expr: &Expression) -> Visiting {
        self.log("start named function");
        self.specific(expr)
    }

    fn visit_function_name(&mut self, name: &FunctionExpressionName) {
        self.log(format!("function {name}"));
    }

    fn end_visit_named_function(&mut self, _expr: &Expression) {
        self.log("end named function");
    }

    fn start_visit_call(&mut self, expr: &Expression) -> Visiting {
        self.log("start call");
        self.specific(expr)
    }

    fn end_visit_call(&mut self, _expr: &Expression) {
        self.log("end call");
    }

    fn start_visit_list(&mut self, expr: &Expression) -> Visiting {
        self.log("start list");
        self.specific(expr)
    }

    fn end_visit_list(&mut self, _expr: &Expression) {
        self.log("end list");
    }

    fn start_visit_unary(&mut self, op: UnaryOperator, expr: &Expression) -> Visiting {
        self.log(format!("start unary {}", op.symbol()));
        self.specific(expr)
    }

    fn end_visit_unary(&mut self, op: UnaryOperator, _expr: &Expression) {
        self.log(format!("end unary {}", op.symbol()));
    }

    fn start_visit_binary(&mut self, op: BinaryOperator, expr: &Expression) -> Visiting {
        self.log(format!("start binary {}", op.symbol()));
        self.specific(expr)
    }

    fn end_visit_binary(&mut self, op: BinaryOperator, _expr: &Expression) {
        self.log(format!("end binary {}", op.symbol()));
    }
}

fn one_plus_two() -> Expression {
    Expression::add(
        Expression::number(ExpressionNumber::Binary(1.0)),
        Expression::number(ExpressionNumber::Binary(2.0)),
    )
}

fn record(recorder: &mut Recorder, expr: &Expression) -> String {
    walk(recorder, expr);
    recorder.events.join("\n")
}

#[test]
fn two_child_event_order() {
    let events = record(&mut Recorder::default(), &one_plus_two());
    assert_eq!(
        events,
        "start AddExpression
start binary +
start ValueExpression
start value
value 1
end value
end ValueExpression
start ValueExpression
start value
value 2
end value
end ValueExpression
end binary +
end AddExpression"
    );
}

#[test]
fn general_skip_suppresses_everything_but_end() {
    let mut recorder = Recorder {
        skip_general: Some("AddExpression"),
        ..Recorder::default()
    };
    let events = record(&mut recorder, &one_plus_two());
    assert_eq!(events, "start AddExpression\nend AddExpression");
}

#[test]
fn specific_skip_still_fires_specific_end() {
    let mut recorder = Recorder {
        skip_specific: Some("AddExpression"),
        ..Recorder::default()
    };
    let events = record(&mut recorder, &one_plus_two());
    assert_eq!(
        events,
        "start AddExpression\nstart binary +\nend binary +\nend AddExpression"
    );
}

#[test]
fn specific_skip_on_leaf_suppresses_payload_hook() {
    let mut recorder = Recorder {
        skip_specific: Some("ValueExpression"),
        ..Recorder::default()
    };
    let events = record(&mut recorder, &Expression::boolean(true));
    assert_eq!(
        events,
        "start ValueExpression\nstart value\nend value\nend ValueExpression"
    );
}

#[test]
fn call_list_unary_reference_and_function() {
    let name = FunctionExpressionName::with("sum").unwrap_or_else(|e| panic!("{e}"));
    let expr = Expression::call(
        Expression::named_function(name),
        [
            Expression::negate(Expression::reference(ExpressionReference::new("A1"))),
            Expression::list(Vec::<Expression>::new()),
        ],
    );
    let events = record(&mut Recorder::default(), &expr);
    assert_eq!(
        events,
        "start CallExpression
start call
start NamedFunctionExpression
start named function
function sum
end named function
end NamedFunctionExpression
start NegateExpression
start unary -
start ReferenceExpression
start reference
reference A1
end reference
end ReferenceExpression
end unary -
end NegateExpression
start ListExpression
start list
end list
end ListExpression
end call
end CallExpression"
    );
}

#[test]
fn default_hooks_visit_every_value() {
    struct CountValues(usize);

    impl ExpressionVisitor for CountValues {
        fn visit_value(&mut self, _value: &ExpressionValue) {
            self.0 += 1;
        }
    }

    let mut counter = CountValues(0);
    Expression::multiply(one_plus_two(), one_plus_two()).accept(&mut counter);
    assert_eq!(counter.0, 4);
}

#[test]
fn deep_trees_do_not_overflow() {
    let mut expr = Expression::boolean(true);
    for _ in 0..50_000 {
        expr = Expression::not(expr);
    }

    struct Depth(usize, usize);

    impl ExpressionVisitor for Depth {
        fn start_visit(&mut self, _expr: &Expression) -> Visiting {
            self.0 += 1;
            self.1 = self.1.max(self.0);
            Visiting::Continue
        }

        fn end_visit(&mut self, _expr: &Expression) {
            self.0 -= 1;
        }
    }

    let mut depth = Depth(0, 0);
    walk(&mut depth, &expr);
    assert_eq!(depth.1, 50_001);
}
