//! End-to-end tests for the parser, using only the crate's public
//! surface: feed in source text, look at the tree (or the error) that
//! comes back.

use diagnostic::Caret;
use syntax::{parse, Node};

fn program(input: &str) -> Vec<Node> {
    match parse(input).unwrap() {
        Node::Program(statements) => statements,
        node => panic!("parse produced a non-program root: {:?}", node),
    }
}

fn statement(input: &str) -> Node {
    let mut statements = program(input);
    assert_eq!(statements.len(), 1, "expected exactly one statement");
    statements.pop().unwrap()
}

#[test]
fn empty_input_fails_at_the_very_start() {
    let error = parse("").unwrap_err();
    assert_eq!(error.caret(), Caret::new(1, 1));
}

#[test]
fn blank_input_is_an_empty_program() {
    // Not-quite-empty input full of nothing parses fine.
    assert_eq!(program("\n\n  \n# just a comment\n"), Vec::new());
}

#[test]
fn let_value_matches_the_expression_parsed_alone() {
    // `let x = <expr>` wraps exactly the tree `<expr>` produces as a
    // statement on its own.
    for source in ["42", "42.5", "\"hi\"", "true", "f(1, 2)", "a + b * c"] {
        let alone = statement(&format!("{}\n", source));
        let bound = statement(&format!("let x = {}\n", source));

        match bound {
            Node::Let { name, value } => {
                assert_eq!(name, "x");
                assert_eq!(*value, alone, "for input {:?}", source);
            }
            node => panic!("expected a let, got {:?}", node),
        }
    }
}

#[test]
fn float_integer_disambiguation() {
    assert_eq!(statement("42\n"), Node::Integer(42));
    assert_eq!(statement("42.5\n"), Node::Float(42.5));

    // A dot with no digits after it isn't a float, and the leftover dot
    // sinks the program.
    assert!(parse("42.\n").is_err());
}

#[test]
fn strings_are_verbatim() {
    // Backslash sequences pass through untouched.
    assert_eq!(statement("\"a\\nb\"\n"), Node::String("a\\nb".into()));
}

#[test]
fn operations_stay_flat() {
    assert_eq!(
        statement("1 + 2 * 3\n"),
        Node::OperationsList(vec![
            Node::Integer(1),
            Node::Operator("+".into()),
            Node::Integer(2),
            Node::Operator("*".into()),
            Node::Integer(3),
        ])
    );
}

#[test]
fn lone_prefixed_operand_is_rejected() {
    // One operand and no operator isn't an operation, and `(- 5)` has no
    // other reading, so the parse fails outright.
    assert!(parse("(- 5)\n").is_err());
}

#[test]
fn if_with_elif_and_else() {
    let node = statement("if a then 1 elif b then 2 else 3 end\n");

    match node {
        Node::IfClause {
            condition,
            body,
            elifs,
            else_body,
        } => {
            assert_eq!(*condition, Node::VarUse("a".into()));
            assert_eq!(body, vec![Node::Integer(1)]);
            assert_eq!(else_body, vec![Node::Integer(3)]);

            assert_eq!(elifs.len(), 1);
            match &elifs[0] {
                Node::IfClause {
                    condition,
                    body,
                    elifs,
                    else_body,
                } => {
                    assert_eq!(**condition, Node::VarUse("b".into()));
                    assert_eq!(*body, vec![Node::Integer(2)]);
                    assert!(elifs.is_empty());
                    assert!(else_body.is_empty());
                }
                node => panic!("expected an elif clause, got {:?}", node),
            }
        }
        node => panic!("expected an if clause, got {:?}", node),
    }
}

#[test]
fn if_without_elif_or_else() {
    match statement("if a then 1 end\n") {
        Node::IfClause {
            elifs, else_body, ..
        } => {
            assert!(elifs.is_empty());
            assert!(else_body.is_empty());
        }
        node => panic!("expected an if clause, got {:?}", node),
    }
}

#[test]
fn function_bound_to_a_name() {
    // The `end` must leave the line break for the `let`'s terminator.
    let node = statement("let double = fun (n: Int) -> Int\n    n * 2\nend\n");

    match node {
        Node::Let { name, value } => {
            assert_eq!(name, "double");
            assert!(matches!(*value, Node::Function { .. }));
        }
        node => panic!("expected a let, got {:?}", node),
    }
}

#[test]
fn closure_keyword_decides_the_node() {
    let closure = statement("use () () -> Int\n    1\nend\n");
    assert!(matches!(closure, Node::Closure { .. }));

    let function = statement("fun () -> Int\n    1\nend\n");
    assert!(matches!(function, Node::Function { .. }));
}

#[test]
fn small_program() {
    let source = "\
# doubling, with a detour
let double = fun (n: Int) -> Int
    n * 2
end

mut total = 0
total += double(4)

if total > 7 then
    show(total)
else
    show(0)
end
";

    let statements = program(source);
    assert_eq!(statements.len(), 4);
    assert!(matches!(statements[0], Node::Let { .. }));
    assert!(matches!(statements[1], Node::Mut { .. }));
    assert!(matches!(statements[2], Node::Assignment { .. }));
    assert!(matches!(statements[3], Node::IfClause { .. }));
}

#[test]
fn errors_are_positioned() {
    // The broken statement is on line 2, and the `2` is what's wrong.
    let error = parse("let a = 1\nmut b 2\n").unwrap_err();
    assert_eq!(error.caret().row(), 2);
    assert_eq!(error.found(), Some('2'));
}

#[test]
fn markers_never_reach_the_tree() {
    let source = "if a then 1 else 2 end\n";

    fn check(node: &Node) {
        assert!(!node.is_marker(), "marker leaked into the tree: {:?}", node);
        match node {
            Node::Program(nodes) | Node::OperationsList(nodes) => {
                nodes.iter().for_each(check)
            }
            Node::IfClause {
                body,
                elifs,
                else_body,
                ..
            } => {
                body.iter().for_each(check);
                elifs.iter().for_each(check);
                else_body.iter().for_each(check);
            }
            _ => {}
        }
    }

    check(&parse(source).unwrap());
}

#[test]
fn pretty_printed_tree() {
    let tree = parse("let x = 1\n").unwrap();

    let expected = "\
(Program
    (Let
        (VarName x)
        (Integer 1)
    )
)";
    assert_eq!(format!("{}", tree), expected);
}
