//! Rendering syntax trees as indented S-expressions.
//!
//! This is a debugging view, not a serialization format - there's no
//! reader for it. Nesting is shown with four spaces per level.

use std::fmt;

use crate::ast::Node;

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write(f, 0)
    }
}

impl Node {
    /// Write this node at the given indentation level. Every branch leaves
    /// the output without a trailing newline, so parents control spacing.
    fn write(&self, f: &mut fmt::Formatter, indent: usize) -> fmt::Result {
        match self {
            Node::Program(statements) => {
                write!(f, "(Program")?;
                for statement in statements {
                    writeln!(f)?;
                    statement.write(f, indent + 1)?;
                }
                write!(f, "\n)")
            }

            Node::Let { name, value } => {
                write_binding(f, "Let", name, value, indent)
            }

            Node::Mut { name, value } => {
                write_binding(f, "Mut", name, value, indent)
            }

            Node::Assignment {
                name,
                operator,
                value,
            } => {
                write_indent(f, indent)?;
                writeln!(f, "(Assignment")?;
                write_indent(f, indent + 1)?;
                writeln!(f, "(VarName {})", name)?;
                write_indent(f, indent + 1)?;
                writeln!(f, "(Operator {}=)", operator.as_deref().unwrap_or(""))?;
                value.write(f, indent + 1)?;
                writeln!(f)?;
                write_indent(f, indent)?;
                write!(f, ")")
            }

            Node::Function {
                arguments,
                return_type,
                body,
            } => {
                write_indent(f, indent)?;
                writeln!(f, "(Function")?;
                write_block(f, "Args", arguments, indent + 1)?;
                writeln!(f)?;
                write_indent(f, indent + 1)?;
                writeln!(f, "(Type {})", return_type)?;
                write_block(f, "Body", body, indent + 1)?;
                writeln!(f)?;
                write_indent(f, indent)?;
                write!(f, ")")
            }

            Node::Closure {
                captures,
                arguments,
                return_type,
                body,
            } => {
                write_indent(f, indent)?;
                writeln!(f, "(Closure")?;
                write_block(f, "Captures", captures, indent + 1)?;
                writeln!(f)?;
                write_block(f, "Args", arguments, indent + 1)?;
                writeln!(f)?;
                write_indent(f, indent + 1)?;
                writeln!(f, "(Type {})", return_type)?;
                write_block(f, "Body", body, indent + 1)?;
                writeln!(f)?;
                write_indent(f, indent)?;
                write!(f, ")")
            }

            Node::ClosureFieldCall {
                object,
                field,
                arguments,
            } => {
                write_indent(f, indent)?;
                writeln!(f, "(ClosureFieldCall")?;
                write_indent(f, indent + 1)?;
                writeln!(f, "(ObjectName {})", object)?;
                write_indent(f, indent + 1)?;
                writeln!(f, "(FuncName {})", field)?;
                write_block(f, "Args", arguments, indent + 1)?;
                writeln!(f)?;
                write_indent(f, indent)?;
                write!(f, ")")
            }

            Node::ClosureFieldRead { object, field } => {
                write_indent(f, indent)?;
                writeln!(f, "(ClosureFieldRead")?;
                write_indent(f, indent + 1)?;
                writeln!(f, "(ObjectName {})", object)?;
                write_indent(f, indent + 1)?;
                writeln!(f, "(FieldName {})", field)?;
                write_indent(f, indent)?;
                write!(f, ")")
            }

            Node::IfClause {
                condition,
                body,
                elifs,
                else_body,
            } => {
                write_indent(f, indent)?;
                writeln!(f, "(IfClause")?;
                write_child(f, "Condition", condition, indent + 1)?;
                writeln!(f)?;
                write_block(f, "Body", body, indent + 1)?;
                if !elifs.is_empty() {
                    writeln!(f)?;
                    write_block(f, "Elifs", elifs, indent + 1)?;
                }
                if !else_body.is_empty() {
                    writeln!(f)?;
                    write_block(f, "Else", else_body, indent + 1)?;
                }
                writeln!(f)?;
                write_indent(f, indent)?;
                write!(f, ")")
            }

            Node::WhileLoop { condition, body } => {
                write_indent(f, indent)?;
                writeln!(f, "(WhileLoop")?;
                write_child(f, "Condition", condition, indent + 1)?;
                writeln!(f)?;
                write_block(f, "Body", body, indent + 1)?;
                writeln!(f)?;
                write_indent(f, indent)?;
                write!(f, ")")
            }

            Node::OperationsList(items) => {
                write_block(f, "OperationsList", items, indent)
            }

            Node::FunctionCall { name, arguments } => {
                write_indent(f, indent)?;
                writeln!(f, "(FunctionCall")?;
                write_indent(f, indent + 1)?;
                writeln!(f, "(Name {})", name)?;
                write_block(f, "Args", arguments, indent + 1)?;
                writeln!(f)?;
                write_indent(f, indent)?;
                write!(f, ")")
            }

            Node::Integer(value) => write_leaf(f, indent, "Integer", value),
            Node::Float(value) => write_leaf(f, indent, "Float", value),
            Node::String(value) => {
                write_indent(f, indent)?;
                write!(f, "(String {:?})", value)
            }
            Node::Bool(value) => write_leaf(f, indent, "Bool", value),
            Node::VarUse(name) => write_leaf(f, indent, "VarUse", name),
            Node::Operator(lexeme) => write_leaf(f, indent, "Operator", lexeme),

            Node::End => write_word(f, indent, "End"),
            Node::Elif => write_word(f, indent, "Elif"),
            Node::Else => write_word(f, indent, "Else"),

            Node::Argument { name, type_name } => {
                write_indent(f, indent)?;
                write!(f, "(Argument {}: {})", name, type_name)
            }

            Node::Capture(name) => write_leaf(f, indent, "Capture", name),
        }
    }
}

fn write_indent(f: &mut fmt::Formatter, indent: usize) -> fmt::Result {
    for _ in 0..indent {
        write!(f, "    ")?;
    }
    Ok(())
}

/// A leaf like `(Integer 42)`.
fn write_leaf(
    f: &mut fmt::Formatter,
    indent: usize,
    label: &str,
    value: impl fmt::Display,
) -> fmt::Result {
    write_indent(f, indent)?;
    write!(f, "({} {})", label, value)
}

/// A bare word like `(End)`.
fn write_word(f: &mut fmt::Formatter, indent: usize, label: &str) -> fmt::Result {
    write_indent(f, indent)?;
    write!(f, "({})", label)
}

/// `(Let …)` and `(Mut …)` share a shape.
fn write_binding(
    f: &mut fmt::Formatter,
    label: &str,
    name: &str,
    value: &Node,
    indent: usize,
) -> fmt::Result {
    write_indent(f, indent)?;
    writeln!(f, "({}", label)?;
    write_indent(f, indent + 1)?;
    writeln!(f, "(VarName {})", name)?;
    value.write(f, indent + 1)?;
    writeln!(f)?;
    write_indent(f, indent)?;
    write!(f, ")")
}

/// A labeled list like `(Args …)`, with the closing paren back at the
/// label's level when there are children, or `(Args)` when there aren't.
fn write_block(
    f: &mut fmt::Formatter,
    label: &str,
    items: &[Node],
    indent: usize,
) -> fmt::Result {
    write_indent(f, indent)?;
    write!(f, "({}", label)?;

    for item in items {
        writeln!(f)?;
        item.write(f, indent + 1)?;
    }

    if !items.is_empty() {
        writeln!(f)?;
        write_indent(f, indent)?;
    }

    write!(f, ")")
}

/// A labeled single child, like `(Condition …)`.
fn write_child(
    f: &mut fmt::Formatter,
    label: &str,
    child: &Node,
    indent: usize,
) -> fmt::Result {
    write_indent(f, indent)?;
    writeln!(f, "({}", label)?;
    child.write(f, indent + 1)?;
    writeln!(f)?;
    write_indent(f, indent)?;
    write!(f, ")")
}
