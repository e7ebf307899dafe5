//! The abstract syntax tree.
//!
//! [`Node`] is a single closed enum with one variant per syntactic
//! construct, like the syntax tree enums in the [`syn`][syn-crate] crate.
//! Each node owns its children outright - the tree is never aliased after
//! construction, so plain owned values ([`Box`], [`Vec`]) are all the
//! sharing we need.
//!
//! [syn-crate]: https://docs.rs/syn/latest/syn/enum.Expr.html#syntax-tree-enums

mod print;

/// One node of the syntax tree.
///
/// A successful parse produces a [`Node::Program`] which owns the full
/// tree. The `End`, `Elif` and `Else` variants are markers used by the
/// body-parsing loops to know where a block stops; they never appear in a
/// finished tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// The root: an ordered sequence of top-level statements.
    Program(Vec<Node>),

    /// `let name = value`, an immutable definition.
    Let { name: String, value: Box<Node> },

    /// `mut name = value`, a mutable definition.
    Mut { name: String, value: Box<Node> },

    /// `name = value` or `name op= value`. The operator is `None` for a
    /// plain `=`.
    Assignment {
        name: String,
        operator: Option<String>,
        value: Box<Node>,
    },

    /// `fun (a: T, …) -> T … end`. Arguments are [`Node::Argument`]s.
    Function {
        arguments: Vec<Node>,
        return_type: String,
        body: Vec<Node>,
    },

    /// `use (a, …) (b: T, …) -> T … end`, a function with an explicit
    /// capture list of [`Node::Capture`]s.
    Closure {
        captures: Vec<Node>,
        arguments: Vec<Node>,
        return_type: String,
        body: Vec<Node>,
    },

    /// `object.field(args…)`.
    ClosureFieldCall {
        object: String,
        field: String,
        arguments: Vec<Node>,
    },

    /// `object.field`, with no argument list.
    ClosureFieldRead { object: String, field: String },

    /// `if … then … elif … else … end`. Each elif group is itself an
    /// [`Node::IfClause`] with empty `elifs` and `else_body`.
    IfClause {
        condition: Box<Node>,
        body: Vec<Node>,
        elifs: Vec<Node>,
        else_body: Vec<Node>,
    },

    /// `while … do … end`. The grammar for this is not settled yet; the
    /// parser never produces one.
    WhileLoop {
        condition: Box<Node>,
        body: Vec<Node>,
    },

    /// An integer literal.
    Integer(i64),

    /// A float literal. The fractional part is mandatory in the grammar,
    /// which is what distinguishes floats from integers.
    Float(f64),

    /// A string literal. The value is verbatim source text - there are no
    /// escape sequences.
    String(String),

    /// `true` or `false`.
    Bool(bool),

    /// A variable reference.
    VarUse(String),

    /// An operator's lexeme, only ever inside an [`Node::OperationsList`].
    Operator(String),

    /// A flat, alternating sequence of operands and operators. Precedence
    /// is deliberately not resolved here; that's a later stage's job.
    OperationsList(Vec<Node>),

    /// `name(args…)`.
    FunctionCall { name: String, arguments: Vec<Node> },

    /// The `end` keyword closing a block. Marker only.
    End,

    /// The `elif` keyword. Marker only.
    Elif,

    /// The `else` keyword. Marker only.
    Else,

    /// One `name: Type` pair in a function's argument list.
    Argument { name: String, type_name: String },

    /// One name in a closure's capture list.
    Capture(String),
}

impl Node {
    /// Is this one of the block-terminator markers that must never appear
    /// in a finished tree?
    pub fn is_marker(&self) -> bool {
        matches!(self, Node::End | Node::Elif | Node::Else)
    }
}
