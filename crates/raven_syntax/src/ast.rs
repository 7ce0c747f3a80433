//! Abstract syntax tree for the Raven language.
//!
//! The tree is **homogeneous**: every node is the same [`Node`] struct, and the
//! [`NodeKind`] discriminant plus an optional [`Payload`] carry all variant data.
//! Children are owned in declaration order, so a `FuncDecl` node holds its
//! decorators, name, parameters, return type, and body statements as one flat
//! child list.
//!
//! ## Notes
//! - Nodes never store raw positions; each carries a `LocationId` into the
//!   reporter's location table.
//! - [`display_tree`] is the canonical debug rendering and is pure: the same
//!   tree always renders the same string.

use raven_core::LocationId;

// ============================================================================
// NODE KINDS
// ============================================================================

/// Discriminant for every node in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Top-level container for a whole source file.
    Root,

    // ========== Literals ==========
    IntLit,
    FloatLit,
    StringLit,
    BoolLit,
    TagLit,
    ArrayLit,
    MapLit,
    /// One `[key]: value` pair inside a `MapLit`. Children: key expr, value expr.
    MapEntry,

    // ========== Names ==========
    Ident,

    // ========== Types ==========
    PrimitiveType,
    /// `[T]`. Child: element type.
    ArrayType,
    /// `{K, V}`. Children: key type, value type.
    MapType,
    /// `(params...) ret`. Children: parameter types, then return type.
    FunctionType,

    // ========== Declarations ==========
    /// `let`/`const` binding. Children: Mutability, Ident, optional type, optional initializer.
    VarDecl,
    FuncDecl,
    StructDecl,
    EnumDecl,

    // ========== Declaration pieces ==========
    /// Payload `Ident("let")` or `Ident("const")`.
    Mutability,
    /// `name: type [= default]`. Children: Ident, type, optional default expr.
    Param,
    /// `...name: type`.
    VariadicParam,
    SelfParam,
    /// Struct member variable. Payload `Bool(true)` when marked `private`.
    Field,
    /// `@name` before a function. Payload: the name.
    Decorator,
    EnumMember,

    // ========== Statements ==========
    IfStmt,
    SwitchStmt,
    /// One `case expr: stmts` arm, or the `default:` arm with no test child.
    SwitchCase,
    DeferStmt,
    ReturnStmt,
    ThrowStmt,
    TryStmt,
    Block,
    /// An expression evaluated for effect.
    ExprStmt,

    // ========== Expressions ==========
    /// Prefix operation. Payload: operator spelling. Child: operand.
    Unary,
    /// Infix operation. Payload: operator spelling. Children: lhs, rhs.
    Binary,
    /// Children: callee, then arguments.
    Call,
    /// Children: subject, index expr.
    Index,
    /// Children: subject, member Ident.
    Member,
}

// ============================================================================
// PAYLOAD
// ============================================================================

/// Literal or name data attached to a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Tag(String),
    Ident(String),
}

impl std::fmt::Display for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Payload::Int(v) => write!(f, "{v}"),
            Payload::Float(v) => write!(f, "{v}"),
            Payload::Str(v) => write!(f, "{v:?}"),
            Payload::Bool(v) => write!(f, "{v}"),
            Payload::Tag(v) => write!(f, "#{v}"),
            Payload::Ident(v) => write!(f, "{v}"),
        }
    }
}

// ============================================================================
// NODE
// ============================================================================

/// A single tree node: kind, optional payload, owned children, interned location.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub payload: Option<Payload>,
    pub children: Vec<Node>,
    pub location: LocationId,
}

impl Node {
    /// Construct a payload-free node with no children.
    pub fn new(kind: NodeKind, location: LocationId) -> Self {
        Self {
            kind,
            payload: None,
            children: Vec::new(),
            location,
        }
    }

    /// Construct a node carrying a payload.
    pub fn with_payload(kind: NodeKind, payload: Payload, location: LocationId) -> Self {
        Self {
            kind,
            payload: Some(payload),
            children: Vec::new(),
            location,
        }
    }

    /// Append a child, preserving declaration order.
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// True if any direct child has the given kind.
    pub fn has_child(&self, kind: NodeKind) -> bool {
        self.children.iter().any(|c| c.kind == kind)
    }

    /// Index of the first direct child with the given kind.
    pub fn child_index(&self, kind: NodeKind) -> Option<usize> {
        self.children.iter().position(|c| c.kind == kind)
    }
}

// ============================================================================
// TREE DISPLAY
// ============================================================================

/// Render a tree as indented text, two spaces per depth level.
///
/// Each line is `Kind` or `Kind: payload`, followed by the node's children one
/// level deeper. The function is pure and does not consult any location table.
pub fn display_tree(node: &Node, depth: usize) -> String {
    let mut out = String::new();
    write_node(node, depth, &mut out);
    out
}

fn write_node(node: &Node, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    match &node.payload {
        Some(payload) => out.push_str(&format!("{:?}: {payload}\n", node.kind)),
        None => out.push_str(&format!("{:?}\n", node.kind)),
    }
    for child in &node.children {
        write_node(child, depth + 1, out);
    }
}

// ============================================================================
// TESTS
// ============================================================================
