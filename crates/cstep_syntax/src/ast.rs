//! Abstract syntax tree for the cstep C subset.
//!
//! The node set is closed: a [`Program`] holds [`Statement`]s, and statements hold [`Expr`]s. Every node carries the
//! line it started on through [`Lined`]. [`ast_to_serializable`] turns a tree into the nested JSON structure handed
//! to transport layers.

use std::fmt;

use cstep_core::lang::operators::OperatorId;
use cstep_core::lang::types::{self, DeclTypeId};
use serde_json::{Map, Value, json};

/// A node with the source line it started on.
#[derive(Debug, Clone, PartialEq)]
pub struct Lined<T> {
    pub node: T,
    pub line: usize,
}

impl<T> Lined<T> {
    pub fn new(node: T, line: usize) -> Self {
        Self { node, line }
    }
}

impl<T: fmt::Display> fmt::Display for Lined<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.node.fmt(f)
    }
}

/// Root of every parse.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Lined<Statement>>,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Declaration(Declaration),
    Assignment(Assignment),
    FunctionCall(FunctionCall),
}

/// `int x;` / `float y = 1.5;`
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub declared_type: DeclTypeId,
    pub name: String,
    pub initializer: Option<Lined<Expr>>,
}

/// `x = expr;`
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub target: String,
    pub value: Lined<Expr>,
}

/// `f(a, b);`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Lined<Expr>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Integer,
    Float,
}

impl NumberKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NumberKind::Integer => "INTEGER",
            NumberKind::Float => "FLOAT",
        }
    }
}

/// Number literal, kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLit {
    pub text: String,
    pub kind: NumberKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberLit),
    /// String literal without its quotes.
    String(String),
    Identifier(String),
    Binary(Box<Lined<Expr>>, BinaryOp, Box<Lined<Expr>>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Map an operator to the binary operation it denotes in expressions.
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        match id {
            OperatorId::Plus => Some(BinaryOp::Add),
            OperatorId::Minus => Some(BinaryOp::Sub),
            OperatorId::Star => Some(BinaryOp::Mul),
            OperatorId::Slash => Some(BinaryOp::Div),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Node kinds and summaries
// ============================================================================

/// Tag for every node variant, as used in serialized output and trace messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    Declaration,
    Assignment,
    BinaryOp,
    Number,
    String,
    Identifier,
    FunctionCall,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::Declaration => "Declaration",
            NodeKind::Assignment => "Assignment",
            NodeKind::BinaryOp => "BinaryOp",
            NodeKind::Number => "Number",
            NodeKind::String => "String",
            NodeKind::Identifier => "Identifier",
            NodeKind::FunctionCall => "FunctionCall",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Statement {
    pub fn kind(&self) -> NodeKind {
        match self {
            Statement::Declaration(_) => NodeKind::Declaration,
            Statement::Assignment(_) => NodeKind::Assignment,
            Statement::FunctionCall(_) => NodeKind::FunctionCall,
        }
    }

    /// One-line description, e.g. `Declaration(int x)`.
    pub fn summary(&self) -> String {
        match self {
            Statement::Declaration(d) => format!("Declaration({} {})", types::as_str(d.declared_type), d.name),
            Statement::Assignment(a) => format!("Assignment({})", a.target),
            Statement::FunctionCall(c) => format!("FunctionCall({})", c.name),
        }
    }
}

impl Expr {
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Number(_) => NodeKind::Number,
            Expr::String(_) => NodeKind::String,
            Expr::Identifier(_) => NodeKind::Identifier,
            Expr::Binary(..) => NodeKind::BinaryOp,
        }
    }

    /// One-line description, e.g. `BinaryOp(+)` or `Number(42)`.
    pub fn summary(&self) -> String {
        match self {
            Expr::Number(n) => format!("Number({})", n.text),
            Expr::String(s) => format!("String(\"{s}\")"),
            Expr::Identifier(name) => format!("Identifier({name})"),
            Expr::Binary(_, op, _) => format!("BinaryOp({op})"),
        }
    }
}

/// Fully parenthesized infix: `a = 1 - 2 - 3` prints its value as `((1 - 2) - 3)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => f.write_str(&n.text),
            Expr::String(s) => write!(f, "\"{s}\""),
            Expr::Identifier(name) => f.write_str(name),
            Expr::Binary(left, op, right) => write!(f, "({left} {op} {right})"),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Declaration(d) => {
                write!(f, "{} {}", types::as_str(d.declared_type), d.name)?;
                if let Some(init) = &d.initializer {
                    write!(f, " = {init}")?;
                }
                f.write_str(";")
            }
            Statement::Assignment(a) => write!(f, "{} = {};", a.target, a.value),
            Statement::FunctionCall(c) => {
                write!(f, "{}(", c.name)?;
                for (i, arg) in c.args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(");")
            }
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            writeln!(f, "{stmt}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Serialization
// ============================================================================

/// Convert a tree to nested JSON: every node has `kind` and `line`, plus its own fields. Child nodes go in
/// `children` in source order; the key is left out when a node has none.
pub fn ast_to_serializable(program: &Program) -> Value {
    let children = program.statements.iter().map(statement_value).collect();
    node(NodeKind::Program, program.line, Map::new(), children)
}

fn statement_value(stmt: &Lined<Statement>) -> Value {
    let mut fields = Map::new();
    let children = match &stmt.node {
        Statement::Declaration(d) => {
            fields.insert("declaredType".into(), json!(types::as_str(d.declared_type)));
            fields.insert("variableName".into(), json!(d.name));
            d.initializer.iter().map(expr_value).collect()
        }
        Statement::Assignment(a) => {
            fields.insert("variableName".into(), json!(a.target));
            let target = Lined::new(Expr::Identifier(a.target.clone()), stmt.line);
            vec![expr_value(&target), expr_value(&a.value)]
        }
        Statement::FunctionCall(c) => {
            fields.insert("functionName".into(), json!(c.name));
            c.args.iter().map(expr_value).collect()
        }
    };
    node(stmt.node.kind(), stmt.line, fields, children)
}

fn expr_value(expr: &Lined<Expr>) -> Value {
    let mut fields = Map::new();
    let children = match &expr.node {
        Expr::Number(n) => {
            fields.insert("value".into(), json!(n.text));
            fields.insert("numberKind".into(), json!(n.kind.as_str()));
            Vec::new()
        }
        Expr::String(s) => {
            fields.insert("value".into(), json!(s));
            Vec::new()
        }
        Expr::Identifier(name) => {
            fields.insert("name".into(), json!(name));
            Vec::new()
        }
        Expr::Binary(left, op, right) => {
            fields.insert("operator".into(), json!(op.as_str()));
            vec![expr_value(left), expr_value(right)]
        }
    };
    node(expr.node.kind(), expr.line, fields, children)
}

fn node(kind: NodeKind, line: usize, fields: Map<String, Value>, children: Vec<Value>) -> Value {
    let mut map = Map::new();
    map.insert("kind".into(), json!(kind.as_str()));
    map.insert("line".into(), json!(line));
    map.extend(fields);
    if !children.is_empty() {
        map.insert("children".into(), Value::Array(children));
    }
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(text: &str, line: usize) -> Lined<Expr> {
        Lined::new(
            Expr::Number(NumberLit {
                text: text.to_string(),
                kind: NumberKind::Integer,
            }),
            line,
        )
    }

    fn bin(left: Lined<Expr>, op: BinaryOp, right: Lined<Expr>) -> Lined<Expr> {
        let line = left.line;
        Lined::new(Expr::Binary(Box::new(left), op, Box::new(right)), line)
    }

    #[test]
    fn test_display_parenthesizes() {
        let e = bin(bin(num("1", 1), BinaryOp::Sub, num("2", 1)), BinaryOp::Sub, num("3", 1));
        assert_eq!(e.to_string(), "((1 - 2) - 3)");
    }

    #[test]
    fn test_binary_op_from_operator() {
        assert_eq!(BinaryOp::from_operator(OperatorId::Star), Some(BinaryOp::Mul));
        assert_eq!(BinaryOp::from_operator(OperatorId::Eq), None);
    }

    #[test]
    fn test_assignment_serializes_identifier_child_first() {
        let program = Program {
            statements: vec![Lined::new(
                Statement::Assignment(Assignment {
                    target: "a".to_string(),
                    value: num("7", 2),
                }),
                2,
            )],
            line: 2,
        };
        let value = ast_to_serializable(&program);
        assert_eq!(
            value,
            json!({
                "kind": "Program",
                "line": 2,
                "children": [{
                    "kind": "Assignment",
                    "line": 2,
                    "variableName": "a",
                    "children": [
                        { "kind": "Identifier", "line": 2, "name": "a" },
                        { "kind": "Number", "line": 2, "value": "7", "numberKind": "INTEGER" }
                    ]
                }]
            })
        );
    }

    #[test]
    fn test_declaration_without_initializer_has_no_children() {
        let program = Program {
            statements: vec![Lined::new(
                Statement::Declaration(Declaration {
                    declared_type: DeclTypeId::Double,
                    name: "d".to_string(),
                    initializer: None,
                }),
                1,
            )],
            line: 1,
        };
        let value = ast_to_serializable(&program);
        let decl = &value["children"][0];
        assert_eq!(decl["declaredType"], "double");
        assert!(decl.get("children").is_none());
        assert_eq!(program.to_string(), "double d;\n");
    }

    #[test]
    fn test_empty_program() {
        let program = Program {
            statements: Vec::new(),
            line: 1,
        };
        assert_eq!(ast_to_serializable(&program), json!({ "kind": "Program", "line": 1 }));
    }
}
