use std::fmt;

use crate::format_number;

/// Width of one indentation level in a rendered tree, connector included.
const INDENT: usize = 3;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Node` is a closed set of variants. Every node exclusively owns its
/// children, so a parsed expression is always a strict tree. Nodes are built
/// bottom-up by the parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A numeric constant: a parsed number or a resolved named constant.
    Literal(f64),
    /// An operator applied to a single operand.
    UnaryOperation {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// An operator applied to two operands.
    BinaryOperation {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Node {
    /// Builds a unary operation node.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::UnaryOperation { op,
                               operand: Box::new(operand) }
    }

    /// Builds a binary operation node.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOperation { op,
                                left: Box::new(left),
                                right: Box::new(right) }
    }

    /// Renders the node as a multi-line indented tree.
    ///
    /// Each operation prints its operator name on one line, followed by its
    /// children. A child's first line is prefixed with `+- `; its remaining
    /// lines are prefixed with `|  ` unless it is the last child, in which case
    /// they are indented with blanks. Literals print their value.
    ///
    /// # Example
    /// ```
    /// use calculator::ast::{BinaryOperator, Node};
    ///
    /// let node = Node::binary(BinaryOperator::Add, Node::Literal(1.0), Node::Literal(2.0));
    /// assert_eq!(node.render(), "Addition\n+- 1\n+- 2");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Literal(value) => format_number(*value),
            Self::UnaryOperation { op, operand } => {
                format!("{op}\n{}", indent(&operand.render(), true))
            },
            Self::BinaryOperation { op, left, right } => format!("{op}\n{}\n{}",
                                                                 indent(&left.render(), false),
                                                                 indent(&right.render(), true)),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Prefixes a rendered child subtree with tree-drawing connectors.
fn indent(text: &str, last: bool) -> String {
    let continuation = if last { ' ' } else { '|' };
    let spacing = " ".repeat(INDENT - 1);

    text.lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                format!("+-{}{line}", " ".repeat(INDENT - 2))
            } else {
                format!("{continuation}{spacing}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Represents a unary operator.
///
/// Unary operators are negation and the built-in functions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Sine, argument in radians.
    Sin,
    /// Cosine, argument in radians.
    Cos,
    /// Tangent, argument in radians.
    Tan,
    /// Square root.
    Sqrt,
}

impl UnaryOperator {
    /// Looks up the function operator for a (case-insensitive) function name.
    ///
    /// Returns `None` for names that are not built-in functions.
    ///
    /// # Example
    /// ```
    /// use calculator::ast::UnaryOperator;
    ///
    /// assert_eq!(UnaryOperator::from_function_name("SQRT"), Some(UnaryOperator::Sqrt));
    /// assert_eq!(UnaryOperator::from_function_name("log"), None);
    /// ```
    #[must_use]
    pub fn from_function_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "sqrt" => Some(Self::Sqrt),
            _ => None,
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Negate => "Negate",
            Self::Sin => "Sin",
            Self::Cos => "Cos",
            Self::Tan => "Tan",
            Self::Sqrt => "Sqrt",
        };
        f.write_str(name)
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Floating-point remainder (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};
        let name = match self {
            Add => "Addition",
            Sub => "Subtraction",
            Mul => "Multiplication",
            Div => "Division",
            Mod => "Modulus",
            Pow => "Power",
        };
        f.write_str(name)
    }
}
