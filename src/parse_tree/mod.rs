//! Parse trees of fully parenthesized integer arithmetic, e.g. `( ( 10 + 5 ) * 3 )`.

use core::fmt;
use core::str::FromStr;

mod build;
mod error;

pub use build::{build_parse_tree, MAX_NESTING_DEPTH};
pub use error::ParseTreeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Applies the operator. Division is true division.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, ParseTreeError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Sub => Ok(lhs - rhs),
            Self::Mul => Ok(lhs * rhs),
            Self::Div if rhs == 0.0 => Err(ParseTreeError::DivisionByZero),
            Self::Div => Ok(lhs / rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A binary expression tree. Leaves are integer operands, inner nodes are operators with exactly
/// two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseTree {
    Operand(i64),
    Operation {
        operator: Operator,
        left: Box<ParseTree>,
        right: Box<ParseTree>,
    },
}

impl ParseTree {
    /// Evaluates the tree recursively.
    pub fn evaluate(&self) -> Result<f64, ParseTreeError> {
        match self {
            Self::Operand(value) => Ok(*value as f64),
            Self::Operation {
                operator,
                left,
                right,
            } => operator.apply(left.evaluate()?, right.evaluate()?),
        }
    }

    /// Evaluates the tree with a post-order walk over an explicit stack.
    pub fn postorder_eval(&self) -> Result<f64, ParseTreeError> {
        enum Visit<'a> {
            Enter(&'a ParseTree),
            Exit(Operator),
        }

        let mut pending = vec![Visit::Enter(self)];
        let mut values: Vec<f64> = Vec::new();

        while let Some(visit) = pending.pop() {
            match visit {
                Visit::Enter(Self::Operand(value)) => values.push(*value as f64),
                Visit::Enter(Self::Operation {
                    operator,
                    left,
                    right,
                }) => {
                    pending.push(Visit::Exit(*operator));
                    pending.push(Visit::Enter(right.as_ref()));
                    pending.push(Visit::Enter(left.as_ref()));
                }
                Visit::Exit(operator) => {
                    // Both children of an operation were visited before its exit, so their
                    // values are the top two entries.
                    let (Some(rhs), Some(lhs)) = (values.pop(), values.pop()) else {
                        unreachable!("operation exited before both operands were evaluated");
                    };
                    values.push(operator.apply(lhs, rhs)?);
                }
            }
        }

        // The walk leaves exactly the value of the root behind.
        debug_assert_eq!(values.len(), 1);
        Ok(values[0])
    }

    /// In-order print that wraps every node, leaves included, in parentheses:
    /// `(((10)+(5))*(3))`.
    pub fn print_exp(&self) -> String {
        match self {
            Self::Operand(value) => format!("({value})"),
            Self::Operation {
                operator,
                left,
                right,
            } => format!("({}{operator}{})", left.print_exp(), right.print_exp()),
        }
    }

    /// Number of operands and operators in the tree.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Operand(_) => 1,
            Self::Operation { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }
}

/// Renders the token form accepted by [`build_parse_tree`], `( ( 10 + 5 ) * 3 )`.
impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand(value) => write!(f, "{value}"),
            Self::Operation {
                operator,
                left,
                right,
            } => write!(f, "( {left} {operator} {right} )"),
        }
    }
}

impl FromStr for ParseTree {
    type Err = ParseTreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        build_parse_tree(s)
    }
}
