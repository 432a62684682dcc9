use super::{Operator, ParseTree, ParseTreeError};

#[derive(Debug, Clone, Copy)]
enum NodeValue {
    Operand(i64),
    Operator(Operator),
}

#[derive(Debug, Default)]
struct Node {
    value: Option<NodeValue>,
    left: Option<usize>,
    right: Option<usize>,
}

/// Nodes of a tree under construction, addressed by index.
#[derive(Debug, Default)]
struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    fn push(&mut self) -> usize {
        self.nodes.push(Node::default());
        self.nodes.len() - 1
    }

    fn to_tree(&self, index: usize) -> Result<ParseTree, ParseTreeError> {
        let node = &self.nodes[index];

        match (node.value, node.left, node.right) {
            (Some(NodeValue::Operand(value)), None, None) => Ok(ParseTree::Operand(value)),
            (Some(NodeValue::Operator(operator)), Some(left), Some(right)) => {
                Ok(ParseTree::Operation {
                    operator,
                    left: Box::new(self.to_tree(left)?),
                    right: Box::new(self.to_tree(right)?),
                })
            }
            _ => Err(ParseTreeError::Incomplete),
        }
    }
}

/// Deepest nesting `build_parse_tree` accepts. Evaluation, printing and dropping a tree recurse
/// once per level, so this bounds their stack use.
pub const MAX_NESTING_DEPTH: usize = 512;

fn unexpected(token: &str, position: usize) -> ParseTreeError {
    ParseTreeError::UnexpectedToken {
        token: token.to_owned(),
        position,
    }
}

/// Builds the parse tree of a fully parenthesized expression such as `( ( 10 + 5 ) * 3 )`.
///
/// Tokens are separated by whitespace. The tree is grown top-down while the tokens are consumed:
///
/// - `(` adds a left child to the current node and descends into it.
/// - An operator fills the current node, adds a right child and descends into it.
/// - An integer fills the current node and returns to its parent.
/// - `)` returns to the parent of the current node.
///
/// Every operation must be wrapped in its own pair of parentheses, a bare integer is a valid
/// expression. Nesting deeper than [`MAX_NESTING_DEPTH`] fails with
/// [`ParseTreeError::TooDeep`].
pub fn build_parse_tree(expression: &str) -> Result<ParseTree, ParseTreeError> {
    let mut arena = Arena::default();
    let root = arena.push();

    let mut parents = vec![root];
    let mut current = root;
    let mut token_count = 0;

    for (position, token) in expression.split_whitespace().enumerate() {
        token_count += 1;

        match token {
            "(" => {
                let node = &arena.nodes[current];
                if node.value.is_some() || node.left.is_some() {
                    return Err(unexpected(token, position));
                }
                if parents.len() > MAX_NESTING_DEPTH {
                    return Err(ParseTreeError::TooDeep { position });
                }

                let left = arena.push();
                arena.nodes[current].left = Some(left);
                parents.push(current);
                current = left;
            }
            ")" => {
                current = parents
                    .pop()
                    .ok_or(ParseTreeError::UnbalancedParens { position })?;
            }
            _ => {
                if let Some(operator) = Operator::from_token(token) {
                    let node = &arena.nodes[current];
                    if node.value.is_some() || node.left.is_none() {
                        return Err(unexpected(token, position));
                    }
                    if parents.len() > MAX_NESTING_DEPTH {
                        return Err(ParseTreeError::TooDeep { position });
                    }

                    let right = arena.push();
                    let node = &mut arena.nodes[current];
                    node.value = Some(NodeValue::Operator(operator));
                    node.right = Some(right);
                    parents.push(current);
                    current = right;
                } else {
                    let value = token
                        .parse::<i64>()
                        .map_err(|_| ParseTreeError::InvalidToken {
                            token: token.to_owned(),
                            position,
                        })?;

                    let node = &mut arena.nodes[current];
                    if node.value.is_some() || node.left.is_some() {
                        return Err(unexpected(token, position));
                    }

                    node.value = Some(NodeValue::Operand(value));
                    current = parents
                        .pop()
                        .ok_or(ParseTreeError::UnbalancedParens { position })?;
                }
            }
        }
    }

    if token_count == 0 {
        return Err(ParseTreeError::Empty);
    }

    if !parents.is_empty() {
        return Err(ParseTreeError::UnbalancedParens {
            position: token_count,
        });
    }

    log::debug!(
        "built parse tree with {} nodes from {token_count} tokens",
        arena.nodes.len()
    );

    arena.to_tree(root)
}
