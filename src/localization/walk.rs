use std::fmt;

use serde_json::{Map, Value};

pub const CHILDREN_KEY: &str = "children";
pub const TEXT_KEY: &str = "text";

/// Index path of a text node inside the text list (block, then children).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(Vec<usize>);

impl Position {
    pub fn block(&self) -> usize {
        self.0.first().copied().unwrap_or_default()
    }

    fn push(&mut self, index: usize) {
        self.0.push(index);
    }

    fn pop(&mut self) {
        self.0.pop();
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(usize::to_string).collect();
        f.write_str(&parts.join("/"))
    }
}

impl From<Vec<usize>> for Position {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

/// Visit every text node of the text list, in order.
///
/// Blocks without a `children` array are ignored. A child with a `text`
/// object is a text node; a child without `text` but with `children` is
/// walked recursively.
pub fn visit_text_nodes<F>(blocks: &[Value], mut visit: F)
where
    F: FnMut(&Position, &Map<String, Value>),
{
    let mut position = Position::default();
    for (index, block) in blocks.iter().enumerate() {
        if let Some(children) = block.get(CHILDREN_KEY).and_then(Value::as_array) {
            position.push(index);
            visit_children(children, &mut position, &mut visit);
            position.pop();
        }
    }
}

fn visit_children<F>(children: &[Value], position: &mut Position, visit: &mut F)
where
    F: FnMut(&Position, &Map<String, Value>),
{
    for (index, child) in children.iter().enumerate() {
        position.push(index);
        if let Some(text) = child.get(TEXT_KEY) {
            if let Value::Object(map) = text {
                visit(position, map);
            }
        } else if let Some(nested) = child.get(CHILDREN_KEY).and_then(Value::as_array) {
            visit_children(nested, position, visit);
        }
        position.pop();
    }
}

/// Mutable counterpart of [`visit_text_nodes`].
pub fn visit_text_nodes_mut<F>(blocks: &mut [Value], mut visit: F)
where
    F: FnMut(&Position, &mut Map<String, Value>),
{
    let mut position = Position::default();
    for (index, block) in blocks.iter_mut().enumerate() {
        if let Some(children) = block.get_mut(CHILDREN_KEY).and_then(Value::as_array_mut) {
            position.push(index);
            visit_children_mut(children, &mut position, &mut visit);
            position.pop();
        }
    }
}

fn visit_children_mut<F>(children: &mut [Value], position: &mut Position, visit: &mut F)
where
    F: FnMut(&Position, &mut Map<String, Value>),
{
    for (index, child) in children.iter_mut().enumerate() {
        position.push(index);
        let Some(child) = child.as_object_mut() else {
            position.pop();
            continue;
        };
        if child.contains_key(TEXT_KEY) {
            if let Some(Value::Object(map)) = child.get_mut(TEXT_KEY) {
                visit(position, map);
            }
        } else if let Some(nested) = child.get_mut(CHILDREN_KEY).and_then(Value::as_array_mut) {
            visit_children_mut(nested, position, visit);
        }
        position.pop();
    }
}
