//! JSON value types.
//!
//! [`Node`] is a closed tagged union over the seven JSON representations.
//! Exactly one variant is active, and no coercion happens in storage: an
//! integer stays an [`Node::Int`] until a caller explicitly widens it via
//! [`Node::as_double`].
//!
//! Nested arrays and objects own their children, so a tree of nodes has
//! strictly hierarchical lifetime.

use std::collections::BTreeMap;

use crate::error::TypeMismatch;

/// Ordered sequence of nodes.
pub type Array = Vec<Node>;

/// Mapping from key to node. Iteration follows key order, not insertion order.
pub type Dict = BTreeMap<String, Node>;

/// A single JSON value.
///
/// Equality is structural and variant-aware: `Int(3)` and `Double(3.0)`
/// are different values.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    /// JSON null literal
    #[default]
    Null,
    /// JSON boolean
    Bool(bool),
    /// Number without fraction or exponent that fits in 32 bits
    Int(i32),
    /// Number stored as double precision float
    Double(f64),
    /// JSON string
    String(String),
    /// JSON array
    Array(Array),
    /// JSON object with unique keys
    Object(Dict),
}

impl Node {
    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Node::Bool(_))
    }

    /// Returns true if this is an integer value.
    pub fn is_int(&self) -> bool {
        matches!(self, Node::Int(_))
    }

    /// Returns true if this value is usable as a float, i.e. it holds either
    /// a double or an integer.
    ///
    /// Use [`Node::is_pure_double`] to test the stored representation.
    pub fn is_double(&self) -> bool {
        matches!(self, Node::Double(_) | Node::Int(_))
    }

    /// Returns true only if the stored representation is a double.
    pub fn is_pure_double(&self) -> bool {
        matches!(self, Node::Double(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, Node::String(_))
    }

    /// Returns true if this is an array value.
    pub fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    /// Returns true if this is an object value.
    pub fn is_map(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    /// Returns the boolean if this is a Bool.
    pub fn as_bool(&self) -> Result<bool, TypeMismatch> {
        match self {
            Node::Bool(b) => Ok(*b),
            _ => Err(self.mismatch("bool")),
        }
    }

    /// Returns the integer if this is an Int.
    pub fn as_int(&self) -> Result<i32, TypeMismatch> {
        match self {
            Node::Int(n) => Ok(*n),
            _ => Err(self.mismatch("int")),
        }
    }

    /// Returns the number as f64, widening an Int.
    pub fn as_double(&self) -> Result<f64, TypeMismatch> {
        match self {
            Node::Double(d) => Ok(*d),
            Node::Int(n) => Ok(f64::from(*n)),
            _ => Err(self.mismatch("double")),
        }
    }

    /// Returns a reference to the string if this is a String.
    pub fn as_string(&self) -> Result<&str, TypeMismatch> {
        match self {
            Node::String(s) => Ok(s),
            _ => Err(self.mismatch("string")),
        }
    }

    /// Returns a reference to the elements if this is an Array.
    pub fn as_array(&self) -> Result<&Array, TypeMismatch> {
        match self {
            Node::Array(a) => Ok(a),
            _ => Err(self.mismatch("array")),
        }
    }

    /// Returns a reference to the entries if this is an Object.
    pub fn as_map(&self) -> Result<&Dict, TypeMismatch> {
        match self {
            Node::Object(o) => Ok(o),
            _ => Err(self.mismatch("map")),
        }
    }

    /// Get a value from an object by key.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Get a value from an array by index.
    pub fn get_index(&self, index: usize) -> Option<&Node> {
        match self {
            Node::Array(arr) => arr.get(index),
            _ => None,
        }
    }

    /// Returns the type name as a string for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "bool",
            Node::Int(_) => "int",
            Node::Double(_) => "double",
            Node::String(_) => "string",
            Node::Array(_) => "array",
            Node::Object(_) => "map",
        }
    }

    fn mismatch(&self, expected: &'static str) -> TypeMismatch {
        TypeMismatch {
            expected,
            found: self.type_name(),
        }
    }
}

impl From<()> for Node {
    fn from(_: ()) -> Self {
        Node::Null
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Bool(value)
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::Int(value)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Double(value)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::String(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::String(value.to_string())
    }
}

impl From<Array> for Node {
    fn from(value: Array) -> Self {
        Node::Array(value)
    }
}

impl From<Dict> for Node {
    fn from(value: Dict) -> Self {
        Node::Object(value)
    }
}

/// A parsed JSON document owning exactly one root node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    root: Node,
}

impl Document {
    /// Wrap a root node.
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// Borrow the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Take ownership of the root node.
    pub fn into_root(self) -> Node {
        self.root
    }
}

impl From<Node> for Document {
    fn from(root: Node) -> Self {
        Self::new(root)
    }
}
