//! Store-native result values
//!
//! The store hands back typed cells: scalars, lists, and graph records
//! (nodes and relationships). Accessors fail with a [`ResponseError`] when a
//! cell does not have the expected shape, so parsers fail fast instead of
//! silently producing partial graphs.

use crate::graph::VertexId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// The response did not have the shape a parser expected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    #[error("response has no column '{0}'")]
    MissingColumn(String),

    #[error("expected {expected}, found {found}")]
    UnexpectedValue {
        expected: &'static str,
        found: &'static str,
    },

    #[error("relationship {src}->{dst} has no property '{key}'")]
    MissingProperty {
        src: VertexId,
        dst: VertexId,
        key: String,
    },
}

/// Properties collection
pub type Properties = BTreeMap<String, Value>;

/// A vertex record as returned by scans and traversals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub vid: VertexId,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub properties: Properties,
}

impl NodeRecord {
    pub fn new(vid: impl Into<VertexId>) -> Self {
        Self {
            vid: vid.into(),
            tags: Vec::new(),
            properties: Properties::new(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn id(&self) -> &VertexId {
        &self.vid
    }
}

/// An edge record as returned by scans and traversals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipRecord {
    pub src: VertexId,
    pub dst: VertexId,
    #[serde(default)]
    pub edge_name: String,
    #[serde(default)]
    pub rank: i64,
    #[serde(default)]
    pub properties: Properties,
}

impl RelationshipRecord {
    pub fn new(src: impl Into<VertexId>, dst: impl Into<VertexId>, edge_name: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
            edge_name: edge_name.into(),
            rank: 0,
            properties: Properties::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    pub fn source_id(&self) -> &VertexId {
        &self.src
    }

    pub fn target_id(&self) -> &VertexId {
        &self.dst
    }

    /// Integer value of the property `key`
    pub fn int_property(&self, key: &str) -> Result<i64, ResponseError> {
        self.properties
            .get(key)
            .ok_or_else(|| ResponseError::MissingProperty {
                src: self.src.clone(),
                dst: self.dst.clone(),
                key: key.to_string(),
            })?
            .as_int()
    }
}

/// A single cell of a store result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Node(NodeRecord),
    Relationship(RelationshipRecord),
}

impl Value {
    /// Name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Node(_) => "node",
            Value::Relationship(_) => "relationship",
        }
    }

    fn unexpected(&self, expected: &'static str) -> ResponseError {
        ResponseError::UnexpectedValue {
            expected,
            found: self.kind(),
        }
    }

    pub fn as_node(&self) -> Result<&NodeRecord, ResponseError> {
        match self {
            Value::Node(node) => Ok(node),
            other => Err(other.unexpected("node")),
        }
    }

    pub fn as_relationship(&self) -> Result<&RelationshipRecord, ResponseError> {
        match self {
            Value::Relationship(rel) => Ok(rel),
            other => Err(other.unexpected("relationship")),
        }
    }

    pub fn as_list(&self) -> Result<&[Value], ResponseError> {
        match self {
            Value::List(items) => Ok(items),
            other => Err(other.unexpected("list")),
        }
    }

    pub fn as_int(&self) -> Result<i64, ResponseError> {
        match self {
            Value::Int(i) => Ok(*i),
            other => Err(other.unexpected("int")),
        }
    }

    pub fn as_str(&self) -> Result<&str, ResponseError> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.unexpected("string")),
        }
    }
}

impl From<NodeRecord> for Value {
    fn from(node: NodeRecord) -> Self {
        Value::Node(node)
    }
}

impl From<RelationshipRecord> for Value {
    fn from(rel: RelationshipRecord) -> Self {
        Value::Relationship(rel)
    }
}

/// A columnar query result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<Value>>,
}

impl ResultSet {
    /// A result with no columns, as returned by write statements
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn with_row(mut self, row: Vec<Value>) -> Self {
        self.rows.push(row);
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cells of the column `name`, in row order
    pub fn column_values(&self, name: &str) -> Result<Vec<&Value>, ResponseError> {
        let index = self
            .columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| ResponseError::MissingColumn(name.to_string()))?;

        self.rows
            .iter()
            .map(|row| row.get(index).ok_or_else(|| ResponseError::MissingColumn(name.to_string())))
            .collect()
    }
}
