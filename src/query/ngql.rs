//! nGQL statement rendering

use crate::graph::VertexId;
use std::fmt;

/// Quote a string literal, escaping backslashes and double quotes
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// The statements this crate issues
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Use {
        space: String,
    },
    /// Upsert a vertex carrying one string property
    InsertVertex {
        tag: String,
        property: String,
        vid: VertexId,
        value: String,
    },
    /// Insert an edge carrying one integer property
    InsertEdge {
        edge_type: String,
        property: String,
        src: VertexId,
        dst: VertexId,
        value: i64,
    },
    /// Everything reachable from `seed` within `steps` hops, both directions
    GetSubgraph {
        steps: u32,
        seed: VertexId,
        vertices_as: String,
        edges_as: String,
    },
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Use { space } => write!(f, "USE {}", space),
            Statement::InsertVertex {
                tag,
                property,
                vid,
                value,
            } => write!(
                f,
                "INSERT VERTEX {}({}) VALUES {}:({})",
                tag,
                property,
                quote(vid.as_str()),
                quote(value)
            ),
            Statement::InsertEdge {
                edge_type,
                property,
                src,
                dst,
                value,
            } => write!(
                f,
                "INSERT EDGE {}({}) VALUES {}->{}:({})",
                edge_type,
                property,
                quote(src.as_str()),
                quote(dst.as_str()),
                value
            ),
            Statement::GetSubgraph {
                steps,
                seed,
                vertices_as,
                edges_as,
            } => write!(
                f,
                "GET SUBGRAPH WITH PROP {} STEPS FROM {} YIELD VERTICES AS {}, EDGES AS {}",
                steps,
                quote(seed.as_str()),
                vertices_as,
                edges_as
            ),
        }
    }
}

/// Statements sent together in one `execute` call
///
/// Renders each statement terminated by `;`, with no separator between
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch(Vec<Statement>);

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    /// A batch starting with `USE space`
    pub fn in_space(space: impl Into<String>) -> Self {
        Self(vec![Statement::Use { space: space.into() }])
    }

    pub fn push(mut self, statement: Statement) -> Self {
        self.0.push(statement);
        self
    }

    pub fn statements(&self) -> &[Statement] {
        &self.0
    }
}

impl fmt::Display for Batch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.0 {
            write!(f, "{};", statement)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_escapes_quotes_and_backslashes() {
        assert_eq!(quote("Alice"), "\"Alice\"");
        assert_eq!(quote(r#"Al "Bo" \x"#), r#""Al \"Bo\" \\x""#);
    }

    #[test]
    fn quote_keeps_non_ascii() {
        assert_eq!(quote("Bär"), "\"Bär\"");
    }

    #[test]
    fn batch_renders_row_upsert() {
        let batch = Batch::in_space("eventRelations")
            .push(Statement::InsertVertex {
                tag: "person".into(),
                property: "fullname".into(),
                vid: "Alice".into(),
                value: "Alice".into(),
            })
            .push(Statement::InsertEdge {
                edge_type: "event".into(),
                property: "event_id".into(),
                src: "Alice".into(),
                dst: "Bob".into(),
                value: 42,
            });

        assert_eq!(
            batch.to_string(),
            "USE eventRelations;\
             INSERT VERTEX person(fullname) VALUES \"Alice\":(\"Alice\");\
             INSERT EDGE event(event_id) VALUES \"Alice\"->\"Bob\":(42);"
        );
    }
}
