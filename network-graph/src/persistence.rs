//! Line-oriented text format for the fiber network.
//!
//! ```text
//! 2                 kind marker
//! 3                 vertex count
//! 0 "Centro" 0      id, quoted label, ignored field
//! 1 "Vila Nova" 0
//! 2 "Porto" 0
//! 2                 edge count
//! 0 1 10.0          u, v, weight in km
//! 1 2 5.5
//! ```
//!
//! Parsing builds a brand new [`Graph`]; [`Graph::load`] swaps it in only
//! once the whole input has been accepted, so a malformed file never leaves
//! a half-loaded graph behind.

use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::{FromStr, Lines};
use std::sync::OnceLock;

use common::{GraphError, GraphResult, VertexId};
use regex::Regex;
use tracing::{debug, info};

use crate::graph::{format_weight, Edge, Graph};

fn vertex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"^(\d+)\s+"([^"]*)"\s+(-?\d+)$"#).expect("vertex record pattern is valid")
    })
}

/// Walks the source text line by line, tracking 1-based line numbers.
struct LineCursor<'a> {
    lines: Lines<'a>,
    line_no: usize,
}

impl<'a> LineCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line_no: 0,
        }
    }

    fn next_line(&mut self, expected: &str) -> GraphResult<(usize, &'a str)> {
        self.line_no += 1;
        match self.lines.next() {
            Some(line) => Ok((self.line_no, line.trim())),
            None => Err(GraphError::format(
                self.line_no,
                format!("unexpected end of input, expected {expected}"),
            )),
        }
    }

    fn next_number<T: FromStr>(&mut self, expected: &str) -> GraphResult<T> {
        let (line_no, line) = self.next_line(expected)?;
        line.parse::<T>()
            .map_err(|_| GraphError::format(line_no, format!("expected {expected}, found '{line}'")))
    }

    /// Anything after the last record must be blank.
    fn finish(mut self) -> GraphResult<()> {
        for line in self.lines.by_ref() {
            self.line_no += 1;
            if !line.trim().is_empty() {
                return Err(GraphError::format(
                    self.line_no,
                    "unexpected content after the last edge record",
                ));
            }
        }
        Ok(())
    }
}

fn parse_vertex(line_no: usize, line: &str) -> GraphResult<(VertexId, String)> {
    let captures = vertex_pattern().captures(line).ok_or_else(|| {
        GraphError::format(line_no, format!("expected `id \"label\" 0`, found '{line}'"))
    })?;
    let id = captures[1]
        .parse::<VertexId>()
        .ok()
        .filter(|id| id.checked_next().is_some())
        .ok_or_else(|| GraphError::format(line_no, format!("vertex id out of range: '{}'", &captures[1])))?;
    Ok((id, captures[2].to_string()))
}

/// Strict weight parse shared with interactive input: finite and non-negative.
pub fn parse_weight(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|weight| weight.is_finite() && *weight >= 0.0)
}

fn parse_edge(
    line_no: usize,
    line: &str,
    vertices: &BTreeMap<VertexId, String>,
) -> GraphResult<Edge> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [raw_u, raw_v, raw_weight] = fields.as_slice() else {
        return Err(GraphError::format(
            line_no,
            format!("expected `u v weight`, found {} field(s)", fields.len()),
        ));
    };

    let endpoint = |raw: &str| -> GraphResult<VertexId> {
        let id = raw
            .parse::<VertexId>()
            .map_err(|_| GraphError::format(line_no, format!("invalid vertex id '{raw}'")))?;
        if !vertices.contains_key(&id) {
            return Err(GraphError::format(line_no, format!("edge references unknown vertex {id}")));
        }
        Ok(id)
    };
    let u = endpoint(*raw_u)?;
    let v = endpoint(*raw_v)?;
    let weight = parse_weight(raw_weight)
        .ok_or_else(|| GraphError::format(line_no, format!("invalid weight '{raw_weight}'")))?;

    Ok(Edge::new(u, v, weight))
}

impl Graph {
    /// Parse a complete graph from its text form.
    pub fn parse(text: &str) -> GraphResult<Graph> {
        let mut cursor = LineCursor::new(text);

        let kind = cursor.next_number::<i64>("graph kind marker")?;

        let vertex_count = cursor.next_number::<usize>("vertex count")?;
        let mut vertices = BTreeMap::new();
        for _ in 0..vertex_count {
            let (line_no, line) = cursor.next_line("vertex record")?;
            let (id, label) = parse_vertex(line_no, line)?;
            if vertices.insert(id, label).is_some() {
                return Err(GraphError::format(line_no, format!("duplicate vertex id {id}")));
            }
        }

        let edge_count = cursor.next_number::<usize>("edge count")?;
        let mut edges = Vec::new();
        for _ in 0..edge_count {
            let (line_no, line) = cursor.next_line("edge record")?;
            edges.push(parse_edge(line_no, line, &vertices)?);
        }

        cursor.finish()?;
        debug!(kind, vertices = vertices.len(), edges = edges.len(), "parsed graph");
        Ok(Graph::from_parts(kind, vertices, edges))
    }

    /// Parse a graph from any reader.
    pub fn read_from<R: Read>(mut reader: R) -> GraphResult<Graph> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Graph::parse(&text)
    }

    /// Replace this graph with the one read from `reader`.
    ///
    /// On error `self` is left exactly as it was.
    pub fn load<R: Read>(&mut self, reader: R) -> GraphResult<()> {
        *self = Graph::read_from(reader)?;
        Ok(())
    }

    /// Replace this graph with the contents of the file at `path`.
    pub fn load_from_path(&mut self, path: impl AsRef<Path>) -> GraphResult<()> {
        let path = path.as_ref();
        let file = File::open(path)?;
        self.load(BufReader::new(file))?;
        info!(
            path = %path.display(),
            vertices = self.vertex_count(),
            edges = self.edge_count(),
            "loaded graph"
        );
        Ok(())
    }

    /// Write the text form of this graph.
    pub fn save<W: Write>(&self, mut writer: W) -> GraphResult<()> {
        write!(writer, "{self}")?;
        writer.flush()?;
        Ok(())
    }

    /// Write the text form to the file at `path`, creating or truncating it.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> GraphResult<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.save(BufWriter::new(file))?;
        info!(
            path = %path.display(),
            vertices = self.vertex_count(),
            edges = self.edge_count(),
            "saved graph"
        );
        Ok(())
    }

    /// Text form as an owned string.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

/// The persisted text form.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.kind())?;
        writeln!(f, "{}", self.vertex_count())?;
        for (id, label) in self.vertices() {
            writeln!(f, "{id} \"{label}\" 0")?;
        }
        writeln!(f, "{}", self.edge_count())?;
        for edge in self.edges() {
            writeln!(f, "{} {} {}", edge.u, edge.v, format_weight(edge.weight))?;
        }
        Ok(())
    }
}
