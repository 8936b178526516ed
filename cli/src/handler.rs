//! Command handler - reads fields, runs the graph operation, prints the result.
//!
//! Every prompted field is converted to its typed value before the graph is
//! touched, so a bad field aborts the command with the graph unchanged.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use network_graph::{
    build_mst, check_connectivity, connected_components, format_weight, parse_weight, Connectivity,
    VertexId,
};
use tracing::{debug, info, warn};

use crate::error::{CliError, CliResult};
use crate::menu::{Command, OPTIONS, TITLE};
use crate::state::Session;

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Line-based prompt/print surface over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    pub fn say(&mut self, text: impl Display) -> CliResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Show `message` and read one line without its terminator.
    pub fn prompt(&mut self, message: &str) -> CliResult<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(CliError::EndOfInput);
        }
        let line = String::from_utf8(bytes)
            .map_err(|e| CliError::invalid("input", String::from_utf8_lossy(e.as_bytes()).trim_end()))?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Give back the writer, e.g. to inspect a captured transcript.
    pub fn into_output(self) -> W {
        self.output
    }
}

fn parse_field<T: FromStr>(field: &'static str, raw: &str) -> CliResult<T> {
    raw.trim().parse::<T>().map_err(|_| CliError::invalid(field, raw))
}

fn read_vertex_id<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    message: &str,
) -> CliResult<VertexId> {
    let raw = console.prompt(message)?;
    parse_field("vertex id", &raw)
}

fn read_weight<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CliResult<f64> {
    let raw = console.prompt("Weight (distance in km): ")?;
    parse_weight(&raw).ok_or_else(|| CliError::invalid("weight", raw))
}

/// Labels are kept as typed but must stay representable in the quoted file
/// format.
fn read_label<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CliResult<String> {
    let raw = console.prompt("Name of the new vertex: ")?;
    if raw.trim().is_empty() || raw.contains('"') {
        return Err(CliError::invalid("vertex label", raw));
    }
    Ok(raw)
}

/// Print the menu and read a selection.
pub fn read_command<R: BufRead, W: Write>(console: &mut Console<R, W>) -> CliResult<Command> {
    console.say("")?;
    console.say(TITLE)?;
    for (key, command) in OPTIONS {
        console.say(format_args!("{key}. {}", command.description()))?;
    }
    let selection = console.prompt("Option: ")?;
    Command::from_selection(&selection)
}

/// Carry out one command against the session.
pub fn handle_command<R: BufRead, W: Write>(
    session: &mut Session,
    command: Command,
    console: &mut Console<R, W>,
) -> CliResult<Flow> {
    debug!(?command, "handling command");

    match command {
        Command::Load => {
            session.graph.load_from_path(&session.path)?;
            console.say(format_args!(
                "Graph loaded from {}: {} vertices, {} edges.",
                session.path.display(),
                session.graph.vertex_count(),
                session.graph.edge_count()
            ))?;
        }

        Command::Save => {
            session.graph.save_to_path(&session.path)?;
            console.say(format_args!("Graph saved to {}.", session.path.display()))?;
        }

        Command::AddVertex => {
            let label = read_label(console)?;
            let id = session.graph.insert_vertex(label.as_str());
            console.say(format_args!("Vertex '{label}' added with id {id}."))?;
        }

        Command::AddEdge => {
            let u = read_vertex_id(console, "Source vertex id: ")?;
            let v = read_vertex_id(console, "Destination vertex id: ")?;
            let weight = read_weight(console)?;
            session.graph.insert_edge(u, v, weight)?;
            console.say(format_args!(
                "Edge {u} - {v} with weight {} added.",
                format_weight(weight)
            ))?;
        }

        Command::RemoveVertex => {
            let id = read_vertex_id(console, "Id of the vertex to remove: ")?;
            session.graph.remove_vertex(id)?;
            console.say(format_args!("Vertex {id} removed with its edges."))?;
        }

        Command::RemoveEdge => {
            let u = read_vertex_id(console, "Source vertex id: ")?;
            let v = read_vertex_id(console, "Destination vertex id: ")?;
            let removed = session.graph.remove_edge(u, v);
            console.say(format_args!("Edges removed: {removed}"))?;
        }

        Command::ShowContents => show_contents(session, console)?,

        Command::ShowAdjacency => show_adjacency(session, console)?,

        Command::CheckConnectivity => check_and_reduce(session, console)?,

        Command::Quit => {
            console.say("Closing application...")?;
            return Ok(Flow::Quit);
        }
    }

    Ok(Flow::Continue)
}

fn show_contents<R: BufRead, W: Write>(session: &Session, console: &mut Console<R, W>) -> CliResult<()> {
    let graph = &session.graph;
    console.say(format_args!("Graph kind: {}", graph.kind()))?;
    console.say("Vertices:")?;
    for (id, label) in graph.vertices() {
        console.say(format_args!("  {id}: {label}"))?;
    }
    console.say("Edges:")?;
    for edge in graph.edges() {
        console.say(format_args!(
            "  {} - {} : {} {}",
            edge.u,
            edge.v,
            format_weight(edge.weight),
            session.unit
        ))?;
    }
    Ok(())
}

fn show_adjacency<R: BufRead, W: Write>(session: &Session, console: &mut Console<R, W>) -> CliResult<()> {
    for (id, neighbors) in session.graph.adjacency_view() {
        let links: Vec<String> = neighbors
            .iter()
            .map(|(neighbor, weight)| format!("{neighbor}({})", format_weight(*weight)))
            .collect();
        if links.is_empty() {
            console.say(format_args!("{id} ->"))?;
        } else {
            console.say(format_args!("{id} -> {}", links.join(", ")))?;
        }
    }
    Ok(())
}

fn check_and_reduce<R: BufRead, W: Write>(session: &Session, console: &mut Console<R, W>) -> CliResult<()> {
    let graph = &session.graph;
    match check_connectivity(graph) {
        Connectivity::Empty => console.say("Empty graph.")?,
        Connectivity::Disconnected { reached, total } => {
            info!(
                reached,
                total,
                components = connected_components(graph),
                "graph is disconnected, skipping reduction"
            );
            console.say("Disconnected graph.")?;
        }
        Connectivity::Connected => {
            console.say("Connected graph.")?;
            let tree = build_mst(graph)?;
            console.say("")?;
            console.say("Reduced form Gr(G) - minimum spanning tree:")?;
            for edge in &tree.edges {
                console.say(format_args!(
                    "{} - {} : {} {}",
                    edge.u,
                    edge.v,
                    format_weight(edge.weight),
                    session.unit
                ))?;
            }
            console.say(format_args!(
                "Total weight: {} {}",
                format_weight(tree.total_weight()),
                session.unit
            ))?;
        }
    }
    Ok(())
}

/// Run the menu loop until quit or end of input.
///
/// Recoverable errors are printed and the loop continues; only console I/O
/// failures end it early.
pub fn run<R: BufRead, W: Write>(session: &mut Session, console: &mut Console<R, W>) -> CliResult<()> {
    loop {
        let outcome = read_command(console).and_then(|command| handle_command(session, command, console));
        match outcome {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => return Ok(()),
            Err(CliError::EndOfInput) => {
                info!("input closed, leaving");
                return Ok(());
            }
            Err(err) if err.is_fatal() => return Err(err),
            Err(CliError::UnknownCommand(selection)) => {
                debug!(%selection, "unknown menu selection");
                console.say("Invalid option.")?;
            }
            Err(err) => {
                warn!(error = %err, "command failed");
                console.say(format_args!("Error: {err}"))?;
            }
        }
    }
}
