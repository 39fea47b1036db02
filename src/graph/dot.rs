use super::dag::DirectedAcyclicGraph;
use crate::descriptor::type_name;
use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};

/// Formats a graph as a strict GraphViz digraph for an external layout tool.
///
/// Vertices are named after their generated types (`Mock_<id>`) so the picture
/// reads the same as the generated code.
pub fn to_dot(graph: &DirectedAcyclicGraph) -> String {
    let mut output = String::from("strict digraph {\n");

    for &vertex in graph.vertices() {
        output.push_str(&format!("    {}\n", type_name(vertex)));
    }
    if graph.edge_count() > 0 {
        output.push('\n');
    }
    for edge in graph.edges() {
        output.push_str(&format!(
            "    {} -> {}\n",
            type_name(edge.from),
            type_name(edge.to)
        ));
    }

    output.push_str("}\n");
    output
}

/// Runs `command` with `dot` on its stdin and waits for it to exit.
///
/// The child is always waited on, even when writing its input fails. A write
/// error is only returned if the child itself exited successfully, since a
/// failed exit status explains a closed pipe.
pub fn pipe_to(command: &mut Command, dot: &str) -> io::Result<ExitStatus> {
    let mut child = command.stdin(Stdio::piped()).spawn()?;
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(dot.as_bytes()),
        None => Ok(()),
    };
    let status = child.wait()?;
    if status.success() {
        written?;
    }
    Ok(status)
}
