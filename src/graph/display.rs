//! Human-readable rendering of a graph.

use std::fmt;

use super::Graph;

impl<N: fmt::Debug, E: fmt::Debug> fmt::Display for Graph<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph (order {}, size {})", self.order(), self.size())?;
        writeln!(f, "  nodes:")?;
        for (id, node) in &self.nodes {
            match node.value() {
                Some(value) => writeln!(f, "    {}: {:?}", id, value)?,
                None => writeln!(f, "    {}", id)?,
            }
        }
        writeln!(f, "  edges:")?;
        for (id, edge) in &self.edges {
            match edge.value() {
                Some(value) => writeln!(
                    f,
                    "    {} ({} -> {}): {:?}",
                    id,
                    edge.source(),
                    edge.target(),
                    value
                )?,
                None => writeln!(f, "    {} ({} -> {})", id, edge.source(), edge.target())?,
            }
        }
        Ok(())
    }
}

impl<N: fmt::Debug, E: fmt::Debug> fmt::Debug for Graph<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.nodes)
            .field("edges", &self.edges)
            .field("next_auto", &self.next_auto)
            .finish()
    }
}
