use crate::{
    demo,
    errors::GraphError,
    graph::{Graph, VertexId, parse_weight},
};

/// Upper bound on the vertices a command line may ask for, through `--vertices` or a label.
pub const MAX_CLI_VERTICES: usize = 4096;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One `--edge A-B:W` argument. The weight stays raw text until the graph validates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: String,
}

impl EdgeSpec {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let (pair, weight) = raw
            .split_once(':')
            .ok_or_else(|| format!("edge '{raw}' must look like A-B:WEIGHT"))?;
        let (from, to) = pair
            .split_once('-')
            .ok_or_else(|| format!("edge '{raw}' must look like A-B:WEIGHT"))?;
        if from.is_empty() || to.is_empty() {
            return Err(format!("edge '{raw}' is missing an endpoint"));
        }
        Ok(Self {
            from: from.to_string(),
            to: to.to_string(),
            weight: weight.to_string(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub command: String,
    pub from: Option<String>,
    pub to: Option<String>,
    pub edges: Vec<EdgeSpec>,
    pub vertices: usize,
    pub demo: bool,
    pub format: OutputFormat,
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut command = String::from("path");
        let mut from = None;
        let mut to = None;
        let mut edges = Vec::new();
        let mut vertices = 0usize;
        let mut demo = false;
        let mut format = OutputFormat::Text;
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--command" => {
                    command = iter
                        .next()
                        .ok_or_else(|| "--command requires a value".to_string())?
                        .to_string();
                }
                "--from" => {
                    from = Some(
                        iter.next()
                            .ok_or_else(|| "--from requires a value".to_string())?
                            .to_string(),
                    );
                }
                "--to" => {
                    to = Some(
                        iter.next()
                            .ok_or_else(|| "--to requires a value".to_string())?
                            .to_string(),
                    );
                }
                "--edge" => {
                    let raw = iter
                        .next()
                        .ok_or_else(|| "--edge requires a value".to_string())?;
                    edges.push(EdgeSpec::parse(raw)?);
                }
                "--vertices" => {
                    let raw = iter
                        .next()
                        .ok_or_else(|| "--vertices requires a value".to_string())?;
                    vertices = raw
                        .parse()
                        .map_err(|_| format!("--vertices expects a count, got '{raw}'"))?;
                }
                "--demo" => demo = true,
                "--json" => format = OutputFormat::Json,
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag {other}"));
                }
                _ => {
                    command = arg.to_string();
                }
            }
        }
        Ok(Self {
            command,
            from,
            to,
            edges,
            vertices,
            demo,
            format,
        })
    }

    pub fn help() -> &'static str {
        "Usage: weightgraph [--command path|steps|distances|reachable|stats] [--demo]\n\
         \x20                  [--vertices N] [--edge A-B:WEIGHT]... [--from A] [--to B] [--json]\n"
    }

    /// Builds the graph described by the flags.
    ///
    /// Vertices are created in label order up to the highest label mentioned
    /// anywhere, or up to `--vertices`, whichever is larger. `--demo` starts from
    /// the example graph. Requests past [`MAX_CLI_VERTICES`] are rejected before
    /// anything is allocated.
    pub fn build_graph(&self) -> Result<Graph, GraphError> {
        let mut graph = if self.demo {
            demo::example_graph()?
        } else {
            Graph::new()
        };
        let mut needed = self.vertices;
        let labels = self
            .edges
            .iter()
            .flat_map(|edge| [edge.from.as_str(), edge.to.as_str()])
            .chain(self.from.as_deref())
            .chain(self.to.as_deref());
        for label in labels {
            let id = parse_label(label)?;
            needed = needed.max(id.index() as usize + 1);
        }
        if needed > MAX_CLI_VERTICES {
            return Err(GraphError::invalid_input(format!(
                "graph would need {needed} vertices, limit is {MAX_CLI_VERTICES}"
            )));
        }
        while graph.vertex_count() < needed {
            graph.add_vertex();
        }
        for edge in &self.edges {
            let weight = parse_weight(&edge.weight)?;
            graph.add_edge(parse_label(&edge.from)?, parse_label(&edge.to)?, weight)?;
        }
        Ok(graph)
    }
}

pub fn parse_label(label: &str) -> Result<VertexId, GraphError> {
    VertexId::from_label(&label.trim().to_ascii_uppercase())
        .ok_or_else(|| GraphError::invalid_input(format!("'{label}' is not a vertex label")))
}
