//! CLI commands for shuttle-route.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::dijkstra::shortest_path;
use crate::export::{GraphDocument, PathResponse, PlanResponse};
use crate::graph::NodeId;
use crate::network::load_network;
use crate::plan::plan_route;

#[derive(Parser)]
#[command(name = "shuttle-route")]
#[command(about = "Multi-stop shuttle route planner", long_about = None)]
pub struct Cli {
    /// Network file describing edges and passengers
    #[arg(short, long)]
    pub network: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Shortest path between two service locations
    Path {
        /// Start node id
        src: NodeId,

        /// End node id
        dst: NodeId,
    },

    /// Plan a multi-passenger route over the given passenger nodes
    Plan {
        /// Passenger node ids
        #[arg(required = true)]
        passengers: Vec<NodeId>,
    },

    /// Export the network as a graph document
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let graph = load_network(&self.network)?;

        match self.command {
            Commands::Path { src, dst } => {
                let path = shortest_path(&graph, src, dst)
                    .with_context(|| format!("shortest-path query {src} -> {dst} failed"))?;
                println!("{}", serde_json::to_string_pretty(&PathResponse { path })?);
                Ok(())
            }
            Commands::Plan { passengers } => {
                let route = plan_route(&graph, &passengers).context("route planning failed")?;
                let response = PlanResponse::new(&graph, &passengers, route)?;
                println!("{}", serde_json::to_string_pretty(&response)?);
                Ok(())
            }
            Commands::Export { output } => {
                let document = GraphDocument::from_graph(&graph);
                let rendered = serde_json::to_string_pretty(&document)?;
                match output {
                    Some(path) => {
                        fs::write(&path, rendered)
                            .with_context(|| format!("failed to write {}", path.display()))?;
                        println!(
                            "Exported {} nodes, {} edges to {}",
                            document.nodes.len(),
                            document.edges.len(),
                            path.display()
                        );
                    }
                    None => println!("{rendered}"),
                }
                Ok(())
            }
        }
    }
}
