//! Interactive shell to query shortest paths on a weight matrix
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};
use sp_core::prelude::*;
use sp_core::statistics::{average_in_degree, average_out_degree, degree_in_hist, degree_out_hist};

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let g = context.engine.graph();
    let mut out = format!(
        "Graph has {} nodes and {} edges\nAverage degree: {:.2} out / {:.2} in",
        g.node_count(),
        g.num_edges(),
        average_out_degree(g),
        average_in_degree(g)
    );
    for (direction, hist) in [("Out", degree_out_hist(g)), ("In", degree_in_hist(g))] {
        for bucket in hist.into_iter().filter(|b| b.count() > 0) {
            out.push_str(&format!(
                "\n{} degree [{}-{}]: {}",
                direction,
                bucket.low(),
                bucket.high(),
                bucket.count()
            ));
        }
    }
    Ok(Some(out))
}

/// Print all node labels with their index
fn labels(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let g = context.engine.graph();
    let mut out = String::new();
    for node in g.nodes() {
        out.push_str(&format!("{}\t{}\n", node, g.label(node).unwrap_or("?")));
    }
    Ok(Some(out))
}

fn resolve(context: &Context, args: &ArgMatches, name: &str) -> std::result::Result<NodeIndex, String> {
    let value = args
        .get_one::<String>(name)
        .ok_or_else(|| format!("Missing argument {}", name))?;
    context
        .engine
        .graph()
        .resolve(value)
        .ok_or_else(|| format!("Unknown node {:?}", value))
}

fn run_dijkstra(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let (src, dst) = match (resolve(context, &args, "src"), resolve(context, &args, "dst")) {
        (Ok(src), Ok(dst)) => (src, dst),
        (Err(e), _) | (_, Err(e)) => return Ok(Some(e)),
    };

    let engine = &context.engine;
    let result = match engine.compute(src) {
        Ok(result) => result,
        Err(e) => return Ok(Some(e.to_string())),
    };

    match engine.path_to(&result, src, dst) {
        Ok(path) => {
            let distance = engine.distance_to(&result, dst).unwrap_or(INFINITY);
            let sp = ShortestPath::new(path, distance);
            Ok(Some(format!(
                "{}\nDistance: {}\nTook: {:?}",
                sp.display(engine.graph()),
                sp.weight,
                result.stats.duration
            )))
        }
        Err(SearchError::Unreachable { .. }) => Ok(Some("No path found".to_string())),
        Err(e) => Ok(Some(e.to_string())),
    }
}

/// Print distance and parent of every node
fn run_tree(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let src = match resolve(context, &args, "src") {
        Ok(src) => src,
        Err(e) => return Ok(Some(e)),
    };

    let engine = &context.engine;
    let g = engine.graph();
    let result = match engine.compute(src) {
        Ok(result) => result,
        Err(e) => return Ok(Some(e.to_string())),
    };

    let mut out = String::new();
    for node in g.nodes() {
        let label = g.label(node).unwrap_or("?");
        let distance = result
            .distance(node)
            .map_or("inf".to_string(), |d| d.to_string());
        let parent = result
            .parent(node)
            .and_then(|p| g.label(p))
            .unwrap_or("-");
        out.push_str(&format!("{}\t{}\t{}\n", label, distance, parent));
    }
    out.push_str(&format!("{}", result.stats));
    Ok(Some(out))
}

fn measure_dijkstra(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::Rng;

    let n = *args.get_one::<usize>("n").unwrap_or(&10);
    let num_nodes = context.engine.graph().node_count();

    // Select n random source nodes
    let mut rng = rand::thread_rng();
    let src_nodes: Vec<NodeIndex> = (0..n)
        .map(|_| node_index(rng.gen_range(0..num_nodes)))
        .collect();

    let pb = ProgressBar::new(n as u64);
    let mut res = String::new();
    for src in src_nodes {
        if let Ok(result) = context.engine.compute(src) {
            res.push_str(&format!(
                "{}: {} reachable, {:?}\n",
                src,
                result.reachable().count(),
                result.stats.duration
            ));
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(Some(res))
}

struct Context {
    engine: ShortestPathEngine,
}

impl Context {
    fn new(graph: Graph) -> Self {
        Self {
            engine: ShortestPathEngine::new(graph),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // Init Graph
    let graph = match std::env::args().nth(1) {
        Some(path) => match Graph::from_csv(Path::new(&path)) {
            Ok(graph) => graph,
            Err(e) => {
                eprintln!("Failed to read matrix file: {:#}", e);
                std::process::exit(1);
            }
        },
        None => generate_reference_graph(),
    };
    let context = Context::new(graph);

    let mut repl = Repl::new(context)
        .with_name("Pathfinder")
        .with_version("v0.1.0")
        .with_description("Simple REPL to query shortest paths on a weight matrix")
        .with_banner("Welcome to Pathfinder")
        .with_history(PathBuf::from(r".\history"), 100)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(Command::new("labels").about("Print node labels"), labels)
        .with_command(
            Command::new("dijk")
                .arg(
                    Arg::new("src")
                        .required(true)
                        .help("Label or index of source node"),
                )
                .arg(
                    Arg::new("dst")
                        .required(true)
                        .help("Label or index of destination node"),
                )
                .about("Calculate shortest path using Dijkstra's algorithm"),
            run_dijkstra,
        )
        .with_command(
            Command::new("tree")
                .arg(
                    Arg::new("src")
                        .required(true)
                        .help("Label or index of source node"),
                )
                .about("Print distances and parents of all nodes"),
            run_tree,
        )
        .with_command(
            Command::new("dijkm")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random shortest path trees to calculate"),
                )
                .about("Measure `n` random shortest path tree calculations"),
            measure_dijkstra,
        );

    repl.run()
}
