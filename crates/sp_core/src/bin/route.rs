use anyhow::{anyhow, Context, Result};
use log::info;
use sp_core::{
    prelude::*,
    statistics::{average_out_degree, degree_out_hist},
    util::cli,
};

fn main() -> Result<()> {
    env_logger::init();

    let cfg = cli::parse();

    let g = match &cfg.matrix_file {
        Some(path) => Graph::from_csv(path)?,
        None => {
            info!("No matrix file given, using the built-in reference graph");
            generate_reference_graph()
        }
    };
    info!("{}, average out degree {:.2}", g, average_out_degree(&g));
    for bucket in degree_out_hist(&g).into_iter().filter(|b| b.count() > 0) {
        info!("Out degree [{}-{}]: {}", bucket.low(), bucket.high(), bucket.count());
    }

    let source = g
        .resolve(&cfg.source)
        .ok_or_else(|| anyhow!("Unknown source node {:?}", cfg.source))?;
    let destination = cfg
        .destination
        .as_deref()
        .map(|name| {
            g.resolve(name)
                .ok_or_else(|| anyhow!("Unknown destination node {:?}", name))
        })
        .transpose()?;

    let engine = ShortestPathEngine::new(g);
    let g = engine.graph();

    let result = engine.compute(source)?;
    info!("{}", result.stats);

    if cfg.print_parents {
        println!("Parents: {:?}", result.parents());
    }

    match destination {
        Some(destination) => match engine.path_to(&result, source, destination) {
            Ok(path) => {
                let distance = engine.distance_to(&result, destination)?;
                let sp = ShortestPath::new(path, distance);
                println!("Path: {}", sp.display(g));
                println!("Distance: {}", distance);
            }
            Err(SearchError::Unreachable { .. }) => {
                println!(
                    "No path from {} to {}",
                    g.label(source).unwrap_or("?"),
                    g.label(destination).unwrap_or("?")
                );
            }
            Err(e) => return Err(e).context("Path query failed"),
        },
        None => {
            for target in g.nodes() {
                let label = g.label(target).unwrap_or("?");
                match result.path_to(target) {
                    Ok(sp) => println!("{}\t{}\t{}", label, sp.weight, sp.display(g)),
                    Err(_) => println!("{}\t-\tno path", label),
                }
            }
        }
    }

    Ok(())
}
