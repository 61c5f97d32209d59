use sp_core::prelude::*;

fn main() {
    env_logger::init();

    // Ten airports with symmetric routes
    let g = generate_reference_graph();
    g.print_info();

    let s = g.node_by_label("MKS").expect("MKS is part of the graph");
    let t = g.node_by_label("DHS").expect("DHS is part of the graph");

    let engine = ShortestPathEngine::new(g);

    // Distances and parent links to every node
    let result = engine.compute(s).expect("Source is part of the graph");
    println!("Parents: {:?}", result.parents());

    let shortest_path = result.path_to(t).expect("Failed to find path");
    println!("Path: {}", shortest_path.display(engine.graph()));
    println!("Costs: {}", shortest_path.weight);
}
