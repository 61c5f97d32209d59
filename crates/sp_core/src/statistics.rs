use std::{
    fmt::{Debug, Display},
    time::{Duration, Instant},
};

use histogram::Histogram;

use crate::graph::Graph;

#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    pub nodes_settled: usize,
    pub edges_relaxed: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.edges_relaxed = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} nodes settled, {} edges relaxed in {:?}",
            self.nodes_settled, self.edges_relaxed, self.duration
        )
    }
}

fn degree_histogram(g: &Graph, outgoing: bool) -> Histogram {
    let hist = Histogram::new(0, 10, 30).unwrap();
    for node in g.nodes() {
        let degree = if outgoing {
            g.neighbors_outgoing(node).count()
        } else {
            g.neighbors_incoming(node).count()
        };
        hist.increment(degree as u64, 1).unwrap();
    }
    hist
}

pub fn degree_out_hist(g: &Graph) -> Histogram {
    degree_histogram(g, true)
}

pub fn degree_in_hist(g: &Graph) -> Histogram {
    degree_histogram(g, false)
}

pub fn average_in_degree(g: &Graph) -> f64 {
    let sum: usize = g.nodes().map(|n| g.neighbors_incoming(n).count()).sum();
    sum as f64 / g.node_count() as f64
}

pub fn average_out_degree(g: &Graph) -> f64 {
    let sum: usize = g.nodes().map(|n| g.neighbors_outgoing(n).count()).sum();
    sum as f64 / g.node_count() as f64
}
