//! Criterion benchmarks for tinygraph.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use tempfile::NamedTempFile;

use tinygraph::format::{DotWriter, JsonWriter};
use tinygraph::graph::{Graph, LoadMode, Template};
use tinygraph::types::{GraphMode, MAX_EDGES, MAX_VERTICES};

/// Fill a graph to capacity with random weighted edges.
fn make_full_graph(mode: GraphMode) -> Graph {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::new(mode);
    for i in 0..MAX_VERTICES {
        graph.add_vertex(&format!("v{i}")).unwrap();
    }

    // Chain first so every vertex is reachable from v0.
    for i in 1..MAX_VERTICES {
        let weight = rng.gen_range(1.0..10.0);
        graph
            .add_edge(&format!("v{}", i - 1), &format!("v{i}"), Some(weight))
            .unwrap();
    }
    while graph.edge_count() < MAX_EDGES {
        let u = rng.gen_range(0..MAX_VERTICES);
        let v = rng.gen_range(0..MAX_VERTICES);
        let _ = graph.add_edge(
            &format!("v{u}"),
            &format!("v{v}"),
            Some(rng.gen_range(1.0..10.0)),
        );
    }

    graph
}

fn bench_template_merge(c: &mut Criterion) {
    let template = Template::predefined();

    c.bench_function("template_merge_into_empty", |b| {
        b.iter(|| {
            let mut graph = Graph::undirected();
            graph.load_template(&template, LoadMode::Merge).unwrap();
        })
    });
}

fn bench_shortest_path(c: &mut Criterion) {
    let graph = make_full_graph(GraphMode::Directed);
    let target = format!("v{}", MAX_VERTICES - 1);

    c.bench_function("shortest_path_full_directed", |b| {
        b.iter(|| {
            let _ = graph.shortest_path("v0", &target).unwrap();
        })
    });
}

fn bench_bfs(c: &mut Criterion) {
    let graph = make_full_graph(GraphMode::Undirected);

    c.bench_function("bfs_full_undirected", |b| {
        b.iter(|| {
            let _ = graph.bfs_order("v0").unwrap();
        })
    });
}

fn bench_info(c: &mut Criterion) {
    let graph = make_full_graph(GraphMode::Directed);

    c.bench_function("info_full_directed", |b| {
        b.iter(|| {
            let _ = graph.info();
        })
    });
}

fn bench_remove_vertex(c: &mut Criterion) {
    let graph = make_full_graph(GraphMode::Undirected);

    c.bench_function("remove_vertex_full", |b| {
        b.iter(|| {
            let mut g = graph.clone();
            let _ = g.remove_vertex("v5").unwrap();
        })
    });
}

fn bench_render_dot(c: &mut Criterion) {
    let graph = make_full_graph(GraphMode::Undirected);
    let writer = DotWriter::new();

    c.bench_function("render_dot_full", |b| {
        b.iter(|| {
            let _ = writer.render(&graph).unwrap();
        })
    });
}

fn bench_export_json(c: &mut Criterion) {
    let graph = make_full_graph(GraphMode::Directed);
    let writer = JsonWriter::new(true);

    c.bench_function("export_json_full", |b| {
        b.iter(|| {
            let tmp = NamedTempFile::new().unwrap();
            writer.write_to_file(&graph, tmp.path()).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_template_merge,
    bench_shortest_path,
    bench_bfs,
    bench_info,
    bench_remove_vertex,
    bench_render_dot,
    bench_export_json,
);
criterion_main!(benches);
