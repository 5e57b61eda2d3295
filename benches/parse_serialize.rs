use std::time::Duration;

use criterion::measurement::WallTime;
use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkGroup, BenchmarkId, Criterion,
};
use rjson::{Document, Inspect, Value};
use serde::Serialize;

#[derive(Clone, Serialize)]
struct Owner {
    id: u64,
    login: String,
    site_admin: bool,
}

#[derive(Clone, Serialize)]
struct Repo {
    id: u64,
    name: String,
    full_name: String,
    description: Option<String>,
    private: bool,
    language: Option<String>,
    stargazers_count: u32,
    score: f64,
    topics: Vec<String>,
    owner: Owner,
}

#[derive(Clone, Serialize)]
struct TreeNode {
    name: String,
    value: i64,
    children: Vec<TreeNode>,
}

fn make_repos(count: usize) -> Vec<Repo> {
    (0..count)
        .map(|i| Repo {
            id: i as u64,
            name: format!("repo-{i}"),
            full_name: format!("org/repo-{i}"),
            description: if i % 3 == 0 {
                None
            } else {
                Some(format!("Repository {i} \"quoted\" 北京"))
            },
            private: i % 10 == 0,
            language: match i % 4 {
                0 => Some("Rust".to_string()),
                1 => Some("Go".to_string()),
                2 => Some("C++".to_string()),
                _ => None,
            },
            stargazers_count: (i * 13) as u32,
            score: i as f64 / 7.0,
            topics: vec![format!("topic-{}", i % 10), format!("topic-{}", (i + 3) % 10)],
            owner: Owner {
                id: (i % 100) as u64,
                login: format!("user-{}", i % 100),
                site_admin: i % 97 == 0,
            },
        })
        .collect()
}

fn make_tree(depth: usize, width: usize, seed: i64) -> TreeNode {
    let children = if depth == 0 {
        Vec::new()
    } else {
        (0..width)
            .map(|i| make_tree(depth - 1, width, seed * 31 + i as i64))
            .collect()
    };
    TreeNode {
        name: format!("node-{seed}"),
        value: seed,
        children,
    }
}

fn build_with_views(count: usize) -> Document {
    let mut doc = Document::new();
    for i in 0..count {
        let mut repos = doc.field("repos");
        repos.append(Value::null());
        let mut entry = repos.last();
        entry.field("id").set_value(i as u64);
        entry.field("name").set_value(format!("repo-{i}"));
        entry.field("tags").append("a");
        entry.field("tags").append(i as i32);
    }
    doc
}

fn bench_parse(group: &mut BenchmarkGroup<'_, WallTime>, name: &str, json_text: &str) {
    group.throughput(criterion::Throughput::Bytes(json_text.len() as u64));
    group.bench_function(BenchmarkId::new("rjson", name), |b| {
        b.iter(|| {
            let doc = Document::parse(black_box(json_text)).unwrap();
            black_box(doc);
        });
    });
    group.bench_function(BenchmarkId::new("serde_json_value", name), |b| {
        b.iter(|| {
            let value: serde_json::Value = serde_json::from_str(black_box(json_text)).unwrap();
            black_box(value);
        });
    });
}

fn bench_serialize(group: &mut BenchmarkGroup<'_, WallTime>, name: &str, json_text: &str) {
    let doc = Document::parse(json_text).unwrap();
    let value: serde_json::Value = serde_json::from_str(json_text).unwrap();
    group.throughput(criterion::Throughput::Bytes(json_text.len() as u64));
    group.bench_function(BenchmarkId::new("rjson", name), |b| {
        b.iter(|| black_box(black_box(&doc).serialize()));
    });
    group.bench_function(BenchmarkId::new("serde_json_value", name), |b| {
        b.iter(|| black_box(serde_json::to_string(black_box(&value)).unwrap()));
    });
}

fn criterion_config() -> Criterion {
    if std::env::var("RJSON_BENCH_MINIMAL").is_ok() {
        Criterion::default()
            .warm_up_time(Duration::from_secs(0))
            .measurement_time(Duration::from_millis(10))
            .sample_size(10)
            .nresamples(1)
    } else {
        Criterion::default()
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let repos_json = serde_json::to_string(&make_repos(2000)).unwrap();
    let tree_json = serde_json::to_string(&make_tree(6, 4, 1)).unwrap();

    let mut parse = c.benchmark_group("parse");
    bench_parse(&mut parse, "repos", &repos_json);
    bench_parse(&mut parse, "deep_tree", &tree_json);
    parse.finish();

    let mut serialize = c.benchmark_group("serialize");
    bench_serialize(&mut serialize, "repos", &repos_json);
    bench_serialize(&mut serialize, "deep_tree", &tree_json);
    serialize.finish();

    let mut build = c.benchmark_group("build");
    build.bench_function("views_1000", |b| {
        b.iter(|| {
            let doc = build_with_views(black_box(1000));
            black_box(doc.get("repos").map(|repos| repos.len()));
        });
    });
    build.bench_function("detach_repos", |b| {
        let doc = Document::parse(&repos_json).unwrap();
        b.iter(|| black_box(black_box(&doc).detach()));
    });
    build.finish();
}

criterion_group! {
    name = benches;
    config = criterion_config();
    targets = criterion_benchmark
}
criterion_main!(benches);
