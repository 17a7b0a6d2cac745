use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use match_insight::api;
use match_insight::{MatchStats, PredictionEngine, TeamStats};

fn sample_stats() -> MatchStats {
    MatchStats {
        team_a: TeamStats {
            goals: 2.4,
            shots_on_target: 7.1,
            possession: 61.0,
            conceded: 0.7,
            fouls: 9.2,
            corners: 5.0,
        },
        team_b: TeamStats {
            goals: 0.8,
            shots_on_target: 2.9,
            possession: 42.0,
            conceded: 1.9,
            fouls: 13.4,
            corners: 7.0,
        },
    }
}

fn bench_engines(c: &mut Criterion) {
    let stats = sample_stats();
    for engine in PredictionEngine::ALL {
        c.bench_function(&format!("compute_{engine}"), |b| {
            b.iter(|| {
                let result = engine.compute_predictions(black_box(&stats)).unwrap();
                black_box(result.len());
            })
        });
    }
}

fn bench_json_boundary(c: &mut Criterion) {
    c.bench_function("handle_predict_json", |b| {
        b.iter(|| {
            let resp = api::handle_predict(PredictionEngine::Consistent, black_box(REQUEST_JSON));
            black_box(resp.status);
        })
    });
}

criterion_group!(perf, bench_engines, bench_json_boundary);
criterion_main!(perf);

static REQUEST_JSON: &str = include_str!("../tests/fixtures/strong_home.json");
