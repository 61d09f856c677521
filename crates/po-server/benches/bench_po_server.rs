use axum::body::Body;
use axum::http::Request;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use po_server::{app_with_state, state::AppState};
use rand::seq::SliceRandom;
use tokio::runtime::Runtime;
use tower::ServiceExt;

const SENTENCES: &[&str] = &[
    "O desenvolvimento da aplicação em São Paulo custou R$ 1.000,00.",
    "A equipe usou JavaScript e Python com uma API REST.",
    "Contato: suporte@empresa.com.br até 15/03/2025 às 14:30.",
    "O gato e o cachorro dormem perto da árvore.",
    "A universidade publicou a documentação do sistema.",
];

fn prompt(words: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut out = String::new();
    while out.split_whitespace().count() < words {
        out.push_str(SENTENCES.choose(&mut rng).unwrap());
        out.push(' ');
    }
    out
}

fn bench_http_health(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    c.bench_function("http_health_1000", |b| {
        b.iter(|| {
            rt.block_on(async {
                for _ in 0..1000 {
                    let app = app_with_state(AppState::new());
                    let req = Request::builder()
                        .uri("/health")
                        .body(Body::empty())
                        .unwrap();
                    let resp = app.oneshot(req).await.unwrap();
                    black_box(resp.status());
                }
            })
        })
    });
}

fn bench_http_optimize(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let state = AppState::new();
    let body = serde_json::json!({
        "text": prompt(200),
        "preset": "aggressive",
        "translate_to_english": false
    });
    let bytes = serde_json::to_vec(&body).unwrap();

    c.bench_function("http_optimize_aggressive_200_words", |b| {
        b.iter(|| {
            rt.block_on(async {
                let app = app_with_state(state.clone());
                let req = Request::builder()
                    .method("POST")
                    .uri("/api/v1/optimization/optimize")
                    .header("content-type", "application/json")
                    .body(Body::from(bytes.clone()))
                    .unwrap();
                let resp = app.oneshot(req).await.unwrap();
                black_box(resp.status());
            })
        })
    });
}

criterion_group!(benches, bench_http_health, bench_http_optimize);
criterion_main!(benches);
