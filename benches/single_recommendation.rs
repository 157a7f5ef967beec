use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;
use style_scorer_rust::{RecommendationRequest, StyleEngine};

fn sample_request() -> RecommendationRequest {
    serde_json::from_value(json!({
        "user": {
            "season": "Autumn",
            "bodyShape": "rectangle",
            "measurements": {"chest": 40, "shoulder": 18, "sleeve": 25, "height": "5'10\""}
        },
        "garment": {
            "hex": "#B7410E",
            "category": "upper_body",
            "fitType": "relaxed",
            "sizeChart": [
                {"sizeLabel": "S", "measurements": {"chest": 42, "shoulder": 18, "sleeve": 24.5}},
                {"sizeLabel": "M", "measurements": {"chest": 46, "shoulder": 19, "sleeve": 25}},
                {"sizeLabel": "L", "measurements": {"chest": 50, "shoulder": 20, "sleeve": 25.5}},
                {"sizeLabel": "XL", "measurements": {"chest": 54, "shoulder": 21, "sleeve": 26}}
            ]
        }
    }))
    .expect("valid sample request")
}

fn bench_recommendation(c: &mut Criterion) {
    let engine = StyleEngine::new();
    let request = sample_request();

    c.bench_function("classify_hex", |b| b.iter(|| engine.classify(black_box("#B7410E"))));
    c.bench_function("recommend_single", |b| b.iter(|| engine.recommend(black_box(&request))));

    let batch: Vec<RecommendationRequest> = (0..256).map(|_| request.clone()).collect();
    c.bench_function("recommend_batch_256", |b| b.iter(|| engine.recommend_batch(black_box(&batch))));
}

criterion_group!(benches, bench_recommendation);
criterion_main!(benches);
