// Criterion benchmarks for CSAT Predict

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use csat_predict::core::{encode, Predictor};
use csat_predict::models::{Country, Gender, Language, PredictRequest, Skill};
use csat_predict::services::LinearModel;

fn create_request() -> PredictRequest {
    PredictRequest {
        age: Some(32),
        gender: Some(Gender::Female),
        country: Some(Country::France),
        primary_language: Some(Language::French),
        primary_skill: Some(Skill::DigitalMarketing),
        years_experience: Some(9),
        hourly_rate: Some(80),
        client_rating: 4.4,
        is_active: Some(true),
    }
}

fn create_model() -> LinearModel {
    let names: Vec<String> = encode(&create_request(), None)
        .unwrap()
        .names()
        .to_vec();
    let coefficients: Vec<f64> = (0..names.len()).map(|i| (i as f64) * 0.01).collect();
    LinearModel::new(60.0, coefficients, names).unwrap()
}

fn bench_encode(c: &mut Criterion) {
    let request = create_request();

    c.bench_function("encode", |b| {
        b.iter(|| encode(black_box(&request), black_box(None)));
    });
}

fn bench_encode_with_schema(c: &mut Criterion) {
    let request = create_request();
    let model = create_model();
    let schema: Vec<String> = model.feature_names().to_vec();

    c.bench_function("encode_with_schema", |b| {
        b.iter(|| encode(black_box(&request), black_box(Some(&schema))));
    });
}

fn bench_predict(c: &mut Criterion) {
    let request = create_request();
    let model = create_model();
    let predictor = Predictor::new();

    c.bench_function("predict", |b| {
        b.iter(|| predictor.predict(black_box(&request), black_box(&model)));
    });
}

criterion_group!(benches, bench_encode, bench_encode_with_schema, bench_predict);

criterion_main!(benches);
