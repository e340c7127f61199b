//! Token operation benchmarks
//!
//! Run with: `cargo bench --bench token_benchmarks`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rewards_lib::validation::PayloadValidator;
use rewards_lib::Rewards;
use serde_json::{json, Value};

fn payload() -> Value {
    let person = json!({"id": 482913, "name": "Ada Palmer", "email": "ada@example.com", "country": "CAN"});
    json!({
        "user_data": person,
        "campaign_data": {
            "id": 771204,
            "name": "falcons",
            "category": "Running",
            "country": "CAN",
            "admin_data": person,
        },
    })
}

fn rewards() -> Rewards {
    Rewards::new("A2DE537C", "sk_61c394cf3346077b").expect("valid benchmark configuration")
}

/// Benchmark payload validation alone
fn bench_validation(c: &mut Criterion) {
    let validator = PayloadValidator::new();
    let payload = payload();

    c.bench_function("validate_payload", |b| {
        b.iter(|| black_box(validator.validate(black_box(&payload))))
    });
}

/// Benchmark identified token issuance (validate + encrypt)
fn bench_identified_token(c: &mut Criterion) {
    let rewards = rewards();
    let payload = payload();

    c.bench_function("identified_token", |b| {
        b.iter(|| black_box(rewards.identified_token(black_box(&payload))))
    });
}

/// Benchmark token verification (shop check + decrypt + parse)
fn bench_read_token(c: &mut Criterion) {
    let rewards = rewards();
    let token = rewards
        .identified_token(&payload())
        .expect("benchmark payload is valid");

    c.bench_function("read_token", |b| {
        b.iter(|| black_box(rewards.read_token(black_box(&token))))
    });
}

criterion_group!(
    benches,
    bench_validation,
    bench_identified_token,
    bench_read_token
);
criterion_main!(benches);
