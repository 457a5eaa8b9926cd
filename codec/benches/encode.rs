use codec::{EntityState, EntityType, Serializer};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn typical_diff() -> EntityState {
    EntityState::new()
        .with("x2", 120.5)
        .with("y2", 48.0)
        .with("rotation", 1.570_796)
        .with("alpha", 0.75)
        .with("text", "Player 1: 120 pts")
        .with("customFoo", "bar")
}

fn bench_encode(c: &mut Criterion) {
    let serializer = Serializer::standard().unwrap();
    let diff = typical_diff();

    c.bench_function("encode_create", |b| {
        b.iter(|| {
            serializer
                .encode_create(black_box(42), black_box(EntityType::Sprite))
                .unwrap()
        });
    });

    c.bench_function("encode_update_6_attrs", |b| {
        b.iter(|| {
            serializer
                .encode_update(black_box(42), black_box(&diff), black_box(0.5))
                .unwrap()
        });
    });

    let empty = EntityState::new();
    c.bench_function("encode_update_empty", |b| {
        b.iter(|| {
            serializer
                .encode_update(black_box(42), black_box(&empty), black_box(0.5))
                .unwrap()
        });
    });
}

criterion_group!(benches, bench_encode);
criterion_main!(benches);
