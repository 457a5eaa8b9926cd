use std::thread;

use codec::{CodecError, EntityEvent, EntityState, EntityType, Serializer, SymbolTables, Value};

fn serializer() -> Serializer<'static> {
    Serializer::standard().unwrap()
}

#[test]
fn create_command() {
    assert_eq!(
        serializer().encode_create(7, EntityType::Circle).unwrap(),
        "C 7 C"
    );
}

#[test]
fn update_with_known_and_unknown_keys() {
    let diff = EntityState::new()
        .with("rotation", 2.25)
        .with("customFoo", "bar");
    assert_eq!(
        serializer().encode_update(3, &diff, 1.5).unwrap(),
        "U 3 1.5 r 2.25 customFoo bar"
    );
}

#[test]
fn update_with_empty_diff() {
    assert_eq!(
        serializer()
            .encode_update(3, &EntityState::new(), 0.0)
            .unwrap(),
        "U 3 0"
    );
}

#[test]
#[allow(clippy::approx_constant)]
fn numeric_values_are_canonical() {
    let s = serializer();
    let cases = [
        (3.0, "U 1 0 r 3"),
        (3.14, "U 1 0 r 3.14"),
        (1.000_000_5, "U 1 0 r 1.000001"),
        (0.007_812_5, "U 1 0 r 0.007812"),
        (0.0, "U 1 0 r 0"),
        (-0.0, "U 1 0 r 0"),
    ];
    for (value, expected) in cases {
        let diff = EntityState::new().with("rotation", value);
        assert_eq!(s.encode_update(1, &diff, 0.0).unwrap(), expected);
    }
}

#[test]
fn text_values_are_escaped() {
    let s = serializer();
    let cases = [
        ("plain", "U 1 0 T plain"),
        ("hello world", "U 1 0 T 'hello world'"),
        ("O'Brien", "U 1 0 T O\\'Brien"),
        ("a b'c", "U 1 0 T 'a b\\'c'"),
    ];
    for (text, expected) in cases {
        let diff = EntityState::new().with("text", text);
        assert_eq!(s.encode_update(1, &diff, 0.0).unwrap(), expected);
    }
}

#[test]
fn every_standard_attribute_uses_its_code() {
    let s = serializer();
    for (name, code) in symbols::STANDARD_ATTRIBUTES {
        let diff = EntityState::new().with(*name, 1.0);
        assert_eq!(
            s.encode_update(1, &diff, 0.0).unwrap(),
            format!("U 1 0 {code} 1")
        );
    }
}

#[test]
fn sprite_animation_lifecycle() {
    let s = serializer();
    let events = vec![
        EntityEvent::create(12, EntityType::SpriteAnimation),
        EntityEvent::update(
            12,
            0.0,
            EntityState::new()
                .with("images", "walk1.png,walk2.png")
                .with("duration", 400)
                .with("loop", true)
                .with("started", false),
        ),
        EntityEvent::update(12, 0.5, EntityState::new().with("started", true)),
    ];
    assert_eq!(
        s.encode_events(&events).unwrap(),
        "C 12 A\nU 12 0 I walk1.png,walk2.png d 400 l true p false\nU 12 0.5 p true"
    );
}

#[test]
fn encoding_is_deterministic() {
    let s = serializer();
    let diff = EntityState::new()
        .with("x2", 12.345_678_9)
        .with("text", "score: 10")
        .with("customFoo", Value::Int(3));
    let first = s.encode_update(42, &diff, 0.333_333_3).unwrap();
    for _ in 0..16 {
        assert_eq!(s.encode_update(42, &diff, 0.333_333_3).unwrap(), first);
    }
    assert_eq!(first, "U 42 0.333333 X 12.345679 T 'score: 10' customFoo 3");
}

#[test]
fn concurrent_encoding_shares_tables() {
    let handles: Vec<_> = (0..4u32)
        .map(|worker| {
            thread::spawn(move || {
                let s = Serializer::standard().unwrap();
                let diff = EntityState::new().with("alpha", 0.5);
                (0..100u32)
                    .map(|i| s.encode_update(worker * 1000 + i, &diff, 1.0).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (worker, handle) in (0..4u32).zip(handles) {
        let lines = handle.join().unwrap();
        assert_eq!(lines.len(), 100);
        assert_eq!(lines[0], format!("U {} 1 a 0.5", worker * 1000));
    }
}

#[test]
fn unsupported_type_leaves_caller_free_to_substitute() {
    let tables = SymbolTables::builder()
        .remove_entity_type(EntityType::SpriteAnimation)
        .build()
        .unwrap();
    let s = Serializer::new(&tables);
    let line = s
        .encode_create(5, EntityType::SpriteAnimation)
        .or_else(|err| {
            assert!(matches!(err, CodecError::UnsupportedType { .. }));
            s.encode_create(5, EntityType::Sprite)
        })
        .unwrap();
    assert_eq!(line, "C 5 S");
}
