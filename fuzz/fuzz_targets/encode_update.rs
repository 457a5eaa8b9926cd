#![no_main]

use codec::{EntityState, Serializer, Value};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let serializer = Serializer::standard().unwrap();
    let mut diff = EntityState::new();
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of diff entries.
    while idx < data.len() && diff.len() < 64 {
        let op = data[idx] % 3;
        idx += 1;
        let len = data.get(idx).map_or(0, |b| usize::from(*b % 16));
        idx += 1;
        let end = (idx + len).min(data.len());
        let chunk = &data[idx.min(end)..end];
        idx = end;

        let key = String::from_utf8_lossy(chunk).replace([' ', '\''], "_");
        let value = match op {
            0 => {
                let mut bytes = [0u8; 8];
                for (dst, src) in bytes.iter_mut().zip(chunk) {
                    *dst = *src;
                }
                Value::Float(f64::from_le_bytes(bytes))
            }
            1 => Value::Text(String::from_utf8_lossy(chunk).replace('\\', "/")),
            _ => Value::Int(i64::from(len as u8)),
        };
        diff.set(key, value);
    }

    let Ok(line) = serializer.encode_update(1, &diff, 0.0) else {
        // Only non-finite floats may fail.
        assert!(diff.iter().any(|(_, v)| matches!(v, Value::Float(f) if !f.is_finite())));
        return;
    };
    assert!(line.starts_with("U 1 0"));
    assert_eq!(line, serializer.encode_update(1, &diff, 0.0).unwrap());
    for (_, value) in diff.iter() {
        if let Value::Float(f) = value {
            let token = wire::format_number(*f).unwrap();
            assert!(!token.contains(',') && !token.contains('e'));
        }
    }
});
