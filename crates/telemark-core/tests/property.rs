use std::panic;

use telemark_core::{
    EntityKind, MessageEntity, RenderConfig, convert, convert_latex, split_entities, utf16_len,
};

const CASES: usize = 200;
const MAX_LEN: usize = 512;
const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 \
\n\t#@*`$[](){}!<>:+-_=./\\\\\"|~^&%";

#[test]
fn converter_never_panics_on_random_input() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = Lcg::new(0x7f4a_2d91_13b4_55a1);
    for case in 0..CASES {
        let len = rng.gen_range(0, MAX_LEN + 1);
        let source = random_string(&mut rng, len);
        let result = panic::catch_unwind(|| convert(&source, true, RenderConfig::global()));
        if result.is_err() {
            return Err(format!("convert panicked for case {}: {:?}", case, source).into());
        }
    }
    Ok(())
}

#[test]
fn converter_entities_stay_in_bounds_on_random_input() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = Lcg::new(0x91d4_2f8e_c1a3_044f);
    for case in 0..CASES {
        let len = rng.gen_range(0, MAX_LEN + 1);
        let source = random_string(&mut rng, len);
        let (text, entities) = convert(&source, true, RenderConfig::global());
        let total = utf16_len(&text);
        for entity in &entities {
            if entity.length == 0 || entity.offset + entity.length > total {
                return Err(format!(
                    "entity {:?} out of bounds (total {}) for case {}:\n---\n{}\n---",
                    entity, total, case, source
                )
                .into());
            }
        }
    }
    Ok(())
}

#[test]
fn split_round_trips_on_random_input() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = Lcg::new(0x55aa_1234_dead_beef);
    for case in 0..CASES {
        let len = rng.gen_range(0, MAX_LEN + 1);
        let text = random_unicode_string(&mut rng, len);
        let entities = random_entities(&mut rng, utf16_len(&text));
        let max_len = rng.gen_range(1, 64);
        let chunks = split_entities(&text, &entities, max_len);
        let combined: String = chunks.iter().map(|(t, _)| t.as_str()).collect();
        if combined != text {
            return Err(format!(
                "round trip failed for case {} (max_len {}):\n---\n{}\n---",
                case, max_len, text
            )
            .into());
        }
    }
    Ok(())
}

#[test]
fn split_chunks_respect_budget_on_random_input() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = Lcg::new(0x0123_4567_89ab_cdef);
    for case in 0..CASES {
        let len = rng.gen_range(0, MAX_LEN + 1);
        let text = random_unicode_string(&mut rng, len);
        // Budget 2 or more: every char fits within a fresh chunk, so the
        // bound is strict.
        let max_len = rng.gen_range(2, 64);
        for (chunk, _) in split_entities(&text, &[], max_len) {
            if utf16_len(&chunk) > max_len {
                return Err(format!(
                    "chunk over budget {} for case {}: {:?}",
                    max_len, case, chunk
                )
                .into());
            }
        }
    }
    Ok(())
}

#[test]
fn split_entities_stay_in_chunk_bounds_on_random_input()
-> Result<(), Box<dyn std::error::Error>> {
    let mut rng = Lcg::new(0xfeed_f00d_0bad_cafe);
    for case in 0..CASES {
        let len = rng.gen_range(0, MAX_LEN + 1);
        let text = random_unicode_string(&mut rng, len);
        let entities = random_entities(&mut rng, utf16_len(&text));
        let max_len = rng.gen_range(1, 64);
        for (chunk, chunk_entities) in split_entities(&text, &entities, max_len) {
            let chunk_len = utf16_len(&chunk);
            for entity in &chunk_entities {
                if entity.length == 0 || entity.offset + entity.length > chunk_len {
                    return Err(format!(
                        "entity {:?} outside chunk (len {}) for case {}",
                        entity, chunk_len, case
                    )
                    .into());
                }
            }
        }
    }
    Ok(())
}

#[test]
fn latex_engine_never_panics_on_random_input() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = Lcg::new(0xc0ff_ee00_1234_5678);
    for case in 0..CASES {
        let len = rng.gen_range(0, MAX_LEN + 1);
        let source = random_string(&mut rng, len);
        let result = panic::catch_unwind(|| convert_latex(&source));
        if result.is_err() {
            return Err(format!("convert_latex panicked for case {}: {:?}", case, source).into());
        }
    }
    Ok(())
}

fn random_string(rng: &mut Lcg, len: usize) -> String {
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        let idx = rng.gen_range(0, CHARSET.len());
        let byte = CHARSET.get(idx).copied().unwrap_or(b' ');
        out.push(byte as char);
    }
    out
}

/// Like [`random_string`], but mixes in newlines and multi-unit chars so
/// splitting has surrogate pairs and cut points to work around.
fn random_unicode_string(rng: &mut Lcg, len: usize) -> String {
    const EXTRA: [char; 6] = ['📌', '✅', '你', '好', '\n', '½'];
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        if rng.gen_range(0, 4) == 0 {
            out.push(EXTRA[rng.gen_range(0, EXTRA.len())]);
        } else {
            let idx = rng.gen_range(0, CHARSET.len());
            out.push(CHARSET.get(idx).copied().unwrap_or(b' ') as char);
        }
    }
    out
}

fn random_entities(rng: &mut Lcg, total: usize) -> Vec<MessageEntity> {
    if total == 0 {
        return Vec::new();
    }
    let count = rng.gen_range(0, 5);
    let mut entities = Vec::with_capacity(count);
    for _ in 0..count {
        let offset = rng.gen_range(0, total);
        let length = rng.gen_range(1, total - offset + 1);
        entities.push(MessageEntity::new(EntityKind::Bold, offset, length));
    }
    entities
}

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn gen_range(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        let span = max - min;
        let value = (self.next() >> 1) as usize;
        min + (value % span)
    }
}
