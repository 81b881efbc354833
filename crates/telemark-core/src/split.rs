use crate::entity::{MessageEntity, utf16_len};

/// Split `(text, entities)` into chunks of at most `max_utf16_len` UTF-16
/// code units each.
///
/// Split points prefer positions right after a newline; a single unbroken
/// run longer than the budget is hard-split at the budget boundary, always
/// on a char boundary so a surrogate pair is never cut. Entities are
/// clipped to each chunk's range and re-based; entities clipped to nothing
/// are dropped. Chunk texts concatenate back to `text` exactly.
pub fn split_entities(
    text: &str,
    entities: &[MessageEntity],
    max_utf16_len: usize,
) -> Vec<(String, Vec<MessageEntity>)> {
    let total = utf16_len(text);
    if total <= max_utf16_len {
        return vec![(text.to_string(), entities.to_vec())];
    }
    let budget = max_utf16_len.max(1);

    // Char boundaries as (byte offset, utf16 offset) pairs, end inclusive,
    // plus the boundary indices sitting right after each newline.
    let mut bounds: Vec<(usize, usize)> = Vec::with_capacity(text.len() + 1);
    let mut cut_points: Vec<usize> = Vec::new();
    let mut cum = 0usize;
    for (byte, ch) in text.char_indices() {
        bounds.push((byte, cum));
        cum += ch.len_utf16();
        if ch == '\n' {
            cut_points.push(bounds.len());
        }
    }
    bounds.push((text.len(), cum));
    let last = bounds.len() - 1;

    // Greedy packing: take the farthest newline cut that still fits.
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    let mut cursor = 0usize;
    let mut cut_search = 0usize;
    while cursor < last {
        let limit = bounds[cursor].1 + budget;
        if bounds[last].1 <= limit {
            ranges.push((cursor, last));
            break;
        }
        let mut best = None;
        while cut_search < cut_points.len() {
            let cut = cut_points[cut_search];
            if cut <= cursor {
                cut_search += 1;
                continue;
            }
            if bounds[cut].1 <= limit {
                best = Some(cut);
                cut_search += 1;
            } else {
                break;
            }
        }
        let end = match best {
            Some(cut) => cut,
            None => {
                log::debug!(
                    "no newline split point within {budget} code units, hard-splitting"
                );
                let mut idx = cursor;
                while idx + 1 <= last && bounds[idx + 1].1 <= limit {
                    idx += 1;
                }
                // Force progress past an over-budget single char.
                if idx == cursor { cursor + 1 } else { idx }
            }
        };
        ranges.push((cursor, end));
        cursor = end;
    }

    ranges
        .into_iter()
        .map(|(start, end)| {
            let chunk_text = text[bounds[start].0..bounds[end].0].to_string();
            let chunk_utf16_start = bounds[start].1;
            let chunk_utf16_end = bounds[end].1;
            let chunk_entities = clip_entities(entities, chunk_utf16_start, chunk_utf16_end);
            (chunk_text, chunk_entities)
        })
        .collect()
}

fn clip_entities(
    entities: &[MessageEntity],
    chunk_start: usize,
    chunk_end: usize,
) -> Vec<MessageEntity> {
    let mut clipped = Vec::new();
    for entity in entities {
        let start = entity.offset;
        let end = entity.offset + entity.length;
        if end <= chunk_start || start >= chunk_end {
            continue;
        }
        let clipped_start = start.max(chunk_start);
        let clipped_end = end.min(chunk_end);
        if clipped_end <= clipped_start {
            continue;
        }
        clipped.push(MessageEntity {
            offset: clipped_start - chunk_start,
            length: clipped_end - clipped_start,
            ..entity.clone()
        });
    }
    clipped
}

/// Strip leading and trailing newlines, shifting entity offsets by the
/// leading trim and clipping to the stripped length. Entities left empty
/// are dropped. Meant for per-chunk cleanup before delivery, after
/// [`split_entities`].
pub fn strip_newlines(
    text: &str,
    entities: &[MessageEntity],
) -> (String, Vec<MessageEntity>) {
    let leading = text.chars().take_while(|&c| c == '\n').count();
    let trailing = text.chars().rev().take_while(|&c| c == '\n').count();
    if leading == 0 && trailing == 0 {
        return (text.to_string(), entities.to_vec());
    }
    if leading + trailing >= text.len() {
        // Nothing but newlines.
        return (String::new(), Vec::new());
    }
    // Newlines are 1 byte and 1 UTF-16 code unit each.
    let stripped = &text[leading..text.len() - trailing];
    let stripped_len = utf16_len(stripped);

    let mut adjusted = Vec::new();
    for entity in entities {
        let end = (entity.offset + entity.length).saturating_sub(leading);
        if entity.offset + entity.length <= leading {
            continue;
        }
        let start = entity.offset.saturating_sub(leading);
        if start >= stripped_len {
            continue;
        }
        let end = end.min(stripped_len);
        if end <= start {
            continue;
        }
        adjusted.push(MessageEntity {
            offset: start,
            length: end - start,
            ..entity.clone()
        });
    }
    (stripped.to_string(), adjusted)
}
