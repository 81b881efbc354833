use serde_json::json;
use telemark_core::{EntityKind, MessageEntity, split_entities, strip_newlines, utf16_len};

#[test]
fn no_split_when_text_fits() {
    let entities = vec![MessageEntity::new(EntityKind::Bold, 0, 5)];
    let chunks = split_entities("hello", &entities, 100);
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].0, "hello");
    assert_eq!(chunks[0].1.len(), 1);
}

#[test]
fn empty_text_yields_one_empty_chunk() {
    let chunks = split_entities("", &[], 100);
    assert_eq!(chunks, vec![(String::new(), Vec::new())]);
}

#[test]
fn splits_at_newlines() {
    let chunks = split_entities("aaa\nbbb\nccc", &[], 5);
    assert!(chunks.len() >= 2);
    let combined: String = chunks.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(combined, "aaa\nbbb\nccc");
    for (text, _) in &chunks {
        assert!(utf16_len(text) <= 5);
    }
}

#[test]
fn entity_lands_in_first_chunk() {
    let entities = vec![MessageEntity::new(EntityKind::Bold, 0, 4)];
    let chunks = split_entities("bold\nnormal", &entities, 5);
    assert!(chunks.len() >= 2);
    assert_eq!(chunks[0].1.len(), 1);
    assert_eq!(chunks[0].1[0].kind, EntityKind::Bold);
}

#[test]
fn entity_in_later_chunk_is_rebased() {
    let entities = vec![MessageEntity::new(EntityKind::Bold, 7, 4)];
    let chunks = split_entities("normal\nbold", &entities, 7);
    let rebased = chunks
        .iter()
        .flat_map(|(_, entities)| entities.iter())
        .find(|e| e.kind == EntityKind::Bold)
        .expect("bold entity survives");
    assert_eq!(rebased.offset, 0);
    assert_eq!(rebased.length, 4);
}

#[test]
fn entity_spanning_boundary_is_clipped_into_both() {
    let text = "aabbcc\nddee";
    let entities = vec![MessageEntity::new(EntityKind::Bold, 0, utf16_len(text))];
    let chunks = split_entities(text, &entities, 7);
    assert!(chunks.len() >= 2);
    for (chunk_text, chunk_entities) in &chunks {
        assert!(
            chunk_entities.iter().any(|e| e.kind == EntityKind::Bold),
            "chunk {chunk_text:?} lost its bold range"
        );
    }
}

#[test]
fn concatenation_reproduces_input() {
    let text = "line1\nline2\nline3\nline4\nline5";
    let entities = vec![MessageEntity::new(EntityKind::Italic, 0, 5)];
    let chunks = split_entities(text, &entities, 12);
    let combined: String = chunks.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(combined, text);
}

#[test]
fn supplementary_chars_are_never_cut() {
    let text = "📌\n📌\n📌";
    let chunks = split_entities(text, &[], 4);
    let combined: String = chunks.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(combined, text);
    for (chunk, _) in &chunks {
        assert!(utf16_len(chunk) <= 4);
    }
}

#[test]
fn hard_split_without_newlines() {
    let chunks = split_entities("abcdefghij", &[], 4);
    let combined: String = chunks.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(combined, "abcdefghij");
    for (chunk, _) in &chunks {
        assert!(utf16_len(chunk) <= 4);
    }
}

#[test]
fn hard_split_respects_surrogate_pairs() {
    // Three astral chars, 2 units each; an odd budget cannot land mid-pair.
    let text = "📌📌📌";
    let chunks = split_entities(text, &[], 3);
    let combined: String = chunks.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(combined, text);
    for (chunk, _) in &chunks {
        assert!(utf16_len(chunk) <= 3);
    }
}

#[test]
fn clipped_entities_stay_in_chunk_bounds() {
    let text = "aaaa\nbbbb\ncccc";
    let entities = vec![
        MessageEntity::new(EntityKind::Bold, 2, 8),
        MessageEntity::new(EntityKind::Italic, 0, 14),
    ];
    for budget in 1..=14 {
        for (chunk_text, chunk_entities) in split_entities(text, &entities, budget) {
            let chunk_len = utf16_len(&chunk_text);
            for entity in &chunk_entities {
                assert!(entity.length > 0);
                assert!(entity.offset + entity.length <= chunk_len);
            }
        }
    }
}

// -- strip_newlines ------------------------------------------------------------

#[test]
fn strip_trims_both_ends() {
    let (text, entities) = strip_newlines("\n\nhello\n", &[]);
    assert_eq!(text, "hello");
    assert!(entities.is_empty());
}

#[test]
fn strip_adjusts_entity_offsets() {
    let entities = vec![MessageEntity::new(EntityKind::Bold, 2, 5)];
    let (text, adjusted) = strip_newlines("\n\nhello\n", &entities);
    assert_eq!(text, "hello");
    assert_eq!(adjusted.len(), 1);
    assert_eq!(adjusted[0].offset, 0);
    assert_eq!(adjusted[0].length, 5);
}

#[test]
fn strip_drops_entities_left_empty() {
    // The entity covers only the leading newline.
    let entities = vec![MessageEntity::new(EntityKind::Bold, 0, 1)];
    let (_, adjusted) = strip_newlines("\nhello", &entities);
    assert!(adjusted.is_empty());
}

#[test]
fn strip_clips_overhanging_entities() {
    let entities = vec![MessageEntity::new(EntityKind::Bold, 1, 7)];
    let (text, adjusted) = strip_newlines("\nhello\n\n", &entities);
    assert_eq!(text, "hello");
    assert_eq!(adjusted[0].offset, 0);
    assert_eq!(adjusted[0].length, 5);
}

#[test]
fn strip_of_only_newlines_is_empty() {
    let entities = vec![MessageEntity::new(EntityKind::Bold, 0, 2)];
    let (text, adjusted) = strip_newlines("\n\n\n", &entities);
    assert_eq!(text, "");
    assert!(adjusted.is_empty());
}

// -- wire format -----------------------------------------------------------------

#[test]
fn wire_format_minimal() {
    let entity = MessageEntity::new(EntityKind::Bold, 0, 5);
    assert_eq!(
        serde_json::to_value(&entity).unwrap(),
        json!({"type": "bold", "offset": 0, "length": 5})
    );
}

#[test]
fn wire_format_with_url() {
    let entity = MessageEntity {
        url: Some("https://example.com".to_string()),
        ..MessageEntity::new(EntityKind::TextLink, 0, 5)
    };
    assert_eq!(
        serde_json::to_value(&entity).unwrap(),
        json!({
            "type": "text_link",
            "offset": 0,
            "length": 5,
            "url": "https://example.com"
        })
    );
}

#[test]
fn wire_format_with_language() {
    let entity = MessageEntity {
        language: Some("python".to_string()),
        ..MessageEntity::new(EntityKind::Pre, 0, 10)
    };
    let value = serde_json::to_value(&entity).unwrap();
    assert_eq!(value["language"], "python");
    assert!(value.get("url").is_none());
    assert!(value.get("custom_emoji_id").is_none());
}

#[test]
fn wire_format_with_custom_emoji() {
    let entity = MessageEntity {
        custom_emoji_id: Some("5368324170671202286".to_string()),
        ..MessageEntity::new(EntityKind::CustomEmoji, 0, 2)
    };
    let value = serde_json::to_value(&entity).unwrap();
    assert_eq!(value["type"], "custom_emoji");
    assert_eq!(value["custom_emoji_id"], "5368324170671202286");
}

#[test]
fn wire_format_kind_names() {
    for (kind, name) in [
        (EntityKind::Bold, "bold"),
        (EntityKind::Italic, "italic"),
        (EntityKind::Underline, "underline"),
        (EntityKind::Strikethrough, "strikethrough"),
        (EntityKind::Spoiler, "spoiler"),
        (EntityKind::Code, "code"),
        (EntityKind::Pre, "pre"),
        (EntityKind::TextLink, "text_link"),
        (EntityKind::CustomEmoji, "custom_emoji"),
        (EntityKind::Blockquote, "blockquote"),
        (EntityKind::ExpandableBlockquote, "expandable_blockquote"),
    ] {
        let value = serde_json::to_value(MessageEntity::new(kind, 0, 1)).unwrap();
        assert_eq!(value["type"], name);
    }
}
