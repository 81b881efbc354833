use telemark_core::{
    EntityKind, MessageEntity, RenderConfig, SegmentKind, convert, convert_with_segments,
    utf16_len,
};

fn run(markdown: &str) -> (String, Vec<MessageEntity>) {
    convert(markdown, false, RenderConfig::global())
}

fn find_entity(entities: &[MessageEntity], kind: EntityKind) -> Option<&MessageEntity> {
    entities.iter().find(|e| e.kind == kind)
}

/// Substring of `text` covered by `entity`, resolving UTF-16 offsets.
fn entity_text(text: &str, entity: &MessageEntity) -> String {
    let mut out = String::new();
    let mut pos = 0;
    for ch in text.chars() {
        let next = pos + ch.len_utf16();
        if pos >= entity.offset && next <= entity.offset + entity.length {
            out.push(ch);
        }
        pos = next;
    }
    out
}

#[test]
fn bold_produces_entity() {
    let (text, entities) = run("**hello**");
    assert_eq!(text, "hello");
    let bold = find_entity(&entities, EntityKind::Bold).expect("bold entity");
    assert_eq!(bold.offset, 0);
    assert_eq!(bold.length, 5);
}

#[test]
fn bold_in_sentence() {
    let (text, entities) = run("foo **bar** baz");
    let bold = find_entity(&entities, EntityKind::Bold).expect("bold entity");
    assert_eq!(entity_text(&text, bold), "bar");
}

#[test]
fn italic_produces_entity() {
    let (text, entities) = run("*hello*");
    let italic = find_entity(&entities, EntityKind::Italic).expect("italic entity");
    assert_eq!(entity_text(&text, italic), "hello");
}

#[test]
fn strikethrough_produces_entity() {
    let (text, entities) = run("~~hello~~");
    let strike = find_entity(&entities, EntityKind::Strikethrough).expect("strikethrough");
    assert_eq!(entity_text(&text, strike), "hello");
}

#[test]
fn nested_italic_stays_inside_bold() {
    let (text, entities) = run("**bold *italic* bold**");
    let bold = find_entity(&entities, EntityKind::Bold).expect("bold entity");
    let italic = find_entity(&entities, EntityKind::Italic).expect("italic entity");
    assert!(italic.offset >= bold.offset);
    assert!(italic.offset + italic.length <= bold.offset + bold.length);
    assert_eq!(entity_text(&text, italic), "italic");
}

#[test]
fn inline_code_is_raw() {
    let (text, entities) = run("use `print()` here");
    let code = find_entity(&entities, EntityKind::Code).expect("code entity");
    assert_eq!(entity_text(&text, code), "print()");
}

#[test]
fn fenced_code_block() {
    let (text, entities) = run("```python\nprint('hello')\n```");
    let pre = find_entity(&entities, EntityKind::Pre).expect("pre entity");
    assert_eq!(pre.language.as_deref(), Some("python"));
    assert!(entity_text(&text, pre).contains("print('hello')"));
}

#[test]
fn code_block_without_language() {
    let (_, entities) = run("```\nsome code\n```");
    let pre = find_entity(&entities, EntityKind::Pre).expect("pre entity");
    assert!(pre.language.is_none());
}

#[test]
fn code_block_emits_segment() {
    let (text, _, segments) =
        convert_with_segments("```python\ncode\n```", false, RenderConfig::global());
    let segment = segments
        .iter()
        .find(|s| s.kind == SegmentKind::CodeBlock)
        .expect("code_block segment");
    assert_eq!(segment.raw_code, "code");
    assert_eq!(segment.language, "python");
    assert_eq!(&text[segment.text_start..segment.text_end], "code");
    assert_eq!(segment.utf16_end - segment.utf16_start, utf16_len("code"));
}

#[test]
fn mermaid_fence_is_tagged() {
    let (_, _, segments) = convert_with_segments(
        "```mermaid\ngraph TD\nA-->B\n```",
        false,
        RenderConfig::global(),
    );
    assert!(segments.iter().any(|s| s.kind == SegmentKind::Mermaid));
}

#[test]
fn h1_is_bold_underline_with_glyph() {
    let (text, entities) = run("# Title");
    let bold = find_entity(&entities, EntityKind::Bold).expect("bold entity");
    assert!(entity_text(&text, bold).contains("Title"));
    assert!(find_entity(&entities, EntityKind::Underline).is_some());
    assert!(text.contains("📌"));
}

#[test]
fn h2_and_h3_use_their_glyphs() {
    let (text, _) = run("## Subtitle");
    assert!(text.contains("✏"));
    let (text, _) = run("### Section");
    assert!(text.contains("📚"));
}

#[test]
fn h5_is_italic_without_glyph() {
    let (text, entities) = run("##### Deep");
    assert!(find_entity(&entities, EntityKind::Italic).is_some());
    assert_eq!(text, "Deep");
}

#[test]
fn inline_link() {
    let (text, entities) = run("[Google](https://google.com)");
    let link = find_entity(&entities, EntityKind::TextLink).expect("text_link");
    assert_eq!(link.url.as_deref(), Some("https://google.com"));
    assert_eq!(entity_text(&text, link), "Google");
}

#[test]
fn empty_url_link_is_plain_text() {
    let (text, entities) = run("[just text]()");
    assert!(text.contains("just text"));
    assert!(find_entity(&entities, EntityKind::TextLink).is_none());
}

#[test]
fn bare_url_survives_as_text() {
    let (text, _) = run("visit https://example.com today");
    assert!(text.contains("https://example.com"));
}

#[test]
fn image_gets_glyph_and_link_entity() {
    let (text, entities) = run("![alt](https://example.com/img.png)");
    let link = find_entity(&entities, EntityKind::TextLink).expect("text_link");
    assert_eq!(link.url.as_deref(), Some("https://example.com/img.png"));
    assert!(text.contains("🖼"));
}

#[test]
fn custom_emoji_image() {
    let (text, entities) = run("![emoji](tg://emoji?id=5368324170671202286)");
    let emoji = find_entity(&entities, EntityKind::CustomEmoji).expect("custom_emoji");
    assert_eq!(emoji.custom_emoji_id.as_deref(), Some("5368324170671202286"));
    // The image glyph is suppressed for emoji destinations.
    assert!(!text.contains("🖼"));
}

#[test]
fn custom_emoji_link() {
    let (_, entities) = run("[e](tg://emoji?id=5368324170671202286)");
    let emoji = find_entity(&entities, EntityKind::CustomEmoji).expect("custom_emoji");
    assert_eq!(emoji.custom_emoji_id.as_deref(), Some("5368324170671202286"));
}

#[test]
fn malformed_emoji_id_is_ordinary_link() {
    // 18 digits, not 19.
    let (_, entities) = run("![e](tg://emoji?id=536832417067120228)");
    assert!(find_entity(&entities, EntityKind::CustomEmoji).is_none());
    assert!(find_entity(&entities, EntityKind::TextLink).is_some());
}

#[test]
fn simple_blockquote() {
    let (text, entities) = run("> quoted text");
    let quote = find_entity(&entities, EntityKind::Blockquote).expect("blockquote");
    assert!(entity_text(&text, quote).contains("quoted text"));
}

#[test]
fn long_blockquote_becomes_expandable() {
    let source = format!("> {}", "a".repeat(250));
    let (_, entities) = run(&source);
    assert!(find_entity(&entities, EntityKind::ExpandableBlockquote).is_some());
    assert!(find_entity(&entities, EntityKind::Blockquote).is_none());
}

#[test]
fn promotion_respects_config_flag() {
    let config = RenderConfig {
        cite_expandable: false,
        ..RenderConfig::default()
    };
    let source = format!("> {}", "a".repeat(250));
    let (_, entities) = convert(&source, false, &config);
    assert!(find_entity(&entities, EntityKind::Blockquote).is_some());
    assert!(find_entity(&entities, EntityKind::ExpandableBlockquote).is_none());
}

#[test]
fn table_renders_as_pre_grid() {
    let (text, entities) = run("| a | b |\n| --- | --- |\n| 1 | 2 |");
    let pre = find_entity(&entities, EntityKind::Pre).expect("pre entity");
    let grid = entity_text(&text, pre);
    assert!(grid.contains("a | b"));
    assert!(grid.contains("1 | 2"));
    assert!(grid.contains("-+-"));
}

#[test]
fn unordered_list_uses_bullets() {
    let (text, _) = run("- item1\n- item2");
    assert!(text.contains("⦁ item1"));
    assert!(text.contains("⦁ item2"));
}

#[test]
fn ordered_list_counts() {
    let (text, _) = run("1. first\n2. second");
    assert!(text.contains("1. first"));
    assert!(text.contains("2. second"));
}

#[test]
fn ordered_list_honors_start_number() {
    let (text, _) = run("3. third\n4. fourth");
    assert!(text.contains("3. third"));
    assert!(text.contains("4. fourth"));
}

#[test]
fn nested_list_indents() {
    let (text, _) = run("- a\n  - b");
    assert!(text.contains("⦁ a\n  ⦁ b"));
}

#[test]
fn task_list_replaces_bullets() {
    let (text, _) = run("- [x] done\n- [ ] todo");
    assert!(text.contains("✅ done"));
    assert!(text.contains("☑ todo"));
    assert!(!text.contains("⦁"));
}

#[test]
fn spoiler_marks_become_entity() {
    let (text, entities) = run("this is ||secret|| text");
    let spoiler = find_entity(&entities, EntityKind::Spoiler).expect("spoiler");
    assert_eq!(entity_text(&text, spoiler), "secret");
}

#[test]
fn spoiler_marks_inside_code_are_literal() {
    let (text, entities) = run("`||not spoiler||`");
    assert!(find_entity(&entities, EntityKind::Spoiler).is_none());
    assert!(text.contains("||not spoiler||"));
}

#[test]
fn thematic_break_renders_separator() {
    let (text, _) = run("above\n\n---\n\nbelow");
    assert!(text.contains("————————"));
}

#[test]
fn paragraphs_get_one_blank_line() {
    let (text, _) = run("para1\n\npara2");
    assert_eq!(text, "para1\n\npara2");
}

#[test]
fn heading_then_paragraph() {
    let (text, _) = run("# Title\n\nContent");
    assert!(text.contains("Title"));
    assert!(text.contains("Content"));
    // No run of more than one blank line.
    assert!(!text.contains("\n\n\n"));
}

#[test]
fn emoji_shifts_utf16_offsets() {
    let (_, entities) = run("📌 **bold**");
    let bold = find_entity(&entities, EntityKind::Bold).expect("bold entity");
    // "📌 " is 2 + 1 code units.
    assert_eq!(bold.offset, 3);
    assert_eq!(bold.length, 4);
}

#[test]
fn cjk_counts_one_unit_each() {
    let (_, entities) = run("你好 **世界**");
    let bold = find_entity(&entities, EntityKind::Bold).expect("bold entity");
    assert_eq!(bold.offset, 3);
    assert_eq!(bold.length, 2);
}

#[test]
fn inline_math_is_code() {
    let (text, entities) = run("$x + y$");
    let code = find_entity(&entities, EntityKind::Code).expect("code entity");
    assert!(entity_text(&text, code).contains("x + y"));
}

#[test]
fn display_math_is_pre() {
    let (_, entities) = run("$$x + y$$");
    assert!(find_entity(&entities, EntityKind::Pre).is_some());
}

#[test]
fn math_span_is_converted_to_unicode() {
    let (text, _) = run("$\\frac{1}{2}$");
    assert!(text.contains('½'));
}

#[test]
fn latex_escape_preprocesses_bracket_spans() {
    let (text, _) = convert(
        "The identity \\(\\alpha + \\beta\\) holds.",
        true,
        RenderConfig::global(),
    );
    assert!(text.contains("α + β"));
}

#[test]
fn latex_escape_skips_non_latex_spans() {
    // "as is" fails the command-substring gate, so the span is left for the
    // markdown parser, which unescapes the parens.
    let (text, entities) = convert("stay \\(as is\\) here", true, RenderConfig::global());
    assert!(text.contains("(as is)"));
    assert!(find_entity(&entities, EntityKind::Code).is_none());
}

#[test]
fn custom_glyphs_are_honored() {
    let mut config = RenderConfig::default();
    config.symbols.heading_level_1 = "#".to_string();
    let (text, _) = convert("# Title", false, &config);
    assert!(text.starts_with("# Title"));
}

#[test]
fn entities_stay_in_bounds() {
    let md = "# Hello World\n\nThis is **bold** and *italic* text.\n\n\
              - item 1\n- item 2\n\n> A quote\n\n```python\nprint(\"hello\")\n```\n";
    let (text, entities) = run(md);
    let total = utf16_len(&text);
    for entity in &entities {
        assert!(entity.length > 0);
        assert!(entity.offset + entity.length <= total);
    }
}

#[test]
fn mixed_document_covers_all_kinds() {
    let md = "# Hello World\n\nThis is **bold** and *italic* text.\n\n\
              - item 1\n- item 2\n\n> A quote\n\n```python\nprint(\"hello\")\n```\n";
    let (text, entities) = run(md);
    for kind in [
        EntityKind::Bold,
        EntityKind::Italic,
        EntityKind::Blockquote,
        EntityKind::Pre,
    ] {
        assert!(find_entity(&entities, kind).is_some(), "missing {kind:?}");
    }
    assert!(text.contains("Hello World"));
    assert!(text.contains("item 1"));
    assert!(text.contains("A quote"));
    assert!(text.contains("print(\"hello\")"));
}
