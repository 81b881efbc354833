use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::config::RenderConfig;
use crate::entity::{EntityKind, MessageEntity, utf16_len};
use crate::latex::{contains_latex_command, convert_latex};

/// Convert markdown to `(plain_text, entities)` for the Bot API.
///
/// `latex_escape` controls whether `\[...\]` and `\(...\)` spans are
/// pre-converted to Unicode before parsing.
pub fn convert(
    markdown: &str,
    latex_escape: bool,
    config: &RenderConfig,
) -> (String, Vec<MessageEntity>) {
    let (text, entities, _) = convert_with_segments(markdown, latex_escape, config);
    (text, entities)
}

/// Like [`convert`], but also reports the code-block segments of the output
/// text so a consumer can re-extract them verbatim.
pub fn convert_with_segments(
    markdown: &str,
    latex_escape: bool,
    config: &RenderConfig,
) -> (String, Vec<MessageEntity>, Vec<Segment>) {
    let preprocessed = if latex_escape {
        escape_latex(markdown)
    } else {
        markdown.to_string()
    };
    let preprocessed = preprocess_spoilers(&preprocessed);
    let events = Parser::new_ext(&preprocessed, parser_options());
    EventWalker::new(config).walk(events)
}

fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_MATH
}

// --- Segments ---------------------------------------------------------------

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SegmentKind {
    CodeBlock,
    Mermaid,
}

/// A contiguous region of the output text that originated from a fenced or
/// indented code block. `text_start`/`text_end` are byte offsets into the
/// output text; `utf16_start`/`utf16_end` the matching UTF-16 offsets.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text_start: usize,
    pub text_end: usize,
    pub utf16_start: usize,
    pub utf16_end: usize,
    pub language: String,
    pub raw_code: String,
}

// --- Preprocessing ------------------------------------------------------------

/// Pre-convert `\[...\]` and `\(...\)` spans to Unicode math, re-emitting
/// them as `$$...$$` / `$...$` so the math-aware parser picks them up.
/// Regions are bounded by paragraph breaks, matching how display math is
/// authored in practice.
fn escape_latex(text: &str) -> String {
    text.split("\n\n")
        .map(|part| {
            let part = replace_latex_spans(part, "\\[", "\\]", true);
            replace_latex_spans(&part, "\\(", "\\)", false)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn replace_latex_spans(text: &str, open: &str, close: &str, display: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    loop {
        let Some(start) = rest.find(open) else {
            out.push_str(rest);
            return out;
        };
        let after_open = start + open.len();
        let Some(close_rel) = rest[after_open..].find(close) else {
            out.push_str(rest);
            return out;
        };
        let content = &rest[after_open..after_open + close_rel];
        let end = after_open + close_rel + close.len();
        out.push_str(&rest[..start]);
        if contains_latex_command(content) {
            let converted = convert_latex(content);
            if display {
                out.push_str("$$");
                out.push_str(converted.trim());
                out.push_str("$$");
            } else {
                out.push('$');
                out.push_str(converted.trim());
                out.push('$');
            }
        } else {
            // Not recognizably LaTeX; keep the span untouched.
            out.push_str(&rest[start..end]);
        }
        rest = &rest[end..];
    }
}

/// Rewrite `||spoiler||` runs outside code spans and fences into the
/// spoiler tags the walker understands.
fn preprocess_spoilers(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (region, is_code) in code_regions(text) {
        if is_code {
            out.push_str(region);
        } else {
            replace_spoilers(region, &mut out);
        }
    }
    out
}

/// Split `text` into alternating plain and code regions. A code region is a
/// ``` fence with a closer, or a single-backtick span closed on the same
/// line.
fn code_regions(text: &str) -> Vec<(&str, bool)> {
    let mut regions = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;
    while i < text.len() {
        let rest = &text[i..];
        if rest.starts_with("```") {
            if let Some(close_rel) = rest[3..].find("```") {
                let end = i + 3 + close_rel + 3;
                if plain_start < i {
                    regions.push((&text[plain_start..i], false));
                }
                regions.push((&text[i..end], true));
                plain_start = end;
                i = end;
                continue;
            }
        } else if rest.starts_with('`') {
            let line_end = rest.find('\n').unwrap_or(rest.len());
            if let Some(close_rel) = rest[1..line_end].find('`') {
                if close_rel > 0 {
                    let end = i + 1 + close_rel + 1;
                    if plain_start < i {
                        regions.push((&text[plain_start..i], false));
                    }
                    regions.push((&text[i..end], true));
                    plain_start = end;
                    i = end;
                    continue;
                }
            }
        }
        i += rest.chars().next().map_or(1, char::len_utf8);
    }
    if plain_start < text.len() {
        regions.push((&text[plain_start..], false));
    }
    regions
}

fn replace_spoilers(text: &str, out: &mut String) {
    let mut i = 0;
    let mut prev: Option<char> = None;
    while i < text.len() {
        let rest = &text[i..];
        if rest.starts_with("||") && prev != Some('\\') {
            if let Some(close) = find_spoiler_close(rest) {
                out.push_str("<tg-spoiler>");
                out.push_str(&rest[2..close]);
                out.push_str("</tg-spoiler>");
                prev = Some('>');
                i += close + 2;
                continue;
            }
        }
        let ch = rest.chars().next().expect("inside text bounds");
        out.push(ch);
        prev = Some(ch);
        i += ch.len_utf8();
    }
}

/// Byte offset of the `||` closing the run opened at the start of `rest`,
/// requiring at least one char of content.
fn find_spoiler_close(rest: &str) -> Option<usize> {
    match rest[2..].find("||").map(|rel| rel + 2) {
        // Immediately adjacent pair: empty content, look one bar later.
        Some(2) => rest[3..].find("||").map(|rel| rel + 3),
        other => other,
    }
}

fn validate_custom_emoji(url: &str) -> Option<&str> {
    let id = url.strip_prefix("tg://emoji?id=")?;
    (id.len() == 19 && id.bytes().all(|b| b.is_ascii_digit())).then_some(id)
}

// --- Text buffer --------------------------------------------------------------

/// Append-only output accumulator with running byte and UTF-16 offsets.
struct TextBuffer {
    parts: Vec<String>,
    utf16_offset: usize,
    byte_offset: usize,
}

impl TextBuffer {
    fn new() -> Self {
        Self {
            parts: Vec::new(),
            utf16_offset: 0,
            byte_offset: 0,
        }
    }

    fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.utf16_offset += utf16_len(text);
        self.byte_offset += text.len();
        self.parts.push(text.to_string());
    }

    fn trailing_newline_count(&self) -> usize {
        let mut count = 0;
        for part in self.parts.iter().rev() {
            for ch in part.chars().rev() {
                if ch != '\n' {
                    return count;
                }
                count += 1;
            }
        }
        count
    }

    /// Remove and return the most recent fragment. Used to retract a list
    /// bullet when the item turns out to be a task item.
    fn pop_last(&mut self) -> String {
        match self.parts.pop() {
            Some(part) => {
                self.utf16_offset -= utf16_len(&part);
                self.byte_offset -= part.len();
                part
            }
            None => String::new(),
        }
    }

    fn finish(self) -> String {
        self.parts.concat()
    }
}

// --- Entity scopes --------------------------------------------------------------

/// An open formatting scope waiting for its end event.
struct EntityScope {
    kind: EntityKind,
    start_offset: usize,
    url: Option<String>,
    language: Option<String>,
    custom_emoji_id: Option<String>,
}

impl EntityScope {
    fn new(kind: EntityKind, start_offset: usize) -> Self {
        Self {
            kind,
            start_offset,
            url: None,
            language: None,
            custom_emoji_id: None,
        }
    }
}

// --- Event walker --------------------------------------------------------------

/// Walks the markdown event stream and accumulates text, entities, and
/// segments. All state lives for one conversion call.
struct EventWalker<'c> {
    config: &'c RenderConfig,
    buf: TextBuffer,
    entity_stack: Vec<EntityScope>,
    entities: Vec<MessageEntity>,
    segments: Vec<Segment>,

    /// Top-level blocks emitted so far; drives blank-line insertion.
    block_count: usize,

    /// One slot per open list: `Some(next_number)` for ordered lists.
    list_stack: Vec<Option<u64>>,
    item_indent: String,

    /// Which entity kind each currently open link pushed, if any.
    open_links: Vec<Option<EntityKind>>,

    in_table_cell: bool,
    cell_parts: Vec<String>,
    current_row: Vec<String>,
    table_rows: Vec<Vec<String>>,

    in_code_block: bool,
    code_block_lang: String,
    code_block_parts: Vec<String>,

    heading_entities: Vec<EntityKind>,
    blockquote_scopes: Vec<EntityScope>,
}

impl<'c> EventWalker<'c> {
    fn new(config: &'c RenderConfig) -> Self {
        Self {
            config,
            buf: TextBuffer::new(),
            entity_stack: Vec::new(),
            entities: Vec::new(),
            segments: Vec::new(),
            block_count: 0,
            list_stack: Vec::new(),
            item_indent: String::new(),
            open_links: Vec::new(),
            in_table_cell: false,
            cell_parts: Vec::new(),
            current_row: Vec::new(),
            table_rows: Vec::new(),
            in_code_block: false,
            code_block_lang: String::new(),
            code_block_parts: Vec::new(),
            heading_entities: Vec::new(),
            blockquote_scopes: Vec::new(),
        }
    }

    fn walk<'input>(
        mut self,
        events: impl Iterator<Item = Event<'input>>,
    ) -> (String, Vec<MessageEntity>, Vec<Segment>) {
        for event in events {
            self.handle_event(event);
        }
        let text = self.buf.finish();
        if self.config.cite_expandable {
            let threshold = self.config.cite_expandable_threshold;
            for entity in &mut self.entities {
                if entity.kind == EntityKind::Blockquote && entity.length > threshold {
                    entity.kind = EntityKind::ExpandableBlockquote;
                }
            }
        }
        (text, self.entities, self.segments)
    }

    fn handle_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.on_start(tag),
            Event::End(tag) => self.on_end(tag),
            Event::Text(text) => self.on_text(&text),
            Event::Code(code) => self.on_inline_code(&code),
            Event::InlineMath(math) => self.on_inline_math(&math),
            Event::DisplayMath(math) => self.on_display_math(&math),
            Event::InlineHtml(html) => self.on_inline_html(&html),
            Event::Html(_) => {}
            Event::FootnoteReference(label) => self.on_text(&format!("[{label}]")),
            Event::SoftBreak => self.on_soft_break(),
            Event::HardBreak => self.on_hard_break(),
            Event::Rule => self.on_rule(),
            Event::TaskListMarker(checked) => self.on_task_list_marker(checked),
        }
    }

    fn on_start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Strong => self.push_entity(EntityKind::Bold),
            Tag::Emphasis => self.push_entity(EntityKind::Italic),
            Tag::Strikethrough => self.push_entity(EntityKind::Strikethrough),
            Tag::Paragraph => {
                if self.list_stack.is_empty() {
                    self.ensure_block_spacing();
                }
            }
            Tag::Heading { level, .. } => self.on_start_heading(level),
            Tag::BlockQuote(_) => {
                self.ensure_block_spacing();
                self.blockquote_scopes
                    .push(EntityScope::new(EntityKind::Blockquote, self.buf.utf16_offset));
            }
            Tag::CodeBlock(kind) => {
                self.in_code_block = true;
                self.code_block_parts.clear();
                self.code_block_lang = match kind {
                    CodeBlockKind::Fenced(info) => info.into_string(),
                    CodeBlockKind::Indented => String::new(),
                };
            }
            Tag::List(start) => {
                if self.list_stack.is_empty() {
                    self.ensure_block_spacing();
                }
                self.list_stack.push(start);
            }
            Tag::Item => self.on_start_item(),
            Tag::FootnoteDefinition(_) => self.ensure_block_spacing(),
            Tag::Table(_) => {
                // Alignment hints are dropped: a monospace grid cannot
                // express them without breaking column consistency.
                self.ensure_block_spacing();
                self.table_rows.clear();
            }
            Tag::TableHead | Tag::TableRow => self.current_row.clear(),
            Tag::TableCell => {
                self.cell_parts.clear();
                self.in_table_cell = true;
            }
            Tag::Link { dest_url, .. } => self.on_start_link(&dest_url),
            Tag::Image { dest_url, .. } => self.on_start_image(&dest_url),
            Tag::HtmlBlock
            | Tag::MetadataBlock(_)
            | Tag::DefinitionList
            | Tag::DefinitionListTitle
            | Tag::DefinitionListDefinition
            | Tag::Superscript
            | Tag::Subscript => {}
        }
    }

    fn on_end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Strong => self.pop_entity(EntityKind::Bold),
            TagEnd::Emphasis => self.pop_entity(EntityKind::Italic),
            TagEnd::Strikethrough => self.pop_entity(EntityKind::Strikethrough),
            TagEnd::Paragraph => self.on_end_paragraph(),
            TagEnd::Heading(_) => self.on_end_heading(),
            TagEnd::BlockQuote(_) => self.on_end_blockquote(),
            TagEnd::CodeBlock => self.on_end_code_block(),
            TagEnd::List(_) => {
                self.list_stack.pop();
                if self.list_stack.is_empty() {
                    self.block_count += 1;
                }
            }
            TagEnd::Item => {
                if self.buf.trailing_newline_count() == 0 {
                    self.buf.write("\n");
                }
            }
            TagEnd::FootnoteDefinition => {}
            TagEnd::Table => self.on_end_table(),
            TagEnd::TableHead | TagEnd::TableRow => {
                self.table_rows.push(std::mem::take(&mut self.current_row));
            }
            TagEnd::TableCell => {
                self.current_row.push(self.cell_parts.concat());
                self.cell_parts.clear();
                self.in_table_cell = false;
            }
            TagEnd::Link => {
                if let Some(Some(kind)) = self.open_links.pop() {
                    self.pop_entity(kind);
                }
            }
            TagEnd::Image => self.pop_entity_any(),
            TagEnd::HtmlBlock
            | TagEnd::MetadataBlock(_)
            | TagEnd::DefinitionList
            | TagEnd::DefinitionListTitle
            | TagEnd::DefinitionListDefinition
            | TagEnd::Superscript
            | TagEnd::Subscript => {}
        }
    }

    // -- Inline events ----------------------------------------------------

    fn on_text(&mut self, text: &str) {
        if self.in_code_block {
            self.code_block_parts.push(text.to_string());
            return;
        }
        if self.in_table_cell {
            self.cell_parts.push(text.to_string());
            return;
        }
        self.buf.write(text);
    }

    fn on_soft_break(&mut self) {
        if self.in_code_block {
            self.code_block_parts.push("\n".to_string());
            return;
        }
        if self.in_table_cell {
            self.cell_parts.push(" ".to_string());
            return;
        }
        self.buf.write("\n");
    }

    fn on_hard_break(&mut self) {
        if self.in_code_block {
            self.code_block_parts.push("\n".to_string());
            return;
        }
        self.buf.write("\n");
    }

    fn on_rule(&mut self) {
        self.ensure_block_spacing();
        self.buf.write("————————");
        self.block_count += 1;
    }

    fn on_inline_code(&mut self, code: &str) {
        if self.in_table_cell {
            self.cell_parts.push(code.to_string());
            return;
        }
        let start = self.buf.utf16_offset;
        self.buf.write(code);
        let length = self.buf.utf16_offset - start;
        if length > 0 {
            self.entities
                .push(MessageEntity::new(EntityKind::Code, start, length));
        }
    }

    fn on_inline_math(&mut self, math: &str) {
        let rendered = if contains_latex_command(math) {
            convert_latex(math).trim().to_string()
        } else {
            math.to_string()
        };
        let start = self.buf.utf16_offset;
        self.buf.write(&rendered);
        let length = self.buf.utf16_offset - start;
        if length > 0 {
            self.entities
                .push(MessageEntity::new(EntityKind::Code, start, length));
        }
    }

    fn on_display_math(&mut self, math: &str) {
        let rendered = if contains_latex_command(math) {
            convert_latex(math).trim().to_string()
        } else {
            math.to_string()
        };
        self.ensure_block_spacing();
        let start = self.buf.utf16_offset;
        self.buf.write(&rendered);
        let length = self.buf.utf16_offset - start;
        if length > 0 {
            self.entities
                .push(MessageEntity::new(EntityKind::Pre, start, length));
        }
        self.block_count += 1;
    }

    fn on_inline_html(&mut self, html: &str) {
        let tag = html.trim().to_ascii_lowercase();
        if tag == "<tg-spoiler>" {
            self.push_entity(EntityKind::Spoiler);
        } else if tag == "</tg-spoiler>" {
            self.pop_entity(EntityKind::Spoiler);
        }
        // Anything else is dropped.
    }

    fn on_task_list_marker(&mut self, checked: bool) {
        let symbol = if checked {
            self.config.symbols.task_completed.clone()
        } else {
            self.config.symbols.task_uncompleted.clone()
        };
        // Retract the bullet or number the item start just wrote; a task
        // item carries exactly one prefix.
        self.buf.pop_last();
        self.buf.write(&format!("{}{} ", self.item_indent, symbol));
    }

    // -- Headings ----------------------------------------------------------

    fn on_start_heading(&mut self, level: HeadingLevel) {
        self.ensure_block_spacing();
        let symbols = &self.config.symbols;
        let prefix = match level {
            HeadingLevel::H1 => symbols.heading_level_1.clone(),
            HeadingLevel::H2 => symbols.heading_level_2.clone(),
            HeadingLevel::H3 => symbols.heading_level_3.clone(),
            HeadingLevel::H4 => symbols.heading_level_4.clone(),
            HeadingLevel::H5 => symbols.heading_level_5.clone(),
            HeadingLevel::H6 => symbols.heading_level_6.clone(),
        };
        if !prefix.is_empty() {
            self.buf.write(&format!("{prefix} "));
        }
        let kinds: Vec<EntityKind> = match level {
            HeadingLevel::H1 | HeadingLevel::H2 => {
                vec![EntityKind::Bold, EntityKind::Underline]
            }
            HeadingLevel::H3 | HeadingLevel::H4 => vec![EntityKind::Bold],
            HeadingLevel::H5 | HeadingLevel::H6 => vec![EntityKind::Italic],
        };
        for &kind in &kinds {
            self.push_entity(kind);
        }
        self.heading_entities = kinds;
    }

    fn on_end_heading(&mut self) {
        let kinds = std::mem::take(&mut self.heading_entities);
        for &kind in kinds.iter().rev() {
            self.pop_entity(kind);
        }
        self.block_count += 1;
    }

    // -- Paragraphs ----------------------------------------------------------

    fn on_end_paragraph(&mut self) {
        if self.list_stack.is_empty() {
            self.block_count += 1;
        } else if self.buf.trailing_newline_count() == 0 {
            // Paragraph inside a loose list item; keep following blocks on
            // their own line.
            self.buf.write("\n");
        }
    }

    // -- Code blocks -----------------------------------------------------------

    fn on_end_code_block(&mut self) {
        self.in_code_block = false;
        let mut raw_code = self.code_block_parts.concat();
        // The parser appends one newline to fenced content.
        if raw_code.ends_with('\n') {
            raw_code.pop();
        }
        self.ensure_block_spacing();

        let text_start = self.buf.byte_offset;
        let utf16_start = self.buf.utf16_offset;
        self.buf.write(&raw_code);
        let length = self.buf.utf16_offset - utf16_start;

        let language = self
            .code_block_lang
            .split(',')
            .next()
            .unwrap_or("")
            .trim()
            .to_string();

        if length > 0 {
            self.entities.push(MessageEntity {
                kind: EntityKind::Pre,
                offset: utf16_start,
                length,
                url: None,
                language: (!language.is_empty()).then(|| language.clone()),
                custom_emoji_id: None,
            });
        }

        let kind = if language.eq_ignore_ascii_case("mermaid") {
            SegmentKind::Mermaid
        } else {
            SegmentKind::CodeBlock
        };
        self.segments.push(Segment {
            kind,
            text_start,
            text_end: self.buf.byte_offset,
            utf16_start,
            utf16_end: self.buf.utf16_offset,
            language,
            raw_code,
        });

        self.block_count += 1;
        self.code_block_lang.clear();
        self.code_block_parts.clear();
    }

    // -- Blockquotes ------------------------------------------------------------

    fn on_end_blockquote(&mut self) {
        if let Some(scope) = self.blockquote_scopes.pop() {
            self.finalize_entity(scope);
        }
        self.block_count += 1;
    }

    // -- Links and images ----------------------------------------------------------

    fn on_start_link(&mut self, dest_url: &str) {
        let opened = if let Some(id) = validate_custom_emoji(dest_url) {
            self.entity_stack.push(EntityScope {
                custom_emoji_id: Some(id.to_string()),
                ..EntityScope::new(EntityKind::CustomEmoji, self.buf.utf16_offset)
            });
            Some(EntityKind::CustomEmoji)
        } else if !dest_url.is_empty() {
            self.entity_stack.push(EntityScope {
                url: Some(dest_url.to_string()),
                ..EntityScope::new(EntityKind::TextLink, self.buf.utf16_offset)
            });
            Some(EntityKind::TextLink)
        } else {
            // Empty destination renders as plain text.
            None
        };
        self.open_links.push(opened);
    }

    fn on_start_image(&mut self, dest_url: &str) {
        if let Some(id) = validate_custom_emoji(dest_url) {
            self.entity_stack.push(EntityScope {
                custom_emoji_id: Some(id.to_string()),
                ..EntityScope::new(EntityKind::CustomEmoji, self.buf.utf16_offset)
            });
        } else {
            let glyph = self.config.symbols.image.clone();
            self.buf.write(&glyph);
            self.entity_stack.push(EntityScope {
                url: Some(dest_url.to_string()),
                ..EntityScope::new(EntityKind::TextLink, self.buf.utf16_offset)
            });
        }
    }

    // -- Lists ------------------------------------------------------------------

    fn on_start_item(&mut self) {
        let depth = self.list_stack.len();
        self.item_indent = if depth > 1 {
            "  ".repeat(depth - 1)
        } else {
            String::new()
        };
        // A nested list can start before its parent item's line ended.
        if self.buf.byte_offset > 0 && self.buf.trailing_newline_count() == 0 {
            self.buf.write("\n");
        }
        let prefix = match self.list_stack.last_mut() {
            Some(Some(number)) => {
                let current = *number;
                *number += 1;
                format!("{}{}. ", self.item_indent, current)
            }
            _ => format!("{}⦁ ", self.item_indent),
        };
        self.buf.write(&prefix);
    }

    // -- Tables -----------------------------------------------------------------

    fn on_end_table(&mut self) {
        let table_text = format_table(&self.table_rows);
        let start = self.buf.utf16_offset;
        self.buf.write(&table_text);
        let length = self.buf.utf16_offset - start;
        if length > 0 {
            self.entities
                .push(MessageEntity::new(EntityKind::Pre, start, length));
        }
        self.table_rows.clear();
        self.block_count += 1;
    }

    // -- Entity helpers -----------------------------------------------------------

    fn push_entity(&mut self, kind: EntityKind) {
        self.entity_stack
            .push(EntityScope::new(kind, self.buf.utf16_offset));
    }

    /// Close the most recently opened scope of the given kind.
    fn pop_entity(&mut self, kind: EntityKind) {
        if let Some(pos) = self.entity_stack.iter().rposition(|s| s.kind == kind) {
            let scope = self.entity_stack.remove(pos);
            self.finalize_entity(scope);
        }
    }

    /// Close the most recently opened scope regardless of kind. Image ends
    /// are the only caller: an image opens exactly one scope of either kind.
    fn pop_entity_any(&mut self) {
        if let Some(scope) = self.entity_stack.pop() {
            self.finalize_entity(scope);
        }
    }

    fn finalize_entity(&mut self, scope: EntityScope) {
        let length = self.buf.utf16_offset.saturating_sub(scope.start_offset);
        if length == 0 {
            return;
        }
        self.entities.push(MessageEntity {
            kind: scope.kind,
            offset: scope.start_offset,
            length,
            url: scope.url,
            language: scope.language,
            custom_emoji_id: scope.custom_emoji_id,
        });
    }

    /// Exactly one blank line between top-level blocks, counting what is
    /// already there instead of writing blindly.
    fn ensure_block_spacing(&mut self) {
        if self.block_count == 0 {
            return;
        }
        let trailing = self.buf.trailing_newline_count();
        if trailing < 2 {
            self.buf.write(&"\n".repeat(2 - trailing));
        }
    }
}

/// Render accumulated rows as a left-justified monospace grid, with a
/// dashed rule after the header row when there is more than one row.
fn format_table(rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return String::new();
    }
    let num_cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; num_cols];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }
    let mut lines = Vec::new();
    for (row_idx, row) in rows.iter().enumerate() {
        let cells: Vec<String> = (0..num_cols)
            .map(|i| {
                let cell = row.get(i).map_or("", String::as_str);
                let pad = widths[i].saturating_sub(cell.chars().count());
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect();
        lines.push(cells.join(" | "));
        if row_idx == 0 && rows.len() > 1 {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            lines.push(rule.join("-+-"));
        }
    }
    lines.join("\n")
}
