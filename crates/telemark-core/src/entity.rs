use serde::Serialize;

/// Length of `text` in UTF-16 code units.
///
/// Telegram measures entity offsets and lengths in UTF-16 code units, not
/// bytes or scalar values. Characters outside the BMP cost 2 units (a
/// surrogate pair); everything else costs 1.
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Formatting kinds the Bot API accepts for message entities.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Spoiler,
    Code,
    Pre,
    TextLink,
    CustomEmoji,
    Blockquote,
    ExpandableBlockquote,
}

/// A formatted sub-range of the output text.
///
/// `offset` and `length` are in UTF-16 code units. Serialization produces
/// exactly the mapping the Bot API `entities` parameter expects: `type`,
/// `offset`, `length`, and the extra keys only when present.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub offset: usize,
    pub length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_emoji_id: Option<String>,
}

impl MessageEntity {
    pub fn new(kind: EntityKind, offset: usize, length: usize) -> Self {
        Self {
            kind,
            offset,
            length,
            url: None,
            language: None,
            custom_emoji_id: None,
        }
    }
}
