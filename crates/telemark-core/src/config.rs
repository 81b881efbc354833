use once_cell::sync::Lazy;

/// Glyphs the converter writes in front of rendered constructs.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkdownSymbols {
    pub heading_level_1: String,
    pub heading_level_2: String,
    pub heading_level_3: String,
    pub heading_level_4: String,
    pub heading_level_5: String,
    pub heading_level_6: String,
    pub image: String,
    pub link: String,
    pub task_completed: String,
    pub task_uncompleted: String,
}

impl Default for MarkdownSymbols {
    fn default() -> Self {
        Self {
            heading_level_1: "📌".to_string(),
            heading_level_2: "✏".to_string(),
            heading_level_3: "📚".to_string(),
            heading_level_4: "🔖".to_string(),
            heading_level_5: String::new(),
            heading_level_6: String::new(),
            image: "🖼".to_string(),
            link: "🔗".to_string(),
            task_completed: "✅".to_string(),
            task_uncompleted: "☑".to_string(),
        }
    }
}

/// Rendering configuration, passed explicitly into every conversion call.
///
/// A process-wide default exists for convenience entry points only; nothing
/// in the crate reads it implicitly.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub symbols: MarkdownSymbols,
    /// Promote blockquote entities longer than the threshold to the
    /// collapsed-by-default expandable variant.
    pub cite_expandable: bool,
    /// Promotion threshold in UTF-16 code units.
    pub cite_expandable_threshold: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            symbols: MarkdownSymbols::default(),
            cite_expandable: true,
            cite_expandable_threshold: 200,
        }
    }
}

static GLOBAL_CONFIG: Lazy<RenderConfig> = Lazy::new(RenderConfig::default);

impl RenderConfig {
    /// The shared default configuration.
    pub fn global() -> &'static RenderConfig {
        &GLOBAL_CONFIG
    }
}
