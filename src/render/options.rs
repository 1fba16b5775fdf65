//! Rendering options and configuration.

/// Fallback language class for fenced blocks without a tag.
pub const DEFAULT_CODE_LANGUAGE: &str = "plaintext";

/// Options for rendering Markdown to HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Add `target="_blank" rel="noopener noreferrer"` to links
    pub open_links_in_new_tab: bool,

    /// Add `loading="lazy"` to images
    pub lazy_images: bool,

    /// Language class used when a fence has no tag
    pub default_code_language: String,

    /// Normalize the source to Unicode NFC before rendering
    pub normalize_unicode: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable new-tab link attributes.
    pub fn with_new_tab_links(mut self, enabled: bool) -> Self {
        self.open_links_in_new_tab = enabled;
        self
    }

    /// Enable or disable lazy image loading.
    pub fn with_lazy_images(mut self, enabled: bool) -> Self {
        self.lazy_images = enabled;
        self
    }

    /// Set the fallback code language.
    ///
    /// An empty value resets to `plaintext`.
    pub fn with_default_code_language(mut self, lang: impl Into<String>) -> Self {
        let lang = lang.into();
        self.default_code_language = if lang.trim().is_empty() {
            DEFAULT_CODE_LANGUAGE.to_string()
        } else {
            lang.trim().to_string()
        };
        self
    }

    /// Enable or disable NFC normalization.
    pub fn with_unicode_normalization(mut self, enabled: bool) -> Self {
        self.normalize_unicode = enabled;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            open_links_in_new_tab: true,
            lazy_images: true,
            default_code_language: DEFAULT_CODE_LANGUAGE.to_string(),
            normalize_unicode: false,
        }
    }
}
