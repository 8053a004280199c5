use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// One markup-stripping substitution, applied to every non-overlapping match.
#[derive(Debug, Clone)]
pub struct CleanupRule {
    name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl CleanupRule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, self.replacement)
    }
}

// Order matters: link collapsing must run before the file-embed and pipe rules,
// and templates must be gone before pipes are cut to end of line.
static STANDARD_RULES: LazyLock<Vec<CleanupRule>> = LazyLock::new(|| {
    vec![
        // Single level only: `{{a|{{b}}}}` leaves the trailing `}}` behind.
        CleanupRule::new("template", r"\{\{[^}]+\}\}", ""),
        CleanupRule::new("link", r"\[\[(?:[^\]|]+\|)?([^\]]+)\]\]", "${1}"),
        CleanupRule::new("heading", r"={2,}[^=]+={2,}", ""),
        CleanupRule::new("html_tag", r"<[^>]+>", ""),
        CleanupRule::new("file_embed", r"\[\[File:[^\]]+\]\]", ""),
        CleanupRule::new("image_embed_bn", r"\[\[চিত্র:[^\]]+\]\]", ""),
        CleanupRule::new("emphasis", r"'{2,}", ""),
        CleanupRule::new("pipe_tail", r"\|[^\n]*", ""),
        // Letters, numbers and underscore only; combining marks such as `া` do not qualify.
        CleanupRule::new("html_entity", r"&[\p{L}\p{N}_]+;", ""),
    ]
});

/// Ordered wikitext cleanup pipeline.
#[derive(Debug, Clone, Copy)]
pub struct WikitextCleaner {
    rules: &'static [CleanupRule],
}

impl WikitextCleaner {
    pub fn rules(&self) -> &[CleanupRule] {
        self.rules
    }

    pub fn rule(&self, name: &str) -> Option<&CleanupRule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    pub fn clean(&self, wikitext: &str) -> String {
        self.rules
            .iter()
            .fold(wikitext.to_string(), |text, rule| match rule.apply(&text) {
                Cow::Owned(replaced) => replaced,
                Cow::Borrowed(_) => text,
            })
    }
}

impl Default for WikitextCleaner {
    fn default() -> Self {
        Self {
            rules: STANDARD_RULES.as_slice(),
        }
    }
}
