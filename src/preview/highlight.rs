//! Syntax highlighting of code previews into styled terminal lines

use crate::error::{FsViewError, Result};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

pub const DEFAULT_THEME: &str = "base16-ocean.dark";

const TAB_WIDTH: usize = 4;

/// Extensions the bundled syntaxes do not know, mapped to a close relative
const SYNTAX_FALLBACKS: &[(&str, &str)] = &[("ts", "JavaScript"), ("htm", "HTML")];

/// Loaded syntax and theme definitions, created once per session
pub struct Highlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
}

impl Highlighter {
    /// Loads the bundled definitions; an unknown theme falls back to [`DEFAULT_THEME`]
    pub fn new(theme_name: &str) -> Self {
        let theme_set = ThemeSet::load_defaults();
        let theme_name = if theme_set.themes.contains_key(theme_name) {
            theme_name.to_string()
        } else {
            log::warn!("unknown syntax theme '{}', using {}", theme_name, DEFAULT_THEME);
            DEFAULT_THEME.to_string()
        };

        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set,
            theme_name,
        }
    }

    fn theme(&self) -> &Theme {
        &self.theme_set.themes[&self.theme_name]
    }

    fn find_syntax(&self, extension: &str) -> Option<&SyntaxReference> {
        self.syntax_set.find_syntax_by_extension(extension).or_else(|| {
            SYNTAX_FALLBACKS
                .iter()
                .find(|(ext, _)| *ext == extension)
                .and_then(|(_, name)| self.syntax_set.find_syntax_by_name(name))
        })
    }

    /// Name of the syntax used for `extension`, if any
    pub fn syntax_name(&self, extension: &str) -> Option<String> {
        self.find_syntax(extension).map(|s| s.name.clone())
    }

    /// Highlights `content` as the syntax for `extension` (plain text when unknown)
    pub fn highlight(&self, content: &str, extension: &str) -> Result<Vec<Line<'static>>> {
        let syntax = self
            .find_syntax(extension)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
        let mut highlighter = HighlightLines::new(syntax, self.theme());

        let mut lines = Vec::new();
        for line in LinesWithEndings::from(content) {
            let ranges = highlighter
                .highlight_line(line, &self.syntax_set)
                .map_err(|e| FsViewError::Highlight(e.to_string()))?;

            let spans: Vec<Span<'static>> = ranges
                .into_iter()
                .map(|(style, text)| {
                    let text = expand_tabs(text.trim_end_matches(['\n', '\r']));
                    let fg = style.foreground;
                    Span::styled(text, Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b)))
                })
                .collect();

            lines.push(Line::from(spans));
        }

        Ok(lines)
    }
}

/// Replaces tabs so terminal columns line up
pub fn expand_tabs(text: &str) -> String {
    text.replace('\t', &" ".repeat(TAB_WIDTH))
}
