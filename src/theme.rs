//! Visual themes for the wallpaper: palette, background treatment and font.

/// Closed set of wallpaper styles.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Style {
    /// Dark purple radial glow, serif. The default.
    #[default]
    Mystic,
    /// Light flat grey, sans-serif.
    Minimalist,
    /// Near-black flat, sans-serif.
    Obsidian,
    /// Deep red vertical fade, serif.
    Crimson,
    /// Indigo-to-violet fade with neon text, monospace.
    Retro,
}

impl Style {
    /// Parses a style identifier, falling back to [`Style::Mystic`] for
    /// anything unrecognized (including the empty string). Lenient on
    /// purpose so unvalidated query input never errors.
    pub fn parse(style_id: &str) -> Style {
        match style_id.to_ascii_lowercase().as_str() {
            "mystic" => Style::Mystic,
            "minimalist" => Style::Minimalist,
            "obsidian" => Style::Obsidian,
            "crimson" => Style::Crimson,
            "retro" => Style::Retro,
            _ => Style::Mystic,
        }
    }

    /// Canonical identifier for this style.
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Mystic => "mystic",
            Style::Minimalist => "minimalist",
            Style::Obsidian => "obsidian",
            Style::Crimson => "crimson",
            Style::Retro => "retro",
        }
    }

    /// Natural-language hint used to bias the quote request toward the
    /// style's visual vibe.
    pub fn prompt_hint(self) -> &'static str {
        match self {
            Style::Mystic => {
                "Visual Vibe: Ancient, Magical, Enigmatic. Focus on mystery and spiritual depth."
            }
            Style::Minimalist => {
                "Visual Vibe: Serene, Holy, Simple, Clear. Focus on clarity, peace, and fundamental truths."
            }
            Style::Obsidian => {
                "Visual Vibe: Strong, Solid, Unshakable. Focus on endurance, strength, and power."
            }
            Style::Crimson => {
                "Visual Vibe: Urgent, Powerful, Intense. Focus on warning, passion, or sacrifice."
            }
            Style::Retro => {
                "Visual Vibe: Sci-fi, Visionary, Cybernetic. Focus on visions of the future and cosmic scale."
            }
        }
    }
}

/// Background treatment for the full-canvas fill.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Background {
    /// Single flat color.
    Solid(&'static str),
    /// Radial gradient from a center color out to an edge color.
    Radial {
        /// Color at the center of the canvas.
        center: &'static str,
        /// Color at the edges.
        edge: &'static str,
    },
    /// Top-to-bottom linear gradient.
    Linear {
        /// Color at the top edge.
        top: &'static str,
        /// Color at the bottom edge.
        bottom: &'static str,
    },
}

/// Font family tag carried by a theme.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FontFamily {
    /// A serif family.
    Serif,
    /// A sans-serif family.
    SansSerif,
    /// A monospace family.
    Monospace,
}

impl FontFamily {
    /// SVG `font-family` value.
    pub fn as_str(self) -> &'static str {
        match self {
            FontFamily::Serif => "serif",
            FontFamily::SansSerif => "sans-serif",
            FontFamily::Monospace => "monospace",
        }
    }
}

/// Named bundle of visual attributes for one style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Full-canvas background treatment.
    pub background: Background,
    /// Primary quote text color.
    pub text: &'static str,
    /// Accent color for the border frame and separator bar.
    pub accent: &'static str,
    /// Secondary color for the author line.
    pub sub: &'static str,
    /// Font family tag.
    pub font: FontFamily,
}

const MYSTIC: Theme = Theme {
    background: Background::Radial {
        center: "#2d1b4e",
        edge: "#000000",
    },
    text: "#ffffff",
    accent: "#a855f7",
    sub: "#d8b4fe",
    font: FontFamily::Serif,
};

const MINIMALIST: Theme = Theme {
    background: Background::Solid("#f3f4f6"),
    text: "#1f2937",
    accent: "#9ca3af",
    sub: "#6b7280",
    font: FontFamily::SansSerif,
};

const OBSIDIAN: Theme = Theme {
    background: Background::Solid("#09090b"),
    text: "#e4e4e7",
    accent: "#27272a",
    sub: "#a1a1aa",
    font: FontFamily::SansSerif,
};

const CRIMSON: Theme = Theme {
    background: Background::Linear {
        top: "#450a0a",
        bottom: "#000000",
    },
    text: "#fecaca",
    accent: "#7f1d1d",
    sub: "#f87171",
    font: FontFamily::Serif,
};

const RETRO: Theme = Theme {
    background: Background::Linear {
        top: "#1e1b4b",
        bottom: "#2e1065",
    },
    text: "#22d3ee",
    accent: "#d946ef",
    sub: "#c084fc",
    font: FontFamily::Monospace,
};

impl Theme {
    /// Returns the theme for a style identifier. Unknown or empty
    /// identifiers resolve to the default theme, never an error.
    pub fn lookup(style_id: &str) -> &'static Theme {
        Theme::for_style(Style::parse(style_id))
    }

    /// Returns the theme for a parsed style.
    pub fn for_style(style: Style) -> &'static Theme {
        match style {
            Style::Mystic => &MYSTIC,
            Style::Minimalist => &MINIMALIST,
            Style::Obsidian => &OBSIDIAN,
            Style::Crimson => &CRIMSON,
            Style::Retro => &RETRO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: [&str; 5] = ["mystic", "minimalist", "obsidian", "crimson", "retro"];

    #[test]
    fn canonical_styles_have_full_palettes() {
        for id in CANONICAL {
            let theme = Theme::lookup(id);
            assert!(!theme.text.is_empty(), "{id} text");
            assert!(!theme.accent.is_empty(), "{id} accent");
            assert!(!theme.sub.is_empty(), "{id} sub");
            assert!(!theme.font.as_str().is_empty(), "{id} font");
            match theme.background {
                Background::Solid(color) => assert!(!color.is_empty(), "{id} background"),
                Background::Radial { center, edge } | Background::Linear { top: center, bottom: edge } => {
                    assert!(!center.is_empty(), "{id} background");
                    assert!(!edge.is_empty(), "{id} background");
                }
            }
        }
    }

    #[test]
    fn unknown_and_empty_styles_fall_back_to_default() {
        assert_eq!(Theme::lookup(""), Theme::for_style(Style::Mystic));
        assert_eq!(Theme::lookup("neon-goth"), Theme::for_style(Style::Mystic));
        assert_eq!(Style::parse("does-not-exist"), Style::Mystic);
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(Style::parse("ObSiDiAn"), Style::Obsidian);
        assert_eq!(Style::parse("RETRO"), Style::Retro);
    }

    #[test]
    fn styles_have_distinct_accents() {
        let mut accents: Vec<&str> = CANONICAL.iter().map(|id| Theme::lookup(id).accent).collect();
        accents.sort_unstable();
        accents.dedup();
        assert_eq!(accents.len(), CANONICAL.len());
    }
}
