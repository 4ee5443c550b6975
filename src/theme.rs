//! Decoration colours for editor consumers.
//!
//! The stylesheet is a pure function of the decoration settings and the editor theme.
//! Scanning never reads it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::annotations::MAX_DEPTH;
use crate::config::DecorationConfig;
use crate::utils::mkdocs_admonitions::AdmonitionKind;

/// Editor colour theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    HighContrast,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::HighContrast => "high-contrast",
        }
    }

    /// Background opacity of an admonition block
    fn background_alpha(self) -> f64 {
        match self {
            Theme::Light => 0.1,
            Theme::Dark => 0.15,
            Theme::HighContrast => 0.25,
        }
    }

    /// Gutter opacity at depth 0
    fn gutter_alpha(self) -> f64 {
        match self {
            Theme::Light => 0.9,
            Theme::Dark => 0.8,
            Theme::HighContrast => 1.0,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An `rgba(r, g, b, a)` colour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alpha = (self.a.clamp(0.0, 1.0) * 100.0).round() / 100.0;
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Base colour of each admonition category, following the Material for MkDocs palette
fn kind_color(kind: AdmonitionKind) -> Rgba {
    match kind {
        AdmonitionKind::Note => Rgba::new(68, 138, 255, 1.0),
        AdmonitionKind::Abstract => Rgba::new(0, 176, 255, 1.0),
        AdmonitionKind::Info => Rgba::new(0, 184, 212, 1.0),
        AdmonitionKind::Tip => Rgba::new(0, 191, 165, 1.0),
        AdmonitionKind::Success => Rgba::new(0, 200, 83, 1.0),
        AdmonitionKind::Question => Rgba::new(100, 221, 23, 1.0),
        AdmonitionKind::Warning => Rgba::new(255, 145, 0, 1.0),
        AdmonitionKind::Danger => Rgba::new(255, 23, 68, 1.0),
        AdmonitionKind::Bug => Rgba::new(245, 0, 87, 1.0),
        AdmonitionKind::Example => Rgba::new(124, 77, 255, 1.0),
        AdmonitionKind::Quote => Rgba::new(158, 158, 158, 1.0),
        AdmonitionKind::Default => Rgba::new(254, 243, 199, 1.0),
    }
}

/// Colours for the non-admonition highlights
struct BlockPalette {
    blockquote: Rgba,
    table: Rgba,
    table_header: Rgba,
    table_border: Rgba,
    code_fence: Rgba,
}

fn block_palette(theme: Theme) -> BlockPalette {
    match theme {
        Theme::Light => BlockPalette {
            blockquote: Rgba::new(229, 231, 235, 0.7),
            table: Rgba::new(255, 241, 230, 0.7),
            table_header: Rgba::new(254, 215, 170, 0.7),
            table_border: Rgba::new(209, 213, 219, 1.0),
            code_fence: Rgba::new(243, 244, 246, 0.6),
        },
        Theme::Dark => BlockPalette {
            blockquote: Rgba::new(75, 85, 99, 0.45),
            table: Rgba::new(124, 74, 36, 0.3),
            table_header: Rgba::new(154, 92, 42, 0.45),
            table_border: Rgba::new(107, 114, 128, 1.0),
            code_fence: Rgba::new(31, 41, 55, 0.6),
        },
        Theme::HighContrast => BlockPalette {
            blockquote: Rgba::new(255, 255, 255, 0.2),
            table: Rgba::new(255, 165, 0, 0.2),
            table_header: Rgba::new(255, 165, 0, 0.4),
            table_border: Rgba::new(255, 255, 255, 1.0),
            code_fence: Rgba::new(255, 255, 255, 0.12),
        },
    }
}

/// Colours for one admonition category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmonitionStyle {
    pub background: String,
    /// One colour per nesting depth, fading with depth
    pub gutter: [String; MAX_DEPTH],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stylesheet {
    pub theme: Theme,
    pub admonitions: BTreeMap<AdmonitionKind, AdmonitionStyle>,
    pub blockquote: String,
    pub table: String,
    pub table_header: String,
    pub table_border: String,
    pub code_fence: String,
}

fn gutter_alpha_at(theme: Theme, depth: usize) -> f64 {
    theme.gutter_alpha() * (1.0 - 0.2 * depth as f64)
}

/// Compute the decoration colours for `theme`.
///
/// A layer switched off in `decorations` (or the whole sheet, via `enabled`) yields
/// fully transparent colours so consumers can apply the sheet unconditionally.
pub fn compute_stylesheet(decorations: &DecorationConfig, theme: Theme) -> Stylesheet {
    let background_on = decorations.enabled && decorations.background;
    let gutter_on = decorations.enabled && decorations.gutter;
    let pick = |on: bool, color: Rgba| (if on { color } else { Rgba::TRANSPARENT }).to_string();

    let admonitions = AdmonitionKind::ALL
        .iter()
        .map(|&kind| {
            let base = kind_color(kind);
            let gutter = std::array::from_fn(|depth| pick(gutter_on, base.with_alpha(gutter_alpha_at(theme, depth))));
            let style = AdmonitionStyle {
                background: pick(background_on, base.with_alpha(theme.background_alpha())),
                gutter,
            };
            (kind, style)
        })
        .collect();

    let palette = block_palette(theme);
    Stylesheet {
        theme,
        admonitions,
        blockquote: pick(background_on, palette.blockquote),
        table: pick(background_on, palette.table),
        table_header: pick(background_on, palette.table_header),
        table_border: pick(decorations.enabled, palette.table_border),
        code_fence: pick(background_on, palette.code_fence),
    }
}
