use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Light/dark token supplied by the host on every render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Chrome colors for gridlines, axes and labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub grid_color: Color,
    pub axis_color: Color,
    pub label_color: Color,
}

/// Resolves a theme token into its chrome colors.
///
/// Pure and stateless: renderers call it on every frame, so switching the
/// token between calls redraws everything in the new colors.
#[must_use]
pub const fn resolve_theme(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Light => ThemeColors {
            grid_color: Color::from_rgb8(0xe5, 0xe7, 0xeb),
            axis_color: Color::from_rgb8(0x9c, 0xa3, 0xaf),
            label_color: Color::from_rgb8(0x37, 0x41, 0x51),
        },
        Theme::Dark => ThemeColors {
            grid_color: Color::from_rgb8(0x37, 0x41, 0x51),
            axis_color: Color::from_rgb8(0x6b, 0x72, 0x80),
            label_color: Color::from_rgb8(0xd1, 0xd5, 0xdb),
        },
    }
}
