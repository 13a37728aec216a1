//! Color themes for the WASM queens puzzle UI.

use serde::{Deserialize, Serialize};

/// RGB color
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn as_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn as_css_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Color theme for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// Page/canvas background
    pub background: Color,
    /// Light checkerboard square
    pub light_square: Color,
    /// Dark checkerboard square
    pub dark_square: Color,
    /// Tint layered over dominated squares
    pub dominated_tint: Color,
    /// Board outline and cell borders
    pub grid_lines: Color,
    /// Queen glyph
    pub queen: Color,
    /// Info panel text
    pub info_text: Color,
    /// Info panel heading
    pub title_text: Color,
    /// Solved banner
    pub solved_color: Color,
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            background: Color::new(24, 24, 32),
            light_square: Color::new(180, 170, 150),
            dark_square: Color::new(96, 80, 64),
            dominated_tint: Color::new(120, 200, 120),
            grid_lines: Color::new(60, 60, 80),
            queen: Color::new(20, 16, 12),
            info_text: Color::new(160, 160, 180),
            title_text: Color::new(220, 220, 240),
            solved_color: Color::new(100, 255, 150),
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            background: Color::new(245, 245, 250),
            light_square: Color::new(238, 238, 212),
            dark_square: Color::new(125, 148, 93),
            dominated_tint: Color::new(70, 160, 90),
            grid_lines: Color::new(120, 120, 140),
            queen: Color::new(30, 30, 40),
            info_text: Color::new(60, 60, 80),
            title_text: Color::new(20, 20, 40),
            solved_color: Color::new(50, 180, 80),
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            background: Color::new(0, 0, 0),
            light_square: Color::new(255, 255, 255),
            dark_square: Color::new(70, 70, 70),
            dominated_tint: Color::new(0, 255, 0),
            grid_lines: Color::new(255, 255, 255),
            queen: Color::new(255, 0, 0),
            info_text: Color::new(200, 200, 200),
            title_text: Color::new(255, 255, 255),
            solved_color: Color::new(0, 255, 0),
        }
    }
}
