//! Theme configuration
//!
//! Colors for the three panes (results list, context view, search bar) plus
//! the footer, loaded from an optional TOML file in the user config
//! directory and falling back to built-in defaults.

use anyhow::Result;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub ui: UiTheme,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiTheme {
    /// Results list
    pub results_border: String,
    pub results_page: String,
    pub results_heading: String,
    pub results_selected_bg: String,
    pub results_selected_fg: String,

    /// Context pane
    pub context_border: String,
    pub context_heading: String,

    /// Search input
    pub search_border: String,
    pub search_input: String,

    /// Current match highlight
    pub match_bg: String,
    pub match_fg: String,

    /// Footer
    pub status_fg: String,
    pub help_fg: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            ui: UiTheme {
                results_border: "#90EE90".to_string(), // Light Green
                results_page: "#FFFFFF".to_string(),   // White
                results_heading: "#90EE90".to_string(), // Light Green
                results_selected_bg: "#6495ED".to_string(), // Cornflower Blue
                results_selected_fg: "#FFFFFF".to_string(), // White

                context_border: "#6495ED".to_string(), // Cornflower Blue
                context_heading: "#FFD700".to_string(), // Gold

                search_border: "#FFD700".to_string(), // Gold
                search_input: "#FFD700".to_string(),  // Gold

                match_bg: "#FFD700".to_string(), // Gold
                match_fg: "#000000".to_string(), // Black

                status_fg: "#FFFFFF".to_string(), // White
                help_fg: "#A0A0A0".to_string(),   // Light Gray
            },
        }
    }
}

impl Theme {
    /// Load theme from the config directory, defaulting when absent.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::get_config_path() {
            if config_path.exists() {
                let content = fs::read_to_string(&config_path)?;
                let theme: Theme = toml::from_str(&content)?;
                return Ok(theme);
            }
        }

        Ok(Theme::default())
    }

    pub fn save(&self) -> Result<()> {
        if let Some(config_path) = Self::get_config_path() {
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
            }

            let content = toml::to_string_pretty(self)?;
            fs::write(&config_path, content)?;
        }

        Ok(())
    }

    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("docseek").join("theme.toml"))
    }

    /// Convert a `#RRGGBB` (or `#RRGGBBAA`, alpha ignored) string to a color.
    pub fn hex_to_color(hex: &str) -> Option<Color> {
        let hex = hex.trim_start_matches('#');

        match hex.len() {
            6 | 8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Color::Rgb(r, g, b))
            }
            _ => None,
        }
    }

    /// Get a color with fallback to white.
    pub fn get_color(&self, hex: &str) -> Color {
        Self::hex_to_color(hex).unwrap_or(Color::White)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_handles_rgb_and_rgba() {
        assert_eq!(Theme::hex_to_color("#FFD700"), Some(Color::Rgb(255, 215, 0)));
        assert_eq!(Theme::hex_to_color("000000FF"), Some(Color::Rgb(0, 0, 0)));
        assert_eq!(Theme::hex_to_color("#abc"), None);
    }

    #[test]
    fn default_theme_colors_all_parse() {
        let theme = Theme::default();
        for hex in [
            &theme.ui.results_border,
            &theme.ui.results_page,
            &theme.ui.results_heading,
            &theme.ui.results_selected_bg,
            &theme.ui.results_selected_fg,
            &theme.ui.context_border,
            &theme.ui.context_heading,
            &theme.ui.search_border,
            &theme.ui.search_input,
            &theme.ui.match_bg,
            &theme.ui.match_fg,
            &theme.ui.status_fg,
            &theme.ui.help_fg,
        ] {
            assert!(Theme::hex_to_color(hex).is_some(), "bad default: {hex}");
        }
    }
}
