//! Light/dark presentation theme, persisted across runs.

use ratatui::style::Color;
use tracing::{info, warn};

use super::database::Database;
use crate::error::Result;

pub const THEME_SETTING_KEY: &str = "site-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

/// Colors used by the screens for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub error: Color,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle indicator shown in the header.
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "☀️",
            Theme::Dark => "🌗",
        }
    }

    /// Stored theme, or the default when nothing (or garbage) is stored.
    pub fn load(db: &Database) -> Result<Self> {
        let stored = db.get_setting(THEME_SETTING_KEY)?;
        Ok(match stored.as_deref().map(Theme::parse) {
            Some(Some(theme)) => theme,
            Some(None) => {
                warn!("Ignoring unknown stored theme {:?}", stored);
                Theme::default()
            }
            None => Theme::default(),
        })
    }

    pub fn save(&self, db: &Database) -> Result<()> {
        db.set_setting(THEME_SETTING_KEY, self.as_str())
    }

    /// Flip the theme and persist the new value.
    pub fn toggle(&mut self, db: &Database) -> Result<()> {
        *self = self.toggled();
        info!("Theme -> {}", self.as_str());
        self.save(db)
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: Color::Reset,
                foreground: Color::White,
                muted: Color::Gray,
                accent: Color::Cyan,
                border: Color::DarkGray,
                error: Color::Red,
            },
            Theme::Light => Palette {
                background: Color::White,
                foreground: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Blue,
                border: Color::Gray,
                error: Color::Red,
            },
        }
    }
}
