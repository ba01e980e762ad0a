//! Semantic styles for the client UI.

use super::style::{Color, Mod, Style};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub text: Style,
    pub text_dim: Style,
    pub link: Style,
    pub link_hover: Style,
    pub panel: Style,
    pub panel_border: Style,
    pub progress: Style,
    pub status: Style,
    pub tab: Style,
    pub tab_active: Style,
    pub step_current: Style,
}

impl Theme {
    pub fn from_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        let text = Style::default().fg(Color::Rgb(0xd0, 0xd0, 0xd8));
        let link = Style::default()
            .fg(Color::Rgb(0x66, 0xcc, 0xff))
            .add_mod(Mod::UNDERLINE);
        Self {
            text,
            text_dim: text.add_mod(Mod::DIM),
            link,
            link_hover: link.add_mod(Mod::BOLD),
            panel: Style::default()
                .fg(Color::Rgb(0xf0, 0xf0, 0xf0))
                .bg(Color::Rgb(0x20, 0x20, 0x30)),
            panel_border: Style::default().fg(Color::Rgb(0xff, 0x66, 0xaa)),
            progress: Style::default().fg(Color::Rgb(0xff, 0x66, 0xaa)),
            status: text.add_mod(Mod::REVERSE),
            tab: text.add_mod(Mod::DIM),
            tab_active: text.add_mod(Mod::BOLD | Mod::REVERSE),
            step_current: text.add_mod(Mod::BOLD),
        }
    }

    pub fn light() -> Self {
        let text = Style::default().fg(Color::Rgb(0x20, 0x20, 0x28));
        let link = Style::default()
            .fg(Color::Rgb(0x00, 0x55, 0xbb))
            .add_mod(Mod::UNDERLINE);
        Self {
            text,
            text_dim: text.add_mod(Mod::DIM),
            link,
            link_hover: link.add_mod(Mod::BOLD),
            panel: Style::default()
                .fg(Color::Rgb(0x20, 0x20, 0x28))
                .bg(Color::Rgb(0xe8, 0xe8, 0xf0)),
            panel_border: Style::default().fg(Color::Rgb(0xcc, 0x33, 0x77)),
            progress: Style::default().fg(Color::Rgb(0xcc, 0x33, 0x77)),
            status: text.add_mod(Mod::REVERSE),
            tab: text.add_mod(Mod::DIM),
            tab_active: text.add_mod(Mod::BOLD | Mod::REVERSE),
            step_current: text.add_mod(Mod::BOLD),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/theme.rs"]
mod tests;
