//! Gameplay break overlay.
//!
//! Holds the break periods supplied by the loaded beatmap and derives a live
//! "currently in a break" boolean from the clock each frame. Breaks shorter
//! than `BreakPeriod::MIN_DURATION` are suppressed entirely: they neither
//! toggle the signal nor render.

use crate::core::bindable::Bindable;
use crate::game::breaks::BreakPeriod;
use crate::ui::core::geom::Pos;
use crate::ui::core::painter::BorderKind;
use crate::ui::core::style::Style;
use crate::ui::core::theme::Theme;
use crate::ui::core::widget::{Ui, Widget};

#[derive(Clone, Copy, Debug)]
pub struct BreakOverlayStyles {
    pub panel: Style,
    pub border: Style,
    pub text: Style,
    pub progress: Style,
}

impl BreakOverlayStyles {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            panel: theme.panel,
            border: theme.panel_border,
            text: theme.panel,
            progress: theme.progress,
        }
    }
}

#[derive(Debug)]
pub struct BreakOverlay {
    breaks: Vec<BreakPeriod>,
    is_break_time: Bindable<bool>,
    now: f64,
    styles: BreakOverlayStyles,
}

impl BreakOverlay {
    pub fn new(styles: BreakOverlayStyles) -> Self {
        Self {
            breaks: Vec::new(),
            is_break_time: Bindable::new(false),
            now: 0.0,
            styles,
        }
    }

    /// Install a new list of breaks. Order is kept as supplied; the list is
    /// expected to be time-ordered by convention but a stray out-of-order
    /// period still resolves correctly since `update` scans all of them.
    pub fn set_breaks(&mut self, breaks: Vec<BreakPeriod>) {
        self.breaks = breaks;
    }

    pub fn breaks(&self) -> &[BreakPeriod] {
        &self.breaks
    }

    pub fn is_break_time(&self) -> &Bindable<bool> {
        &self.is_break_time
    }

    /// Mutable access for subscribing; the value itself is only ever written
    /// by `update`.
    pub fn is_break_time_mut(&mut self) -> &mut Bindable<bool> {
        &mut self.is_break_time
    }

    /// Per-frame recompute against the clock.
    pub fn update(&mut self, now: f64) {
        self.now = now;
        let active = self
            .breaks
            .iter()
            .any(|b| b.has_effect() && b.contains(now));
        self.is_break_time.set(active);
    }

    fn current_break(&self) -> Option<&BreakPeriod> {
        self.breaks
            .iter()
            .find(|b| b.has_effect() && b.contains(self.now))
    }
}

impl Widget for BreakOverlay {
    fn ui(&mut self, ui: &mut Ui) {
        let Some(current) = self.current_break() else {
            return;
        };
        if ui.rect.w < 8 || ui.rect.h < 5 {
            return;
        }

        let panel = ui.rect.centered((ui.rect.w / 2).max(16).min(ui.rect.w), 5);
        ui.painter.fill_rect(panel, self.styles.panel);
        ui.painter.border(panel, self.styles.border, BorderKind::Plain);

        let remaining = (current.end_time - self.now).max(0.0) / 1000.0;
        let label = format!("break  {remaining:.1}s");
        let label_x = panel
            .x
            .saturating_add(panel.w.saturating_sub(label.len() as u16) / 2);
        ui.painter.text_clipped(
            Pos::new(label_x, panel.y.saturating_add(1)),
            label,
            self.styles.text,
            panel,
        );

        // Elapsed fraction of the break as a progress line.
        let inner_w = panel.w.saturating_sub(2);
        let fraction = ((self.now - current.start_time) / current.duration()).clamp(0.0, 1.0);
        let filled = (fraction * inner_w as f64).round() as u16;
        if filled > 0 {
            ui.painter.hline(
                Pos::new(panel.x.saturating_add(1), panel.y.saturating_add(3)),
                filled.min(inner_w),
                '━',
                self.styles.progress,
            );
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/break_overlay.rs"]
mod tests;
