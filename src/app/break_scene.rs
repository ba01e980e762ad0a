//! Break overlay scenario scene.
//!
//! Each step installs a fresh list of break periods timestamped from the live
//! clock; a debug line bound to the overlay's `is_break_time` shows the signal
//! as it toggles. The last step starts with a 500 ms break, which is below the
//! minimum displayable duration and must never surface.

use crate::game::breaks::BreakPeriod;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::id::IdPath;
use crate::ui::core::theme::Theme;
use crate::ui::core::tree::{Node, NodeKind, Sense};
use crate::ui::core::widget::{Ui, Widget};
use crate::ui::widgets::break_overlay::{BreakOverlay, BreakOverlayStyles};
use std::cell::RefCell;
use std::rc::Rc;

type StepFn = fn(f64) -> Vec<BreakPeriod>;

const STEPS: &[(&str, StepFn)] = &[
    ("2s break", |t| vec![BreakPeriod::new(t, t + 2000.0)]),
    ("5s break", |t| vec![BreakPeriod::new(t, t + 5000.0)]),
    ("10s break", |t| vec![BreakPeriod::new(t, t + 10_000.0)]),
    ("15s break", |t| vec![BreakPeriod::new(t, t + 15_000.0)]),
    ("2s, 2s", |t| {
        vec![
            BreakPeriod::new(t, t + 2000.0),
            BreakPeriod::new(t + 4000.0, t + 6000.0),
        ]
    }),
    ("0.5s, 0.7s, 1s, 2s", |t| {
        vec![
            // Shorter than the minimum displayable duration; never appears.
            BreakPeriod::new(t, t + 500.0),
            BreakPeriod::new(t + 1500.0, t + 2200.0),
            BreakPeriod::new(t + 3200.0, t + 4200.0),
            BreakPeriod::new(t + 5200.0, t + 7200.0),
        ]
    }),
];

pub struct BreakScene {
    id_base: IdPath,
    overlay: BreakOverlay,
    status: Rc<RefCell<String>>,
    step: Option<usize>,
    theme: Theme,
}

impl BreakScene {
    pub fn new(theme: Theme) -> Self {
        let mut overlay = BreakOverlay::new(BreakOverlayStyles::from_theme(&theme));
        let status = Rc::new(RefCell::new(String::new()));
        let sink = Rc::clone(&status);
        overlay.is_break_time_mut().bind(
            move |value| {
                *sink.borrow_mut() = format!("IsBreakTime: {value}");
            },
            true,
        );
        Self {
            id_base: IdPath::root("cadenza").push_str("breaks"),
            overlay,
            status,
            step: None,
            theme,
        }
    }

    pub fn step_count() -> usize {
        STEPS.len()
    }

    pub fn step_label(index: usize) -> Option<&'static str> {
        STEPS.get(index).map(|(label, _)| *label)
    }

    pub fn current_step(&self) -> Option<usize> {
        self.step
    }

    pub fn run_step(&mut self, index: usize, now: f64) {
        let Some((label, make_breaks)) = STEPS.get(index) else {
            return;
        };
        self.step = Some(index);
        self.overlay.set_breaks(make_breaks(now));
        tracing::info!(step = label, now, "scenario step");
    }

    pub fn next_step(&mut self, now: f64) {
        let next = self.step.map_or(0, |s| (s + 1) % STEPS.len());
        self.run_step(next, now);
    }

    pub fn prev_step(&mut self, now: f64) {
        let prev = self
            .step
            .map_or(0, |s| (s + STEPS.len() - 1) % STEPS.len());
        self.run_step(prev, now);
    }

    pub fn update(&mut self, now: f64) {
        self.overlay.update(now);
    }

    pub fn overlay(&self) -> &BreakOverlay {
        &self.overlay
    }

    pub fn status(&self) -> String {
        self.status.borrow().clone()
    }
}

impl Widget for BreakScene {
    fn ui(&mut self, ui: &mut Ui) {
        let area = ui.rect;
        if area.is_empty() {
            return;
        }

        for (index, (label, _)) in STEPS.iter().enumerate() {
            let y = area.y.saturating_add(index as u16);
            if y >= area.bottom() {
                break;
            }
            let row = Rect::new(area.x, y, area.w, 1);
            ui.tree.push(Node {
                id: self.id_base.push_str("step").push_u64(index as u64).finish(),
                rect: row,
                layer: 0,
                z: 0,
                sense: Sense::HOVER | Sense::CLICK,
                kind: NodeKind::SceneStep { index },
            });

            let current = self.step == Some(index);
            let marker = if current { "▸ " } else { "  " };
            let style = if current {
                self.theme.step_current
            } else {
                self.theme.text_dim
            };
            ui.painter
                .text_clipped(Pos::new(area.x, y), format!("{marker}{label}"), style, area);
        }

        let debug_y = area.y.saturating_add(STEPS.len() as u16 + 1);
        if debug_y < area.bottom() {
            ui.painter.text_clipped(
                Pos::new(area.x, debug_y),
                self.status.borrow().clone(),
                self.theme.text,
                area,
            );
        }

        // Overlay sits on top of the whole scene.
        self.overlay.ui(ui);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/break_scene.rs"]
mod tests;
