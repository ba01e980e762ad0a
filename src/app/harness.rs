//! Harness shell: scene switching, input routing, frame rendering.

use super::break_scene::BreakScene;
use super::link_scene::LinkScene;
use crate::core::clock::Clock;
use crate::core::event::{InputEvent, Key, KeyCode};
use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::id::IdPath;
use crate::ui::core::input::UiEvent;
use crate::ui::core::painter::Painter;
use crate::ui::core::runtime::UiRuntime;
use crate::ui::core::theme::Theme;
use crate::ui::core::tree::{Node, NodeKind, Sense, UiTree};
use crate::ui::core::widget::{Ui, Widget};
use unicode_width::UnicodeWidthStr;

const SCENES: &[&str] = &["breaks", "links"];

pub struct Harness {
    id_base: IdPath,
    theme: Theme,
    break_scene: BreakScene,
    link_scene: LinkScene,
    active: usize,
    painter: Painter,
    tree: UiTree,
    runtime: UiRuntime,
    now: f64,
}

impl Harness {
    pub fn new(theme: Theme) -> Self {
        Self {
            id_base: IdPath::root("cadenza").push_str("harness"),
            theme,
            break_scene: BreakScene::new(theme),
            link_scene: LinkScene::new(theme),
            active: 0,
            painter: Painter::new(),
            tree: UiTree::new(),
            runtime: UiRuntime::new(),
            now: 0.0,
        }
    }

    pub fn update(&mut self, clock: &dyn Clock) {
        self.now = clock.current_time();
        self.break_scene.update(self.now);
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn active_scene(&self) -> usize {
        self.active
    }

    pub fn break_scene(&self) -> &BreakScene {
        &self.break_scene
    }

    pub fn link_scene(&self) -> &LinkScene {
        &self.link_scene
    }

    /// Returns true when the harness should quit.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if let Some(key_event) = event.as_key() {
            return self.handle_key(Key::from(*key_event));
        }

        let output = self.runtime.on_input(event, &self.tree);
        for ui_event in output.events {
            self.handle_ui_event(ui_event);
        }
        false
    }

    fn handle_key(&mut self, key: Key) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Tab => self.active = (self.active + 1) % SCENES.len(),
            KeyCode::Right | KeyCode::Char(' ') if self.active == 0 => {
                self.break_scene.next_step(self.now)
            }
            KeyCode::Left if self.active == 0 => self.break_scene.prev_step(self.now),
            KeyCode::Char(ch @ '1'..='9') if self.active == 0 => {
                let index = ch as usize - '1' as usize;
                if index < BreakScene::step_count() {
                    self.break_scene.run_step(index, self.now);
                }
            }
            _ => {}
        }
        false
    }

    fn handle_ui_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Click { id, .. } => {
                let Some(node) = self.tree.node(id).copied() else {
                    return;
                };
                match node.kind {
                    NodeKind::SceneTab { index } => self.active = index,
                    NodeKind::SceneStep { index } => self.break_scene.run_step(index, self.now),
                    NodeKind::Link { compiler, .. } => self.link_scene.activate(compiler),
                    NodeKind::Unknown => {}
                }
            }
            UiEvent::HoverChanged { to, .. } => {
                let compiler = to
                    .and_then(|id| self.tree.node(id))
                    .and_then(|node| match node.kind {
                        NodeKind::Link { compiler, .. } => Some(compiler),
                        _ => None,
                    });
                self.link_scene.set_hovered(compiler);
            }
        }
    }

    pub fn render(&mut self, area: Rect, backend: &mut dyn Backend) {
        self.painter.clear();
        self.tree.clear();

        let theme = self.theme;
        let active = self.active;
        let status_text = match active {
            0 => {
                let step = self
                    .break_scene
                    .current_step()
                    .and_then(BreakScene::step_label)
                    .unwrap_or("press space or click a step");
                format!(" {}  |  {}", self.break_scene.status(), step)
            }
            _ => format!(" {}", self.link_scene.status()),
        };

        {
            let mut ui = Ui::new(area, &mut self.painter, &mut self.tree);
            let tab_bar = ui.take_top(1);
            let status_bar = ui.take_bottom(1);
            let body = ui.rect;

            ui.with_rect(tab_bar, |ui| {
                let mut x = tab_bar.x;
                for (index, name) in SCENES.iter().enumerate() {
                    let label = format!(" {name} ");
                    let w = label.as_str().width() as u16;
                    let rect = Rect::new(x, tab_bar.y, w, 1).intersect(tab_bar);
                    if rect.is_empty() {
                        break;
                    }
                    ui.tree.push(Node {
                        id: self.id_base.push_str("tab").push_u64(index as u64).finish(),
                        rect,
                        layer: 0,
                        z: 0,
                        sense: Sense::HOVER | Sense::CLICK,
                        kind: NodeKind::SceneTab { index },
                    });
                    let style = if index == active {
                        theme.tab_active
                    } else {
                        theme.tab
                    };
                    ui.painter
                        .text_clipped(Pos::new(x, tab_bar.y), label, style, tab_bar);
                    x = x.saturating_add(w.saturating_add(1));
                }
            });

            ui.with_rect(status_bar, |ui| {
                ui.painter.fill_rect(status_bar, theme.status);
                ui.painter.text_clipped(
                    Pos::new(status_bar.x, status_bar.y),
                    status_text,
                    theme.status,
                    status_bar,
                );
            });

            match active {
                0 => ui.with_rect(body, |ui| self.break_scene.ui(ui)),
                _ => ui.with_rect(body, |ui| self.link_scene.ui(ui)),
            }
        }

        backend.draw(area, self.painter.cmds());
    }
}
