//! Text flow with inline clickable links.
//!
//! The flow holds a single entry list: flowing text runs, and link compilers —
//! invisible overlays attaching activation behavior to a contiguous range of
//! runs. Compilers never flow: layout and `measure` enumerate flowing entries
//! only, so a link can never change the measured content size or wrapping of
//! the text it annotates. At render time each compiler contributes one hit
//! node per laid-out line fragment of its covered runs.
//!
//! Activation resolves its handler lazily at click time, because dispatcher
//! availability is a property of the embedding: a custom callback wins over
//! the game dispatcher, the dispatcher wins over the external-URL opener, and
//! with none of the three applicable the click is dropped (logged).

use crate::game::link::{Link, LinkAction, LinkDetails, LinkEnv};
use crate::game::user::User;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::id::IdPath;
use crate::ui::core::style::Style;
use crate::ui::core::tree::{Node, NodeKind, Sense};
use crate::ui::core::widget::{Ui, Widget};
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub style: Option<Style>,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style: Some(style),
        }
    }
}

type Callback = Box<dyn FnMut()>;

pub struct LinkCompiler {
    covers: Range<usize>,
    details: LinkDetails,
    tooltip: Option<String>,
    custom: Option<Callback>,
}

impl LinkCompiler {
    pub fn details(&self) -> &LinkDetails {
        &self.details
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }
}

impl std::fmt::Debug for LinkCompiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkCompiler")
            .field("covers", &self.covers)
            .field("details", &self.details)
            .field("tooltip", &self.tooltip)
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

enum Entry {
    Run(TextRun),
    Compiler(LinkCompiler),
}

impl Entry {
    fn flows(&self) -> bool {
        matches!(self, Entry::Run(_))
    }
}

/// One laid-out line piece of a flowing run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    pub entry: usize,
    pub x: u16,
    pub y: u16,
    pub text: String,
}

impl Fragment {
    pub fn width(&self) -> u16 {
        self.text.as_str().width() as u16
    }
}

pub struct LinkFlow {
    id_base: IdPath,
    flow_id: u32,
    layer: u8,
    entries: Vec<Entry>,
    text_style: Style,
    link_style: Style,
    link_hover_style: Style,
    hovered: Option<usize>,
}

impl LinkFlow {
    pub fn new(id_base: IdPath, flow_id: u32) -> Self {
        Self {
            id_base,
            flow_id,
            layer: 0,
            entries: Vec::new(),
            text_style: Style::default(),
            link_style: Style::default().add_mod(crate::ui::core::style::Mod::UNDERLINE),
            link_hover_style: Style::default().add_mod(crate::ui::core::style::Mod::REVERSE),
            hovered: None,
        }
    }

    pub fn with_styles(mut self, text: Style, link: Style, link_hover: Style) -> Self {
        self.text_style = text;
        self.link_style = link;
        self.link_hover_style = link_hover;
        self
    }

    pub fn with_layer(mut self, layer: u8) -> Self {
        self.layer = layer;
        self
    }

    pub fn flow_id(&self) -> u32 {
        self.flow_id
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hovered = None;
    }

    // -- Authoring ---------------------------------------------------------

    pub fn add_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.entries.push(Entry::Run(TextRun::plain(text)));
    }

    pub fn add_styled_text(&mut self, text: impl Into<String>, style: Style) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.entries.push(Entry::Run(TextRun::styled(text, style)));
    }

    /// Render `text` with the given link annotations interleaved.
    ///
    /// Empty text is a no-op; an empty link list renders the text verbatim.
    /// Links must be in bounds, on char boundaries, sorted by index and
    /// non-overlapping; a malformed list is a programmer error and panics.
    pub fn add_links(&mut self, text: &str, links: &[Link]) {
        if text.is_empty() {
            return;
        }
        if links.is_empty() {
            self.add_text(text);
            return;
        }

        check_links(text, links);

        let mut previous_link_end = 0;
        for link in links {
            self.add_text(&text[previous_link_end..link.index]);

            let display_text = &text[link.index..link.end()];
            let tooltip = match &link.url {
                Some(url) if display_text != url => Some(url.clone()),
                _ => None,
            };

            self.push_link(
                vec![TextRun::plain(display_text)],
                LinkDetails::new(link.action, link.argument.clone()),
                tooltip,
                None,
            );
            previous_link_end = link.end();
        }
        self.add_text(&text[previous_link_end..]);
    }

    /// External-URL link. The tooltip repeats the URL unless the display text
    /// already is the URL.
    pub fn add_link(&mut self, text: &str, url: &str) {
        let tooltip = (text != url).then(|| url.to_string());
        self.push_link(
            vec![TextRun::plain(text)],
            LinkDetails::new(LinkAction::External, url),
            tooltip,
            None,
        );
    }

    /// Link running an in-process callback, bypassing the dispatch table.
    pub fn add_custom_link(
        &mut self,
        text: &str,
        tooltip: Option<&str>,
        action: impl FnMut() + 'static,
    ) {
        self.push_link(
            vec![TextRun::plain(text)],
            LinkDetails::new(LinkAction::Custom, ""),
            tooltip.map(str::to_string),
            Some(Box::new(action)),
        );
    }

    /// Semantic link, resolved by the game dispatcher at click time.
    pub fn add_action_link(
        &mut self,
        text: &str,
        action: LinkAction,
        argument: &str,
        tooltip: Option<&str>,
    ) {
        self.push_link(
            vec![TextRun::plain(text)],
            LinkDetails::new(action, argument),
            tooltip.map(str::to_string),
            None,
        );
    }

    /// Attach link behavior to pre-built (styled/localized) runs.
    pub fn add_link_runs(
        &mut self,
        runs: Vec<TextRun>,
        action: LinkAction,
        argument: &str,
        tooltip: Option<&str>,
    ) {
        self.push_link(
            runs,
            LinkDetails::new(action, argument),
            tooltip.map(str::to_string),
            None,
        );
    }

    pub fn add_user_link(&mut self, user: &User) {
        self.push_link(
            vec![TextRun::plain(user.username.clone())],
            LinkDetails::new(LinkAction::OpenUserProfile, user.id.to_string()),
            Some("view profile".to_string()),
            None,
        );
    }

    fn push_link(
        &mut self,
        runs: Vec<TextRun>,
        details: LinkDetails,
        tooltip: Option<String>,
        custom: Option<Callback>,
    ) {
        let start = self.entries.len();
        for run in runs {
            if run.text.is_empty() {
                continue;
            }
            self.entries.push(Entry::Run(run));
        }
        let end = self.entries.len();
        if start == end {
            // No display text, nothing to attach the link to.
            return;
        }
        self.entries.push(Entry::Compiler(LinkCompiler {
            covers: start..end,
            details,
            tooltip,
            custom,
        }));
    }

    // -- Inspection --------------------------------------------------------

    pub fn compiler_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.flows()).count()
    }

    pub fn compiler(&self, index: usize) -> Option<&LinkCompiler> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                Entry::Compiler(c) => Some(c),
                Entry::Run(_) => None,
            })
            .nth(index)
    }

    pub fn tooltip(&self, compiler: usize) -> Option<&str> {
        self.compiler(compiler)?.tooltip()
    }

    /// Flowing text segments in order, each with the compiler covering it (if
    /// any). Concatenating the texts reproduces everything this flow renders.
    pub fn segments(&self) -> Vec<(String, Option<usize>)> {
        let covered = self.covered_by();
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, e)| match e {
                Entry::Run(run) => Some((run.text.clone(), covered[i])),
                Entry::Compiler(_) => None,
            })
            .collect()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn set_hovered(&mut self, compiler: Option<usize>) {
        self.hovered = compiler;
    }

    // -- Activation --------------------------------------------------------

    /// Resolve and run the handler for a link compiler. Exactly one branch
    /// fires; with no applicable handler the activation is dropped.
    pub fn activate(&mut self, compiler: usize, env: &mut LinkEnv<'_>) {
        let mut ordinal = 0;
        let compiler = self.entries.iter_mut().find_map(|e| match e {
            Entry::Compiler(c) => {
                let found = ordinal == compiler;
                ordinal += 1;
                found.then_some(c)
            }
            Entry::Run(_) => None,
        });
        let Some(c) = compiler else {
            return;
        };

        if let Some(custom) = c.custom.as_mut() {
            custom();
            return;
        }
        if let Some(dispatcher) = env.dispatcher.as_mut() {
            dispatcher.handle_link(&c.details);
            return;
        }
        // Fallback for embeddings without a game shell.
        if c.details.action == LinkAction::External {
            if let Some(opener) = env.opener.as_mut() {
                opener.open_url(&c.details.argument);
                return;
            }
        }
        tracing::debug!(action = ?c.details.action, "link activation had no handler");
    }

    // -- Layout ------------------------------------------------------------

    /// Greedy word-wrap of the flowing entries into line fragments. Compiler
    /// entries are skipped entirely; they have no geometry of their own.
    pub fn layout(&self, max_width: u16) -> Vec<Fragment> {
        let mut frags: Vec<Fragment> = Vec::new();
        if max_width == 0 {
            return frags;
        }

        let mut x: u16 = 0;
        let mut y: u16 = 0;

        for (entry_idx, entry) in self.entries.iter().enumerate() {
            let Entry::Run(run) = entry else {
                continue;
            };

            let mut open: Option<Fragment> = None;
            let mut append = |open: &mut Option<Fragment>, at_x: u16, at_y: u16, piece: &str| {
                match open {
                    Some(f) => f.text.push_str(piece),
                    None => {
                        *open = Some(Fragment {
                            entry: entry_idx,
                            x: at_x,
                            y: at_y,
                            text: piece.to_string(),
                        })
                    }
                }
            };

            let mut first_line = true;
            for line in run.text.split('\n') {
                if !first_line {
                    flush(&mut frags, &mut open);
                    x = 0;
                    y = y.saturating_add(1);
                }
                first_line = false;

                for token in tokens(line) {
                    let token_width = token.width() as u16;
                    if token_width == 0 {
                        continue;
                    }

                    if token.starts_with(' ') {
                        // Space runs never wrap; drop them at the boundary.
                        if x.saturating_add(token_width) > max_width {
                            flush(&mut frags, &mut open);
                            x = 0;
                            y = y.saturating_add(1);
                            continue;
                        }
                        append(&mut open, x, y, token);
                        x = x.saturating_add(token_width);
                        continue;
                    }

                    if x > 0 && x.saturating_add(token_width) > max_width {
                        flush(&mut frags, &mut open);
                        x = 0;
                        y = y.saturating_add(1);
                    }

                    if token_width > max_width {
                        // A word wider than the flow: hard-break by grapheme.
                        for g in token.graphemes(true) {
                            let gw = g.width() as u16;
                            if gw == 0 {
                                continue;
                            }
                            if x.saturating_add(gw) > max_width {
                                flush(&mut frags, &mut open);
                                x = 0;
                                y = y.saturating_add(1);
                            }
                            append(&mut open, x, y, g);
                            x = x.saturating_add(gw);
                        }
                    } else {
                        append(&mut open, x, y, token);
                        x = x.saturating_add(token_width);
                    }
                }
            }
            flush(&mut frags, &mut open);
        }

        frags
    }

    /// Measured content size at the given wrap width. Only flowing runs count;
    /// link compilers are invisible overlays with no size of their own.
    pub fn measure(&self, max_width: u16) -> (u16, u16) {
        let mut w: u16 = 0;
        let mut h: u16 = 0;
        for f in self.layout(max_width) {
            w = w.max(f.x.saturating_add(f.width()));
            h = h.max(f.y.saturating_add(1));
        }
        (w, h)
    }

    fn covered_by(&self) -> Vec<Option<usize>> {
        let mut map = vec![None; self.entries.len()];
        let mut ordinal = 0;
        for entry in &self.entries {
            if let Entry::Compiler(c) = entry {
                for i in c.covers.clone() {
                    map[i] = Some(ordinal);
                }
                ordinal += 1;
            }
        }
        map
    }

    fn fragment_style(&self, entry: usize, compiler: Option<usize>) -> Style {
        let run_style = match &self.entries[entry] {
            Entry::Run(run) => run.style,
            Entry::Compiler(_) => None,
        };
        match compiler {
            Some(ci) => {
                let base = run_style.unwrap_or(self.link_style);
                if self.hovered == Some(ci) {
                    base.patch(self.link_hover_style)
                } else {
                    base
                }
            }
            None => run_style.unwrap_or(self.text_style),
        }
    }
}

impl Widget for LinkFlow {
    fn ui(&mut self, ui: &mut Ui) {
        let area = ui.rect;
        if area.is_empty() {
            return;
        }

        let frags = self.layout(area.w);
        let covered = self.covered_by();

        for (n, f) in frags.iter().enumerate() {
            if f.y >= area.h {
                break;
            }
            let pos = Pos::new(area.x.saturating_add(f.x), area.y.saturating_add(f.y));
            let compiler = covered[f.entry];
            let style = self.fragment_style(f.entry, compiler);
            ui.painter.text_clipped(pos, f.text.clone(), style, area);

            if let Some(ci) = compiler {
                let rect = Rect::new(pos.x, pos.y, f.width(), 1).intersect(area);
                if rect.is_empty() {
                    continue;
                }
                ui.tree.push(Node {
                    id: self
                        .id_base
                        .push_str("link")
                        .push_u64(ci as u64)
                        .push_u64(n as u64)
                        .finish(),
                    rect,
                    layer: self.layer,
                    z: 0,
                    sense: Sense::HOVER | Sense::CLICK,
                    kind: NodeKind::Link {
                        flow: self.flow_id,
                        compiler: ci,
                    },
                });
            }
        }
    }
}

fn flush(frags: &mut Vec<Fragment>, open: &mut Option<Fragment>) {
    if let Some(f) = open.take() {
        if !f.text.is_empty() {
            frags.push(f);
        }
    }
}

/// Split a line into alternating word and space-run tokens.
fn tokens(line: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;
    for (i, ch) in line.char_indices() {
        let is_space = ch == ' ';
        match current {
            None => current = Some(is_space),
            Some(prev) if prev != is_space => {
                out.push(&line[start..i]);
                start = i;
                current = Some(is_space);
            }
            _ => {}
        }
    }
    if start < line.len() {
        out.push(&line[start..]);
    }
    out
}

fn check_links(text: &str, links: &[Link]) {
    let mut previous_link_end = 0;
    for link in links {
        let end = link
            .index
            .checked_add(link.length)
            .unwrap_or_else(|| panic!("link span overflows: {link:?}"));
        assert!(
            end <= text.len(),
            "link [{}, {end}) out of bounds for text of length {}",
            link.index,
            text.len()
        );
        assert!(
            text.is_char_boundary(link.index) && text.is_char_boundary(end),
            "link [{}, {end}) not on char boundaries",
            link.index
        );
        assert!(
            link.index >= previous_link_end,
            "links must be sorted and non-overlapping (link at {} begins before {})",
            link.index,
            previous_link_end
        );
        previous_link_end = end;
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/link_flow.rs"]
mod tests;
