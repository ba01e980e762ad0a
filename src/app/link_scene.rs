//! Link flow scene.
//!
//! Exercises every authoring method of `LinkFlow` with demo content. Clicks
//! resolve through this scene's dispatcher and URL opener; the hovered link's
//! tooltip is surfaced for the status line.

use crate::game::link::{Link, LinkAction, LinkDetails, LinkDispatcher, LinkEnv, UrlOpener};
use crate::game::user::User;
use crate::ui::core::geom::Insets;
use crate::ui::core::id::IdPath;
use crate::ui::core::style::Mod;
use crate::ui::core::theme::Theme;
use crate::ui::core::widget::{Ui, Widget};
use crate::ui::widgets::link_flow::{LinkFlow, TextRun};
use std::cell::RefCell;
use std::rc::Rc;

/// Dispatcher that routes to the log and keeps the last link for display.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    last: Option<LinkDetails>,
}

impl RecordingDispatcher {
    pub fn last(&self) -> Option<&LinkDetails> {
        self.last.as_ref()
    }
}

impl LinkDispatcher for RecordingDispatcher {
    fn handle_link(&mut self, link: &LinkDetails) {
        tracing::info!(action = ?link.action, argument = %link.argument, "dispatching link");
        self.last = Some(link.clone());
    }
}

#[derive(Debug, Default)]
pub struct LoggingOpener;

impl UrlOpener for LoggingOpener {
    fn open_url(&mut self, url: &str) {
        tracing::info!(%url, "opening external url");
    }
}

pub struct LinkScene {
    flow: LinkFlow,
    dispatcher: RecordingDispatcher,
    opener: LoggingOpener,
    custom_clicks: Rc<RefCell<u32>>,
    tooltip: Option<String>,
}

impl LinkScene {
    pub fn new(theme: Theme) -> Self {
        let mut flow = LinkFlow::new(IdPath::root("cadenza").push_str("links"), 0)
            .with_styles(theme.text, theme.link, theme.link_hover);

        let custom_clicks = Rc::new(RefCell::new(0u32));
        let counter = Rc::clone(&custom_clicks);

        flow.add_text("Welcome back, ");
        flow.add_user_link(&User::new(2, "peppy"));
        flow.add_text("! Join ");
        flow.add_action_link("#lazer", LinkAction::OpenChannel, "#lazer", Some("join channel"));
        flow.add_text(" or visit ");
        flow.add_link("https://osu.sh", "https://osu.sh");
        flow.add_text(".\n\n");
        flow.add_custom_link("bump the counter", Some("adds one"), move || {
            *counter.borrow_mut() += 1;
        });
        flow.add_text("  ");
        flow.add_link_runs(
            vec![TextRun::styled(
                "wiki:Welcome",
                theme.link.add_mod(Mod::BOLD),
            )],
            LinkAction::OpenWiki,
            "Welcome",
            Some("open wiki page"),
        );
        flow.add_text("\n\n");
        flow.add_links("visit osu.sh now", &[Link::external(6, 6, "osu.sh")]);

        Self {
            flow,
            dispatcher: RecordingDispatcher::default(),
            opener: LoggingOpener,
            custom_clicks,
            tooltip: None,
        }
    }

    pub fn flow(&self) -> &LinkFlow {
        &self.flow
    }

    pub fn dispatcher(&self) -> &RecordingDispatcher {
        &self.dispatcher
    }

    pub fn custom_clicks(&self) -> u32 {
        *self.custom_clicks.borrow()
    }

    pub fn activate(&mut self, compiler: usize) {
        let mut env = LinkEnv {
            dispatcher: Some(&mut self.dispatcher),
            opener: Some(&mut self.opener),
        };
        self.flow.activate(compiler, &mut env);
    }

    pub fn set_hovered(&mut self, compiler: Option<usize>) {
        self.tooltip = compiler
            .and_then(|c| self.flow.tooltip(c))
            .map(str::to_string);
        self.flow.set_hovered(compiler);
    }

    pub fn status(&self) -> String {
        let mut parts = Vec::new();
        if let Some(tooltip) = &self.tooltip {
            parts.push(tooltip.clone());
        }
        if let Some(link) = self.dispatcher.last() {
            parts.push(format!("{:?}({})", link.action, link.argument));
        }
        let clicks = self.custom_clicks();
        if clicks > 0 {
            parts.push(format!("custom clicks: {clicks}"));
        }
        parts.join("  |  ")
    }
}

impl Widget for LinkScene {
    fn ui(&mut self, ui: &mut Ui) {
        ui.inset(Insets::xy(1, 1));
        self.flow.ui(ui);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/link_scene.rs"]
mod tests;
