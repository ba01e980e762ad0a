use std::io;
use std::time::Duration;

use cadenza::app::Harness;
use cadenza::core::clock::WallClock;
use cadenza::core::event::InputEvent;
use cadenza::services::config::UiConfig;
use cadenza::tui::TerminalGuard;
use cadenza::ui::backend::terminal::RatatuiTerminal;
use cadenza::ui::core::theme::Theme;

fn main() -> io::Result<()> {
    let _logging = cadenza::logging::init();

    let config = UiConfig::load();
    let theme = Theme::from_variant(config.theme);

    let mut guard = TerminalGuard::enter(config.mouse_capture)?;
    let mut terminal = RatatuiTerminal::new(io::stdout())?;

    let clock = WallClock::new();
    let mut harness = Harness::new(theme);

    loop {
        harness.update(&clock);
        terminal.draw(|backend, area| harness.render(area, backend))?;

        if crossterm::event::poll(Duration::from_millis(config.frame_interval_ms))? {
            let event: InputEvent = crossterm::event::read()?.into();
            if harness.handle_input(&event) {
                break;
            }
        }
    }

    guard.restore()?;
    Ok(())
}
