use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use neoshell::cli::Options;
use neoshell::drivers::InputDriver;
use neoshell::drivers::console::ConsoleDriver;
use neoshell::errors::ShellError;
use neoshell::event_loop::{ControlFlow, EventLoop};
use neoshell::shell::DesktopShell;
use neoshell::tracing_sub;
use neoshell::ui::UiFrame;

fn main() -> Result<(), ShellError> {
    let options = Options::parse();
    match options.log_file.as_deref() {
        Some(path) => tracing_sub::init_with_file(path)?,
        None => tracing_sub::init_default(),
    }

    let mut shell = DesktopShell::new(!options.bare);
    if options.no_mouse {
        shell.set_mouse_capture_enabled(false);
        // consume the initial transition; the driver starts disabled
        let _ = shell.take_mouse_capture_change();
    }
    for kind in &options.open {
        shell.open_window(*kind);
    }

    run(shell, &options)
}

fn run(mut shell: DesktopShell, options: &Options) -> Result<(), ShellError> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let mut driver = ConsoleDriver::new();
    driver.set_mouse_capture(shell.mouse_capture_enabled())?;
    let mut event_loop = EventLoop::new(driver, Duration::from_millis(options.tick_ms.max(1)));

    let result = event_loop.run(|driver, event| {
        if let Some(enabled) = shell.take_mouse_capture_change() {
            let _ = driver.set_mouse_capture(enabled);
        }
        match event {
            Some(Event::Key(key))
                if key.code == KeyCode::Char('q')
                    && key.kind == KeyEventKind::Press
                    && key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                return Ok(ControlFlow::Quit);
            }
            Some(event) => {
                if matches!(event, Event::Mouse(_)) && !shell.mouse_capture_enabled() {
                    return Ok(ControlFlow::Continue);
                }
                let _ = shell.handle_event(&event);
            }
            None => {
                terminal
                    .draw(|frame| {
                        let mut ui = UiFrame::new(frame);
                        shell.render(&mut ui);
                    })
                    .map_err(|err| io::Error::other(err.to_string()))?;
            }
        }
        Ok(ControlFlow::Continue)
    });

    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result?;
    Ok(())
}
