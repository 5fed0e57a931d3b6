use fsview::app::{App, Focus, OpenFilter};
use fsview::cli::{AppConfig, Args};
use fsview::config::UserConfig;
use fsview::logging;
use fsview::tui::{
    handle_key_event, handle_prompt_input, render, KeyAction, PromptAction, Renderer, ViewState,
};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs, io, time::Duration};

/// Rows taken by header, footer and pane borders
const CHROME_HEIGHT: u16 = 8;

fn main() -> io::Result<()> {
    // Parse command line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Convert to config
    let config: AppConfig = args.into();

    // The terminal is taken over below, so the log goes to a file
    match logging::init(config.log_file.as_deref()) {
        Ok(path) => log::info!("logging to {}", path.display()),
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }

    // Run the app
    run_app_with_config(&config)
}

/// Runs the TUI application with configuration
pub fn run_app_with_config(config: &AppConfig) -> io::Result<()> {
    // Load user configuration
    let mut user_config = UserConfig::load_or_default();

    let mut app = App::new(&config.directory, config.app_options(&user_config));
    for path in &config.open {
        let path = fs::canonicalize(path).unwrap_or_else(|_| path.clone());
        if let Err(e) = app.open_path(&path.to_string_lossy(), OpenFilter::All) {
            log::warn!("could not open {}: {}", path.display(), e);
        }
    }
    let mut renderer = Renderer::new(&config.theme(&user_config));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_loop(&mut terminal, &mut app, &mut renderer, config, &mut user_config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Main application loop
fn run_loop<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    renderer: &mut Renderer,
    config: &AppConfig,
    user_config: &mut UserConfig,
) -> io::Result<()> {
    // Show welcome on first launch or if --welcome flag is set
    let should_show_welcome = config.show_welcome || !user_config.welcome_shown;
    let mut view_state = if should_show_welcome {
        ViewState::Welcome
    } else {
        ViewState::Browsing
    };

    loop {
        terminal.draw(|frame| render(frame, app, &view_state, renderer))?;

        // Handle input
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // Handle overlay-specific input
        match view_state {
            ViewState::Help => {
                // Any unbound key closes help (or toggle with ?)
                let action = handle_key_event(key);
                if matches!(action, KeyAction::Help | KeyAction::Quit | KeyAction::None) {
                    view_state = ViewState::Browsing;
                }
                continue;
            }
            ViewState::Welcome => {
                // Any key dismisses welcome and starts browsing
                view_state = ViewState::Browsing;

                // Mark welcome as shown and persist
                user_config.welcome_shown = true;
                if let Err(e) = user_config.save() {
                    log::warn!("failed to save user config: {}", e);
                }
                continue;
            }
            ViewState::OpenPrompt => {
                match handle_prompt_input(key) {
                    PromptAction::Insert(c) => app.prompt.input.push(c),
                    PromptAction::Backspace => {
                        app.prompt.input.pop();
                    }
                    PromptAction::CycleFilter => app.prompt.filter = app.prompt.filter.next(),
                    PromptAction::Submit => {
                        if app.submit_prompt() {
                            view_state = ViewState::Browsing;
                        }
                    }
                    PromptAction::Cancel => {
                        app.status = None;
                        view_state = ViewState::Browsing;
                    }
                    PromptAction::None => {}
                }
                continue;
            }
            ViewState::Browsing => {}
        }

        let action = handle_key_event(key);
        if action != KeyAction::None {
            app.status = None;
        }
        let page = terminal.size()?.height.saturating_sub(CHROME_HEIGHT).max(1) as i32;

        match action {
            KeyAction::Quit => break,
            KeyAction::Up => app.cursor_up(),
            KeyAction::Down => app.cursor_down(),
            KeyAction::PageUp => app.scroll_by(-page),
            KeyAction::PageDown => app.scroll_by(page),
            KeyAction::Select => match app.focus {
                Focus::Content => {
                    app.open_selected();
                }
                Focus::Tabs => app.focus = Focus::Content,
            },
            KeyAction::NextTab => app.activate_next(),
            KeyAction::PreviousTab => app.activate_previous(),
            KeyAction::FocusTabs => app.focus = Focus::Tabs,
            KeyAction::FocusContent => app.focus = Focus::Content,
            KeyAction::OpenPrompt => {
                app.prompt.clear();
                view_state = ViewState::OpenPrompt;
            }
            KeyAction::Refresh => app.refresh(),
            KeyAction::ToggleTree => app.toggle_tree(),
            KeyAction::FileInfo => app.show_file_info(),
            KeyAction::Help => view_state = ViewState::Help,
            KeyAction::None => {}
        }
    }

    Ok(())
}
