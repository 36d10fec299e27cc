mod app;
mod core;
mod models;
mod system;
mod ui;
mod utils;

use app::{App, AppServices};
use crate::core::actions::find_action;
use crate::core::boundary::TracingSink;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};
use system::{
    init_logging, install_panic_hook, preferred_color_scheme, MemoryStore, PreferenceStore,
    TomlFileStore,
};
use utils::error::Result;

fn main() -> Result<()> {
    // 로깅 실패는 치명적이지 않음
    if let Err(e) = init_logging() {
        eprintln!("Warning: {}", e);
    }
    install_panic_hook();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "zeldash starting");

    let services = AppServices {
        store: preference_store(),
        sink: Rc::new(TracingSink),
        host_mode: preferred_color_scheme(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(services);

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // 터미널 복원 후 오류를 그대로 반환 (종료 코드 1)
    if let Err(err) = &res {
        tracing::error!(error = %err, "event loop failed");
    }

    tracing::info!("zeldash exiting");
    res
}

/// 설정 파일 저장소 (경로를 결정할 수 없으면 메모리 저장소)
fn preference_store() -> Rc<dyn PreferenceStore> {
    match TomlFileStore::default_path() {
        Some(path) => {
            let store = TomlFileStore::new(path);
            tracing::debug!(path = %store.path().display(), "using settings file");
            Rc::new(store)
        }
        None => {
            tracing::warn!("no settings path available, theme mode will not persist");
            Rc::new(MemoryStore::new())
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::renderer::render(f, app))?;

        // 로딩 중에는 스피너 애니메이션을 위해 짧게 대기
        let poll_timeout = if app.is_loading(Instant::now()) {
            Duration::from_millis(40)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if app.editing {
                        app.handle_editing_key(key.modifiers, key.code);
                    } else if let Some(action) = find_action(key.modifiers, key.code) {
                        app.execute_action(action);
                    }
                }
            }
        }

        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
