use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
    KeyEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use glupo::assets::BuiltinAssets;
use glupo::core::constants::LOG_FILE_NAME;
use glupo::input::{handle_focus, handle_key, handle_mouse, InputResult};
use glupo::progression::{ProgressionStore, SaveQueue};
use glupo::simulation::{Game, GameConfig, InitError, LogAudio};
use glupo::ui::cell_surface::SWING_SCALE;
use glupo::ui::{self, App};
use glupo::utils::build_info;
use glupo::utils::persistence::glupo_dir;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

struct Options {
    debug: bool,
    data_dir: Option<PathBuf>,
}

fn parse_args() -> Options {
    let mut options = Options {
        debug: false,
        data_dir: None,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Glupo - swing at the character, collect boxes\n");
                println!("Usage: glupo [options]\n");
                println!("Options:");
                println!("  --debug            Enable the debug menu (toggle with `)");
                println!("  --data-dir <path>  Store progression and logs in <path>");
                println!("  --version          Show version information");
                println!("  --help             Show this help message");
                std::process::exit(0);
            }
            "--debug" => options.debug = true,
            "--data-dir" => match args.next() {
                Some(path) => options.data_dir = Some(PathBuf::from(path)),
                None => {
                    eprintln!("--data-dir requires a path");
                    std::process::exit(1);
                }
            },
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'glupo --help' for usage.");
                std::process::exit(1);
            }
        }
    }
    options
}

/// Logs go to a file; the terminal belongs to the UI.
fn init_logging(data_dir: &Path) -> io::Result<()> {
    let file = File::create(data_dir.join(LOG_FILE_NAME))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn start(options: &Options) -> Result<Game, InitError> {
    let data_dir = match &options.data_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            dir.clone()
        }
        None => glupo_dir()?,
    };
    init_logging(&data_dir)?;
    log::info!("{} starting in {}", build_info::version_line(), data_dir.display());

    let store = ProgressionStore::new(&data_dir);
    let data = store.load();
    let queue = SaveQueue::spawn(store)?;

    let config = GameConfig {
        audio: Box::new(LogAudio),
        sink: Box::new(queue),
        swing_scale: SWING_SCALE,
        ..GameConfig::default()
    };
    Game::init(data, &mut BuiltinAssets, config).inspect_err(|e| {
        log::error!("Initialization failed: {}", e);
    })
}

fn main() -> io::Result<()> {
    let options = parse_args();

    let game = match start(&options) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Failed to start glupo: {}", e);
            std::process::exit(1);
        }
    };
    let mut app = App::new(game, options.debug);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    stdout.execute(EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableFocusChange)?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    app.game.teardown();
    log::info!("Shut down");

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(FRAME_INTERVAL)? {
            continue;
        }
        // Drain queued events before the next frame.
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key(key, app) == InputResult::Quit {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => handle_mouse(mouse, app),
                Event::FocusGained => handle_focus(true, app),
                Event::FocusLost => handle_focus(false, app),
                _ => {}
            }
            if !event::poll(Duration::ZERO)? {
                break;
            }
        }
    }
}
