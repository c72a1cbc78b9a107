use crossterm::event;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io;
use std::time::{Duration, Instant};
use tooth_guard::assets::{self, FsAssets, LoadedAssets, SpriteCache};
use tooth_guard::audio::{self as sound, play_events, Audio};
use tooth_guard::constants::FRAME_MS;
use tooth_guard::game::{tick_game, ToothGuardGame};
use tooth_guard::input::KeyState;
use tooth_guard::ui::{self, Scene};
use tooth_guard::{build_info, logging, terminal};
use tracing::{error, info};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Tooth Guard - catch the healthy food, dodge the sugar\n");
                println!("Usage: tooth-guard\n");
                println!("Controls:");
                println!("  Left/Right  Move");
                println!("  R           Retry after game over");
                println!("  Esc         Quit after game over");
                println!("  Ctrl+C      Quit\n");
                println!("Assets are read from the directory containing the executable.");
                println!("Sound plays on the default audio device, or rings the bell without one.");
                println!("Set RUST_LOG to write a log file.");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'tooth-guard --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    if let Some(dir) = logging::init() {
        info!(dir = %dir.display(), version = %build_info::version_line(), "logging started");
    }

    // Startup asset phase; any missing file is fatal before the terminal is touched
    let source = FsAssets::new(assets::default_asset_dir()?);
    let loaded = match assets::load_required(&source) {
        Ok(loaded) => loaded,
        Err(e) => {
            error!(error = %e, "startup failed");
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    // Opened before the alternate screen so device-library chatter on stderr
    // does not land on the playfield
    let audio = sound::open_output(loaded.sounds.clone());

    // Setup terminal
    let mut stdout = io::stdout();
    let release_events = match terminal::enter(&mut stdout) {
        Ok(release_events) => release_events,
        Err(e) => {
            let _ = terminal::restore_stdout(false);
            return Err(e);
        }
    };
    terminal::install_panic_hook(release_events);

    let result = Terminal::new(CrosstermBackend::new(stdout))
        .and_then(|mut term| run(&mut term, &loaded, source, audio, release_events));

    let restored = terminal::restore_stdout(release_events);

    if let Err(e) = &result {
        error!(error = %e, "game loop failed");
    }
    if let Err(e) = &restored {
        error!(error = %e, "terminal restore failed");
    }
    info!("exiting");
    result.and(restored)
}

/// The game loop: input, update, audio, render, frame cap.
fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    loaded: &LoadedAssets,
    source: FsAssets,
    mut audio: Box<dyn Audio>,
    release_events: bool,
) -> io::Result<()> {
    let track = loaded.sounds.track_name();
    audio.start_music();

    let mut sprites = SpriteCache::new(source);
    let mut game = ToothGuardGame::new();
    let mut keys = KeyState::new(release_events);
    let mut rng = rand::thread_rng();

    let clock = Instant::now();
    let frame_budget = Duration::from_millis(FRAME_MS);
    let mut last_tick_ms = 0u64;

    info!(release_events, "game loop started");

    loop {
        let frame_start = Instant::now();
        let now_ms = clock.elapsed().as_millis() as u64;

        while event::poll(Duration::ZERO)? {
            keys.handle_event(&event::read()?, now_ms);
        }
        let input = keys.take_frame_input(now_ms);

        let dt_ms = now_ms - last_tick_ms;
        last_tick_ms = now_ms;

        let result = tick_game(&mut game, dt_ms, &input, &mut rng, &mut sprites);
        play_events(audio.as_mut(), &result.events);
        if result.quit {
            info!(health = game.health, "quit requested");
            return Ok(());
        }

        let scene = Scene {
            background: &loaded.background,
            player: &loaded.player,
            foods: &sprites,
            now_playing: audio.music_playing().then_some(track.as_str()),
        };
        terminal.draw(|frame| ui::draw(frame, &game, &scene))?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            std::thread::sleep(frame_budget - elapsed);
        }
    }
}
