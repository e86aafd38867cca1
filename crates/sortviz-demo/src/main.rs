#![forbid(unsafe_code)]

//! Sort visualizer binary entry point.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use sortviz_core::{Command, EngineConfig, EngineEvent, RunState, SortKind};
use sortviz_demo::{cli, term::TerminalSession, ui};
use sortviz_engine::Controller;

/// How long to wait for input before checking the engine channel again.
const POLL_INTERVAL: Duration = Duration::from_millis(15);

fn main() {
    let opts = cli::Opts::parse();
    init_logging();

    let config = EngineConfig::default()
        .with_array_size(opts.size)
        .with_value_range(20..opts.max_value)
        .with_delay(Duration::from_millis(opts.delay_ms));
    let (controller, events) = match Controller::new(config) {
        Ok(built) => built,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let result = run(&controller, &events, &opts);

    // Let the channel disconnect so an in-flight run finishes unpaced,
    // then wait for the worker before the process exits.
    drop(events);
    controller.join();

    if let Err(e) = result {
        eprintln!("Runtime error: {e}");
        std::process::exit(1);
    }
}

/// The UI loop. The session guard lives here so the terminal is restored
/// before main reports any error.
fn run(controller: &Controller, events: &Receiver<EngineEvent>, opts: &cli::Opts) -> io::Result<()> {
    let session = TerminalSession::new()?;
    let mut out = io::stdout();

    let started = Instant::now();
    let deadline = (opts.exit_after_ms > 0)
        .then(|| started + Duration::from_millis(opts.exit_after_ms));

    let mut latest = controller.latest();
    let mut running: Option<SortKind> = None;
    let mut dirty = true;

    loop {
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    let ctrl_c = key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL);
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        _ if ctrl_c => break,
                        KeyCode::Char('1') => start(controller, SortKind::Bubble, &mut running),
                        KeyCode::Char('2') => start(controller, SortKind::Merge, &mut running),
                        KeyCode::Char('3') => start(controller, SortKind::Quick, &mut running),
                        KeyCode::Char('r') => {
                            // Rejected while running; the engine logs it.
                            let _ = controller.submit(Command::Reset);
                        }
                        _ => {}
                    }
                }
                Event::Resize(..) => dirty = true,
                _ => {}
            }
        }

        // Drain everything pending; the latest snapshot wins, but
        // Finished must still flip the state even when steps follow it
        // in the same drain.
        for engine_event in events.try_iter() {
            dirty = true;
            match engine_event {
                EngineEvent::Step(snapshot) | EngineEvent::Reset(snapshot) => latest = snapshot,
                EngineEvent::Finished(_) => running = None,
            }
        }

        if dirty {
            let state = if running.is_some() {
                RunState::Running
            } else {
                RunState::Idle
            };
            ui::draw_frame(
                &mut out,
                &latest,
                opts.max_value,
                state,
                running,
                session.size()?,
            )?;
            dirty = false;
        }

        if let Some(deadline) = deadline
            && Instant::now() >= deadline
        {
            break;
        }
    }

    drop(session);
    Ok(())
}

fn start(controller: &Controller, kind: SortKind, running: &mut Option<SortKind>) {
    if controller.submit(Command::Start(kind)).is_accepted() {
        *running = Some(kind);
    }
}

/// Route tracing to a file when `SORTVIZ_LOG` is set; stderr would
/// corrupt the alternate screen, so logging is off by default.
fn init_logging() {
    let Ok(path) = std::env::var("SORTVIZ_LOG") else {
        return;
    };
    match std::fs::File::create(&path) {
        Ok(file) => {
            let filter = tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        Err(e) => {
            eprintln!("Cannot open log file {path}: {e}");
        }
    }
}
