use std::io::{self, BufRead};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use scout_core::{update, AppState, Msg};
use scout_engine::EngineHandle;
use scout_logging::{parse_level, scout_info};

use super::config::{AppConfig, Args};
use super::effects::EffectRunner;
use super::ui::input::{parse_command, Command, HELP};
use super::ui::render::render;

/// How long the loop waits for operator input before checking the engine.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app(args: Args) -> anyhow::Result<()> {
    let mut config = AppConfig::load(args.config.as_deref())?;
    config.apply_args(&args);
    scout_logging::initialize(
        config.log_destination,
        parse_level(&config.log_level),
        &config.log_file,
    );
    match &config.source {
        Some(path) => scout_info!("Loaded config from {:?}", path),
        None => scout_info!("No config file; using defaults"),
    }
    scout_info!("Starting lead-scout against {}", config.base_url);

    let engine =
        EngineHandle::with_settings(config.api_settings()).context("failed to start engine")?;
    let mut app = App::new(EffectRunner::new(engine));
    let lines = spawn_stdin_reader();

    println!("{HELP}\n");
    app.dispatch(Msg::Started);

    loop {
        app.pump_engine();
        match lines.recv_timeout(POLL_INTERVAL) {
            Ok(line) => match parse_command(&line) {
                Command::Send(msgs) => {
                    for msg in msgs {
                        app.dispatch(msg);
                    }
                }
                Command::Select(row) => app.select_row(row),
                Command::Show => app.render(),
                Command::Help => println!("{HELP}"),
                Command::Quit => break,
                Command::Empty => {}
                Command::Invalid(reason) => println!("{reason}"),
            },
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    scout_info!("lead-scout exiting");
    Ok(())
}

/// Owns the state; every message goes through here, one at a time.
struct App {
    state: AppState,
    effects: EffectRunner,
}

impl App {
    fn new(effects: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            effects,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.effects.run(effects);
        let was_dirty = state.consume_dirty();
        self.state = state;
        if was_dirty {
            self.render();
        }
    }

    fn pump_engine(&mut self) {
        for msg in self.effects.drain() {
            self.dispatch(msg);
        }
    }

    fn select_row(&mut self, row: usize) {
        let view = self.state.view();
        let Some(task) = view.task_at_row(row) else {
            println!("No task at row {row}.");
            return;
        };
        if !task.selectable {
            println!("Task at row {row} is {}; only complete tasks have leads.", task.status);
        }
        self.dispatch(Msg::TaskSelected {
            task_id: task.task_id.clone(),
        });
    }

    fn render(&self) {
        println!("{}", render(&self.state.view()));
    }
}

fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}
