use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use techsim::core::constants::{DEFAULT_TICK_INTERVAL_MS, INPUT_POLL_MS};
use techsim::core::format::format_currency;
use techsim::core::{monthly_tick, Session, TickEvent};
use techsim::data::{GameData, Scenario};
use techsim::input::{handle_game_input, GameUiState, InputResult};
use techsim::logging;
use techsim::ui::draw_game;
use techsim::ui::scenario_creation::ScenarioCreationScreen;
use techsim::ui::scenario_select::{ScenarioSelectScreen, Selection};
use tracing::{debug, error, info};

#[derive(Parser)]
#[command(name = "techsim")]
#[command(version)]
#[command(about = "TechStartup Simulator Pro - run a startup from your terminal", long_about = None)]
struct Cli {
    /// Directory containing scenarios.json, events.json and game-config.json
    /// (defaults to the built-in data)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Milliseconds of real time per simulated month
    #[arg(short, long, default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Log file path
    #[arg(long, default_value = "techsim.log")]
    log_file: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available scenarios and exit
    Scenarios,
}

enum Screen {
    ScenarioSelect,
    ScenarioCreation,
    Game,
}

fn print_scenarios(scenarios: &[Scenario]) {
    for scenario in scenarios {
        println!(
            "{:<20} {:<24} cash {:>12}  team {:>3}  trend {:.1}",
            scenario.id,
            scenario.name,
            format_currency(scenario.initial_cash),
            scenario.initial_employees,
            scenario.industry_trend
        );
        println!("{:<20} {}", "", scenario.description);
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init_file_logging(&cli.log_file, cli.verbose) {
        eprintln!(
            "Warning: could not open log file {}: {}",
            cli.log_file.display(),
            e
        );
    }

    let data = match GameData::load(cli.data_dir.as_deref()) {
        Ok(data) => data,
        Err(e) => {
            error!(error = %e, "failed to load game data");
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    };

    if let Some(Commands::Scenarios) = cli.command {
        print_scenarios(&data.scenarios);
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, data, Duration::from_millis(cli.tick_ms.max(1)));

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Returns the next key press, waiting at most `timeout`.
fn poll_key(timeout: Duration) -> io::Result<Option<KeyEvent>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(Some(key));
            }
        }
    }
    Ok(None)
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    data: GameData,
    tick_interval: Duration,
) -> io::Result<()> {
    let GameData {
        mut scenarios,
        random_events,
        config,
    } = data;

    let mut current_screen = Screen::ScenarioSelect;
    let mut select_screen = ScenarioSelectScreen::new();
    let mut creation_screen = ScenarioCreationScreen::new();
    let mut ui_state = GameUiState::new();
    let mut session: Option<Session> = None;
    let mut last_tick = Instant::now();
    let mut rng = rand::thread_rng();
    let poll = Duration::from_millis(INPUT_POLL_MS);

    loop {
        match current_screen {
            Screen::ScenarioSelect => {
                terminal.draw(|f| {
                    let area = f.size();
                    select_screen.draw(f, area, &scenarios);
                })?;

                let Some(key) = poll_key(poll)? else {
                    continue;
                };
                match key.code {
                    KeyCode::Up => select_screen.move_up(),
                    KeyCode::Down => select_screen.move_down(&scenarios),
                    KeyCode::Enter => match select_screen.selection(&scenarios) {
                        Selection::Scenario(index) => {
                            session = Some(Session::new(
                                scenarios[index].clone(),
                                config.clone(),
                                random_events.clone(),
                                Local::now().date_naive(),
                            ));
                            ui_state = GameUiState::new();
                            last_tick = Instant::now();
                            current_screen = Screen::Game;
                        }
                        Selection::CreateCustom => {
                            creation_screen = ScenarioCreationScreen::new();
                            current_screen = Screen::ScenarioCreation;
                        }
                    },
                    KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => break,
                    _ => {}
                }
            }

            Screen::ScenarioCreation => {
                terminal.draw(|f| {
                    let area = f.size();
                    creation_screen.draw(f, area);
                })?;

                let Some(key) = poll_key(poll)? else {
                    continue;
                };
                match key.code {
                    KeyCode::Char(c) => creation_screen.handle_char_input(c),
                    KeyCode::Backspace => creation_screen.handle_backspace(),
                    KeyCode::Tab | KeyCode::Down => creation_screen.next_field(),
                    KeyCode::BackTab | KeyCode::Up => creation_screen.prev_field(),
                    KeyCode::Enter => {
                        if let Some(scenario) =
                            creation_screen.submit(Utc::now().timestamp_millis())
                        {
                            info!(id = %scenario.id, name = %scenario.name, "custom scenario created");
                            scenarios.push(scenario);
                            select_screen.selected_index = scenarios.len() - 1;
                            current_screen = Screen::ScenarioSelect;
                        }
                    }
                    KeyCode::Esc => current_screen = Screen::ScenarioSelect,
                    _ => {}
                }
            }

            Screen::Game => {
                let Some(active) = session.as_mut() else {
                    current_screen = Screen::ScenarioSelect;
                    continue;
                };

                terminal.draw(|f| draw_game(f, active, &ui_state))?;

                // Wait for input, but never past the next tick
                let until_tick = tick_interval.saturating_sub(last_tick.elapsed());
                if let Some(key) = poll_key(until_tick.min(poll))? {
                    match handle_game_input(key, active, &mut ui_state, &mut rng) {
                        InputResult::QuitToSelect => {
                            info!(
                                months = active.months_elapsed,
                                cash = active.company.cash,
                                "game ended"
                            );
                            session = None;
                            current_screen = Screen::ScenarioSelect;
                            continue;
                        }
                        InputResult::ActionTaken(message) => debug!(%message, "action"),
                        InputResult::Continue => {}
                    }
                }

                if last_tick.elapsed() >= tick_interval {
                    last_tick = Instant::now();
                    let result = monthly_tick(active, &mut rng);
                    for event in &result.events {
                        if let TickEvent::RandomEvent { message } = event {
                            debug!(%message, "tick random event");
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
