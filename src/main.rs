mod display;

use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    terminal, ExecutableCommand,
};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use display::TerminalSurface;
use volley_shooter::clock::{Clock, MonotonicClock};
use volley_shooter::config::{GameConfig, PLAYER_HEIGHT, PLAYER_WIDTH};
use volley_shooter::entities::GameStatus;
use volley_shooter::error::GameError;
use volley_shooter::logging;
use volley_shooter::render::render;
use volley_shooter::session::GameSession;

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

/// World units the ship moves per arrow-key press.
const KEY_STEP: f32 = 20.0;

/// Auto-firing arcade shooter with stackable equipment
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for a reproducible run (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Score needed for each equipment offer
    #[arg(long)]
    score_per_equipment: Option<u32>,

    /// Score cap; reaching it wins the game
    #[arg(long)]
    max_score: Option<u32>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> GameConfig {
        let defaults = GameConfig::default();
        GameConfig {
            score_per_equipment: self.score_per_equipment.unwrap_or(defaults.score_per_equipment),
            max_score: self.max_score.unwrap_or(defaults.max_score),
            ..defaults
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.  Mouse input is forwarded to the session as
/// pointer events in world coordinates; the keyboard offers the same actions
/// for terminals without mouse support.
fn game_loop<W: Write>(
    surface: &mut TerminalSurface<W>,
    session: &mut GameSession,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
) -> std::io::Result<()> {
    let clock = MonotonicClock::new();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Mouse(MouseEvent { kind, column, row, .. }) => {
                    let (x, y) = surface.to_world(column, row);
                    match kind {
                        MouseEventKind::Down(_) => session.pointer_start(x, y),
                        MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                            session.pointer_move(x, y)
                        }
                        MouseEventKind::Up(_) => session.pointer_end(),
                        _ => {}
                    }
                }
                Event::Key(KeyEvent { code, kind: KeyEventKind::Press, modifiers, .. }) => {
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(())
                        }
                        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                            nudge(session, -KEY_STEP)
                        }
                        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                            nudge(session, KEY_STEP)
                        }
                        KeyCode::Char('1') => {
                            session.choose_equipment(0);
                        }
                        KeyCode::Char('2') => {
                            session.choose_equipment(1);
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') if session.is_game_over() => {
                            session.reset()
                        }
                        _ => {}
                    }
                }
                Event::Resize(cols, rows) => surface.resize(cols, rows),
                _ => {}
            }
        }

        session.update(clock.now_ms(), rng);
        render(surface, session)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

/// Keyboard movement, routed through the same clamped pointer path.
fn nudge(session: &mut GameSession, dx: f32) {
    if session.status != GameStatus::Playing {
        return;
    }
    let x = session.player.x + PLAYER_WIDTH / 2.0 + dx;
    let y = session.player.y + PLAYER_HEIGHT / 2.0;
    session.pointer_move(x, y);
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    let args = Args::parse();
    logging::init(args.verbose, args.log_file.as_deref())?;

    let config = args.config();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!("starting session with {config:?}");

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx, config, &mut rng);

    // Always restore the terminal
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: GameConfig,
    rng: &mut StdRng,
) -> Result<(), GameError> {
    let (cols, rows) = terminal::size()?;
    let mut surface = TerminalSurface::new(out, cols, rows, config.width, config.height);
    let mut session = GameSession::new(config);
    game_loop(&mut surface, &mut session, rx, rng)?;
    info!("quit with score {}", session.score);
    Ok(())
}
