//! Toasty Duels entry point
//!
//! Sets up the terminal, forwards input events from a dedicated thread, and
//! runs one simulation tick per frame at a capped frame rate.
//!
//! Usage: `toasty-duels [tuning.json]`. Logs go to stderr; redirect them
//! (`2>duels.log`) to keep the arena clean.

use std::io::{BufWriter, Write, stdout};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    ExecutableCommand, cursor,
    event::{
        self, DisableFocusChange, EnableFocusChange, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal,
};

use toasty_duels::Tuning;
use toasty_duels::consts::FRAME_LIMIT;
use toasty_duels::platform::{KeyTracker, poll_input};
use toasty_duels::renderer::{TerminalCanvas, draw_frame};
use toasty_duels::sim::{GameState, tick};

fn load_tuning() -> Tuning {
    match std::env::args().nth(1) {
        Some(path) => Tuning::load(&path).unwrap_or_else(|err| {
            log::warn!("{err}; using default tuning");
            Tuning::default()
        }),
        None => Tuning::default(),
    }
}

fn main() -> std::io::Result<()> {
    env_logger::init();
    log::info!("Toasty Duels starting...");

    let tuning = load_tuning();
    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    // Focus events let held keys be dropped when releases stop arriving
    out.execute(EnableFocusChange)?;

    // Release events (and a bare right shift) need the keyboard enhancement
    // protocol; other terminals fall back to hold windows.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                    | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES,
            ))
            .is_ok();
    log::info!("Keyboard enhancement: {keyboard_enhanced}");

    // Blocking reads happen on their own thread so the frame loop never waits
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = run(&mut out, &rx, tuning, keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableFocusChange);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        log::error!("Terminal error: {err}");
    }
    result
}

fn is_quit(key: &KeyEvent) -> bool {
    let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
    let quit = matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'));
    key.kind == KeyEventKind::Press && (ctrl_c || quit)
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    tuning: Tuning,
    keyboard_enhanced: bool,
) -> std::io::Result<()> {
    let frame = Duration::from_secs(1) / FRAME_LIMIT;
    let clock = Instant::now();

    let (cols, rows) = terminal::size()?;
    let mut canvas = TerminalCanvas::new(cols, rows, tuning.arena_size());
    let mut state = GameState::new(tuning);
    let mut keys = KeyTracker::new(keyboard_enhanced);

    loop {
        let frame_start = Instant::now();
        keys.next_frame();

        // Drain pending events without blocking
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(key) if is_quit(&key) => {
                    log::info!("Window closed");
                    return Ok(());
                }
                Event::Resize(cols, rows) => canvas.resize(cols, rows),
                other => keys.handle_event(&other),
            }
        }

        let input = poll_input(&keys);
        for event in tick(&mut state, &input, clock.elapsed()) {
            log::trace!("{event:?}");
        }

        draw_frame(&mut canvas, &state);
        canvas.present(out)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}
