//! Interactive application loop.
//!
//! Single loop: poll a key, redraw, and advance a generation whenever
//! `1.0 / speed` seconds have passed since the last one. The world is
//! usually larger than the terminal; arrow keys pan the viewport, and
//! wraparound indexing means any pan offset is valid.

use crate::terminal::Terminal;
use chrono::Local;
use crossterm::event::KeyCode;
use crossterm::style::Color;
use lifeterm::life::{Engine, EngineError, Fate};
use lifeterm::SimConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::io;
use std::time::{Duration, Instant};

/// Minimum game speed factor
pub const MIN_SPEED: f64 = 0.1;
/// Maximum game speed factor
pub const MAX_SPEED: f64 = 16.0;

/// Seconds slept per loop iteration
const LOOP_SLEEP: f32 = 0.01;

/// Runtime state for the interactive controls
struct App {
    engine: Engine,
    rng: StdRng,
    prob: f64,
    speed: f64,
    paused: bool,
    color: bool,
    pos_x: isize,
    pos_y: isize,
}

/// Build the engine, populate it, and run the event loop
pub fn run(config: &SimConfig) -> Result<(), Box<dyn Error>> {
    let seed = config.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0) // Fallback seed for misconfigured system clocks
    });
    let mut rng = StdRng::seed_from_u64(seed);

    // Engine errors surface here, before the terminal is put in raw mode
    let mut engine = Engine::new(config.width, config.height, config.fast)?;
    engine.populate_random(&mut rng, config.prob)?;

    let mut app = App {
        engine,
        rng,
        prob: config.prob,
        speed: config.speed.clamp(MIN_SPEED, MAX_SPEED),
        paused: false,
        color: config.color,
        pos_x: 0,
        pos_y: 0,
    };

    let mut term = Terminal::new()?;
    term.clear_screen()?;
    app.main_loop(&mut term)?;
    Ok(())
}

impl App {
    /// Event loop: keys, redraw, and the generation timer
    fn main_loop(&mut self, term: &mut Terminal) -> Result<(), Box<dyn Error>> {
        let mut prev_tick = Instant::now();

        self.draw(term)?;

        loop {
            if let Some((code, _mods)) = term.check_key()? {
                if self.handle_key(code)? {
                    break;
                }
            }

            self.draw(term)?;

            // Is it time for a new generation?
            if prev_tick.elapsed() >= Duration::from_secs_f64(1.0 / self.speed) {
                if !self.paused {
                    self.engine.advance();
                }
                prev_tick = Instant::now();
            }

            term.sleep(LOOP_SLEEP);
        }

        Ok(())
    }

    /// Handle a keypress, returns true if the app should quit
    fn handle_key(&mut self, code: KeyCode) -> Result<bool, EngineError> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Enter => {
                // Single-step, but only while paused
                if self.paused {
                    self.engine.advance();
                }
            }
            KeyCode::Char('r') => self.engine.reset(&mut self.rng, self.prob)?,
            KeyCode::Char('+') => self.increase_speed(),
            KeyCode::Char('-') => self.decrease_speed(),
            KeyCode::Char('c') => self.color = !self.color,
            KeyCode::Left => self.pos_x -= 1,
            KeyCode::Right => self.pos_x += 1,
            KeyCode::Up => self.pos_y -= 1,
            KeyCode::Down => self.pos_y += 1,
            _ => {}
        }
        Ok(false)
    }

    /// Double the speed factor (ignored while paused)
    fn increase_speed(&mut self) {
        if !self.paused {
            self.speed = (self.speed * 2.0).min(MAX_SPEED);
        }
    }

    /// Halve the speed factor (ignored while paused)
    fn decrease_speed(&mut self) {
        if !self.paused {
            self.speed = (self.speed / 2.0).max(MIN_SPEED);
        }
    }

    /// Draw the world viewport and the status chrome, then present
    fn draw(&self, term: &mut Terminal) -> io::Result<()> {
        term.clear();

        let (tw, th) = term.size();
        let (w, h) = (tw as i32, th as i32);

        // World cells fill the area inside the border
        for y in 1..h - 1 {
            for x in 1..w - 1 {
                let row = self.pos_y + (y - 1) as isize;
                let col = self.pos_x + (x - 1) as isize;
                let ch = fate_char(self.engine.fate(row, col));
                if ch == ' ' {
                    continue;
                }
                let (fg, bold) = if self.color {
                    let (color, bold) = age_color(self.engine.age(row, col));
                    (Some(color), bold)
                } else {
                    (None, false)
                };
                term.set(x, y, ch, fg, bold);
            }
        }

        term.border();

        // Pan position
        term.set_str(
            2,
            0,
            &format!(" X = {} - Y = {} ", self.pos_x, self.pos_y),
            None,
            false,
        );

        // Clock
        let clock = Local::now().format(" %H:%M:%S ").to_string();
        term.set_str(w - 12, 0, &clock, None, false);

        // Generation number
        term.set_str(
            2,
            h - 1,
            &format!(" Generation: {} ", self.engine.generation()),
            None,
            false,
        );

        // Speed factor
        let speed_str = if self.paused {
            "---".to_string()
        } else {
            format!("{:.1}x", self.speed)
        };
        term.set_str(w - 15, h - 1, &format!(" Speed: {speed_str} "), None, false);

        term.render()
    }
}

/// Glyph for a cell according to its fate.
///
/// Newborn cells are drawn blank for one generation and flash in on the next
/// draw; dying cells leave a mark for one generation as they go.
fn fate_char(fate: Fate) -> char {
    match fate {
        Fate::StayDead => ' ',
        Fate::Birth => ' ',
        Fate::Survive => 'o',
        Fate::DeathByIsolation => '*',
        Fate::DeathByOvercrowding => 'O',
    }
}

/// Color for a cell according to how long it has held its state
fn age_color(age: u64) -> (Color, bool) {
    match age {
        0 => (Color::White, true),
        1 => (Color::Yellow, true),
        2..=4 => (Color::Cyan, true),
        _ => (Color::Green, true),
    }
}
