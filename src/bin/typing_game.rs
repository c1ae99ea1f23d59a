//! Type 20 words as fast as you can

use gamebox::logging;
use gamebox::prelude::*;
use macroquad::window::Conf;
use rand::seq::SliceRandom;

const FPS: u32 = 60;
const WORDS: [&str; 20] = [
    "along", "being", "dance", "finch", "floor", "frown", "graze", "heart", "joker", "knife", "quart", "rivet",
    "scrub", "silky", "slump", "super", "troll", "valor", "xylem", "zebra",
];
const GAME_OVER: &str = "Game Over ";
/// Points a word is worth when typed instantly
const ROUND_POINTS: f32 = 100.0;
/// Points lost per second spent on a word
const DECAY_PER_SECOND: f32 = 30.0;
const LETTER_GAP: f32 = 5.0;

fn config() -> GameConfig {
    GameConfig {
        title: "Typing Game".to_string(),
        fps: FPS,
        ..Default::default()
    }
}

fn window_conf() -> Conf {
    config().window_conf()
}

struct Game {
    words: Vec<&'static str>,
    /// Index of the word being typed; -1 before the first
    word_index: isize,
    remaining: String,
    typed: String,
    /// Letter held down right now, counted once it is released
    current: Option<char>,
    total_score: f32,
    round_score: f32,
}

impl Game {
    fn new() -> Self {
        let mut words = WORDS.to_vec();
        words.shuffle(&mut rand::thread_rng());
        Self {
            words,
            word_index: -1,
            remaining: " ".to_string(),
            typed: String::new(),
            current: None,
            total_score: 0.0,
            round_score: 0.0,
        }
    }

    fn advance(&mut self) {
        // all words used: shuffle and show the game-over screen
        if self.word_index >= self.words.len() as isize {
            self.words.shuffle(&mut rand::thread_rng());
            self.word_index = -1;
            self.remaining = GAME_OVER.to_string();
            self.typed.clear();
            self.current = None;
            self.round_score = 0.0;
        }

        if self.current.is_none() && self.remaining.is_empty() {
            self.word_index += 1;
            if self.typed == GAME_OVER {
                self.total_score = 0.0;
            } else {
                self.total_score += self.round_score;
            }
            if let Some(word) = self.words.get(self.word_index as usize) {
                self.remaining = format!("{} ", word);
                self.typed.clear();
                self.round_score = ROUND_POINTS;
            }
        } else if self.remaining != " " && !self.remaining.is_empty() {
            self.round_score = (self.round_score - DECAY_PER_SECOND / FPS as f32).max(0.0);
        }
    }

    fn draw_word(&self, camera: &mut Camera) -> gamebox::Result<()> {
        let big = |color| TextStyle::new(160, color);
        let current: String = self.current.map(String::from).unwrap_or_default();
        let full_word = format!("{}{}{}", self.typed, current, self.remaining.trim_end());
        let mut x = 400.0 - SpriteBox::from_text(0.0, 275.0, &full_word, big(Color::WHITE))?.width() / 2.0;

        let letters = self
            .typed
            .chars()
            .map(|c| (c, Color::BLUE))
            .chain(self.current.map(|c| (c, Color::RED)))
            .chain(self.remaining.chars().map(|c| (c, Color::WHITE)));
        for (letter, color) in letters {
            let mut b = SpriteBox::from_text(0.0, 275.0, &letter.to_string(), big(color))?;
            b.set_left(x);
            camera.draw(&b);
            x += b.width() + LETTER_GAP;
        }
        Ok(())
    }

    /// A letter only counts once its key is let go, so double letters need
    /// two separate presses
    fn read_keys(&mut self) -> gamebox::Result<()> {
        if let Some(c) = self.current {
            if !Key::try_from(c)?.is_pressed() {
                self.typed.push(c);
                self.current = None;
            }
        }
        if self.current.is_none() {
            if let Some(next) = self.remaining.chars().next() {
                if Key::try_from(next)?.is_pressed() {
                    self.current = Some(next);
                    self.remaining.remove(0);
                }
            }
        }
        Ok(())
    }

    fn tick(&mut self, camera: &mut Camera) -> gamebox::Result<()> {
        self.advance();

        let white = TextStyle::new(40, Color::WHITE);
        camera.clear(Color::BLACK);
        let score = format!("Score: {:03}", self.total_score as i32);
        camera.draw(&SpriteBox::from_text(200.0, 50.0, &score, white)?);
        let timer = format!("Timer: {:02}", self.round_score as i32);
        camera.draw(&SpriteBox::from_text(600.0, 50.0, &timer, white)?);

        if !self.remaining.is_empty() {
            self.draw_word(camera)?;
        }

        if self.remaining == " " {
            camera.draw(&SpriteBox::from_text(400.0, 475.0, "Press Space", TextStyle::new(72, Color::WHITE))?);
        } else if self.remaining.is_empty() {
            camera.draw(&SpriteBox::from_text(400.0, 475.0, "Press Space", TextStyle::new(72, Color::RED))?);
        }

        self.read_keys()?;
        camera.display();
        Ok(())
    }
}

async fn run() -> anyhow::Result<()> {
    let config = config();
    let mut camera = Camera::from_config(&config);
    let mut game = Game::new();
    timer_loop(&mut camera, config.fps, None, |camera: &mut Camera| game.tick(camera)).await?;
    Ok(())
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    logging::init(&config().log_filter);
    if let Err(e) = run().await {
        tracing::error!("typing game failed: {:#}", e);
    }
}
