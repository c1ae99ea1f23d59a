//! Click the moving box as many times as you can in 30 seconds

use gamebox::logging;
use gamebox::prelude::*;
use macroquad::window::Conf;
use rand::seq::SliceRandom;
use rand::Rng;

const FPS: i32 = 60;
const ROUND_TICKS: i32 = 30 * FPS;
/// Ticks the game-over screen ignores clicks for
const RESTART_DELAY: i32 = 3 * FPS;
const COLOR_NAMES: [&str; 6] = ["red", "orange", "yellow", "green", "blue", "purple"];

fn config() -> GameConfig {
    GameConfig {
        title: "Mouse Game".to_string(),
        fps: FPS as u32,
        ..Default::default()
    }
}

fn window_conf() -> Conf {
    config().window_conf()
}

struct Game {
    target: SpriteBox,
    colors: Vec<Color>,
    score: u32,
    timer: i32,
}

impl Game {
    fn new() -> gamebox::Result<Self> {
        let colors = COLOR_NAMES
            .iter()
            .map(|name| name.parse())
            .collect::<gamebox::Result<Vec<Color>>>()?;
        let mut rng = rand::thread_rng();
        let color = colors.choose(&mut rng).copied().unwrap_or(Color::RED);
        let mut target = SpriteBox::from_color(
            rng.gen_range(50..750) as f32,
            rng.gen_range(50..550) as f32,
            color,
            100.0,
            100.0,
        );
        target.speed_x = rng.gen_range(-10.0..10.0) * 60.0 / FPS as f32;
        target.speed_y = rng.gen_range(-10..10) as f32 * 60.0 / FPS as f32;
        Ok(Self {
            target,
            colors,
            score: 0,
            timer: ROUND_TICKS,
        })
    }

    /// Jump somewhere away from the cursor with a new color and speed
    fn randomize_target(&mut self, camera: &Camera) {
        let mut rng = rand::thread_rng();
        let mouse = camera.mouse();
        let (x, y) = loop {
            let x = rng.gen_range(50..750) as f32;
            let y = rng.gen_range(50..550) as f32;
            if (x - mouse.x).abs() >= 100.0 && (y - mouse.y).abs() >= 100.0 {
                break (x, y);
            }
        };

        let current = self.target.color();
        let others: Vec<Color> = self.colors.iter().copied().filter(|c| Some(*c) != current).collect();
        if let Some(&color) = others.choose(&mut rng) {
            self.target.set_color(color);
        }
        self.target.x = x;
        self.target.y = y;
        self.target.speed_x = rng.gen_range(-10..10) as f32 * 60.0 / FPS as f32;
        self.target.speed_y = rng.gen_range(-10..10) as f32 * 60.0 / FPS as f32;
    }

    fn tick(&mut self, camera: &mut Camera) -> gamebox::Result<()> {
        if self.timer > 0 {
            if self.target.mouseclick(camera) {
                self.score += 1;
                self.randomize_target(camera);
            }

            // bounce off the walls
            self.target.move_speed();
            if self.target.top() < 0.0 || self.target.bottom() > camera.height() as f32 {
                self.target.speed_y = -self.target.speed_y;
            }
            if self.target.left() < 0.0 || self.target.right() > camera.width() as f32 {
                self.target.speed_x = -self.target.speed_x;
            }
        } else if self.timer < -RESTART_DELAY && camera.mouseclick() {
            self.timer = ROUND_TICKS;
            self.score = 0;
            self.randomize_target(camera);
        }

        let white = TextStyle::new(40, Color::WHITE);
        camera.clear(Color::BLACK);
        camera.draw(&self.target);
        camera.draw(&SpriteBox::from_text(200.0, 50.0, &format!("Score: {}", self.score), white)?);
        let seconds = self.timer.max(0) as f32 / FPS as f32;
        camera.draw(&SpriteBox::from_text(600.0, 50.0, &format!("Timer: {:.1}", seconds), white)?);

        self.timer -= 1;
        if self.timer <= 0 {
            let big = TextStyle::new(80, Color::WHITE);
            camera.draw(&SpriteBox::from_text(400.0, 300.0, "Game Over", big)?);
        }
        if self.timer < -RESTART_DELAY {
            camera.draw(&SpriteBox::from_text(400.0, 400.0, "Click anywhere to restart", white)?);
        }

        camera.display();
        Ok(())
    }
}

async fn run() -> anyhow::Result<()> {
    let config = config();
    let mut camera = Camera::from_config(&config);
    let mut game = Game::new()?;
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
        tracing::error!("mouse game failed: {:#}", e);
    }
}
