//! Screen viewer: cycles through every screen the renderer can draw.
//!
//! ```bash
//! cargo run --release -- --assets assets --locale ko
//! ```
//!
//! Tab / Shift+Tab switch screens, ↑/↓ move the selected option, ←/→ change
//! the ship skin, L cycles the language, G toggles the debug grid, Esc quits.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, anyhow};
use clap::Parser;
use minifb::{Key, KeyRepeat, Window};
use tracing::info;

use invaders_render::{
    assets::load_assets,
    config::Config,
    draw::{DrawError, DrawManager},
    renderer::{Insets, WindowPresenter, palette},
    sprite::{SKIN_COUNT, SpriteKind},
    state::{
        Achievement, HighScore, InventoryItem, ItemCategory, KeyTable, ResultsSummary,
        TwoPlayerResults,
    },
    text::Locale,
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Directory holding `sprites.txt` and the font files
    #[arg(long, value_name = "DIR", default_value = "assets")]
    assets: PathBuf,

    /// Language code: en, ko or zh
    #[arg(long, default_value = "en")]
    locale: String,

    #[arg(long, default_value_t = 448)]
    width: usize,

    #[arg(long, default_value_t = 520)]
    height: usize,

    #[arg(long, default_value_t = 40)]
    hud: usize,

    #[arg(long, default_value_t = 60)]
    fps: usize,

    /// Title-bar height of the window decoration
    #[arg(long, default_value_t = 0)]
    inset_top: i32,
}

/// Every screen the viewer can show, in Tab order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scene {
    Language,
    Title,
    Menu,
    Mode,
    Skins,
    Levels,
    Countdown,
    Game,
    Pause,
    Clear,
    GameOver,
    Results,
    Results2p,
    NameInput,
    Username,
    HighScores,
    Achievements,
    Shop,
    Settings,
    Manual,
}

impl Scene {
    const ALL: [Scene; 20] = [
        Scene::Language,
        Scene::Title,
        Scene::Menu,
        Scene::Mode,
        Scene::Skins,
        Scene::Levels,
        Scene::Countdown,
        Scene::Game,
        Scene::Pause,
        Scene::Clear,
        Scene::GameOver,
        Scene::Results,
        Scene::Results2p,
        Scene::NameInput,
        Scene::Username,
        Scene::HighScores,
        Scene::Achievements,
        Scene::Shop,
        Scene::Settings,
        Scene::Manual,
    ];

    /// Option codes the ↑/↓ keys cycle through.
    fn options(self) -> &'static [i32] {
        match self {
            Scene::Language => &[0, 1, 2],
            Scene::Menu => &[2, 3, 4, 5, 6, 0],
            Scene::Mode => &[1, 2],
            Scene::Levels | Scene::NameInput | Scene::Username => &[0, 1, 2],
            Scene::Pause => &[0, 1],
            Scene::Clear => &[2, 1],
            Scene::Shop => &[70, 71, 72],
            Scene::Settings => &[0, 1, 2, 3],
            _ => &[0],
        }
    }
}

/// Mutable viewer state, independent of any frame.
struct Viewer {
    scene: usize,
    cursor: usize,
    locale: Locale,
    skin: usize,
    grid: bool,
    started: Instant,
    keys: KeyTable,
}

impl Viewer {
    fn scene(&self) -> Scene {
        Scene::ALL[self.scene]
    }

    fn option(&self) -> i32 {
        let options = self.scene().options();
        options[self.cursor % options.len()]
    }

    fn switch(&mut self, forward: bool) {
        let n = Scene::ALL.len();
        self.scene = if forward { (self.scene + 1) % n } else { (self.scene + n - 1) % n };
        self.cursor = 0;
        info!(scene = ?self.scene(), "scene");
    }

    /// Apply this frame's key presses. Returns the skin to install before
    /// the next frame, if it changed.
    fn handle_keys(&mut self, win: &Window) -> Option<usize> {
        if win.is_key_pressed(Key::Tab, KeyRepeat::No) {
            let back = win.is_key_down(Key::LeftShift) || win.is_key_down(Key::RightShift);
            self.switch(!back);
        }
        let n = self.scene().options().len();
        if win.is_key_pressed(Key::Down, KeyRepeat::Yes) {
            self.cursor = (self.cursor + 1) % n;
        }
        if win.is_key_pressed(Key::Up, KeyRepeat::Yes) {
            self.cursor = (self.cursor + n - 1) % n;
        }
        if win.is_key_pressed(Key::L, KeyRepeat::No) {
            self.locale = self.locale.next();
            info!(locale = %self.locale, "language");
        }
        if win.is_key_pressed(Key::G, KeyRepeat::No) {
            self.grid = !self.grid;
        }
        let before = self.skin;
        if win.is_key_pressed(Key::Right, KeyRepeat::No) {
            self.skin = (self.skin + 1) % SKIN_COUNT;
        }
        if win.is_key_pressed(Key::Left, KeyRepeat::No) {
            self.skin = (self.skin + SKIN_COUNT - 1) % SKIN_COUNT;
        }
        (self.skin != before).then_some(self.skin)
    }

    /// Seconds since start, used to animate the countdown.
    fn tick(&self) -> i32 {
        (self.started.elapsed().as_secs() % 6) as i32
    }

    fn draw(&self, dm: &mut DrawManager) -> Result<(), DrawError> {
        let locale = self.locale;
        let option = self.option();
        let cursor = self.cursor;
        match self.scene() {
            Scene::Language => {
                dm.draw_lang_desc()?;
                dm.draw_lang_menu(cursor)?;
            }
            Scene::Title => dm.draw_title(locale)?,
            Scene::Menu => dm.draw_menu(locale, option)?,
            Scene::Mode => dm.draw_mode_select(locale, option, true, true)?,
            Scene::Skins => dm.draw_skin_selection_menu(locale, self.skin, 5 - self.skin, true)?,
            Scene::Levels => dm.draw_level_selection_menu(locale, cursor, &[1, 2, 3])?,
            Scene::Countdown => {
                self.draw_game(dm)?;
                dm.draw_countdown(locale, 2, 5 - self.tick(), true)?;
            }
            Scene::Game => self.draw_game(dm)?,
            Scene::Pause => {
                self.draw_game(dm)?;
                let s = dm.screen()?;
                dm.draw_window(0, s.height / 2 - s.height / 12 - 30, 10)?;
                dm.draw_pause_menu(locale, option)?;
            }
            Scene::Clear => dm.draw_clear(locale, option, 3)?,
            Scene::GameOver => dm.draw_game_over(locale, true, false)?,
            Scene::Results => dm.draw_results(
                locale,
                &ResultsSummary {
                    score: 1530,
                    lives: 2,
                    ships_destroyed: 48,
                    accuracy: 0.61,
                    new_record: false,
                },
            )?,
            Scene::Results2p => dm.draw_results_2p(
                locale,
                &TwoPlayerResults {
                    score: 2210,
                    lives_1p: 1,
                    lives_2p: 0,
                    ships_destroyed: 73,
                    accuracy_1p: 0.55,
                    accuracy_2p: 0.42,
                    new_record: false,
                },
            )?,
            Scene::NameInput => dm.draw_name_input(locale, ['A', 'C', 'E'], cursor)?,
            Scene::Username => dm.draw_username_input(locale, ['K', 'I', 'M'], cursor)?,
            Scene::HighScores => {
                dm.draw_high_score_menu(locale)?;
                dm.draw_high_scores_1p(&[HighScore::new("ACE", 1530), HighScore::new("BOB", 980)])?;
                dm.draw_high_scores_2p(&[HighScore::new("DUO", 2210)])?;
            }
            Scene::Achievements => dm.draw_achievements(&[
                Achievement::new("FIRST_BLOOD", true),
                Achievement::new("PERFECT_SHOOTER", false),
                Achievement::new("BOMB_MASTER", false),
            ])?,
            Scene::Shop => dm.draw_item_shop_menu(locale, option, 35)?,
            Scene::Settings => {
                dm.draw_setting(locale, option, true)?;
                dm.draw_setting_detail(locale, option, true, 70, true, 2, &self.keys)?;
            }
            Scene::Manual => dm.draw_manual_menu(&self.keys)?,
        }
        if self.grid {
            dm.draw_grid()?;
            dm.draw_borders()?;
        }
        Ok(())
    }

    /// A frozen in-game frame: formation, player ship and both HUD bands.
    fn draw_game(&self, dm: &mut DrawManager) -> Result<(), DrawError> {
        let s = dm.screen()?;
        let rows = [
            SpriteKind::EnemyShipC1,
            SpriteKind::EnemyShipB1,
            SpriteKind::EnemyShipB2,
            SpriteKind::EnemyShipA1,
            SpriteKind::EnemyShipA2,
        ];
        for (j, kind) in rows.into_iter().enumerate() {
            for i in 0..8 {
                dm.draw_entity(kind, palette::WHITE, 40 + 45 * i, 100 + 40 * j as i32)?;
            }
        }
        dm.draw_entity(SpriteKind::EnemyShipSpecial, palette::RED, 200, 60)?;
        dm.draw_entity(SpriteKind::Ship, palette::GREEN, s.width / 2 - 13, s.height - 60)?;
        dm.draw_entity(SpriteKind::Bullet, palette::WHITE, s.width / 2 - 3, s.height - 120)?;

        dm.draw_score(1530)?;
        dm.draw_high_score(9000)?;
        dm.draw_lives(3)?;
        dm.draw_horizontal_line(40, palette::GREEN)?;
        dm.draw_horizontal_line(s.height - 1, palette::GREEN)?;
        let items = [
            InventoryItem::new(ItemCategory::Bomb),
            InventoryItem::new(ItemCategory::SpeedUp),
        ];
        dm.draw_items(&items, items.len())?;
        dm.draw_ammo(10, 3)?;
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let locale = Locale::from_code(&cli.locale)
        .ok_or_else(|| anyhow!("unknown locale {:?} (expected en, ko or zh)", cli.locale))?;
    let cfg = Config {
        width: cli.width,
        height: cli.height,
        hud_height: cli.hud,
        fps: cli.fps,
        insets: Insets::new(cli.inset_top, 0, 0, 0),
        asset_dir: cli.assets,
        locale,
        ..Config::default()
    };

    let assets = load_assets(&cfg);
    let mut dm = DrawManager::from_assets(assets, cfg.hud_height);

    let (content_w, content_h) = cfg.surface_size();
    let mut window = WindowPresenter::open("Invaders", content_w, content_h, cfg.insets, cfg.fps)
        .context("opening window")?;

    let mut viewer = Viewer {
        scene: 0,
        cursor: 0,
        locale: cfg.locale,
        skin: 0,
        grid: false,
        started: Instant::now(),
        keys: KeyTable::default(),
    };

    let mut acc_time = Duration::ZERO;
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();

    while window.is_open() && !window.window().is_key_down(Key::Escape) {
        if let Some(skin) = viewer.handle_keys(window.window()) {
            // skins only change between frames
            dm.select_skin(SpriteKind::Ship, skin)?;
            dm.select_skin(SpriteKind::Ship2, skin)?;
        }

        let t0 = Instant::now();
        dm.init_drawing(cfg.screen())?;
        viewer.draw(&mut dm)?;
        acc_time += t0.elapsed();
        acc_frames += 1;
        dm.complete_drawing(&mut window)?;

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            info!("avg draw: {avg_ms:.2} ms over {acc_frames} frames");
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
