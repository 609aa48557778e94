//! Per-mode scene composition

use glam::Vec2;

use super::{Surface, palette};
use crate::app::{App, AppMode, MainMenuItem, Menu};
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::levels::Level;
use crate::settings::Settings;
use crate::sim::DriveState;

const TITLE_SIZE: f32 = 64.0;
const ITEM_SIZE: f32 = 36.0;
const ITEM_SPACING: f32 = 44.0;
const HINT_SIZE: f32 = 22.0;
const HUD_SIZE: f32 = 36.0;
const HUD_LEFT: f32 = 10.0;
const LIST_LEFT: f32 = CANVAS_WIDTH / 2.0 - 140.0;
const PARKING_LINE_WIDTH: f32 = 2.0;

/// Draw whatever the app is currently showing
pub fn draw_frame<S: Surface>(surface: &mut S, app: &App) {
    match app.mode() {
        AppMode::MainMenu(menu) => {
            let labels: Vec<&str> = MainMenuItem::ALL.iter().map(MainMenuItem::label).collect();
            draw_menu(surface, "Car Park", &labels, menu);
        }
        AppMode::LevelSelect(menu) => {
            let labels: Vec<&str> = app.levels().names().collect();
            draw_menu(surface, "Select Level", &labels, menu);
        }
        AppMode::Driving(drive) => {
            draw_driving(surface, drive, app.current_level(), app.settings())
        }
        AppMode::Exiting => {}
    }
}

fn draw_menu<S: Surface>(surface: &mut S, title: &str, labels: &[&str], menu: &Menu) {
    surface.clear(palette::MENU_BACKGROUND);
    let title_at = Vec2::new(LIST_LEFT, 140.0);
    surface.text(title, title_at, TITLE_SIZE, palette::TITLE);

    let top = 220.0;
    for (i, label) in labels.iter().enumerate() {
        let baseline = top + i as f32 * ITEM_SPACING;
        let color = if i == menu.selected() {
            surface.rect(
                Vec2::new(LIST_LEFT - 12.0, baseline - ITEM_SIZE * 0.75),
                Vec2::new(280.0, ITEM_SPACING - 4.0),
                palette::HIGHLIGHT,
            );
            palette::ITEM_SELECTED
        } else {
            palette::ITEM
        };
        surface.text(label, Vec2::new(LIST_LEFT, baseline), ITEM_SIZE, color);
    }

    surface.text(
        "Up/Down to choose, Enter to confirm",
        Vec2::new(LIST_LEFT, CANVAS_HEIGHT - 40.0),
        HINT_SIZE,
        palette::HINT,
    );
}

fn draw_driving<S: Surface>(
    surface: &mut S,
    drive: &DriveState,
    layout: Option<&Level>,
    settings: &Settings,
) {
    surface.clear(palette::BACKGROUND);

    if settings.show_level_content {
        let bays = layout.map(|l| l.bays.as_slice()).unwrap_or_default();
        for bay in bays {
            for (from, to) in bay.segments() {
                surface.line(from, to, PARKING_LINE_WIDTH, palette::PARKING_LINE);
            }
        }
    }

    surface.sprite(drive.vehicle_pixels(), drive.vehicle.heading);

    if settings.show_score {
        // Baselines, one line per 40 px from the top-left corner
        let score = format!("Score: {}", drive.score);
        surface.text(&score, Vec2::new(HUD_LEFT, 36.0), HUD_SIZE, palette::HUD);
        if let Some(index) = drive.level {
            let level = format!("Level: {}", index + 1);
            surface.text(&level, Vec2::new(HUD_LEFT, 76.0), HUD_SIZE, palette::HUD);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FrameInput;
    use crate::renderer::Rgba;
    use crate::settings::FrontEnd;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear(Rgba),
        Line(Vec2, Vec2),
        Rect(Vec2, Vec2),
        Text(String, Rgba),
        Sprite(Vec2, f32),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Surface for Recorder {
        fn clear(&mut self, color: Rgba) {
            self.calls.push(Call::Clear(color));
        }
        fn line(&mut self, from: Vec2, to: Vec2, _thickness: f32, _color: Rgba) {
            self.calls.push(Call::Line(from, to));
        }
        fn rect(&mut self, origin: Vec2, size: Vec2, _color: Rgba) {
            self.calls.push(Call::Rect(origin, size));
        }
        fn text(&mut self, text: &str, _at: Vec2, _size: f32, color: Rgba) {
            self.calls.push(Call::Text(text.to_string(), color));
        }
        fn sprite(&mut self, center: Vec2, degrees: f32) {
            self.calls.push(Call::Sprite(center, degrees));
        }
    }

    impl Recorder {
        fn texts(&self) -> Vec<&str> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Text(t, _) => Some(t.as_str()),
                    _ => None,
                })
                .collect()
        }

        fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
            self.calls.iter().filter(|c| pred(c)).count()
        }

        fn has(&self, call: Call) -> bool {
            self.calls.contains(&call)
        }

        fn lines(&self) -> usize {
            self.count(|c| matches!(c, Call::Line(..)))
        }
    }

    fn render(settings: Settings) -> Recorder {
        let app = App::new(settings);
        let mut surface = Recorder::default();
        draw_frame(&mut surface, &app);
        surface
    }

    fn free_drive() -> Settings {
        Settings {
            front_end: FrontEnd::None,
            ..Default::default()
        }
    }

    #[test]
    fn test_main_menu_highlights_selection() {
        let surface = render(Settings::default());
        assert_eq!(surface.calls[0], Call::Clear(palette::MENU_BACKGROUND));
        assert!(surface.texts().contains(&"Start Game"));
        assert!(surface.texts().contains(&"Quit"));
        assert_eq!(surface.count(|c| matches!(c, Call::Rect(..))), 1);
        let highlighted = Call::Text("Start Game".into(), palette::ITEM_SELECTED);
        assert!(surface.has(highlighted));
        assert!(surface.has(Call::Text("Quit".into(), palette::ITEM)));
    }

    #[test]
    fn test_level_list_shows_ten_levels() {
        let surface = render(Settings {
            front_end: FrontEnd::LevelSelect,
            ..Default::default()
        });
        let texts = surface.texts();
        assert!(texts.contains(&"Select Level"));
        assert!(texts.contains(&"Level 1"));
        assert!(texts.contains(&"Level 10"));
    }

    #[test]
    fn test_free_drive_draws_lot_car_and_score() {
        let surface = render(free_drive());
        assert_eq!(surface.calls[0], Call::Clear(palette::BACKGROUND));
        // Three open bays, three lines each
        assert_eq!(surface.lines(), 9);
        let back_line = Call::Line(Vec2::new(100.0, 200.0), Vec2::new(200.0, 200.0));
        assert!(surface.has(back_line));
        assert!(surface.has(Call::Sprite(Vec2::ZERO, 0.0)));
        // No level number outside the level list
        assert_eq!(surface.texts(), vec!["Score: 0"]);
    }

    #[test]
    fn test_selected_level_draws_its_bays_and_number() {
        let mut app = App::new(Settings {
            front_end: FrontEnd::LevelSelect,
            ..Default::default()
        });
        let down = FrameInput {
            down: true,
            ..Default::default()
        };
        let confirm = FrameInput {
            confirm: true,
            ..Default::default()
        };
        app.frame(&down, 0.0, 0.0);
        app.frame(&FrameInput::default(), 0.1, 0.0);
        app.frame(&confirm, 0.5, 0.0);

        let mut surface = Recorder::default();
        draw_frame(&mut surface, &app);
        // Five closed bays, four lines each
        assert_eq!(surface.lines(), 20);
        let top_edge = Call::Line(Vec2::new(200.0, 200.0), Vec2::new(300.0, 200.0));
        assert!(surface.has(top_edge));
        assert_eq!(surface.texts(), vec!["Score: 0", "Level: 2"]);
    }

    #[test]
    fn test_empty_level_draws_no_bays() {
        let mut app = App::new(Settings {
            front_end: FrontEnd::MainMenu,
            start_level: 5,
            ..Default::default()
        });
        let confirm = FrameInput {
            confirm: true,
            ..Default::default()
        };
        app.frame(&confirm, 0.0, 0.0);

        let mut surface = Recorder::default();
        draw_frame(&mut surface, &app);
        assert_eq!(surface.lines(), 0);
        assert!(surface.texts().contains(&"Level: 6"));
    }

    #[test]
    fn test_driving_variant_without_extras() {
        let surface = render(Settings {
            show_score: false,
            show_level_content: false,
            ..free_drive()
        });
        assert_eq!(surface.lines(), 0);
        assert!(surface.texts().is_empty());
        assert_eq!(surface.count(|c| matches!(c, Call::Sprite(..))), 1);
    }

    #[test]
    fn test_sprite_follows_car() {
        let mut app = App::new(free_drive());
        app.frame(&FrameInput::default(), 0.0, 1.0 / 60.0);
        let mut surface = Recorder::default();
        draw_frame(&mut surface, &app);
        // Clamped to (2, 2) world units on the first tick
        assert!(surface.has(Call::Sprite(Vec2::new(64.0, 64.0), 0.0)));
    }

    #[test]
    fn test_exiting_draws_nothing() {
        let mut app = App::new(Settings::default());
        let close = FrameInput {
            close_requested: true,
            ..Default::default()
        };
        app.frame(&close, 0.0, 0.0);
        let mut surface = Recorder::default();
        draw_frame(&mut surface, &app);
        assert!(surface.calls.is_empty());
    }
}
