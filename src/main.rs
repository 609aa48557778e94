//! Car Park entry point
//!
//! Opens the window, loads settings and the car sprite, then runs the frame
//! loop: poll input → update → render → present.

use macroquad::window::{Conf, next_frame};

use car_park::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use car_park::platform::{Clock, InputSource, WindowPlatform};
use car_park::renderer::{WindowCanvas, draw_frame};
use car_park::{App, GameError, Settings};

fn window_conf() -> Conf {
    Conf {
        window_title: "Car Park".to_owned(),
        window_width: CANVAS_WIDTH as i32,
        window_height: CANVAS_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run() -> Result<(), GameError> {
    let settings = Settings::load();
    log::info!(
        "Front end: {}, time step: {:?}, {} Hz",
        settings.front_end.as_str(),
        settings.time_step,
        settings.ticks_per_second
    );

    // Fail before the first frame if the sprite is missing
    let mut canvas = WindowCanvas::load(&settings.resolved_sprite_path()).await?;
    let mut platform = WindowPlatform::new();
    let mut app = App::new(settings);

    loop {
        let input = platform.poll();
        app.frame(&input, platform.now(), platform.frame_dt());
        if app.is_exiting() {
            break;
        }

        draw_frame(&mut canvas, &app);
        next_frame().await;
    }

    log::info!("Car Park exiting");
    Ok(())
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Car Park starting...");

    if let Err(e) = run().await {
        log::error!("{e}");
        eprintln!("car-park: {e}");
        std::process::exit(1);
    }
}
