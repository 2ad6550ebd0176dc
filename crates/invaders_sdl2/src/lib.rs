use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use typed_builder::TypedBuilder;

pub use invaders_common;
pub use invaders_common::app::App;
pub use sdl2;

use invaders_common::key::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    RGB24,
}

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub title: String,
    #[builder(default = PixelFormat::RGB24)]
    pub pixel_format: PixelFormat,
    /// Upper bound on presented frames per second when vsync runs faster.
    #[builder(default = 60)]
    pub frame_rate: u32,
}

pub struct SdlContext;

impl SdlContext {
    /// Open the window and drive `app` until it asks to exit or the window
    /// is closed. Exactly one `app.update` runs per presented frame.
    pub fn run(sdl_init_info: SdlInitInfo, mut app: impl App) -> Result<()> {
        let SdlInitInfo {
            width,
            height,
            scale,
            title,
            pixel_format,
            frame_rate,
        } = sdl_init_info;

        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let window = video_subsystem
            .window(&title, width * scale, height * scale)
            .position_centered()
            .build()?;
        let mut canvas = window.into_canvas().present_vsync().build()?;
        log::info!(
            "Opened '{}' at {}x{} ({}x scale)",
            title,
            width * scale,
            height * scale,
            scale
        );
        canvas
            .set_scale(scale as f32, scale as f32)
            .map_err(|e| anyhow!(e))?;

        let texture_creator = canvas.texture_creator();
        let mut texture = texture_creator.create_texture_streaming(
            map_pixel_format(pixel_format),
            width,
            height,
        )?;

        let color_size = map_pixel_format_size(pixel_format);
        let mut screen_state = vec![0u8; (width * color_size * height) as usize];

        app.init();
        let mut event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;

        let target_frame = Duration::from_secs(1) / frame_rate.max(1);
        let mut last_frame = Instant::now();

        loop {
            if app.should_exit() {
                app.exit();
                break;
            }

            for event in event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => {
                        app.exit();
                        return Ok(());
                    }
                    // Held keys auto-repeat; only the first edge counts.
                    Event::KeyDown {
                        keycode: Some(keycode),
                        repeat: false,
                        ..
                    } => {
                        app.handle_key_event(map_keycode(keycode), true);
                    }
                    Event::KeyUp {
                        keycode: Some(keycode),
                        ..
                    } => {
                        app.handle_key_event(map_keycode(keycode), false);
                    }
                    _ => {}
                }
            }

            app.update(&mut screen_state);

            texture.update(None, &screen_state, (width * color_size) as usize)?;
            canvas.clear();
            canvas.copy(&texture, None, None).map_err(|e| anyhow!(e))?;
            canvas.present();

            let elapsed = last_frame.elapsed();
            if elapsed < target_frame {
                std::thread::sleep(target_frame - elapsed);
            }
            last_frame = Instant::now();
        }

        Ok(())
    }
}

pub fn map_pixel_format(pixel_format: PixelFormat) -> PixelFormatEnum {
    match pixel_format {
        PixelFormat::RGB24 => PixelFormatEnum::RGB24,
    }
}

pub fn map_pixel_format_size(pixel_format: PixelFormat) -> u32 {
    match pixel_format {
        PixelFormat::RGB24 => 3,
    }
}

pub fn map_keycode(keycode: Keycode) -> Key {
    match keycode {
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        Keycode::Up => Key::Up,
        Keycode::Down => Key::Down,
        Keycode::A => Key::A,
        Keycode::D => Key::D,
        Keycode::P => Key::P,
        Keycode::Space => Key::Space,
        Keycode::Escape => Key::Escape,
        _ => Key::None,
    }
}
