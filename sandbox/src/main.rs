//! birch sandbox
//!
//! Opens a window, logs every input event and exits on Escape or when the
//! window is closed. An optional argument names a `.toml` or `.ron` window
//! configuration.

use std::cell::Cell;
use std::rc::Rc;

use birch::prelude::*;

fn default_config() -> WindowConfig {
    // BIRCH_NO_VSYNC=1 runs the loop uncapped
    let vsync = std::env::var_os("BIRCH_NO_VSYNC").is_none();
    WindowConfig::new(800, 600, "sandbox").with_vsync(vsync)
}

fn load_config() -> WindowConfig {
    let Some(path) = std::env::args().nth(1) else {
        return default_config();
    };

    match WindowConfig::load_from_file(&path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring configuration {}: {}", path, e);
            default_config()
        }
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    log::info!("Starting birch sandbox");

    let config = load_config();
    let mut window = match Window::with_config(&config) {
        Ok(window) => window,
        Err(e) => {
            log::error!("Sandbox could not open a window: {}", e);
            std::process::exit(1);
        }
    };

    let quit = Rc::new(Cell::new(false));

    let quit_flag = Rc::clone(&quit);
    window.set_key_pressed_callback(move |key| {
        log::info!("Key pressed: {:?} ({})", key, key.code());
        if key == Key::Escape {
            quit_flag.set(true);
        }
    });
    window.set_key_released_callback(|key| log::debug!("Key released: {:?}", key));
    window.set_mouse_moved_callback(|x, y| log::trace!("Mouse at {}, {}", x, y));
    window.set_mouse_button_pressed_callback(|button| log::info!("Mouse button {} pressed", button.index()));
    window.set_mouse_button_released_callback(|button| log::debug!("Mouse button {} released", button.index()));
    window.set_resize_callback(|width, height| log::info!("Resized to {}x{}", width, height));

    while !window.should_close() && !quit.get() {
        window.update();
    }

    log::info!("Sandbox finished");
}
