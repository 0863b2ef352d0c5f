#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

// --- WASM SPECIFIC CODE ---
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// This keeps the WASM memory allocator from being stripped
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn _keep_alive() {}

// Even though we use 'start', the compiler still wants a main() function
// because this file is compiled as a binary.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    use std::sync::Arc;

    use brent_scope::data::DemoSource;
    use brent_scope::run_app;

    // A. Init Logging
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🚀 Brent dashboard starting in WASM mode...");

    // B. Setup for Web
    let web_options = eframe::WebOptions::default();

    // C. The browser build has no backend to call; it serves the embedded
    // demo dataset instead.
    let source = Arc::new(DemoSource);

    let window = web_sys::window().expect("no global `window` exists");
    let document = window.document().expect("should have a document on window");

    let canvas = document
        .get_element_by_id("the_canvas_id")
        .expect("Failed to find canvas with id 'the_canvas_id'")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id was not a valid HtmlCanvasElement")?;

    eframe::WebRunner::new()
        .start(
            canvas,
            web_options,
            Box::new(move |cc| Ok(run_app(cc, source))),
        )
        .await
}

// --- NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use std::path::PathBuf;
    use std::sync::Arc;

    use clap::Parser;
    use eframe::NativeOptions;

    use brent_scope::config::APP_STATE_PATH;
    use brent_scope::data::{ApiSource, DashboardSource, DemoSource};
    use brent_scope::ui::config::UI_TEXT;
    use brent_scope::{Cli, run_app};

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Pick the data source
    let source: Arc<dyn DashboardSource> = if args.demo {
        Arc::new(DemoSource)
    } else {
        Arc::new(ApiSource::new(&args.api_base))
    };

    // D. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    eframe::run_native(
        &UI_TEXT.app_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, source))),
    )
}
