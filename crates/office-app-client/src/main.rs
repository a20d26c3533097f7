#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser;
    let args = office_app_client::cli::Cli::parse();

    if let Err(e) = office_app_client::tracing::init(&args) {
        eprintln!("Failed to start tracing: {e}");
    }

    let startup = office_app_client::StartupConfig::from_cli(&args);

    let handle = office_app_client::background_worker::start();
    let _enter = handle.enter(); // This Guard must be held to call `tokio::spawn` anywhere in the program

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "OfficeHub",
        native_options,
        Box::new(move |cc| Ok(Box::new(office_app_client::OfficeApp::new(cc, startup)))),
    )
}

// When compiling to web using trunk
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(office_app_client::wasm_log_level()).ok();

    let web_options = eframe::WebOptions::default();
    let startup = office_app_client::StartupConfig::from_browser();

    wasm_bindgen_futures::spawn_local(async move {
        let document = web_sys::window()
            .expect("No window found")
            .document()
            .expect("No document found (No DOM)");

        let canvas = document
            .get_element_by_id("the_canvas_id")
            .expect("Failed to find the_canvas_id")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("the_canvas_id was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(office_app_client::OfficeApp::new(cc, startup)))),
            )
            .await;

        // Remove the loading text and spinner:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p> The app has crashed. See the developer console for details. </p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}
