//! Runtime the HTTP requests are driven on when running natively

/// Starts the runtime on its own thread and returns a handle to it
///
/// The handle must be entered for requests to be able to spawn tasks
#[cfg(not(target_arch = "wasm32"))]
pub fn start() -> tokio::runtime::Handle {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Unable to create Runtime");
    let handle = rt.handle().clone();
    std::thread::spawn(move || {
        tracing::info!("Background worker started");
        // Keeps the runtime alive for as long as the process runs
        rt.block_on(std::future::pending::<()>())
    });
    handle
}
