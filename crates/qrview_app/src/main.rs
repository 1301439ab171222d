#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod platform;

#[cfg(target_arch = "wasm32")]
fn main() {
    if let Err(err) = platform::web::run_app() {
        qrview_logging::qr_error!("QR preview failed to start: {:?}", err);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("qrview_app runs in the browser; build it for wasm32-unknown-unknown (e.g. `trunk serve`).");
}
