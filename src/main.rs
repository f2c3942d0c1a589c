use recon_upload::{app, utils::log};

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = app::mount() {
        log::error(&format!("failed to mount: {}", e));
    }
}
