//! CSR entry point: installs panic/log hooks and mounts the root `App`.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        leptos::mount::mount_to_body(portfolio_client::app::App);
    }
}
