use skinreview::app::App;

// Pure client-side app, served with `trunk serve --open`.
fn main() {
    console_error_panic_hook::set_once();

    leptos::mount_to_body(App);
}
