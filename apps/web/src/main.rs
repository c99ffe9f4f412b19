// Browser entry point, built with `dx serve` / `dx build` for wasm32.
//
// Native builds only carry the views and routes for tests, so `main` is a no-op there.

#[cfg(target_arch = "wasm32")]
fn main() {
    shelf_web::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {}
