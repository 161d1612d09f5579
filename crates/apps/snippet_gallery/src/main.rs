//! Binary entrypoint for the browser-hosted snippet gallery.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    snippet_gallery::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    match snippet_gallery::builtin_catalog() {
        Ok(catalog) => eprintln!(
            "{} renders {} component demos in the browser only; build `snippet_gallery_app` for wasm32 with the `csr` feature.",
            catalog.title,
            catalog.entries.len()
        ),
        Err(err) => eprintln!("snippet gallery catalog is invalid: {err}"),
    }
}
