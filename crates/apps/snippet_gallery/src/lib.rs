//! Browser gallery that renders every `snippet_ui` component from a JSON catalog.

mod catalog;
mod gallery;

pub use catalog::{
    builtin_catalog, parse_catalog, Catalog, CatalogEntry, CatalogError, ComponentKind,
};
pub use gallery::{snippet_markup, Gallery};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <Gallery /> })
}
