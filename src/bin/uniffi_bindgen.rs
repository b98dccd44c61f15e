//! UniFFI bindgen CLI tool for generating language bindings.
//!
//! Generates Python, Swift, Kotlin, and Ruby bindings for the recipe-finder
//! library so a presentation layer written in those languages can load a
//! dataset and run searches.
//!
//! ## Usage
//!
//! Generate Python bindings:
//! ```bash
//! cargo run --features cli --bin uniffi-bindgen generate --library target/release/librecipe_finder.so --language python --out-dir ./bindings
//! ```
//!
//! Generate Swift bindings:
//! ```bash
//! cargo run --features cli --bin uniffi-bindgen generate --library target/release/librecipe_finder.so --language swift --out-dir ./bindings
//! ```

fn main() {
    uniffi::uniffi_bindgen_main()
}
