//! WebAssembly bindings so a browser chat page can answer locally.

use wasm_bindgen::prelude::*;

/// Returns the version of the quokka-wasm package.
#[wasm_bindgen]
pub fn version() -> String {
    quokka_core::version().to_string()
}

/// Answers a question with the same rules as `POST /api/chat`.
#[wasm_bindgen]
pub fn answer(question: &str) -> String {
    quokka_core::resolve(question)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_matches_core_resolver() {
        assert_eq!(answer("hello"), quokka_core::resolve("hello"));
    }
}
