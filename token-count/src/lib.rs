//! # token-count
//!
//! Estimates how many tokens a prompt occupies under a given model's
//! tokenizer. Unknown model names fall back to `cl100k_base` (the GPT-3.5/4
//! era encoding) instead of failing: an approximate count is more useful to
//! callers than an error.
//!
//! Independent of the chat flow: no network access and no shared state.
//! Nothing is cached; the tokenizer is rebuilt per call.

use tiktoken_rs::{cl100k_base, get_bpe_from_model, CoreBPE};

/// Resolves the BPE tokenizer for `model`, falling back to `cl100k_base`
/// when tiktoken does not recognize the model name.
///
/// The fallback is deliberate: callers should not need to know whether
/// their model id maps to a bundled encoding.
pub fn bpe_for_model(model: &str) -> CoreBPE {
    match get_bpe_from_model(model) {
        Ok(bpe) => bpe,
        // cl100k_base parses tables embedded in the binary; it cannot fail
        // for reasons that depend on the input.
        Err(_) => cl100k_base().expect("embedded cl100k_base encoding failed to load"),
    }
}

/// Returns the number of tokens `prompt` occupies under `model`'s tokenizer.
///
/// Pure function of its inputs: an empty prompt encodes to zero tokens, and
/// an unrecognized model yields the `cl100k_base` count rather than an
/// error. Special tokens are not injected into the encoding.
pub fn estimate_tokens(prompt: &str, model: &str) -> usize {
    let bpe = bpe_for_model(model);
    bpe.encode_ordinary(prompt).len()
}
