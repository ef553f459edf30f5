use anyhow::{Context, Result};
use thiserror::Error;

use crate::vocab::Vocabulary;
use crate::{Name, Position, Tag};

/// The five rungs of the hierarchy, from fully generic to fully substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Generic,
    Skeleton,
    Core,
    Mask,
    Substituted,
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Substituent code '{0}' is missing from the vocabulary catalog")]
    UnknownSubstituent(Name),
}

/// Renders a tagged ring pattern to its SMARTS string at the given layer.
///
/// # Arguments
///
/// * `pattern` - One position per ring slot, slot 0 being the ring anchor.
/// * `layer` - Which rung of the hierarchy is being rendered.
/// * `vocab` - The token and substituent vocabulary.
///
/// # Returns
///
/// * `Result<String>` - The rendered SMARTS, or an error if a position
///   references a substituent code the catalog does not know.
pub fn render_smarts(pattern: &[Position], layer: Layer, vocab: &Vocabulary) -> Result<String> {
    render_smarts_helper(pattern, layer, vocab)
        .context(format!("Failed to render a {layer:?}-layer pattern"))
}

fn render_smarts_helper(pattern: &[Position], layer: Layer, vocab: &Vocabulary) -> Result<String> {
    // Degenerate input renders to nothing, at every layer.
    if pattern.is_empty() {
        return Ok(String::new());
    }
    // Layer 1 fixes nothing about the ring, so the pattern is ignored.
    if layer == Layer::Generic {
        return Ok(vocab.generic_ring.to_string());
    }

    let mut parts = Vec::with_capacity(pattern.len());
    for (slot, position) in pattern.iter().enumerate() {
        // At layer 2 the anchor slot stays generic no matter which token the
        // pattern nominally carries there.
        let rendered = if slot == 0 && layer == Layer::Skeleton {
            vocab.anchor.text()
        } else {
            render_position(position, vocab)?
        };
        parts.push(rendered);
    }
    parts[0] = add_ring_label(&parts[0]);

    Ok(format!("{}1:{}:1", parts[0], parts[1..].join(":")))
}

/// Renders one position; the tag decides what happens to the token's
/// attachment marker.
fn render_position(position: &Position, vocab: &Vocabulary) -> Result<String> {
    match &position.tag {
        // Unset and still-open positions keep the literal marker.
        Tag::None | Tag::Open => Ok(position.token.text()),
        Tag::Hydrogen => Ok(format!("{}({})", position.token.base, vocab.hydrogen_cap)),
        Tag::Substituent(code) => {
            let sub = vocab
                .substituent(code)
                .ok_or_else(|| RenderError::UnknownSubstituent(code.clone()))?;
            Ok(format!("{}({})", position.token.base, sub))
        }
    }
}

/// Injects the ring-closure map label `:1` into a rendered atom.
/// Idempotent; the label goes before the first `]`, or the whole text is
/// wrapped when there are no brackets (the bare anchor `a`).
fn add_ring_label(text: &str) -> String {
    if text.contains(":1") {
        text.to_string()
    } else if let Some(bracket) = text.find(']') {
        format!("{}:1{}", &text[..bracket], &text[bracket..])
    } else {
        format!("[{text}:1]")
    }
}
