//! Prophecy generation: prompt construction, quote parsing and fallback,
//! then composition of the wallpaper document.

use rand::RngExt;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::compose::compose;
use crate::constants::{
    CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_MODE, DEFAULT_SOURCE, FALLBACK_AUTHOR, FALLBACK_QUOTE,
};
use crate::gemini::GeminiClient;
use crate::theme::{Style, Theme};

/// A quote and its attribution, produced once per generation request.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct QuoteRecord {
    /// The quote text.
    pub quote: String,
    /// The specific reference, eg "Isaiah 40:1".
    pub author: String,
}

impl QuoteRecord {
    /// The fixed pair substituted when the text-generation call fails.
    pub fn fallback() -> QuoteRecord {
        QuoteRecord {
            quote: FALLBACK_QUOTE.to_string(),
            author: FALLBACK_AUTHOR.to_string(),
        }
    }
}

/// Parameters accepted for one generation request. Only the credential is
/// required; everything else has a documented default.
#[derive(Clone, Debug)]
pub struct ProphecyRequest {
    /// Caller-supplied Gemini credential. Never logged or persisted.
    pub api_key: String,
    /// Wallpaper style identifier, lenient.
    pub style: String,
    /// Source text, eg "Bible". Defaults when empty.
    pub source: String,
    /// Thematic mode, eg "Prophecy". Defaults when empty.
    pub mode: String,
}

/// The generated wallpaper document plus the quote it contains.
#[derive(Clone, Debug)]
pub struct Prophecy {
    /// Complete SVG markup.
    pub svg: String,
    /// The quote text, for preview display.
    pub quote: String,
}

fn non_empty_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}

/// Builds the curator prompt. The random seed varies repeated requests on
/// top of the high sampling temperature.
fn build_prompt(style: Style, source: &str, mode: &str, seed: u32) -> String {
    format!(
        r#"Act as a spiritual scholar and curator.
Generate a UNIQUE, powerful quote from the **{source}**.

Theme/Mode: **{mode}**.
(Ensure the quote specifically relates to {mode}).

Style Context: {hint}

Random Seed: {seed}
Maximum length: 30 words.

Return a JSON object with:
- "quote": The text of the verse/sloka.
- "author": The specific reference (e.g., "Isaiah 40:1", "Surah Al-Sharh 94:5", "Bhagavad Gita 2.47").

Example JSON: {{ "quote": "Your quote text here.", "author": "Book Reference 1:1" }}
DO NOT return markdown code blocks, just the raw JSON string."#,
        hint = style.prompt_hint(),
    )
}

/// Parses the model reply into a quote record. Tolerates fenced or
/// non-JSON replies: anything that fails to parse is treated as the quote
/// itself, attributed to the requested source.
fn parse_reply(reply: &str, source: &str) -> QuoteRecord {
    let cleaned = reply.trim().replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();
    match serde_json::from_str::<QuoteRecord>(cleaned) {
        Ok(record) => record,
        Err(err) => {
            debug!("Unstructured quote reply ({}), using raw text", err);
            QuoteRecord {
                quote: cleaned.to_string(),
                author: source.to_string(),
            }
        }
    }
}

/// Generates a prophecy wallpaper. Infallible by design: the single
/// text-generation attempt is absorbed into the fixed fallback pair on any
/// failure, and the composer has no failure path.
pub async fn generate(client: &GeminiClient, model: &str, request: &ProphecyRequest) -> Prophecy {
    let style = Style::parse(&request.style);
    let source = non_empty_or(&request.source, DEFAULT_SOURCE);
    let mode = non_empty_or(&request.mode, DEFAULT_MODE);

    let seed = rand::rng().random_range(0..1_000_000);
    let prompt = build_prompt(style, source, mode, seed);

    let record = match client.generate_text(&request.api_key, model, &prompt).await {
        Ok(reply) => parse_reply(&reply, source),
        Err(err) => {
            warn!("Quote generation failed, using fallback: {:#}", err);
            QuoteRecord::fallback()
        }
    };

    let theme = Theme::for_style(style);
    let svg = compose(theme, &record.quote, &record.author, CANVAS_WIDTH, CANVAS_HEIGHT);

    Prophecy {
        svg,
        quote: record.quote,
    }
}
