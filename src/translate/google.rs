use std::{
    thread,
    time::{Duration, Instant},
};

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::debug;

use super::Translator;
use crate::localization::{Locale, SourceLocale};

/// Public web endpoint of Google Translate.
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

const USER_AGENT: &str = concat!("pgmt/", env!("CARGO_PKG_VERSION"));

/// Client for the Google Translate web endpoint.
///
/// Requests are spaced by at least `delay` to stay under the service's
/// rate limit.
pub struct GoogleTranslator {
    agent: ureq::Agent,
    endpoint: String,
    delay: Duration,
    last_request: Option<Instant>,
}

impl GoogleTranslator {
    pub fn new(endpoint: &str, delay: Duration, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build();

        Self {
            agent,
            endpoint: endpoint.to_string(),
            delay,
            last_request: None,
        }
    }

    fn throttle(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.delay {
                thread::sleep(self.delay - elapsed);
            }
        }
        self.last_request = Some(Instant::now());
    }
}

impl Translator for GoogleTranslator {
    fn name(&self) -> &'static str {
        "google"
    }

    fn translate(&mut self, text: &str, source: &SourceLocale, target: &Locale) -> Result<String> {
        self.throttle();
        debug!(sl = source.service_code(), tl = target.iso(), "requesting translation");

        let response: Value = self
            .agent
            .get(&self.endpoint)
            .query("client", "gtx")
            .query("sl", source.service_code())
            .query("tl", target.iso())
            .query("dt", "t")
            .query("q", text)
            .call()
            .with_context(|| format!("Translation request to {} failed", self.endpoint))?
            .into_json()
            .context("Translation service returned malformed JSON")?;

        parse_response(&response)
    }
}

/// Join the translated segments of a response.
///
/// The body is a nested array whose first element lists the segments,
/// each segment starting with its translated text:
/// `[[["Ciao. ","Hello. ",...],["Come stai?","How are you?",...]],null,"en",...]`
pub fn parse_response(response: &Value) -> Result<String> {
    let Some(segments) = response.get(0).and_then(Value::as_array) else {
        bail!("Unexpected translation response: {}", response);
    };

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        bail!("Translation response contained no text");
    }
    Ok(translated)
}
