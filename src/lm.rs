//! Chat-completions invocation and loose JSON extraction.
//!
//! The endpoint is asked for a single JSON object, but responses are treated
//! as free text: extraction scans for a fenced block, then a braced substring,
//! then tries the raw text. This is a documented best-effort heuristic; the
//! caller converges on the offline template when it fails.
use crate::article::Article;
use anyhow::{anyhow, Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;
use std::sync::OnceLock;
use std::thread;
use std::time::Duration;

pub const MODEL: &str = "gpt-4o-mini";
const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const ATTEMPTS: u32 = 3;
const RETRY_PAUSE: Duration = Duration::from_secs(2);

const SYSTEM_PROMPT: &str =
    "Du bist ein deutscher Tech-Redakteur. Schreibe praezise, nuetzlich und sachlich.";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

/// The configured API credential, if any. Blank values count as absent.
pub fn api_key_from_env() -> Option<String> {
    env::var("OPENAI_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty())
}

/// Request an article for `topic`, retrying a fixed number of times.
///
/// Transport errors and extraction failures are treated alike; the error
/// returned after the final attempt carries the last failure.
pub fn request_article(topic: &str, api_key: &str) -> Result<Article> {
    let mut last_error = anyhow!("no attempt made");
    for attempt in 1..=ATTEMPTS {
        if attempt > 1 {
            thread::sleep(RETRY_PAUSE);
        }
        match request_article_once(topic, api_key) {
            Ok(article) => return Ok(article),
            Err(err) => {
                tracing::warn!(attempt, error = %err, "article generation attempt failed");
                last_error = err;
            }
        }
    }
    Err(last_error.context(format!("no usable article after {ATTEMPTS} attempts")))
}

fn request_article_once(topic: &str, api_key: &str) -> Result<Article> {
    let user_prompt = format!(
        "Gib mir ein JSON-Objekt mit: title, meta, tags[], html (<article>…</article>).\nThema: {topic}"
    );
    let request = ChatRequest {
        model: MODEL,
        messages: [
            ChatMessage {
                role: "system",
                content: SYSTEM_PROMPT,
            },
            ChatMessage {
                role: "user",
                content: &user_prompt,
            },
        ],
        temperature: 0.6,
        response_format: ResponseFormat {
            kind: "json_object",
        },
    };

    let mut response = ureq::post(CHAT_COMPLETIONS_URL)
        .header("Authorization", format!("Bearer {api_key}"))
        .send_json(request)
        .context("send chat completion request")?;
    let parsed: ChatResponse = response
        .body_mut()
        .read_json()
        .context("read chat completion response")?;

    let content = parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .unwrap_or_default();
    let value = extract_json_loose(&content)
        .ok_or_else(|| anyhow!("response contains no parseable JSON"))?;
    Article::from_value(&value, topic)
        .ok_or_else(|| anyhow!("response JSON is not an object with an html field"))
}

/// Best-effort JSON extraction from free text.
///
/// Tries, in order: a fenced ```json block, the substring between the first
/// `{` and the last `}`, and the raw trimmed text.
pub fn extract_json_loose(raw: &str) -> Option<Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(value) = fenced_json(trimmed) {
        return Some(value);
    }
    if let Some(value) = braced_json(trimmed) {
        return Some(value);
    }
    serde_json::from_str(trimmed).ok()
}

fn fenced_json(raw: &str) -> Option<Value> {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    let fence = FENCE
        .get_or_init(|| Regex::new(r"(?si)```json\s*(\{.*?\})\s*```").expect("valid fence regex"));
    let captured = fence.captures(raw)?.get(1)?.as_str();
    serde_json::from_str(captured).ok()
}

fn braced_json(raw: &str) -> Option<Value> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&raw[start..=end]).ok()
}
