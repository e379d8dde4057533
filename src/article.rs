//! Article records: coercion from loosely-shaped LM output plus the
//! deterministic offline template.
use crate::util::escape_markup;
use serde_json::Value;

/// Uniform article record produced by either source variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub meta: String,
    pub tags: Vec<String>,
    pub html: String,
}

impl Article {
    /// Coerce a parsed LM object into an article.
    ///
    /// Returns `None` unless `value` is an object carrying an `html` key;
    /// every other field tolerates missing or mistyped data. `title` falls
    /// back to the topic the article was requested for.
    pub fn from_value(value: &Value, topic: &str) -> Option<Self> {
        let object = value.as_object()?;
        let html_value = object.get("html")?;

        let title = match object.get("title") {
            Some(Value::String(title)) if !title.trim().is_empty() => title.trim().to_string(),
            _ => topic.to_string(),
        };

        let meta = object
            .get("meta")
            .map(value_to_string)
            .unwrap_or_default()
            .trim()
            .to_string();

        let tags = match object.get("tags") {
            Some(Value::Array(values)) => values.iter().map(value_to_string).collect(),
            Some(Value::Null) | None => Vec::new(),
            Some(scalar) => vec![value_to_string(scalar)],
        };

        let html = match html_value {
            Value::String(html) => html.clone(),
            Value::Object(inner) => match inner.get("html").and_then(Value::as_str) {
                Some(html) => html.to_string(),
                None => value_to_string(html_value),
            },
            other => value_to_string(other),
        };

        Some(Self {
            title,
            meta,
            tags,
            html,
        })
    }

    /// Deterministic template article; the fallback for every failure path.
    pub fn offline(topic: &str) -> Self {
        let meta = format!("Schneller Leitfaden: {topic}");
        let safe_topic = escape_markup(topic);
        let html = format!(
            "<h1>{safe_topic}</h1>\n\
             <p class='lead'>Schneller Leitfaden: {safe_topic}</p>\n\
             <h2>Einstieg</h2>\n\
             <p>Dieser Beitrag fasst die wichtigsten Punkte zum Thema {safe_topic} zusammen.</p>\n\
             <h2>Worauf es ankommt</h2>\n\
             <ul>\n\
             <li>Grundlagen klaeren und Anforderungen notieren</li>\n\
             <li>Anbieter und Tarife nuechtern vergleichen</li>\n\
             <li>Einrichtung in kleinen Schritten testen</li>\n\
             <li>Backups und Monitoring von Anfang an einplanen</li>\n\
             </ul>\n\
             <h2>Fazit</h2>\n\
             <p>{safe_topic} muss nicht kompliziert sein: eine kurze Checkliste und \
             regelmaessige Kontrolle halten den Aufwand ueberschaubar.</p>"
        );
        Self {
            title: topic.to_string(),
            meta,
            tags: vec!["Hosting".to_string(), "Cloud".to_string()],
            html,
        }
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
