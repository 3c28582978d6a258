//! Localized message loading.
//!
//! Messages live in JSON resources named `messages`, `messages-LL`, and
//! `messages-LL-CC` (language, language-country). Loading layers the three
//! from least to most specific, each overwriting by key. Lookup of a missing
//! key degrades to a marker string instead of failing — the consumers are UI
//! layers where an error would be worse than an ugly label.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Where message resources are read from.
pub trait MessageReader {
    /// Raw JSON text of the named resource, or None if it does not exist.
    fn read(&self, name: &str) -> Option<String>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalizedMessage {
    pub key: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageList {
    #[serde(default)]
    pub messages: Vec<LocalizedMessage>,
}

/// Localized message lookup for one language/country pair.
pub struct Loc {
    language: String,
    country: String,
    messages: HashMap<String, String>,
}

impl Loc {
    pub fn new(language: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            country: country.into(),
            messages: HashMap::new(),
        }
    }

    /// Load the message layers for the configured language and country.
    /// Clears any previously loaded messages.
    pub fn load(&mut self, reader: &dyn MessageReader) {
        self.messages.clear();
        let base = Self::read_list(reader, "messages");
        self.merge(base);
        let language = Self::read_list(reader, &format!("messages-{}", self.language));
        self.merge(language);
        let regional = Self::read_list(
            reader,
            &format!("messages-{}-{}", self.language, self.country),
        );
        self.merge(regional);
    }

    fn read_list(reader: &dyn MessageReader, name: &str) -> MessageList {
        let Some(json) = reader.read(name) else {
            return MessageList::default();
        };
        match serde_json::from_str(&json) {
            Ok(list) => list,
            Err(e) => {
                warn!("cannot parse message resource '{}': {}", name, e);
                MessageList::default()
            }
        }
    }

    fn merge(&mut self, list: MessageList) {
        for entry in list.messages {
            self.messages.insert(entry.key, entry.message);
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The message for `key` with positional arguments substituted, or the
    /// `??[[key]]??` marker when no layer defines the key.
    pub fn message(&self, key: &str, args: &[&str]) -> String {
        let Some(template) = self.messages.get(key) else {
            return format!("??[[{}]]??", key);
        };
        if args.is_empty() {
            return template.clone();
        }
        format_positional(template, args)
    }
}

/// Substitute `{0}`, `{1}`, ... with the given arguments.
fn format_positional(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (index, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", index), arg);
    }
    result
}
