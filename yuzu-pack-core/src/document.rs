//! Document patcher for `sounds.json`
//!
//! Paths are dot-delimited key chains (`"yuzu_title_senren.replace"`).
//! Missing intermediate maps are created on the way down, so patching never
//! fails on an absent node. Key order of the source document is preserved
//! (`serde_json` is built with `preserve_order`).

use serde_json::{Map, Value};

use crate::error::PackResult;

/// Set the value at `path`, overwriting whatever is there.
pub fn set_path(doc: &mut Value, path: &str, value: impl Into<Value>) {
    *slot(doc, path) = value.into();
}

/// Append `value` to the array at `path`.
///
/// An absent (or non-array) final node becomes a one-element array.
pub fn append_path(doc: &mut Value, path: &str, value: impl Into<Value>) {
    let node = slot(doc, path);
    match node {
        Value::Array(items) => items.push(value.into()),
        other => *other = Value::Array(vec![value.into()]),
    }
}

/// Walk `path`, creating maps as needed, and return the final slot.
///
/// A non-map intermediate node is reset to `null` first; indexing `null` by
/// key turns it into a map holding that key.
fn slot<'a>(root: &'a mut Value, path: &str) -> &'a mut Value {
    path.split('.').fold(root, |node, segment| {
        if !node.is_object() {
            *node = Value::Null;
        }
        &mut node[segment]
    })
}

/// Sound-definition document: event name → `{ replace, sounds: [...] }`.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundDocument {
    root: Value,
}

impl SoundDocument {
    /// An empty document (`{}`).
    pub fn empty() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }

    /// Parse a document from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> PackResult<Self> {
        Ok(Self {
            root: serde_json::from_slice(bytes)?,
        })
    }

    /// Force `replace: true` on every listed event.
    pub fn force_replace<'a>(&mut self, events: impl IntoIterator<Item = &'a str>) {
        for event in events {
            set_path(&mut self.root, &format!("{event}.replace"), true);
        }
    }

    /// Append a sound reference to an event's `sounds` array.
    pub fn append_sound(&mut self, event: &str, reference: &str) {
        append_path(&mut self.root, &format!("{event}.sounds"), reference);
    }

    /// The `replace` flag of an event, if present.
    pub fn replace_flag(&self, event: &str) -> Option<bool> {
        self.root.get(event)?.get("replace")?.as_bool()
    }

    /// String references in an event's `sounds` array, in order.
    ///
    /// Object-form entries (`{"name": ...}`) are reported by their name.
    pub fn sounds(&self, event: &str) -> Vec<&str> {
        self.root
            .get(event)
            .and_then(|entry| entry.get("sounds"))
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.as_str().or_else(|| item.get("name")?.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_vec(&self) -> PackResult<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(&self.root)?)
    }
}

impl Default for SoundDocument {
    fn default() -> Self {
        Self::empty()
    }
}
