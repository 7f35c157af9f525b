use std::collections::BTreeMap;

use masthead_protocol::{StyleCommand, StyleKey, StyleValue};

/// The shared, named style-variable store read by the paint pipeline.
///
/// The engine is the only writer of the keys in [`StyleKey`]; readers must
/// tolerate any key being absent.
pub trait StyleRegistry {
    fn set(&mut self, key: StyleKey, value: StyleValue);
    fn remove(&mut self, key: StyleKey);
}

impl<R: StyleRegistry + ?Sized> StyleRegistry for &mut R {
    fn set(&mut self, key: StyleKey, value: StyleValue) {
        (**self).set(key, value);
    }

    fn remove(&mut self, key: StyleKey) {
        (**self).remove(key);
    }
}

/// In-process registry: the current value of every key plus a journal of
/// every command applied, in order.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    values: BTreeMap<StyleKey, StyleValue>,
    journal: Vec<StyleCommand>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: StyleKey) -> Option<StyleValue> {
        self.values.get(&key).copied()
    }

    /// CSS text of `key`, as a stylesheet would read it.
    pub fn css(&self, key: StyleKey) -> Option<String> {
        self.get(key).map(|v| v.to_string())
    }

    pub fn contains(&self, key: StyleKey) -> bool {
        self.values.contains_key(&key)
    }

    /// Published values, ordered by key.
    pub fn values(&self) -> &BTreeMap<StyleKey, StyleValue> {
        &self.values
    }

    /// Every command applied so far.
    pub fn journal(&self) -> &[StyleCommand] {
        &self.journal
    }

    pub fn clear_journal(&mut self) {
        self.journal.clear();
    }

    /// Whether any command has touched `key` since the journal was last
    /// cleared.
    pub fn touched(&self, key: StyleKey) -> bool {
        self.journal.iter().any(|c| c.key() == key)
    }
}

impl StyleRegistry for MemoryRegistry {
    fn set(&mut self, key: StyleKey, value: StyleValue) {
        self.values.insert(key, value);
        self.journal.push(StyleCommand::Set { key, value });
    }

    fn remove(&mut self, key: StyleKey) {
        self.values.remove(&key);
        self.journal.push(StyleCommand::Remove { key });
    }
}
