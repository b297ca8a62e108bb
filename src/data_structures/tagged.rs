//! Ordered tag-keyed storage shared by the texture registry and the material catalog.
//!
//! Entries keep their insertion order (which drives unit assignment and logging),
//! while lookups go through an explicit tag → index map instead of a linear scan.
//! What happens when a tag is inserted twice is decided by [`DuplicatePolicy`].

use std::collections::HashMap;

use thiserror::Error;

/// How a store reacts to a tag that is already present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Refuse the insert; the existing entry stays untouched.
    #[default]
    Reject,
    /// Swap the value of the existing entry in place, keeping its position.
    Replace,
    /// Append anyway. Lookups keep resolving to the first entry with the tag.
    Shadow,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("tag '{0}' is already registered")]
pub struct DuplicateTag(pub String);

/// What an insert did to the store.
#[derive(Debug, PartialEq, Eq)]
pub enum Inserted<T> {
    /// A new entry was appended at this position.
    Appended(usize),
    /// The entry at this position got a new value; the old one is handed back.
    Replaced(usize, T),
}

#[derive(Clone, Debug)]
pub struct TaggedStore<T> {
    entries: Vec<(String, T)>,
    index: HashMap<String, usize>,
    policy: DuplicatePolicy,
}

impl<T> TaggedStore<T> {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Check whether `tag` could be inserted without touching the store.
    pub fn admits(&self, tag: &str) -> Result<(), DuplicateTag> {
        match (self.policy, self.index.contains_key(tag)) {
            (DuplicatePolicy::Reject, true) => Err(DuplicateTag(tag.to_string())),
            _ => Ok(()),
        }
    }

    pub fn insert(&mut self, tag: &str, value: T) -> Result<Inserted<T>, DuplicateTag> {
        self.admits(tag)?;
        match (self.policy, self.index.get(tag).copied()) {
            (DuplicatePolicy::Replace, Some(pos)) => {
                let old = std::mem::replace(&mut self.entries[pos].1, value);
                Ok(Inserted::Replaced(pos, old))
            }
            (_, existing) => {
                let pos = self.entries.len();
                self.entries.push((tag.to_string(), value));
                // shadowed duplicates are reachable by position only
                if existing.is_none() {
                    self.index.insert(tag.to_string(), pos);
                }
                Ok(Inserted::Appended(pos))
            }
        }
    }

    pub fn get(&self, tag: &str) -> Option<&T> {
        self.index.get(tag).map(|&pos| &self.entries[pos].1)
    }

    pub fn position(&self, tag: &str) -> Option<usize> {
        self.index.get(tag).copied()
    }

    /// Remove the entry `tag` resolves to. A shadowed duplicate, if any, takes its place in lookups.
    pub fn remove(&mut self, tag: &str) -> Option<T> {
        let pos = self.index.remove(tag)?;
        let (_, value) = self.entries.remove(pos);
        self.reindex();
        Some(value)
    }

    pub fn drain(&mut self) -> impl Iterator<Item = (String, T)> + '_ {
        self.index.clear();
        self.entries.drain(..)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(tag, value)| (tag.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (pos, (tag, _)) in self.entries.iter().enumerate() {
            self.index.entry(tag.clone()).or_insert(pos);
        }
    }
}

impl<T> Default for TaggedStore<T> {
    fn default() -> Self {
        Self::new(DuplicatePolicy::default())
    }
}
