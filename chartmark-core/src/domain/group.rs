//! Named phase buckets.

use serde::{Deserialize, Serialize};

use super::signal::SignalId;

/// A named phase bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    /// Narrative from the latest `PHASE_DESCRIPTION:` line; empty until set.
    pub description: String,
    /// Member signal ids in order of appearance.
    pub signals: Vec<SignalId>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            signals: Vec::new(),
        }
    }
}

/// Group mapping keyed by name.
///
/// Iteration follows first-declaration order. Declaring a name that already
/// exists replaces the entry in place: the description and member list are
/// reset but the position is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupTable {
    groups: Vec<Group>,
}

impl GroupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fresh, empty group. Returns `true` if an existing group of the
    /// same name was reset.
    pub fn declare(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(idx) => {
                self.groups[idx] = Group::new(name);
                true
            }
            None => {
                self.groups.push(Group::new(name));
                false
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Drop `id` from whichever group lists it. Returns the group name.
    pub fn detach(&mut self, id: SignalId) -> Option<&str> {
        let group = self.groups.iter_mut().find(|g| g.signals.contains(&id))?;
        group.signals.retain(|s| *s != id);
        Some(group.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.name == name)
    }
}

impl<'a> IntoIterator for &'a GroupTable {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
