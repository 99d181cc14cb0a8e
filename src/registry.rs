//! Endpoint registry.
//!
//! Ordered mapping from group name to the endpoint URLs probed for that
//! group. Built once at startup and never mutated.

use std::collections::HashMap;

use crate::config::GroupConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub endpoints: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    groups: Vec<Group>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Build a registry from configured groups. A repeated name keeps its
    /// first definition.
    pub fn from_config(groups: &[GroupConfig]) -> Self {
        Self::from_groups(
            groups
                .iter()
                .map(|g| (g.name.clone(), g.endpoints.clone())),
        )
    }

    pub fn from_groups<I, N, E>(groups: I) -> Self
    where
        I: IntoIterator<Item = (N, E)>,
        N: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        let mut registry = Self::default();
        for (name, endpoints) in groups {
            let name = name.into();
            if registry.index.contains_key(&name) {
                continue;
            }
            registry.index.insert(name.clone(), registry.groups.len());
            registry.groups.push(Group {
                name,
                endpoints: endpoints.into_iter().map(Into::into).collect(),
            });
        }
        registry
    }

    /// All groups in definition order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn get(&self, name: &str) -> Option<&Group> {
        self.index.get(name).map(|&i| &self.groups[i])
    }

    /// Resolve requested names in request order. Unknown and repeated names
    /// are skipped.
    pub fn select<'a, S: AsRef<str>>(&'a self, names: &[S]) -> Vec<&'a Group> {
        let mut picked: Vec<&Group> = Vec::with_capacity(names.len());
        for name in names {
            if let Some(group) = self.get(name.as_ref()) {
                if !picked.iter().any(|g| g.name == group.name) {
                    picked.push(group);
                }
            }
        }
        picked
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
