//! Hash-based instance sets.

use std::collections::HashMap;

use crate::schema::SchemaResult;

use super::hash::HashKey;
use super::instance::Instance;

/// A set of instances keyed by their hash keys.
///
/// Insertion fails exactly when the instance cannot produce a hash key.
/// Equal instances collapse to one member.
#[derive(Debug, Clone, Default)]
pub struct InstanceSet {
    members: HashMap<HashKey, Instance>,
}

impl InstanceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from instances, failing on the first unhashable one.
    pub fn from_instances<'a, I>(instances: I) -> SchemaResult<Self>
    where
        I: IntoIterator<Item = &'a Instance>,
    {
        let mut set = Self::new();
        for instance in instances {
            set.insert(instance)?;
        }
        Ok(set)
    }

    /// Inserts a copy of the instance. Returns `true` if it was not present.
    pub fn insert(&mut self, instance: &Instance) -> SchemaResult<bool> {
        let key = instance.hash_key()?;
        if self.members.contains_key(&key) {
            return Ok(false);
        }
        self.members.insert(key, instance.clone());
        Ok(true)
    }

    pub fn contains(&self, instance: &Instance) -> SchemaResult<bool> {
        Ok(self.members.contains_key(&instance.hash_key()?))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instance> {
        self.members.values()
    }
}
