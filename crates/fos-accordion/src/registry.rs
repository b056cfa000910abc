//! Config Registry
//!
//! Maps instance identifiers to the configuration their container was built
//! with. The builder registers, the controller looks entries up on every
//! delegated event, and `destroy` removes them.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::AccordionConfig;

/// Per-container instance identifier.
///
/// Rendered as `z<n>`; the leading letter keeps generated element ids valid
/// CSS selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u32);

impl InstanceId {
    /// Parse the value of an instance-tag attribute
    pub fn parse(tag: &str) -> Option<Self> {
        let digits = tag.strip_prefix('z')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok().map(Self)
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "z{}", self.0)
    }
}

/// Instance id -> configuration store
#[derive(Debug, Default)]
pub struct ConfigRegistry {
    entries: HashMap<InstanceId, Arc<AccordionConfig>>,
    next_id: u32,
}

impl ConfigRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out a fresh identifier; never reused, even after removal
    pub fn next_id(&mut self) -> InstanceId {
        self.next_id += 1;
        InstanceId(self.next_id)
    }

    /// Store `config` under a fresh identifier
    pub fn register(&mut self, config: Arc<AccordionConfig>) -> InstanceId {
        let id = self.next_id();
        self.set(id, config);
        id
    }

    /// Store `config` under `id`, returning any previous entry
    pub fn set(&mut self, id: InstanceId, config: Arc<AccordionConfig>) -> Option<Arc<AccordionConfig>> {
        tracing::debug!("registering accordion instance {}", id);
        self.entries.insert(id, config)
    }

    pub fn get(&self, id: InstanceId) -> Option<&Arc<AccordionConfig>> {
        self.entries.get(&id)
    }

    /// Resolve an instance-tag attribute value
    pub fn get_by_tag(&self, tag: &str) -> Option<(InstanceId, &Arc<AccordionConfig>)> {
        let id = InstanceId::parse(tag)?;
        self.get(id).map(|config| (id, config))
    }

    /// Delete an entry
    pub fn remove(&mut self, id: InstanceId) -> Option<Arc<AccordionConfig>> {
        let removed = self.entries.remove(&id);
        if removed.is_some() {
            tracing::debug!("removed accordion instance {}", id);
        }
        removed
    }

    pub fn contains(&self, id: InstanceId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
