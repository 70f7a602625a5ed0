use std::collections::HashMap;

use crate::stage::{Stage, StageBuilder};

/// Name-keyed map of stage builders.
#[derive(Default)]
pub struct StageRegistry {
    builders: HashMap<String, Box<dyn StageBuilder>>,
}

impl StageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `builder` under `name`. An existing entry is replaced.
    pub fn register(&mut self, name: impl Into<String>, builder: impl StageBuilder + 'static) {
        let name = name.into();
        if self.builders.insert(name.clone(), Box::new(builder)).is_some() {
            log::debug!("stage builder `{name}` replaced");
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.builders.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.builders.keys().map(String::as_str)
    }

    /// Builds a fresh stage from the builder registered under `name`.
    pub fn build(&self, name: &str) -> Option<Box<dyn Stage>> {
        self.builders.get(name).map(|builder| builder.build())
    }
}
