use std::collections::BTreeMap;
use std::sync::Arc;

use crate::pack::LanguagePack;

/// Registered language packs keyed by ISO 639-1 code
#[derive(Debug, Clone, Default)]
pub struct PackRegistry {
    packs: BTreeMap<String, Arc<LanguagePack>>,
}

impl PackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pack, replacing any previous pack for the same code
    pub fn register(&mut self, pack: LanguagePack) -> Arc<LanguagePack> {
        let pack = Arc::new(pack);
        if let Some(old) = self.packs.insert(pack.code().to_string(), pack.clone()) {
            tracing::warn!(
                "Replacing language pack {} v{} with v{}",
                old.code(),
                old.version(),
                pack.version()
            );
        }
        pack
    }

    pub fn get(&self, code: &str) -> Option<Arc<LanguagePack>> {
        self.packs.get(&code.to_lowercase()).cloned()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.packs.keys().map(String::as_str)
    }

    pub fn packs(&self) -> impl Iterator<Item = &Arc<LanguagePack>> {
        self.packs.values()
    }

    pub fn len(&self) -> usize {
        self.packs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_pack;

    #[test]
    fn lookup_is_case_insensitive() {
        let mut registry = PackRegistry::new();
        registry.register(test_pack::pack());
        assert!(registry.get("XX").is_some());
        assert!(registry.get("fr").is_none());
        assert_eq!(registry.codes().collect::<Vec<_>>(), vec!["xx"]);
    }

    #[test]
    fn re_registering_replaces() {
        let mut registry = PackRegistry::new();
        registry.register(test_pack::pack());
        registry.register(test_pack::pack());
        assert_eq!(registry.len(), 1);
    }
}
