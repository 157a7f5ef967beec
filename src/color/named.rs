//! Named-Color Resolver
//!
//! Maps any hex color to the closest human-friendly name from the embedded
//! reference set. Unlike the palette classifier there is no gating: every
//! well-formed hex gets a name, malformed input gets `"Unknown"`.
//!
//! Resolved names are kept in a bounded cache keyed by normalized hex.
//! Eviction is FIFO by insertion order; a cache hit does not refresh an
//! entry's position. The cache is the only mutable state shared between
//! calls, so it sits behind a `Mutex`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use super::conversion::{delta_e_76, hex_to_lab, normalize_hex, LabColor};
use super::named_table::NAMED_COLORS;

/// Name returned for input that is not a hex color
pub const UNKNOWN_COLOR_NAME: &str = "Unknown";

/// Resolved name for a color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedColorMatch {
    pub hex: String,
    pub name: String,
}

/// Anything that can put a name to a hex color
///
/// The suitability layer receives an implementation at construction time
/// instead of looking one up per call.
pub trait ColorNamer: Send + Sync {
    fn nearest_color_name(&self, hex: &str) -> NamedColorMatch;
}

#[derive(Debug, Clone)]
struct NamedEntry {
    name: &'static str,
    lab: LabColor,
}

#[derive(Debug, Default)]
struct FifoCache {
    entries: FxHashMap<String, String>,
    order: VecDeque<String>,
}

impl FifoCache {
    fn get(&self, key: &str) -> Option<&String> {
        self.entries.get(key)
    }

    fn insert(&mut self, key: String, value: String, capacity: usize) {
        if self.entries.contains_key(&key) {
            return;
        }
        while self.order.len() >= capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, value);
    }
}

/// Nearest-name lookup over the embedded dataset, with a bounded cache
#[derive(Debug)]
pub struct NamedColorResolver {
    dataset: Vec<NamedEntry>,
    cache: Mutex<FifoCache>,
    capacity: usize,
}

impl NamedColorResolver {
    /// Precompute Lab for every reference color
    pub fn new(capacity: usize) -> Self {
        let dataset = NAMED_COLORS
            .iter()
            .filter_map(|&(name, hex)| hex_to_lab(hex).map(|lab| NamedEntry { name, lab }))
            .collect();

        Self {
            dataset,
            cache: Mutex::new(FifoCache::default()),
            capacity: capacity.max(1),
        }
    }

    /// Number of reference colors
    pub fn dataset_len(&self) -> usize {
        self.dataset.len()
    }

    /// Number of cached resolutions
    pub fn cache_len(&self) -> usize {
        self.lock_cache().entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether a (normalized) hex is currently cached
    pub fn is_cached(&self, hex: &str) -> bool {
        match normalize_hex(hex) {
            Some(key) => self.lock_cache().get(&key).is_some(),
            None => false,
        }
    }

    fn lock_cache(&self) -> MutexGuard<'_, FifoCache> {
        // A panic while holding the lock cannot leave the map half-written
        // in a way that changes results, so a poisoned lock is still usable.
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn scan(&self, lab: &LabColor) -> &'static str {
        let mut best: Option<(&'static str, f64)> = None;
        for entry in &self.dataset {
            let d = delta_e_76(lab, &entry.lab);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((entry.name, d)),
            }
        }
        best.map(|(name, _)| name).unwrap_or(UNKNOWN_COLOR_NAME)
    }

    /// Closest reference name for a hex color
    pub fn resolve(&self, hex: &str) -> NamedColorMatch {
        let Some(key) = normalize_hex(hex) else {
            return NamedColorMatch {
                hex: hex.trim().to_string(),
                name: UNKNOWN_COLOR_NAME.to_string(),
            };
        };

        if let Some(name) = self.lock_cache().get(&key) {
            tracing::debug!("Cache hit for color name {}", key);
            return NamedColorMatch { hex: key, name: name.clone() };
        }

        // `key` came from normalize_hex, so it always converts
        let name = match hex_to_lab(&key) {
            Some(lab) => self.scan(&lab).to_string(),
            None => UNKNOWN_COLOR_NAME.to_string(),
        };

        self.lock_cache().insert(key.clone(), name.clone(), self.capacity);
        NamedColorMatch { hex: key, name }
    }
}

impl ColorNamer for NamedColorResolver {
    fn nearest_color_name(&self, hex: &str) -> NamedColorMatch {
        self.resolve(hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_is_loaded() {
        let resolver = NamedColorResolver::new(100);
        assert_eq!(resolver.dataset_len(), NAMED_COLORS.len());
        assert!(resolver.dataset_len() > 200);
    }

    #[test]
    fn test_exact_names() {
        let resolver = NamedColorResolver::new(100);
        assert_eq!(resolver.resolve("#FF7F50").name, "Coral");
        assert_eq!(resolver.resolve("#ff6f61").name, "Living Coral");
        assert_eq!(resolver.resolve("#000").name, "Black");
        assert_eq!(resolver.resolve("#800020").name, "Burgundy");
    }

    #[test]
    fn test_near_miss_still_gets_a_name() {
        let resolver = NamedColorResolver::new(100);
        // One step off pure navy
        let m = resolver.resolve("#010181");
        assert_eq!(m.name, "Navy");
        assert_eq!(m.hex, "#010181");
    }

    #[test]
    fn test_malformed_hex_is_unknown_and_not_cached() {
        let resolver = NamedColorResolver::new(100);
        let m = resolver.resolve("#12");
        assert_eq!(m.name, UNKNOWN_COLOR_NAME);
        assert_eq!(resolver.cache_len(), 0);
    }

    #[test]
    fn test_repeat_lookup_is_stable() {
        let resolver = NamedColorResolver::new(100);
        let first = resolver.resolve("#7A8A9E");
        let size_before = resolver.dataset_len();
        let second = resolver.resolve("#7a8a9e");

        assert_eq!(first, second);
        assert_eq!(resolver.dataset_len(), size_before);
        assert_eq!(resolver.cache_len(), 1);
    }

    #[test]
    fn test_fifo_eviction() {
        let resolver = NamedColorResolver::new(2);
        resolver.resolve("#111111");
        resolver.resolve("#222222");
        // Hit on the oldest entry does not protect it
        resolver.resolve("#111111");
        resolver.resolve("#333333");

        assert_eq!(resolver.cache_len(), 2);
        assert!(!resolver.is_cached("#111111"));
        assert!(resolver.is_cached("#222222"));
        assert!(resolver.is_cached("#333333"));
    }

    #[test]
    fn test_cache_does_not_change_results() {
        let cold = NamedColorResolver::new(1);
        let warm = NamedColorResolver::new(100);
        for hex in ["#C19A6B", "#36454F", "#FFC72C"] {
            warm.resolve(hex);
        }
        for hex in ["#C19A6B", "#36454F", "#FFC72C"] {
            assert_eq!(cold.resolve(hex), warm.resolve(hex));
        }
    }
}
