// crates/doctree_rst/src/ids.rs

use std::collections::HashSet;

use doctree::make_id;

/// Hands out document-unique identifiers in source order.
#[derive(Debug, Default)]
pub(crate) struct IdRegistry {
    used: HashSet<String>,
    counter: usize,
}

impl IdRegistry {
    /// Returns `make_id(name)` when it is non-empty and unused, otherwise the
    /// next free `idN`.
    pub fn claim(&mut self, name: &str) -> String {
        let id = make_id(name);
        if !id.is_empty() && self.used.insert(id.clone()) {
            return id;
        }
        loop {
            self.counter += 1;
            let fallback = format!("id{}", self.counter);
            if self.used.insert(fallback.clone()) {
                return fallback;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_returns_normalised_id() {
        let mut ids = IdRegistry::default();
        assert_eq!(ids.claim("Detail"), "detail");
    }

    #[test]
    fn test_duplicate_and_empty_names_fall_back_to_counter() {
        let mut ids = IdRegistry::default();
        assert_eq!(ids.claim("Detail"), "detail");
        assert_eq!(ids.claim("detail"), "id1");
        assert_eq!(ids.claim("123"), "id2");
    }

    #[test]
    fn test_counter_skips_ids_already_taken() {
        let mut ids = IdRegistry::default();
        assert_eq!(ids.claim("id1"), "id1");
        assert_eq!(ids.claim("!!"), "id2");
    }
}
