//! Link list fingerprinting.
//!
//! The digest is SHA-256 over the compact JSON encoding of the link list
//! (`[{"title":..,"url":..},..]`, keys sorted, no whitespace), hex-encoded.
//! It is only an equality short-circuit; the diff is always recomputed.

use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::models::LinkRecord;

/// Compute the lowercase hex digest of an ordered link list.
pub fn digest_links(links: &[LinkRecord]) -> Result<String> {
    let payload = serde_json::to_vec(links)?;
    Ok(hex::encode(Sha256::digest(&payload)))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn sample() -> Vec<LinkRecord> {
        vec![
            LinkRecord::new("Press Release A", "https://x/a"),
            LinkRecord::new("Press Release B", "https://x/b"),
        ]
    }

    #[test]
    fn test_canonical_encoding() {
        let payload = serde_json::to_string(&sample()[..1]).unwrap();
        assert_eq!(payload, r#"[{"title":"Press Release A","url":"https://x/a"}]"#);
    }

    #[test]
    fn test_empty_list_digest() {
        // sha256("[]")
        assert_eq!(
            digest_links(&[]).unwrap(),
            "4f53cda18c2baa0c0354bb5f9a3ecbe5ed12ab4d8e11ba873c2f11161202b945"
        );
    }

    #[test]
    fn test_deterministic() {
        let links = sample();
        let first = digest_links(&links).unwrap();

        assert_eq!(first, digest_links(&links.clone()).unwrap());
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_order_changes_digest() {
        let links = sample();
        let mut reversed = links.clone();
        reversed.reverse();

        assert_ne!(digest_links(&links).unwrap(), digest_links(&reversed).unwrap());
    }

    #[test]
    fn test_content_changes_digest() {
        let base = digest_links(&sample()).unwrap();

        let mut retitled = sample();
        retitled[0].title.push('!');
        let mut moved = sample();
        moved[1].url = "https://x/c".into();
        let mut shorter = sample();
        shorter.pop();

        for variant in [retitled, moved, shorter] {
            assert_ne!(base, digest_links(&variant).unwrap());
        }
    }

    #[test]
    fn test_field_boundaries_matter() {
        let a = vec![LinkRecord::new("ab", "c")];
        let b = vec![LinkRecord::new("a", "bc")];
        assert_ne!(digest_links(&a).unwrap(), digest_links(&b).unwrap());
    }

    fn permutations(items: &[LinkRecord]) -> Vec<Vec<LinkRecord>> {
        if items.len() <= 1 {
            return vec![items.to_vec()];
        }
        let mut result = Vec::new();
        for i in 0..items.len() {
            let mut rest = items.to_vec();
            let head = rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, head.clone());
                result.push(tail);
            }
        }
        result
    }

    #[test]
    fn test_every_permutation_has_distinct_digest() {
        let links: Vec<LinkRecord> = (0..5)
            .map(|i| LinkRecord::new(format!("Doc {i}"), format!("https://x/{i}")))
            .collect();

        let orders = permutations(&links);
        let digests: HashSet<String> = orders.iter().map(|l| digest_links(l).unwrap()).collect();

        assert_eq!(orders.len(), 120);
        assert_eq!(digests.len(), 120);
    }
}
