//! Legal key-size enumeration for block ciphers.

use std::collections::BTreeSet;

/// A `(min, max, step)` range of legal key sizes, in bits.
///
/// `step_bits == 0` describes a single fixed size of `min_bits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySizeDescriptor {
    pub min_bits: usize,
    pub max_bits: usize,
    pub step_bits: usize,
}

impl KeySizeDescriptor {
    pub const fn new(min_bits: usize, max_bits: usize, step_bits: usize) -> Self {
        Self {
            min_bits,
            max_bits,
            step_bits,
        }
    }

    /// Descriptor for exactly one key size.
    pub const fn fixed(bits: usize) -> Self {
        Self::new(bits, bits, 0)
    }
}

/// Expand `descriptors` into their distinct key sizes, largest first.
///
/// An empty slice yields an empty list.
pub fn legal_key_sizes(descriptors: &[KeySizeDescriptor]) -> Vec<usize> {
    let mut sizes = BTreeSet::new();
    for d in descriptors {
        if d.step_bits == 0 {
            sizes.insert(d.min_bits);
            continue;
        }
        let mut bits = d.min_bits;
        while bits <= d.max_bits {
            sizes.insert(bits);
            match bits.checked_add(d.step_bits) {
                Some(next) => bits = next,
                None => break,
            }
        }
    }
    sizes.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_descriptor_yields_single_size() {
        assert_eq!(legal_key_sizes(&[KeySizeDescriptor::new(64, 64, 0)]), vec![64]);
    }

    #[test]
    fn stepped_descriptor_is_inclusive_and_descending() {
        assert_eq!(
            legal_key_sizes(&[KeySizeDescriptor::new(128, 192, 64)]),
            vec![192, 128]
        );
        assert_eq!(
            legal_key_sizes(&[KeySizeDescriptor::new(128, 256, 64)]),
            vec![256, 192, 128]
        );
    }

    #[test]
    fn step_that_overshoots_max_stops_below_it() {
        assert_eq!(
            legal_key_sizes(&[KeySizeDescriptor::new(40, 128, 50)]),
            vec![90, 40]
        );
    }

    #[test]
    fn multiple_descriptors_are_merged_and_deduplicated() {
        let sizes = legal_key_sizes(&[
            KeySizeDescriptor::new(128, 256, 64),
            KeySizeDescriptor::fixed(192),
            KeySizeDescriptor::fixed(64),
        ]);
        assert_eq!(sizes, vec![256, 192, 128, 64]);
    }

    #[test]
    fn no_descriptors_yields_nothing() {
        assert!(legal_key_sizes(&[]).is_empty());
    }

    #[test]
    fn step_near_usize_max_terminates() {
        let sizes = legal_key_sizes(&[KeySizeDescriptor::new(usize::MAX - 1, usize::MAX, 4)]);
        assert_eq!(sizes, vec![usize::MAX - 1]);
    }
}
