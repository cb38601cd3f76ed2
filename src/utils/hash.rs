//! Unified hashing utilities using FxHash.
//!
//! The engine never derives the build hash itself (it is supplied by the
//! host build), but hosts that do not already carry a content hash can use
//! `fingerprint` to derive a cache-busting token from output bytes.
//!
//! # Usage
//!
//! ```ignore
//! use tagweld::utils::hash;
//!
//! let h = hash::compute("some content"); // -> u64
//! let fp = hash::fingerprint("some content"); // -> "a1b2c3d4"
//! ```

use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Compute 64-bit hash from byte data.
#[inline]
pub fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(data.as_ref());
    hasher.finish()
}

/// Compute hash and return as 8-char hex fingerprint.
///
/// Useful as a build hash for cache-busting URLs (e.g. `app.js?a1b2c3d4`).
#[inline]
pub fn fingerprint<T: AsRef<[u8]> + ?Sized>(value: &T) -> String {
    format!("{:016x}", compute(value))[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_stable() {
        let a = fingerprint("body { color: red; }");
        let b = fingerprint("body { color: red; }");
        assert_eq!(a, b);
        assert_eq!(a.len(), 8);
    }

    #[test]
    fn test_fingerprint_changes_with_content() {
        assert_ne!(fingerprint("console.log(1)"), fingerprint("console.log(2)"));
    }
}
