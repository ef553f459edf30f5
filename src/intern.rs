use std::{
    collections::HashMap,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    sync::{Arc, RwLock},
};

use lazy_static::lazy_static;

lazy_static! {
    static ref INTERNED_CODES: RwLock<HashMap<String, Name>> = RwLock::new(HashMap::new());
}

/// An interned substituent code such as `C1` or `Cl`.
///
/// Each code is allocated once; clones share the same backing string, so
/// equality checks usually reduce to a pointer comparison.
#[allow(clippy::derived_hash_with_manual_eq, clippy::derive_ord_xor_partial_ord)]
#[derive(Clone, Hash, Eq, Ord)]
pub struct Name(Arc<String>);

impl Name {
    /// Intern a code, returning the shared symbol for it
    pub fn new(code: &str) -> Self {
        let mut codes = INTERNED_CODES.write().unwrap();
        if let Some(symbol) = codes.get(code) {
            return symbol.clone();
        }

        let symbol = Name(Arc::new(code.to_string()));
        codes.insert(code.to_string(), symbol.clone());
        symbol
    }

    /// Get the text of the code
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Name::new(s)
    }
}

impl From<String> for Name {
    fn from(s: String) -> Self {
        Name::new(&s)
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.0, &other.0) {
            return true;
        }
        self.0 == other.0
    }
}

#[allow(clippy::non_canonical_partial_ord_impl)]
impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if Arc::ptr_eq(&self.0, &other.0) {
            return Some(std::cmp::Ordering::Equal);
        }
        self.0.partial_cmp(&other.0)
    }
}

impl Debug for Name {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interning_shares_storage() {
        let a = Name::new("C1");
        let b = Name::from("C1");
        assert_eq!(a, b);
        assert_eq!(a.code(), "C1");
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let c1 = Name::new("C1");
        let cl = Name::new("Cl");
        let n1 = Name::new("N1");
        assert!(c1 < cl, "'C1' sorts before 'Cl'");
        assert!(cl < n1);
    }
}
