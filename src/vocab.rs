use std::collections::BTreeMap;

use crate::Name;

/// One ring-atom descriptor as written in a SMARTS pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token {
    /// The bracket atom primitive, e.g. `[#6]` or `[#7+0]`.
    pub base: &'static str,
    /// Whether the position carries the `(*)` attachment marker and may
    /// therefore take a substituent or a hydrogen cap.
    pub open_valence: bool,
}

impl Token {
    pub const fn plain(base: &'static str) -> Self {
        Token {
            base,
            open_valence: false,
        }
    }

    pub const fn with_marker(base: &'static str) -> Self {
        Token {
            base,
            open_valence: true,
        }
    }

    /// The literal SMARTS text of the token, marker included.
    pub fn text(&self) -> String {
        if self.open_valence {
            format!("{}(*)", self.base)
        } else {
            self.base.to_string()
        }
    }
}

/// The fixed atom tokens and substituent catalog the generator draws from.
///
/// Built once at startup and passed by reference into every stage; no module
/// keeps vocabulary state of its own.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Layer-1 SMARTS for the fully generic aromatic five-ring.
    pub generic_ring: &'static str,
    /// Generic aromatic atom forced into slot 0 of layer-2 patterns.
    pub anchor: Token,
    /// Skeleton alphabet: aromatic carbon, marker attached.
    pub ring_carbon: Token,
    /// Skeleton alphabet: uncharged aromatic nitrogen, no marker.
    pub ring_nitrogen: Token,
    /// Center atoms prepended to a skeleton to close the ring, in
    /// generation order.
    pub centers: [Token; 4],
    /// Written in place of the marker on positions that stay unsubstituted.
    pub hydrogen_cap: &'static str,
    /// Substituent codes and the sub-patterns they render to.
    pub catalog: BTreeMap<Name, &'static str>,
}

impl Vocabulary {
    pub fn new() -> Self {
        let mut catalog = BTreeMap::new();
        for (code, smarts) in [
            ("C1", "[CH3,CH2]"),
            ("C2", "[CH,CH0]"),
            ("C3", "[c]"),
            ("N1", "[NH2,NH,N+]"),
            ("N2", "[N+0H0]"),
            ("N3", "[n+0]"),
            ("O1", "[O]"),
            ("S1", "[S]"),
            ("F", "[F]"),
            ("Cl", "[Cl]"),
        ] {
            catalog.insert(Name::from(code), smarts);
        }

        Vocabulary {
            generic_ring: "[a:1]1:a:a:a:a:1",
            anchor: Token::plain("a"),
            ring_carbon: Token::with_marker("[#6]"),
            ring_nitrogen: Token::plain("[#7+0]"),
            centers: [
                Token::with_marker("[#6]"),
                Token::with_marker("[#7+0]"),
                Token::plain("[#8]"),
                Token::plain("[#16]"),
            ],
            hydrogen_cap: "[#1]",
            catalog,
        }
    }

    /// The two-token alphabet skeletons are drawn from, carbon first.
    pub fn ring_alphabet(&self) -> [Token; 2] {
        [self.ring_carbon, self.ring_nitrogen]
    }

    /// Look up the rendered sub-pattern for a substituent code.
    pub fn substituent(&self, code: &Name) -> Option<&'static str> {
        self.catalog.get(code).copied()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_text() {
        assert_eq!(Token::with_marker("[#6]").text(), "[#6](*)");
        assert_eq!(Token::plain("[#7+0]").text(), "[#7+0]");
    }

    #[test]
    fn test_catalog_contents() {
        let vocab = Vocabulary::new();
        assert_eq!(vocab.catalog.len(), 10);
        assert_eq!(vocab.substituent(&Name::from("C1")), Some("[CH3,CH2]"));
        assert_eq!(vocab.substituent(&Name::from("Cl")), Some("[Cl]"));
        assert_eq!(vocab.substituent(&Name::from("Xx")), None);
    }

    #[test]
    fn test_which_tokens_carry_markers() {
        let vocab = Vocabulary::new();
        assert!(vocab.ring_carbon.open_valence);
        assert!(!vocab.ring_nitrogen.open_valence);
        assert!(vocab.centers[0].open_valence, "carbon center is substitutable");
        assert!(vocab.centers[1].open_valence, "nitrogen center is substitutable");
        assert!(!vocab.centers[2].open_valence);
        assert!(!vocab.centers[3].open_valence);
        assert!(!vocab.anchor.open_valence);
    }
}
