//! Built-in named algorithms.

use crate::algorithm::Algorithm;
use crate::error::Result;

/// A named algorithm as written in notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub notation: &'static str,
    pub commutator: bool,
}

impl CatalogEntry {
    const fn plain(name: &'static str, notation: &'static str) -> Self {
        Self {
            name,
            notation,
            commutator: false,
        }
    }

    const fn commutator(name: &'static str, notation: &'static str) -> Self {
        Self {
            name,
            notation,
            commutator: true,
        }
    }

    pub fn algorithm(&self) -> Result<Algorithm> {
        Algorithm::new(self.name, self.notation, self.commutator)
    }
}

pub const ALGORITHMS: &[CatalogEntry] = &[
    // corner three-cycles
    CatalogEntry::commutator("corner-pure", "[R U R', D]"),
    CatalogEntry::commutator("corner-setup", "[D: [R U R', D']]"),
    CatalogEntry::commutator("corner-wide", "[Rw: [U, R D R']]"),
    // edge three-cycles
    CatalogEntry::commutator("edge-slice", "[M', U2]"),
    CatalogEntry::commutator("edge-setup", "[U' : [M', U2]]"),
    // last layer
    CatalogEntry::plain("sexy", "R U R' U'"),
    CatalogEntry::plain("sledgehammer", "R' F R F'"),
    CatalogEntry::plain("sune", "R U R' U R U2 R'"),
    CatalogEntry::plain("t-perm", "R U R' U' R' F R2 U' R' U' R U R' F'"),
];

pub fn find(name: &str) -> Option<&'static CatalogEntry> {
    ALGORITHMS.iter().find(|entry| entry.name == name)
}
