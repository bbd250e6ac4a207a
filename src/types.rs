//src/types.rs

use std::fmt;

/// The three superkingdoms tracked per domain architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Superkingdom {
    Archaea,
    Bacteria,
    Eukaryota,
}

impl Superkingdom {
    pub fn as_str(&self) -> &'static str {
        match self {
            Superkingdom::Archaea => "Archaea",
            Superkingdom::Bacteria => "Bacteria",
            Superkingdom::Eukaryota => "Eukaryota",
        }
    }

    fn index(self) -> usize {
        match self {
            Superkingdom::Archaea => 0,
            Superkingdom::Bacteria => 1,
            Superkingdom::Eukaryota => 2,
        }
    }
}

/// The value stored in the taxonomy index: column 8 of the taxonomy file.
///
/// Labels outside the three superkingdoms (e.g. "Viruses") are kept so that a
/// lookup still counts as resolved, they just never set a presence flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainLabel {
    Superkingdom(Superkingdom),
    Other(Box<str>),
}

impl DomainLabel {
    pub fn parse(label: &str) -> Self {
        match label {
            "Archaea" => DomainLabel::Superkingdom(Superkingdom::Archaea),
            "Bacteria" => DomainLabel::Superkingdom(Superkingdom::Bacteria),
            "Eukaryota" => DomainLabel::Superkingdom(Superkingdom::Eukaryota),
            other => DomainLabel::Other(other.into()),
        }
    }

    pub fn superkingdom(&self) -> Option<Superkingdom> {
        match self {
            DomainLabel::Superkingdom(sk) => Some(*sk),
            DomainLabel::Other(_) => None,
        }
    }
}

impl fmt::Display for DomainLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainLabel::Superkingdom(sk) => f.write_str(sk.as_str()),
            DomainLabel::Other(label) => f.write_str(label),
        }
    }
}

/// Presence flags for one DA. Each flag is 0 or 1, never a count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomainPresence {
    flags: [u8; 3],
}

impl DomainPresence {
    pub fn mark(&mut self, sk: Superkingdom) {
        self.flags[sk.index()] = 1;
    }

    pub fn flag(&self, sk: Superkingdom) -> u8 {
        self.flags[sk.index()]
    }

    /// Number of superkingdoms seen so far (0..=3).
    pub fn breadth(&self) -> u8 {
        self.flags.iter().sum()
    }

    pub fn is_complete(&self) -> bool {
        self.breadth() == 3
    }
}

/// Accession and species code pulled out of one taxon token.
///
/// Tokens look like `PREFIX_ACCESSION_TAXONLABEL_SPECIESCODE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxonToken<'a> {
    pub accession: &'a str,
    pub species_code: &'a str,
}

impl<'a> TaxonToken<'a> {
    /// Returns `None` when the token has fewer than four `_`-separated fields.
    pub fn parse(token: &'a str) -> Option<Self> {
        let mut ids = token.split('_');
        let _prefix = ids.next()?;
        let accession = ids.next()?;
        let _label = ids.next()?;
        let species_code = ids.next()?.trim();
        Some(TaxonToken {
            accession,
            species_code,
        })
    }
}

/// One output row: `DA  Breadth  Archaea  Bacteria  Eukaryota`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaBreadthRow {
    pub da: String,
    pub presence: DomainPresence,
}

impl DaBreadthRow {
    pub const HEADER: &'static str = "#DA\tBreadth\tArchaea\tBacteria\tEukaryota";

    pub fn breadth(&self) -> u8 {
        self.presence.breadth()
    }
}

impl fmt::Display for DaBreadthRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.da,
            self.breadth(),
            self.presence.flag(Superkingdom::Archaea),
            self.presence.flag(Superkingdom::Bacteria),
            self.presence.flag(Superkingdom::Eukaryota),
        )
    }
}
