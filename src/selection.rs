//! Typed atom selections.
//!
//! Selections are pure, composable predicates over [`AtomRecord`] attributes.
//! They replace query-string selections: there is no parsing surface, and the
//! same filter applied to the same model always selects the same atoms.

use crate::structure::AtomRecord;
use pdbtbx::Element;

/// A composable boolean filter over atom attributes.
#[derive(Debug, Clone, PartialEq)]
pub enum AtomFilter {
    /// Atoms in the protein partition.
    Polymer,
    /// Atoms outside the protein partition (the ligand side).
    NonPolymer,
    /// Hydrogen-bond donors.
    Donor,
    /// Hydrogen-bond acceptors.
    Acceptor,
    /// Atoms of the given element.
    Element(Element),
    /// Atoms whose residue name is in the given set.
    ResidueIn(&'static [&'static str]),
    /// Atoms with formal charge greater than zero.
    PositiveCharge,
    /// Atoms with formal charge less than zero.
    NegativeCharge,
    /// Conjunction: all inner filters match.
    All(Vec<AtomFilter>),
    /// Disjunction: at least one inner filter matches.
    Any(Vec<AtomFilter>),
    /// Negation of the inner filter.
    Not(Box<AtomFilter>),
}

impl AtomFilter {
    /// Evaluate the filter against one atom.
    pub fn matches(&self, atom: &AtomRecord) -> bool {
        match self {
            AtomFilter::Polymer => atom.is_polymer,
            AtomFilter::NonPolymer => !atom.is_polymer,
            AtomFilter::Donor => atom.is_donor,
            AtomFilter::Acceptor => atom.is_acceptor,
            AtomFilter::Element(element) => atom.element.as_ref() == Some(element),
            AtomFilter::ResidueIn(names) => names.contains(&atom.resn.as_str()),
            AtomFilter::PositiveCharge => atom.formal_charge > 0,
            AtomFilter::NegativeCharge => atom.formal_charge < 0,
            AtomFilter::All(filters) => filters.iter().all(|f| f.matches(atom)),
            AtomFilter::Any(filters) => filters.iter().any(|f| f.matches(atom)),
            AtomFilter::Not(filter) => !filter.matches(atom),
        }
    }

    /// Both this filter and `other`.
    pub fn and(self, other: AtomFilter) -> AtomFilter {
        AtomFilter::All(vec![self, other])
    }

    /// Either this filter or `other`.
    pub fn or(self, other: AtomFilter) -> AtomFilter {
        AtomFilter::Any(vec![self, other])
    }

    /// Everything this filter rejects.
    pub fn negate(self) -> AtomFilter {
        AtomFilter::Not(Box::new(self))
    }

    /// Donor-or-acceptor union, used by the hbond and hydrophobic categories.
    pub fn polar() -> AtomFilter {
        AtomFilter::Donor.or(AtomFilter::Acceptor)
    }
}
