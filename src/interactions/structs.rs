use core::fmt;

/// The interaction categories a protein-ligand atom pair can fall into.
///
/// A physical pair may legitimately qualify for more than one category; a
/// charged aromatic residue can show up under both `salt_bridge` and `pi_pi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interaction {
    /// Donor/acceptor pair within the hbond cutoff.
    HydrogenBond,
    /// Charged protein residue against an oppositely charged ligand atom.
    SaltBridge,
    /// Aromatic protein residue against a ligand carbon; a ring-geometry-free
    /// stacking proxy.
    PiStacking,
    /// Apolar atoms of uncharged residues in close contact.
    Hydrophobic,
}

impl Interaction {
    /// Category processing order; also the grouping order of the output table.
    pub const ALL: [Interaction; 4] = [
        Interaction::HydrogenBond,
        Interaction::SaltBridge,
        Interaction::PiStacking,
        Interaction::Hydrophobic,
    ];

    /// The category key used in cutoff maps and output tables.
    pub fn key(&self) -> &'static str {
        match self {
            Interaction::HydrogenBond => "hbond",
            Interaction::SaltBridge => "salt_bridge",
            Interaction::PiStacking => "pi_pi",
            Interaction::Hydrophobic => "hydrophobic",
        }
    }
}

impl fmt::Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// One classified protein-ligand contact.
///
/// Created once during classification of a model and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactRecord {
    /// The category the pair qualified for.
    pub interaction: Interaction,
    /// Protein residue name.
    pub protein_resn: String,
    /// Protein residue sequence number.
    pub protein_resi: isize,
    /// Protein atom name.
    pub protein_atom: String,
    /// Ligand atom name.
    pub ligand_atom: String,
    /// Pair distance, rounded to 3 decimal places.
    pub distance: f64,
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{intxn}: {resn} {resi} {patom} -- {latom} at {dist}",
            intxn = self.interaction,
            resn = self.protein_resn,
            resi = self.protein_resi,
            patom = self.protein_atom,
            latom = self.ligand_atom,
            dist = self.distance,
        )
    }
}
