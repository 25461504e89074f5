//! Residue- and atom-level chemistry tables.
//!
//! Prediction output carries coordinates but no connectivity, so donor and
//! acceptor assignment relies on curated per-residue atom tables for the
//! protein and an element heuristic for everything else.

use pdbtbx::Element;

/// Residues whose side chains are positively charged at pH 7.0.
pub const POSITIVE_RESIDUES: &[&str] = &["ARG", "LYS", "HIS"];

/// Residues whose side chains are negatively charged at pH 7.0.
pub const NEGATIVE_RESIDUES: &[&str] = &["ASP", "GLU"];

/// Residues carrying an aromatic side-chain ring.
pub const AROMATIC_RESIDUES: &[&str] = &["PHE", "TYR", "TRP", "HIS"];

/// Residues excluded from the hydrophobic category on the protein side.
pub const CHARGED_RESIDUES: &[&str] = &["ASP", "GLU", "ARG", "LYS", "HIS"];

/// The 20 standard amino acids; anything else is treated as ligand.
pub fn is_standard_amino_acid(resn: &str) -> bool {
    matches!(
        resn,
        "ALA" | "ARG" | "ASN" | "ASP" | "CYS" | "GLN" | "GLU" | "GLY" | "HIS" | "ILE" | "LEU"
            | "LYS" | "MET" | "PHE" | "PRO" | "SER" | "THR" | "TRP" | "TYR" | "VAL"
    )
}

/// Check if a protein atom can donate a hydrogen bond.
pub fn is_protein_donor(resn: &str, atomn: &str) -> bool {
    // Backbone amide nitrogen, except proline
    if atomn == "N" && resn != "PRO" {
        return true;
    }
    matches!(
        (resn, atomn),
        ("ARG", "NE" | "NH1" | "NH2")
            | ("ASN", "ND2")
            | ("GLN", "NE2")
            | ("HIS", "ND1" | "NE2")
            | ("LYS", "NZ")
            | ("SER", "OG")
            | ("THR", "OG1")
            | ("TRP", "NE1")
            | ("TYR", "OH")
            | ("CYS", "SG") // 10.1002/prot.22327
    )
}

/// Check if a protein atom can accept a hydrogen bond.
pub fn is_protein_acceptor(resn: &str, atomn: &str) -> bool {
    // Backbone carbonyl oxygens, including the terminal OXT
    if matches!(atomn, "O" | "OXT") {
        return true;
    }
    matches!(
        (resn, atomn),
        ("ASN", "OD1")
            | ("ASP", "OD1" | "OD2")
            | ("GLN", "OE1")
            | ("GLU", "OE1" | "OE2")
            | ("HIS", "ND1" | "NE2")
            | ("SER", "OG")
            | ("THR", "OG1")
            | ("TYR", "OH")
            | ("MET", "SD") // 10.1021/jz300207k and 10.1002/prot.22327
            | ("CYS", "SG")
    )
}

/// Donor/acceptor flags for a ligand atom, derived from its element alone.
///
/// Without hydrogens or bond orders a nitrogen cannot be told apart from a
/// protonated one, so nitrogens carry both flags. Only the donor-or-acceptor
/// union feeds the category filters, which keeps this heuristic harmless.
pub fn element_donor_acceptor(element: Option<Element>) -> (bool, bool) {
    match element {
        Some(Element::N) => (true, true),
        Some(Element::O) => (false, true),
        Some(Element::S) => (false, true),
        _ => (false, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backbone_donor_excludes_proline() {
        assert!(is_protein_donor("GLY", "N"));
        assert!(!is_protein_donor("PRO", "N"));
    }

    #[test]
    fn sidechain_tables() {
        assert!(is_protein_acceptor("ASP", "OD1"));
        assert!(is_protein_acceptor("ASP", "OD2"));
        assert!(!is_protein_donor("ASP", "OD1"));
        assert!(is_protein_donor("ARG", "NH1"));
        // Histidine ring nitrogens can do both
        assert!(is_protein_donor("HIS", "ND1"));
        assert!(is_protein_acceptor("HIS", "ND1"));
    }

    #[test]
    fn ligand_flags_follow_element() {
        assert_eq!(element_donor_acceptor(Some(Element::N)), (true, true));
        assert_eq!(element_donor_acceptor(Some(Element::O)), (false, true));
        assert_eq!(element_donor_acceptor(Some(Element::C)), (false, false));
        assert_eq!(element_donor_acceptor(None), (false, false));
    }
}
