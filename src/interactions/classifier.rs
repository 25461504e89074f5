use super::cutoffs::Cutoffs;
use super::structs::{ContactRecord, Interaction};
use crate::chemistry::{
    AROMATIC_RESIDUES, CHARGED_RESIDUES, NEGATIVE_RESIDUES, POSITIVE_RESIDUES,
};
use crate::errors::StructureError;
use crate::pairs::find_pairs;
use crate::selection::AtomFilter;
use crate::structure::StructureModel;
use pdbtbx::Element;
use tracing::debug;

/// The workhorse struct for classifying protein-ligand contacts in one model.
///
/// Holds a borrowed model and a complete cutoff configuration; the model is
/// never mutated. Categories run in a fixed order and their results are
/// concatenated without cross-category deduplication, since one physical pair
/// can qualify for several categories.
pub struct InteractionClassifier<'a> {
    model: &'a StructureModel,
    cutoffs: Cutoffs,
}

impl<'a> InteractionClassifier<'a> {
    /// Validate the model and build a classifier.
    ///
    /// A model with no atoms, or whose protein partition is empty, cannot be
    /// analyzed. An empty ligand partition is fine and yields zero records.
    pub fn new(model: &'a StructureModel, cutoffs: Cutoffs) -> Result<Self, StructureError> {
        if model.atoms().is_empty() {
            return Err(StructureError::EmptyModel {
                model_id: model.id().to_string(),
            });
        }
        if !model.atoms().iter().any(|a| a.is_polymer) {
            return Err(StructureError::EmptyProteinPartition {
                model_id: model.id().to_string(),
            });
        }
        Ok(Self { model, cutoffs })
    }

    /// Produce the complete contact record sequence for the model.
    ///
    /// Order is defined: hbond, salt_bridge (positive protein side first,
    /// then negative), pi_pi, hydrophobic; within a category, pair-finder
    /// emission order. Two runs over the same model and cutoffs yield
    /// identical sequences.
    pub fn classify(&self) -> Vec<ContactRecord> {
        let mut records = Vec::new();

        // 1. Hydrogen bonds
        self.run_category(
            Interaction::HydrogenBond,
            AtomFilter::polar(),
            AtomFilter::polar(),
            &mut records,
        );

        // 2. Salt bridges; charge complementarity is directional, so both
        // polarities are queried
        self.run_category(
            Interaction::SaltBridge,
            AtomFilter::ResidueIn(POSITIVE_RESIDUES),
            AtomFilter::NegativeCharge,
            &mut records,
        );
        self.run_category(
            Interaction::SaltBridge,
            AtomFilter::ResidueIn(NEGATIVE_RESIDUES),
            AtomFilter::PositiveCharge,
            &mut records,
        );

        // 3. Pi stacking proxy: aromatic residue against any ligand carbon
        self.run_category(
            Interaction::PiStacking,
            AtomFilter::ResidueIn(AROMATIC_RESIDUES),
            AtomFilter::Element(Element::C),
            &mut records,
        );

        // 4. Hydrophobic contacts
        self.run_category(
            Interaction::Hydrophobic,
            AtomFilter::polar()
                .negate()
                .and(AtomFilter::ResidueIn(CHARGED_RESIDUES).negate()),
            AtomFilter::polar().negate(),
            &mut records,
        );

        records
    }

    fn run_category(
        &self,
        interaction: Interaction,
        protein_filter: AtomFilter,
        ligand_filter: AtomFilter,
        records: &mut Vec<ContactRecord>,
    ) {
        let protein = self
            .model
            .select(&AtomFilter::Polymer.and(protein_filter));
        let ligand = self
            .model
            .select(&AtomFilter::NonPolymer.and(ligand_filter));
        let cutoff = self.cutoffs.get(interaction);

        for (protein_index, ligand_index) in find_pairs(&protein, &ligand, cutoff) {
            records.extend(self.pair_to_record(interaction, protein_index, ligand_index));
        }
    }

    /// Resolve a raw index pair into a contact record.
    ///
    /// A pair whose indices no longer resolve to exactly one atom each is
    /// dropped; one malformed pair must not abort the model's classification.
    fn pair_to_record(
        &self,
        interaction: Interaction,
        protein_index: usize,
        ligand_index: usize,
    ) -> Option<ContactRecord> {
        let (Some(protein), Some(ligand)) =
            (self.model.atom(protein_index), self.model.atom(ligand_index))
        else {
            debug!(
                "dropping unresolvable {interaction} pair ({protein_index}, {ligand_index}) \
                 in model `{id}`",
                id = self.model.id()
            );
            return None;
        };

        Some(ContactRecord {
            interaction,
            protein_resn: protein.resn.clone(),
            protein_resi: protein.resi,
            protein_atom: protein.atomn.clone(),
            ligand_atom: ligand.atomn.clone(),
            distance: round3(protein.distance(ligand)),
        })
    }
}

fn round3(distance: f64) -> f64 {
    (distance * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry;
    use crate::structure::AtomRecord;
    use nalgebra as na;

    fn patom(
        index: usize,
        resn: &str,
        resi: isize,
        atomn: &str,
        element: Element,
        pos: (f64, f64, f64),
    ) -> AtomRecord {
        AtomRecord {
            index,
            element: Some(element),
            resn: resn.to_string(),
            resi,
            atomn: atomn.to_string(),
            pos: na::Vector3::new(pos.0, pos.1, pos.2),
            is_donor: chemistry::is_protein_donor(resn, atomn),
            is_acceptor: chemistry::is_protein_acceptor(resn, atomn),
            formal_charge: 0,
            is_polymer: true,
        }
    }

    fn latom(
        index: usize,
        atomn: &str,
        element: Element,
        charge: isize,
        pos: (f64, f64, f64),
    ) -> AtomRecord {
        let (is_donor, is_acceptor) = chemistry::element_donor_acceptor(Some(element));
        AtomRecord {
            index,
            element: Some(element),
            resn: "LIG".to_string(),
            resi: 1,
            atomn: atomn.to_string(),
            pos: na::Vector3::new(pos.0, pos.1, pos.2),
            is_donor,
            is_acceptor,
            formal_charge: charge,
            is_polymer: false,
        }
    }

    #[test]
    fn hbond_scenario() {
        let model = StructureModel::from_atoms(
            "model_0",
            vec![
                patom(0, "ASP", 45, "OD1", Element::O, (0.0, 0.0, 0.0)),
                latom(1, "N1", Element::N, 0, (2.8, 0.0, 0.0)),
            ],
        );
        let records = InteractionClassifier::new(&model, Cutoffs::default())
            .unwrap()
            .classify();

        assert_eq!(
            records,
            vec![ContactRecord {
                interaction: Interaction::HydrogenBond,
                protein_resn: "ASP".to_string(),
                protein_resi: 45,
                protein_atom: "OD1".to_string(),
                ligand_atom: "N1".to_string(),
                distance: 2.8,
            }]
        );
    }

    #[test]
    fn salt_bridge_respects_the_cutoff() {
        let model = StructureModel::from_atoms(
            "model_0",
            vec![
                patom(0, "ARG", 10, "NH1", Element::N, (0.0, 0.0, 0.0)),
                latom(1, "O1", Element::O, -1, (3.9, 0.0, 0.0)),
            ],
        );

        let records = InteractionClassifier::new(&model, Cutoffs::default())
            .unwrap()
            .classify();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].interaction, Interaction::SaltBridge);
        assert_eq!(records[0].protein_resn, "ARG");
        assert_eq!(records[0].distance, 3.9);

        // Same pair, tighter cutoff: nothing
        let tight = Cutoffs::new(3.5, 3.0, 5.0, 4.0).unwrap();
        let records = InteractionClassifier::new(&model, tight)
            .unwrap()
            .classify();
        assert!(records.is_empty());
    }

    #[test]
    fn salt_bridge_checks_both_polarities() {
        let model = StructureModel::from_atoms(
            "model_0",
            vec![
                patom(0, "GLU", 20, "OE1", Element::O, (0.0, 0.0, 0.0)),
                patom(1, "ARG", 30, "NH2", Element::N, (20.0, 0.0, 0.0)),
                latom(2, "N2", Element::N, 1, (3.8, 0.0, 0.0)),
                latom(3, "O2", Element::O, -1, (23.8, 0.0, 0.0)),
            ],
        );
        let records = InteractionClassifier::new(&model, Cutoffs::default())
            .unwrap()
            .classify();

        let salt: Vec<&ContactRecord> = records
            .iter()
            .filter(|r| r.interaction == Interaction::SaltBridge)
            .collect();
        assert_eq!(salt.len(), 2);
        // Positive-protein sub-query runs before the negative-protein one
        assert_eq!(salt[0].protein_resn, "ARG");
        assert_eq!(salt[1].protein_resn, "GLU");
    }

    #[test]
    fn same_pair_can_appear_in_two_categories() {
        // A histidine carbon against a negatively charged ligand carbon
        // qualifies as salt_bridge (residue is chargeable) and as pi_pi
        // (residue is aromatic, ligand atom is carbon).
        let model = StructureModel::from_atoms(
            "model_0",
            vec![
                patom(0, "HIS", 7, "CE1", Element::C, (0.0, 0.0, 0.0)),
                latom(1, "C9", Element::C, -1, (3.8, 0.0, 0.0)),
            ],
        );
        let records = InteractionClassifier::new(&model, Cutoffs::default())
            .unwrap()
            .classify();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].interaction, Interaction::SaltBridge);
        assert_eq!(records[1].interaction, Interaction::PiStacking);
        assert_eq!(records[0].protein_atom, records[1].protein_atom);
        assert_eq!(records[0].ligand_atom, records[1].ligand_atom);
    }

    #[test]
    fn hydrophobic_excludes_polar_and_charged_partners() {
        let model = StructureModel::from_atoms(
            "model_0",
            vec![
                patom(0, "LEU", 12, "CD1", Element::C, (0.0, 0.0, 0.0)),
                patom(1, "ASP", 13, "CB", Element::C, (0.0, 5.0, 0.0)),
                latom(2, "C3", Element::C, 0, (3.5, 0.0, 0.0)),
                latom(3, "O3", Element::O, 0, (0.0, 5.0, 3.5)),
            ],
        );
        let records = InteractionClassifier::new(&model, Cutoffs::default())
            .unwrap()
            .classify();

        // LEU CD1 -- C3 is the only hydrophobic contact: ASP is charged and
        // O3 is an acceptor
        let hydrophobic: Vec<&ContactRecord> = records
            .iter()
            .filter(|r| r.interaction == Interaction::Hydrophobic)
            .collect();
        assert_eq!(hydrophobic.len(), 1);
        assert_eq!(hydrophobic[0].protein_resn, "LEU");
        assert_eq!(hydrophobic[0].ligand_atom, "C3");
    }

    #[test]
    fn distances_are_rounded_to_three_decimals() {
        let model = StructureModel::from_atoms(
            "model_0",
            vec![
                patom(0, "GLY", 3, "N", Element::N, (0.0, 0.0, 0.0)),
                latom(1, "O1", Element::O, 0, (3.14159, 0.0, 0.0)),
            ],
        );
        let records = InteractionClassifier::new(&model, Cutoffs::default())
            .unwrap()
            .classify();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].distance, 3.142);
    }

    #[test]
    fn classification_is_deterministic() {
        let mut atoms = Vec::new();
        for i in 0..8 {
            atoms.push(patom(
                i,
                "LEU",
                10 + i as isize,
                "CD1",
                Element::C,
                (i as f64 * 1.7, 0.0, 0.0),
            ));
        }
        for i in 8..16 {
            atoms.push(latom(
                i,
                "C1",
                Element::C,
                0,
                ((i - 8) as f64 * 1.3, 2.5, 0.0),
            ));
        }
        let model = StructureModel::from_atoms("model_0", atoms);

        let classifier = InteractionClassifier::new(&model, Cutoffs::default()).unwrap();
        let first = classifier.classify();
        let second = classifier.classify();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn empty_model_is_rejected() {
        let model = StructureModel::from_atoms("model_0", vec![]);
        assert_eq!(
            InteractionClassifier::new(&model, Cutoffs::default()).err(),
            Some(StructureError::EmptyModel {
                model_id: "model_0".to_string()
            })
        );
    }

    #[test]
    fn ligand_only_model_is_rejected() {
        let model = StructureModel::from_atoms(
            "model_0",
            vec![latom(0, "C1", Element::C, 0, (0.0, 0.0, 0.0))],
        );
        assert_eq!(
            InteractionClassifier::new(&model, Cutoffs::default()).err(),
            Some(StructureError::EmptyProteinPartition {
                model_id: "model_0".to_string()
            })
        );
    }

    #[test]
    fn empty_ligand_partition_yields_zero_records() {
        let model = StructureModel::from_atoms(
            "model_0",
            vec![
                patom(0, "ASP", 45, "OD1", Element::O, (0.0, 0.0, 0.0)),
                patom(1, "ARG", 46, "NH1", Element::N, (3.0, 0.0, 0.0)),
            ],
        );
        let records = InteractionClassifier::new(&model, Cutoffs::default())
            .unwrap()
            .classify();
        assert!(records.is_empty());
    }
}
