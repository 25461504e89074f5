//! Structure model store.
//!
//! Loads an atomic model into an indexed, immutable collection of
//! [`AtomRecord`]s with the chemical annotations the interaction categories
//! need. Each model is an independent, caller-owned value; nothing here is
//! shared between analysis runs.

use crate::chemistry;
use crate::errors::StructureError;
use crate::selection::AtomFilter;
use nalgebra as na;
use pdbtbx::*;
use std::path::Path;

/// One atom of a loaded structure model.
///
/// All fields are fixed at load time; `index` is unique within the model.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// Position of the record within its model, unique per model.
    pub index: usize,
    /// Chemical element, if the input provided one.
    pub element: Option<Element>,
    /// Residue name, e.g. `ASP` or `LIG`.
    pub resn: String,
    /// Residue sequence number.
    pub resi: isize,
    /// Atom name, e.g. `OD1`.
    pub atomn: String,
    /// Cartesian coordinates in the structure's native length unit.
    pub pos: na::Vector3<f64>,
    /// Whether the atom can donate a hydrogen bond.
    pub is_donor: bool,
    /// Whether the atom can accept a hydrogen bond.
    pub is_acceptor: bool,
    /// Formal charge from the input file's charge column.
    pub formal_charge: isize,
    /// Whether the atom belongs to the protein partition.
    pub is_polymer: bool,
}

impl AtomRecord {
    /// Euclidean distance to another atom.
    pub fn distance(&self, other: &AtomRecord) -> f64 {
        (self.pos - other.pos).norm()
    }
}

/// An indexed atomic model, partitioned into protein and ligand atoms.
#[derive(Debug, Clone)]
pub struct StructureModel {
    id: String,
    atoms: Vec<AtomRecord>,
}

impl StructureModel {
    /// Build a model from an in-memory atom list.
    pub fn from_atoms(id: impl Into<String>, atoms: Vec<AtomRecord>) -> Self {
        Self {
            id: id.into(),
            atoms,
        }
    }

    /// Load a PDB or mmCIF file into a model.
    ///
    /// Parsing is lenient; recoverable parser complaints are returned as
    /// warnings next to the model. All atoms are kept, including waters and
    /// other non-polymer residues, which end up in the ligand partition.
    pub fn from_file(
        path: &Path,
        model_id: impl Into<String>,
    ) -> Result<(Self, Vec<PDBError>), StructureError> {
        let input_file = path.to_string_lossy().to_string();
        let (pdb, warnings) = ReadOptions::default()
            .set_only_atomic_coords(true)
            .set_level(StrictnessLevel::Loose)
            .read(&input_file)
            .map_err(|errors| StructureError::Unreadable {
                path: path.to_path_buf(),
                details: errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<String>>()
                    .join("; "),
            })?;

        let atoms = pdb
            .atoms_with_hierarchy()
            .enumerate()
            .map(|(index, hier)| {
                let atom = hier.atom();
                let resn = hier.residue().name().unwrap_or("").to_string();
                let atomn = atom.name().to_string();
                let element = atom.element().cloned();
                let is_polymer = !atom.hetero() && chemistry::is_standard_amino_acid(&resn);
                let (is_donor, is_acceptor) = if is_polymer {
                    (
                        chemistry::is_protein_donor(&resn, &atomn),
                        chemistry::is_protein_acceptor(&resn, &atomn),
                    )
                } else {
                    chemistry::element_donor_acceptor(element)
                };
                let (x, y, z) = atom.pos();

                AtomRecord {
                    index,
                    element,
                    resn,
                    resi: hier.residue().serial_number(),
                    atomn,
                    pos: na::Vector3::new(x, y, z),
                    is_donor,
                    is_acceptor,
                    formal_charge: atom.charge(),
                    is_polymer,
                }
            })
            .collect();

        Ok((
            Self {
                id: model_id.into(),
                atoms,
            },
            warnings,
        ))
    }

    /// Identifier used in logs and error reports.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// All atoms, in load order.
    pub fn atoms(&self) -> &[AtomRecord] {
        &self.atoms
    }

    /// Atoms matching a filter, in ascending index order.
    pub fn select(&self, filter: &AtomFilter) -> Vec<&AtomRecord> {
        self.atoms.iter().filter(|a| filter.matches(a)).collect()
    }

    /// Resolve an atom index to exactly one record.
    ///
    /// Returns `None` for unknown indices and for indices that resolve to
    /// more than one record.
    pub fn atom(&self, index: usize) -> Option<&AtomRecord> {
        let mut matching = self.atoms.iter().filter(|a| a.index == index);
        let first = matching.next()?;
        match matching.next() {
            Some(_) => None,
            None => Some(first),
        }
    }
}
