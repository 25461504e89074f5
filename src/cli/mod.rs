pub(crate) mod confidence;
pub(crate) mod contacts;
pub(crate) mod report;

use boltzana::{ConfigError, Cutoffs};

/// Per-category distance cutoffs, in the input structure's length unit.
#[derive(clap::Args, Debug, Clone, Copy)]
pub(crate) struct CutoffArgs {
    /// Distance cutoff for hydrogen bonds
    #[arg(long, default_value_t = 3.5)]
    hbond_cutoff: f64,

    /// Distance cutoff for salt bridges
    #[arg(long, default_value_t = 4.0)]
    salt_bridge_cutoff: f64,

    /// Distance cutoff for the aromatic stacking proxy
    #[arg(long, default_value_t = 5.0)]
    pi_pi_cutoff: f64,

    /// Distance cutoff for hydrophobic contacts
    #[arg(long, default_value_t = 4.0)]
    hydrophobic_cutoff: f64,
}

impl CutoffArgs {
    pub(crate) fn to_cutoffs(self) -> Result<Cutoffs, ConfigError> {
        Cutoffs::new(
            self.hbond_cutoff,
            self.salt_bridge_cutoff,
            self.pi_pi_cutoff,
            self.hydrophobic_cutoff,
        )
    }
}
