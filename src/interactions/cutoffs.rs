use super::structs::Interaction;
use crate::errors::ConfigError;
use std::collections::HashMap;

const HBOND_DIST: f64 = 3.5;
const SALT_BRIDGE_DIST: f64 = 4.0;
const PI_PI_DIST: f64 = 5.0;
const HYDROPHOBIC_DIST: f64 = 4.0;

/// Distance cutoffs per interaction category, in the structure's native
/// length unit.
///
/// A caller-supplied map must be complete: a missing or invalid key is a
/// [`ConfigError`], never a silent fallback. For a measurement tool a typo'd
/// key that quietly reverts to a default would corrupt results downstream,
/// so partial configurations fail closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cutoffs {
    hbond: f64,
    salt_bridge: f64,
    pi_pi: f64,
    hydrophobic: f64,
}

impl Default for Cutoffs {
    fn default() -> Self {
        Self {
            hbond: HBOND_DIST,
            salt_bridge: SALT_BRIDGE_DIST,
            pi_pi: PI_PI_DIST,
            hydrophobic: HYDROPHOBIC_DIST,
        }
    }
}

impl Cutoffs {
    /// Build from explicit per-category values.
    pub fn new(
        hbond: f64,
        salt_bridge: f64,
        pi_pi: f64,
        hydrophobic: f64,
    ) -> Result<Self, ConfigError> {
        let cutoffs = Self {
            hbond,
            salt_bridge,
            pi_pi,
            hydrophobic,
        };
        for category in Interaction::ALL {
            let value = cutoffs.get(category);
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidCutoff { category, value });
            }
        }
        Ok(cutoffs)
    }

    /// Build from a category-keyed map. All four keys are required.
    pub fn from_map(map: &HashMap<String, f64>) -> Result<Self, ConfigError> {
        let lookup = |category: Interaction| {
            map.get(category.key())
                .copied()
                .ok_or(ConfigError::MissingCutoff(category))
        };
        let hbond = lookup(Interaction::HydrogenBond)?;
        let salt_bridge = lookup(Interaction::SaltBridge)?;
        let pi_pi = lookup(Interaction::PiStacking)?;
        let hydrophobic = lookup(Interaction::Hydrophobic)?;
        Self::new(hbond, salt_bridge, pi_pi, hydrophobic)
    }

    /// The cutoff for one category.
    pub fn get(&self, category: Interaction) -> f64 {
        match category {
            Interaction::HydrogenBond => self.hbond,
            Interaction::SaltBridge => self.salt_bridge,
            Interaction::PiStacking => self.pi_pi,
            Interaction::Hydrophobic => self.hydrophobic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let cutoffs = Cutoffs::default();
        assert_eq!(cutoffs.get(Interaction::HydrogenBond), 3.5);
        assert_eq!(cutoffs.get(Interaction::SaltBridge), 4.0);
        assert_eq!(cutoffs.get(Interaction::PiStacking), 5.0);
        assert_eq!(cutoffs.get(Interaction::Hydrophobic), 4.0);
    }

    #[test]
    fn complete_map_is_accepted() {
        let map: HashMap<String, f64> = [
            ("hbond", 3.2),
            ("salt_bridge", 4.5),
            ("pi_pi", 5.5),
            ("hydrophobic", 3.9),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        let cutoffs = Cutoffs::from_map(&map).unwrap();
        assert_eq!(cutoffs.get(Interaction::HydrogenBond), 3.2);
        assert_eq!(cutoffs.get(Interaction::PiStacking), 5.5);
    }

    #[test]
    fn missing_key_fails_closed() {
        let map: HashMap<String, f64> = [("hbond", 3.5), ("salt_bridge", 4.0), ("hydrophobic", 4.0)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();

        assert_eq!(
            Cutoffs::from_map(&map),
            Err(ConfigError::MissingCutoff(Interaction::PiStacking))
        );
    }

    #[test]
    fn non_positive_cutoff_is_rejected() {
        assert_eq!(
            Cutoffs::new(3.5, -1.0, 5.0, 4.0),
            Err(ConfigError::InvalidCutoff {
                category: Interaction::SaltBridge,
                value: -1.0
            })
        );
        assert!(Cutoffs::new(3.5, 4.0, f64::NAN, 4.0).is_err());
        assert!(Cutoffs::new(0.0, 4.0, 5.0, 4.0).is_err());
    }
}
