//! Prebuilt blueprint builders.

use occupation::{Zheng07Centrals, Zheng07Satellites};
use phase_space::{NfwProfile, TrivialProfile};

use crate::blueprint::{ModelBlueprint, ModelOptions};
use crate::error::ConfigurationError;

/// Blueprint for the HOD model of Zheng et al. (2007), arXiv:0703457.
///
/// Two subpopulations. Central occupation statistics follow a nearest
/// integer distribution with an erf first moment, and centrals sit at the
/// exact center of the host halo. Satellite occupation statistics are
/// Poisson with a truncated power-law first moment, and satellites follow
/// an unbiased NFW profile.
///
/// Builds exactly the four features `centrals_occupation`,
/// `centrals_profile`, `satellites_occupation`, `satellites_profile`.
pub fn zheng07_blueprint(options: &ModelOptions) -> ModelBlueprint {
    let mut blueprint = ModelBlueprint::new();

    blueprint.insert_occupation(
        Zheng07Centrals::GAL_TYPE,
        Box::new(Zheng07Centrals::new(options.threshold)),
    );
    blueprint.insert_profile(
        Zheng07Centrals::GAL_TYPE,
        Box::new(TrivialProfile::new(Zheng07Centrals::GAL_TYPE)),
    );

    blueprint.insert_occupation(
        Zheng07Satellites::GAL_TYPE,
        Box::new(Zheng07Satellites::new(options.threshold)),
    );
    blueprint.insert_profile(
        Zheng07Satellites::GAL_TYPE,
        Box::new(NfwProfile::new(Zheng07Satellites::GAL_TYPE)),
    );

    blueprint
}

/// Looks up a blueprint builder by preset name.
pub fn prebuilt_blueprint(
    name: &str,
    options: &ModelOptions,
) -> Result<ModelBlueprint, ConfigurationError> {
    if !options.threshold.is_finite() {
        return Err(ConfigurationError::BadThreshold {
            threshold: options.threshold,
        });
    }
    match name {
        "zheng07" => Ok(zheng07_blueprint(options)),
        _ => Err(ConfigurationError::UnknownPreset {
            name: name.to_string(),
        }),
    }
}
