//! Emissions estimation from vehicle class, fuel, displacement, and model year.
//!
//! The estimate is a base-rate lookup scaled by a model-year factor and an
//! engine-size factor, with a small per-pollutant jitter to mimic measurement
//! spread. Unknown vehicle classes fall back to `sedan` and unknown fuels to
//! `petrol`; every substitution is reported on the result so callers can show
//! it. Computation failures never escape: they collapse into
//! [`EmissionEstimate::fallback`].

pub mod batch;
pub mod factors;
pub mod rating;
pub mod recommendations;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

pub use batch::{BatchEstimate, BatchError};
pub use factors::{FuelKind, PollutantRates, VehicleClass};
pub use rating::EmissionRating;

const JITTER_LOW: f64 = 0.95;
const JITTER_HIGH: f64 = 1.05;

pub const FALLBACK_RECOMMENDATION: &str =
    "Unable to generate specific recommendations due to an error.";

/// Caller-supplied description of a vehicle, before any normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    pub vehicle_type: String,
    pub fuel_type: String,
    pub engine_size: f64,
    pub year: i32,
}

/// Record of an input that was replaced with a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputAdjustment {
    pub field: &'static str,
    pub supplied: String,
    pub substituted: &'static str,
}

impl InputAdjustment {
    pub fn message(&self) -> String {
        format!(
            "unknown {} '{}', estimated as {}",
            self.field, self.supplied, self.substituted
        )
    }
}

/// Pre-jitter view of an estimate: the looked-up rates and both correction factors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissionBreakdown {
    pub vehicle_class: VehicleClass,
    pub fuel: FuelKind,
    pub base: PollutantRates,
    pub year_factor: f64,
    pub engine_factor: f64,
    pub adjusted: PollutantRates,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub adjustments: Vec<InputAdjustment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissionEstimate {
    pub co2: f64,
    pub nox: f64,
    pub pm: f64,
    pub rating: EmissionRating,
    pub recommendations: Vec<String>,
    #[serde(skip)]
    pub adjustments: Vec<InputAdjustment>,
}

impl EmissionEstimate {
    /// Documented result returned whenever the computation itself fails.
    pub fn fallback() -> Self {
        Self {
            co2: 150.0,
            nox: 0.2,
            pm: 0.01,
            rating: EmissionRating::C,
            recommendations: vec![FALLBACK_RECOMMENDATION.to_string()],
            adjustments: Vec::new(),
        }
    }

    pub fn warnings(&self) -> Vec<String> {
        self.adjustments
            .iter()
            .map(InputAdjustment::message)
            .collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    #[error("engine size must be a finite number of litres, got {0}")]
    NonFiniteEngineSize(f64),
}

/// Estimate emissions, substituting the documented fallback on internal failure.
pub fn estimate<R: Rng + ?Sized>(profile: &VehicleProfile, rng: &mut R) -> EmissionEstimate {
    match try_estimate(profile, rng) {
        Ok(estimate) => estimate,
        Err(err) => {
            error!(error = %err, ?profile, "emissions estimate failed; returning fallback");
            EmissionEstimate::fallback()
        }
    }
}

pub fn try_estimate<R: Rng + ?Sized>(
    profile: &VehicleProfile,
    rng: &mut R,
) -> Result<EmissionEstimate, EstimateError> {
    let breakdown = breakdown(profile)?;
    let adjusted = breakdown.adjusted;

    let co2 = round_to(adjusted.co2 * jitter(rng), 1);
    let nox = round_to(adjusted.nox * jitter(rng), 3);
    let pm = round_to(adjusted.pm * jitter(rng), 4);

    Ok(EmissionEstimate {
        co2,
        nox,
        pm,
        rating: EmissionRating::for_rates(&adjusted),
        recommendations: recommendations::recommend(
            breakdown.fuel,
            profile.engine_size,
            profile.year,
            rng,
        ),
        adjustments: breakdown.adjustments,
    })
}

/// Deterministic part of the estimate, before jitter and rounding.
pub fn breakdown(profile: &VehicleProfile) -> Result<EmissionBreakdown, EstimateError> {
    if !profile.engine_size.is_finite() {
        return Err(EstimateError::NonFiniteEngineSize(profile.engine_size));
    }

    let mut adjustments = Vec::new();

    let vehicle_class = VehicleClass::parse(&profile.vehicle_type).unwrap_or_else(|| {
        warn!(supplied = %profile.vehicle_type, "unknown vehicle type, defaulting to sedan");
        adjustments.push(InputAdjustment {
            field: "vehicle_type",
            supplied: profile.vehicle_type.clone(),
            substituted: VehicleClass::Sedan.label(),
        });
        VehicleClass::Sedan
    });

    let fuel = FuelKind::parse(&profile.fuel_type).unwrap_or_else(|| {
        warn!(supplied = %profile.fuel_type, "unknown fuel type, defaulting to petrol");
        adjustments.push(InputAdjustment {
            field: "fuel_type",
            supplied: profile.fuel_type.clone(),
            substituted: FuelKind::Petrol.label(),
        });
        FuelKind::Petrol
    });
    let base = factors::base_rates(vehicle_class, fuel);

    let year_factor = factors::year_factor(profile.year);
    let engine_factor = factors::engine_factor(profile.engine_size, fuel);
    let adjusted = base.scaled(year_factor).scaled(engine_factor);

    Ok(EmissionBreakdown {
        vehicle_class,
        fuel,
        base,
        year_factor,
        engine_factor,
        adjusted,
        adjustments,
    })
}

fn jitter<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(JITTER_LOW..=JITTER_HIGH)
}

// Halves round away from zero rather than to even; after jitter a tie is rare and
// at most moves the last reported digit.
fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn profile(vehicle: &str, fuel: &str, engine_size: f64, year: i32) -> VehicleProfile {
        VehicleProfile {
            vehicle_type: vehicle.to_string(),
            fuel_type: fuel.to_string(),
            engine_size,
            year,
        }
    }

    #[test]
    fn new_small_engines_scale_by_both_minimum_factors() {
        for class in VehicleClass::ALL {
            for fuel in [FuelKind::Petrol, FuelKind::Diesel, FuelKind::Hybrid] {
                let base = factors::base_rates(class, fuel);
                let result = breakdown(&profile(class.label(), fuel.label(), 1.0, 2023))
                    .expect("breakdown");
                assert_eq!(result.adjusted.co2, base.co2 * 0.9 * 0.8);
                assert!(result.adjustments.is_empty());
            }
        }
    }

    #[test]
    fn electric_engine_size_has_no_effect() {
        let small = breakdown(&profile("suv", "electric", 0.5, 2019)).expect("small");
        let large = breakdown(&profile("suv", "electric", 7.0, 2019)).expect("large");
        assert_eq!(small.engine_factor, 1.0);
        assert_eq!(large.engine_factor, 1.0);
        assert_eq!(small.adjusted, large.adjusted);
    }

    #[test]
    fn unknown_vehicle_uses_sedan_rates() {
        let result = breakdown(&profile("spaceship", "diesel", 1.5, 2019)).expect("breakdown");
        assert_eq!(result.vehicle_class, VehicleClass::Sedan);
        assert_eq!(
            result.base,
            factors::base_rates(VehicleClass::Sedan, FuelKind::Diesel)
        );
        assert_eq!(result.adjustments.len(), 1);
        assert_eq!(result.adjustments[0].field, "vehicle_type");
    }

    #[test]
    fn unknown_fuel_uses_vehicle_petrol_rates() {
        let result = breakdown(&profile("Truck", "hydrogen", 1.5, 2019)).expect("breakdown");
        assert_eq!(result.vehicle_class, VehicleClass::Truck);
        assert_eq!(result.fuel, FuelKind::Petrol);
        assert_eq!(
            result.base,
            factors::base_rates(VehicleClass::Truck, FuelKind::Petrol)
        );
        assert_eq!(
            result.adjustments[0].message(),
            "unknown fuel_type 'hydrogen', estimated as petrol"
        );
    }

    #[test]
    fn jitter_stays_within_five_percent() {
        let vehicle = profile("truck", "diesel", 2.5, 2015);
        let adjusted = breakdown(&vehicle).expect("breakdown").adjusted;
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = estimate(&vehicle, &mut rng);
            assert!(result.co2 >= round_to(adjusted.co2 * JITTER_LOW, 1));
            assert!(result.co2 <= round_to(adjusted.co2 * JITTER_HIGH, 1));
            assert!(result.nox >= round_to(adjusted.nox * JITTER_LOW, 3));
            assert!(result.nox <= round_to(adjusted.nox * JITTER_HIGH, 3));
            assert!(result.pm >= round_to(adjusted.pm * JITTER_LOW, 4));
            assert!(result.pm <= round_to(adjusted.pm * JITTER_HIGH, 4));
        }
    }

    #[test]
    fn each_pollutant_draws_its_own_jitter() {
        // truck diesel 4.0 L from 1995: 880 g CO2, 3.6 g NOx, 0.18 g PM, so rounding
        // moves each ratio by well under 0.001
        let vehicle = profile("truck", "diesel", 4.0, 1995);
        let adjusted = breakdown(&vehicle).expect("breakdown").adjusted;

        let spread_seen = (0..20).any(|seed| {
            let result = estimate(&vehicle, &mut StdRng::seed_from_u64(seed));
            let co2 = result.co2 / adjusted.co2;
            let nox = result.nox / adjusted.nox;
            let pm = result.pm / adjusted.pm;
            (co2 - nox).abs() > 0.005 || (co2 - pm).abs() > 0.005 || (nox - pm).abs() > 0.005
        });
        assert!(spread_seen, "pollutants moved together on every seed");
    }

    #[test]
    fn rating_uses_pre_jitter_values() {
        // truck diesel 2.5 L from 2015: 220 * 1.2 * 1.5 = 396 -> score well into F
        let vehicle = profile("truck", "diesel", 2.5, 2015);
        let mut rng = StdRng::seed_from_u64(1);
        let result = estimate(&vehicle, &mut rng);
        let adjusted = breakdown(&vehicle).expect("breakdown").adjusted;
        assert_eq!(result.rating, EmissionRating::for_rates(&adjusted));
        assert_eq!(result.rating, EmissionRating::F);
    }

    #[test]
    fn seeded_generators_reproduce_estimates() {
        let vehicle = profile("compact", "hybrid", 1.4, 2021);
        let first = estimate(&vehicle, &mut StdRng::seed_from_u64(99));
        let second = estimate(&vehicle, &mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }

    #[test]
    fn electric_estimates_are_zero_and_rated_a() {
        let vehicle = profile("sedan", "electric", 0.0, 2024);
        let result = estimate(&vehicle, &mut StdRng::seed_from_u64(4));
        assert_eq!((result.co2, result.nox, result.pm), (0.0, 0.0, 0.0));
        assert_eq!(result.rating, EmissionRating::A);
        assert_eq!(result.recommendations.len(), 3);
    }

    #[test]
    fn non_finite_engine_size_returns_fallback() {
        let vehicle = profile("sedan", "petrol", f64::NAN, 2020);
        let result = estimate(&vehicle, &mut StdRng::seed_from_u64(0));
        assert_eq!(result, EmissionEstimate::fallback());
        assert_eq!(result.recommendations, vec![FALLBACK_RECOMMENDATION]);
    }

    #[test]
    fn rounding_matches_reported_precision() {
        assert_eq!(round_to(123.456, 1), 123.5);
        assert_eq!(round_to(0.123456, 3), 0.123);
        assert_eq!(round_to(0.0123456, 4), 0.0123);
    }
}
