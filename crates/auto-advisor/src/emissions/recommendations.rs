use rand::seq::SliceRandom;
use rand::Rng;

use super::factors::FuelKind;

pub const GENERAL_TIPS: [&str; 5] = [
    "Maintain proper tire pressure to reduce rolling resistance",
    "Remove excess weight from your vehicle",
    "Use recommended grade of motor oil",
    "Avoid excessive idling",
    "Plan and combine trips to reduce cold starts",
];

pub const TUNE_UP_TIP: &str = "Consider regular engine tune-ups for optimal efficiency";
pub const NEWER_VEHICLE_TIP: &str = "Newer vehicles have significantly better emissions controls";
pub const DOWNSIZE_TIP: &str =
    "Consider downsizing to a vehicle with a smaller engine for better efficiency";
pub const ALTERNATIVE_FUEL_TIP: &str =
    "Modern diesel or hybrid vehicles may offer better emissions performance";

const GENERAL_SAMPLE: usize = 3;
const MAX_RECOMMENDATIONS: usize = 5;

/// Three sampled general tips followed by vehicle-specific advice, capped at five.
pub(crate) fn recommend<R: Rng + ?Sized>(
    fuel: FuelKind,
    engine_size: f64,
    year: i32,
    rng: &mut R,
) -> Vec<String> {
    let mut tips: Vec<String> = GENERAL_TIPS
        .choose_multiple(rng, GENERAL_SAMPLE)
        .map(|tip| tip.to_string())
        .collect();

    if fuel != FuelKind::Electric {
        tips.push(TUNE_UP_TIP.to_string());

        if year < 2010 {
            tips.push(NEWER_VEHICLE_TIP.to_string());
        }
        if engine_size > 2.0 {
            tips.push(DOWNSIZE_TIP.to_string());
        }
        if fuel == FuelKind::Petrol && year >= 2010 {
            tips.push(ALTERNATIVE_FUEL_TIP.to_string());
        }
    }

    tips.truncate(MAX_RECOMMENDATIONS);
    tips
}
