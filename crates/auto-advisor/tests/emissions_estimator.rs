use auto_advisor::emissions::{
    self, factors, EmissionEstimate, EmissionRating, FuelKind, VehicleClass, VehicleProfile,
};
use auto_advisor::forms::EstimateForm;
use auto_advisor::rng::EntropySource;
use std::collections::HashSet;

fn profile(vehicle: &str, fuel: &str, engine_size: f64, year: i32) -> VehicleProfile {
    VehicleProfile {
        vehicle_type: vehicle.to_string(),
        fuel_type: fuel.to_string(),
        engine_size,
        year,
    }
}

#[test]
fn form_submission_produces_complete_estimate() {
    let form = EstimateForm {
        vehicle_type: Some("SUV".to_string()),
        fuel_type: Some("Petrol".to_string()),
        engine_size: Some("2.0".to_string()),
        year: Some("2019".to_string()),
    };
    let vehicle = form.into_profile().expect("valid form");
    let mut rng = EntropySource::Seeded(2024).rng();

    let estimate = emissions::estimate(&vehicle, &mut rng);

    // 180 g/km * 1.0 (2019) * 1.2 (2.0 L) = 216 g/km before jitter; score 3.96
    assert!(estimate.co2 >= 205.2 && estimate.co2 <= 226.8, "{}", estimate.co2);
    assert_eq!(estimate.rating, EmissionRating::D);
    assert!(estimate.adjustments.is_empty());
    assert!(estimate
        .recommendations
        .iter()
        .any(|tip| tip == emissions::recommendations::ALTERNATIVE_FUEL_TIP));
}

#[test]
fn every_known_pair_uses_its_own_rates() {
    for class in VehicleClass::ALL {
        for fuel in FuelKind::ALL {
            let breakdown = emissions::breakdown(&profile(class.label(), fuel.label(), 1.6, 2018))
                .expect("breakdown");
            assert_eq!(breakdown.vehicle_class, class);
            assert_eq!(breakdown.fuel, fuel);
            assert_eq!(breakdown.adjusted, factors::base_rates(class, fuel));
        }
    }
}

#[test]
fn substitution_is_visible_to_callers() {
    let mut rng = EntropySource::Seeded(1).rng();
    let estimate = emissions::estimate(&profile("zeppelin", "steam", 1.2, 2015), &mut rng);
    assert_eq!(
        estimate.warnings(),
        vec![
            "unknown vehicle_type 'zeppelin', estimated as sedan".to_string(),
            "unknown fuel_type 'steam', estimated as petrol".to_string(),
        ]
    );
}

#[test]
fn recommendation_counts_stay_in_range() {
    let years = [1985, 2005, 2012, 2020, 2025];
    let sizes = [0.0, 1.4, 2.0, 2.8, 5.0];
    let mut rng = EntropySource::Seeded(77).rng();

    for class in VehicleClass::ALL {
        for fuel in FuelKind::ALL {
            for year in years {
                for size in sizes {
                    let estimate =
                        emissions::estimate(&profile(class.label(), fuel.label(), size, year), &mut rng);
                    let count = estimate.recommendations.len();
                    assert!((3..=5).contains(&count), "{count} tips");
                    let general: HashSet<&String> =
                        estimate.recommendations.iter().take(3).collect();
                    assert_eq!(general.len(), 3);
                }
            }
        }
    }
}

#[test]
fn infinite_engine_size_yields_documented_fallback() {
    let mut rng = EntropySource::Seeded(5).rng();
    let estimate = emissions::estimate(&profile("sedan", "diesel", f64::INFINITY, 2010), &mut rng);
    assert_eq!(estimate, EmissionEstimate::fallback());
    assert_eq!(estimate.rating, EmissionRating::C);
    assert_eq!(estimate.co2, 150.0);
}

#[test]
fn estimate_serializes_with_public_keys_only() {
    let mut rng = EntropySource::Seeded(9).rng();
    let estimate = emissions::estimate(&profile("compact", "electric", 0.0, 2024), &mut rng);
    let value = serde_json::to_value(&estimate).expect("serialize");
    let object = value.as_object().expect("object");
    let keys: HashSet<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        HashSet::from(["co2", "nox", "pm", "rating", "recommendations"])
    );
    assert_eq!(object["rating"], serde_json::json!("A"));
}
