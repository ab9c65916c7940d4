use std::io::Read;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{estimate, EmissionEstimate, VehicleProfile};

/// One estimated row from a fleet CSV.
#[derive(Debug, Clone, Serialize)]
pub struct BatchEstimate {
    pub row: usize,
    pub profile: VehicleProfile,
    pub estimate: EmissionEstimate,
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("failed to read fleet file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid fleet CSV data: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct FleetRow {
    vehicle_type: String,
    fuel_type: String,
    engine_size: f64,
    year: i32,
}

impl From<FleetRow> for VehicleProfile {
    fn from(row: FleetRow) -> Self {
        Self {
            vehicle_type: row.vehicle_type,
            fuel_type: row.fuel_type,
            engine_size: row.engine_size,
            year: row.year,
        }
    }
}

pub fn estimate_path<P: AsRef<Path>, R: Rng + ?Sized>(
    path: P,
    rng: &mut R,
) -> Result<Vec<BatchEstimate>, BatchError> {
    let file = std::fs::File::open(path)?;
    estimate_reader(file, rng)
}

/// Estimate every row of a CSV with `vehicle_type,fuel_type,engine_size,year` headers.
///
/// Rows are numbered from 1, excluding the header.
pub fn estimate_reader<T: Read, R: Rng + ?Sized>(
    reader: T,
    rng: &mut R,
) -> Result<Vec<BatchEstimate>, BatchError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut estimates = Vec::new();

    for (index, record) in csv_reader.deserialize::<FleetRow>().enumerate() {
        let profile = VehicleProfile::from(record?);
        let result = estimate(&profile, rng);
        estimates.push(BatchEstimate {
            row: index + 1,
            profile,
            estimate: result,
        });
    }

    Ok(estimates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emissions::EmissionRating;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    #[test]
    fn estimates_each_row_in_order() {
        let csv = "vehicle_type,fuel_type,engine_size,year\n\
                   sedan, electric ,0,2024\n\
                   truck,diesel,4.2,1998\n";
        let mut rng = StdRng::seed_from_u64(2);
        let rows = estimate_reader(Cursor::new(csv), &mut rng).expect("batch parses");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row, 1);
        assert_eq!(rows[0].profile.fuel_type, "electric");
        assert_eq!(rows[0].estimate.rating, EmissionRating::A);
        assert_eq!(rows[1].row, 2);
        assert_eq!(rows[1].estimate.rating, EmissionRating::F);
    }

    #[test]
    fn rejects_non_numeric_engine_size() {
        let csv = "vehicle_type,fuel_type,engine_size,year\nsedan,petrol,big,2020\n";
        let mut rng = StdRng::seed_from_u64(2);
        let err = estimate_reader(Cursor::new(csv), &mut rng).expect_err("bad row");
        assert!(matches!(err, BatchError::Csv(_)));
    }
}
