use auto_advisor::diagnosis;
use auto_advisor::emissions::{self, batch, BatchEstimate, EmissionEstimate, VehicleProfile};
use auto_advisor::error::AppError;
use auto_advisor::rng::EntropySource;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Body style: sedan, suv, truck, or compact (others fall back to sedan)
    #[arg(long)]
    pub(crate) vehicle_type: String,
    /// Fuel: petrol, diesel, hybrid, or electric (others fall back to petrol)
    #[arg(long)]
    pub(crate) fuel_type: String,
    /// Engine displacement in litres
    #[arg(long, default_value_t = 0.0)]
    pub(crate) engine_size: f64,
    /// Model year
    #[arg(long, default_value_t = 0)]
    pub(crate) year: i32,
    /// Seed the jitter and tip sampling for reproducible output
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV with vehicle_type,fuel_type,engine_size,year headers
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Seed the jitter and tip sampling for reproducible output
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

#[derive(Args, Debug)]
pub(crate) struct DiagnoseArgs {
    /// Free-text description of the problem
    #[arg(required = true, num_args = 1..)]
    pub(crate) text: Vec<String>,
    /// Seed the fallback issue pick for reproducible output
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

impl DiagnoseArgs {
    pub(crate) fn complaint(&self) -> String {
        self.text.join(" ")
    }
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let mut rng = EntropySource::from_seed(args.seed).rng();
    let profile = VehicleProfile {
        vehicle_type: args.vehicle_type,
        fuel_type: args.fuel_type,
        engine_size: args.engine_size,
        year: args.year,
    };

    let estimate = emissions::estimate(&profile, &mut rng);
    print!("{}", render_estimate(&profile, &estimate));
    Ok(())
}

pub(crate) fn run_batch_estimate(args: BatchArgs) -> Result<(), AppError> {
    let mut rng = EntropySource::from_seed(args.seed).rng();
    let rows = batch::estimate_path(&args.input, &mut rng)?;

    println!("Fleet estimate ({} vehicles)", rows.len());
    for row in &rows {
        println!("{}", render_batch_row(row));
    }
    Ok(())
}

pub(crate) fn run_diagnose(args: DiagnoseArgs) -> Result<(), AppError> {
    let mut rng = EntropySource::from_seed(args.seed).rng();
    let complaint = args.complaint();
    let diagnosis = diagnosis::diagnose_detailed(&complaint, &mut rng);

    println!("Category: {}", diagnosis.category.label());
    println!();
    println!("{}", diagnosis.response);
    Ok(())
}

fn render_estimate(profile: &VehicleProfile, estimate: &EmissionEstimate) -> String {
    let mut lines = vec![
        format!(
            "Emissions estimate for {} {} ({} L, {})",
            profile.vehicle_type, profile.fuel_type, profile.engine_size, profile.year
        ),
        format!("- CO2: {:.1} g/km", estimate.co2),
        format!("- NOx: {:.3} g/km", estimate.nox),
        format!("- PM: {:.4} g/km", estimate.pm),
        format!("- Rating: {}", estimate.rating.letter()),
    ];

    for warning in estimate.warnings() {
        lines.push(format!("- Note: {warning}"));
    }

    lines.push(String::new());
    lines.push("Recommendations".to_string());
    for tip in &estimate.recommendations {
        lines.push(format!("- {tip}"));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_batch_row(row: &BatchEstimate) -> String {
    format!(
        "{:>3}. {} {} {} L {} | CO2 {:.1} | NOx {:.3} | PM {:.4} | {}",
        row.row,
        row.profile.vehicle_type,
        row.profile.fuel_type,
        row.profile.engine_size,
        row.profile.year,
        row.estimate.co2,
        row.estimate.nox,
        row.estimate.pm,
        row.estimate.rating.letter()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use auto_advisor::emissions::EmissionRating;

    fn profile() -> VehicleProfile {
        VehicleProfile {
            vehicle_type: "suv".to_string(),
            fuel_type: "diesel".to_string(),
            engine_size: 2.2,
            year: 2014,
        }
    }

    fn estimate() -> EmissionEstimate {
        EmissionEstimate {
            co2: 289.4,
            nox: 1.264,
            pm: 0.0631,
            rating: EmissionRating::F,
            recommendations: vec!["Avoid excessive idling".to_string()],
            adjustments: Vec::new(),
        }
    }

    #[test]
    fn estimate_report_lists_pollutants_and_tips() {
        let text = render_estimate(&profile(), &estimate());
        assert!(text.starts_with("Emissions estimate for suv diesel (2.2 L, 2014)\n"));
        assert!(text.contains("- CO2: 289.4 g/km"));
        assert!(text.contains("- PM: 0.0631 g/km"));
        assert!(text.contains("- Rating: F"));
        assert!(text.ends_with("- Avoid excessive idling\n"));
    }

    #[test]
    fn batch_rows_fit_on_one_line() {
        let row = BatchEstimate {
            row: 7,
            profile: profile(),
            estimate: estimate(),
        };
        assert_eq!(
            render_batch_row(&row),
            "  7. suv diesel 2.2 L 2014 | CO2 289.4 | NOx 1.264 | PM 0.0631 | F"
        );
    }
}
