use serde::{Deserialize, Serialize};

/// Body style used to pick a row of the factor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    Sedan,
    Suv,
    Truck,
    Compact,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 4] = [
        VehicleClass::Sedan,
        VehicleClass::Suv,
        VehicleClass::Truck,
        VehicleClass::Compact,
    ];

    /// Case-insensitive match against the known classes.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "sedan" => Some(Self::Sedan),
            "suv" => Some(Self::Suv),
            "truck" => Some(Self::Truck),
            "compact" => Some(Self::Compact),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VehicleClass::Sedan => "sedan",
            VehicleClass::Suv => "suv",
            VehicleClass::Truck => "truck",
            VehicleClass::Compact => "compact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelKind {
    Petrol,
    Diesel,
    Hybrid,
    Electric,
}

impl FuelKind {
    pub const ALL: [FuelKind; 4] = [
        FuelKind::Petrol,
        FuelKind::Diesel,
        FuelKind::Hybrid,
        FuelKind::Electric,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "petrol" => Some(Self::Petrol),
            "diesel" => Some(Self::Diesel),
            "hybrid" => Some(Self::Hybrid),
            "electric" => Some(Self::Electric),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FuelKind::Petrol => "petrol",
            FuelKind::Diesel => "diesel",
            FuelKind::Hybrid => "hybrid",
            FuelKind::Electric => "electric",
        }
    }
}

/// Grams per kilometre for the three tracked pollutants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PollutantRates {
    pub co2: f64,
    pub nox: f64,
    pub pm: f64,
}

impl PollutantRates {
    const fn new(co2: f64, nox: f64, pm: f64) -> Self {
        Self { co2, nox, pm }
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            co2: self.co2 * factor,
            nox: self.nox * factor,
            pm: self.pm * factor,
        }
    }
}

/// One row of the factor table; every class offers every fuel.
struct FactorRow {
    petrol: PollutantRates,
    diesel: PollutantRates,
    hybrid: PollutantRates,
    electric: PollutantRates,
}

const ZERO: PollutantRates = PollutantRates::new(0.0, 0.0, 0.0);

const SEDAN: FactorRow = FactorRow {
    petrol: PollutantRates::new(120.0, 0.06, 0.005),
    diesel: PollutantRates::new(110.0, 0.50, 0.025),
    hybrid: PollutantRates::new(90.0, 0.04, 0.003),
    electric: ZERO,
};

const SUV: FactorRow = FactorRow {
    petrol: PollutantRates::new(180.0, 0.08, 0.007),
    diesel: PollutantRates::new(160.0, 0.70, 0.035),
    hybrid: PollutantRates::new(120.0, 0.05, 0.004),
    electric: ZERO,
};

const TRUCK: FactorRow = FactorRow {
    petrol: PollutantRates::new(250.0, 0.10, 0.010),
    diesel: PollutantRates::new(220.0, 0.90, 0.045),
    hybrid: PollutantRates::new(180.0, 0.07, 0.006),
    electric: ZERO,
};

const COMPACT: FactorRow = FactorRow {
    petrol: PollutantRates::new(100.0, 0.05, 0.004),
    diesel: PollutantRates::new(90.0, 0.40, 0.020),
    hybrid: PollutantRates::new(70.0, 0.03, 0.002),
    electric: ZERO,
};

fn row(class: VehicleClass) -> &'static FactorRow {
    match class {
        VehicleClass::Sedan => &SEDAN,
        VehicleClass::Suv => &SUV,
        VehicleClass::Truck => &TRUCK,
        VehicleClass::Compact => &COMPACT,
    }
}

/// Base rates in g/km for a class and fuel.
pub fn base_rates(class: VehicleClass, fuel: FuelKind) -> PollutantRates {
    let row = row(class);
    match fuel {
        FuelKind::Petrol => row.petrol,
        FuelKind::Diesel => row.diesel,
        FuelKind::Hybrid => row.hybrid,
        FuelKind::Electric => row.electric,
    }
}

/// Newer model years scale emissions down.
pub fn year_factor(year: i32) -> f64 {
    if year >= 2023 {
        0.9
    } else if year >= 2018 {
        1.0
    } else if year >= 2010 {
        1.2
    } else if year >= 2000 {
        1.5
    } else {
        2.0
    }
}

/// Displacement correction in litres. Electric drivetrains ignore it.
pub fn engine_factor(engine_size: f64, fuel: FuelKind) -> f64 {
    if fuel == FuelKind::Electric {
        return 1.0;
    }

    if engine_size <= 1.0 {
        0.8
    } else if engine_size <= 1.6 {
        1.0
    } else if engine_size <= 2.0 {
        1.2
    } else if engine_size <= 3.0 {
        1.5
    } else {
        2.0
    }
}
