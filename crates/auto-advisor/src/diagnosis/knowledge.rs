use serde::{Deserialize, Serialize};

/// Problem domain a complaint is filed under. Declaration order is the
/// tie-break order used by classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Engine,
    Transmission,
    Brakes,
    Electrical,
    Fuel,
    Cooling,
    Suspension,
    Exhaust,
    Oil,
    General,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Engine,
        Category::Transmission,
        Category::Brakes,
        Category::Electrical,
        Category::Fuel,
        Category::Cooling,
        Category::Suspension,
        Category::Exhaust,
        Category::Oil,
        Category::General,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Engine => "engine",
            Category::Transmission => "transmission",
            Category::Brakes => "brakes",
            Category::Electrical => "electrical",
            Category::Fuel => "fuel",
            Category::Cooling => "cooling",
            Category::Suspension => "suspension",
            Category::Exhaust => "exhaust",
            Category::Oil => "oil",
            Category::General => "general",
        }
    }

    /// Trigger keywords; `General` has none and is only reached as a fallback.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Engine => &[
                "engine",
                "motor",
                "misfire",
                "knocking",
                "stalling",
                "power",
                "performance",
                "rpm",
                "acceleration",
                "idle",
                "start",
                "turnover",
            ],
            Category::Transmission => &[
                "transmission",
                "gear",
                "shifting",
                "clutch",
                "gearbox",
                "automatic",
                "manual",
                "slipping",
                "grinding",
            ],
            Category::Brakes => &[
                "brakes",
                "stopping",
                "pedal",
                "abs",
                "brake pad",
                "rotor",
                "squeal",
                "grinding",
                "stopping distance",
            ],
            Category::Electrical => &[
                "battery",
                "electrical",
                "light",
                "headlight",
                "alternator",
                "fuse",
                "spark",
                "ignition",
                "starter",
                "radio",
                "dashboard",
                "computer",
                "sensor",
            ],
            Category::Fuel => &[
                "fuel",
                "gas",
                "mileage",
                "consumption",
                "economy",
                "mpg",
                "efficiency",
                "tank",
                "petrol",
                "diesel",
                "injector",
            ],
            Category::Cooling => &[
                "overheat",
                "temperature",
                "cooling",
                "radiator",
                "coolant",
                "thermostat",
                "fan",
                "water pump",
                "heat",
            ],
            Category::Suspension => &[
                "suspension",
                "shock",
                "strut",
                "bouncing",
                "spring",
                "ride",
                "handling",
                "steering",
                "alignment",
                "wheel",
                "tire",
                "tyre",
                "flat",
            ],
            Category::Exhaust => &[
                "exhaust",
                "emissions",
                "smoke",
                "smog",
                "muffler",
                "catalytic",
                "converter",
                "pipe",
                "noise",
            ],
            Category::Oil => &[
                "oil",
                "leak",
                "lubrication",
                "pressure",
                "synthetic",
                "change",
                "viscosity",
                "level",
                "consumption",
            ],
            Category::General => &[],
        }
    }

    pub fn issues(&self) -> &'static [Issue] {
        match self {
            Category::Engine => ENGINE,
            Category::Transmission => TRANSMISSION,
            Category::Brakes => BRAKES,
            Category::Electrical => ELECTRICAL,
            Category::Fuel => FUEL,
            Category::Cooling => COOLING,
            Category::Suspension => SUSPENSION,
            Category::Exhaust => EXHAUST,
            Category::Oil => OIL,
            Category::General => GENERAL,
        }
    }
}

/// A known vehicle problem with its canned advice.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub problem: &'static str,
    pub causes: &'static [&'static str],
    pub symptoms: &'static [&'static str],
    pub solutions: &'static [&'static str],
    pub mechanic_visit: &'static str,
}

const ENGINE: &[Issue] = &[
    Issue {
        problem: "Engine not starting",
        causes: &[
            "Dead battery",
            "Faulty starter",
            "Fuel delivery problem",
            "Ignition system issue",
        ],
        symptoms: &[
            "Click sound when turning key",
            "No sound when turning key",
            "Engine cranks but doesn't start",
        ],
        solutions: &[
            "Check battery connections",
            "Test battery voltage",
            "Inspect starter",
            "Check fuel pump and injectors",
        ],
        mechanic_visit: "Maybe - Depends on your diagnostic skills and the specific cause",
    },
    Issue {
        problem: "Engine misfiring",
        causes: &[
            "Faulty spark plugs",
            "Bad ignition coils",
            "Clogged fuel injectors",
            "Vacuum leak",
        ],
        symptoms: &[
            "Rough idle",
            "Hesitation when accelerating",
            "Reduced power",
            "Check engine light",
        ],
        solutions: &[
            "Replace spark plugs",
            "Check ignition coils",
            "Clean fuel injectors",
            "Check for vacuum leaks",
        ],
        mechanic_visit: "Maybe - If replacing spark plugs doesn't solve the issue",
    },
    Issue {
        problem: "Engine overheating",
        causes: &[
            "Low coolant level",
            "Faulty thermostat",
            "Bad water pump",
            "Radiator issues",
        ],
        symptoms: &[
            "Temperature gauge reading high",
            "Steam from hood",
            "Engine power loss",
        ],
        solutions: &[
            "Check coolant level",
            "Inspect cooling system for leaks",
            "Test thermostat",
            "Check water pump",
        ],
        mechanic_visit: "Yes - Overheating can cause serious engine damage if not addressed quickly",
    },
];

const TRANSMISSION: &[Issue] = &[
    Issue {
        problem: "Transmission slipping",
        causes: &[
            "Low transmission fluid",
            "Worn clutch",
            "Faulty solenoids",
            "Internal wear",
        ],
        symptoms: &[
            "Engine revs but car doesn't accelerate properly",
            "Unexpected gear changes",
            "Delays in acceleration",
        ],
        solutions: &[
            "Check transmission fluid level and condition",
            "Inspect clutch (manual transmission)",
            "Scan for trouble codes",
        ],
        mechanic_visit: "Yes - Transmission issues usually require professional diagnosis",
    },
    Issue {
        problem: "Hard shifting",
        causes: &[
            "Low transmission fluid",
            "Faulty shift solenoid",
            "Clutch problems",
            "Transmission control module issues",
        ],
        symptoms: &[
            "Difficulty changing gears",
            "Grinding noise when shifting",
            "Delayed engagement",
        ],
        solutions: &[
            "Check transmission fluid",
            "Inspect clutch pedal free play (manual)",
            "Scan for trouble codes",
        ],
        mechanic_visit: "Yes - Most transmission issues require professional service",
    },
];

const BRAKES: &[Issue] = &[
    Issue {
        problem: "Squeaking or squealing brakes",
        causes: &[
            "Worn brake pads",
            "Glazed pads or rotors",
            "Lack of lubrication on backing plates",
        ],
        symptoms: &[
            "High-pitched noise when braking",
            "Noise disappears when brakes are applied firmly",
        ],
        solutions: &[
            "Inspect brake pad thickness",
            "Check for uneven wear",
            "Apply brake lubricant to appropriate parts",
        ],
        mechanic_visit:
            "Maybe - Brake pad replacement can be DIY but requires proper tools and knowledge",
    },
    Issue {
        problem: "Spongy brake pedal",
        causes: &[
            "Air in brake lines",
            "Brake fluid leak",
            "Faulty master cylinder",
            "Failing brake booster",
        ],
        symptoms: &[
            "Brake pedal feels soft",
            "Pedal goes closer to floor than usual",
            "Reduced braking effectiveness",
        ],
        solutions: &[
            "Check brake fluid level",
            "Inspect for leaks",
            "Bleed brake system",
        ],
        mechanic_visit: "Yes - Brake system issues affecting performance are safety critical",
    },
];

const ELECTRICAL: &[Issue] = &[
    Issue {
        problem: "Battery not holding charge",
        causes: &[
            "Old battery",
            "Faulty alternator",
            "Parasitic drain",
            "Loose connections",
        ],
        symptoms: &[
            "Difficulty starting",
            "Headlights dim when idle",
            "Battery warning light on dashboard",
        ],
        solutions: &[
            "Test battery voltage",
            "Check alternator output",
            "Look for parasitic draws",
            "Clean battery terminals",
        ],
        mechanic_visit: "No - Battery testing and replacement is usually simple",
    },
    Issue {
        problem: "Lights not working properly",
        causes: &["Blown bulbs", "Bad fuse", "Wiring issue", "Switch malfunction"],
        symptoms: &["Lights don't turn on", "Intermittent operation", "Dimming"],
        solutions: &[
            "Check and replace bulbs",
            "Inspect fuses",
            "Test switches",
            "Look for wiring damage",
        ],
        mechanic_visit: "No - Most light issues are user serviceable",
    },
];

const FUEL: &[Issue] = &[
    Issue {
        problem: "Poor fuel economy",
        causes: &[
            "Clogged air filter",
            "Faulty oxygen sensor",
            "Bad spark plugs",
            "Incorrect tire pressure",
        ],
        symptoms: &[
            "More frequent refueling",
            "Reduced range",
            "Higher fuel costs",
        ],
        solutions: &[
            "Replace air filter",
            "Check and correct tire pressure",
            "Inspect spark plugs",
            "Scan for sensor issues",
        ],
        mechanic_visit: "No - Many fuel economy issues can be addressed with basic maintenance",
    },
    Issue {
        problem: "Fuel smell",
        causes: &[
            "Fuel line leak",
            "Loose gas cap",
            "Faulty EVAP system",
            "Injector leaks",
        ],
        symptoms: &["Gasoline odor", "Visible leaks", "Check engine light"],
        solutions: &["Check gas cap", "Inspect fuel lines", "Look for visible leaks"],
        mechanic_visit: "Yes - Fuel leaks are a fire hazard and should be addressed immediately",
    },
];

const COOLING: &[Issue] = &[Issue {
    problem: "Coolant leak",
    causes: &[
        "Radiator crack",
        "Loose hose clamp",
        "Blown head gasket",
        "Bad water pump",
    ],
    symptoms: &[
        "Low coolant level",
        "Puddles under car",
        "Sweet smell",
        "Overheating",
    ],
    solutions: &[
        "Check all hoses and connections",
        "Pressure test cooling system",
        "Inspect radiator",
    ],
    mechanic_visit: "Yes - Cooling system issues can lead to engine damage",
}];

const SUSPENSION: &[Issue] = &[
    Issue {
        problem: "Bouncy ride",
        causes: &[
            "Worn shock absorbers",
            "Damaged springs",
            "Loose components",
        ],
        symptoms: &[
            "Car bounces excessively after bumps",
            "Dipping when braking",
            "Swaying during turns",
        ],
        solutions: &[
            "Inspect shocks for leaks",
            "Check springs for damage",
            "Tighten all suspension components",
        ],
        mechanic_visit: "Yes - Suspension work usually requires special tools and knowledge",
    },
    Issue {
        problem: "Uneven tire wear",
        causes: &[
            "Misalignment",
            "Improper inflation",
            "Worn suspension components",
            "Balancing issues",
        ],
        symptoms: &[
            "Tires wearing on inside/outside edges",
            "Steering wheel vibration",
            "Car pulls to one side",
        ],
        solutions: &[
            "Check tire pressure",
            "Rotate tires",
            "Get wheel alignment",
            "Balance wheels",
        ],
        mechanic_visit: "Yes - Alignment requires specialized equipment",
    },
];

const EXHAUST: &[Issue] = &[Issue {
    problem: "Loud exhaust",
    causes: &[
        "Hole in muffler",
        "Broken exhaust pipe",
        "Damaged catalytic converter",
        "Exhaust leak at joint",
    ],
    symptoms: &["Increased noise", "Rumbling sound", "Hissing near engine"],
    solutions: &[
        "Inspect entire exhaust system",
        "Look for rust, holes or damaged parts",
    ],
    mechanic_visit: "Yes - Exhaust repairs often require welding or special tools",
}];

const OIL: &[Issue] = &[Issue {
    problem: "Oil leak",
    causes: &[
        "Loose oil filter",
        "Bad gasket",
        "Worn seals",
        "Oil pan damage",
    ],
    symptoms: &[
        "Oil spots where car is parked",
        "Burning smell",
        "Low oil level",
        "Oil pressure warning",
    ],
    solutions: &[
        "Check oil level",
        "Inspect for visible leaks",
        "Tighten oil filter",
        "Consider using stop-leak additive for minor leaks",
    ],
    mechanic_visit: "Maybe - Depends on the source and severity of the leak",
}];

const GENERAL: &[Issue] = &[Issue {
    problem: "Check engine light on",
    causes: &[
        "Various sensor issues",
        "Emissions problems",
        "Engine misfires",
        "Loose gas cap",
    ],
    symptoms: &[
        "Warning light on dashboard",
        "Possible performance issues",
        "Failed emissions test",
    ],
    solutions: &[
        "Check gas cap",
        "Use OBD-II scanner to read codes",
        "Address specific issue indicated by code",
    ],
    mechanic_visit: "Maybe - Depends on the specific code and your comfort level with repairs",
}];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_general_lacks_keywords() {
        for category in Category::ALL {
            assert_eq!(
                category.keywords().is_empty(),
                category == Category::General,
                "{}",
                category.label()
            );
        }
    }

    #[test]
    fn every_category_has_at_least_one_issue() {
        for category in Category::ALL {
            assert!(!category.issues().is_empty(), "{}", category.label());
        }
    }

    #[test]
    fn catalog_sizes_match_expected_layout() {
        let counts: Vec<usize> = Category::ALL
            .iter()
            .map(|category| category.issues().len())
            .collect();
        assert_eq!(counts, vec![3, 2, 2, 2, 2, 1, 2, 1, 1, 1]);
    }
}
