use serde::Serialize;

/// Manufacturer shown on the comparison and maintenance pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Brand {
    pub name: &'static str,
}

const BRAND_NAMES: [&str; 15] = [
    "Toyota",
    "Honda",
    "Ford",
    "Chevrolet",
    "Nissan",
    "Volkswagen",
    "BMW",
    "Mercedes-Benz",
    "Audi",
    "Hyundai",
    "Kia",
    "Subaru",
    "Mazda",
    "Lexus",
    "Tesla",
];

pub fn brands() -> Vec<Brand> {
    BRAND_NAMES.iter().map(|&name| Brand { name }).collect()
}
