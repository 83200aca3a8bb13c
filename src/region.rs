//! World region of origin from the first VIN character.
//!
//! ISO 3779 partitions the first WMI character into broad geographic
//! bands. The bands are encoded as explicit character-set membership
//! tests, matching the published convention character for character.

use std::fmt;

use serde::Serialize;

/// The six ISO 3779 region bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Region {
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    Oceania,
    SouthAmerica,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::Africa => "Africa",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::NorthAmerica => "North America",
            Region::Oceania => "Oceania",
            Region::SouthAmerica => "South America",
        };
        f.write_str(name)
    }
}

/// Region band for the first character of a VIN.
///
/// Returns `None` for characters outside the assigned bands (notably
/// `'0'`, which ISO 3779 leaves unassigned).
pub fn region_of_origin(first: char) -> Option<Region> {
    match first {
        // I, O, Q never occur in a VIN and belong to no band.
        'O' | 'Q' => None,
        'A'..='H' => Some(Region::Africa),
        'J'..='R' => Some(Region::Asia),
        'S'..='Z' => Some(Region::Europe),
        '1'..='5' => Some(Region::NorthAmerica),
        '6'..='7' => Some(Region::Oceania),
        '8'..='9' => Some(Region::SouthAmerica),
        _ => None,
    }
}
