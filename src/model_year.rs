//! Model year from the tenth VIN character.
//!
//! The year code cycles every 30 years (the same character means 1988,
//! 2018 and 2048). This table pins one fixed era, 2010–2039, and makes no
//! attempt to disambiguate between cycles — a documented limitation of
//! the product, not something to infer from other VIN positions.

/// Decode the model-year character (VIN position 10).
///
/// Letters skip I, O, Q (never valid) and U, Z, 0 (never used as year
/// codes). Returns `None` for any character outside the table.
pub fn model_year(code: char) -> Option<u16> {
    let year = match code {
        'A' => 2010,
        'B' => 2011,
        'C' => 2012,
        'D' => 2013,
        'E' => 2014,
        'F' => 2015,
        'G' => 2016,
        'H' => 2017,
        'J' => 2018,
        'K' => 2019,
        'L' => 2020,
        'M' => 2021,
        'N' => 2022,
        'P' => 2023,
        'R' => 2024,
        'S' => 2025,
        'T' => 2026,
        'V' => 2027,
        'W' => 2028,
        'X' => 2029,
        'Y' => 2030,
        '1' => 2031,
        '2' => 2032,
        '3' => 2033,
        '4' => 2034,
        '5' => 2035,
        '6' => 2036,
        '7' => 2037,
        '8' => 2038,
        '9' => 2039,
        _ => return None,
    };
    Some(year)
}
