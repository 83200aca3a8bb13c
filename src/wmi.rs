//! World Manufacturer Identifier lookup.
//!
//! A deliberately narrow, closed table covering the German OEM prefixes
//! this product handles — not a general WMI registry. A miss is not an
//! error; the caller simply gets no manufacturer name.

/// Look up the manufacturer for a 3-character WMI prefix.
pub fn wmi_manufacturer(wmi: &str) -> Option<&'static str> {
    WMI_PREFIXES
        .binary_search_by_key(&wmi, |&(prefix, _)| prefix)
        .ok()
        .map(|i| WMI_PREFIXES[i].1)
}

/// Known WMI prefix → manufacturer pairs. Sorted for binary search.
static WMI_PREFIXES: &[(&str, &str)] = &[
    ("W0L", "Opel"),
    ("WA1", "Audi"),
    ("WAU", "Audi"),
    ("WBA", "BMW"),
    ("WBS", "BMW M"),
    ("WBY", "BMW i"),
    ("WDB", "Mercedes-Benz"),
    ("WDC", "Mercedes-Benz"),
    ("WDD", "Mercedes-Benz"),
    ("WME", "smart"),
    ("WMW", "MINI"),
    ("WP0", "Porsche"),
    ("WP1", "Porsche"),
    ("WV1", "Volkswagen Commercial Vehicles"),
    ("WV2", "Volkswagen Commercial Vehicles"),
    ("WVG", "Volkswagen"),
    ("WVW", "Volkswagen"),
];
