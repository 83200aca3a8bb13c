use fahrgestell::{is_partially_valid, partial_info};

fn main() {
    println!("=== Live-Typing Simulation ===\n");

    // Simulate a user typing a VIN one keystroke at a time, with a typo.
    let keystrokes = "WBADQT63452CK12345";
    let mut field = String::new();

    for key in keystrokes.chars() {
        let attempt = format!("{field}{key}");
        if is_partially_valid(&attempt) {
            field = attempt;
        } else {
            println!("  rejected keystroke '{key}' at {} chars", field.len());
            continue;
        }

        let preview = match partial_info(&field) {
            Some(info) => {
                let name = info.manufacturer.unwrap_or("unknown make");
                let region = info
                    .country_of_origin_region
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "unknown region".into());
                match info.model_year {
                    Some(year) => format!("{name}, {region}, model year {year}"),
                    None => format!("{name}, {region}"),
                }
            }
            None => "…".into(),
        };
        println!("  {field:<18} | {preview}");
    }
}
