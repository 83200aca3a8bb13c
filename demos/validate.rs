use fahrgestell::validate;

fn main() {
    println!("=== VIN Validation ===\n");

    let candidates = [
        "WBADT63452CK12345",     // BMW, check digit off (European convention)
        "1M8GDM9AXKP042788",     // check digit valid, WMI outside the table
        "wvwzzz1jzxw000001",     // lowercase input
        "WBA",                   // still typing
        "WBADT6345ICK12345",     // confusable letter
        "WBADT63452CK123456",    // too long
        "",                      // nothing entered
    ];

    for vin in &candidates {
        let result = validate(vin);
        if result.is_valid {
            let name = result.manufacturer.unwrap_or("unknown manufacturer");
            let check = if result.check_digit_valid {
                "check digit OK"
            } else {
                "check digit mismatch — soft warning"
            };
            println!(
                "  {:<22} => valid ({name}, {check})",
                result.normalized_vin.as_deref().unwrap_or_default()
            );
        } else {
            let error = result.error.expect("failed result carries an error");
            print!("  {vin:<22} => INVALID: {error}");
            if let Some(partial) = &result.partial_info {
                if let Some(name) = partial.manufacturer {
                    print!(" (looks like a {name})");
                }
            }
            println!();
        }
    }
}
