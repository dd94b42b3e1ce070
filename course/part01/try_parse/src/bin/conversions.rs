use try_parse::{
    config::DemoConfig,
    convert::{truncate, widen},
    parse_strict,
};

fn main() -> anyhow::Result<()> {
    try_parse::tracing_init::init()?;
    let config = DemoConfig::load()?;
    tracing::debug!(?config, "loaded config");

    let num = 10;
    let dbl_num = widen(num);
    println!("Implicit Conversion: Integer {num} -> Double {dbl_num}");

    let value = 9.78;
    let int_value = truncate(value);
    println!("Explicit Conversion: Double {value} -> Integer {int_value}");

    let s = "123";
    let parsed_num: i32 = parse_strict(s)?;
    println!("parse_strict: {parsed_num}");

    let (success, try_parsed_num) = try_parse::try_parse("456");
    println!("TryParse Success: {success}, Value: {try_parsed_num}");

    let str_value = num.to_string();
    println!("ToString Conversion: {str_value}");

    println!();
    for sample in &config.samples {
        let (success, value) = try_parse::try_parse(sample);
        println!("TryParse({sample:?}) Success: {success}, Value: {value}");
    }

    Ok(())
}
