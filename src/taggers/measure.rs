//! Measure grammar.
//!
//! Converts spoken measurements to written form:
//! - "two hundred meters" → "200 m"
//! - "eighteen point five kilometers" → "18.5 km"
//! - "two hundred kilometers per hour" → "200 km/h"
//! - "eighteen point one four percent" → "18.14%"

use lazy_static::lazy_static;

use super::cardinal::{strip_sign, words_to_number};
use super::decimal::{self, has_point};

lazy_static! {
    /// Spoken unit names and their written symbols, most specific first.
    /// Matching also requires a preceding space, so "centimeters" can
    /// never match through its "meters" tail.
    static ref UNITS: Vec<(&'static str, &'static str)> = vec![
        // Rates and compound units
        ("miles per hour", "mph"),
        ("kilometers per hour", "km/h"),
        ("gigabits per second", "gbps"),
        ("gigabit per second", "gbps"),
        ("megabits per second", "mbps"),
        ("megabit per second", "mbps"),
        // Energy
        ("kilo watt hours", "kWh"),
        ("kilowatt hours", "kWh"),
        ("watt hours", "Wh"),
        // Area and volume
        ("square kilometers", "km²"),
        ("square kilometer", "km²"),
        ("square meters", "m²"),
        ("square meter", "m²"),
        ("square feet", "sq ft"),
        ("square foot", "sq ft"),
        ("square miles", "sq mi"),
        ("square mile", "sq mi"),
        ("cubic meters", "m³"),
        ("cubic meter", "m³"),
        // Data
        ("petabytes", "pb"),
        ("gigabytes", "gb"),
        ("giga bytes", "gb"),
        ("megabytes", "mb"),
        ("mega bytes", "mb"),
        ("kilobytes", "kb"),
        ("bytes", "b"),
        // Power
        ("gigawatts", "GW"),
        ("gigawatt", "GW"),
        ("megawatts", "MW"),
        ("megawatt", "MW"),
        ("kilowatts", "kW"),
        ("kilowatt", "kW"),
        ("watts", "W"),
        ("watt", "W"),
        ("horsepower", "hp"),
        // Temperature
        ("degrees celsius", "°C"),
        ("degree celsius", "°C"),
        ("degrees fahrenheit", "°F"),
        ("degree fahrenheit", "°F"),
        ("kelvin", "K"),
        // Frequency
        ("megahertz", "MHz"),
        ("kilohertz", "kHz"),
        ("hertz", "Hz"),
        // Electrical
        ("millivolts", "mV"),
        ("volts", "V"),
        ("volt", "V"),
        // Length
        ("micrometers", "μm"),
        ("micrometer", "μm"),
        ("nanometers", "nm"),
        ("nanometer", "nm"),
        ("millimeters", "mm"),
        ("millimeter", "mm"),
        ("centimeters", "cm"),
        ("centimeter", "cm"),
        ("kilometers", "km"),
        ("kilometer", "km"),
        ("meters", "m"),
        ("meter", "m"),
        ("feet", "ft"),
        ("foot", "ft"),
        ("miles", "mi"),
        ("mile", "mi"),
        ("ounces", "oz"),
        ("ounce", "oz"),
        // Mass
        ("kilograms", "kg"),
        ("kilogram", "kg"),
        ("grams", "g"),
        ("gram", "g"),
        // Volume
        ("milliliters", "ml"),
        ("milliliter", "ml"),
        ("liters", "l"),
        ("liter", "l"),
        ("litres", "l"),
        ("litre", "l"),
        // Area
        ("hectares", "ha"),
        ("hectare", "ha"),
        // Time
        ("hours", "h"),
        ("hour", "h"),
        // Percent
        ("percent", "%"),
    ];
}

/// Parse a spoken measurement expression to written form.
pub fn parse(input: &str) -> Option<String> {
    let lowered = input.trim().to_lowercase();

    parse_simple(&lowered).or_else(|| parse_compound(&lowered))
}

/// Number followed by a known unit: "ninety grams" → "90 g".
fn parse_simple(lowered: &str) -> Option<String> {
    let (value, symbol) = number_with_unit(lowered)?;
    if symbol == "%" {
        return Some(format!("{value}%"));
    }
    Some(format!("{value} {symbol}"))
}

/// Per-unit rates the table does not list directly:
/// "fifty six per square kilometer" → "56 /km²",
/// "five liters per minute" → "5 l/min".
fn parse_compound(lowered: &str) -> Option<String> {
    if let Some((number_part, denom)) = lowered.split_once(" per square ") {
        let value = number_value(number_part)?;
        let unit = unit_symbol(denom)?;
        return Some(format!("{value} /{unit}²"));
    }
    if let Some((number_part, denom)) = lowered.split_once(" per cubic ") {
        let value = number_value(number_part)?;
        let unit = unit_symbol(denom)?;
        return Some(format!("{value} /{unit}³"));
    }

    let (left, denom) = lowered.split_once(" per ")?;
    let (value, unit) = number_with_unit(left)?;
    let denom_unit = unit_symbol(denom)?;
    Some(format!("{value} {unit}/{denom_unit}"))
}

/// Split a trailing unit off a spoken amount.
fn number_with_unit(input: &str) -> Option<(String, &'static str)> {
    let (negative, rest) = strip_sign(input);
    for (spoken, symbol) in UNITS.iter() {
        let Some(number_part) = rest.strip_suffix(spoken) else {
            continue;
        };
        if !number_part.ends_with(' ') {
            continue;
        }
        let Some(value) = number_value(number_part.trim_end()) else {
            continue;
        };
        let sign = if negative { "-" } else { "" };
        return Some((format!("{sign}{value}"), symbol));
    }
    None
}

fn number_value(phrase: &str) -> Option<String> {
    if has_point(phrase) {
        return decimal::parse(phrase);
    }
    words_to_number(phrase).map(|n| n.to_string())
}

/// Symbol for a bare unit name, as in rate denominators.
fn unit_symbol(name: &str) -> Option<&'static str> {
    let name = name.trim();
    for (spoken, symbol) in UNITS.iter() {
        if name == *spoken || name == spoken.trim_end_matches('s') {
            return Some(symbol);
        }
    }
    // Denominator-only units that never carry an amount of their own.
    match name {
        "second" | "seconds" => Some("s"),
        "minute" | "minutes" => Some("min"),
        "day" | "days" => Some("d"),
        _ => None,
    }
}
