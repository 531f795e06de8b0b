/// Common utility functions.
use crate::field::ItemValueType;

/// Converts string into a field value with bounds validation.
pub(crate) fn parse_digital_value(
    input: &str,
    min: ItemValueType,
    max: ItemValueType,
) -> Option<ItemValueType> {
    let value = input.parse::<ItemValueType>();
    if let Ok(value) = value {
        if value < min || value > max {
            None
        } else {
            Some(value)
        }
    } else {
        None
    }
}

/// Converts string with mnemonic value representation into its table index.
///
/// Lookup is exact-case: the tables hold 3-letter uppercase names and the
/// grammar doesn't fold case.
pub(crate) fn parse_string_value(input: &str, values: &[&str]) -> Option<ItemValueType> {
    if input.is_empty() {
        None
    } else {
        values.iter().position(|&x| x == input).map(|i| i as ItemValueType)
    }
}
