use crate::{field::Field, parser::Parser, CronError, Result};
use std::{fmt::Display, str::FromStr};

/// Represents a parsed cron schedule expression.
///
/// For the expression format and usage examples, please refer to the [crate documentation](crate).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
#[cfg_attr(feature = "serde", serde(into = "String"))]
pub struct Schedule {
    second: Field,
    minute: Field,
    hour: Field,
    dom: Field,
    month: Field,
    dow: Field,
}

impl Schedule {
    /// Parses provided `expression` and constructs [`Schedule`] instance.
    ///
    /// Alternative way to construct [`Schedule`] is to use one of `try_from` or `from_str` methods.
    ///
    /// Returns [`CronError`] with the expected grammar construct and the 1-based character
    /// position in a case provided expression doesn't conform to the format.
    pub fn new(expression: impl AsRef<str>) -> Result<Self> {
        Parser::new(expression.as_ref()).schedule()
    }

    pub(crate) fn from_fields(
        second: Field,
        minute: Field,
        hour: Field,
        dom: Field,
        month: Field,
        dow: Field,
    ) -> Self {
        Self {
            second,
            minute,
            hour,
            dom,
            month,
            dow,
        }
    }

    /// Seconds field, 0-59.
    pub fn second(&self) -> &Field {
        &self.second
    }

    /// Minutes field, 0-59.
    pub fn minute(&self) -> &Field {
        &self.minute
    }

    /// Hours field, 0-23.
    pub fn hour(&self) -> &Field {
        &self.hour
    }

    /// Days of month field, 1-31.
    pub fn day_of_month(&self) -> &Field {
        &self.dom
    }

    /// Months field, 1-12, with mnemonics `JAN`-`DEC` resolved to numbers.
    pub fn month(&self) -> &Field {
        &self.month
    }

    /// Days of week field, 0-6 with Sunday as 0, with mnemonics `SUN`-`SAT` resolved to numbers.
    pub fn day_of_week(&self) -> &Field {
        &self.dow
    }
}

impl From<Schedule> for String {
    fn from(value: Schedule) -> Self {
        value.to_string()
    }
}

impl From<&Schedule> for String {
    fn from(value: &Schedule) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Schedule {
    type Error = CronError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&String> for Schedule {
    type Error = CronError;

    fn try_from(value: &String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Schedule {
    type Error = CronError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for Schedule {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.second, self.minute, self.hour, self.dom, self.month, self.dow
        )
    }
}
