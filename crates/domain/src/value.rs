use std::{fmt, slice::Iter};

use derive_more::{AsRef, Display, Into};

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.len();

        if len > 64 {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}

/// An `#RRGGBB` color, normalized to uppercase hex digits.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq)]
pub struct Color(String);

impl Color {
    pub fn new(value: &str) -> Result<Self, ColorError> {
        let value = value.trim();

        if value.len() != 7 || !value.starts_with('#') {
            return Err(ColorError::Format(value.to_string()));
        }

        if !value[1..].chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::Format(value.to_string()));
        }

        Ok(Color(value.to_uppercase()))
    }

    #[must_use]
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |i| u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or(0);
        (channel(1), channel(3), channel(5))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ColorError {
    #[error("Color must have the form #RRGGBB ({0:?})")]
    Format(String),
}

/// Number of sets prescribed for one exercise.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sets(u32);

impl Sets {
    pub fn new(value: u32) -> Result<Self, SetsError> {
        if value == 0 {
            return Err(SetsError::Zero);
        }

        Ok(Self(value))
    }
}

impl Default for Sets {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<&str> for Sets {
    type Error = SetsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Sets::new(parsed_value),
            Err(_) => Err(SetsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SetsError {
    #[error("Sets must be 1 or more")]
    Zero,
    #[error("Sets must be an integer")]
    ParseError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn iter() -> Iter<'static, Weekday> {
        static DAYS: [Weekday; 7] = [
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ];
        DAYS.iter()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for Weekday {
    type Error = WeekdayError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "monday" => Ok(Weekday::Monday),
            "tuesday" => Ok(Weekday::Tuesday),
            "wednesday" => Ok(Weekday::Wednesday),
            "thursday" => Ok(Weekday::Thursday),
            "friday" => Ok(Weekday::Friday),
            "saturday" => Ok(Weekday::Saturday),
            "sunday" => Ok(Weekday::Sunday),
            _ => Err(WeekdayError::Unknown(value.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeekdayError {
    #[error("Unknown weekday {0:?}")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Alice", Ok(Name("Alice".to_string())))]
    #[case(" Alice ", Ok(Name("Alice".to_string())))]
    #[case("", Err(NameError::Empty))]
    #[case("  ", Err(NameError::Empty))]
    #[case(&"X".repeat(65), Err(NameError::TooLong(65)))]
    fn test_name_new(#[case] name: &str, #[case] expected: Result<Name, NameError>) {
        assert_eq!(Name::new(name), expected);
    }

    #[rstest]
    #[case("#F97316", Ok(Color("#F97316".to_string())))]
    #[case("#f97316", Ok(Color("#F97316".to_string())))]
    #[case(" #10B981 ", Ok(Color("#10B981".to_string())))]
    #[case("F97316", Err(ColorError::Format("F97316".to_string())))]
    #[case("#F9731", Err(ColorError::Format("#F9731".to_string())))]
    #[case("#F9731G", Err(ColorError::Format("#F9731G".to_string())))]
    fn test_color_new(#[case] value: &str, #[case] expected: Result<Color, ColorError>) {
        assert_eq!(Color::new(value), expected);
    }

    #[test]
    fn test_color_rgb() {
        assert_eq!(Color::new("#F97316").unwrap().rgb(), (0xF9, 0x73, 0x16));
        assert_eq!(Color::new("#000000").unwrap().rgb(), (0, 0, 0));
    }

    #[rstest]
    #[case(1, Ok(Sets(1)))]
    #[case(10, Ok(Sets(10)))]
    #[case(0, Err(SetsError::Zero))]
    fn test_sets_new(#[case] value: u32, #[case] expected: Result<Sets, SetsError>) {
        assert_eq!(Sets::new(value), expected);
    }

    #[rstest]
    #[case("3", Ok(Sets(3)))]
    #[case("0", Err(SetsError::Zero))]
    #[case("three", Err(SetsError::ParseError))]
    fn test_sets_try_from_str(#[case] value: &str, #[case] expected: Result<Sets, SetsError>) {
        assert_eq!(Sets::try_from(value), expected);
    }

    #[test]
    fn test_sets_default() {
        assert_eq!(Sets::default(), Sets(3));
    }

    #[rstest]
    #[case("Monday", Ok(Weekday::Monday))]
    #[case("monday", Ok(Weekday::Monday))]
    #[case(" SUNDAY ", Ok(Weekday::Sunday))]
    #[case("Mon", Err(WeekdayError::Unknown("Mon".to_string())))]
    fn test_weekday_try_from_str(
        #[case] value: &str,
        #[case] expected: Result<Weekday, WeekdayError>,
    ) {
        assert_eq!(Weekday::try_from(value), expected);
    }

    #[test]
    fn test_weekday_iter() {
        assert_eq!(Weekday::iter().count(), 7);
        assert_eq!(Weekday::iter().next(), Some(&Weekday::Monday));
    }

    #[rstest]
    #[case(Weekday::Monday, "Monday")]
    #[case(Weekday::Sunday, "Sunday")]
    fn test_weekday_display(#[case] day: Weekday, #[case] string: &str) {
        assert_eq!(day.to_string(), string);
    }
}
