//! Footnote numbering styles and numeral conversion.
//!
//! The list itself is numbered by the browser through the `list-style-type`
//! rule emitted by [`stylesheet`](crate::stylesheet); [`convert`] produces the
//! same representation as text, which the renderer needs for symbol-style
//! inline references.

/// Roman numeral table, largest value first.
const ROMAN: [(&str, u64); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// Longest repeat run (symbols, or `M` in a Roman numeral) before `convert`
/// falls back to decimal digits.
const MAX_REPEAT: u64 = 1000;

/// Numeral representation used for footnote numbers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum NumberingStyle {
    /// `1, 2, ... 10`
    #[default]
    Decimal,
    /// `01, 02, ... 10`
    DecimalLeadingZero,
    /// `a, b, ... j`
    LowerAlpha,
    /// `A, B, ... J`
    UpperAlpha,
    /// `i, ii, ... x`
    LowerRoman,
    /// `I, II, ... X`
    UpperRoman,
    /// The symbol repeated once per number (`*`, `**`, `***`).
    Symbol(String),
}

impl NumberingStyle {
    /// Resolve a style from its configuration name.
    ///
    /// `symbol` is only used for the `symbol` style. Unknown names resolve to
    /// [`NumberingStyle::Decimal`].
    ///
    /// # Example
    ///
    /// ```
    /// use fme_core::NumberingStyle;
    ///
    /// assert_eq!(NumberingStyle::from_name("upper-roman", ""), NumberingStyle::UpperRoman);
    /// assert_eq!(
    ///     NumberingStyle::from_name("symbol", "*"),
    ///     NumberingStyle::Symbol("*".to_owned())
    /// );
    /// assert_eq!(NumberingStyle::from_name("hebrew", ""), NumberingStyle::Decimal);
    /// ```
    #[must_use]
    pub fn from_name(name: &str, symbol: &str) -> Self {
        Self::parse(name, symbol).unwrap_or_default()
    }

    /// Resolve a style from its configuration name, returning `None` for
    /// unknown names.
    #[must_use]
    pub fn parse(name: &str, symbol: &str) -> Option<Self> {
        let style = match name {
            "decimal" => Self::Decimal,
            "decimal-leading-zero" => Self::DecimalLeadingZero,
            "lower-alpha" => Self::LowerAlpha,
            "upper-alpha" => Self::UpperAlpha,
            "lower-roman" => Self::LowerRoman,
            "upper-roman" => Self::UpperRoman,
            "symbol" => Self::Symbol(symbol.to_owned()),
            _ => return None,
        };
        Some(style)
    }

    /// Configuration name, which doubles as the CSS `list-style-type` keyword
    /// for every style except [`Symbol`](Self::Symbol).
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::DecimalLeadingZero => "decimal-leading-zero",
            Self::LowerAlpha => "lower-alpha",
            Self::UpperAlpha => "upper-alpha",
            Self::LowerRoman => "lower-roman",
            Self::UpperRoman => "upper-roman",
            Self::Symbol(_) => "symbol",
        }
    }

    /// Whether this is the symbol style, which renders an unordered list.
    #[must_use]
    pub fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_))
    }
}

/// Convert a footnote number to its textual representation.
///
/// `total` is the number of footnote markers in the document; it only affects
/// the padding width of [`NumberingStyle::DecimalLeadingZero`].
///
/// Symbol and Roman numbers whose representation would repeat a unit more
/// than 1000 times are written as decimal digits instead.
///
/// # Example
///
/// ```
/// use fme_core::{NumberingStyle, convert};
///
/// assert_eq!(convert(1994, &NumberingStyle::UpperRoman, 1), "MCMXCIV");
/// assert_eq!(convert(28, &NumberingStyle::LowerAlpha, 1), "ab");
/// assert_eq!(convert(3, &NumberingStyle::DecimalLeadingZero, 150), "003");
/// ```
#[must_use]
pub fn convert(number: u64, style: &NumberingStyle, total: usize) -> String {
    match style {
        NumberingStyle::Decimal => number.to_string(),
        NumberingStyle::DecimalLeadingZero => {
            let width = total.to_string().len().max(2);
            format!("{number:0width$}")
        }
        NumberingStyle::LowerRoman | NumberingStyle::UpperRoman if number / 1000 > MAX_REPEAT => {
            number.to_string()
        }
        NumberingStyle::LowerRoman => roman(number).to_ascii_lowercase(),
        NumberingStyle::UpperRoman => roman(number),
        NumberingStyle::LowerAlpha => alpha(number).to_ascii_lowercase(),
        NumberingStyle::UpperAlpha => alpha(number),
        NumberingStyle::Symbol(_) if number > MAX_REPEAT => number.to_string(),
        #[allow(clippy::cast_possible_truncation)]
        NumberingStyle::Symbol(symbol) => symbol.repeat(number as usize),
    }
}

/// Subtractive Roman numeral. Zero yields an empty string.
fn roman(mut number: u64) -> String {
    let mut out = String::new();
    for (numeral, value) in ROMAN {
        while number >= value {
            out.push_str(numeral);
            number -= value;
        }
    }
    out
}

/// Bijective base-26 letters: `A..Z`, `AA..ZZ`, `AAA..`. Zero yields an empty string.
fn alpha(mut number: u64) -> String {
    let mut letters = Vec::new();
    while number > 0 {
        number -= 1;
        #[allow(clippy::cast_possible_truncation)]
        let offset = (number % 26) as u8;
        letters.push(char::from(b'A' + offset));
        number /= 26;
    }
    letters.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_upper_roman_fixed_points() {
        let cases = [
            (1, "I"),
            (4, "IV"),
            (9, "IX"),
            (40, "XL"),
            (90, "XC"),
            (900, "CM"),
            (1994, "MCMXCIV"),
        ];
        for (number, expected) in cases {
            assert_eq!(convert(number, &NumberingStyle::UpperRoman, 1), expected);
        }
    }

    #[test]
    fn test_lower_roman() {
        assert_eq!(convert(14, &NumberingStyle::LowerRoman, 20), "xiv");
        assert_eq!(convert(3888, &NumberingStyle::LowerRoman, 1), "mmmdccclxxxviii");
    }

    #[test]
    fn test_roman_zero_is_empty() {
        assert_eq!(convert(0, &NumberingStyle::UpperRoman, 1), "");
    }

    #[test]
    fn test_leading_zero_minimum_width() {
        assert_eq!(convert(3, &NumberingStyle::DecimalLeadingZero, 5), "03");
        assert_eq!(convert(3, &NumberingStyle::DecimalLeadingZero, 12), "03");
    }

    #[test]
    fn test_leading_zero_follows_total_width() {
        assert_eq!(convert(3, &NumberingStyle::DecimalLeadingZero, 150), "003");
        assert_eq!(convert(42, &NumberingStyle::DecimalLeadingZero, 1000), "0042");
    }

    #[test]
    fn test_leading_zero_wider_number_not_truncated() {
        assert_eq!(convert(123, &NumberingStyle::DecimalLeadingZero, 3), "123");
    }

    #[test]
    fn test_alpha_single_letters() {
        assert_eq!(convert(1, &NumberingStyle::UpperAlpha, 1), "A");
        assert_eq!(convert(2, &NumberingStyle::UpperAlpha, 1), "B");
        assert_eq!(convert(26, &NumberingStyle::UpperAlpha, 1), "Z");
    }

    #[test]
    fn test_alpha_rolls_over() {
        assert_eq!(convert(27, &NumberingStyle::UpperAlpha, 1), "AA");
        assert_eq!(convert(28, &NumberingStyle::UpperAlpha, 1), "AB");
        assert_eq!(convert(52, &NumberingStyle::UpperAlpha, 1), "AZ");
        assert_eq!(convert(53, &NumberingStyle::UpperAlpha, 1), "BA");
        assert_eq!(convert(702, &NumberingStyle::UpperAlpha, 1), "ZZ");
    }

    #[test]
    fn test_alpha_past_two_letters() {
        assert_eq!(convert(703, &NumberingStyle::UpperAlpha, 1), "AAA");
        assert_eq!(convert(704, &NumberingStyle::LowerAlpha, 1), "aab");
    }

    #[test]
    fn test_lower_alpha() {
        assert_eq!(convert(3, &NumberingStyle::LowerAlpha, 1), "c");
    }

    #[test]
    fn test_alpha_zero_is_empty() {
        assert_eq!(convert(0, &NumberingStyle::LowerAlpha, 1), "");
    }

    #[test]
    fn test_symbol_repeats() {
        let style = NumberingStyle::Symbol("&dagger;".to_owned());
        assert_eq!(convert(1, &style, 3), "&dagger;");
        assert_eq!(convert(3, &style, 3), "&dagger;&dagger;&dagger;");
    }

    #[test]
    fn test_symbol_large_number_falls_back_to_decimal() {
        let style = NumberingStyle::Symbol("&dagger;".to_owned());
        assert_eq!(convert(1000, &style, 1), "&dagger;".repeat(1000));
        assert_eq!(convert(1001, &style, 1), "1001");
        assert_eq!(convert(4_000_000_000, &style, 1), "4000000000");
    }

    #[test]
    fn test_roman_large_number_falls_back_to_decimal() {
        assert_eq!(convert(1_000_999, &NumberingStyle::UpperRoman, 1), "M".repeat(1000) + "CMXCIX");
        assert_eq!(convert(1_001_000, &NumberingStyle::UpperRoman, 1), "1001000");
        assert_eq!(convert(u64::MAX, &NumberingStyle::LowerRoman, 1), u64::MAX.to_string());
    }

    #[test]
    fn test_alpha_u64_max() {
        assert_eq!(convert(u64::MAX, &NumberingStyle::UpperAlpha, 1).len(), 14);
    }

    #[test]
    fn test_decimal() {
        assert_eq!(convert(17, &NumberingStyle::Decimal, 100), "17");
    }

    #[test]
    fn test_from_name_roundtrips_names() {
        for name in [
            "decimal",
            "decimal-leading-zero",
            "lower-alpha",
            "upper-alpha",
            "lower-roman",
            "upper-roman",
            "symbol",
        ] {
            assert_eq!(NumberingStyle::from_name(name, "*").name(), name);
        }
    }

    #[test]
    fn test_unknown_name_falls_back_to_decimal() {
        assert_eq!(NumberingStyle::parse("armenian", ""), None);
        assert_eq!(
            NumberingStyle::from_name("armenian", ""),
            NumberingStyle::Decimal
        );
    }

    #[test]
    fn test_is_symbol() {
        assert!(NumberingStyle::Symbol(String::new()).is_symbol());
        assert!(!NumberingStyle::UpperRoman.is_symbol());
    }
}
