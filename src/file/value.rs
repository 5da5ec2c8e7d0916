use std::fmt;

/// A single cell handed to `write` or `append`
///
/// Rows come back from `read` as plain strings; on the way in we keep the
/// type so `append` can tell numbers from text.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Int(i64),
    Float(f64),
}

impl Value {
    /// Parse a command-line token: integer first, then float, else text
    pub fn parse(token: &str) -> Self {
        if let Ok(i) = token.parse::<i64>() {
            return Self::Int(i);
        }
        if let Ok(f) = token.parse::<f64>() {
            return Self::Float(f);
        }
        Self::Text(token.to_string())
    }

    /// Numeric view of the value, `None` for text
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::Text(_) => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Text(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => f.write_str(&format_float(*x)),
        }
    }
}

/// Shortest round-trip float text with a `.0` on whole numbers and a
/// signed, two-digit exponent (`20.0`, `1e+16`, `1.5e-07`)
fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    // Debug keeps the trailing ".0" and switches to exponent form outside 1e-4..1e16
    let text = format!("{:?}", x);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

/// Parse a field the way the summation in `append` counts it
///
/// Only unsigned decimals qualify: at most one `.` and ASCII digits
/// otherwise. Signs, exponents and padding make the field non-numeric.
pub fn parse_numeric_field(field: &str) -> Option<f64> {
    let digits = field.replacen('.', "", 1);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse::<f64>().ok()
}

/// Sum every numeric field, `None` when not a single field was numeric
pub fn sum_numeric_fields(rows: &[Vec<String>]) -> Option<f64> {
    rows.iter()
        .flatten()
        .filter_map(|field| parse_numeric_field(field))
        .fold(None, |total, x| Some(total.unwrap_or(0.0) + x))
}
