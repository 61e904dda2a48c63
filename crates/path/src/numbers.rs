//! Number lists as found in path data, `points` and transform arguments.
//!
//! Lists are separated by whitespace and commas. Inside a separator-delimited
//! token, numbers follow the SVG grammar and may be packed together: `10-5` is
//! `10, -5` and `0.6.5` is `0.6, 0.5`. A token containing anything else is
//! malformed and contributes no number at all.

/// Parse a number list, appending the values to `output`.
///
/// Returns the malformed tokens that were dropped.
///
/// ## Example
///
/// ```
/// use svg_points_path::numbers::parse_number_list;
///
/// let mut values = Vec::new();
/// let dropped = parse_number_list("10,20 1e1 3-4 foo", &mut values);
/// assert_eq!(values, vec![10.0, 20.0, 10.0, 3.0, -4.0]);
/// assert_eq!(dropped, vec!["foo"]);
/// ```
pub fn parse_number_list<'l>(src: &'l str, output: &mut Vec<f64>) -> Vec<&'l str> {
    let mut malformed = Vec::new();
    for token in tokens(src) {
        if !lex_token(token, output) {
            malformed.push(token);
        }
    }

    malformed
}

/// Separator-delimited tokens of a number list.
pub fn tokens(src: &str) -> impl Iterator<Item = &str> {
    src.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
}

/// Lex all numbers packed in one token.
///
/// Nothing is appended if the token is malformed.
pub fn lex_token(token: &str, output: &mut Vec<f64>) -> bool {
    let bytes = token.as_bytes();
    let initial_len = output.len();
    let mut i = 0;

    while i < bytes.len() {
        let value = scan_number(bytes, i).and_then(|end| {
            let value = token[i..end].parse::<f64>().ok()?;
            i = end;
            Some(value)
        });

        match value {
            Some(value) if value.is_finite() => output.push(value),
            _ => {
                output.truncate(initial_len);
                return false;
            }
        }
    }

    true
}

/// The number at the start of `src`, ignoring leading whitespace and whatever
/// follows it, as in `"10px"` or `" 50%"`.
///
/// ```
/// use svg_points_path::numbers::leading_number;
///
/// assert_eq!(leading_number("10px"), Some(10.0));
/// assert_eq!(leading_number("1e"), Some(1.0));
/// assert_eq!(leading_number("px"), None);
/// ```
pub fn leading_number(src: &str) -> Option<f64> {
    let src = src.trim_start();
    let bytes = src.as_bytes();
    let mantissa_end = scan_mantissa(bytes, 0)?;
    let end = scan_exponent(bytes, mantissa_end).unwrap_or(mantissa_end);

    src[..end].parse::<f64>().ok().filter(|value| value.is_finite())
}

// Returns the end of the number starting at `i`, if any.
fn scan_number(bytes: &[u8], i: usize) -> Option<usize> {
    let i = scan_mantissa(bytes, i)?;
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        return scan_exponent(bytes, i);
    }

    Some(i)
}

// Optional sign, digits, optional fraction. At least one digit.
fn scan_mantissa(bytes: &[u8], mut i: usize) -> Option<usize> {
    let len = bytes.len();

    if i < len && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let mut num_digits = 0;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
        num_digits += 1;
    }

    if i < len && bytes[i] == b'.' {
        i += 1;
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
            num_digits += 1;
        }
    }

    if num_digits == 0 {
        return None;
    }

    Some(i)
}

// `e` or `E`, optional sign, at least one digit.
fn scan_exponent(bytes: &[u8], i: usize) -> Option<usize> {
    let len = bytes.len();
    if i >= len || (bytes[i] != b'e' && bytes[i] != b'E') {
        return None;
    }

    let mut j = i + 1;
    if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
        j += 1;
    }
    let digits_start = j;
    while j < len && bytes[j].is_ascii_digit() {
        j += 1;
    }

    if j == digits_start {
        return None;
    }

    Some(j)
}

#[cfg(test)]
fn numbers(src: &str) -> (Vec<f64>, usize) {
    let mut values = Vec::new();
    let malformed = parse_number_list(src, &mut values);
    (values, malformed.len())
}

#[test]
fn separators() {
    assert_eq!(numbers("1 2,3 , 4\t5\n6"), (vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 0));
    assert_eq!(numbers(""), (vec![], 0));
    assert_eq!(numbers("  ,, "), (vec![], 0));
}

#[test]
fn packed_numbers() {
    assert_eq!(numbers("10-5"), (vec![10.0, -5.0], 0));
    assert_eq!(numbers("0.6.5"), (vec![0.6, 0.5], 0));
    assert_eq!(numbers("-1-2-3"), (vec![-1.0, -2.0, -3.0], 0));
    assert_eq!(numbers("1e-2-1E3"), (vec![0.01, -1000.0], 0));
    assert_eq!(numbers("+1 .5 1."), (vec![1.0, 0.5, 1.0], 0));
}

#[test]
fn bad_numbers() {
    assert_eq!(numbers("--1"), (vec![], 1));
    assert_eq!(numbers("1ee2"), (vec![], 1));
    assert_eq!(numbers("1e--1"), (vec![], 1));
    assert_eq!(numbers("*2"), (vec![], 1));
    assert_eq!(numbers("e"), (vec![], 1));
    assert_eq!(numbers("1e"), (vec![], 1));
    assert_eq!(numbers("."), (vec![], 1));
    assert_eq!(numbers("1e999"), (vec![], 1));
    // Only the malformed token is dropped.
    assert_eq!(numbers("1 2x 3"), (vec![1.0, 3.0], 1));
}

#[test]
fn leading_numbers() {
    assert_eq!(leading_number("  -2.5em"), Some(-2.5));
    assert_eq!(leading_number("3e2px"), Some(300.0));
    assert_eq!(leading_number("100%"), Some(100.0));
    assert_eq!(leading_number(""), None);
    assert_eq!(leading_number("-"), None);
    assert_eq!(leading_number("1e999"), None);
}
