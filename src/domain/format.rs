//! Display formatting for selection statistics.
//!
//! `to_precision` follows the ECMAScript `Number.prototype.toPrecision`
//! rules: ties round up, and exponential notation is used when the decimal
//! exponent is below -6 or not less than the requested precision.

/// Numbers below this share of the grand total are shown as `< 0.1%`.
pub const MIN_DISPLAYED_SHARE: f64 = 0.1;

const EXPANSION_DIGITS: usize = 40;

/// Format `value` with `precision` significant digits.
pub fn to_precision(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let precision = precision.clamp(1, 21);
    let (digits, exp) = round_significant(value.abs(), precision);
    let sign = if value < 0.0 { "-" } else { "" };
    let digits: String = digits.iter().map(|d| char::from(b'0' + d)).collect();

    if exp < -6 || exp >= precision as i32 {
        let (first, rest) = digits.split_at(1);
        let mantissa = if rest.is_empty() {
            first.to_string()
        } else {
            format!("{first}.{rest}")
        };
        let exp_sign = if exp >= 0 { "+" } else { "-" };
        return format!("{sign}{mantissa}e{exp_sign}{}", exp.abs());
    }

    if exp >= 0 {
        let (int_part, frac_part) = digits.split_at(exp as usize + 1);
        if frac_part.is_empty() {
            format!("{sign}{int_part}")
        } else {
            format!("{sign}{int_part}.{frac_part}")
        }
    } else {
        let zeros = "0".repeat((-exp - 1) as usize);
        format!("{sign}0.{zeros}{digits}")
    }
}

/// Round a non-negative finite value to `precision` significant decimal
/// digits, half up. Returns the digits and the decimal exponent of the first.
fn round_significant(value: f64, precision: usize) -> (Vec<u8>, i32) {
    let expansion = format!("{:.*e}", EXPANSION_DIGITS, value);
    let (mantissa, exp) = expansion.split_once('e').unwrap_or((expansion.as_str(), "0"));
    let mut exp: i32 = exp.parse().unwrap_or(0);
    let all: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    let mut digits = all[..precision].to_vec();
    if all[precision] >= 5 {
        let mut i = precision;
        loop {
            if i == 0 {
                digits.insert(0, 1);
                digits.truncate(precision);
                exp += 1;
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }
    (digits, exp)
}

/// `value` to three significant digits with a trailing `%`.
pub fn percentage(value: f64) -> String {
    format!("{}%", to_precision(value, 3))
}

/// Like `percentage`, but shares below 0.1 read `< 0.1%`.
pub fn share_label(value: f64) -> String {
    if value < MIN_DISPLAYED_SHARE {
        format!("< {MIN_DISPLAYED_SHARE}%")
    } else {
        percentage(value)
    }
}

/// Whole-dollar amount.
pub fn currency(value: i64) -> String {
    format!("${value}")
}

/// Rounded quotient, or zero when the divisor is zero or the result is not
/// a finite number.
pub fn whole_ratio(numerator: f64, denominator: f64) -> i64 {
    if denominator == 0.0 {
        return 0;
    }
    let ratio = numerator / denominator;
    if ratio.is_finite() { ratio.round() as i64 } else { 0 }
}
