use crate::utils::error::{Result, ScoutError};
use regex::Regex;
use std::sync::OnceLock;

fn decimal_digit() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\p{Nd}").expect("digit pattern is valid"))
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    decimal_digit().is_match(c.encode_utf8(&mut buf))
}

/// Nd 字元一律以 0..9 的連續區段編碼，因此數值等於在區段內的位置
fn digit_value(c: char) -> u32 {
    if let Some(value) = c.to_digit(10) {
        return value;
    }

    let mut offset = 0;
    let mut code = c as u32;
    while let Some(prev) = code.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        offset += 1;
        code -= 1;
    }
    offset % 10
}

/// 將價格文字轉為整數：移除所有非數字字元後直接串接解析。
///
/// Decimal and thousands separators are dropped, not interpreted, so
/// `"$1,299.00"` becomes `129900` and `"19.99"` becomes `1999`.
/// Any Unicode decimal digit counts (`"٣٤٥"` and `"１２3"` read as 345
/// and 123). Text without any digit is an error rather than zero.
pub fn normalize_price(text: &str) -> Result<u64> {
    let digits: String = decimal_digit()
        .find_iter(text)
        .flat_map(|m| m.as_str().chars())
        .filter_map(|c| char::from_digit(digit_value(c), 10))
        .collect();

    if digits.is_empty() {
        return Err(ScoutError::PriceParseError {
            input: text.to_string(),
            reason: "no digits found".to_string(),
        });
    }

    digits.parse::<u64>().map_err(|e| ScoutError::PriceParseError {
        input: text.to_string(),
        reason: e.to_string(),
    })
}
