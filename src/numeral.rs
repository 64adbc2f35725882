use crate::error::ParseError;

const RADIX: u64 = 26;

pub(crate) fn is_letter(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

/// Maps `a`/`A` to 1 through `z`/`Z` to 26. Only meaningful for ASCII letters.
pub(crate) fn letter_ordinal(c: u8) -> u64 {
    debug_assert!(is_letter(c));
    u64::from(c.to_ascii_lowercase() - b'a' + 1)
}

fn ordinal_letter(ordinal: u64) -> char {
    debug_assert!((1..=RADIX).contains(&ordinal));
    char::from(b'a' + (ordinal - 1) as u8)
}

/// Length of the leading run of ASCII digits.
pub(crate) fn digit_run(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Length of the leading run of ASCII letters, either case.
pub(crate) fn letter_run(s: &str) -> usize {
    s.bytes().take_while(|&c| is_letter(c)).count()
}

/// Reads the maximal decimal run at the start of `input`, returning its value and length.
pub(crate) fn read_decimal(input: &str) -> Result<(i64, usize), ParseError> {
    let len = digit_run(input);
    let text = &input[..len];
    let value = text.parse::<i64>().map_err(|_| ParseError::MalformedNumber {
        text: text.to_string(),
    })?;
    Ok((value, len))
}

pub(crate) fn write_decimal(value: i64) -> String {
    value.to_string()
}

/// Reads the maximal letter run at the start of `input` as a bijective base-26 numeral. An empty
/// run is the numeral for zero and consumes nothing.
pub(crate) fn read_alphabetic(input: &str) -> Result<(i64, usize), ParseError> {
    let len = letter_run(input);
    let text = &input[..len];
    let value = decode_alphabetic(text).ok_or_else(|| ParseError::CounterOverflow {
        text: text.to_string(),
    })?;
    Ok((value, len))
}

/// Decodes a letter-only string, most significant letter first. `None` on overflow.
pub(crate) fn decode_alphabetic(letters: &str) -> Option<i64> {
    letters
        .bytes()
        .try_fold(0u64, |acc, c| {
            acc.checked_mul(RADIX)?.checked_add(letter_ordinal(c))
        })
        .and_then(|value| i64::try_from(value).ok())
}

/// Encodes `value` as a bijective base-26 numeral: `0` is `""`, `1` is `a`, `26` is `z`, `27` is
/// `aa`. There is no zero digit, so a remainder of zero borrows one from the next place.
pub(crate) fn encode_alphabetic(value: u64) -> String {
    let mut rev = Vec::new();
    let mut value = value;
    while value > 0 {
        let rem = value % RADIX;
        if rem == 0 {
            rev.push(ordinal_letter(RADIX));
            value = value / RADIX - 1;
        } else {
            rev.push(ordinal_letter(rem));
            value /= RADIX;
        }
    }
    rev.iter().rev().collect()
}
