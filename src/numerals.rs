use thiserror::Error;

pub const MIN: u32 = 1;
pub const MAX: u32 = 200;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("number {0} is outside the supported range {MIN}..={MAX}")]
pub struct NumberOutOfRange(pub u32);

/// Spoken Arabic phrase for a queue number in [1, 200].
///
/// Exact table entries win; 21-99 compose as ones-then-tens joined by the
/// conjunction, 101-199 as the hundred word plus the recursive remainder.
pub fn spoken_number(n: u32) -> Result<String, NumberOutOfRange> {
    if !(MIN..=MAX).contains(&n) {
        return Err(NumberOutOfRange(n));
    }
    Ok(compose(n))
}

fn compose(n: u32) -> String {
    if let Some(word) = base_word(n) {
        return word.to_string();
    }

    if n < 100 {
        let tens = n / 10 * 10;
        let ones = n % 10;
        // ones is never 0 here; exact tens hit the table above
        return format!("{} و{}", base_word(ones).unwrap(), base_word(tens).unwrap());
    }

    format!("{} و{}", base_word(100).unwrap(), compose(n - 100))
}

/// Irregular base forms: 1-20, the decades, and the hundred markers.
fn base_word(n: u32) -> Option<&'static str> {
    let word = match n {
        1 => "واحد",
        2 => "اثنين",
        3 => "ثلاثة",
        4 => "أربعة",
        5 => "خمسة",
        6 => "ستة",
        7 => "سبعة",
        8 => "ثمانية",
        9 => "تسعة",
        10 => "عشرة",
        11 => "أحد عشر",
        12 => "اثنا عشر",
        13 => "ثلاثة عشر",
        14 => "أربعة عشر",
        15 => "خمسة عشر",
        16 => "ستة عشر",
        17 => "سبعة عشر",
        18 => "ثمانية عشر",
        19 => "تسعة عشر",
        20 => "عشرون",
        30 => "ثلاثون",
        40 => "أربعون",
        50 => "خمسون",
        60 => "ستون",
        70 => "سبعون",
        80 => "ثمانون",
        90 => "تسعون",
        100 => "مائة",
        200 => "مائتان",
        _ => return None,
    };
    Some(word)
}
