//! 4x5 bitmap digits for labelling drawings

pub const GLYPH_WIDTH: i32 = 4;
pub const GLYPH_HEIGHT: i32 = 5;

/// Horizontal distance between the left edges of adjacent digits
pub const GLYPH_ADVANCE: i32 = 5;

/// Row-major ink masks for 0-9, top row first
#[rustfmt::skip]
const DIGITS: [[u8; 20]; 10] = [
    [0, 1, 1, 0,
     1, 0, 0, 1,
     1, 0, 0, 1,
     1, 0, 0, 1,
     0, 1, 1, 0],
    [0, 1, 1, 0,
     0, 0, 1, 0,
     0, 0, 1, 0,
     0, 0, 1, 0,
     0, 1, 1, 1],
    [1, 1, 1, 0,
     0, 0, 0, 1,
     0, 1, 1, 0,
     1, 0, 0, 0,
     1, 1, 1, 1],
    [1, 1, 1, 0,
     0, 0, 0, 1,
     0, 1, 1, 0,
     0, 0, 0, 1,
     1, 1, 1, 0],
    [0, 1, 0, 1,
     0, 1, 0, 1,
     0, 1, 1, 1,
     0, 0, 0, 1,
     0, 0, 0, 1],
    [1, 1, 1, 1,
     1, 0, 0, 0,
     1, 1, 1, 0,
     0, 0, 0, 1,
     1, 1, 1, 0],
    [0, 1, 1, 0,
     1, 0, 0, 0,
     1, 1, 1, 0,
     1, 0, 0, 1,
     0, 1, 1, 0],
    [1, 1, 1, 1,
     0, 0, 0, 1,
     0, 0, 1, 0,
     0, 1, 0, 0,
     0, 1, 0, 0],
    [0, 1, 1, 0,
     1, 0, 0, 1,
     0, 1, 1, 0,
     1, 0, 0, 1,
     0, 1, 1, 0],
    [0, 1, 1, 0,
     1, 0, 0, 1,
     0, 1, 1, 1,
     0, 0, 0, 1,
     0, 1, 1, 0],
];

/// Number of glyph slots `value` prints with: `ceil(log10(value))` above 9,
/// otherwise 1
///
/// Exact powers of ten come out one slot short, so 10 prints as "0" and 100
/// as "00"; only the low digits that fit are drawn.
pub fn digit_count(value: u32) -> u32 {
    if value > 9 {
        f64::from(value).log10().ceil() as u32
    } else {
        1
    }
}

/// Ink cells of one digit as `(column, row)`, row 0 at the top
pub fn digit_cells(digit: u8) -> impl Iterator<Item = (i32, i32)> {
    let mask = &DIGITS[usize::from(digit % 10)];
    (0..GLYPH_HEIGHT).flat_map(move |row| {
        (0..GLYPH_WIDTH).filter_map(move |col| {
            (mask[(row * GLYPH_WIDTH + col) as usize] == 1).then_some((col, row))
        })
    })
}

/// Offsets of every ink pixel for `value`, relative to the top-left corner
///
/// Digits run left to right `GLYPH_ADVANCE` apart; rows grow downward, so the
/// y offset is negative.
pub fn integer_pixels(value: u32) -> Vec<(i32, i32)> {
    let ndigits = digit_count(value);
    let mut pixels = Vec::new();
    let mut rest = value;
    for slot in (0..ndigits as i32).rev() {
        let digit = (rest % 10) as u8;
        pixels.extend(digit_cells(digit).map(|(col, row)| (slot * GLYPH_ADVANCE + col, -row)));
        rest /= 10;
    }
    pixels
}
