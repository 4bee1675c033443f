//! Constant seed patterns for the watch face.
//!
//! Strokes are one cell wide: walls between two neighboring stroke cells are removed,
//! everything else keeps its walls.

use super::SeedPattern;

/// Digits 0 to 9, 6x10 cells each.
pub static DIGITS: [SeedPattern; 10] = [
    SeedPattern::new(6, 10, &[
        0xFF, 0xFF, 0x57, 0xEF, 0xBE, 0xFB, 0xEF, 0xBE, 0xFB, 0xEF, 0xBE, 0xFB,
        0xE5, 0x3F, 0xFF,
    ]),
    SeedPattern::new(6, 10, &[
        0xFF, 0xFF, 0xDF, 0xFE, 0xFF, 0xEF, 0xFE, 0xFF, 0xEF, 0xFE, 0xFF, 0xEF,
        0xF4, 0x7F, 0xFF,
    ]),
    SeedPattern::new(6, 10, &[
        0xFF, 0xFF, 0x57, 0xFF, 0xBF, 0xFB, 0xFF, 0xBF, 0x53, 0xEF, 0xFE, 0xFF,
        0xE5, 0x7F, 0xFF,
    ]),
    SeedPattern::new(6, 10, &[
        0xFF, 0xFF, 0x57, 0xFF, 0xBF, 0xFB, 0xFD, 0x3F, 0xFB, 0xFF, 0xBF, 0xFB,
        0xF5, 0x3F, 0xFF,
    ]),
    SeedPattern::new(6, 10, &[
        0xFF, 0xFF, 0xFF, 0xEF, 0xBE, 0xFB, 0xE5, 0x3F, 0xFB, 0xFF, 0xBF, 0xFB,
        0xFF, 0xBF, 0xFF,
    ]),
    SeedPattern::new(6, 10, &[
        0xFF, 0xFF, 0x57, 0xEF, 0xFE, 0xFF, 0xE5, 0x7F, 0xFB, 0xFF, 0xBF, 0xFB,
        0xF5, 0x3F, 0xFF,
    ]),
    SeedPattern::new(6, 10, &[
        0xFF, 0xFF, 0x57, 0xEF, 0xFE, 0xFF, 0xE5, 0x7E, 0xFB, 0xEF, 0xBE, 0xFB,
        0xE5, 0x3F, 0xFF,
    ]),
    SeedPattern::new(6, 10, &[
        0xFF, 0xFF, 0x57, 0xFF, 0xBF, 0xFB, 0xFF, 0x3F, 0xEF, 0xFE, 0xFF, 0xEF,
        0xFE, 0xFF, 0xFF,
    ]),
    SeedPattern::new(6, 10, &[
        0xFF, 0xFF, 0x57, 0xEF, 0xBE, 0xFB, 0xE5, 0x3E, 0xFB, 0xEF, 0xBE, 0xFB,
        0xE5, 0x3F, 0xFF,
    ]),
    SeedPattern::new(6, 10, &[
        0xFF, 0xFF, 0x57, 0xEF, 0xBE, 0xFB, 0xE5, 0x3F, 0xFB, 0xFF, 0xBF, 0xFB,
        0xF5, 0x3F, 0xFF,
    ]),
];

/// "AM" marker for the 12 hour clock, 6x8.
pub static AM: SeedPattern = SeedPattern::new(6, 8, &[
    0xFF, 0xFF, 0x57, 0xEF, 0xBE, 0x53, 0xEF, 0xBF, 0xFF, 0xF5, 0x7E, 0xE3,
]);

/// "PM" marker for the 12 hour clock, 6x8.
pub static PM: SeedPattern = SeedPattern::new(6, 8, &[
    0xFF, 0xFF, 0x5F, 0xEE, 0xFE, 0x4F, 0xEF, 0xFF, 0xFF, 0xF5, 0x7E, 0xE3,
]);

/// Four cells in a row; the only seed of the blank screen.
pub static BLANK: SeedPattern = SeedPattern::new(4, 1, &[0xD5]);

/// 20x15
pub static HEART: SeedPattern = SeedPattern::new(20, 15, &[
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFD, 0x57, 0xFF, 0xD5, 0x7F, 0xF3, 0xF9,
    0xFF, 0x3F, 0x9F, 0xEF, 0xFE, 0x54, 0xFF, 0xEF, 0xEF, 0xFF, 0xFF, 0xFF,
    0xEF, 0xEF, 0xFF, 0xFF, 0xFF, 0xEF, 0xE7, 0xFF, 0xFF, 0xFF, 0xCF, 0xF9,
    0xFF, 0xFF, 0xFF, 0x3F, 0xFE, 0x7F, 0xFF, 0xFC, 0xFF, 0xFF, 0x9F, 0xFF,
    0xF3, 0xFF, 0xFF, 0xE7, 0xFF, 0xCF, 0xFF, 0xFF, 0xF9, 0xFF, 0x3F, 0xFF,
    0xFF, 0xFE, 0x7C, 0xFF, 0xFF, 0xFF, 0xFF, 0x93, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF,
]);

/// 20x15
pub static SMILEY: SeedPattern = SeedPattern::new(20, 15, &[
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xF5, 0x55, 0x57, 0xFF, 0xFF, 0xCF,
    0xFF, 0xF9, 0xFF, 0xFF, 0x3F, 0xFF, 0xFE, 0x7F, 0xFC, 0xFF, 0x7F, 0x7F,
    0x9F, 0xFB, 0xFE, 0x3E, 0x3F, 0xEF, 0xFB, 0xFF, 0xFF, 0xFF, 0xEF, 0xFB,
    0xFF, 0xFF, 0xFF, 0xEF, 0xFB, 0xFF, 0xFF, 0xFF, 0xEF, 0xFB, 0xE7, 0xFF,
    0xF3, 0xEF, 0xF9, 0xF9, 0x55, 0x4F, 0xCF, 0xFE, 0x7F, 0xFF, 0xFF, 0x3F,
    0xFF, 0x9F, 0xFF, 0xFC, 0xFF, 0xFF, 0xE5, 0x55, 0x53, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF,
]);

/// 12x14
pub static ROCKET: SeedPattern = SeedPattern::new(12, 14, &[
    0xFF, 0xFF, 0xFF, 0xFF, 0xF7, 0xFF, 0xFF, 0xC1, 0xFF, 0xFF, 0xBE, 0xFF,
    0xFF, 0xBE, 0xFF, 0xFF, 0x94, 0xFF, 0xFF, 0xBE, 0xFF, 0xFF, 0x3E, 0x7F,
    0xFF, 0xBE, 0xFF, 0xFB, 0x94, 0xEF, 0xF9, 0x3E, 0x4F, 0xFF, 0xBE, 0xFF,
    0xFF, 0x94, 0xFF, 0xFF, 0xFF, 0xFF,
]);
