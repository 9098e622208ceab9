use crate::domain::model::{EclipticLongitude, Position, ZodiacSign};

pub const SIGN_SPAN: f64 = 30.0;

/// Degree within the sign, in `[0, 30)`.
pub fn degree_in_sign(longitude: EclipticLongitude) -> f64 {
    longitude.normalized() % SIGN_SPAN
}

pub fn sign_index(longitude: EclipticLongitude) -> usize {
    let normalized = longitude.normalized();
    // derived from the remainder so sign and degree never disagree at a cusp
    let whole_signs = ((normalized - normalized % SIGN_SPAN) / SIGN_SPAN).round();
    (whole_signs as usize) % 12
}

pub fn sign_of(longitude: EclipticLongitude) -> ZodiacSign {
    ZodiacSign::ALL[sign_index(longitude)]
}

/// Whole-sign house (1..=12) of a sign counted from the ascendant's sign.
pub fn whole_sign_house(sign_index: usize, ascendant: ZodiacSign) -> u8 {
    let distance = (sign_index as i64 - ascendant.index() as i64).rem_euclid(12);
    (distance + 1) as u8
}

pub fn resolve(longitude: EclipticLongitude, ascendant: ZodiacSign) -> Position {
    let index = sign_index(longitude);
    Position {
        sign: ZodiacSign::ALL[index],
        degree_in_sign: degree_in_sign(longitude),
        house: whole_sign_house(index, ascendant),
    }
}
