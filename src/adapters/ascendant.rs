use crate::domain::model::{BirthInput, JulianDay, ZodiacSign};
use crate::domain::ports::AscendantSource;

/// Placeholder ascendant: the same sign for every chart.
///
/// Stands in until a real rising-sign calculation exists; the default is
/// Scorpio (index 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAscendant(pub ZodiacSign);

impl FixedAscendant {
    pub const DEFAULT_SIGN: ZodiacSign = ZodiacSign::Scorpio;

    pub fn from_index(index: usize) -> Option<Self> {
        ZodiacSign::from_index(index).map(FixedAscendant)
    }
}

impl Default for FixedAscendant {
    fn default() -> Self {
        FixedAscendant(Self::DEFAULT_SIGN)
    }
}

impl AscendantSource for FixedAscendant {
    fn ascendant_sign(&self, _input: &BirthInput, _jd: JulianDay) -> ZodiacSign {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_index_seven() {
        assert_eq!(FixedAscendant::default().0.index(), 7);
        assert_eq!(FixedAscendant::from_index(0), Some(FixedAscendant(ZodiacSign::Aries)));
        assert_eq!(FixedAscendant::from_index(12), None);
    }
}
