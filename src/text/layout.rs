//! Horizontal anchors.
//!
//! Every division floors, so a centered string with an odd width leans one
//! pixel to the left. `Fraction` and `Stepped` differ only in where the floor
//! happens: `W*k/n` versus `W/n*k`. A zero or negative denominator falls
//! back to `Center`.

/// Where a string of measured width `w` starts on a surface of width `W`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// `W/2 - w/2`
    Center,
    /// `W*3/13 - w/2`
    LeftColumn,
    /// `W*10/13 - w/2`
    RightColumn,
    /// `W*num/den - w/2`
    Fraction { num: i32, den: i32 },
    /// `W/den*num - w/2`
    Stepped { num: i32, den: i32 },
    /// Exactly this x; the string is not centered.
    At(i32),
}

impl Anchor {
    pub const ONE_FIFTH: Anchor = Anchor::Fraction { num: 1, den: 5 };
    pub const SEVEN_TENTHS: Anchor = Anchor::Stepped { num: 7, den: 10 };

    /// Left edge x for a string `text_width` pixels wide.
    pub fn x(self, surface_width: i32, text_width: i32) -> i32 {
        let half = text_width.div_euclid(2);
        match self {
            Anchor::Center => surface_width.div_euclid(2) - half,
            Anchor::LeftColumn => (surface_width * 3).div_euclid(13) - half,
            Anchor::RightColumn => (surface_width * 10).div_euclid(13) - half,
            Anchor::Fraction { num, den } if den > 0 => (surface_width * num).div_euclid(den) - half,
            Anchor::Stepped { num, den } if den > 0 => surface_width.div_euclid(den) * num - half,
            Anchor::Fraction { .. } | Anchor::Stepped { .. } => Anchor::Center.x(surface_width, text_width),
            Anchor::At(x) => x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centering_floors_for_even_and_odd_differences() {
        // W - w even
        assert_eq!(Anchor::Center.x(448, 100), 174);
        // W - w odd: 224 - 50 = 174 (exact centre would be 174.5)
        assert_eq!(Anchor::Center.x(448, 101), 174);
        // odd surface width
        assert_eq!(Anchor::Center.x(101, 10), 45);
    }

    #[test]
    fn column_anchors() {
        assert_eq!(Anchor::LeftColumn.x(448, 40), 103 - 20);
        assert_eq!(Anchor::RightColumn.x(448, 40), 344 - 20);
        assert_eq!(Anchor::ONE_FIFTH.x(448, 8), 89 - 4);
    }

    #[test]
    fn stepped_and_fraction_floor_differently() {
        // 455*7/10 = 318, 455/10*7 = 315
        assert_eq!(Anchor::Fraction { num: 7, den: 10 }.x(455, 0), 318);
        assert_eq!(Anchor::SEVEN_TENTHS.x(455, 0), 315);
    }

    #[test]
    fn degenerate_denominator_centers() {
        assert_eq!(Anchor::Fraction { num: 1, den: 0 }.x(448, 10), 219);
        assert_eq!(Anchor::Stepped { num: 3, den: 0 }.x(448, 10), 219);
        assert_eq!(Anchor::Fraction { num: 1, den: -5 }.x(448, 10), 219);
    }

    #[test]
    fn fixed_anchor_ignores_width() {
        assert_eq!(Anchor::At(20).x(448, 300), 20);
    }
}
