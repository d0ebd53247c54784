/// Straight-alpha RGBA color, every channel in `[0, 1]`.
///
/// Colors are passed through to the vertex stream unchanged; the pipeline
/// blends with straight alpha.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
    pub const GRAY: Color = Color::new(0.5, 0.5, 0.5, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Creates a color from 8-bit channels.
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Returns the first channel outside `[0, 1]` (NaN included), if any.
    pub fn out_of_range_channel(self) -> Option<(char, f32)> {
        [('r', self.r), ('g', self.g), ('b', self.b), ('a', self.a)]
            .into_iter()
            .find(|&(_, v)| !(0.0..=1.0).contains(&v))
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u8_scales_to_unit_range() {
        let c = Color::from_u8(255, 0, 51, 255);
        assert_eq!(c, Color::new(1.0, 0.0, 0.2, 1.0));
    }

    #[test]
    fn out_of_range_reports_first_bad_channel() {
        assert_eq!(Color::GREEN.out_of_range_channel(), None);
        assert_eq!(Color::new(0.0, 1.5, -1.0, 1.0).out_of_range_channel(), Some(('g', 1.5)));
        let (ch, v) = Color::new(0.0, 0.0, 0.0, f32::NAN).out_of_range_channel().unwrap();
        assert_eq!(ch, 'a');
        assert!(v.is_nan());
    }
}
