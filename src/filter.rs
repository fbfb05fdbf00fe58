/// A trait used to implement filters for the color extraction process.
///
/// Filters are applied to samples after near-transparent pixels have been
/// dropped and before clustering runs; a sample is discarded when any filter
/// disallows it. This trait allows the library consumer to exclude colors
/// (say, a known background) from influencing the palette.
///
/// No filter is installed by default: every sufficiently opaque pixel
/// contributes to the palette unless a consumer adds one. See
/// [`crate::PaletteBuilder::add_filter`].
pub trait Filter {
    /// Return whether a given sample color should be allowed or not. The same
    /// color is given in both sRGB and HSL for convenience.
    fn is_allowed(&self, rgb: (u8, u8, u8), hsl: (f32, f32, f32)) -> bool;
}
