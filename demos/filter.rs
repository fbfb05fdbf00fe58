use dominance::image::io::Reader as ImageReader;

const WHITE_MIN_LIGHTNESS: f32 = 0.90;

// this filter drops near-white samples so a white product-shot background
// doesn't end up dominating the palette
struct BackgroundFilter;
impl dominance::Filter for BackgroundFilter {
    fn is_allowed(&self, _: (u8, u8, u8), (_, _, l): (f32, f32, f32)) -> bool {
        l < WHITE_MIN_LIGHTNESS
    }
}

fn main() {
    let reader = ImageReader::open("photo.jpg").unwrap();
    let img = reader.decode().unwrap();
    let buf = img.to_rgba8();

    let palette = dominance::PaletteBuilder::from_image(buf)
        .add_filter(BackgroundFilter)
        .generate();

    println!("{:#?}", palette);
}
