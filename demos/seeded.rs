use dominance::image::io::Reader as ImageReader;
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    let reader = ImageReader::open("photo.jpg").unwrap();
    let img = reader.decode().unwrap();
    let buf = img.to_rgba8();

    // the same seed always produces the same palette for the same image and
    // parameters
    let mut rng = StdRng::seed_from_u64(42);
    let palette = dominance::PaletteBuilder::from_image(buf)
        .cluster_count(8)
        .generate_with_rng(&mut rng);

    for swatch in palette.swatches() {
        println!("{} {}", swatch.hex(), swatch.population());
    }
}
