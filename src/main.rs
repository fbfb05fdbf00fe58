use dominance::image::io::Reader as ImageReader;

fn main() {
    let mut args = std::env::args().skip(1);
    let path = args.next().expect("usage: dominance <image> [cluster count]");
    let cluster_count = args
        .next()
        .map(|count| count.parse().expect("cluster count must be an integer"))
        .unwrap_or(dominance::DEFAULT_CLUSTER_COUNT);

    let img = ImageReader::open(path).unwrap().decode().unwrap();
    let buf = img.to_rgba8();

    let palette = dominance::PaletteBuilder::from_image(buf)
        .cluster_count(cluster_count)
        .generate();

    for swatch in palette.swatches() {
        println!("{} {:>6} px", swatch.hex(), swatch.population());
    }
}
