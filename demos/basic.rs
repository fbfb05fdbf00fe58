use dominance::image::io::Reader as ImageReader;

fn main() {
    let reader = ImageReader::open("photo.jpg").unwrap();
    let img = reader.decode().unwrap();
    let buf = img.to_rgba8();

    let palette = dominance::PaletteBuilder::from_image(buf).generate();

    println!("{:#?}", palette);
}
