use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgba};
use lsbhide_core::media::image::{Direction, FormatHint, LsbCodec};
use lsbhide_core::LsbCodecOptions;

pub fn image_decoding(c: &mut Criterion) {
    let image = ImageBuffer::from_fn(512, 512, |x, y| {
        Rgba([(x ^ y) as u8, (x + y) as u8, (x * y) as u8, 255])
    });

    for direction in [Direction::Vertical, Direction::DiagonalDown] {
        let opts = LsbCodecOptions::default()
            .with_direction(direction)
            .with_nlsb(2)
            .expect("valid nlsb");

        c.bench_function(&format!("Image Decoding {direction}"), |b| {
            b.iter(|| LsbCodec::extract(&image, &opts, FormatHint::Png))
        });
    }
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
