use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgba, RgbaImage};
use lsbhide_core::media::image::{Direction, LsbCodec};
use lsbhide_core::LsbCodecOptions;

fn carrier() -> RgbaImage {
    ImageBuffer::from_fn(512, 512, |x, y| {
        Rgba([(x ^ y) as u8, (x + y) as u8, (x * y) as u8, 255])
    })
}

pub fn image_encoding(c: &mut Criterion) {
    let secret_message = vec![0xA5; 64 * 1024];

    for direction in [Direction::Horizontal, Direction::DiagonalUp] {
        let opts = LsbCodecOptions::default()
            .with_direction(direction)
            .with_nlsb(2)
            .expect("valid nlsb");

        c.bench_function(&format!("Image Encoding {direction}"), |b| {
            let mut plain_image = carrier();
            b.iter(|| {
                LsbCodec::embed(&mut plain_image, &secret_message, &opts)
                    .expect("Cannot hide secret message");
            })
        });
    }
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
