use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use qoi_codec::{decode, encode, Image, Pixel};

// A 512x512 gradient with noisy patches, so every op kind is exercised.
fn synthetic_image() -> Image {
  let (width, height) = (512u32, 512u32);
  let mut seed = 0x2545_f491u32;

  let pixels = (0..width * height)
    .map(|i| {
      let (x, y) = (i % width, i / width);

      if (x / 64 + y / 64) % 3 == 0 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        Pixel::from(seed.to_le_bytes())
      } else {
        Pixel::new((x / 2) as u8, (y / 2) as u8, ((x + y) / 8) as u8, 255)
      }
    })
    .collect();

  Image::new(width, height, pixels).unwrap()
}

fn bench_codec(c: &mut Criterion) {
  let image = synthetic_image();
  let encoded = encode(&image).unwrap();

  let mut group = c.benchmark_group("qoi: synthetic 512x512");

  group.throughput(Throughput::Bytes(image.pixels().len() as u64 * 4));

  group.bench_function("encode", |b| b.iter(|| black_box(encode(black_box(&image)).unwrap())));

  group.bench_function("decode", |b| {
    b.iter(|| black_box(decode(black_box(encoded.as_slice())).unwrap()))
  });
}

criterion_group!(name=benches;
  config={
    let c = Criterion::default();
    c.measurement_time(Duration::from_secs(10))
  };
  targets=bench_codec);

criterion_main!(benches);
