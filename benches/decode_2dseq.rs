use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use mri_frames::mri::{
    ExportConfig, FrameDimensions, FrameReader, TiffCompression, TwoDSeqReader, TwoDSeqToTiffPipeline,
};
use std::io::Cursor;

fn generate_mock_2dseq(width: usize, height: usize, frames: usize) -> Vec<u8> {
    (0..width * height * frames)
        .flat_map(|i| ((i % 4096) as u16).to_le_bytes())
        .collect()
}

fn benchmark_decode_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_by_size");

    let sizes = vec![
        (128, 128, "128x128"),
        (256, 256, "256x256"),
        (512, 512, "512x512"),
    ];

    for (width, height, label) in sizes {
        let mock_data = generate_mock_2dseq(width, height, 8);
        let dimensions = FrameDimensions::new(width, height).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &mock_data,
            |b, data| {
                b.iter(|| {
                    let mut source = Cursor::new(black_box(data.as_slice()));
                    let _ = TwoDSeqReader.read_frames(&mut source, dimensions);
                });
            },
        );
    }

    group.finish();
}

fn benchmark_export_compression(c: &mut Criterion) {
    let mut group = c.benchmark_group("export_compression");
    let mock_data = generate_mock_2dseq(256, 256, 4);

    let compressions = vec![
        (TiffCompression::None, "none"),
        (TiffCompression::Lzw, "lzw"),
        (TiffCompression::DeflateFast, "deflate_fast"),
    ];

    for (compression, label) in compressions {
        let config = ExportConfig::builder()
            .dimensions(FrameDimensions::new(256, 256).unwrap())
            .compression(compression)
            .build();
        let pipeline = TwoDSeqToTiffPipeline::new(config);

        group.bench_function(label, |b| {
            b.iter(|| {
                let mut source = Cursor::new(black_box(mock_data.as_slice()));
                let mut output = Vec::new();
                let _ = pipeline.convert(&mut source, &mut output);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_decode_sizes, benchmark_export_compression);
criterion_main!(benches);
