use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use raw_frame_viewer::raw_viewer::{
    compose, decode_color, decode_depth, decode_motion, encode_velocity, CaptionStyle, FrameShape,
    PreviousFrame, RawFrame,
};

fn generate_mock_frame(width: usize, height: usize) -> RawFrame {
    let mut data = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let t = ((x + y) % 256) as f32 / 255.0;
            data.extend_from_slice(&[
                t * 120.0 - 10.0,
                encode_velocity((x as f32 / width as f32) - 0.5),
                encode_velocity((y as f32 / height as f32) - 0.5),
                1.0,
            ]);
        }
    }
    RawFrame {
        shape: FrameShape::capture(height, width),
        data,
    }
}

fn benchmark_decoders(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_by_size");

    let sizes = vec![
        (320, 240, "320x240"),
        (640, 480, "640x480"),
        (1280, 720, "1280x720"),
    ];

    for (width, height, label) in sizes {
        let frame = generate_mock_frame(width, height);
        let depth = frame.channel(0);
        let motion = frame.channel_pair(1, 2);

        group.bench_with_input(BenchmarkId::new("color", label), &frame, |b, frame| {
            b.iter(|| decode_color(black_box(frame)))
        });
        group.bench_with_input(BenchmarkId::new("depth", label), &depth, |b, depth| {
            b.iter(|| decode_depth(black_box(depth), width, height, 100.0))
        });
        group.bench_with_input(BenchmarkId::new("motion", label), &motion, |b, motion| {
            b.iter(|| decode_motion(black_box(motion), width, height))
        });
    }

    group.finish();
}

fn benchmark_compose(c: &mut Criterion) {
    let frame = generate_mock_frame(640, 480);
    let current = decode_color(&frame).unwrap();
    let (depth, _) = decode_depth(&frame.channel(0), 640, 480, f64::INFINITY).unwrap();
    let motion = decode_motion(&frame.channel_pair(1, 2), 640, 480).unwrap();
    let style = CaptionStyle::default();

    c.bench_function("compose_640x480", |b| {
        b.iter(|| {
            compose(
                black_box(&current),
                &PreviousFrame::Missing,
                &depth,
                &motion,
                42,
                &style,
            )
        })
    });
}

criterion_group!(benches, benchmark_decoders, benchmark_compose);
criterion_main!(benches);
