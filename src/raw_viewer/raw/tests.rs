use std::io::Write;

use crate::raw_viewer::common::error::ViewerError;
use crate::raw_viewer::raw::{FileFrameReader, FrameShape, RawFrameReader, SampleFormat};

fn write_samples(samples: &[f32]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for s in samples {
        file.write_all(&s.to_le_bytes()).unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn test_reads_row_major() {
    // 2x3 image, 4 channels, sample value encodes (y, x, c)
    let shape = FrameShape::capture(2, 3);
    let samples: Vec<f32> = (0..2)
        .flat_map(|y| (0..3).flat_map(move |x| (0..4).map(move |c| (y * 100 + x * 10 + c) as f32)))
        .collect();
    let file = write_samples(&samples);

    let frame = FileFrameReader
        .read_frame(file.path(), SampleFormat::F32Le, shape)
        .unwrap();

    assert_eq!(frame.shape, shape);
    assert_eq!(frame.data.len(), 24);
    assert_eq!(frame.pixel(1, 2), &[120.0, 121.0, 122.0, 123.0]);
    assert_eq!(frame.pixel(0, 1), &[10.0, 11.0, 12.0, 13.0]);
    assert_eq!(frame.channel(0), vec![0.0, 10.0, 20.0, 100.0, 110.0, 120.0]);
    assert_eq!(frame.channel_pair(1, 2)[4], [111.0, 112.0]);
}

#[test]
fn test_big_endian_samples() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for s in [1.5f32, -2.0, 0.25, 8.0] {
        file.write_all(&s.to_be_bytes()).unwrap();
    }
    file.flush().unwrap();

    let frame = FileFrameReader
        .read_frame(file.path(), SampleFormat::F32Be, FrameShape::capture(1, 1))
        .unwrap();
    assert_eq!(frame.data, vec![1.5, -2.0, 0.25, 8.0]);
}

#[test]
fn test_truncated_file_fails() {
    let file = write_samples(&[0.0; 15]);
    let err = FileFrameReader
        .read_frame(file.path(), SampleFormat::F32Le, FrameShape::capture(2, 2))
        .unwrap_err();
    assert!(matches!(err, ViewerError::FrameReadError { .. }));
    assert!(err.to_string().contains("truncated"));
}

#[test]
fn test_short_file_with_huge_shape_fails_without_allocating() {
    let file = write_samples(&[0.0; 4]);
    let err = FileFrameReader
        .read_frame(file.path(), SampleFormat::F32Le, FrameShape::capture(200_000, 200_000))
        .unwrap_err();
    assert!(matches!(err, ViewerError::FrameReadError { .. }));
    assert!(err.to_string().contains("truncated"));
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = FileFrameReader
        .read_frame(&dir.path().join("nope.raw"), SampleFormat::F32Le, FrameShape::capture(1, 1))
        .unwrap_err();
    assert!(matches!(err, ViewerError::FrameReadError { .. }));
    assert_eq!(err.at_frame(7).frame_index(), Some(7));
}

#[test]
fn test_trailing_bytes_ignored() {
    let file = write_samples(&[1.0, 2.0, 3.0, 4.0, 99.0, 99.0]);
    let frame = FileFrameReader
        .read_frame(file.path(), SampleFormat::F32Le, FrameShape::capture(1, 1))
        .unwrap();
    assert_eq!(frame.data, vec![1.0, 2.0, 3.0, 4.0]);
}
