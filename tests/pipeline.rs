//! End-to-end pipeline tests: event discovery, transcoding, failure
//! isolation, and total accumulation, run against generated fixtures in
//! temporary directories.

use event_optimizer::core::ConversionSettings;
use event_optimizer::processing::{EventProcessor, ProgressEvent};
use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

fn settings() -> ConversionSettings {
    // Small cap keeps the generated fixtures tiny.
    ConversionSettings {
        max_width: 64,
        quality: 80.0,
        effort: 4,
    }
}

fn write_image(path: &Path, width: u32, height: u32, format: image::ImageFormat) {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    image::DynamicImage::ImageRgb8(img)
        .save_with_format(path, format)
        .unwrap();
}

#[tokio::test]
async fn launch_event_produces_webp_outputs_and_totals() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let launch = input.path().join("launch");
    std::fs::create_dir_all(&launch).unwrap();
    write_image(&launch.join("photo1.jpg"), 48, 32, image::ImageFormat::Jpeg);
    write_image(&launch.join("photo2.png"), 32, 32, image::ImageFormat::Png);
    std::fs::write(launch.join("notes.txt"), b"not an image").unwrap();

    let results = Mutex::new(Vec::new());
    let processor = EventProcessor::new(settings()).unwrap();
    let report = processor
        .process_all(input.path(), output.path(), |event| {
            if let ProgressEvent::FileCompleted { result } = event {
                results.lock().unwrap().push(result);
            }
        })
        .await
        .unwrap();

    // notes.txt is skipped entirely; both images are transcoded
    assert_eq!(report.total_images(), 2);
    assert!(output.path().join("launch/photo1.webp").is_file());
    assert!(output.path().join("launch/photo2.webp").is_file());
    assert!(!output.path().join("launch/notes.txt").exists());
    assert!(!output.path().join("launch/notes.webp").exists());

    // Grand totals equal the sum of per-file sizes
    let results = results.into_inner().unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.success));
    let original_sum: u64 = results.iter().map(|r| r.original_size).sum();
    let optimized_sum: u64 = results.iter().map(|r| r.optimized_size).sum();
    assert_eq!(report.total_original_bytes(), original_sum);
    assert_eq!(report.total_optimized_bytes(), optimized_sum);
    assert_eq!(
        report.total_saved_bytes(),
        original_sum as i64 - optimized_sum as i64
    );
}

#[tokio::test]
async fn grand_totals_sum_per_event_totals() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    for (event, count) in [("alpha", 2u32), ("beta", 3u32)] {
        let dir = input.path().join(event);
        std::fs::create_dir_all(&dir).unwrap();
        for i in 0..count {
            write_image(
                &dir.join(format!("img{i}.png")),
                24 + i,
                24,
                image::ImageFormat::Png,
            );
        }
    }

    let processor = EventProcessor::new(settings()).unwrap();
    let report = processor
        .process_all(input.path(), output.path(), |_| {})
        .await
        .unwrap();

    assert_eq!(report.events().len(), 2);
    assert_eq!(report.total_images(), 5);
    let per_event_original: u64 = report.events().iter().map(|e| e.original_bytes).sum();
    let per_event_optimized: u64 = report.events().iter().map(|e| e.optimized_bytes).sum();
    assert_eq!(report.total_original_bytes(), per_event_original);
    assert_eq!(report.total_optimized_bytes(), per_event_optimized);
}

#[tokio::test]
async fn empty_event_reports_zero_and_run_continues() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    std::fs::create_dir_all(input.path().join("empty")).unwrap();
    let full = input.path().join("full");
    std::fs::create_dir_all(&full).unwrap();
    write_image(&full.join("shot.jpg"), 20, 20, image::ImageFormat::Jpeg);

    let processor = EventProcessor::new(settings()).unwrap();
    let report = processor
        .process_all(input.path(), output.path(), |_| {})
        .await
        .unwrap();

    // Events are processed in sorted order: empty first, then full
    assert_eq!(report.events().len(), 2);
    let empty = &report.events()[0];
    assert_eq!(empty.name, "empty");
    assert_eq!(empty.file_count, 0);
    assert_eq!(empty.original_bytes, 0);
    assert_eq!(empty.saved_bytes(), 0);

    let full = &report.events()[1];
    assert_eq!(full.file_count, 1);
    assert!(output.path().join("full/shot.webp").is_file());
}

#[tokio::test]
async fn missing_input_root_is_fatal() {
    let output = TempDir::new().unwrap();
    let processor = EventProcessor::new(settings()).unwrap();

    let result = processor
        .process_all(Path::new("/nonexistent/event/root"), output.path(), |_| {})
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn corrupt_file_is_isolated_and_counted_as_zero_savings() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let shoot = input.path().join("shoot");
    std::fs::create_dir_all(&shoot).unwrap();
    std::fs::write(shoot.join("broken.jpg"), b"definitely not a jpeg").unwrap();
    write_image(&shoot.join("good.png"), 16, 16, image::ImageFormat::Png);

    let results = Mutex::new(Vec::new());
    let processor = EventProcessor::new(settings()).unwrap();
    let report = processor
        .process_all(input.path(), output.path(), |event| {
            if let ProgressEvent::FileCompleted { result } = event {
                results.lock().unwrap().push(result);
            }
        })
        .await
        .unwrap();

    let results = results.into_inner().unwrap();
    assert_eq!(results.len(), 2);

    let broken = results
        .iter()
        .find(|r| r.original_path.ends_with("broken.jpg"))
        .unwrap();
    assert!(!broken.success);
    assert!(broken.error.is_some());
    assert_eq!(broken.original_size, 0);
    assert_eq!(broken.optimized_size, 0);
    assert_eq!(broken.saved_bytes, 0);

    // The failure did not abort the batch
    let good = results
        .iter()
        .find(|r| r.original_path.ends_with("good.png"))
        .unwrap();
    assert!(good.success);
    assert!(output.path().join("shoot/good.webp").is_file());

    // Failed file still counts toward the processed total
    assert_eq!(report.total_images(), 2);
    assert_eq!(report.total_original_bytes(), good.original_size);
}

#[tokio::test]
async fn stray_files_at_the_root_level_are_not_events() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    std::fs::write(input.path().join("readme.md"), b"hello").unwrap();
    std::fs::create_dir_all(input.path().join("only-event")).unwrap();

    let processor = EventProcessor::new(settings()).unwrap();
    let report = processor
        .process_all(input.path(), output.path(), |_| {})
        .await
        .unwrap();

    assert_eq!(report.events().len(), 1);
    assert_eq!(report.events()[0].name, "only-event");
}
