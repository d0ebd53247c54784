//! End-to-end frame over the recording device: scene → tessellation →
//! normalization → per-shape upload/draw → present.

use vektor_engine::coords::{CanvasExtents, Vec2};
use vektor_engine::device::{
    DeviceCall, DeviceError, DeviceState, FailPoint, RecordingDevice, RenderDevice, SurfaceHandle,
};
use vektor_engine::paint::{Color, Fill, Stroke};
use vektor_engine::renderer::{FrameDriver, RendererConfig};
use vektor_engine::shape::{Line, Rect};

const EPS: f32 = 1e-4;

fn approx(a: [f32; 3], b: (f32, f32)) -> bool {
    (a[0] - b.0).abs() < EPS && (a[1] - b.1).abs() < EPS && a[2] == 0.0
}

fn driver(device: RecordingDevice) -> FrameDriver<RecordingDevice> {
    let canvas = CanvasExtents::new(800.0, 600.0).unwrap();
    let mut driver = FrameDriver::new(device, RendererConfig::default().with_canvas(canvas));
    driver
        .initialize(SurfaceHandle::headless(), 800, 600)
        .unwrap();

    driver.add_shape(Rect::new(100.0, 150.0, 200.0, 100.0, Fill::new(Color::GREEN)).unwrap());
    driver.add_shape(
        Line::new(
            Vec2::new(50.0, 100.0),
            Vec2::new(300.0, 100.0),
            Stroke::new(Color::RED, 5.0),
        )
        .unwrap(),
    );
    driver
}

#[test]
fn two_shapes_produce_two_draws_in_insertion_order() {
    let mut driver = driver(RecordingDevice::new());
    let stats = driver.on_tick().unwrap();
    assert_eq!(stats.draw_calls, 2);

    let dev = driver.device();
    assert_eq!(dev.presented_frames(), 1);
    assert_eq!(
        dev.count(|c| matches!(c, DeviceCall::DrawIndexedTriangles { index_count: 6 })),
        2
    );

    let draws = dev.draws();
    assert_eq!(draws.len(), 2);

    let rect = &draws[0];
    assert_eq!(rect.indices, [0, 1, 2, 0, 2, 3]);
    let expected = [(-0.75, 0.5), (-0.25, 0.5), (-0.25, 1.0 / 6.0), (-0.75, 1.0 / 6.0)];
    for (v, e) in rect.vertices.iter().zip(expected) {
        assert!(approx(v.position, e), "{:?} != {e:?}", v.position);
        assert_eq!(v.color, Color::GREEN.to_array());
    }

    let line = &draws[1];
    assert_eq!(line.indices, [0, 1, 2, 1, 3, 2]);
    let expected = [(-0.875, 0.658_333), (-0.875, 0.675), (-0.25, 0.658_333), (-0.25, 0.675)];
    for (v, e) in line.vertices.iter().zip(expected) {
        assert!(approx(v.position, e), "{:?} != {e:?}", v.position);
        assert_eq!(v.color, Color::RED.to_array());
    }
}

#[test]
fn every_frame_resubmits_the_whole_scene() {
    let mut driver = driver(RecordingDevice::new());
    for _ in 0..3 {
        driver.on_tick().unwrap();
    }
    assert_eq!(driver.device().presented_frames(), 3);
    assert_eq!(driver.device().draws().len(), 6);
}

#[test]
fn injected_draw_failure_halts_without_present() {
    let mut driver = driver(RecordingDevice::new().failing_at(FailPoint::Draw(0)));
    let err = driver.on_tick().unwrap_err();

    assert_eq!(err.shape_index(), Some(0));
    assert!(matches!(err.device_error(), DeviceError::Backend(_)));

    let dev = driver.device();
    assert!(dev.draws().is_empty());
    assert_eq!(dev.presented_frames(), 0);
    assert!(!dev.calls().contains(&DeviceCall::Render));
    // Second shape was never uploaded.
    assert_eq!(dev.count(|c| matches!(c, DeviceCall::UploadVertices(_))), 1);
}

#[test]
fn resize_mid_session_keeps_rendering() {
    let mut driver = driver(RecordingDevice::new());
    driver.on_tick().unwrap();
    driver.resize(1280, 720).unwrap();
    driver.resize(1280, 720).unwrap();
    driver.on_tick().unwrap();

    let dev = driver.device();
    assert_eq!(dev.count(|c| matches!(c, DeviceCall::Resize { .. })), 1);
    assert_eq!(dev.draws().len(), 4);
    // Normalization follows the authored canvas, not the surface size.
    assert_eq!(dev.draws()[0].vertices, dev.draws()[2].vertices);
}

#[test]
fn shutdown_is_idempotent_through_the_driver() {
    let mut driver = driver(RecordingDevice::new());
    driver.shutdown();
    driver.shutdown();
    assert_eq!(driver.device().state(), DeviceState::ShutDown);
    assert_eq!(driver.device().count(|c| *c == DeviceCall::Shutdown), 1);
    assert!(driver.on_tick().unwrap_err().is_fatal());
}
