//! Demo scene on the default 1920x1080 canvas.

use vektor_engine::coords::Vec2;
use vektor_engine::device::RenderDevice;
use vektor_engine::paint::{Color, Fill, Stroke};
use vektor_engine::renderer::FrameDriver;
use vektor_engine::shape::{CubicCurve, Line, QuadraticCurve, Rect, ShapeError};

/// Adds the demo shapes; returns how many are in the scene.
pub fn build<D: RenderDevice>(driver: &mut FrameDriver<D>) -> Result<usize, ShapeError> {
    let center = Vec2::new(960.0, 540.0);

    driver.add_shape(Line::new(
        center,
        Vec2::new(1920.0, 1080.0),
        Stroke::new(Color::RED, 5.0),
    )?);

    driver.add_shape(Rect::new(0.0, 0.0, 960.0, 540.0, Fill::new(Color::WHITE))?);

    driver.add_shape(QuadraticCurve::new(
        center,
        Vec2::new(480.0, 1010.0),
        Vec2::new(0.0, 1080.0),
        Stroke::new(Color::GREEN, 5.0),
    )?);

    driver.add_shape(CubicCurve::new(
        center,
        Vec2::new(1200.0, 205.0),
        Vec2::new(1440.0, 335.0),
        Vec2::new(1920.0, 0.0),
        Stroke::new(Color::BLUE, 5.0),
    )?);

    Ok(driver.scene().len())
}
