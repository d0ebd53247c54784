use crate::shape::Shape;

/// Ordered collection of owned shapes.
///
/// Shapes are drawn in insertion order with no depth test, so a later shape
/// paints over an earlier one where they overlap.
///
/// Performance characteristics:
/// - `add()` is O(1) amortized
/// - `clear()` drops every shape and keeps the allocation for reuse
#[derive(Debug, Default, Clone)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a shape and returns its draw position.
    #[inline]
    pub fn add(&mut self, shape: impl Into<Shape>) -> usize {
        self.shapes.push(shape.into());
        self.shapes.len() - 1
    }

    /// Removes and drops every shape.
    #[inline]
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes in draw order.
    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<Shape>> Extend<S> for Scene {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.shapes.extend(iter.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::{Color, Fill, Stroke};
    use crate::shape::{Line, Rect};

    fn rect(x: f32) -> Rect {
        Rect::new(x, 0.0, 1.0, 1.0, Fill::new(Color::WHITE)).unwrap()
    }

    #[test]
    fn preserves_insertion_order() {
        let mut scene = Scene::new();
        assert_eq!(scene.add(rect(3.0)), 0);
        assert_eq!(scene.add(rect(1.0)), 1);
        assert_eq!(scene.add(rect(2.0)), 2);

        let xs: Vec<f32> = scene
            .iter()
            .map(|s| match s {
                Shape::Rect(r) => r.origin().x,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(xs, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn mixed_kinds_and_clear() {
        let mut scene = Scene::new();
        scene.add(rect(0.0));
        scene.add(Line::new(Vec2::zero(), Vec2::new(1.0, 1.0), Stroke::new(Color::RED, 1.0)).unwrap());
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.shapes()[1].kind(), "line");

        scene.clear();
        assert!(scene.is_empty());
        assert_eq!(scene.add(rect(5.0)), 0);
    }

    #[test]
    fn extend_appends_in_order() {
        let mut scene = Scene::new();
        scene.extend([rect(1.0), rect(2.0)]);
        assert_eq!(scene.len(), 2);
    }
}
