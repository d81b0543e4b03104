use crate::error::Error;

use nalgebra as na;
use serde_derive::{Deserialize, Serialize};
use std::marker::PhantomData;

pub trait BBoxFormat: std::fmt::Debug {}

/// Left-top-right-bottom format, contains left top and right bottom corners
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq)]
pub struct Ltrb;
impl BBoxFormat for Ltrb {}

/// Pixel-space box. Serialized as a bare `[f32; 4]` in the box's format.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(transparent)]
pub struct BBox<F: BBoxFormat = Ltrb>([f32; 4], #[serde(skip)] PhantomData<F>);

impl<F: BBoxFormat> From<BBox<F>> for [f32; 4] {
    fn from(bbox: BBox<F>) -> Self {
        bbox.0
    }
}

impl<F: BBoxFormat> BBox<F> {
    #[inline]
    pub fn as_slice(&self) -> &[f32; 4] {
        &self.0
    }
}

impl BBox<Ltrb> {
    #[inline]
    pub fn ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        BBox([left, top, right, bottom], PhantomData)
    }

    #[inline(always)]
    pub fn left(&self) -> f32 {
        self.0[0]
    }

    #[inline(always)]
    pub fn top(&self) -> f32 {
        self.0[1]
    }

    #[inline(always)]
    pub fn right(&self) -> f32 {
        self.0[2]
    }

    #[inline(always)]
    pub fn bottom(&self) -> f32 {
        self.0[3]
    }

    #[inline(always)]
    pub fn width(&self) -> f32 {
        self.right() - self.left()
    }

    #[inline(always)]
    pub fn height(&self) -> f32 {
        self.bottom() - self.top()
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    #[inline]
    pub fn center(&self) -> na::Point2<f32> {
        na::Point2::new(
            self.left() + self.width() / 2.0,
            self.top() + self.height() / 2.0,
        )
    }

    #[inline]
    pub fn top_left(&self) -> na::Point2<f32> {
        na::Point2::new(self.left(), self.top())
    }

    /// Overlapping rectangle of two boxes, `None` when they are disjoint.
    /// Boxes that merely touch yield a zero-area intersection.
    pub fn intersection(&self, other: &BBox<Ltrb>) -> Option<BBox<Ltrb>> {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right < left || bottom < top {
            return None;
        }

        Some(BBox::ltrb(left, top, right, bottom))
    }

    /// Rejects boxes with a negative extent or non-finite coordinates.
    /// Zero-area boxes pass.
    pub fn validate(&self) -> Result<(), Error> {
        let finite = self.0.iter().all(|v| v.is_finite());

        if !finite || self.width() < 0.0 || self.height() < 0.0 {
            return Err(Error::MalformedBox {
                left: self.left(),
                top: self.top(),
                right: self.right(),
                bottom: self.bottom(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_ltrb_properties() {
        let bbox = BBox::ltrb(100.0, 50.0, 180.0, 190.0);
        assert_eq!(bbox.width(), 80.0);
        assert_eq!(bbox.height(), 140.0);
        assert_eq!(bbox.area(), 11200.0);

        let c = bbox.center();
        assert_abs_diff_eq!(c.x, 140.0);
        assert_abs_diff_eq!(c.y, 120.0);
    }

    #[test]
    fn test_intersection() {
        let a = BBox::ltrb(0.0, 0.0, 10.0, 10.0);
        let b = BBox::ltrb(5.0, 5.0, 15.0, 15.0);
        assert_eq!(a.intersection(&b), Some(BBox::ltrb(5.0, 5.0, 10.0, 10.0)));

        let far = BBox::ltrb(20.0, 20.0, 30.0, 30.0);
        assert_eq!(a.intersection(&far), None);

        let touching = BBox::ltrb(10.0, 0.0, 20.0, 10.0);
        assert_eq!(a.intersection(&touching).map(|i| i.area()), Some(0.0));
    }

    #[test]
    fn test_validate() {
        assert!(BBox::ltrb(1.0, 1.0, 1.0, 1.0).validate().is_ok());
        assert!(matches!(
            BBox::ltrb(10.0, 0.0, 5.0, 10.0).validate(),
            Err(Error::MalformedBox { .. })
        ));
        assert!(BBox::ltrb(0.0, f32::NAN, 5.0, 10.0).validate().is_err());
    }

    #[test]
    fn test_serde_plain_array() {
        let bbox: BBox = serde_json::from_str("[1.0, 2.0, 3.0, 4.0]").unwrap();
        assert_eq!(bbox, BBox::ltrb(1.0, 2.0, 3.0, 4.0));
        assert_eq!(serde_json::to_string(&bbox).unwrap(), "[1.0,2.0,3.0,4.0]");
        assert_eq!(<[f32; 4]>::from(bbox), [1.0, 2.0, 3.0, 4.0]);
    }
}
