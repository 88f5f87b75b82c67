use tracing::trace;

use crate::error::Result;
use crate::geometry::{cubic_curve, quad_curve};
use crate::math::Point2;
use crate::path::{exhausted, PathIterator, Segment, WindingRule};

use super::FlattenParams;

/// A curve piece awaiting flattening, in raw coordinates.
#[derive(Debug, Clone, Copy)]
enum Piece {
    Quad([f64; 6]),
    Cubic([f64; 8]),
}

impl Piece {
    fn flatness_sq(&self) -> f64 {
        match self {
            Self::Quad(c) => quad_curve::flatness_sq(c),
            Self::Cubic(c) => cubic_curve::flatness_sq(c),
        }
    }

    fn is_finite(&self) -> bool {
        match self {
            Self::Quad(c) => c.iter().all(|v| v.is_finite()),
            Self::Cubic(c) => c.iter().all(|v| v.is_finite()),
        }
    }

    fn split(&self) -> (Self, Self) {
        match self {
            Self::Quad(c) => {
                let (l, r) = quad_curve::subdivide(c);
                (Self::Quad(l), Self::Quad(r))
            }
            Self::Cubic(c) => {
                let (l, r) = cubic_curve::subdivide(c);
                (Self::Cubic(l), Self::Cubic(r))
            }
        }
    }

    fn end(&self) -> Point2 {
        match self {
            Self::Quad(c) => Point2::new(c[4], c[5]),
            Self::Cubic(c) => Point2::new(c[6], c[7]),
        }
    }
}

/// Wraps a path iterator and replaces every curve with line segments.
///
/// Curves are bisected at `t = 0.5` until each piece's control points lie
/// within the configured flatness of its chord, or until the subdivision
/// limit is reached. Move, line and close segments pass through unchanged.
pub struct FlatteningPathIter<'a> {
    source: Box<dyn PathIterator + 'a>,
    flatness_sq: f64,
    limit: u32,
    /// Pending pieces of the current curve; the last one is emitted next.
    stack: Vec<(Piece, u32)>,
    current: Option<Segment>,
    last: Point2,
    start: Point2,
}

impl<'a> FlatteningPathIter<'a> {
    #[must_use]
    pub fn new(source: Box<dyn PathIterator + 'a>, params: FlattenParams) -> Self {
        let mut iter = Self {
            source,
            flatness_sq: params.flatness() * params.flatness(),
            limit: params.limit(),
            stack: Vec::new(),
            current: None,
            last: Point2::origin(),
            start: Point2::origin(),
        };
        iter.fetch();
        iter
    }

    /// Loads the next output segment into `current`.
    fn fetch(&mut self) {
        loop {
            if let Some((piece, level)) = self.stack.pop() {
                if let Some(segment) = self.refine(piece, level) {
                    self.current = Some(segment);
                    return;
                }
                continue;
            }

            if self.source.is_done() {
                self.current = None;
                return;
            }
            let Ok(segment) = self.source.current_segment() else {
                self.current = None;
                return;
            };
            self.source.advance();

            match segment {
                Segment::MoveTo(p) => {
                    self.start = p;
                    self.last = p;
                }
                Segment::LineTo(p) => self.last = p,
                Segment::Close => self.last = self.start,
                Segment::QuadTo(c, p) => {
                    let piece = Piece::Quad([self.last.x, self.last.y, c.x, c.y, p.x, p.y]);
                    self.stack.push((piece, 0));
                    continue;
                }
                Segment::CubicTo(c1, c2, p) => {
                    let piece = Piece::Cubic([
                        self.last.x,
                        self.last.y,
                        c1.x,
                        c1.y,
                        c2.x,
                        c2.y,
                        p.x,
                        p.y,
                    ]);
                    self.stack.push((piece, 0));
                    continue;
                }
            }
            self.current = Some(segment);
            return;
        }
    }

    /// Either emits `piece` as a line or splits it back onto the stack.
    fn refine(&mut self, piece: Piece, level: u32) -> Option<Segment> {
        if !piece.is_finite() {
            trace!("non-finite curve emitted as a single line");
        } else if piece.flatness_sq() >= self.flatness_sq {
            if level < self.limit {
                let (left, right) = piece.split();
                self.stack.push((right, level + 1));
                self.stack.push((left, level + 1));
                return None;
            }
            trace!(limit = self.limit, "flattening stopped at subdivision limit");
        }
        let end = piece.end();
        self.last = end;
        Some(Segment::LineTo(end))
    }
}

impl PathIterator for FlatteningPathIter<'_> {
    fn winding_rule(&self) -> WindingRule {
        self.source.winding_rule()
    }

    fn is_done(&self) -> bool {
        self.current.is_none()
    }

    fn advance(&mut self) {
        if !self.is_done() {
            self.fetch();
        }
    }

    fn current_segment(&self) -> Result<Segment> {
        self.current.ok_or_else(exhausted)
    }
}
