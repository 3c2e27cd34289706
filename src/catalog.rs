//! # Catalog projection
//!
//! Fixed sky catalogs (stars, constellation figures, boundaries and names, Messier objects and
//! the Milky Way contour) and their projection on the polar map for one observer and one sidereal
//! time.
//!
//! ## Overview
//!
//! - Point entries (stars, names, Messier objects) are projected one by one; the output vectors
//!   are parallel to the catalog vectors.
//! - Constellation lines are clipped at the horizon; an invisible line gives `None`.
//! - Boundaries form one ordered vertex chain: the segment ending at vertex `i + 1` exists only if
//!   that vertex is flagged `ok`, and is then clipped like a constellation line.
//! - The Milky Way contour is a polyline with explicit [`ContourPoint::Break`] markers. Two
//!   consecutive points are joined only if both are above the horizon; a break always starts a
//!   new path. The contour is not clipped.
//!
//! Records are produced by an external loader; the encoded constructors accept the integer
//! fields of the catalog files (right ascension in thousandths of hours, declination in
//! hundredths of degrees).
use itertools::Itertools;
use nalgebra::Point2;

use crate::constants::{Degree, Hour, MESSIER_ID_OFFSET};
use crate::projection::{EquatorialCoords, ProjectedPoint, ProjectedSegment, Projector};

/// Decode integer catalog coordinates.
///
/// Arguments
/// ---------
/// * `ra`: right ascension in thousandths of hours
/// * `dec`: declination in hundredths of degrees
pub fn decode_coords(ra: i32, dec: i32) -> EquatorialCoords {
    EquatorialCoords::from_hours_degrees(ra as f64 / 1000.0, dec as f64 / 100.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstellationStar {
    pub name: String,
    pub coords: EquatorialCoords,
    pub magnitude: f64,
}

impl ConstellationStar {
    pub fn new(name: impl Into<String>, ra: Hour, dec: Degree, magnitude: f64) -> Self {
        ConstellationStar {
            name: name.into(),
            coords: EquatorialCoords::from_hours_degrees(ra, dec),
            magnitude,
        }
    }
}

/// One stroke of a constellation figure.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstellationLine {
    pub constellation: String,
    pub start: EquatorialCoords,
    pub end: EquatorialCoords,
}

impl ConstellationLine {
    pub fn from_encoded(
        constellation: impl Into<String>,
        ra1: i32,
        dec1: i32,
        ra2: i32,
        dec2: i32,
    ) -> Self {
        ConstellationLine {
            constellation: constellation.into(),
            start: decode_coords(ra1, dec1),
            end: decode_coords(ra2, dec2),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstellationName {
    pub name: String,
    pub coords: EquatorialCoords,
}

impl ConstellationName {
    pub fn from_encoded(ra: i32, dec: i32, name: impl Into<String>) -> Self {
        ConstellationName {
            name: name.into(),
            coords: decode_coords(ra, dec),
        }
    }
}

/// A vertex of the boundary chain.
///
/// `ok` gates the segment arriving at this vertex from the previous one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryVertex {
    pub ok: bool,
    pub coords: EquatorialCoords,
}

impl BoundaryVertex {
    pub fn from_encoded(ok: bool, ra: i32, dec: i32) -> Self {
        BoundaryVertex {
            ok,
            coords: decode_coords(ra, dec),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessierObject {
    pub name: String,
    pub coords: EquatorialCoords,
    pub magnitude: f64,
}

impl MessierObject {
    pub fn new(name: impl Into<String>, ra: Hour, dec: Degree, magnitude: f64) -> Self {
        MessierObject {
            name: name.into(),
            coords: EquatorialCoords::from_hours_degrees(ra, dec),
            magnitude,
        }
    }

    /// Messier number parsed from a name such as `"M31"`.
    pub fn number(&self) -> Option<usize> {
        self.name
            .trim()
            .strip_prefix('M')?
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|n| *n >= 1)
    }

    /// Selection identity: `M<n>` maps to `10 + n − 1`, after the solar-system identities.
    pub fn id(&self) -> Option<usize> {
        self.number().and_then(|n| MESSIER_ID_OFFSET.checked_add(n - 1))
    }
}

/// A point of the Milky Way contour, or a break between two paths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContourPoint {
    Point(EquatorialCoords),
    Break,
}

impl ContourPoint {
    pub fn from_hours_degrees(ra: Hour, dec: Degree) -> Self {
        ContourPoint::Point(EquatorialCoords::from_hours_degrees(ra, dec))
    }
}

/// Join consecutive visible contour points into paths.
///
/// Return
/// ------
/// * the paths of at least two points, in contour order.
pub fn contour_paths(points: &[ContourPoint], projector: &Projector) -> Vec<Vec<Point2<f64>>> {
    let mut paths = Vec::new();
    let mut current: Vec<Point2<f64>> = Vec::new();

    for point in points {
        let projected = match point {
            ContourPoint::Point(coords) => Some(projector.project(coords)),
            ContourPoint::Break => None,
        };
        match projected {
            Some(ProjectedPoint {
                point,
                visible: true,
            }) => current.push(point),
            _ => {
                if current.len() > 1 {
                    paths.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
        }
    }
    if current.len() > 1 {
        paths.push(current);
    }
    paths
}

/// Segments of the boundary chain, clipped at the horizon.
pub fn boundary_segments(
    vertices: &[BoundaryVertex],
    projector: &Projector,
) -> Vec<ProjectedSegment> {
    vertices
        .iter()
        .tuple_windows()
        .filter(|(_, next)| next.ok)
        .filter_map(|(vertex, next)| projector.project_segment(&vertex.coords, &next.coords))
        .collect()
}

/// All fixed catalogs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub stars: Vec<ConstellationStar>,
    pub lines: Vec<ConstellationLine>,
    pub names: Vec<ConstellationName>,
    pub boundaries: Vec<BoundaryVertex>,
    pub messier: Vec<MessierObject>,
    pub milky_way: Vec<ContourPoint>,
}

/// Projection of a [`Catalog`].
///
/// `stars`, `lines`, `names` and `messier` are parallel to the catalog vectors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogProjection {
    pub stars: Vec<ProjectedPoint>,
    pub lines: Vec<Option<ProjectedSegment>>,
    pub names: Vec<ProjectedPoint>,
    pub boundaries: Vec<ProjectedSegment>,
    pub messier: Vec<ProjectedPoint>,
    pub milky_way: Vec<Vec<Point2<f64>>>,
}

impl Catalog {
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
            && self.lines.is_empty()
            && self.names.is_empty()
            && self.boundaries.is_empty()
            && self.messier.is_empty()
            && self.milky_way.is_empty()
    }

    /// Find a Messier object by its selection identity.
    pub fn messier_by_id(&self, id: usize) -> Option<&MessierObject> {
        self.messier.iter().find(|m| m.id() == Some(id))
    }

    pub fn project(&self, projector: &Projector) -> CatalogProjection {
        CatalogProjection {
            stars: self
                .stars
                .iter()
                .map(|s| projector.project(&s.coords))
                .collect(),
            lines: self
                .lines
                .iter()
                .map(|l| projector.project_segment(&l.start, &l.end))
                .collect(),
            names: self
                .names
                .iter()
                .map(|n| projector.project(&n.coords))
                .collect(),
            boundaries: boundary_segments(&self.boundaries, projector),
            messier: self
                .messier
                .iter()
                .map(|m| projector.project(&m.coords))
                .collect(),
            milky_way: contour_paths(&self.milky_way, projector),
        }
    }
}
