// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tests for geometry processors.

use super::*;
use crate::output::ConvertedGeometry;
use crate::router::{Conversion, GeometryProcessor};
use crate::Error;
use approx::assert_relative_eq;
use r3dm_lite_model::{
    ArcCurveData, BrepData, BrepFaceData, ExtrusionData, Geometry, NurbsSurfaceData, Point3d,
    PolylineCurveData, ProfileData, WeightedPoint,
};

fn flat_surface(count_u: usize, count_v: usize) -> NurbsSurfaceData {
    // Bilinear patch: degree 1 in both directions, clamped knots
    let mut control_points = Vec::new();
    for u in 0..count_u {
        for v in 0..count_v {
            control_points.push(WeightedPoint::unweighted(u as f64, v as f64, 0.0));
        }
    }
    let clamped = |count: usize| {
        let mut knots = vec![0.0, 0.0];
        for i in 0..count.saturating_sub(2) {
            knots.push((i + 1) as f64);
        }
        knots.push(*knots.last().unwrap() + 1.0);
        knots.push(*knots.last().unwrap());
        knots
    };
    NurbsSurfaceData {
        degree_u: 1,
        degree_v: 1,
        count_u,
        count_v,
        control_points,
        knots_u: clamped(count_u),
        knots_v: clamped(count_v),
    }
}

#[test]
fn test_brep_assembles_compound_of_faces() {
    let brep = Geometry::Brep(BrepData {
        faces: vec![
            BrepFaceData {
                surface: flat_surface(2, 2),
            },
            BrepFaceData {
                surface: flat_surface(3, 2),
            },
        ],
    });

    let processor = BrepProcessor::new();
    let conversion = processor.process(&brep).unwrap();
    let Conversion::Converted(ConvertedGeometry::Compound(surfaces)) = conversion else {
        panic!("expected a compound");
    };
    assert_eq!(surfaces.len(), 2);
    assert_eq!(surfaces[1].count_u(), 3);
}

#[test]
fn test_brep_drops_failing_face_keeps_rest() {
    let mut bad = flat_surface(2, 2);
    bad.control_points[0].w = 0.0;
    let brep = Geometry::Brep(BrepData {
        faces: vec![
            BrepFaceData { surface: bad },
            BrepFaceData {
                surface: flat_surface(2, 2),
            },
        ],
    });

    let processor = BrepProcessor::new();
    let conversion = processor.process(&brep).unwrap();
    let Conversion::Converted(ConvertedGeometry::Compound(surfaces)) = conversion else {
        panic!("expected a compound");
    };
    assert_eq!(surfaces.len(), 1);
}

#[test]
fn test_brep_all_faces_failing_is_an_error() {
    let mut bad = flat_surface(2, 2);
    bad.control_points[0].w = 0.0;
    let brep = Geometry::Brep(BrepData {
        faces: vec![BrepFaceData { surface: bad }],
    });

    let processor = BrepProcessor::new();
    let err = processor.process(&brep).unwrap_err();
    assert!(matches!(err, Error::DegenerateWeight { index: 0 }));
}

#[test]
fn test_extrusion_circle_profile_becomes_cylinder() {
    let extrusion = Geometry::Extrusion(ExtrusionData {
        path_start: Point3d::new(1.0, 2.0, 10.0),
        path_end: Point3d::new(1.0, 2.0, 4.0),
        profile: ProfileData::Circle { radius: 2.5 },
    });

    let processor = ExtrusionProcessor::new();
    let conversion = processor.process(&extrusion).unwrap();
    let Conversion::Converted(ConvertedGeometry::Cylinder {
        base,
        axis,
        radius,
        height,
    }) = conversion
    else {
        panic!("expected a cylinder");
    };
    assert_relative_eq!(radius, 2.5);
    assert_relative_eq!(height, 6.0);
    // Base at the lower path end, axis pointing up the path
    assert_relative_eq!(base.z, 4.0);
    assert_relative_eq!(axis.z, 1.0);
}

#[test]
fn test_extrusion_other_profile_is_skipped_with_kind() {
    let extrusion = Geometry::Extrusion(ExtrusionData {
        path_start: Point3d::new(0.0, 0.0, 0.0),
        path_end: Point3d::new(0.0, 0.0, 3.0),
        profile: ProfileData::Polyline {
            points: vec![
                Point3d::new(0.0, 0.0, 0.0),
                Point3d::new(1.0, 0.0, 0.0),
                Point3d::new(1.0, 1.0, 0.0),
            ],
        },
    });

    let processor = ExtrusionProcessor::new();
    let conversion = processor.process(&extrusion).unwrap();
    assert_eq!(
        conversion,
        Conversion::Skipped("Extrusion(Polyline)".to_string())
    );
}

#[test]
fn test_arc_angles_from_center_and_start() {
    let arc = Geometry::ArcCurve(ArcCurveData {
        center: Point3d::new(1.0, 1.0, 0.0),
        radius: 2.0,
        point_at_start: Point3d::new(3.0, 1.0, 0.0),
        angle_degrees: 90.0,
    });

    let processor = ArcCurveProcessor::new();
    let conversion = processor.process(&arc).unwrap();
    let Conversion::Converted(ConvertedGeometry::Arc {
        radius,
        start_angle,
        end_angle,
        ..
    }) = conversion
    else {
        panic!("expected an arc");
    };
    assert_relative_eq!(radius, 2.0);
    assert_relative_eq!(start_angle, 0.0);
    assert_relative_eq!(end_angle, std::f64::consts::FRAC_PI_2);
}

#[test]
fn test_polyline_needs_two_points() {
    let polyline = Geometry::PolylineCurve(PolylineCurveData {
        points: vec![Point3d::new(0.0, 0.0, 0.0)],
    });

    let processor = PolylineCurveProcessor::new();
    let err = processor.process(&polyline).unwrap_err();
    assert!(matches!(err, Error::EmptyGeometry(_)));
}
