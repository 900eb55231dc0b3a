// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::*;
use crate::output::ConvertedGeometry;
use r3dm_lite_model::{
    Geometry, LineCurveData, MeshData, MeshFace, ModelObject, NurbsCurveData, Point3d,
    WeightedPoint,
};

fn line_object() -> ModelObject {
    ModelObject::new(Geometry::LineCurve(LineCurveData {
        from: Point3d::new(0.0, 0.0, 0.0),
        to: Point3d::new(1.0, 0.0, 0.0),
    }))
}

fn nurbs_curve_data() -> NurbsCurveData {
    NurbsCurveData {
        degree: 2,
        control_points: vec![
            WeightedPoint::unweighted(0.0, 0.0, 0.0),
            WeightedPoint::unweighted(1.0, 1.0, 0.0),
            WeightedPoint::unweighted(2.0, 0.0, 0.0),
        ],
        knots: vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0],
    }
}

#[test]
fn test_line_never_reaches_generic_curve_case() {
    let router = GeometryRouter::new();
    let outcome = router.convert_object(0, &line_object());

    // A line satisfies the generic curve predicate too; specificity order
    // must classify it as a line.
    match outcome {
        ImportOutcome::Converted { geometry, .. } => {
            assert!(matches!(geometry, ConvertedGeometry::Line { .. }));
        }
        other => panic!("line not converted: {other:?}"),
    }
}

#[test]
fn test_nurbs_curve_converts() {
    let router = GeometryRouter::new();
    let object = ModelObject::new(Geometry::NurbsCurve(nurbs_curve_data()));
    let outcome = router.convert_object(0, &object);
    assert!(matches!(
        outcome,
        ImportOutcome::Converted {
            geometry: ConvertedGeometry::Curve(_),
            ..
        }
    ));
}

#[test]
fn test_generic_curve_uses_curve_builder() {
    let router = GeometryRouter::new();
    let object = ModelObject::new(Geometry::Curve(nurbs_curve_data()));
    let outcome = router.convert_object(0, &object);
    assert!(matches!(
        outcome,
        ImportOutcome::Converted {
            geometry: ConvertedGeometry::Curve(_),
            ..
        }
    ));
}

#[test]
fn test_unsupported_variants_are_skips_not_errors() {
    let router = GeometryRouter::new();
    for (geometry, expected) in [
        (Geometry::Box, "Box"),
        (Geometry::Circle, "Circle"),
        (Geometry::Cone, "Cone"),
        (Geometry::Cylinder, "Cylinder"),
        (Geometry::Bitmap, "Bitmap"),
        (Geometry::Ellipse, "Ellipse"),
        (Geometry::Surface, "Surface"),
    ] {
        let outcome = router.convert_object(0, &ModelObject::new(geometry));
        match outcome {
            ImportOutcome::Skipped { variant, .. } => assert_eq!(variant, expected),
            other => panic!("{expected} should skip, got {other:?}"),
        }
    }
}

#[test]
fn test_unknown_variant_skips_with_its_name() {
    let router = GeometryRouter::new();
    let object = ModelObject::new(Geometry::Unknown("SubD".to_string()));
    let outcome = router.convert_object(0, &object);
    match outcome {
        ImportOutcome::Skipped { variant, .. } => assert_eq!(variant, "SubD"),
        other => panic!("unknown variant should skip, got {other:?}"),
    }
}

#[test]
fn test_partial_failure_keeps_converting() {
    let mut bad = nurbs_curve_data();
    bad.control_points[1].w = 0.0;

    let objects = vec![
        line_object(),
        ModelObject::new(Geometry::NurbsCurve(bad)),
        ModelObject::new(Geometry::NurbsCurve(nurbs_curve_data())),
    ];

    let router = GeometryRouter::new();
    let outcomes = router.convert_objects(&objects);

    assert_eq!(outcomes.len(), 3);
    assert!(matches!(outcomes[0], ImportOutcome::Converted { .. }));
    match &outcomes[1] {
        ImportOutcome::Failed { index, error } => {
            assert_eq!(*index, 1);
            assert!(matches!(error, crate::Error::DegenerateWeight { index: 1 }));
        }
        other => panic!("expected a diagnostic, got {other:?}"),
    }
    // Objects after the failure still convert
    assert!(matches!(outcomes[2], ImportOutcome::Converted { .. }));
}

#[test]
fn test_parallel_conversion_preserves_source_order() {
    let mut objects = Vec::new();
    for i in 0..32 {
        if i % 5 == 0 {
            objects.push(ModelObject::new(Geometry::Box));
        } else {
            objects.push(line_object());
        }
    }

    let router = GeometryRouter::new();
    let sequential = router.convert_objects(&objects);
    let parallel = router.convert_objects_parallel(&objects);

    assert_eq!(sequential.len(), parallel.len());
    for (a, b) in sequential.iter().zip(parallel.iter()) {
        assert_eq!(a.index(), b.index());
        assert_eq!(
            matches!(a, ImportOutcome::Converted { .. }),
            matches!(b, ImportOutcome::Converted { .. })
        );
    }
}

#[test]
fn test_mesh_routes_to_triangulator() {
    let router = GeometryRouter::new();
    let object = ModelObject::new(Geometry::Mesh(MeshData {
        vertices: vec![
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(1.0, 0.0, 0.0),
            Point3d::new(1.0, 1.0, 0.0),
            Point3d::new(0.0, 1.0, 0.0),
        ],
        faces: vec![MeshFace::quad(0, 1, 2, 3)],
    }));

    let outcome = router.convert_object(0, &object);
    match outcome {
        ImportOutcome::Converted {
            geometry: ConvertedGeometry::Mesh(mesh),
            ..
        } => assert_eq!(mesh.facet_count(), 2),
        other => panic!("mesh should convert, got {other:?}"),
    }
}

#[test]
fn test_point_cloud_skips() {
    let router = GeometryRouter::new();
    let object = ModelObject::new(Geometry::PointCloud(r3dm_lite_model::PointCloudData {
        points: vec![Point3d::new(0.0, 0.0, 0.0)],
    }));
    let outcome = router.convert_object(0, &object);
    assert!(matches!(outcome, ImportOutcome::Skipped { .. }));
}
