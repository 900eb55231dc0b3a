// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end conversion of a mixed object batch through the public API.

use r3dm_lite_geometry::{ConvertedGeometry, GeometryRouter, ImportOutcome};
use r3dm_lite_model::{
    BrepData, BrepFaceData, ExtrusionData, Geometry, LineCurveData, MeshData, MeshFace,
    ModelObject, NurbsCurveData, NurbsSurfaceData, Point3d, ProfileData, WeightedPoint,
};

fn bilinear_patch() -> NurbsSurfaceData {
    NurbsSurfaceData {
        degree_u: 1,
        degree_v: 1,
        count_u: 2,
        count_v: 2,
        control_points: vec![
            WeightedPoint::unweighted(0.0, 0.0, 0.0),
            WeightedPoint::unweighted(0.0, 1.0, 0.0),
            WeightedPoint::unweighted(1.0, 0.0, 0.0),
            WeightedPoint::unweighted(1.0, 1.0, 1.0),
        ],
        knots_u: vec![0.0, 0.0, 1.0, 1.0],
        knots_v: vec![0.0, 0.0, 1.0, 1.0],
    }
}

#[test]
fn converts_a_mixed_model_in_source_order() {
    let objects = vec![
        ModelObject::new(Geometry::Brep(BrepData {
            faces: vec![
                BrepFaceData {
                    surface: bilinear_patch(),
                },
                BrepFaceData {
                    surface: bilinear_patch(),
                },
            ],
        })),
        ModelObject::new(Geometry::LineCurve(LineCurveData {
            from: Point3d::new(0.0, 0.0, 0.0),
            to: Point3d::new(0.0, 0.0, 5.0),
        })),
        ModelObject::new(Geometry::NurbsCurve(NurbsCurveData {
            degree: 2,
            control_points: vec![
                WeightedPoint::unweighted(0.0, 0.0, 0.0),
                WeightedPoint::new(2.0, 2.0, 0.0, 2.0),
                WeightedPoint::unweighted(2.0, 0.0, 0.0),
            ],
            knots: vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0],
        })),
        ModelObject::new(Geometry::Mesh(MeshData {
            vertices: vec![
                Point3d::new(0.0, 0.0, 0.0),
                Point3d::new(1.0, 0.0, 0.0),
                Point3d::new(1.0, 1.0, 0.0),
                Point3d::new(0.0, 1.0, 0.0),
            ],
            faces: vec![MeshFace::quad(0, 1, 2, 3), MeshFace::triangle(0, 1, 2)],
        })),
        ModelObject::new(Geometry::Extrusion(ExtrusionData {
            path_start: Point3d::new(0.0, 0.0, 8.0),
            path_end: Point3d::new(0.0, 0.0, 0.0),
            profile: ProfileData::Circle { radius: 1.5 },
        })),
        ModelObject::new(Geometry::PointCloud(r3dm_lite_model::PointCloudData {
            points: vec![Point3d::new(1.0, 2.0, 3.0)],
        })),
    ];

    let router = GeometryRouter::new();
    let outcomes = router.convert_objects(&objects);
    assert_eq!(outcomes.len(), objects.len());

    let ImportOutcome::Converted {
        geometry: ConvertedGeometry::Compound(faces),
        ..
    } = &outcomes[0]
    else {
        panic!("brep should become a compound");
    };
    assert_eq!(faces.len(), 2);

    assert!(matches!(
        &outcomes[1],
        ImportOutcome::Converted {
            geometry: ConvertedGeometry::Line { .. },
            ..
        }
    ));

    let ImportOutcome::Converted {
        geometry: ConvertedGeometry::Curve(curve),
        ..
    } = &outcomes[2]
    else {
        panic!("nurbs curve should convert");
    };
    // Rational weight survives dehomogenization
    assert_eq!(curve.weights()[1], 2.0);

    let ImportOutcome::Converted {
        geometry: ConvertedGeometry::Mesh(mesh),
        ..
    } = &outcomes[3]
    else {
        panic!("mesh should convert");
    };
    // One quad split in two, one true triangle
    assert_eq!(mesh.facet_count(), 3);

    let ImportOutcome::Converted {
        geometry:
            ConvertedGeometry::Cylinder {
                radius, height, ..
            },
        ..
    } = &outcomes[4]
    else {
        panic!("circular extrusion should become a cylinder");
    };
    assert_eq!(*radius, 1.5);
    assert_eq!(*height, 8.0);

    assert!(matches!(&outcomes[5], ImportOutcome::Skipped { variant, .. } if variant == "PointCloud"));
}

#[test]
fn parallel_batch_matches_sequential_batch() {
    let objects: Vec<ModelObject> = (0..64)
        .map(|i| {
            ModelObject::new(Geometry::LineCurve(LineCurveData {
                from: Point3d::new(i as f64, 0.0, 0.0),
                to: Point3d::new(i as f64, 1.0, 0.0),
            }))
        })
        .collect();

    let router = GeometryRouter::new();
    let sequential = router.convert_objects(&objects);
    let parallel = router.convert_objects_parallel(&objects);

    for (a, b) in sequential.iter().zip(parallel.iter()) {
        let (
            ImportOutcome::Converted {
                index: ia,
                geometry: ConvertedGeometry::Line { from: fa, .. },
            },
            ImportOutcome::Converted {
                index: ib,
                geometry: ConvertedGeometry::Line { from: fb, .. },
            },
        ) = (a, b)
        else {
            panic!("all objects should convert");
        };
        assert_eq!(ia, ib);
        assert_eq!(fa, fb);
    }
}
