//! Serialization of curves and points.

use weierstrass::{CurveParams, Error, FiniteFieldCurve, Point};

#[test]
fn curve_round_trip() {
    let curve = FiniteFieldCurve::new(-7, 10, 97).unwrap();
    let json = serde_json::to_string(&curve).unwrap();
    let decoded: FiniteFieldCurve = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, curve);
}

#[test]
fn curve_is_validated_on_deserialize() {
    let singular = CurveParams {
        a: 0.into(),
        b: 0.into(),
        order: 97.into(),
    };
    let json = serde_json::to_string(&singular).unwrap();

    let err = serde_json::from_str::<FiniteFieldCurve>(&json).unwrap_err();
    assert!(err.to_string().starts_with(&Error::SingularCurve.to_string()));

    let composite = CurveParams {
        order: 91.into(),
        ..FiniteFieldCurve::new(-7, 10, 97).unwrap().params()
    };
    let json = serde_json::to_string(&composite).unwrap();
    assert!(serde_json::from_str::<FiniteFieldCurve>(&json).is_err());
}

#[test]
fn point_round_trip() {
    for point in [Point::Identity, Point::new(9, 26)] {
        let json = serde_json::to_string(&point).unwrap();
        let decoded: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, point);
    }
}
