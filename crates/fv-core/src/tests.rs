//! Unit tests for fv-core primitives.

#[cfg(test)]
mod camera {
    use crate::{CameraRequest, CameraState, GeoPoint};

    fn base() -> CameraState {
        CameraState {
            center:  GeoPoint::new(-72.97963, -37.57494),
            zoom:    8.06,
            bearing: 0.0,
            pitch:   0.0,
        }
    }

    #[test]
    fn zoom_within_tolerance_is_not_a_change() {
        let a = base();
        let mut b = base();
        b.zoom += 0.009;
        assert!(!b.differs_from(&a));
    }

    #[test]
    fn zoom_beyond_tolerance_is_a_change() {
        let a = base();
        let mut b = base();
        b.zoom += 0.02;
        assert!(b.differs_from(&a));
    }

    #[test]
    fn center_tolerance() {
        let a = base();
        let mut b = base();
        b.center.lng += 0.0009;
        assert!(!b.differs_from(&a));
        b.center.lat += 0.002;
        assert!(b.differs_from(&a));
    }

    #[test]
    fn bearing_and_pitch_tolerance() {
        let a = base();
        let mut b = base();
        b.bearing = 0.4;
        assert!(!b.differs_from(&a));
        b.bearing = 0.6;
        assert!(b.differs_from(&a));

        let mut c = base();
        c.pitch = 0.4;
        assert!(!c.differs_from(&a));
        c.pitch = 0.6;
        assert!(c.differs_from(&a));
    }

    #[test]
    fn request_target_roundtrip() {
        let state = base();
        let request = CameraRequest::to_state(state, 2500);
        assert_eq!(request.target(), state);
        assert_eq!(request.duration_ms, 2500);
        assert!(request.essential);
    }
}

#[cfg(test)]
mod color {
    use crate::Color;
    use crate::color::{FALLBACK_COLOR, RECYCLING_COLOR};

    #[test]
    fn hex_roundtrip() {
        let c = Color::from_hex("#FA697C").unwrap();
        assert_eq!(c, Color::rgb(0xFA, 0x69, 0x7C));
        assert_eq!(c.to_string(), "#FA697C");
    }

    #[test]
    fn leading_hash_optional() {
        assert_eq!(Color::from_hex("008891").unwrap(), Color::rgb(0, 0x88, 0x91));
    }

    #[test]
    fn malformed_hex_rejected() {
        assert!(Color::from_hex("#FFF").is_err());
        assert!(Color::from_hex("#GGGGGG").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn palette_constants() {
        assert_eq!(RECYCLING_COLOR, Color::from_hex("#8EE89E").unwrap());
        assert_eq!(FALLBACK_COLOR, Color::from_hex("#FFFFFF").unwrap());
    }
}

#[cfg(test)]
mod geo {
    use crate::ScreenPoint;

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = ScreenPoint::new(0.0, 0.0);
        let b = ScreenPoint::new(10.0, 20.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), ScreenPoint::new(5.0, 10.0));
    }
}

#[cfg(test)]
mod ids {
    use crate::{FlowId, FlowKind, RouteId};

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(RouteId::INVALID.0, u32::MAX);
        assert_eq!(RouteId::default(), RouteId::INVALID);
    }

    #[test]
    fn flow_ids_distinguish_arc_and_kind() {
        let a = FlowId::new(RouteId(1), 0, 0, FlowKind::Waste);
        let b = FlowId::new(RouteId(1), 0, 1, FlowKind::Waste);
        let c = FlowId::new(RouteId(1), 0, 0, FlowKind::Recycling);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_includes_direction_tag() {
        let id = FlowId::new(RouteId(3), 7, 1, FlowKind::Recycling);
        assert_eq!(id.to_string(), "3_recycle_7_1");
    }
}

#[cfg(test)]
mod rng {
    use crate::PhaseRng;

    #[test]
    fn phases_stay_in_unit_interval() {
        let mut rng = PhaseRng::seeded(42);
        for _ in 0..1_000 {
            let t = rng.next_phase();
            assert!((0.0..1.0).contains(&t), "phase out of range: {t}");
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = PhaseRng::seeded(7);
        let mut b = PhaseRng::seeded(7);
        for _ in 0..16 {
            assert_eq!(a.next_phase(), b.next_phase());
        }
    }
}
