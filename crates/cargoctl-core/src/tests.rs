//! Unit tests for cargoctl-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AirportId, GroupId, PlaneId, PlaneTypeId};

    #[test]
    fn index_roundtrip() {
        let id = PlaneId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PlaneId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(PlaneId(0) < PlaneId(1));
        assert!(AirportId(100) > AirportId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(PlaneId::INVALID.0, u32::MAX);
        assert_eq!(AirportId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(PlaneId(7).to_string(), "PlaneId(7)");
    }

    #[test]
    fn no_airport_is_the_invalid_sentinel() {
        assert_eq!(crate::NO_AIRPORT, AirportId::INVALID);
    }

    #[test]
    fn group_id_keyed_by_type_and_component() {
        let a = GroupId::new(PlaneTypeId(0), 1);
        let b = GroupId::new(PlaneTypeId(0), 2);
        let c = GroupId::new(PlaneTypeId(1), 1);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, GroupId::new(PlaneTypeId(0), 1));
    }
}

#[cfg(test)]
mod time {
    use crate::{Tick, BIG_TIME};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn big_time_sentinel() {
        assert_eq!(Tick::BIG, Tick(BIG_TIME));
        assert_eq!(BIG_TIME, 100_000);
    }
}

#[cfg(test)]
mod constants {
    use crate::constants::{tw_overlap, PriorityBand, TW_OVERLAP_MARGIN};

    #[test]
    fn margin_is_fifteen() {
        assert_eq!(TW_OVERLAP_MARGIN, 15);
    }

    #[test]
    fn overlap_requires_margin_both_sides() {
        // S2: leg window (10, 20) vs a candidate edge window (10, 20) after
        // merge collapses to the same bounds — no margin on either side.
        assert!(!tw_overlap(10, 20, 10, 20));
        // Clearly separated windows with plenty of slack overlap.
        assert!(tw_overlap(0, 100, 10, 90));
    }

    #[test]
    fn priority_band_s6() {
        // S6: N=4, latest_deadline=1000, next deadline 500 at now=0 -> 4.
        let p = PriorityBand::from_deadline(0, 500, 1000, 4);
        assert_eq!(p.0, 4);
    }

    #[test]
    fn priority_band_defaults_to_max_without_a_deadline() {
        assert_eq!(PriorityBand::max(4).0, 4);
    }

    #[test]
    fn priority_band_min_picks_lower() {
        let a = PriorityBand(3);
        let b = PriorityBand(1);
        assert_eq!(a.min(b).0, 1);
    }
}
