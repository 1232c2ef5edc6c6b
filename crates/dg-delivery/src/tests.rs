//! Unit tests for dg-delivery.

#[cfg(test)]
mod points {
    use dg_core::Cell;

    use crate::DeliveryPoints;

    #[test]
    fn iterates_in_cell_order() {
        let points: DeliveryPoints = [Cell::new(3, 0), Cell::new(0, 5), Cell::new(0, 2)]
            .into_iter()
            .collect();
        let order: Vec<_> = points.iter().collect();
        assert_eq!(order, vec![Cell::new(0, 2), Cell::new(0, 5), Cell::new(3, 0)]);
    }

    #[test]
    fn remove_shrinks_once() {
        let mut points: DeliveryPoints = [Cell::new(1, 1), Cell::new(2, 2)].into_iter().collect();
        assert!(points.remove(Cell::new(1, 1)));
        assert!(!points.remove(Cell::new(1, 1)));
        assert_eq!(points.len(), 1);
        assert!(!points.contains(Cell::new(1, 1)));
    }
}

#[cfg(test)]
mod selector {
    use dg_core::Cell;

    use crate::{nearest_target, DeliveryPoints};

    #[test]
    fn empty_set_has_no_target() {
        assert_eq!(nearest_target(Cell::ORIGIN, &DeliveryPoints::new()), None);
    }

    #[test]
    fn picks_minimum_manhattan() {
        let points: DeliveryPoints = [Cell::new(5, 5), Cell::new(1, 3), Cell::new(4, 0)]
            .into_iter()
            .collect();
        // Distances from origin: 10, 4, 4 → tie between (1,3) and (4,0).
        assert_eq!(nearest_target(Cell::ORIGIN, &points), Some(Cell::new(1, 3)));
        assert_eq!(nearest_target(Cell::new(5, 4), &points), Some(Cell::new(5, 5)));
    }

    #[test]
    fn tie_goes_to_smallest_cell() {
        let points: DeliveryPoints = [Cell::new(2, 1), Cell::new(1, 2), Cell::new(0, 1)]
            .into_iter()
            .collect();
        // From (1,1): (0,1)→1, (1,2)→1, (2,1)→1.
        assert_eq!(nearest_target(Cell::new(1, 1), &points), Some(Cell::new(0, 1)));
    }
}
