use crate::input::{FurnitureItem, RoomSpec};
use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Area bookkeeping for one room and its furniture.
///
/// Values are unrounded; open space goes negative when the furniture covers
/// more than the floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaceMetrics {
    pub room_area_sqft: f64,
    pub total_footprint_sqft: f64,
    pub open_space_sqft: f64,
    pub open_space_percent: f64,
    pub footprint_percent: f64,
}

impl SpaceMetrics {
    pub fn compute(room: &RoomSpec, furniture: &[FurnitureItem]) -> Self {
        let room_area_sqft = room.area_sqft();
        let total_footprint_sqft: f64 = furniture.iter().map(FurnitureItem::footprint_sqft).sum();
        let open_space_sqft = room_area_sqft - total_footprint_sqft;
        Self {
            room_area_sqft,
            total_footprint_sqft,
            open_space_sqft,
            open_space_percent: open_space_sqft / room_area_sqft * 100.0,
            footprint_percent: total_footprint_sqft / room_area_sqft * 100.0,
        }
    }

    pub fn is_finite(&self) -> bool {
        [
            self.room_area_sqft,
            self.total_footprint_sqft,
            self.open_space_sqft,
            self.open_space_percent,
            self.footprint_percent,
        ]
        .iter()
        .all(|value| value.is_finite())
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Debug, target, "space_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("room_area_sqft".to_string(), json!(round2(self.room_area_sqft)));
        map.insert(
            "total_footprint_sqft".to_string(),
            json!(round2(self.total_footprint_sqft)),
        );
        map.insert("open_space_sqft".to_string(), json!(round2(self.open_space_sqft)));
        map.insert(
            "open_space_percent".to_string(),
            json!(round2(self.open_space_percent)),
        );
        map
    }
}

/// Round to two decimal places for reporting, ties to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(length_ft: f64, width_ft: f64) -> RoomSpec {
        RoomSpec {
            length_ft,
            width_ft,
            room_type: "living_room".into(),
        }
    }

    #[test]
    fn living_room_metrics() {
        let furniture = [
            FurnitureItem::new("Sofa", 84.0, 36.0),
            FurnitureItem::new("Coffee Table", 48.0, 24.0),
            FurnitureItem::new("TV Stand", 60.0, 18.0),
            FurnitureItem::new("Armchair", 32.0, 34.0),
        ];
        let metrics = SpaceMetrics::compute(&room(15.0, 12.0), &furniture);
        assert_eq!(metrics.room_area_sqft, 180.0);
        assert_eq!(round2(metrics.total_footprint_sqft), 44.06);
        assert_eq!(round2(metrics.open_space_sqft), 135.94);
        assert_eq!(round2(metrics.open_space_percent), 75.52);
        assert_eq!(round2(metrics.footprint_percent), 24.48);
    }

    #[test]
    fn overcrowding_goes_negative() {
        let furniture = [
            FurnitureItem::new("Bed", 120.0, 96.0),
            FurnitureItem::new("Wardrobe", 96.0, 48.0),
        ];
        let metrics = SpaceMetrics::compute(&room(6.0, 6.0), &furniture);
        assert!(metrics.open_space_sqft < 0.0);
        assert!(metrics.open_space_percent < 0.0);
        assert!(metrics.is_finite());
    }

    #[test]
    fn fields_are_rounded() {
        let metrics = SpaceMetrics::compute(&room(10.0, 10.0), &[FurnitureItem::new("Desk", 50.0, 25.0)]);
        let fields = metrics.as_fields();
        assert_eq!(fields["total_footprint_sqft"], json!(8.68));
        assert_eq!(fields["open_space_percent"], json!(91.32));
    }

    #[test]
    fn exact_halves_round_to_even() {
        // 6" x 27" covers exactly 1.125 sq ft.
        let metrics = SpaceMetrics::compute(&room(10.0, 10.0), &[FurnitureItem::new("Stool", 6.0, 27.0)]);
        assert_eq!(round2(metrics.total_footprint_sqft), 1.12);
        assert_eq!(round2(metrics.footprint_percent), 1.12);
        assert_eq!(round2(metrics.open_space_sqft), 98.88);
        assert_eq!(round2(metrics.open_space_percent), 98.88);
        assert_eq!(round2(-0.125), -0.12);
    }

    #[test]
    fn zero_area_is_not_finite() {
        let metrics = SpaceMetrics::compute(&room(0.0, 10.0), &[FurnitureItem::new("Desk", 50.0, 25.0)]);
        assert!(!metrics.is_finite());
    }
}
