use serde::{Serialize, Serializer};

/// A longitude/latitude pair in degrees. Serializes as `[lon, lat]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LngLat {
    pub lon: f64,
    pub lat: f64,
}

impl LngLat {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl Serialize for LngLat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.lon, self.lat].serialize(serializer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub id: &'static str,
    pub name: &'static str,
    pub org: &'static str,
    pub coords: LngLat,
}

impl Location {
    pub fn coord_label(&self) -> String {
        format!("{:.4}°, {:.4}°", self.coords.lat, self.coords.lon)
    }
}

pub const LOCATIONS: [Location; 5] = [
    Location {
        id: "shanghai",
        name: "Shanghai",
        org: "rect_repair",
        coords: LngLat::new(121.4737, 31.2304),
    },
    Location {
        id: "tokyo",
        name: "Tokyo",
        org: "gaemz",
        coords: LngLat::new(139.6917, 35.6895),
    },
    Location {
        id: "hague",
        name: "The Hague",
        org: "Jana Romanova",
        coords: LngLat::new(4.3007, 52.0705),
    },
    Location {
        id: "london",
        name: "London",
        org: "studio playfool",
        coords: LngLat::new(-0.1276, 51.5074),
    },
    Location {
        id: "mexico",
        name: "Mexico City",
        org: "Diego",
        coords: LngLat::new(-99.1332, 19.4326),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_label_is_lat_then_lon() {
        let london = &LOCATIONS[3];
        assert_eq!(london.id, "london");
        assert_eq!(london.coord_label(), "51.5074°, -0.1276°");
    }

    #[test]
    fn lnglat_serializes_as_pair() {
        let json = serde_json::to_string(&LngLat::new(4.3007, 52.0705)).unwrap();
        assert_eq!(json, "[4.3007,52.0705]");
    }
}
