use super::{LngLat, Location};

#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionSegment {
    pub from: &'static str,
    pub to: &'static str,
    pub coords: [LngLat; 2],
}

/// Endpoints for a line from `a` to `b` that takes the short way around.
/// `a` is returned untouched; `b` may be shifted by a full turn so the line
/// crosses the antimeridian instead of spanning the whole map.
pub fn line_coords(a: LngLat, b: LngLat) -> [LngLat; 2] {
    let direct = (b.lon - a.lon).abs();
    let wrap = 360.0 - direct;

    let mut lon = b.lon;
    if wrap < direct {
        if b.lon > a.lon {
            lon -= 360.0;
        } else {
            lon += 360.0;
        }
    }

    [a, LngLat::new(lon, b.lat)]
}

/// Splits an unwrapped segment where it leaves the [-180, 180] range, for
/// surfaces that cannot draw past the antimeridian. The crossing latitude is
/// interpolated linearly.
pub fn split_at_antimeridian(coords: [LngLat; 2]) -> Vec<[LngLat; 2]> {
    let [a, b] = coords;
    let edge = if b.lon > 180.0 {
        180.0
    } else if b.lon < -180.0 {
        -180.0
    } else {
        return vec![coords];
    };

    let t = (edge - a.lon) / (b.lon - a.lon);
    let lat = a.lat + t * (b.lat - a.lat);
    let wrapped = if edge > 0.0 { b.lon - 360.0 } else { b.lon + 360.0 };

    vec![
        [a, LngLat::new(edge, lat)],
        [LngLat::new(-edge, lat), LngLat::new(wrapped, b.lat)],
    ]
}

pub fn connection_segments(locations: &[Location]) -> Vec<ConnectionSegment> {
    let mut segments = Vec::new();
    for (i, a) in locations.iter().enumerate() {
        for b in &locations[i + 1..] {
            segments.push(ConnectionSegment {
                from: a.id,
                to: b.id,
                coords: line_coords(a.coords, b.coords),
            });
        }
    }
    segments
}
