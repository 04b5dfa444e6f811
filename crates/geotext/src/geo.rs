//! Geographic primitives: positions, sectors and the globe.

/// WGS84 equatorial radius in meters.
pub const WGS84_EQUATORIAL_RADIUS: f64 = 6_378_137.0;

/// Normalize an angle in degrees into `[-180, 180]`, the way longitudes wrap.
pub fn normalized_degrees(degrees: f64) -> f64 {
    let wrapped = degrees % 360.0;
    if wrapped > 180.0 {
        wrapped - 360.0
    } else if wrapped < -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Fold a latitude in degrees back into `[-90, 90]`, reflecting across the poles.
pub fn normalized_latitude(degrees: f64) -> f64 {
    let folded = degrees % 180.0;
    if folded > 90.0 {
        180.0 - folded
    } else if folded < -90.0 {
        -180.0 - folded
    } else {
        folded
    }
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatLon {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLon {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Offset by angular deltas given in radians. No wrapping is applied.
    pub fn add_radians(self, d_lat: f64, d_lon: f64) -> Self {
        Self {
            latitude: (self.latitude.to_radians() + d_lat).to_degrees(),
            longitude: (self.longitude.to_radians() + d_lon).to_degrees(),
        }
    }
}

/// A geographic position: latitude and longitude in degrees, elevation in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl Position {
    pub const fn new(latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation,
        }
    }

    pub const fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Self::new(latitude, longitude, 0.0)
    }

    pub fn lat_lon(&self) -> LatLon {
        LatLon::new(self.latitude, self.longitude)
    }

    /// Component-wise sum, with latitude folded at the poles and longitude wrapped at 180.
    pub fn add(&self, other: &Position) -> Position {
        Position::new(
            normalized_latitude(self.latitude + other.latitude),
            normalized_degrees(self.longitude + other.longitude),
            self.elevation + other.elevation,
        )
    }

    /// Finite components, latitude in `[-90, 90]` and longitude in `[-180, 180]`.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.elevation.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<LatLon> for Position {
    fn from(value: LatLon) -> Self {
        Position::from_degrees(value.latitude, value.longitude)
    }
}

/// A rectangular latitude/longitude region in degrees.
///
/// Bounds are inclusive; within each axis `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl Sector {
    /// The whole globe.
    pub const FULL_SPHERE: Sector = Sector::from_degrees(-90.0, 90.0, -180.0, 180.0);

    pub const fn from_degrees(
        min_latitude: f64,
        max_latitude: f64,
        min_longitude: f64,
        max_longitude: f64,
    ) -> Self {
        Self {
            min_latitude,
            max_latitude,
            min_longitude,
            max_longitude,
        }
    }

    pub fn delta_latitude(&self) -> f64 {
        self.max_latitude - self.min_latitude
    }

    pub fn delta_longitude(&self) -> f64 {
        self.max_longitude - self.min_longitude
    }

    pub fn delta_latitude_radians(&self) -> f64 {
        self.delta_latitude().to_radians()
    }

    pub fn centroid(&self) -> LatLon {
        LatLon::new(
            (self.min_latitude + self.max_latitude) * 0.5,
            (self.min_longitude + self.max_longitude) * 0.5,
        )
    }

    pub fn contains(&self, location: LatLon) -> bool {
        location.latitude >= self.min_latitude
            && location.latitude <= self.max_latitude
            && location.longitude >= self.min_longitude
            && location.longitude <= self.max_longitude
    }

    /// Closed-interval overlap test; sectors sharing only an edge intersect.
    pub fn intersects(&self, other: &Sector) -> bool {
        other.max_longitude >= self.min_longitude
            && other.min_longitude <= self.max_longitude
            && other.max_latitude >= self.min_latitude
            && other.min_latitude <= self.max_latitude
    }
}

/// The surface model text is draped onto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Globe {
    /// Radius in meters.
    pub radius: f64,
}

impl Globe {
    pub const fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Default for Globe {
    fn default() -> Self {
        Self::new(WGS84_EQUATORIAL_RADIUS)
    }
}
