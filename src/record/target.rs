//! Radar target records.

use zerocopy::{
    FromBytes,
    byteorder::big_endian::{I16, I32, U16},
};

use super::{DecodeError, FieldSink, Fields, Record};

/// Number of bytes storing one target record.
pub const TARGET_RECORD_SIZE: usize = 29;

/// Decimetres per metre.
const DM_PER_M: f32 = 10.0;

/// A single detected target.
///
/// Distances and speeds are stored in decimetres (or decimetres per unit
/// time). Accessors suffixed with a unit convert them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Fields)]
pub struct TargetRecord {
    #[field("Goal numbering")]
    pub goal_numbering: u8,

    #[field("Vertical distance")]
    pub vertical_distance: i16,
    #[field("Lateral distance")]
    pub lateral_distance: i16,
    #[field("Speed (y direction)")]
    pub speed_y: i16,

    #[field("Target Type")]
    pub target_type: i8,
    #[field("Lane Number")]
    pub lane_number: i8,

    #[field("Front spacing")]
    pub front_spacing: i16,
    #[field("Front time interval")]
    pub front_time_interval: i16,
    #[field("Speed (x direction)")]
    pub speed_x: i16,

    /// Heading, on a 0-360 scale.
    #[field("Heading angle")]
    pub angle: u16,
    /// Bitmask of incident flags.
    #[field("Incidents")]
    pub incidents: u8,

    #[field("Radar Network X-sit Standard")]
    pub radar_network_x: i32,
    #[field("Radar Network Y-sit Standard")]
    pub radar_network_y: i32,

    #[field("Fill the blind mark")]
    pub fill_the_blind_mark: u8,

    #[field("Car length")]
    pub car_length: u8,
    #[field("Car width")]
    pub car_width: u8,
}

#[repr(C)]
#[derive(FromBytes)]
struct WireTarget {
    goal_numbering: u8,
    vertical_distance: I16,
    lateral_distance: I16,
    speed_y: I16,
    target_type: i8,
    lane_number: i8,
    front_spacing: I16,
    front_time_interval: I16,
    speed_x: I16,
    angle: U16,
    incidents: u8,
    radar_network_x: I32,
    radar_network_y: I32,
    fill_the_blind_mark: u8,
    car_length: u8,
    car_width: u8,
}

const _: () = assert!(size_of::<WireTarget>() == TARGET_RECORD_SIZE);

impl Record for TargetRecord {
    const SIZE: usize = TARGET_RECORD_SIZE;

    fn decode(r: &[u8]) -> Result<Self, DecodeError> {
        let r: &[u8; TARGET_RECORD_SIZE] =
            r.first_chunk().ok_or(DecodeError::DataSizeMismatch {
                expected: TARGET_RECORD_SIZE,
                actual: r.len(),
            })?;

        let WireTarget {
            goal_numbering,
            vertical_distance,
            lateral_distance,
            speed_y,
            target_type,
            lane_number,
            front_spacing,
            front_time_interval,
            speed_x,
            angle,
            incidents,
            radar_network_x,
            radar_network_y,
            fill_the_blind_mark,
            car_length,
            car_width,
        } = zerocopy::transmute!(*r);

        Ok(Self {
            goal_numbering,
            vertical_distance: vertical_distance.get(),
            lateral_distance: lateral_distance.get(),
            speed_y: speed_y.get(),
            target_type,
            lane_number,
            front_spacing: front_spacing.get(),
            front_time_interval: front_time_interval.get(),
            speed_x: speed_x.get(),
            angle: angle.get(),
            incidents,
            radar_network_x: radar_network_x.get(),
            radar_network_y: radar_network_y.get(),
            fill_the_blind_mark,
            car_length,
            car_width,
        })
    }
}

impl TargetRecord {
    /// Vertical and lateral distance in metres.
    pub fn offset_m(&self) -> (f32, f32) {
        (
            self.vertical_distance as f32 / DM_PER_M,
            self.lateral_distance as f32 / DM_PER_M,
        )
    }

    /// Speed along the x and y axes in metres per unit time.
    pub fn speed_m(&self) -> (f32, f32) {
        (self.speed_x as f32 / DM_PER_M, self.speed_y as f32 / DM_PER_M)
    }

    /// Position in the radar network in metres.
    pub fn network_position_m(&self) -> (f64, f64) {
        (
            self.radar_network_x as f64 / DM_PER_M as f64,
            self.radar_network_y as f64 / DM_PER_M as f64,
        )
    }

    /// Vehicle length and width in metres.
    pub fn car_size_m(&self) -> (f32, f32) {
        (self.car_length as f32 / DM_PER_M, self.car_width as f32 / DM_PER_M)
    }

    /// Whether incident flag `bit` (0 through 7) is set.
    pub fn has_incident(&self, bit: u8) -> bool {
        bit < 8 && self.incidents & (1 << bit) != 0
    }
}
