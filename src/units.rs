//! Linear measurement types used for page geometry and typography.
//!
//! Each unit space is its own type. Values only move between spaces through
//! the named conversions below, and none of the types implement `Display`:
//! to print one, read the raw number with its accessor first.

use crate::error::Error;

pub const EMUS_PER_INCH: i64 = 914_400;

/// Implemented by every unit type. Rendering a unit as text is always an error.
pub trait UnitValue: Copy {
    const UNIT: &'static str;
    const HINT: &'static str;

    fn render_text(&self) -> Result<String, Error> {
        Err(Error::UnitNotRenderable {
            unit: Self::UNIT,
            hint: Self::HINT,
        })
    }
}

/// 1/20 of a point. Native unit of `w:pgSz` and `w:pgMar`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Twip(i64);

impl Twip {
    pub const fn new(twips: i64) -> Self {
        Twip(twips)
    }

    /// Truncates toward zero.
    pub fn from_f64_truncated(twips: f64) -> Self {
        Twip(twips as i64)
    }

    pub const fn twips(self) -> i64 {
        self.0
    }

    pub fn to_emus(self) -> Emu {
        twips_to_emus(self)
    }
}

impl UnitValue for Twip {
    const UNIT: &'static str = "Twip";
    const HINT: &'static str = "must read the raw i64 with Twip::twips()";
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Point(f64);

impl Point {
    pub const fn new(points: f64) -> Self {
        Point(points)
    }

    pub const fn points(self) -> f64 {
        self.0
    }

    pub fn to_emus(self) -> Emu {
        points_to_emus(self)
    }
}

impl UnitValue for Point {
    const UNIT: &'static str = "Point";
    const HINT: &'static str = "must read the raw f64 with Point::points()";
}

/// English Metric Unit, 914400 per inch. Used to place images and drawings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Emu(i64);

impl Emu {
    pub const fn new(emus: i64) -> Self {
        Emu(emus)
    }

    pub const fn emus(self) -> i64 {
        self.0
    }
}

impl UnitValue for Emu {
    const UNIT: &'static str = "Emu";
    const HINT: &'static str = "must read the raw i64 with Emu::emus()";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeEmu {
    pub width: Emu,
    pub height: Emu,
}

impl SizeEmu {
    pub const fn new(width: Emu, height: Emu) -> Self {
        SizeEmu { width, height }
    }

    pub const fn from_raw(width: i64, height: i64) -> Self {
        SizeEmu {
            width: Emu(width),
            height: Emu(height),
        }
    }
}

/// Twips -> inches -> EMUs in single precision, truncated toward zero.
/// Keep the f32 intermediates: results must match existing output EMU for EMU.
pub fn twips_to_emus(twips: Twip) -> Emu {
    let points = twips.0 as f32 / 20.0;
    let inches = points / 72.0;
    let emus = inches * EMUS_PER_INCH as f32;
    Emu(emus as i64)
}

/// Points -> inches -> EMUs in double precision, truncated toward zero.
pub fn points_to_emus(points: Point) -> Emu {
    let inches = points.0 / 72.0;
    let emus = inches * EMUS_PER_INCH as f64;
    Emu(emus as i64)
}
