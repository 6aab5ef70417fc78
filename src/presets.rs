//! Built-in catalog of fractal presets.

use crate::config::FractalConfig;
use crate::error::{LSystemError, Result};
use std::fmt;
use std::str::FromStr;

/// A built-in fractal, selectable by integer id or kebab-case name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    FractalTree,
    DragonCurve,
    FrecFractal,
    BendTree,
    KochIsland,
    HilbertCurve,
    SierpinskiTriangle,
    KochSnowflake,
    PeanoGosper,
    BarnsleyFern,
    Segment32,
    SierpinskiSquare,
    FractalPlant2,
}

impl Preset {
    pub const ALL: [Preset; 13] = [
        Preset::FractalTree,
        Preset::DragonCurve,
        Preset::FrecFractal,
        Preset::BendTree,
        Preset::KochIsland,
        Preset::HilbertCurve,
        Preset::SierpinskiTriangle,
        Preset::KochSnowflake,
        Preset::PeanoGosper,
        Preset::BarnsleyFern,
        Preset::Segment32,
        Preset::SierpinskiSquare,
        Preset::FractalPlant2,
    ];

    /// One-based catalog id.
    pub fn id(self) -> u32 {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0) as u32 + 1
    }

    /// Looks up a preset by its one-based catalog id.
    pub fn from_id(id: u32) -> Result<Self> {
        id.checked_sub(1)
            .and_then(|i| Self::ALL.get(i as usize))
            .copied()
            .ok_or_else(|| LSystemError::UnknownPreset(id.to_string()))
    }

    pub fn slug(self) -> &'static str {
        match self {
            Preset::FractalTree => "fractal-tree",
            Preset::DragonCurve => "dragon-curve",
            Preset::FrecFractal => "frec-fractal",
            Preset::BendTree => "bend-tree",
            Preset::KochIsland => "koch-island",
            Preset::HilbertCurve => "hilbert-curve",
            Preset::SierpinskiTriangle => "sierpinski-triangle",
            Preset::KochSnowflake => "koch-snowflake",
            Preset::PeanoGosper => "peano-gosper",
            Preset::BarnsleyFern => "barnsley-fern",
            Preset::Segment32 => "segment-32",
            Preset::SierpinskiSquare => "sierpinski-square",
            Preset::FractalPlant2 => "fractal-plant-2",
        }
    }

    /// Human-readable name, as stored in [`FractalConfig::name`].
    pub fn name(self) -> &'static str {
        match self {
            Preset::FractalTree => "Fractal Tree",
            Preset::DragonCurve => "Dragon Curve",
            Preset::FrecFractal => "Frec Fractal",
            Preset::BendTree => "Bend Tree",
            Preset::KochIsland => "Koch Island",
            Preset::HilbertCurve => "Hilbert Curve",
            Preset::SierpinskiTriangle => "Sierpinski Triangle",
            Preset::KochSnowflake => "Koch Snowflake",
            Preset::PeanoGosper => "Peano-Gosper Curve",
            Preset::BarnsleyFern => "Barnsley Fern",
            Preset::Segment32 => "32-Segment Curve",
            Preset::SierpinskiSquare => "Sierpinski Square",
            Preset::FractalPlant2 => "Fractal Plant 2",
        }
    }

    /// Builds the preset's configuration record.
    pub fn config(self) -> FractalConfig {
        let name = self.name();
        match self {
            Preset::FractalTree => FractalConfig::new(name, "XF", "+-[]", "X")
                .with_rule('X', "F+[[X]-X]-F[-FX]+X")
                .with_rule('F', "FF")
                .with_angle(30.0)
                .with_iterations(7)
                .with_max_iterations(9),
            Preset::DragonCurve => FractalConfig::new(name, "XY", "F+-", "FX")
                .with_rule('X', "X+YF+")
                .with_rule('Y', "-FX-Y")
                .with_angle(90.0)
                .with_iterations(12)
                .with_max_iterations(16)
                .with_length(20.0)
                .with_canvas_offset(200.0),
            // `F` is a seed symbol here: every `F` vanishes one generation after
            // it is produced, so only the newest generation's segments are drawn.
            Preset::FrecFractal => {
                FractalConfig::new(name, "XYF", "+-", "XYXYXYX+XYXYXYX+XYXYXYX+XYXYXYX")
                    .with_rule('F', "")
                    .with_rule('X', "FX+FX+FXFY-FY-")
                    .with_rule('Y', "+FX+FXFY-FY-FY")
                    .with_angle(90.0)
                    .with_iterations(4)
                    .with_max_iterations(6)
                    .with_length(-10.0)
                    .with_canvas_offset(600.0)
            }
            Preset::BendTree => FractalConfig::new(name, "F", "+-[]", "F")
                .with_rule('F', "FF-[-F+F+F]+[+F-F-F]")
                .with_angle(22.5)
                .with_iterations(4)
                .with_max_iterations(6),
            Preset::KochIsland => FractalConfig::new(name, "F", "+-", "F+F+F+F")
                .with_rule('F', "F+F-F-FF+F+F-F")
                .with_angle(90.0)
                .with_iterations(3)
                .with_max_iterations(4)
                .with_length(30.0)
                .with_canvas_offset(250.0),
            Preset::HilbertCurve => FractalConfig::new(name, "XY", "F+-", "X")
                .with_rule('X', "+YF-XFX-FY+")
                .with_rule('Y', "-XF+YFY+FX-")
                .with_angle(90.0)
                .with_iterations(5)
                .with_max_iterations(7)
                .with_length(60.0)
                .with_canvas_offset(100.0),
            Preset::SierpinskiTriangle => FractalConfig::new(name, "XF", "+-", "FXF--FF--FF")
                .with_rule('X', "--FXF++FXF++FXF--")
                .with_rule('F', "FF")
                .with_angle(60.0)
                .with_iterations(5)
                .with_max_iterations(7)
                .with_initial_heading(-60.0)
                .with_canvas_offset(100.0),
            Preset::KochSnowflake => FractalConfig::new(name, "F", "+-", "F++F++F")
                .with_rule('F', "F-F++F-F")
                .with_angle(60.0)
                .with_iterations(4)
                .with_max_iterations(6)
                .with_initial_heading(0.0)
                .with_canvas_offset(250.0),
            // Both `A` and `B` draw.
            Preset::PeanoGosper => FractalConfig::new(name, "AB", "+-", "A")
                .with_rule('A', "A-B--B+A++AA+B-")
                .with_rule('B', "+A-BB--B-A++A+B")
                .with_angle(60.0)
                .with_iterations(4)
                .with_max_iterations(5)
                .with_length(10.0)
                .with_initial_heading(0.0)
                .with_canvas_offset(150.0),
            Preset::BarnsleyFern => FractalConfig::new(name, "XF", "+-[]", "X")
                .with_rule('X', "F-[[X]+X]+F[+FX]-X")
                .with_rule('F', "FF")
                .with_angle(22.5)
                .with_iterations(5)
                .with_max_iterations(7)
                .with_initial_heading(-60.0),
            Preset::Segment32 => FractalConfig::new(name, "F", "+-", "F+F+F+F")
                .with_rule('F', "-F+F-F-F+F+FF-F+F+FF+F-F-FF+FF-FF+F+F-FF-F-F+FF-F-F+F+F-F+")
                .with_angle(90.0)
                .with_iterations(2)
                .with_max_iterations(3)
                .with_initial_heading(0.0)
                .with_canvas_offset(300.0),
            Preset::SierpinskiSquare => FractalConfig::new(name, "F", "+-", "F+F+F+F")
                .with_rule('F', "FF+F+F+F+FF")
                .with_angle(90.0)
                .with_iterations(3)
                .with_max_iterations(5)
                .with_length(30.0)
                .with_canvas_offset(200.0),
            // `F=F` keeps `F` a variable while leaving it unchanged.
            Preset::FractalPlant2 => FractalConfig::new(name, "FVWXYZ", "+-[]", "VZFFF")
                .with_rule('F', "F")
                .with_rule('V', "[+++W][---W]YV")
                .with_rule('W', "+X[-W]Z")
                .with_rule('X', "-W[+X]Z")
                .with_rule('Y', "YZ")
                .with_rule('Z', "[-FFF][+FFF]F")
                .with_angle(18.0)
                .with_iterations(8)
                .with_max_iterations(11)
                .with_length(90.0),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Preset {
    type Err = LSystemError;

    /// Accepts a catalog id (`"2"`) or a slug (`"dragon-curve"`).
    fn from_str(s: &str) -> Result<Self> {
        if let Ok(id) = s.parse::<u32>() {
            return Self::from_id(id);
        }
        let wanted = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        Self::ALL
            .into_iter()
            .find(|p| p.slug() == wanted)
            .ok_or_else(|| LSystemError::UnknownPreset(s.to_string()))
    }
}
