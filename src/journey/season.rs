//! Seasonal palette blending.
//!
//! The walk through the forest crosses four authored seasons. Distance along
//! the road partitions into seven bands: four pure-season bands that return
//! the authored table verbatim, and three transition bands that interpolate
//! every field between the adjacent seasons. Transition progress is
//! smoother-step eased before it is used as a blend weight, and the four
//! weather intensity fields additionally use an asymmetric bias so an effect
//! ramping in rises faster than one winding down. A plain symmetric lerp
//! looks wrong at the band edges; the bias is load-bearing for the look.

use core::fmt;

use crate::config::JourneyTuning;
use crate::utils::color::Rgb;
use crate::utils::math::{clamp01, lerp, smootherstep};

/// World length of the road the authored tables were built against.
const ROAD_LENGTH: f32 = 1150.0;
/// Extra depth past the end of the road where the sky backdrop sits.
const HORIZON_PADDING: f32 = 120.0;
/// Depth plane of the horizon backdrop.
pub const HORIZON_Z: f32 = -(ROAD_LENGTH + HORIZON_PADDING);

const fn radians(degrees: f32) -> f32 {
    degrees * core::f32::consts::PI / 180.0
}

const fn horizon_position(x: f32, height: f32, depth_offset: f32) -> [f32; 3] {
    [x, height, HORIZON_Z + depth_offset]
}

pub const DEFAULT_SUN_POSITION: [f32; 3] = horizon_position(0.0, 128.0, 60.0);
pub const DEFAULT_MOON_POSITION: [f32; 3] = horizon_position(0.0, 138.0, 52.0);

pub const DEFAULT_SUN_ORBIT: OrbitDescriptor = OrbitDescriptor {
    center: [0.0, 130.0],
    radius: 48.0,
    depth: HORIZON_Z + 42.0,
    phase_offset: radians(-40.0),
    clockwise: false,
    duration: Some(110.0),
};

pub const DEFAULT_MOON_ORBIT: OrbitDescriptor = OrbitDescriptor {
    center: [0.0, 140.0],
    radius: 52.0,
    depth: HORIZON_Z + 44.0,
    phase_offset: radians(140.0),
    clockwise: false,
    duration: Some(110.0),
};

/// The four seasons of the walk, in road order. A closed set: the band logic
/// and the authored tables both assume exactly these four.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeasonKind {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl SeasonKind {
    pub const ALL: [SeasonKind; 4] = [
        SeasonKind::Spring,
        SeasonKind::Summer,
        SeasonKind::Autumn,
        SeasonKind::Winter,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SeasonKind::Spring => "spring",
            SeasonKind::Summer => "summer",
            SeasonKind::Autumn => "autumn",
            SeasonKind::Winter => "winter",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeasonKind::Spring => "Spring",
            SeasonKind::Summer => "Summer",
            SeasonKind::Autumn => "Autumn",
            SeasonKind::Winter => "Winter",
        }
    }

    pub fn visuals(self) -> &'static SeasonVisuals {
        match self {
            SeasonKind::Spring => &SPRING,
            SeasonKind::Summer => &SUMMER,
            SeasonKind::Autumn => &AUTUMN,
            SeasonKind::Winter => &WINTER,
        }
    }
}

impl fmt::Display for SeasonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Circular path descriptor for a sky body.
///
/// `duration` is optional in the authored tables; blending falls back to the
/// matching default descriptor when a side omits it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitDescriptor {
    pub center: [f32; 2],
    pub radius: f32,
    pub depth: f32,
    pub phase_offset: f32,
    pub clockwise: bool,
    pub duration: Option<f32>,
}

impl OrbitDescriptor {
    /// Field-wise blend toward `next`. Direction cannot be interpolated, so
    /// `clockwise` hard-switches at the blend midpoint.
    fn blend(&self, next: &Self, t: f32, fallback: &Self) -> Self {
        let fallback_duration = fallback.duration.unwrap_or(110.0);
        Self {
            center: lerp_vec2(self.center, next.center, t),
            radius: lerp(self.radius, next.radius, t),
            depth: lerp(self.depth, next.depth, t),
            phase_offset: lerp(self.phase_offset, next.phase_offset, t),
            clockwise: if t < 0.5 {
                self.clockwise
            } else {
                next.clockwise
            },
            duration: Some(lerp(
                self.duration.unwrap_or(fallback_duration),
                next.duration.unwrap_or(fallback_duration),
                t,
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FireflyPalette {
    pub base: Rgb,
    pub accent: Rgb,
    pub light_intensity: f32,
    pub flare_opacity: f32,
    pub light_distance: f32,
}

impl FireflyPalette {
    fn blend(&self, next: &Self, t: f32) -> Self {
        Self {
            base: self.base.lerp(next.base, t),
            accent: self.accent.lerp(next.accent, t),
            light_intensity: lerp(self.light_intensity, next.light_intensity, t),
            flare_opacity: lerp(self.flare_opacity, next.flare_opacity, t),
            light_distance: lerp(self.light_distance, next.light_distance, t),
        }
    }
}

/// Colors for the waypoint milestone markers, in both their idle and reached
/// states.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MilestonePalette {
    pub panel_base: Rgb,
    pub panel_reached: Rgb,
    pub emissive_base: Rgb,
    pub emissive_reached: Rgb,
    pub text_base: Rgb,
    pub text_reached: Rgb,
    pub outline: Rgb,
    pub ring_base: Rgb,
    pub ring_reached: Rgb,
    pub stand_color: Rgb,
    pub stand_emissive: Rgb,
}

impl MilestonePalette {
    fn blend(&self, next: &Self, t: f32) -> Self {
        Self {
            panel_base: self.panel_base.lerp(next.panel_base, t),
            panel_reached: self.panel_reached.lerp(next.panel_reached, t),
            emissive_base: self.emissive_base.lerp(next.emissive_base, t),
            emissive_reached: self.emissive_reached.lerp(next.emissive_reached, t),
            text_base: self.text_base.lerp(next.text_base, t),
            text_reached: self.text_reached.lerp(next.text_reached, t),
            outline: self.outline.lerp(next.outline, t),
            ring_base: self.ring_base.lerp(next.ring_base, t),
            ring_reached: self.ring_reached.lerp(next.ring_reached, t),
            stand_color: self.stand_color.lerp(next.stand_color, t),
            stand_emissive: self.stand_emissive.lerp(next.stand_emissive, t),
        }
    }
}

/// The full visual parameter record of one season.
///
/// The four authored tables below are the source of truth for the scene's
/// look. Every field is blendable; the result of a blend has exactly this
/// shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeasonVisuals {
    pub background_color: Rgb,
    pub fog_color: Rgb,
    pub ground_color: Rgb,
    pub road_color: Rgb,
    pub road_rim_color: Rgb,
    pub star_color: Rgb,
    pub moon_color: Rgb,
    pub ambient_color: Rgb,
    pub hemisphere_sky_color: Rgb,
    pub hemisphere_ground_color: Rgb,
    pub main_light_color: Rgb,
    pub secondary_light_color: Rgb,
    pub main_light_intensity: f32,
    pub ambient_intensity: f32,
    pub hemisphere_intensity: f32,
    pub secondary_light_intensity: f32,
    pub fog_density: f32,
    pub sky_top_color: Rgb,
    pub sky_bottom_color: Rgb,
    pub star_visibility: f32,
    pub moon_visibility: f32,
    pub sun_visibility: f32,
    pub sun_color: Rgb,
    pub sun_glow_color: Rgb,
    pub sun_size: f32,
    pub sun_position: [f32; 3],
    pub sun_orbit: OrbitDescriptor,
    pub moon_glow_color: Rgb,
    pub moon_size: f32,
    pub moon_position: [f32; 3],
    pub moon_orbit: OrbitDescriptor,
    pub snow_intensity: f32,
    pub rain_intensity: f32,
    pub petal_intensity: f32,
    pub leaf_intensity: f32,
    pub shooting_star_rate: f32,
    pub shooting_star_color: Rgb,
    pub firefly: FireflyPalette,
    pub milestone: MilestonePalette,
    pub hud_accent: Rgb,
}

pub static SPRING: SeasonVisuals = SeasonVisuals {
    background_color: Rgb::from_u32(0x050b17),
    fog_color: Rgb::from_u32(0x0b162b),
    ground_color: Rgb::from_u32(0x0a221a),
    road_color: Rgb::from_u32(0x1b262d),
    road_rim_color: Rgb::from_u32(0xf4ffe0),
    star_color: Rgb::from_u32(0xdcecff),
    moon_color: Rgb::from_u32(0xfef9e8),
    ambient_color: Rgb::from_u32(0x7f93d4),
    hemisphere_sky_color: Rgb::from_u32(0x253a63),
    hemisphere_ground_color: Rgb::from_u32(0x101f19),
    main_light_color: Rgb::from_u32(0xf5d6a4),
    secondary_light_color: Rgb::from_u32(0x1a4f6e),
    main_light_intensity: 0.58,
    ambient_intensity: 0.62,
    hemisphere_intensity: 0.68,
    secondary_light_intensity: 0.52,
    fog_density: 1.2,
    sky_top_color: Rgb::from_u32(0x091638),
    sky_bottom_color: Rgb::from_u32(0x030913),
    star_visibility: 1.0,
    moon_visibility: 1.0,
    sun_visibility: 0.01,
    sun_color: Rgb::from_u32(0xf6d0a0),
    sun_glow_color: Rgb::from_u32(0xe9a76a),
    sun_size: 6.5,
    sun_position: horizon_position(0.0, 132.0, 56.0),
    sun_orbit: OrbitDescriptor {
        center: [0.0, 126.0],
        radius: 42.0,
        depth: HORIZON_Z + 40.0,
        phase_offset: radians(-65.0),
        clockwise: false,
        duration: None,
    },
    moon_glow_color: Rgb::from_u32(0xdfe8ff),
    moon_size: 9.5,
    moon_position: horizon_position(0.0, 148.0, 48.0),
    moon_orbit: OrbitDescriptor {
        center: [0.0, 140.0],
        radius: 48.0,
        depth: HORIZON_Z + 42.0,
        phase_offset: radians(90.0),
        clockwise: false,
        duration: None,
    },
    snow_intensity: 0.0,
    rain_intensity: 0.36,
    petal_intensity: 0.0,
    leaf_intensity: 0.0,
    shooting_star_rate: 0.56,
    shooting_star_color: Rgb::from_u32(0x9fd4ff),
    firefly: FireflyPalette {
        base: Rgb::from_u32(0x8dfcd5),
        accent: Rgb::from_u32(0xb5ffe9),
        light_intensity: 0.78,
        flare_opacity: 0.75,
        light_distance: 3.6,
    },
    milestone: MilestonePalette {
        panel_base: Rgb::from_u32(0x7ceee2),
        panel_reached: Rgb::from_u32(0xdffef5),
        emissive_base: Rgb::from_u32(0x4bc7b3),
        emissive_reached: Rgb::from_u32(0x9fffd6),
        text_base: Rgb::from_u32(0x082224),
        text_reached: Rgb::from_u32(0x0a1a1a),
        outline: Rgb::from_u32(0x72f5d8),
        ring_base: Rgb::from_u32(0x65e4d1),
        ring_reached: Rgb::from_u32(0xb1ffe5),
        stand_color: Rgb::from_u32(0x0b1f2b),
        stand_emissive: Rgb::from_u32(0x1e7563),
    },
    hud_accent: Rgb::from_u32(0x9dfde2),
};

pub static SUMMER: SeasonVisuals = SeasonVisuals {
    background_color: Rgb::from_u32(0x98d6ff),
    fog_color: Rgb::from_u32(0xc3e4ff),
    ground_color: Rgb::from_u32(0x0f3136),
    road_color: Rgb::from_u32(0x223239),
    road_rim_color: Rgb::from_u32(0xfff0c1),
    star_color: Rgb::from_u32(0xf7fbff),
    moon_color: Rgb::from_u32(0xfff2d6),
    ambient_color: Rgb::from_u32(0xd0e7ff),
    hemisphere_sky_color: Rgb::from_u32(0x4f79a8),
    hemisphere_ground_color: Rgb::from_u32(0x27423a),
    main_light_color: Rgb::from_u32(0xffe2aa),
    secondary_light_color: Rgb::from_u32(0x2a6ca8),
    main_light_intensity: 1.38,
    ambient_intensity: 1.28,
    hemisphere_intensity: 1.22,
    secondary_light_intensity: 1.0,
    fog_density: 0.65,
    sky_top_color: Rgb::from_u32(0x74c0ff),
    sky_bottom_color: Rgb::from_u32(0xfdf7f2),
    star_visibility: 0.05,
    moon_visibility: 0.0,
    sun_visibility: 1.0,
    sun_color: Rgb::from_u32(0xfff3bf),
    sun_glow_color: Rgb::from_u32(0xffe7a4),
    sun_size: 12.0,
    sun_position: horizon_position(0.0, 152.0, 66.0),
    sun_orbit: OrbitDescriptor {
        center: [0.0, 146.0],
        radius: 56.0,
        depth: HORIZON_Z + 42.0,
        phase_offset: 0.0,
        clockwise: false,
        duration: None,
    },
    moon_glow_color: Rgb::from_u32(0xfefae8),
    moon_size: 7.0,
    moon_position: horizon_position(0.0, 132.0, 50.0),
    moon_orbit: OrbitDescriptor {
        center: [0.0, 138.0],
        radius: 54.0,
        depth: HORIZON_Z + 44.0,
        phase_offset: radians(150.0),
        clockwise: false,
        duration: None,
    },
    snow_intensity: 0.0,
    rain_intensity: 0.0,
    petal_intensity: 0.78,
    leaf_intensity: 0.0,
    shooting_star_rate: 0.0,
    shooting_star_color: Rgb::from_u32(0xf7fbff),
    firefly: FireflyPalette {
        base: Rgb::from_u32(0xffd563),
        accent: Rgb::from_u32(0xffef9a),
        light_intensity: 0.82,
        flare_opacity: 0.78,
        light_distance: 3.9,
    },
    milestone: MilestonePalette {
        panel_base: Rgb::from_u32(0xffe9a6),
        panel_reached: Rgb::from_u32(0xfff7d6),
        emissive_base: Rgb::from_u32(0xf7c05a),
        emissive_reached: Rgb::from_u32(0xffe68a),
        text_base: Rgb::from_u32(0x3d2a07),
        text_reached: Rgb::from_u32(0x2b1700),
        outline: Rgb::from_u32(0xffde7a),
        ring_base: Rgb::from_u32(0xffcc6a),
        ring_reached: Rgb::from_u32(0xffe49c),
        stand_color: Rgb::from_u32(0x2a1705),
        stand_emissive: Rgb::from_u32(0xb35a12),
    },
    hud_accent: Rgb::from_u32(0xffd873),
};

pub static AUTUMN: SeasonVisuals = SeasonVisuals {
    background_color: Rgb::from_u32(0xff9964),
    fog_color: Rgb::from_u32(0x3d1c2a),
    ground_color: Rgb::from_u32(0x21160f),
    road_color: Rgb::from_u32(0x2f1e17),
    road_rim_color: Rgb::from_u32(0xffd4a1),
    star_color: Rgb::from_u32(0xffd8bb),
    moon_color: Rgb::from_u32(0xffe0b5),
    ambient_color: Rgb::from_u32(0xffcfaa),
    hemisphere_sky_color: Rgb::from_u32(0x5a3b64),
    hemisphere_ground_color: Rgb::from_u32(0x23130d),
    main_light_color: Rgb::from_u32(0xffbe7f),
    secondary_light_color: Rgb::from_u32(0xb6462f),
    main_light_intensity: 1.12,
    ambient_intensity: 1.05,
    hemisphere_intensity: 1.08,
    secondary_light_intensity: 1.25,
    fog_density: 1.1,
    sky_top_color: Rgb::from_u32(0xff8c5a),
    sky_bottom_color: Rgb::from_u32(0x3b1a4a),
    star_visibility: 0.35,
    moon_visibility: 0.35,
    sun_visibility: 0.65,
    sun_color: Rgb::from_u32(0xffaf6f),
    sun_glow_color: Rgb::from_u32(0xff8b3d),
    sun_size: 9.0,
    sun_position: horizon_position(0.0, 80.0, 60.0),
    sun_orbit: OrbitDescriptor {
        center: [0.0, 126.0],
        radius: 58.0,
        depth: HORIZON_Z + 41.0,
        phase_offset: radians(80.0),
        clockwise: false,
        duration: None,
    },
    moon_glow_color: Rgb::from_u32(0xffd9b0),
    moon_size: 8.5,
    moon_position: horizon_position(0.0, 128.0, 50.0),
    moon_orbit: OrbitDescriptor {
        center: [0.0, 134.0],
        radius: 52.0,
        depth: HORIZON_Z + 43.0,
        phase_offset: radians(170.0),
        clockwise: false,
        duration: None,
    },
    snow_intensity: 0.0,
    rain_intensity: 0.0,
    petal_intensity: 0.0,
    leaf_intensity: 0.9,
    shooting_star_rate: 0.0,
    shooting_star_color: Rgb::from_u32(0xffd8bb),
    firefly: FireflyPalette {
        base: Rgb::from_u32(0xff9c4f),
        accent: Rgb::from_u32(0xffd0a3),
        light_intensity: 0.68,
        flare_opacity: 0.7,
        light_distance: 3.3,
    },
    milestone: MilestonePalette {
        panel_base: Rgb::from_u32(0xffb47a),
        panel_reached: Rgb::from_u32(0xffd8b3),
        emissive_base: Rgb::from_u32(0xff8840),
        emissive_reached: Rgb::from_u32(0xffc27c),
        text_base: Rgb::from_u32(0x3c1604),
        text_reached: Rgb::from_u32(0x2a0d02),
        outline: Rgb::from_u32(0xffad68),
        ring_base: Rgb::from_u32(0xff9050),
        ring_reached: Rgb::from_u32(0xffc28e),
        stand_color: Rgb::from_u32(0x301206),
        stand_emissive: Rgb::from_u32(0xa93a16),
    },
    hud_accent: Rgb::from_u32(0xffb072),
};

pub static WINTER: SeasonVisuals = SeasonVisuals {
    background_color: Rgb::from_u32(0x071628),
    fog_color: Rgb::from_u32(0x0b2138),
    ground_color: Rgb::from_u32(0x0f1e27),
    road_color: Rgb::from_u32(0x1b2530),
    road_rim_color: Rgb::from_u32(0xd7ecff),
    star_color: Rgb::from_u32(0xc7dcff),
    moon_color: Rgb::from_u32(0xe6f4ff),
    ambient_color: Rgb::from_u32(0xd9edff),
    hemisphere_sky_color: Rgb::from_u32(0x264268),
    hemisphere_ground_color: Rgb::from_u32(0x0b1721),
    main_light_color: Rgb::from_u32(0xcfdfff),
    secondary_light_color: Rgb::from_u32(0x4c7fd1),
    main_light_intensity: 0.82,
    ambient_intensity: 0.9,
    hemisphere_intensity: 0.94,
    secondary_light_intensity: 1.05,
    fog_density: 0.9,
    sky_top_color: Rgb::from_u32(0x0c2242),
    sky_bottom_color: Rgb::from_u32(0x040a14),
    star_visibility: 0.3,
    moon_visibility: 0.9,
    sun_visibility: 0.12,
    sun_color: Rgb::from_u32(0xf0f4ff),
    sun_glow_color: Rgb::from_u32(0xc6daf9),
    sun_size: 10.0,
    sun_position: horizon_position(0.0, 128.0, 62.0),
    sun_orbit: OrbitDescriptor {
        center: [0.0, 132.0],
        radius: 50.0,
        depth: HORIZON_Z + 42.0,
        phase_offset: radians(-55.0),
        clockwise: false,
        duration: None,
    },
    moon_glow_color: Rgb::from_u32(0xcfe6ff),
    moon_size: 8.0,
    moon_position: horizon_position(0.0, 150.0, 52.0),
    moon_orbit: OrbitDescriptor {
        center: [0.0, 146.0],
        radius: 54.0,
        depth: HORIZON_Z + 44.0,
        phase_offset: radians(180.0),
        clockwise: false,
        duration: None,
    },
    snow_intensity: 1.0,
    rain_intensity: 0.0,
    petal_intensity: 0.0,
    leaf_intensity: 0.0,
    shooting_star_rate: 0.68,
    shooting_star_color: Rgb::from_u32(0xc3e7ff),
    firefly: FireflyPalette {
        base: Rgb::from_u32(0x7ac7ff),
        accent: Rgb::from_u32(0xc1e7ff),
        light_intensity: 0.7,
        flare_opacity: 0.72,
        light_distance: 3.8,
    },
    milestone: MilestonePalette {
        panel_base: Rgb::from_u32(0x9ec9ff),
        panel_reached: Rgb::from_u32(0xd4ecff),
        emissive_base: Rgb::from_u32(0x6aa6ff),
        emissive_reached: Rgb::from_u32(0xb6dcff),
        text_base: Rgb::from_u32(0x01152a),
        text_reached: Rgb::from_u32(0x00101f),
        outline: Rgb::from_u32(0x8cc3ff),
        ring_base: Rgb::from_u32(0x76b6ff),
        ring_reached: Rgb::from_u32(0xc1e1ff),
        stand_color: Rgb::from_u32(0x08131f),
        stand_emissive: Rgb::from_u32(0x1c4f82),
    },
    hud_accent: Rgb::from_u32(0x8cc6ff),
};

/// Which two seasons bound a distance, and how far between them it sits.
///
/// `progress` is already smoother-step eased. Pure-season bands report
/// `current == next` and `progress == 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeasonBlend {
    pub current: SeasonKind,
    pub next: SeasonKind,
    pub progress: f32,
}

impl SeasonBlend {
    fn settled(season: SeasonKind) -> Self {
        Self {
            current: season,
            next: season,
            progress: 0.0,
        }
    }

    fn between(current: SeasonKind, next: SeasonKind, start: f32, end: f32, distance: f32) -> Self {
        let t = (distance - start) / (end - start).max(f32::EPSILON);
        Self {
            current,
            next,
            progress: smootherstep(t, 0.0, 1.0),
        }
    }
}

/// Locates a distance within the seven season bands.
///
/// The band test is strictly-less-than at every breakpoint, so each distance
/// maps to exactly one band: no overlap, no gap. Out-of-range distances clamp.
pub fn season_blend(distance: f32, tuning: &JourneyTuning) -> SeasonBlend {
    let clamped = distance.clamp(0.0, tuning.max_distance);

    if clamped < tuning.spring_only_end {
        return SeasonBlend::settled(SeasonKind::Spring);
    }
    if clamped < tuning.spring_summer_end {
        return SeasonBlend::between(
            SeasonKind::Spring,
            SeasonKind::Summer,
            tuning.spring_only_end,
            tuning.spring_summer_end,
            clamped,
        );
    }
    if clamped < tuning.summer_only_end {
        return SeasonBlend::settled(SeasonKind::Summer);
    }
    if clamped < tuning.summer_autumn_end {
        return SeasonBlend::between(
            SeasonKind::Summer,
            SeasonKind::Autumn,
            tuning.summer_only_end,
            tuning.summer_autumn_end,
            clamped,
        );
    }
    if clamped < tuning.autumn_only_end {
        return SeasonBlend::settled(SeasonKind::Autumn);
    }
    if clamped < tuning.autumn_winter_end {
        return SeasonBlend::between(
            SeasonKind::Autumn,
            SeasonKind::Winter,
            tuning.autumn_only_end,
            tuning.autumn_winter_end,
            clamped,
        );
    }

    SeasonBlend::settled(SeasonKind::Winter)
}

/// Seasonal label shown on the HUD while traveling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveLabel {
    Settled(SeasonKind),
    Transition(SeasonKind, SeasonKind),
}

impl ActiveLabel {
    fn from_blend(current: SeasonKind, next: SeasonKind, progress: f32) -> Self {
        if progress <= 0.0 || current == next {
            ActiveLabel::Settled(current)
        } else if progress >= 0.9 {
            ActiveLabel::Settled(next)
        } else {
            ActiveLabel::Transition(current, next)
        }
    }
}

impl fmt::Display for ActiveLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActiveLabel::Settled(season) => write!(f, "{season}"),
            ActiveLabel::Transition(from, to) => write!(f, "{from} → {to}"),
        }
    }
}

/// A fully resolved palette: the blended visual record plus bookkeeping about
/// which seasons produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeasonPalette {
    /// Dominant season: `primary_season` below the blend midpoint, the next
    /// season above it.
    pub key: SeasonKind,
    pub active_label: ActiveLabel,
    pub primary_season: SeasonKind,
    pub next_season: SeasonKind,
    pub transition_progress: f32,
    pub visuals: SeasonVisuals,
}

impl Default for SeasonPalette {
    fn default() -> Self {
        season_palette(0.0, &JourneyTuning::default())
    }
}

/// Computes the blended palette for a travel distance. Pure and total: any
/// finite distance produces a complete record.
pub fn season_palette(distance: f32, tuning: &JourneyTuning) -> SeasonPalette {
    let SeasonBlend {
        current,
        next,
        progress,
    } = season_blend(distance, tuning);

    if current == next {
        // Pure season band: the authored table passes through untouched.
        return SeasonPalette {
            key: current,
            active_label: ActiveLabel::Settled(current),
            primary_season: current,
            next_season: next,
            transition_progress: progress,
            visuals: *current.visuals(),
        };
    }

    SeasonPalette {
        key: if progress < 0.5 { current } else { next },
        active_label: ActiveLabel::from_blend(current, next, progress),
        primary_season: current,
        next_season: next,
        transition_progress: progress,
        visuals: blend_visuals(
            current.visuals(),
            next.visuals(),
            progress,
            tuning.transition_bias,
        ),
    }
}

fn lerp_vec2(from: [f32; 2], to: [f32; 2], t: f32) -> [f32; 2] {
    if t <= 0.0 {
        return from;
    }
    if t >= 1.0 {
        return to;
    }
    [lerp(from[0], to[0], t), lerp(from[1], to[1], t)]
}

fn lerp_vec3(from: [f32; 3], to: [f32; 3], t: f32) -> [f32; 3] {
    if t <= 0.0 {
        return from;
    }
    if t >= 1.0 {
        return to;
    }
    [
        lerp(from[0], to[0], t),
        lerp(from[1], to[1], t),
        lerp(from[2], to[2], t),
    ]
}

/// Direction-aware fade for the weather intensity fields.
///
/// An effect ramping in eases with `t^(1/bias)`, one winding down with
/// `t^bias`. Equal endpoints pass through unchanged so untouched effects stay
/// exactly zero across a transition.
fn blend_weather_intensity(from: f32, to: f32, t: f32, bias: f32) -> f32 {
    if t <= 0.0 {
        return from;
    }
    if t >= 1.0 {
        return to;
    }
    if from == to {
        return from;
    }

    let biased = if to > from {
        libm::powf(t, 1.0 / bias)
    } else {
        libm::powf(t, bias)
    };
    lerp(from, to, clamp01(biased))
}

fn blend_visuals(from: &SeasonVisuals, to: &SeasonVisuals, t: f32, bias: f32) -> SeasonVisuals {
    SeasonVisuals {
        background_color: from.background_color.lerp(to.background_color, t),
        fog_color: from.fog_color.lerp(to.fog_color, t),
        ground_color: from.ground_color.lerp(to.ground_color, t),
        road_color: from.road_color.lerp(to.road_color, t),
        road_rim_color: from.road_rim_color.lerp(to.road_rim_color, t),
        star_color: from.star_color.lerp(to.star_color, t),
        moon_color: from.moon_color.lerp(to.moon_color, t),
        ambient_color: from.ambient_color.lerp(to.ambient_color, t),
        hemisphere_sky_color: from.hemisphere_sky_color.lerp(to.hemisphere_sky_color, t),
        hemisphere_ground_color: from
            .hemisphere_ground_color
            .lerp(to.hemisphere_ground_color, t),
        main_light_color: from.main_light_color.lerp(to.main_light_color, t),
        secondary_light_color: from
            .secondary_light_color
            .lerp(to.secondary_light_color, t),
        main_light_intensity: lerp(from.main_light_intensity, to.main_light_intensity, t),
        ambient_intensity: lerp(from.ambient_intensity, to.ambient_intensity, t),
        hemisphere_intensity: lerp(from.hemisphere_intensity, to.hemisphere_intensity, t),
        secondary_light_intensity: lerp(
            from.secondary_light_intensity,
            to.secondary_light_intensity,
            t,
        ),
        fog_density: lerp(from.fog_density, to.fog_density, t),
        sky_top_color: from.sky_top_color.lerp(to.sky_top_color, t),
        sky_bottom_color: from.sky_bottom_color.lerp(to.sky_bottom_color, t),
        star_visibility: lerp(from.star_visibility, to.star_visibility, t),
        moon_visibility: lerp(from.moon_visibility, to.moon_visibility, t),
        sun_visibility: lerp(from.sun_visibility, to.sun_visibility, t),
        sun_color: from.sun_color.lerp(to.sun_color, t),
        sun_glow_color: from.sun_glow_color.lerp(to.sun_glow_color, t),
        sun_size: lerp(from.sun_size, to.sun_size, t),
        sun_position: lerp_vec3(from.sun_position, to.sun_position, t),
        sun_orbit: from.sun_orbit.blend(&to.sun_orbit, t, &DEFAULT_SUN_ORBIT),
        moon_glow_color: from.moon_glow_color.lerp(to.moon_glow_color, t),
        moon_size: lerp(from.moon_size, to.moon_size, t),
        moon_position: lerp_vec3(from.moon_position, to.moon_position, t),
        moon_orbit: from
            .moon_orbit
            .blend(&to.moon_orbit, t, &DEFAULT_MOON_ORBIT),
        snow_intensity: blend_weather_intensity(from.snow_intensity, to.snow_intensity, t, bias),
        rain_intensity: blend_weather_intensity(from.rain_intensity, to.rain_intensity, t, bias),
        petal_intensity: blend_weather_intensity(from.petal_intensity, to.petal_intensity, t, bias),
        leaf_intensity: blend_weather_intensity(from.leaf_intensity, to.leaf_intensity, t, bias),
        shooting_star_rate: lerp(from.shooting_star_rate, to.shooting_star_rate, t),
        shooting_star_color: from.shooting_star_color.lerp(to.shooting_star_color, t),
        firefly: from.firefly.blend(&to.firefly, t),
        milestone: from.milestone.blend(&to.milestone, t),
        hud_accent: from.hud_accent.lerp(to.hud_accent, t),
    }
}
