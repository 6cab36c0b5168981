//! Named color palettes for the density image
//!
//! Each palette is a list of 33 evenly spaced colors sampled from the full
//! ramp, interpolated linearly in RGB. Appending `_r` to a name reverses the
//! ramp.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("{0} is not a recognized color palette")]
    Unknown(String),
}

/// Default palette of the command-line visualizer
pub const DEFAULT_PALETTE: &str = "mako";

const ROCKET: &[u32] = &[
    0x03051a, 0x100b21, 0x181028, 0x20132f, 0x2b1536, 0x36183d, 0x411b44, 0x4c1d4a, 0x571e4e,
    0x631f53, 0x6f1f57, 0x7c1e58, 0x881d5a, 0x941c5b, 0xa11a5a, 0xad1958, 0xb91657, 0xc41f52,
    0xcf264d, 0xda2e47, 0xe13d45, 0xe74d45, 0xee5b44, 0xf26a4b, 0xf47957, 0xf58864, 0xf79672,
    0xf8a482, 0xf9b192, 0xf9bfa3, 0xfaceb6, 0xfbdcc9, 0xfaebdd,
];
const MAKO: &[u32] = &[
    0x0b0405, 0x150c14, 0x1c121e, 0x241728, 0x2b1c34, 0x302241, 0x35284e, 0x3a2e5c, 0x3d356a,
    0x3f3d77, 0x404485, 0x404c90, 0x3e5594, 0x3b5f99, 0x37689e, 0x3671a1, 0x367aa3, 0x3584a5,
    0x348da6, 0x3696a8, 0x379eaa, 0x38a7ab, 0x3eb0ac, 0x47b9ad, 0x4fc2ad, 0x58cbad, 0x70d1b1,
    0x85d7b4, 0x99dcb7, 0xabe3c0, 0xbce9cc, 0xcdefd8, 0xdef5e5,
];
const FLARE: &[u32] = &[
    0xedb081, 0xecaa7d, 0xeca379, 0xeb9c75, 0xea9670, 0xe98f6c, 0xe88969, 0xe78266, 0xe67b63,
    0xe57461, 0xe46d5e, 0xe2665c, 0xdf615d, 0xdb5b5e, 0xd8565f, 0xd45060, 0xd14a61, 0xcb4763,
    0xc54565, 0xbf4267, 0xb93f69, 0xb33d6b, 0xad3b6d, 0xa6396e, 0xa0376f, 0x9a366f, 0x933470,
    0x8d3271, 0x863170, 0x802f6f, 0x792e6f, 0x732c6e, 0x6c2b6d,
];
const CREST: &[u32] = &[
    0xa5cd90, 0x9dc991, 0x95c591, 0x8dc192, 0x85bc92, 0x7cb893, 0x75b493, 0x6eb093, 0x67ac93,
    0x60a893, 0x58a493, 0x51a093, 0x4c9b93, 0x479793, 0x419393, 0x3b8e93, 0x348a93, 0x318692,
    0x2e8191, 0x2b7d90, 0x27798f, 0x23748e, 0x23708d, 0x246b8c, 0x25668b, 0x266289, 0x265d88,
    0x275786, 0x295082, 0x2b487e, 0x2c407a, 0x2c3976, 0x2c3172,
];
const VIRIDIS: &[u32] = &[
    0x440154, 0x470d60, 0x48186a, 0x482374, 0x472d7b, 0x453781, 0x424086, 0x3e4989, 0x3b528b,
    0x375b8d, 0x33638d, 0x2f6b8e, 0x2c728e, 0x297a8e, 0x26828e, 0x23898e, 0x21918c, 0x1f978b,
    0x1f9f88, 0x21a685, 0x27ad81, 0x31b57b, 0x3dbc74, 0x4cc26c, 0x5cc863, 0x6ece58, 0x81d34d,
    0x95d840, 0xaadc32, 0xc0df25, 0xd5e21a, 0xeae51a, 0xfde725,
];
const MAGMA: &[u32] = &[
    0x000004, 0x030312, 0x0a0822, 0x130d34, 0x1d1147, 0x29115a, 0x36106b, 0x440f76, 0x51127c,
    0x5d177f, 0x6a1c81, 0x762181, 0x832681, 0x902a81, 0x9c2e7f, 0xaa337d, 0xb73779, 0xc23b75,
    0xcf4070, 0xdb476a, 0xe55064, 0xee5b5e, 0xf4695c, 0xf9785d, 0xfb8761, 0xfd9668, 0xfea571,
    0xfeb47b, 0xfec287, 0xfed194, 0xfde0a1, 0xfceeb0, 0xfcfdbf,
];
const INFERNO: &[u32] = &[
    0x000004, 0x040312, 0x0b0724, 0x150b37, 0x210c4a, 0x2f0a5b, 0x3d0965, 0x4a0c6b, 0x57106e,
    0x64156e, 0x71196e, 0x7d1e6d, 0x8a226a, 0x972766, 0xa32c61, 0xb0315b, 0xbc3754, 0xc63d4d,
    0xd04545, 0xda4e3c, 0xe35933, 0xeb6429, 0xf1711f, 0xf67e14, 0xf98c0a, 0xfb9b06, 0xfcaa0f,
    0xfbba1f, 0xf9c932, 0xf5d949, 0xf2e865, 0xf3f586, 0xfcffa4,
];
const PLASMA: &[u32] = &[
    0x0d0887, 0x220690, 0x310597, 0x3f049c, 0x4c02a1, 0x5901a5, 0x6600a7, 0x7201a8, 0x7e03a8,
    0x8a09a5, 0x9511a1, 0xa01a9c, 0xaa2395, 0xb32c8e, 0xbc3587, 0xc43e7f, 0xcc4778, 0xd24f71,
    0xd9586a, 0xdf6263, 0xe56b5d, 0xeb7556, 0xf07f4f, 0xf48948, 0xf89441, 0xfb9f3a, 0xfdab33,
    0xfeb72d, 0xfdc328, 0xfcd025, 0xf9dd25, 0xf5eb27, 0xf0f921,
];
const GRAY: &[u32] = &[0x000000, 0xffffff];

const PALETTES: &[(&str, &[u32])] = &[
    ("rocket", ROCKET),
    ("mako", MAKO),
    ("flare", FLARE),
    ("crest", CREST),
    ("viridis", VIRIDIS),
    ("magma", MAGMA),
    ("inferno", INFERNO),
    ("plasma", PLASMA),
    ("gray", GRAY),
];

/// A continuous color ramp
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    name: String,
    stops: Vec<[u8; 3]>,
}

impl Palette {
    /// Look up a palette by name, e.g. `"mako"` or `"rocket_r"`
    pub fn by_name(name: &str) -> Result<Self, PaletteError> {
        let (base, reversed) = match name.strip_suffix("_r") {
            Some(base) => (base, true),
            None => (name, false),
        };

        let (_, table) = PALETTES
            .iter()
            .find(|(key, _)| *key == base)
            .ok_or_else(|| PaletteError::Unknown(name.to_string()))?;

        let mut stops: Vec<[u8; 3]> = table.iter().map(|&hex| unpack(hex)).collect();
        if reversed {
            stops.reverse();
        }

        Ok(Self {
            name: name.to_string(),
            stops,
        })
    }

    /// Names accepted by [`Palette::by_name`], without the `_r` variants
    pub fn names() -> impl Iterator<Item = &'static str> {
        PALETTES.iter().map(|(name, _)| *name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Color at `t` in [0, 1]. Out-of-range and NaN inputs clamp to the ends.
    pub fn sample(&self, t: f64) -> [u8; 3] {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let last = self.stops.len() - 1;
        if last == 0 {
            return self.stops[0];
        }

        let pos = t * last as f64;
        let i = (pos.floor() as usize).min(last - 1);
        let frac = pos - i as f64;

        let (a, b) = (self.stops[i], self.stops[i + 1]);
        let mix = |x: u8, y: u8| {
            let (x, y) = (f64::from(x), f64::from(y));
            (x + (y - x) * frac).round() as u8
        };
        [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])]
    }

    /// `count` colors evenly spaced from the low end to the high end
    pub fn ramp(&self, count: usize) -> Vec<[u8; 3]> {
        match count {
            0 => Vec::new(),
            1 => vec![self.sample(0.0)],
            _ => (0..count)
                .map(|i| self.sample(i as f64 / (count - 1) as f64))
                .collect(),
        }
    }

    /// Darkest of 100 ramp samples by Rec. 709 luminance; used as the figure background
    pub fn darkest(&self) -> [u8; 3] {
        self.ramp(100)
            .into_iter()
            .min_by(|a, b| luminance(*a).total_cmp(&luminance(*b)))
            .unwrap_or([0, 0, 0])
    }
}

fn unpack(hex: u32) -> [u8; 3] {
    [(hex >> 16) as u8, (hex >> 8) as u8, hex as u8]
}

fn luminance(c: [u8; 3]) -> f64 {
    0.2126 * f64::from(c[0]) + 0.7152 * f64::from(c[1]) + 0.0722 * f64::from(c[2])
}
