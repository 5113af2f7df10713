//! Classification of planet noise values into terrain bands.

/// A terrain category picked by thresholding a noise sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TerrainBand {
    DeepOcean,
    Ocean,
    Sand,
    Grassland,
    Forest,
    Mountain,
}

impl TerrainBand {
    /// All bands in ascending threshold order.
    pub const ALL: [TerrainBand; 6] = [
        TerrainBand::DeepOcean,
        TerrainBand::Ocean,
        TerrainBand::Sand,
        TerrainBand::Grassland,
        TerrainBand::Forest,
        TerrainBand::Mountain,
    ];

    /// Upper (exclusive) noise bounds separating consecutive bands.
    pub const CUT_POINTS: [f64; 5] = [-0.3, 0.0, 0.1, 0.3, 0.6];

    /// Pick the band for a noise value.
    ///
    /// Every real value maps to exactly one band; NaN falls through to
    /// [`TerrainBand::Mountain`].
    pub fn classify(noise: f64) -> Self {
        if noise < -0.3 {
            TerrainBand::DeepOcean
        } else if noise < 0.0 {
            TerrainBand::Ocean
        } else if noise < 0.1 {
            TerrainBand::Sand
        } else if noise < 0.3 {
            TerrainBand::Grassland
        } else if noise < 0.6 {
            TerrainBand::Forest
        } else {
            TerrainBand::Mountain
        }
    }

    /// Fully lit RGB colour of the band.
    pub fn base_color(self) -> [u8; 3] {
        match self {
            TerrainBand::DeepOcean => [60, 100, 235],
            TerrainBand::Ocean => [80, 120, 255],
            TerrainBand::Sand => [178, 145, 0],
            TerrainBand::Grassland => [124, 205, 20],
            TerrainBand::Forest => [0, 128, 0],
            TerrainBand::Mountain => [100, 100, 100],
        }
    }

    /// Band colour scaled by `lighting`, truncated toward zero.
    pub fn shaded_color(self, lighting: f64) -> [u8; 3] {
        self.base_color()
            .map(|channel| (f64::from(channel) * lighting) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_points_open_next_band() {
        for (i, &cut) in TerrainBand::CUT_POINTS.iter().enumerate() {
            assert_eq!(TerrainBand::classify(cut), TerrainBand::ALL[i + 1]);
            let below = cut - 1e-9;
            assert_eq!(TerrainBand::classify(below), TerrainBand::ALL[i]);
        }
    }

    #[test]
    fn test_partition_is_total_and_ordered() {
        let mut previous = TerrainBand::classify(-10.0);
        assert_eq!(previous, TerrainBand::DeepOcean);
        let position = |band: TerrainBand| {
            TerrainBand::ALL
                .iter()
                .position(|&b| b == band)
                .unwrap_or(usize::MAX)
        };
        for i in 0..=4_000 {
            let v = -2.0 + i as f64 * 0.001;
            let band = TerrainBand::classify(v);
            assert!(
                position(band) >= position(previous),
                "band order regressed at {v}: {previous:?} -> {band:?}"
            );
            previous = band;
        }
        assert_eq!(previous, TerrainBand::Mountain);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(TerrainBand::classify(f64::NEG_INFINITY), TerrainBand::DeepOcean);
        assert_eq!(TerrainBand::classify(f64::INFINITY), TerrainBand::Mountain);
        assert_eq!(TerrainBand::classify(f64::NAN), TerrainBand::Mountain);
    }

    #[test]
    fn test_shaded_color_truncates() {
        // 235 * 0.5 = 117.5 -> 117
        assert_eq!(TerrainBand::DeepOcean.shaded_color(0.5), [30, 50, 117]);
        assert_eq!(TerrainBand::Sand.shaded_color(1.0), [178, 145, 0]);
        assert_eq!(TerrainBand::Forest.shaded_color(0.0), [0, 0, 0]);
    }
}
