//! Android density bucket definitions

/// A screen-density bucket with its icon pixel sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Density {
    /// Resource directory name (e.g., "mipmap-mdpi")
    pub dir: &'static str,
    /// Legacy launcher icon size in pixels (48dp * density)
    pub launcher_px: u32,
    /// Adaptive foreground canvas size in pixels (108dp * density)
    pub foreground_px: u32,
}

/// The five standard density buckets, lowest to highest.
pub const DENSITIES: [Density; 5] = [
    Density {
        dir: "mipmap-mdpi",
        launcher_px: 48,
        foreground_px: 108,
    },
    Density {
        dir: "mipmap-hdpi",
        launcher_px: 72,
        foreground_px: 162,
    },
    Density {
        dir: "mipmap-xhdpi",
        launcher_px: 96,
        foreground_px: 216,
    },
    Density {
        dir: "mipmap-xxhdpi",
        launcher_px: 144,
        foreground_px: 324,
    },
    Density {
        dir: "mipmap-xxxhdpi",
        launcher_px: 192,
        foreground_px: 432,
    },
];

/// Splash logo size in pixels.
pub const SPLASH_SIZE: u32 = 512;

impl Density {
    /// Size of the foreground content pasted onto the adaptive canvas.
    ///
    /// 70% of the canvas, truncated, so a full-bleed source stays inside
    /// the adaptive icon's safe zone.
    pub fn foreground_content_px(&self) -> u32 {
        self.foreground_px * 7 / 10
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_buckets_with_expected_sizes() {
        let dirs: Vec<&str> = DENSITIES.iter().map(|d| d.dir).collect();
        assert_eq!(
            dirs,
            [
                "mipmap-mdpi",
                "mipmap-hdpi",
                "mipmap-xhdpi",
                "mipmap-xxhdpi",
                "mipmap-xxxhdpi",
            ]
        );

        let launcher: Vec<u32> = DENSITIES.iter().map(|d| d.launcher_px).collect();
        assert_eq!(launcher, [48, 72, 96, 144, 192]);

        let foreground: Vec<u32> = DENSITIES.iter().map(|d| d.foreground_px).collect();
        assert_eq!(foreground, [108, 162, 216, 324, 432]);
    }

    #[test]
    fn foreground_canvas_is_108dp_scaled() {
        // 108dp adaptive canvas against the 48dp legacy icon, per bucket
        for density in DENSITIES {
            assert_eq!(density.foreground_px, density.launcher_px * 9 / 4);
        }
    }

    #[test]
    fn foreground_content_is_truncated_70_percent() {
        let content: Vec<u32> = DENSITIES
            .iter()
            .map(|d| d.foreground_content_px())
            .collect();
        assert_eq!(content, [75, 113, 151, 226, 302]);
    }
}
