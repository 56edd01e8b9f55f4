//! Easing curves
//!
//! Maps normalized progress `t` in `[0, 1]` to eased progress.

use serde::{Deserialize, Serialize};

/// Named easing curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Hermite smoothstep `t²(3 − 2t)`
    SmoothStep,
    /// `min(1, 1.001 − 2^(−10t))`, the page smooth-scroll curve
    #[default]
    ExpoOut,
}

impl Easing {
    /// Apply the curve; input is clamped to `[0, 1]`
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let f = -2.0 * t + 2.0;
                    1.0 - f * f * f / 2.0
                }
            }
            Easing::SmoothStep => t * t * (3.0 - 2.0 * t),
            Easing::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    (1.001 - 2f32.powf(-10.0 * t)).min(1.0)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::SmoothStep,
        Easing::ExpoOut,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 0.01, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut prev = easing.apply(0.0);
            for i in 1..=100 {
                let v = easing.apply(i as f32 / 100.0);
                assert!(v + 1e-6 >= prev, "{easing:?} decreased at {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_expo_out_front_loaded() {
        // Most of the distance is covered in the first third
        assert!(Easing::ExpoOut.apply(0.3) > 0.85);
        assert!(Easing::ExpoOut.apply(1.5) <= 1.0);
    }

    #[test]
    fn test_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            easing: Easing,
        }
        let parsed: Wrapper = toml::from_str("easing = \"ease-in-out\"").unwrap();
        assert_eq!(parsed.easing, Easing::EaseInOut);
        let parsed: Wrapper = toml::from_str("easing = \"expo-out\"").unwrap();
        assert_eq!(parsed.easing, Easing::ExpoOut);
    }
}
