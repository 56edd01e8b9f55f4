//! Simulation scripts
//!
//! A script is a comma-separated list of steps:
//!
//! | Step             | Effect                                        |
//! |------------------|-----------------------------------------------|
//! | `next`           | navigate to the next card                     |
//! | `prev`           | navigate to the previous card                 |
//! | `drag:<dx>`      | drag by `dx` pixels of pointer travel, release |
//! | `wait:<ms>`      | run frames for `ms` milliseconds              |
//! | `resize:<width>` | change the card width                         |

use anyhow::{Context, Result};
use std::fmt;
use std::str::FromStr;

/// One scripted interaction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Next,
    Prev,
    Drag(f32),
    Wait(u64),
    Resize(f32),
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg.trim())),
            None => (s, None),
        };

        match (name, arg) {
            ("next", None) => Ok(Step::Next),
            ("prev" | "previous", None) => Ok(Step::Prev),
            ("drag", Some(arg)) => {
                let dx: f32 = arg
                    .parse()
                    .with_context(|| format!("Invalid drag distance '{}'", arg))?;
                if !dx.is_finite() {
                    anyhow::bail!("Drag distance must be finite, got {}", arg);
                }
                Ok(Step::Drag(dx))
            }
            ("wait", Some(arg)) => {
                let ms = arg
                    .parse()
                    .with_context(|| format!("Invalid wait duration '{}'", arg))?;
                Ok(Step::Wait(ms))
            }
            ("resize", Some(arg)) => {
                let width: f32 = arg
                    .parse()
                    .with_context(|| format!("Invalid card width '{}'", arg))?;
                if !width.is_finite() || width <= 0.0 {
                    anyhow::bail!("Card width must be positive, got {}", arg);
                }
                Ok(Step::Resize(width))
            }
            ("drag" | "wait" | "resize", None) => {
                anyhow::bail!("Step '{}' needs an argument, e.g. '{}:100'", name, name)
            }
            _ => anyhow::bail!(
                "Unknown step '{}'. Valid steps: next, prev, drag:<dx>, wait:<ms>, resize:<width>",
                s
            ),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Next => write!(f, "next"),
            Step::Prev => write!(f, "prev"),
            Step::Drag(dx) => write!(f, "drag:{}", dx),
            Step::Wait(ms) => write!(f, "wait:{}", ms),
            Step::Resize(width) => write!(f, "resize:{}", width),
        }
    }
}

/// Parse a comma-separated script; empty entries are skipped
pub fn parse_script(script: &str) -> Result<Vec<Step>> {
    script
        .split(',')
        .map(str::trim)
        .filter(|step| !step.is_empty())
        .enumerate()
        .map(|(i, step)| {
            step.parse::<Step>()
                .with_context(|| format!("Step {} of the script is invalid", i + 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let steps = parse_script("next, prev,drag:-333.5, wait:1000 ,resize:240").unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Next,
                Step::Prev,
                Step::Drag(-333.5),
                Step::Wait(1000),
                Step::Resize(240.0),
            ]
        );
    }

    #[test]
    fn test_empty_entries_are_skipped() {
        assert_eq!(parse_script("").unwrap(), Vec::new());
        assert_eq!(parse_script("next,,next,").unwrap(), vec![Step::Next, Step::Next]);
    }

    #[test]
    fn test_previous_alias() {
        assert_eq!("previous".parse::<Step>().unwrap(), Step::Prev);
    }

    #[test]
    fn test_rejects_bad_steps() {
        assert!("jump".parse::<Step>().is_err());
        assert!("drag".parse::<Step>().is_err());
        assert!("drag:left".parse::<Step>().is_err());
        assert!("wait:-5".parse::<Step>().is_err());
        assert!("resize:0".parse::<Step>().is_err());
        assert!("next:2".parse::<Step>().is_err());

        let err = parse_script("next,warp").unwrap_err();
        assert!(err.to_string().contains("Step 2"));
    }

    #[test]
    fn test_display_parses_back() {
        for step in [Step::Next, Step::Prev, Step::Drag(-120.0), Step::Wait(250), Step::Resize(280.0)] {
            assert_eq!(step.to_string().parse::<Step>().unwrap(), step);
        }
    }
}
