use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const DEFAULT_SUBMIT_LATENCY_MS: u32 = 2_000;
pub const DEFAULT_RESET_DELAY_MS: u32 = 3_000;

/// Timings of the contact form. Can be overridden at build time with
/// `CONTACT_SUBMIT_LATENCY_MS` and `CONTACT_RESET_DELAY_MS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactSettings {
    pub submit_latency_ms: u32,
    pub reset_delay_ms: u32,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            submit_latency_ms: DEFAULT_SUBMIT_LATENCY_MS,
            reset_delay_ms: DEFAULT_RESET_DELAY_MS,
        }
    }
}

impl ContactSettings {
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("CONTACT_SUBMIT_LATENCY_MS"),
            option_env!("CONTACT_RESET_DELAY_MS"),
        )
    }

    fn from_overrides(submit_latency: Option<&str>, reset_delay: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            submit_latency_ms: parse_ms(submit_latency).unwrap_or(defaults.submit_latency_ms),
            reset_delay_ms: parse_ms(reset_delay).unwrap_or(defaults.reset_delay_ms),
        }
    }
}

fn parse_ms(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|value| value.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_timings() {
        let settings = ContactSettings::default();
        assert_eq!(settings.submit_latency_ms, 2_000);
        assert_eq!(settings.reset_delay_ms, 3_000);
    }

    #[test]
    fn overrides_are_parsed() {
        let settings = ContactSettings::from_overrides(Some("150"), Some(" 400 "));
        assert_eq!(
            settings,
            ContactSettings {
                submit_latency_ms: 150,
                reset_delay_ms: 400,
            }
        );
    }

    #[test]
    fn bad_overrides_fall_back() {
        let settings = ContactSettings::from_overrides(Some("soon"), Some("-5"));
        assert_eq!(settings, ContactSettings::default());

        let settings = ContactSettings::from_overrides(None, Some("0"));
        assert_eq!(settings.submit_latency_ms, DEFAULT_SUBMIT_LATENCY_MS);
        assert_eq!(settings.reset_delay_ms, 0);
    }
}
