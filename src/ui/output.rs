//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Same output as Normal; pairs with `--debug` for troubleshooting.
    Verbose,
    /// Show status lines and guidance.
    #[default]
    Normal,
    /// Status lines and hints only, no plain messages.
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl OutputMode {
    /// Pick the mode from the global `--verbose` / `--quiet` flags.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows per-requirement status lines.
    pub fn shows_progress(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_from_flags_prefers_quiet() {
        assert_eq!(OutputMode::from_flags(true, true), OutputMode::Quiet);
        assert_eq!(OutputMode::from_flags(true, false), OutputMode::Verbose);
        assert_eq!(OutputMode::from_flags(false, false), OutputMode::Normal);
    }

    #[test]
    fn output_mode_shows_progress() {
        assert!(OutputMode::Verbose.shows_progress());
        assert!(OutputMode::Normal.shows_progress());
        assert!(!OutputMode::Quiet.shows_progress());
        assert!(!OutputMode::Silent.shows_progress());
    }

    #[test]
    fn output_mode_shows_status() {
        assert!(OutputMode::Verbose.shows_status());
        assert!(OutputMode::Normal.shows_status());
        assert!(OutputMode::Quiet.shows_status());
        assert!(!OutputMode::Silent.shows_status());
    }

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }
}
