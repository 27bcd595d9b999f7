//! Build mode configuration for production/development runs.

/// Build mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildMode {
    /// Whether a missing base URL aborts sitemap/robots generation.
    pub require_base_url: bool,
}

impl BuildMode {
    /// Production mode: absolute URLs are mandatory.
    pub const PRODUCTION: Self = Self {
        require_base_url: true,
    };

    /// Development mode: locations fall back to root-relative paths.
    pub const DEVELOPMENT: Self = Self {
        require_base_url: false,
    };

    /// Check if this is production mode.
    #[inline]
    pub const fn is_production(&self) -> bool {
        self.require_base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes() {
        assert!(BuildMode::PRODUCTION.is_production());
        assert!(!BuildMode::DEVELOPMENT.is_production());
    }
}
