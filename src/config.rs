use crate::error::{Error, ErrorKind, Result};

/// Limits applied while turning a generic node tree into tags
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum nesting depth of the generic tree (0 means unlimited)
    pub max_depth: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_depth: 32 }
    }
}

impl Config {
    /// Create a new config with unlimited depth
    pub const fn unlimited() -> Self {
        Self { max_depth: 0 }
    }

    /// Create a new config with a specific depth limit
    pub const fn new(max_depth: u16) -> Self {
        Self { max_depth }
    }
}

/// Tracks nesting depth while tags are built recursively
#[derive(Debug)]
pub struct BuildContext {
    config: Config,
    depth: u16,
}

impl Default for BuildContext {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl BuildContext {
    pub const fn new(config: Config) -> Self {
        Self { config, depth: 0 }
    }

    pub const fn config(&self) -> Config {
        self.config
    }

    pub const fn depth(&self) -> u16 {
        self.depth
    }

    pub fn enter_nested(&mut self) -> Result<()> {
        self.depth = self.depth.saturating_add(1);
        if self.config.max_depth > 0 && self.depth > self.config.max_depth {
            return Err(Error::new(ErrorKind::MaxDepthExceeded {
                max: self.config.max_depth,
            }));
        }
        Ok(())
    }

    pub fn exit_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
