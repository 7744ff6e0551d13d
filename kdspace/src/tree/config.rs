use crate::Error;

/// Configuration of a [`KdTree`](crate::KdTree), fixed when the tree is created.
///
/// ```
/// # use kdspace::prelude::*;
/// let config = Config { bucket_size: 4, ..Config::default() };
/// assert_eq!(config.max_depth, Config::DEFAULT_MAX_DEPTH);
/// assert!(config.validate().is_ok());
///
/// let invalid = Config { bucket_size: 0, ..config };
/// assert_eq!(invalid.validate(), Err(Error::InvalidBucketSize));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Config {
    /// Maximum number of items stored in a leaf. Nodes holding more items are split unless their
    /// items cannot be separated. Must be at least 1.
    pub bucket_size: usize,
    /// Depth at which nodes stop being split regardless of their number of items. Leaves forced
    /// this way are reported in the [`BuildReport`](crate::tree::BuildReport).
    pub max_depth: usize,
}

impl Config {
    /// Default maximum number of items in a leaf.
    pub const DEFAULT_BUCKET_SIZE: usize = 8;

    /// Default maximum depth.
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    /// Creates a new [`Config`] with the given bucket size and the default maximum depth.
    #[inline]
    pub const fn with_bucket_size(bucket_size: usize) -> Self {
        Self {
            bucket_size,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    /// Checks that the configuration can be used to build a tree.
    #[inline]
    pub fn validate(&self) -> Result<(), Error> {
        if self.bucket_size == 0 {
            return Err(Error::InvalidBucketSize);
        }
        Ok(())
    }
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self::with_bucket_size(Self::DEFAULT_BUCKET_SIZE)
    }
}
