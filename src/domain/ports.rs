use crate::core::selector::ShuffleStrategy;
use crate::utils::error::Result;

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// Returns an integer uniformly distributed in `[0, bound)`. `bound` is at least 1.
    fn index_below(&mut self, bound: usize) -> usize;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn index_below(&mut self, bound: usize) -> usize {
        (**self).index_below(bound)
    }
}

/// String key-value persistence. Values are JSON text.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn winner_count(&self) -> usize;
    fn strategy(&self) -> ShuffleStrategy;
    fn seed(&self) -> Option<u64>;
    fn storage_enabled(&self) -> bool;
    fn storage_path(&self) -> &str;
    fn winners_key(&self) -> &str;
}
