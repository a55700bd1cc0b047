//! Filter chain for sequential filter application
//!
//! This is the host-facing surface for the common case of running a
//! pipeline of single-input single-output filters over a frame stream.

use super::Filter;
use crate::error::Result;
use crate::frame::VideoFrame;

/// A chain of filters applied sequentially
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    /// Create a new empty filter chain
    pub fn new() -> Self {
        FilterChain {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the end of the chain
    pub fn add(mut self, filter: Box<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Add a filter to the end of the chain (mutable version)
    pub fn push(&mut self, filter: Box<dyn Filter>) {
        self.filters.push(filter);
    }

    /// Get the number of filters in the chain
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Check if the chain is empty
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Process a frame through all filters in the chain
    ///
    /// Each stage here is one-frame-in/one-frame-out; a stage that
    /// returns no frames is a buffering filter and is reported as an
    /// error by this chain.
    pub fn process(&mut self, mut frame: VideoFrame) -> Result<VideoFrame> {
        for filter in &mut self.filters {
            let mut frames = filter.filter(frame)?;
            if frames.is_empty() {
                return Err(crate::error::Error::filter(
                    "Filter returned no frames (buffering?)",
                ));
            }
            frame = frames.remove(0);
        }
        Ok(frame)
    }

    /// Process multiple frames through the chain
    pub fn process_many(&mut self, frames: Vec<VideoFrame>) -> Result<Vec<VideoFrame>> {
        let mut output = Vec::new();
        for frame in frames {
            output.push(self.process(frame)?);
        }
        Ok(output)
    }

    /// Flush all filters in the chain
    pub fn flush(&mut self) -> Result<Vec<VideoFrame>> {
        let mut output = Vec::new();
        for filter in &mut self.filters {
            output.extend(filter.flush()?);
        }
        Ok(output)
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::DejitterFilter;

    #[test]
    fn test_empty_chain() {
        let chain = FilterChain::new();
        assert_eq!(chain.len(), 0);
        assert!(chain.is_empty());
    }

    #[test]
    fn test_chain_builder() {
        let chain = FilterChain::new()
            .add(Box::new(DejitterFilter::new(24).unwrap()))
            .add(Box::new(DejitterFilter::new(16).unwrap()));
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_chain_flush_empty() {
        let mut chain = FilterChain::new().add(Box::new(DejitterFilter::new(24).unwrap()));
        let flushed = chain.flush().unwrap();
        assert!(flushed.is_empty());
    }
}
