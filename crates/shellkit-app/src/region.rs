//! Per-region failure isolation
//!
//! Caller-supplied content is produced through [`RegionGuard::guard`]. A
//! failure marks only that region as failed; the rest of the shell keeps
//! rendering. A failed region stays failed until explicitly retried.

use std::collections::BTreeMap;

use shellkit_core::prelude::*;

/// An isolated part of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    Sidebar,
    Header,
    Content,
    /// One section of the settings panel, by index
    SettingsSection(usize),
}

impl Region {
    pub fn fallback_title(&self) -> &'static str {
        match self {
            Region::Sidebar => "Sidebar Error",
            Region::Header => "Header Error",
            Region::Content => "Content Error",
            Region::SettingsSection(_) => "Section Error",
        }
    }

    pub fn fallback_message(&self) -> &'static str {
        match self {
            Region::Sidebar => "There was a problem loading the sidebar.",
            Region::Header => "There was a problem loading the header.",
            Region::Content => "There was a problem loading the content.",
            Region::SettingsSection(_) => "There was a problem loading this section.",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Region::Sidebar => f.write_str("sidebar"),
            Region::Header => f.write_str("header"),
            Region::Content => f.write_str("content"),
            Region::SettingsSection(i) => write!(f, "settings section {}", i + 1),
        }
    }
}

type ErrorCallback = Box<dyn FnMut(Region, &Error)>;

/// Tracks which regions have failed.
#[derive(Default)]
pub struct RegionGuard {
    failed: BTreeMap<Region, String>,
    on_error: Option<ErrorCallback>,
}

impl std::fmt::Debug for RegionGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegionGuard")
            .field("failed", &self.failed)
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}

impl RegionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward every captured error to `callback` as well as the log
    pub fn with_error_callback(mut self, callback: impl FnMut(Region, &Error) + 'static) -> Self {
        self.on_error = Some(Box::new(callback));
        self
    }

    /// Run `f` for `region`. Returns `None` if the region is already failed
    /// or `f` fails, in which case the region is marked failed.
    pub fn guard<T>(&mut self, region: Region, f: impl FnOnce() -> Result<T>) -> Option<T> {
        if self.failed.contains_key(&region) {
            return None;
        }
        match f() {
            Ok(value) => Some(value),
            Err(e) => {
                self.fail(region, e);
                None
            }
        }
    }

    /// Mark `region` failed with `err`
    pub fn fail(&mut self, region: Region, err: Error) {
        error!("Error in {}: {}", region, err);
        if let Some(callback) = self.on_error.as_mut() {
            callback(region, &err);
        }
        self.failed.insert(region, err.to_string());
    }

    pub fn is_failed(&self, region: Region) -> bool {
        self.failed.contains_key(&region)
    }

    pub fn failure(&self, region: Region) -> Option<&str> {
        self.failed.get(&region).map(String::as_str)
    }

    pub fn failed_regions(&self) -> impl Iterator<Item = Region> + '_ {
        self.failed.keys().copied()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Clear one region's failure. Returns true if it was failed.
    pub fn retry(&mut self, region: Region) -> bool {
        let cleared = self.failed.remove(&region).is_some();
        if cleared {
            info!("Retrying {}", region);
        }
        cleared
    }

    /// Clear every failure, returning the regions that were failed.
    pub fn retry_all(&mut self) -> Vec<Region> {
        let regions: Vec<Region> = self.failed.keys().copied().collect();
        self.failed.clear();
        if !regions.is_empty() {
            info!("Retrying {} failed region(s)", regions.len());
        }
        regions
    }
}
