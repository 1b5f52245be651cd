//! Name filter mode selection.
//!
//! The selector only tracks which mode is active and the text typed by the
//! user. Matching happens wherever the list query is executed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::FilterError;

/// How the name value is matched against workflow names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NameFilter {
    #[default]
    Contains,
    Prefix,
    Exact,
}

impl NameFilter {
    /// All modes, in menu order.
    pub const ALL: [Self; 3] = [Self::Contains, Self::Prefix, Self::Exact];

    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Contains => "Contains",
            Self::Prefix => "Prefix",
            Self::Exact => "Exact",
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Contains => "Name Contains",
            Self::Prefix => "Name Prefix",
            Self::Exact => "Name Exact",
        }
    }
}

impl fmt::Display for NameFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for NameFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FilterError::InvalidNameFilter(s.to_string()))
    }
}

type Setter<T> = Box<dyn FnMut(T) + Send>;

/// Controlled name filter: current mode and value, with setters forwarding
/// every change to the owner.
pub struct NameFilterSelector {
    mode: NameFilter,
    value: String,
    on_mode: Option<Setter<NameFilter>>,
    on_value: Option<Setter<String>>,
}

impl NameFilterSelector {
    #[must_use]
    pub fn new(mode: NameFilter, value: impl Into<String>) -> Self {
        Self {
            mode,
            value: value.into(),
            on_mode: None,
            on_value: None,
        }
    }

    /// Register the setter called when the mode changes.
    #[must_use]
    pub fn on_mode_change(mut self, setter: impl FnMut(NameFilter) + Send + 'static) -> Self {
        self.on_mode = Some(Box::new(setter));
        self
    }

    /// Register the setter called when the value changes.
    #[must_use]
    pub fn on_value_change(mut self, setter: impl FnMut(String) + Send + 'static) -> Self {
        self.on_value = Some(Box::new(setter));
        self
    }

    #[must_use]
    pub fn mode(&self) -> NameFilter {
        self.mode
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Title of the active mode, shown on the dropdown anchor.
    #[must_use]
    pub fn title(&self) -> &'static str {
        self.mode.title()
    }

    /// Select a mode by its menu id.
    pub fn select_id(&mut self, id: &str) -> Result<(), FilterError> {
        self.select(id.parse()?);
        Ok(())
    }

    pub fn select(&mut self, mode: NameFilter) {
        debug!(mode = %mode, "Name filter mode selected");
        self.mode = mode;
        if let Some(setter) = self.on_mode.as_mut() {
            setter(mode);
        }
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        if let Some(setter) = self.on_value.as_mut() {
            setter(self.value.clone());
        }
    }
}

impl fmt::Debug for NameFilterSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameFilterSelector")
            .field("mode", &self.mode)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl Default for NameFilterSelector {
    fn default() -> Self {
        Self::new(NameFilter::default(), String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_ids_and_titles() {
        let ids: Vec<_> = NameFilter::ALL.iter().map(NameFilter::id).collect();
        assert_eq!(ids, vec!["Contains", "Prefix", "Exact"]);
        assert_eq!(NameFilter::Prefix.title(), "Name Prefix");
        assert_eq!(NameFilter::default(), NameFilter::Contains);
    }

    #[test]
    fn test_parse() {
        assert_eq!("exact".parse::<NameFilter>().unwrap(), NameFilter::Exact);
        assert!(matches!(
            "Regex".parse::<NameFilter>(),
            Err(FilterError::InvalidNameFilter(_))
        ));
    }

    #[test]
    fn test_serde_uses_id() {
        assert_eq!(serde_json::to_string(&NameFilter::Prefix).unwrap(), r#""Prefix""#);
        let parsed: NameFilter = serde_json::from_str(r#""Exact""#).unwrap();
        assert_eq!(parsed, NameFilter::Exact);
    }

    #[test]
    fn test_selector_forwards_changes() {
        let modes = Arc::new(Mutex::new(Vec::new()));
        let values = Arc::new(Mutex::new(Vec::new()));

        let mut selector = NameFilterSelector::default()
            .on_mode_change({
                let modes = Arc::clone(&modes);
                move |m| modes.lock().unwrap().push(m)
            })
            .on_value_change({
                let values = Arc::clone(&values);
                move |v| values.lock().unwrap().push(v)
            });

        selector.select(NameFilter::Prefix);
        selector.set_value("play-");
        selector.select_id("exact").unwrap();

        assert_eq!(selector.mode(), NameFilter::Exact);
        assert_eq!(selector.title(), "Name Exact");
        assert_eq!(selector.value(), "play-");
        assert_eq!(*modes.lock().unwrap(), vec![NameFilter::Prefix, NameFilter::Exact]);
        assert_eq!(*values.lock().unwrap(), vec!["play-".to_string()]);
    }

    #[test]
    fn test_invalid_id_leaves_mode() {
        let mut selector = NameFilterSelector::new(NameFilter::Prefix, "x");
        assert!(selector.select_id("nope").is_err());
        assert_eq!(selector.mode(), NameFilter::Prefix);
    }
}
