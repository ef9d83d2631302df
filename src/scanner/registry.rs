//! Scanner Registry
//!
//! Maps scanner names to factories and turns the operator's scanner
//! selection into an ordered list of validated, initialised scanners.
//!
//! Resolution is all-or-nothing:
//! 1. every name must map to a registered scanner,
//! 2. every declared external command must be on PATH,
//! 3. every `init` hook must succeed, in declaration order.
//!
//! Steps 1 and 2 run for the whole list before any `init` hook so an unknown
//! name late in the list never lets an earlier scanner start expensive setup.

use crate::core::config::RunConfig;
use crate::scanner::builtin::api::{get_all_scanner_factories, ScannerFactory};
use crate::scanner::error::{ScannerError, ScannerResult};
use crate::scanner::traits::Scanner;
use crate::scanner::types::ScannerInfo;
use std::collections::BTreeMap;

/// Registry of known scanners keyed by name
pub struct ScannerRegistry {
    factories: BTreeMap<String, ScannerFactory>,
}

impl std::fmt::Debug for ScannerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScannerRegistry")
            .field("scanners", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ScannerRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Build a registry from every scanner registered with `scanner!`
    pub fn discover() -> ScannerResult<Self> {
        let mut registry = Self::new();
        for factory in get_all_scanner_factories() {
            registry.register(factory)?;
        }
        log::debug!(
            "Discovered {} scanners: {}",
            registry.scanner_count(),
            registry.scanner_names().join(", ")
        );
        Ok(registry)
    }

    /// Register a scanner factory under the name its scanner reports
    pub fn register(&mut self, factory: ScannerFactory) -> ScannerResult<()> {
        let name = factory().info().name;

        if self.factories.contains_key(&name) {
            return Err(ScannerError::DuplicateName { name });
        }

        self.factories.insert(name, factory);
        Ok(())
    }

    /// Check if a scanner exists in the registry
    pub fn has_scanner(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Sorted list of registered scanner names
    pub fn scanner_names(&self) -> Vec<String> {
        self.factories.keys().cloned().collect()
    }

    /// Descriptions of every registered scanner, sorted by name
    pub fn scanner_infos(&self) -> Vec<ScannerInfo> {
        self.factories.values().map(|factory| factory().info()).collect()
    }

    pub fn scanner_count(&self) -> usize {
        self.factories.len()
    }

    /// Instantiate a scanner by name
    pub fn create(&self, name: &str) -> ScannerResult<Box<dyn Scanner>> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| ScannerError::NotFound {
                name: name.to_string(),
                available: self.scanner_names().join(", "),
            })
    }

    /// Resolve, validate and initialise the selected scanners in order
    pub fn resolve(
        &self,
        names: &[String],
        config: &RunConfig,
    ) -> ScannerResult<Vec<Box<dyn Scanner>>> {
        self.resolve_with(names, config, command_available)
    }

    /// As [`resolve`](Self::resolve) with a custom command lookup
    pub fn resolve_with(
        &self,
        names: &[String],
        config: &RunConfig,
        is_available: impl Fn(&str) -> bool,
    ) -> ScannerResult<Vec<Box<dyn Scanner>>> {
        let scanners = names
            .iter()
            .map(|name| self.create(name))
            .collect::<ScannerResult<Vec<_>>>()?;

        for scanner in &scanners {
            let info = scanner.info();
            if let Some(command) = info.command.as_deref() {
                if !is_available(command) {
                    return Err(ScannerError::MissingCommand {
                        scanner: info.name,
                        command: command.to_string(),
                    });
                }
                log::debug!("Scanner '{}' found required command '{}'", info.name, command);
            }
        }

        for scanner in &scanners {
            let name = scanner.info().name;
            log::debug!("Initialising scanner '{}'", name);
            match scanner.init(config) {
                Ok(true) => {}
                Ok(false) => {
                    return Err(ScannerError::InitFailed {
                        scanner: name,
                        reason: "init hook rejected the configuration".to_string(),
                    })
                }
                Err(err @ ScannerError::InitFailed { .. }) => return Err(err),
                Err(err) => {
                    return Err(ScannerError::InitFailed {
                        scanner: name,
                        reason: err.to_string(),
                    })
                }
            }
        }

        Ok(scanners)
    }
}

impl Default for ScannerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether an external command can be found on PATH
pub fn command_available(command: &str) -> bool {
    which::which(command).is_ok()
}
