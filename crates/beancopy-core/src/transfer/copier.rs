//! Bean copier: runs the same-name and override passes for one or many beans
//!
//! Copyright (c) 2025 Beancopy Team
//! Licensed under the Apache-2.0 license

use super::defaults::copy_defaults;
use super::overrides::apply_overrides;
use crate::bean::Bean;
use crate::config::MapperConfig;
use crate::error::{Error, Result};

/// Maps source beans onto target beans according to a [`MapperConfig`]
///
/// The copier holds no state besides its configuration, so one instance can
/// be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct BeanCopier {
    config: MapperConfig,
}

impl BeanCopier {
    pub fn new(config: MapperConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Build a fresh `T` and populate it from `source`
    pub fn copy<S, T>(&self, source: &S) -> Result<T>
    where
        S: Bean,
        T: Bean,
    {
        let target = T::instantiate()?;
        self.copy_into(source, target)
    }

    /// Populate a caller-supplied `target` from `source`
    pub fn copy_into<S, T>(&self, source: &S, mut target: T) -> Result<T>
    where
        S: Bean,
        T: Bean,
    {
        tracing::debug!(
            source = S::type_name(),
            target = T::type_name(),
            copy_same_name = self.config.copy_same_name,
            "mapping bean"
        );

        if self.config.copy_same_name {
            copy_defaults(source, &mut target)?;
        }
        apply_overrides(source, &mut target, self.config.on_mismatch)?;

        Ok(target)
    }

    /// Map every element of `sources`, stopping at the first failure
    ///
    /// `None` in, `None` out. The error names the failing element's index.
    pub fn copy_list<S, T>(&self, sources: Option<&[S]>) -> Result<Option<Vec<T>>>
    where
        S: Bean,
        T: Bean,
    {
        let Some(sources) = sources else {
            return Ok(None);
        };

        sources
            .iter()
            .enumerate()
            .map(|(index, source)| {
                self.copy(source).map_err(|err| Error::Element {
                    index,
                    source: Box::new(err),
                })
            })
            .collect::<Result<Vec<T>>>()
            .map(Some)
    }

    /// Map every element of `sources` independently
    ///
    /// One result per input, in input order; a failing element does not
    /// affect the others.
    pub fn copy_list_each<S, T>(&self, sources: Option<&[S]>) -> Option<Vec<Result<T>>>
    where
        S: Bean,
        T: Bean,
    {
        sources.map(|sources| sources.iter().map(|source| self.copy(source)).collect())
    }
}

/// Map `source` onto a new `T` with same-name copying on
pub fn copy_bean<S: Bean, T: Bean>(source: &S) -> Result<T> {
    BeanCopier::default().copy(source)
}

/// Map `source` onto `target` with same-name copying on
pub fn copy_bean_into<S: Bean, T: Bean>(source: &S, target: T) -> Result<T> {
    BeanCopier::default().copy_into(source, target)
}

/// Map `source` onto a new `T`; with `apply_same_name_copy` off only
/// annotated fields are populated
pub fn copy_bean_with<S: Bean, T: Bean>(source: &S, apply_same_name_copy: bool) -> Result<T> {
    BeanCopier::new(MapperConfig::with_same_name_copy(apply_same_name_copy)).copy(source)
}

pub fn copy_bean_into_with<S: Bean, T: Bean>(
    source: &S,
    target: T,
    apply_same_name_copy: bool,
) -> Result<T> {
    BeanCopier::new(MapperConfig::with_same_name_copy(apply_same_name_copy))
        .copy_into(source, target)
}

/// Map each source onto a new `T`, preserving order; `None` maps to `None`
pub fn copy_bean_list<S: Bean, T: Bean>(sources: Option<&[S]>) -> Result<Option<Vec<T>>> {
    BeanCopier::default().copy_list(sources)
}

pub fn copy_bean_list_with<S: Bean, T: Bean>(
    sources: Option<&[S]>,
    apply_same_name_copy: bool,
) -> Result<Option<Vec<T>>> {
    BeanCopier::new(MapperConfig::with_same_name_copy(apply_same_name_copy)).copy_list(sources)
}
