//! Shared state and helpers for CLI commands.

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};

use crate::config::RoutableConfig;
use crate::core::RouteKey;
use crate::debug;
use crate::generator::UrlGenerator;
use crate::model::{Record, RecordRef, RecordStore, RoutableRef};
use crate::resolve::{CallerParameters, ParamMap, ParamValue};
use crate::route::{PathUrlBuilder, RouteTable};

/// Runtime objects built once from the config.
pub struct Session {
    pub table: RouteTable,
    pub builder: PathUrlBuilder,
    pub store: Arc<RecordStore>,
}

impl Session {
    pub fn new(config: &RoutableConfig) -> Self {
        Self {
            table: config.route_table(),
            builder: config.url_builder(),
            store: config.record_store(),
        }
    }

    pub fn generator(&self) -> UrlGenerator<'_> {
        UrlGenerator::new(&self.table, &self.builder)
    }

    /// Record named by a `Type:id` argument.
    pub fn record(&self, raw: &str) -> Result<Arc<Record>> {
        let reference: RecordRef = raw.parse()?;
        self.store
            .get(&reference)
            .ok_or_else(|| anyhow!("record `{reference}` is not defined"))
    }

    /// Value of a `-p NAME=VALUE` argument: a defined record when VALUE
    /// names one, otherwise a literal route key.
    pub fn param_value(&self, raw: &str) -> ParamValue {
        if let Ok(reference) = raw.parse::<RecordRef>()
            && let Some(record) = self.store.get(&reference)
        {
            return ParamValue::Model(record as RoutableRef);
        }
        debug!("url"; "`{}` is not a defined record, using it as a literal key", raw);
        ParamValue::Key(RouteKey::parse(raw))
    }

    /// Caller parameters from `-p` and `-a` arguments.
    ///
    /// Named values and positional records are combined into one map, the
    /// positional ones keyed by index.
    pub fn caller_parameters(
        &self,
        named: &[(String, String)],
        positional: &[String],
    ) -> Result<CallerParameters> {
        if named.is_empty() {
            let mut params = CallerParameters::new();
            for raw in positional {
                params = params.arg(self.record(raw).with_context(|| format!("in `-a {raw}`"))?);
            }
            return Ok(params);
        }

        let mut map = ParamMap::new();
        for (index, raw) in positional.iter().enumerate() {
            let record = self.record(raw).with_context(|| format!("in `-a {raw}`"))?;
            map = map.with_index(index, record);
        }
        for (name, raw) in named {
            map = map.with(name.clone(), self.param_value(raw));
        }
        Ok(CallerParameters::from(map))
    }
}
