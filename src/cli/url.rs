//! `routable url`: print the URL of a record.

use anyhow::Result;
use serde::Serialize;

use super::UrlArgs;
use super::common::Session;
use crate::naming;
use crate::resolve::ResolvedParameters;

/// `--json` output.
#[derive(Debug, Serialize)]
struct UrlOutput<'a> {
    route: &'a str,
    params: &'a ResolvedParameters,
    url: &'a str,
}

pub fn run_url(session: &Session, args: &UrlArgs) -> Result<()> {
    let record = session.record(&args.record)?;
    let params = session.caller_parameters(&args.params, &args.args)?;
    let generator = session.generator();

    let route_name = match &args.route {
        Some(name) => name.clone(),
        None => naming::route_name(&record, args.action.as_deref()),
    };

    let (route, resolved) = generator.resolve_for(&route_name, &record, params)?;
    let url = generator.build(route, &resolved)?;

    if args.json {
        let output = UrlOutput {
            route: route.name(),
            params: &resolved,
            url: &url,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{url}");
    }
    Ok(())
}
