//! `routable check`: try every record against its routes.

mod report;

use crate::generator::UrlGenerator;
use crate::logger;
use crate::{debug, log};
use crate::model::RecordStore;
use crate::naming;
use crate::resolve::CallerParameters;
use crate::route::RouteTable;
use crate::utils::plural_count;

pub use report::{CheckFailure, CheckReport};

/// Generate a URL for every record and every route in its route group.
pub fn check_records(
    table: &RouteTable,
    generator: &UrlGenerator<'_>,
    store: &RecordStore,
) -> CheckReport {
    let mut report = CheckReport::default();

    for relation in store.dangling_relations() {
        log!(
            "warning";
            "{} relation `{}` points at undefined {}",
            relation.source,
            relation.relation,
            relation.target
        );
    }

    for record in store.records() {
        let reference = record.reference().to_string();
        let base = naming::base_route_name(&record);

        let mut routed = false;
        for route in table.in_group(&base) {
            routed = true;
            match generator.url_for(route.name(), &record, CallerParameters::none()) {
                Ok(url) => {
                    debug!("check"; "{} {} -> {}", reference, route.name(), url);
                    report.passed += 1;
                }
                Err(err) => {
                    report.add_failure(reference.clone(), route.name().to_string(), err.to_string())
                }
            }
        }

        if !routed {
            report.unrouted.push(format!("{reference} ({base}.*)"));
        }
    }

    report
}

/// Run the check and print the report. Returns whether every route resolved.
pub fn run_check(table: &RouteTable, generator: &UrlGenerator<'_>, store: &RecordStore) -> bool {
    log!(
        "check";
        "checking {} against {}",
        plural_count(store.len(), "record"),
        plural_count(table.len(), "route")
    );

    let report = check_records(table, generator, store);
    report.print();
    if report.is_ok() {
        logger::status_success(&report.to_string());
    } else {
        logger::status_error(&report.to_string(), "see failures above");
    }
    report.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoutableConfig;

    const CONFIG: &str = r#"
[[routes]]
name = "threads.show"
path = "channels/{channel}/threads/{thread}"
params = { channel = "Channel", thread = "Thread" }

[[routes]]
name = "threads.edit"
path = "threads/{thread}/edit"
params = { thread = "Thread" }

[[records]]
type = "Channel"
id = 3

[[records]]
type = "Thread"
id = 7
relations = { channel = "Channel:3" }

[[records]]
type = "Thread"
id = 8
"#;

    #[test]
    fn test_check_records() {
        let config = RoutableConfig::from_str(CONFIG).unwrap();
        let table = config.route_table();
        let builder = config.url_builder();
        let store = config.record_store();
        let generator = UrlGenerator::new(&table, &builder);

        let report = check_records(&table, &generator, &store);

        // Thread:7 passes both routes, Thread:8 passes only the edit route
        assert_eq!(report.passed, 3);
        assert_eq!(report.failure_count(), 1);
        let failures = &report.failures["Thread:8"];
        assert_eq!(failures[0].route, "threads.show");
        assert!(failures[0].reason.contains("channel"));

        assert_eq!(report.unrouted, vec!["Channel:3 (channels.*)"]);
        assert!(!report.is_ok());
    }
}
