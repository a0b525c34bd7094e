//! `routable list`: print registered routes.

use owo_colors::OwoColorize;

use crate::log;
use crate::route::{RouteDescriptor, RouteTable};
use crate::utils::plural_count;

/// One line per route: `name  template  (param: Type, tab?)`.
pub fn format_route(route: &RouteDescriptor) -> String {
    let params: Vec<String> = route
        .params()
        .iter()
        .map(|param| {
            let name = if param.optional {
                format!("{}?", param.name)
            } else {
                param.name.clone()
            };
            match &param.ty {
                Some(ty) => format!("{name}: {ty}"),
                None => name,
            }
        })
        .collect();

    format!(
        "{}  {}  {}",
        route.name().bold(),
        route.template().cyan(),
        format!("({})", params.join(", ")).dimmed()
    )
}

pub fn run_list(table: &RouteTable) {
    if table.is_empty() {
        log!("route"; "no routes registered");
        return;
    }

    log!("route"; "{} registered", plural_count(table.len(), "route"));
    for route in table.iter() {
        println!("{}", format_route(route));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_route() {
        owo_colors::set_override(false);
        let route = RouteDescriptor::parse(
            "threads.show",
            "channels/{channel}/threads/{thread}/{tab?}",
            [("channel", "Channel"), ("thread", "Thread")],
        )
        .unwrap();

        assert_eq!(
            format_route(&route),
            "threads.show  channels/{channel}/threads/{thread}/{tab?}  (channel: Channel, thread: Thread, tab?)"
        );
    }
}
