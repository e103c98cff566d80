//! Text report generation for pod network info payloads.
//!
//! The formatter is a pure function over a loose JSON tree. The collector
//! payload is never validated against a schema: each field is looked up
//! optionally and renders as `N/A` when missing or of an unexpected type,
//! one field at a time, without skipping the surrounding section.

use serde_json::Value;

/// How many routing rules to show before truncating the list.
const MAX_ROUTE_RULES: usize = 5;

/// String field lookup with the `N/A` placeholder fallback.
fn field<'a>(data: &'a Value, key: &str) -> &'a str {
    data.get(key).and_then(Value::as_str).unwrap_or("N/A")
}

/// Format pod network information as a fixed-layout text report.
pub fn format_network_info(data: &Value) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "Pod Network Information for {}/{}",
        field(data, "namespace"),
        field(data, "podName")
    ));
    lines.push("=".repeat(60));
    lines.push(format!("Pod IP: {}", field(data, "podIP")));

    if let Some(eni) = data.get("eni") {
        lines.push(String::new());
        lines.push("ENI Details:".to_string());
        lines.push(format!("  ENI ID: {}", field(eni, "eniId")));
        lines.push(format!("  Device: {}", field(eni, "device")));
        lines.push(format!("  MAC Address: {}", field(eni, "mac")));
        lines.push(format!("  Subnet: {}", field(eni, "subnet")));
        lines.push(format!("  VPC: {}", field(eni, "vpc")));

        if let Some(sg_ids) = eni.get("sgIds") {
            let joined = sg_ids
                .as_array()
                .map(|ids| {
                    ids.iter()
                        .filter_map(Value::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default();
            lines.push(format!("  Security Groups: {joined}"));
        }
    }

    if let Some(route_rules) = data.get("routeRules") {
        let rules = route_rules.as_array().map(Vec::as_slice).unwrap_or(&[]);

        lines.push(String::new());
        lines.push(format!("Routing Rules ({} rules):", rules.len()));
        for (index, rule) in rules.iter().take(MAX_ROUTE_RULES).enumerate() {
            lines.push(format!("  {}. {}", index + 1, field(rule, "rule")));
        }
        if rules.len() > MAX_ROUTE_RULES {
            lines.push(format!(
                "  ... and {} more rules",
                rules.len() - MAX_ROUTE_RULES
            ));
        }
    }

    lines.join("\n")
}
