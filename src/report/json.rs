use serde::Serialize;

use crate::Analysis;
use crate::error::Result;
use crate::model::RouteRecord;
use crate::summary::Summary;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    summary: &'a Summary,
    route_items: &'a [RouteRecord],
}

/// `{ "summary": …, "routeItems": […] }` を整形して出力する
pub fn render_json(analysis: &Analysis) -> Result<String> {
    let report = JsonReport {
        summary: &analysis.summary,
        route_items: &analysis.routes,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_json_report() {
        let routes = vec![RouteRecord {
            path: Some("/home".into()),
            name: Some("Home".into()),
            component: Some("Home".into()),
            ..Default::default()
        }];
        let analysis = Analysis {
            routes_found: true,
            summary: Summary::from_routes(&routes),
            routes,
        };

        let text = render_json(&analysis).unwrap();
        assert!(text.contains('\n'));

        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["summary"]["total"], 1);
        assert_eq!(value["summary"]["componentCountMap"], json!({ "Home": 1 }));
        assert_eq!(
            value["routeItems"],
            json!([{ "path": "/home", "name": "Home", "component": "Home", "hasProps": false }])
        );
    }
}
