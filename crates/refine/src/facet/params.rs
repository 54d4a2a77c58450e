//! Facet request shapes.
//!
//! The UI link and the compute command expect different layouts: the UI
//! nests each facet as `{c: config, o: {sort}}`, while `compute-facets`
//! takes a flat object with an extra `selection` list.

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::Result;

use super::options::{FacetColumn, FacetSort};

/// Facet configuration block (`c`) of a UI facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetConfig {
    pub column_name: String,
    pub expression: String,
    pub name: String,
    pub invert: bool,
}

/// UI options block (`o`) of a UI facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FacetUiOptions {
    pub sort: FacetSort,
}

/// One facet in the UI layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetParameter {
    pub c: FacetConfig,
    pub o: FacetUiOptions,
}

/// One facet in the `compute-facets` layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetRequest {
    pub column_name: String,
    pub expression: String,
    pub name: String,
    pub invert: bool,
    pub sort: FacetSort,
    pub selection: Vec<Value>,
}

#[derive(Serialize)]
struct Facets<'a, T> {
    facets: &'a [T],
}

/// Build UI facet parameters, one per column, in input order.
pub fn facet_parameters(columns: &[FacetColumn]) -> Vec<FacetParameter> {
    columns
        .iter()
        .map(|column| {
            let settings = column.settings();
            FacetParameter {
                c: FacetConfig {
                    column_name: column.column_name().to_string(),
                    expression: settings.expression,
                    name: column.column_name().to_string(),
                    invert: settings.invert,
                },
                o: FacetUiOptions {
                    sort: settings.sort,
                },
            }
        })
        .collect()
}

/// Build `compute-facets` requests, one per column, in input order.
pub fn facet_requests(columns: &[FacetColumn]) -> Vec<FacetRequest> {
    columns
        .iter()
        .map(|column| {
            let settings = column.settings();
            FacetRequest {
                column_name: column.column_name().to_string(),
                expression: settings.expression,
                name: column.column_name().to_string(),
                invert: settings.invert,
                sort: settings.sort,
                selection: Vec::new(),
            }
        })
        .collect()
}

/// Serialize facet requests as the `engine` parameter of `compute-facets`.
pub fn compute_engine(requests: &[FacetRequest]) -> Result<String> {
    Ok(serde_json::to_string(&Facets { facets: requests })?)
}

/// Build a UI link that opens `project_id` with the given facets applied.
///
/// Spaces in the facet JSON become tabs before form encoding, and the
/// encoded tabs (`%09`) are then rewritten to `%20`: the UI reads `+`
/// literally, so spaces must arrive percent-encoded.
pub fn link_to_facets(server: &str, project_id: &str, columns: &[FacetColumn]) -> Result<String> {
    let parameters = facet_parameters(columns);
    let ui = serde_json::to_string(&Facets {
        facets: &parameters,
    })?
    .replace(' ', "\t");

    let mut url = Url::parse(&format!("{}/project", server))?;
    url.query_pairs_mut()
        .append_pair("project", project_id)
        .append_pair("ui", &ui);

    Ok(url.to_string().replace("%09", "%20"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_facet_parameters_shape() {
        let columns = vec![
            FacetColumn::new("city"),
            FacetColumn::with_options("year", ["value.toNumber()", "sort_count", "invert"]),
        ];
        let value = serde_json::to_value(facet_parameters(&columns)).unwrap();
        assert_eq!(
            value,
            json!([
                {
                    "c": {"columnName": "city", "expression": "value", "name": "city", "invert": false},
                    "o": {"sort": "name"}
                },
                {
                    "c": {"columnName": "year", "expression": "value.toNumber()", "name": "year", "invert": true},
                    "o": {"sort": "count"}
                }
            ])
        );
    }

    #[test]
    fn test_compute_engine_is_flat() {
        let columns = vec![FacetColumn::with_options("city", "sort_count")];
        let engine = compute_engine(&facet_requests(&columns)).unwrap();
        assert_eq!(
            engine,
            r#"{"facets":[{"columnName":"city","expression":"value","name":"city","invert":false,"sort":"count","selection":[]}]}"#
        );
    }

    #[test]
    fn test_link_to_facets() {
        let link = link_to_facets(
            "http://127.0.0.1:3333",
            "1234",
            &[FacetColumn::new("Home Town")],
        )
        .unwrap();

        assert!(link.starts_with("http://127.0.0.1:3333/project?project=1234&ui="));
        assert!(link.contains("Home%20Town"));
        assert!(!link.contains("%09"));
        assert!(!link.contains('+'));
    }

    #[test]
    fn test_link_decodes_to_facet_json() {
        let link = link_to_facets("http://localhost:3333", "7", &[FacetColumn::new("a")]).unwrap();
        let url = Url::parse(&link).unwrap();
        let ui = url
            .query_pairs()
            .find(|(k, _)| k == "ui")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        let decoded: Value = serde_json::from_str(&ui).unwrap();
        assert_eq!(decoded["facets"][0]["c"]["columnName"], "a");
        assert_eq!(decoded["facets"][0]["o"]["sort"], "name");
    }
}
