//! Command naming and request shaping for the generic dispatch path.

use crate::transport::Params;

/// HTTP verb used for a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandMethod {
    Get,
    Post,
}

/// Translate a method name into the server's command name.
///
/// `get_column_info` becomes `get-column-info`; names that are already
/// dash-separated pass through.
pub fn command_name(method: &str) -> String {
    method.replace('_', "-")
}

/// Commands starting with `get-` are read with GET, everything else POSTs.
pub fn command_method(command: &str) -> CommandMethod {
    if command.starts_with("get-") {
        CommandMethod::Get
    } else {
        CommandMethod::Post
    }
}

/// Prepend the session's project id to the caller's parameters.
///
/// A caller-supplied `project` key is dropped: the session's id always wins,
/// so a dispatch cannot reach into another project.
pub fn with_project(project_id: &str, params: Params) -> Params {
    let mut merged = Params::with_capacity(params.len() + 1);
    merged.insert("project".to_string(), project_id.to_string());
    merged.extend(params.into_iter().filter(|(key, _)| key != "project"));
    merged
}

/// Build a parameter map from key/value pairs.
pub fn params<K, V, I>(pairs: I) -> Params
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
