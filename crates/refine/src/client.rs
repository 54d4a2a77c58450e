//! Main RefineClient struct and public API.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use url::form_urlencoded;

use crate::command::{self, CommandMethod};
use crate::config::RefineConfig;
use crate::error::{RefineError, Result};
use crate::export::ExportOptions;
use crate::facet::{self, Facet, FacetColumn, FacetParameter};
use crate::response::{is_api_error, parse_response, DeleteOutcome};
use crate::transport::{HttpResponse, HttpTransport, MultipartBody, Params, Transport};

/// How a session gets its project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectSource {
    /// Upload a file and create a new project from it.
    Upload { project_name: String, file: PathBuf },
    /// Bind to a project that already exists on the server.
    Existing { project_id: String },
}

impl ProjectSource {
    /// Create a project named `project_name` from `file`.
    pub fn upload(project_name: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        ProjectSource::Upload {
            project_name: project_name.into(),
            file: file.into(),
        }
    }

    /// Use the project with id `project_id`.
    pub fn existing(project_id: impl Into<String>) -> Self {
        ProjectSource::Existing {
            project_id: project_id.into(),
        }
    }
}

/// A session bound to one OpenRefine project.
///
/// Construction always resolves a project id that exists on the server, so
/// every method can assume one. Each method issues exactly one blocking
/// request.
pub struct RefineClient {
    config: RefineConfig,
    transport: Arc<dyn Transport>,
    project_id: String,
    project_name: String,
}

impl fmt::Debug for RefineClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefineClient")
            .field("server", &self.config.server)
            .field("project_id", &self.project_id)
            .field("project_name", &self.project_name)
            .field("transport", &self.transport.name())
            .finish()
    }
}

impl RefineClient {
    /// Connect using the default HTTP transport.
    pub fn connect(config: RefineConfig, source: ProjectSource) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Self::connect_with(transport, config, source)
    }

    /// Connect using a caller-provided transport.
    pub fn connect_with(
        transport: impl Transport + 'static,
        config: RefineConfig,
        source: ProjectSource,
    ) -> Result<Self> {
        Self::connect_shared(Arc::new(transport), config, source)
    }

    /// Connect using a transport shared with other sessions.
    pub fn connect_shared(
        transport: Arc<dyn Transport>,
        config: RefineConfig,
        source: ProjectSource,
    ) -> Result<Self> {
        let (project_id, project_name) = match source {
            ProjectSource::Upload { project_name, file } => {
                let escaped = escape_project_name(&project_name);
                let id = upload_project(transport.as_ref(), &config, &escaped, &file)?;
                (id, escaped)
            }
            ProjectSource::Existing { project_id } => {
                let name = bind_project(transport.as_ref(), &config, &project_id)?;
                (project_id, name)
            }
        };

        Ok(Self {
            config,
            transport,
            project_id,
            project_name,
        })
    }

    /// Upload `file` as a new project named `project_name`.
    pub fn create(
        config: RefineConfig,
        project_name: impl Into<String>,
        file: impl AsRef<Path>,
    ) -> Result<Self> {
        Self::connect(
            config,
            ProjectSource::upload(project_name, file.as_ref()),
        )
    }

    /// Bind to the existing project `project_id`.
    pub fn open(config: RefineConfig, project_id: impl Into<String>) -> Result<Self> {
        Self::connect(config, ProjectSource::existing(project_id))
    }

    /// Metadata for every project on `server`.
    pub fn get_all_project_metadata(server: &str) -> Result<Value> {
        let config = RefineConfig::default().with_server(server);
        let transport = HttpTransport::new(&config)?;
        Self::get_all_project_metadata_with(&transport, server)
    }

    /// Metadata for every project on `server`, through `transport`.
    pub fn get_all_project_metadata_with(transport: &dyn Transport, server: &str) -> Result<Value> {
        let config = RefineConfig::default().with_server(server);
        let response = transport.get(
            &config.command_url("get-all-project-metadata"),
            &Params::new(),
        )?;
        parse_response(&response.text())
    }

    /// Server-assigned project id.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Project name, URL-escaped.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Server base URL.
    pub fn server(&self) -> &str {
        &self.config.server
    }

    /// Whether API-level errors are raised.
    pub fn throws_exceptions(&self) -> bool {
        self.config.throws_exceptions
    }

    /// Dispatch any server command.
    ///
    /// `method` may use underscores (`get_column_info`) or dashes. The
    /// session's project id is always sent as `project`, replacing any
    /// caller-supplied value. Commands starting with `get-` use GET, all
    /// others POST.
    #[instrument(level = "debug", skip(self, params), fields(project = %self.project_id))]
    pub fn call(&self, method: &str, params: Params) -> Result<Value> {
        dispatch(
            self.transport.as_ref(),
            &self.config,
            &self.project_id,
            method,
            params,
            self.config.throws_exceptions,
        )
    }

    /// Metadata of the bound project.
    pub fn get_project_metadata(&self) -> Result<Value> {
        self.call("get-project-metadata", Params::new())
    }

    /// Run `compute-facets` with a raw engine JSON string.
    pub fn compute_facets(&self, engine: &str) -> Result<Value> {
        self.call("compute-facets", command::params([("engine", engine)]))
    }

    /// Compute list facets for `columns` and normalize the reply.
    pub fn compute_facet(&self, columns: &[FacetColumn]) -> Result<Vec<Facet>> {
        let engine = facet::compute_engine(&facet::facet_requests(columns))?;
        let response = self.compute_facets(&engine)?;
        facet::normalize_facets(&response)
    }

    /// UI facet parameters for `columns`, in input order.
    pub fn facet_parameters(&self, columns: &[FacetColumn]) -> Vec<FacetParameter> {
        facet::facet_parameters(columns)
    }

    /// Shareable UI link opening this project with `columns` faceted.
    pub fn link_to_facets(&self, columns: &[FacetColumn]) -> Result<String> {
        facet::link_to_facets(&self.config.server, &self.project_id, columns)
    }

    /// Apply a JSON operation history.
    ///
    /// `source` is read as a file when such a file exists, otherwise it is
    /// taken to be the JSON text itself. Either way the text is sent as-is.
    pub fn apply_operations(&self, source: &str) -> Result<Value> {
        let path = Path::new(source);
        let operations = if path.is_file() {
            debug!(path = %path.display(), "reading operations file");
            std::fs::read_to_string(path).map_err(|e| RefineError::Io {
                path: path.to_path_buf(),
                source: e,
            })?
        } else {
            source.to_string()
        };

        self.call(
            "apply-operations",
            command::params([("operations", operations)]),
        )
    }

    /// Export rows and return the raw body.
    pub fn export_rows(&self, options: &ExportOptions) -> Result<Vec<u8>> {
        let url = self.config.command_url(&format!(
            "export-rows/{}.{}",
            self.project_name, options.format
        ));
        let form = command::params([
            ("engine", options.engine()?),
            ("options", options.options.clone()),
            ("project", self.project_id.clone()),
            ("format", options.format.clone()),
        ]);

        let response = self.transport.post_form(&url, &form)?;
        if response.status >= 400 {
            warn!(status = response.status, "export-rows answered with an error status");
        }
        Ok(response.body)
    }

    /// Delete the project.
    ///
    /// An unreadable reply gives [`DeleteOutcome::Unknown`] instead of an
    /// error; transport failures still propagate.
    pub fn delete_project(&self) -> Result<DeleteOutcome> {
        let url = self.config.command_url("delete-project");
        let form = command::params([("project", self.project_id.as_str())]);
        let response = self.transport.post_form(&url, &form)?;

        let outcome = DeleteOutcome::from_body(&response.text());
        info!(project = %self.project_id, code = ?outcome.code(), "delete-project");
        Ok(outcome)
    }
}

/// URL-escape a project name the way form fields are encoded.
pub fn escape_project_name(name: &str) -> String {
    form_urlencoded::byte_serialize(name.as_bytes()).collect()
}

/// Extract the `project` query parameter from a redirect target.
pub fn project_id_from_location(location: &str) -> Option<String> {
    let (_, query) = location.split_once('?')?;
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "project")
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
}

fn dispatch(
    transport: &dyn Transport,
    config: &RefineConfig,
    project_id: &str,
    method: &str,
    params: Params,
    throws: bool,
) -> Result<Value> {
    let command = command::command_name(method);
    let url = config.command_url(&command);
    let params = command::with_project(project_id, params);

    let response: HttpResponse = match command::command_method(&command) {
        CommandMethod::Get => transport.get(&url, &params)?,
        CommandMethod::Post => transport.post_form(&url, &params)?,
    };

    let value = parse_response(&response.text())?;
    if throws && is_api_error(&value) {
        return Err(RefineError::Api { response: value });
    }
    Ok(value)
}

fn upload_project(
    transport: &dyn Transport,
    config: &RefineConfig,
    project_name: &str,
    file: &Path,
) -> Result<String> {
    if project_name.is_empty() || file.as_os_str().is_empty() {
        return Err(RefineError::Config(
            "project upload needs a project name and a file".to_string(),
        ));
    }

    let content = std::fs::read(file).map_err(|e| RefineError::Io {
        path: file.to_path_buf(),
        source: e,
    })?;
    let file_name = file
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let body = MultipartBody::new()
        .file("project-file", &file_name, &content)
        .text("project-name", project_name);

    let response = transport.post_multipart(
        &config.command_url("create-project-from-upload"),
        body,
    )?;

    let project_id = response
        .location
        .as_deref()
        .and_then(project_id_from_location)
        .ok_or_else(|| {
            RefineError::ProjectCreationFailed(format!(
                "status {}, location {:?}: {}",
                response.status,
                response.location,
                response.text()
            ))
        })?;

    info!(project = %project_id, name = project_name, "created project");
    Ok(project_id)
}

fn bind_project(transport: &dyn Transport, config: &RefineConfig, project_id: &str) -> Result<String> {
    let metadata = dispatch(
        transport,
        config,
        project_id,
        "get-project-metadata",
        Params::new(),
        false,
    )?;

    let failed = ["status", "code"]
        .iter()
        .any(|key| metadata.get(*key).and_then(Value::as_str) == Some("error"));
    if failed {
        let message = metadata
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Project not found")
            .to_string();
        return Err(RefineError::ProjectNotFound {
            message,
            project_id: project_id.to_string(),
            server: config.server.clone(),
        });
    }

    let name = metadata
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            RefineError::UnexpectedResponse(format!(
                "project metadata has no name: {}",
                metadata
            ))
        })?;

    info!(project = %project_id, name, "bound to project");
    Ok(escape_project_name(name))
}
