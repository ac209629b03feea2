//! Build and deployment summaries.
//!
//! Structured presentation of a deployment's builds: lifecycle state with
//! its dashboard color, builder attribution, and per-output details (size
//! labels, icons, lambda deploy regions). Deserializes the builds API wire
//! shape directly, like the record model does for the events API.

use serde::{Deserialize, Serialize};

/// Deployment build lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildState {
    Initializing,
    Analyzing,
    Building,
    Deploying,
    Ready,
    Error,
}

impl BuildState {
    /// Dashboard color for the state badge.
    pub fn color(&self) -> &'static str {
        match self {
            BuildState::Initializing => "#EAEAEA",
            BuildState::Analyzing => "#0076FF",
            BuildState::Building => "#D9931E",
            BuildState::Deploying => "#F5A623",
            BuildState::Ready => "#2CBE4E",
            BuildState::Error => "#FF0000",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildState::Initializing => "INITIALIZING",
            BuildState::Analyzing => "ANALYZING",
            BuildState::Building => "BUILDING",
            BuildState::Deploying => "DEPLOYING",
            BuildState::Ready => "READY",
            BuildState::Error => "ERROR",
        }
    }
}

impl From<&str> for BuildState {
    /// Unknown states display with the neutral initializing badge.
    fn from(value: &str) -> Self {
        match value {
            "ANALYZING" => Self::Analyzing,
            "BUILDING" => Self::Building,
            "DEPLOYING" => Self::Deploying,
            "READY" => Self::Ready,
            "ERROR" => Self::Error,
            _ => Self::Initializing,
        }
    }
}

const BUILDERS_REPO: &str = "https://github.com/zeit/now-builders/tree/canary/packages/";

/// Source link for builder packages under the `@now` scope; community
/// builders carry no link.
pub fn builder_link(builder: &str) -> Option<String> {
    if !builder.contains("@now") {
        return None;
    }
    Some(format!(
        "{BUILDERS_REPO}{}",
        builder.replace('@', "").replace('/', "-")
    ))
}

/// Human-readable decimal size label (3 significant digits).
pub fn size_label(size: u64) -> String {
    const UNITS: [&str; 5] = ["B", "kB", "MB", "GB", "TB"];

    if size < 1000 {
        return format!("{size} B");
    }

    let mut value = size as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }

    if value < 10.0 {
        format!("{value:.2} {}", UNITS[unit])
    } else if value < 100.0 {
        format!("{value:.1} {}", UNITS[unit])
    } else {
        format!("{value:.0} {}", UNITS[unit])
    }
}

/// Dashboard URL for a deploy region code; digits are dropped from the
/// region name (`sfo1` links to the `sfo` dashboard host).
pub fn region_url(region: &str) -> String {
    let name: String = region.chars().filter(|c| !c.is_ascii_digit()).collect();
    format!("https://{name}.zeit.co")
}

const CODE_SPLITTING_THRESHOLD: u64 = 1_300_000;
const CODE_SPLITTING_MESSAGE: &str =
    "This bundle is large; consider code-splitting to reduce cold-start size.";
const CODE_SPLITTING_LINK: &str = "https://nextjs.org/docs/advanced-features/dynamic-import";

/// One file produced by a build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireOutput")]
pub struct OutputFile {
    pub path: String,
    pub size: Option<u64>,
    pub is_lambda: bool,
    pub regions: Vec<String>,
}

#[derive(Deserialize)]
struct WireOutput {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    path: String,
    #[serde(default)]
    size: Option<u64>,
    #[serde(default)]
    lambda: Option<WireLambda>,
}

#[derive(Deserialize)]
struct WireLambda {
    #[serde(rename = "deployedTo", default)]
    deployed_to: Vec<String>,
}

impl From<WireOutput> for OutputFile {
    fn from(wire: WireOutput) -> Self {
        Self {
            path: wire.path,
            size: wire.size,
            is_lambda: wire.kind.as_deref() == Some("lambda"),
            regions: wire.lambda.map(|l| l.deployed_to).unwrap_or_default(),
        }
    }
}

impl OutputFile {
    /// Final path segment.
    pub fn file_name(&self) -> &str {
        self.path.rsplit(['/', '\\']).next().unwrap_or(&self.path)
    }

    /// Directory part of the path, trailing separator included.
    pub fn directory(&self) -> &str {
        &self.path[..self.path.len() - self.file_name().len()]
    }

    /// Size label, empty when the API reported no size.
    pub fn size_label(&self) -> String {
        self.size.map(size_label).unwrap_or_default()
    }

    /// Icon key for the file: its extension, with `.map` files normalized
    /// to `<ext>-map`. Lambda outputs use the lambda icon; files without an
    /// extension have none.
    pub fn icon(&self) -> Option<String> {
        if self.is_lambda {
            return Some("lambda".to_string());
        }

        let name = self.file_name();
        let normalized = if name.contains(".map") {
            name.replace(".map", "-map")
        } else {
            name.to_string()
        };

        match normalized.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => Some(ext.to_string()),
            _ => None,
        }
    }

    /// Uppercased region codes paired with their dashboard URLs.
    pub fn region_links(&self) -> Vec<(String, String)> {
        self.regions
            .iter()
            .map(|region| (region.to_uppercase(), region_url(region)))
            .collect()
    }

    /// Advisory for oversized JavaScript bundles.
    pub fn advisory(&self) -> Option<(&'static str, &'static str)> {
        let oversized = self.size.unwrap_or(0) >= CODE_SPLITTING_THRESHOLD
            && self.file_name().contains(".js");
        oversized.then_some((CODE_SPLITTING_MESSAGE, CODE_SPLITTING_LINK))
    }
}

/// Summary of one build within a deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireBuild")]
pub struct BuildSummary {
    pub id: String,
    pub entrypoint: Option<String>,
    pub builder: Option<String>,
    pub state: BuildState,
    pub outputs: Vec<OutputFile>,
}

#[derive(Deserialize)]
struct WireBuild {
    #[serde(default)]
    id: String,
    #[serde(default)]
    entrypoint: Option<String>,
    #[serde(rename = "use", default)]
    builder: Option<String>,
    #[serde(rename = "readyState", default)]
    ready_state: Option<String>,
    #[serde(rename = "output", default)]
    outputs: Vec<OutputFile>,
}

impl From<WireBuild> for BuildSummary {
    fn from(wire: WireBuild) -> Self {
        Self {
            id: wire.id,
            entrypoint: wire.entrypoint,
            builder: wire.builder,
            state: wire
                .ready_state
                .as_deref()
                .map(BuildState::from)
                .unwrap_or(BuildState::Initializing),
            outputs: wire.outputs,
        }
    }
}

impl BuildSummary {
    pub fn builder_link(&self) -> Option<String> {
        self.builder.as_deref().and_then(builder_link)
    }
}

/// Deployment list label; failed deployments are flagged.
pub fn deployment_label(url: &str, state: BuildState) -> String {
    match state {
        BuildState::Error => format!("Error -> {url}"),
        _ => url.to_string(),
    }
}
