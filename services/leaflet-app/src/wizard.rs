//! Wizard steps and their transitions.
//!
//! ```text
//! introduction -> wms_setup -> custom_wms -> whats_next
//! ```
//!
//! Only leaving `wms_setup` forward is guarded: the entered WMS must connect.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use wms_common::{ImageFormat, WmsVersion};

use crate::connector::WmsConnector;
use crate::error::{AppError, VALIDATION_MESSAGE};
use crate::params::FormParams;

/// Sample service offered by the "Use sample WMS" button.
pub const WMS_DEFAULT: &str = "https://service.pdok.nl/wandelnet/regionale-wandelnetwerken/wms/v1_0?version=1.3.0&request=getcapabilities&service=wms";

const INTRODUCTION_TEXT: &str = include_str!("../assets/introduction.md");
const WMS_SETUP_TEXT: &str = include_str!("../assets/wms_setup.md");
const CUSTOM_WMS_TEXT: &str = include_str!("../assets/custom_wms.md");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Introduction,
    WmsSetup,
    CustomWms,
    WhatsNext,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::Introduction,
        Step::WmsSetup,
        Step::CustomWms,
        Step::WhatsNext,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Step::Introduction => "introduction",
            Step::WmsSetup => "wms_setup",
            Step::CustomWms => "custom_wms",
            Step::WhatsNext => "whats_next",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Introduction => "Leaflet",
            Step::WmsSetup => "WMS set-up",
            Step::CustomWms => "Custom WMS",
            Step::WhatsNext => "What's next?",
        }
    }

    pub fn next(&self) -> Option<Step> {
        match self {
            Step::Introduction => Some(Step::WmsSetup),
            Step::WmsSetup => Some(Step::CustomWms),
            Step::CustomWms => Some(Step::WhatsNext),
            Step::WhatsNext => None,
        }
    }

    pub fn previous(&self) -> Option<Step> {
        match self {
            Step::Introduction => None,
            Step::WmsSetup => Some(Step::Introduction),
            Step::CustomWms => Some(Step::WmsSetup),
            Step::WhatsNext => Some(Step::CustomWms),
        }
    }

    /// Views shown next to the step's form.
    pub fn views(&self) -> &'static [&'static str] {
        match self {
            Step::Introduction => &["leaflet_introduction"],
            Step::WmsSetup => &["show_wms_details"],
            Step::CustomWms => &["custom_wms_map"],
            Step::WhatsNext => &["whats_next"],
        }
    }

    /// Custom caption for the "next" button.
    pub fn next_label(&self) -> Option<&'static str> {
        match self {
            Step::Introduction => Some("WMS set-up"),
            _ => None,
        }
    }

    fn fields(&self) -> Vec<Field> {
        match self {
            Step::Introduction => vec![Field::Text {
                markdown: INTRODUCTION_TEXT,
            }],
            Step::WmsSetup => vec![
                Field::Text {
                    markdown: WMS_SETUP_TEXT,
                },
                Field::SetParamsButton {
                    label: "Use sample WMS",
                    method: "set_sample_wms",
                    endpoint: "/api/buttons/set_sample_wms",
                },
                Field::TextField {
                    name: "wms_details.wms_input",
                    label: "WMS url",
                    description: "Please enter the WMS url here",
                },
                Field::OptionField {
                    name: "wms_details.wms_version",
                    label: "WMS version",
                    options: WmsVersion::ALL.iter().map(|v| v.to_string()).collect(),
                    default: WmsVersion::default().to_string(),
                    description: "Version of the WMS. Most services support 1.3.0.",
                },
                Field::OptionField {
                    name: "wms_details.fmt_format",
                    label: "Format",
                    options: ImageFormat::ALL.iter().map(|f| f.to_string()).collect(),
                    default: ImageFormat::default().to_string(),
                    description: "Image format of the map tiles. Services usually offer more, only png and jpeg are available here. Default is png.",
                },
            ],
            Step::CustomWms => vec![
                Field::Text {
                    markdown: CUSTOM_WMS_TEXT,
                },
                Field::MultiSelectField {
                    name: "wms_map.layer_options",
                    label: "Display layers",
                    options_endpoint: "/api/options/layer_options",
                },
            ],
            Step::WhatsNext => Vec::new(),
        }
    }

    pub fn schema(&self) -> StepSchema {
        StepSchema {
            id: self.id(),
            title: self.title(),
            views: self.views(),
            next_label: self.next_label(),
            fields: self.fields(),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Step {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Step::ALL
            .into_iter()
            .find(|step| step.id() == s)
            .ok_or_else(|| AppError::UnknownStep(s.to_string()))
    }
}

/// Client-facing description of one step.
#[derive(Debug, Clone, Serialize)]
pub struct StepSchema {
    pub id: &'static str,
    pub title: &'static str,
    pub views: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_label: Option<&'static str>,
    pub fields: Vec<Field>,
}

/// A form element. `name` is the dotted path into [`FormParams`].
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Field {
    Text {
        markdown: &'static str,
    },
    TextField {
        name: &'static str,
        label: &'static str,
        description: &'static str,
    },
    OptionField {
        name: &'static str,
        label: &'static str,
        options: Vec<String>,
        default: String,
        description: &'static str,
    },
    MultiSelectField {
        name: &'static str,
        label: &'static str,
        options_endpoint: &'static str,
    },
    SetParamsButton {
        label: &'static str,
        method: &'static str,
        endpoint: &'static str,
    },
}

/// Schema of the whole wizard, in step order.
pub fn schema() -> Vec<StepSchema> {
    Step::ALL.iter().map(Step::schema).collect()
}

/// Move forward from `from`.
pub async fn advance(
    connector: &WmsConnector,
    from: Step,
    params: &FormParams,
) -> Result<Step, AppError> {
    let to = from.next().ok_or_else(|| AppError::InvalidTransition {
        step: from.id().to_string(),
        direction: "forward",
    })?;

    if from == Step::WmsSetup {
        let connected = match params.wms_details.wms_url() {
            Some(url) => connector
                .connect(url, params.wms_details.wms_version)
                .await
                .is_connected(),
            None => false,
        };
        if !connected {
            debug!(step = %from, "Transition blocked by WMS validation");
            return Err(AppError::user(VALIDATION_MESSAGE));
        }
    }

    info!(from = %from, to = %to, "Wizard advanced");
    Ok(to)
}

/// Move back from `from`. Never validates.
pub fn retreat(from: Step) -> Result<Step, AppError> {
    from.previous().ok_or_else(|| AppError::InvalidTransition {
        step: from.id().to_string(),
        direction: "back",
    })
}

/// Partial form update returned by a button.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamsPatch {
    pub wms_details: WmsDetailsPatch,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WmsDetailsPatch {
    pub wms_input: String,
}

impl ParamsPatch {
    pub fn apply(&self, params: &mut FormParams) {
        params.wms_details.wms_input = Some(self.wms_details.wms_input.clone());
    }
}

/// Fill in the sample service url.
pub fn set_sample_wms() -> ParamsPatch {
    ParamsPatch {
        wms_details: WmsDetailsPatch {
            wms_input: WMS_DEFAULT.to_string(),
        },
    }
}
