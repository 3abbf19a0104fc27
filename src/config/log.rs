use educe::Educe;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    #[default]
    Plain,
    Json,
}

#[derive(Debug, Serialize, Deserialize, Educe)]
#[educe(Default)]
#[serde(default)]
pub struct Log {
    #[educe(Default(expression = true))]
    pub time: bool,
    pub format: Format,
}
