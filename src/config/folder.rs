use educe::Educe;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Educe)]
#[educe(Default)]
#[serde(default)]
pub struct Folder {
    // Initial root, replaced at runtime through `/api/set-folder`.
    #[educe(Default(expression = "./videos".into()))]
    pub root: String,
}
