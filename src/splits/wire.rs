use serde::Deserialize;

use crate::core::wire::{envelope, list_node};

#[derive(Deserialize)]
pub(crate) struct SplitNode {
    #[serde(rename = "@Exchange", default)]
    pub(crate) exchange: Option<String>,
    #[serde(rename = "@Symbol", default)]
    pub(crate) symbol: Option<String>,
    #[serde(rename = "@DateTime", default)]
    pub(crate) date_time: Option<String>,
    #[serde(rename = "@Ratio", default)]
    pub(crate) ratio: Option<String>,
}

list_node!(SplitsNode, "SPLIT" => SplitNode);
envelope!(SplitsResponse, "SPLITS" => SplitsNode);
