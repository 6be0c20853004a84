//! XML envelope plumbing shared by every operation.
//!
//! Every data response is a `<RESPONSE Message="..." ...>` root holding at most one data
//! node. Attributes are deserialized as `@Name` fields and kept as raw strings here;
//! typed parsing happens when mapping into the public models.

use serde::Deserialize;

/// A parsed response root: the server message plus the operation's data node, if any.
pub(crate) trait Envelope {
    type Node;

    fn message(&self) -> Option<&str>;

    fn into_node(self) -> Option<Self::Node>;
}

/// Declares a `<RESPONSE>` root whose data node is the child element `$tag`.
macro_rules! envelope {
    ($name:ident, $tag:literal => $node:ty) => {
        #[derive(serde::Deserialize)]
        pub(crate) struct $name {
            #[serde(rename = "@Message", default)]
            pub(crate) message: Option<String>,
            #[serde(rename = $tag, default)]
            pub(crate) node: Option<$node>,
        }

        impl $crate::core::wire::Envelope for $name {
            type Node = $node;

            fn message(&self) -> Option<&str> {
                self.message.as_deref()
            }

            fn into_node(self) -> Option<Self::Node> {
                self.node
            }
        }
    };
}

/// Declares a container node holding zero or more `$item` children.
macro_rules! list_node {
    ($name:ident, $item:literal => $ty:ty) => {
        #[derive(serde::Deserialize, Default)]
        pub(crate) struct $name {
            #[serde(rename = $item, default)]
            pub(crate) items: Vec<$ty>,
        }
    };
}

pub(crate) use envelope;
pub(crate) use list_node;

/* --- Login --- */

#[derive(Deserialize)]
pub(crate) struct LoginResponse {
    #[serde(rename = "@Message", default)]
    pub(crate) message: Option<String>,
    #[serde(rename = "@Token", default)]
    pub(crate) token: Option<String>,
}

/* --- QUOTE (shared by quote lists, history and top lists) --- */

#[derive(Deserialize, Default)]
pub(crate) struct QuoteNode {
    #[serde(rename = "@Symbol", default)]
    pub(crate) symbol: Option<String>,
    #[serde(rename = "@Description", default)]
    pub(crate) description: Option<String>,
    #[serde(rename = "@Name", default)]
    pub(crate) name: Option<String>,
    #[serde(rename = "@DateTime", default)]
    pub(crate) date_time: Option<String>,
    #[serde(rename = "@Open", default)]
    pub(crate) open: Option<String>,
    #[serde(rename = "@High", default)]
    pub(crate) high: Option<String>,
    #[serde(rename = "@Low", default)]
    pub(crate) low: Option<String>,
    #[serde(rename = "@Close", default)]
    pub(crate) close: Option<String>,
    #[serde(rename = "@Volume", default)]
    pub(crate) volume: Option<String>,
    #[serde(rename = "@OpenInterest", default)]
    pub(crate) open_interest: Option<String>,
    #[serde(rename = "@Previous", default)]
    pub(crate) previous: Option<String>,
    #[serde(rename = "@Change", default)]
    pub(crate) change: Option<String>,
    #[serde(rename = "@Bid", default)]
    pub(crate) bid: Option<String>,
    #[serde(rename = "@Ask", default)]
    pub(crate) ask: Option<String>,
    #[serde(rename = "@PreviousClose", default)]
    pub(crate) previous_close: Option<String>,
    #[serde(rename = "@NextOpen", default)]
    pub(crate) next_open: Option<String>,
    #[serde(rename = "@Modified", default)]
    pub(crate) modified: Option<String>,
}

/* --- QUOTE2 (compact quote lists) --- */

#[derive(Deserialize, Default)]
pub(crate) struct CompactQuoteNode {
    #[serde(rename = "@s", default)]
    pub(crate) s: Option<String>,
    #[serde(rename = "@d", default)]
    pub(crate) d: Option<String>,
    #[serde(rename = "@o", default)]
    pub(crate) o: Option<String>,
    #[serde(rename = "@h", default)]
    pub(crate) h: Option<String>,
    #[serde(rename = "@l", default)]
    pub(crate) l: Option<String>,
    #[serde(rename = "@c", default)]
    pub(crate) c: Option<String>,
    #[serde(rename = "@v", default)]
    pub(crate) v: Option<String>,
    #[serde(rename = "@i", default)]
    pub(crate) i: Option<String>,
}

list_node!(QuotesNode, "QUOTE" => QuoteNode);
list_node!(CompactQuotesNode, "QUOTE2" => CompactQuoteNode);

envelope!(QuoteResponse, "QUOTE" => QuoteNode);
envelope!(QuotesResponse, "QUOTES" => QuotesNode);
envelope!(CompactQuotesResponse, "QUOTES2" => CompactQuotesNode);
