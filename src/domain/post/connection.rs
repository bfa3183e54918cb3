use crate::domain::post::entity::Post;
use serde::{Deserialize, Serialize};

/// Page boundaries reported by the content backend for one fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PostConnection {
    pub nodes: Vec<Post>,
    pub page_info: PageInfo,
}

impl PostConnection {
    pub fn new(nodes: Vec<Post>, page_info: PageInfo) -> Self {
        Self { nodes, page_info }
    }
}
