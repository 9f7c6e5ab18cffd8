//! Read access to list data over the SharePoint REST API.

pub mod fetcher;
pub mod query;
pub mod transport;

pub use fetcher::{ItemsRequest, ListDataFetcher, ListOption, MeasureCatalog, MeasureOption};
pub use query::{escape_odata_literal, item_id_from_page_url, parse_web_url};
pub use transport::{HttpListTransport, ListTransport};
