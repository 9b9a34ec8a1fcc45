pub mod assemble;
pub mod classify;
pub mod cluster;
pub mod config;
pub mod detector;
pub mod fuzzy;
pub mod paddle;
pub mod pipeline;
pub mod price;
pub mod types;

pub use assemble::{assemble, is_extra_info, is_tax};
pub use classify::{classify, is_item, LineKind};
pub use cluster::{cluster, cluster_tokens};
pub use config::{ConfigError, ScanConfig};
pub use detector::{MockDetector, OcrError, TextDetector};
pub use pipeline::{ReceiptScanner, ScanError, ScanOutcome};
pub use price::extract_price;
pub use types::{Line, Receipt, ReceiptItem, Token};
