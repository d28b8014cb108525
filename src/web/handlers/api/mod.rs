//! API 处理器

pub mod bills;
pub mod cache;
pub mod committees;
pub mod health;
pub mod interpellations;
pub mod legislators;

pub use bills::*;
pub use cache::*;
pub use committees::*;
pub use health::*;
pub use interpellations::*;
pub use legislators::*;

/// 查询参数，保持原始顺序转发给上游
pub type QueryPairs = Vec<(String, String)>;
