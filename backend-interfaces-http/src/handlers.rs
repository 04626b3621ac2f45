pub mod lookup_handlers;
pub mod ops_handlers;
pub mod report_handlers;
pub mod timeline_handlers;

pub use lookup_handlers::*;
pub use ops_handlers::*;
pub use report_handlers::*;
pub use timeline_handlers::*;
