// Domain entities

pub mod call_event;
pub mod course;
pub mod model;
pub mod student;
pub mod timeline;

pub use call_event::*;
pub use course::*;
pub use model::*;
pub use student::*;
pub use timeline::*;
