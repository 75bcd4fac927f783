//! Data models exchanged with the todo service.

mod tag;
mod task;
mod user;

pub use tag::{NewTag, Tag, TagRecord, DEFAULT_TAG_COLOR, TAG_COLORS};
pub use task::{NewTask, Task, TaskEdit, TaskRecord};
pub use user::{Credentials, LoginGrant, LoginResponse, NewUser, SignupResponse};
