//! 代理设置表单模块
//! 工作副本、字段更新、校验与提交状态机

pub mod controller;
pub mod draft;
pub mod field;
pub mod validation;
pub mod view;

pub use controller::{ProxyForm, SubmitOutcome};
pub use draft::ProxyDraft;
pub use field::{FieldPatch, ProxyField};
pub use view::FormView;
