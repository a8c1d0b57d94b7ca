//! # Infrastructure Common
//!
//! 这个 crate 提供了泛型实现注册所需的公共类型。
//!
//! ## 核心类型
//!
//! - [`TypeRef`] - 类型引用（普通类型、泛型定义、封闭泛型实例）
//! - [`TypeDescriptor`] - 候选类型描述符
//! - [`ModuleDescriptor`] - 模块（crate）描述符
//! - [`Lifetime`] - 服务生命周期
//!
//! ## 全局类型目录
//!
//! `#[discoverable]` 宏在程序启动时通过 [`submit_type_descriptor`] 提交类型描述符，
//! 扫描时通过 [`registered_type_descriptors`] 读取快照。

pub mod discovery;
pub mod errors;
pub mod lifecycle;
pub mod metadata;

pub use discovery::*;
pub use errors::*;
pub use lifecycle::*;
pub use metadata::*;

/// 全局类型描述符目录
static GLOBAL_TYPE_DESCRIPTORS: once_cell::sync::Lazy<parking_lot::RwLock<Vec<TypeDescriptor>>> =
    once_cell::sync::Lazy::new(|| parking_lot::RwLock::new(Vec::new()));

/// 提交类型描述符到全局目录
pub fn submit_type_descriptor(descriptor: TypeDescriptor) {
    tracing::trace!(
        "提交类型描述符: {} (模块: {})",
        descriptor.info.name,
        descriptor.module
    );
    GLOBAL_TYPE_DESCRIPTORS.write().push(descriptor);
}

/// 获取全局目录中所有类型描述符的快照，按提交顺序排列
pub fn registered_type_descriptors() -> Vec<TypeDescriptor> {
    GLOBAL_TYPE_DESCRIPTORS.read().clone()
}
