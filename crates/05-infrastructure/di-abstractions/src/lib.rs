//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义泛型实现注册的核心接口。
//!
//! ## 核心接口
//!
//! - [`ServiceRegistry`] - 服务注册表接口
//! - [`TypeUniverse`] - 类型宇宙（已加载模块及其类型）接口
//! - [`RegistrationOptions`] - 注册选项
//! - [`filters`] - 常用过滤谓词

pub mod filters;
pub mod options;
pub mod registry;
pub mod universe;

pub use options::*;
pub use registry::*;
pub use universe::*;
