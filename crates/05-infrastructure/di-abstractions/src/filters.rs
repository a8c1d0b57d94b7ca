//! 常用过滤谓词
//!
//! 既可作为 [`RegistrationOptions`](crate::RegistrationOptions) 的排除条件，
//! 也用于扫描时的结构过滤。

use infrastructure_common::{ModuleDescriptor, TypeDescriptor};

/// 公开类型返回 true；作为排除条件时会排除所有公开类型
pub fn is_public(descriptor: &TypeDescriptor) -> bool {
    descriptor.is_public
}

/// 非公开类型返回 true；作为排除条件时只保留公开类型
pub fn non_public(descriptor: &TypeDescriptor) -> bool {
    !descriptor.is_public
}

/// 非抽象类型
pub fn non_abstract(descriptor: &TypeDescriptor) -> bool {
    !descriptor.is_abstract
}

/// 非接口类型
pub fn non_interface(descriptor: &TypeDescriptor) -> bool {
    !descriptor.is_interface
}

/// 声明了至少一个泛型接口（开放或封闭）
pub fn implements_generic_interface(descriptor: &TypeDescriptor) -> bool {
    descriptor.has_generic_interface()
}

/// 候选实现：具体、非接口、且声明了泛型接口
pub fn is_candidate_implementation(descriptor: &TypeDescriptor) -> bool {
    non_abstract(descriptor) && non_interface(descriptor) && implements_generic_interface(descriptor)
}

/// 类型完整名称以指定前缀开头
pub fn type_name_starts_with(
    prefix: impl Into<String>,
) -> impl Fn(&TypeDescriptor) -> bool + Send + Sync + 'static {
    let prefix = prefix.into();
    move |descriptor| descriptor.info.name.starts_with(prefix.as_str())
}

/// 模块名称等于指定名称
pub fn module_named(
    name: impl Into<String>,
) -> impl Fn(&ModuleDescriptor) -> bool + Send + Sync + 'static {
    let name = name.into();
    move |module| module.name.as_str() == name
}
