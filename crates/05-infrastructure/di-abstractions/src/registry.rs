//! 服务注册表抽象接口

use infrastructure_common::{DependencyResult, Lifetime, TypeInfo, TypeRef};
use std::fmt;

/// 服务描述符
///
/// 一条注册记录：(服务类型, 实现类型, 生命周期)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceDescriptor {
    /// 服务类型（封闭泛型接口）
    pub service_type: TypeRef,
    /// 实现类型
    pub implementation_type: TypeInfo,
    /// 生命周期
    pub lifetime: Lifetime,
}

impl ServiceDescriptor {
    /// 创建新的服务描述符
    pub const fn new(service_type: TypeRef, implementation_type: TypeInfo, lifetime: Lifetime) -> Self {
        Self {
            service_type,
            implementation_type,
            lifetime,
        }
    }

    /// 以类型参数创建服务描述符
    pub fn of<S, I>(lifetime: Lifetime) -> Self
    where
        S: ?Sized + 'static,
        I: 'static,
    {
        Self::new(TypeRef::of::<S>(), TypeInfo::of::<I>(), lifetime)
    }
}

impl fmt::Display for ServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({})",
            self.service_type, self.implementation_type, self.lifetime
        )
    }
}

/// 服务注册表 trait
///
/// 依赖注入容器的服务映射。重复注册的处理方式由实现决定。
pub trait ServiceRegistry {
    /// 插入一条服务描述符
    fn insert(&mut self, descriptor: ServiceDescriptor) -> DependencyResult<()>;
}

/// 以 `Vec` 作为只追加的注册表
///
/// `Vec` 自带同名的 `insert(index, element)` 方法，持有具体 `Vec` 时
/// 需写成 `ServiceRegistry::insert(&mut registry, descriptor)`。
impl ServiceRegistry for Vec<ServiceDescriptor> {
    fn insert(&mut self, descriptor: ServiceDescriptor) -> DependencyResult<()> {
        self.push(descriptor);
        Ok(())
    }
}

impl<R: ServiceRegistry + ?Sized> ServiceRegistry for &mut R {
    fn insert(&mut self, descriptor: ServiceDescriptor) -> DependencyResult<()> {
        (**self).insert(descriptor)
    }
}

impl<R: ServiceRegistry + ?Sized> ServiceRegistry for Box<R> {
    fn insert(&mut self, descriptor: ServiceDescriptor) -> DependencyResult<()> {
        (**self).insert(descriptor)
    }
}
