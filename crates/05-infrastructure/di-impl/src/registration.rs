//! 泛型实现注册入口

use crate::catalog::TypeCatalog;
use crate::discovery::register_generic_implementations;
use di_abstractions::{RegistrationOptions, ServiceRegistry, TypeUniverse};
use infrastructure_common::{DependencyResult, Lifetime, ModuleName, TypeRef};

/// 泛型实现注册器
///
/// 绑定一个类型宇宙和调用模块。调用模块应在公开入口处捕获，
/// 通常通过 [`calling_module!`](crate::calling_module) 或
/// [`add_generic_implementations!`](crate::add_generic_implementations) 完成。
#[derive(Debug, Clone)]
pub struct GenericRegistration<U = TypeCatalog> {
    universe: U,
    calling_module: ModuleName,
}

impl GenericRegistration<TypeCatalog> {
    /// 使用全局类型目录
    pub fn global(calling_module: ModuleName) -> Self {
        Self::new(TypeCatalog::global(), calling_module)
    }
}

impl<U: TypeUniverse> GenericRegistration<U> {
    /// 创建注册器
    pub const fn new(universe: U, calling_module: ModuleName) -> Self {
        Self {
            universe,
            calling_module,
        }
    }

    /// 调用模块
    pub const fn calling_module(&self) -> &ModuleName {
        &self.calling_module
    }

    /// 类型宇宙
    pub const fn universe(&self) -> &U {
        &self.universe
    }

    /// 以默认选项和指定生命周期注册所有实现
    pub fn add_generic_implementations<R>(
        &self,
        registry: &mut R,
        target: Option<&TypeRef>,
        lifetime: Lifetime,
    ) -> DependencyResult<()>
    where
        R: ServiceRegistry + ?Sized,
    {
        let options = RegistrationOptions::new().with_lifetime(lifetime);
        self.register_by_options(registry, target, &options)
    }

    /// 通过配置回调定制选项后注册所有实现
    pub fn add_generic_implementations_with<R, F>(
        &self,
        registry: &mut R,
        target: Option<&TypeRef>,
        configure: F,
    ) -> DependencyResult<()>
    where
        R: ServiceRegistry + ?Sized,
        F: FnOnce(&mut RegistrationOptions),
    {
        let mut options = RegistrationOptions::new();
        configure(&mut options);
        self.register_by_options(registry, target, &options)
    }

    /// 以单例生命周期注册所有实现
    pub fn add_singleton_generic_implementations<R>(
        &self,
        registry: &mut R,
        target: Option<&TypeRef>,
    ) -> DependencyResult<()>
    where
        R: ServiceRegistry + ?Sized,
    {
        self.add_generic_implementations(registry, target, Lifetime::Singleton)
    }

    /// 以作用域生命周期注册所有实现
    pub fn add_scoped_generic_implementations<R>(
        &self,
        registry: &mut R,
        target: Option<&TypeRef>,
    ) -> DependencyResult<()>
    where
        R: ServiceRegistry + ?Sized,
    {
        self.add_generic_implementations(registry, target, Lifetime::Scoped)
    }

    /// 以瞬时生命周期注册所有实现
    pub fn add_transient_generic_implementations<R>(
        &self,
        registry: &mut R,
        target: Option<&TypeRef>,
    ) -> DependencyResult<()>
    where
        R: ServiceRegistry + ?Sized,
    {
        self.add_generic_implementations(registry, target, Lifetime::Transient)
    }

    fn register_by_options<R>(
        &self,
        registry: &mut R,
        target: Option<&TypeRef>,
        options: &RegistrationOptions,
    ) -> DependencyResult<()>
    where
        R: ServiceRegistry + ?Sized,
    {
        register_generic_implementations(
            registry,
            &self.universe,
            &self.calling_module,
            target,
            options,
        )
    }
}
