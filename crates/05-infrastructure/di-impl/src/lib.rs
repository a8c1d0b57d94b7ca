//! # 泛型实现注册
//!
//! 扫描已加载模块中的类型，把开放泛型接口的所有实现注册到服务注册表。
//!
//! ```ignore
//! use di_impl::{add_generic_implementations, ServiceCollection};
//! use infrastructure_common::{Lifetime, TypeRef};
//!
//! let mut services = ServiceCollection::new();
//! let repo = TypeRef::open::<dyn Repo<()>>();
//!
//! add_generic_implementations!(&mut services, Some(&repo), lifetime = Lifetime::Scoped)?;
//! add_generic_implementations!(&mut services, Some(&repo), configure = |options| {
//!     options.exclude_types(di_abstractions::filters::non_public);
//! })?;
//! ```

pub mod catalog;
pub mod collection;
pub mod discovery;
pub mod registration;
pub mod settings;

pub use catalog::TypeCatalog;
pub use collection::ServiceCollection;
pub use discovery::register_generic_implementations;
pub use registration::GenericRegistration;
pub use settings::RegistrationSettings;

pub use infrastructure_common::ModuleName;

/// 捕获调用处所在的模块
///
/// 在宏展开处求值 `module_path!()`，因此得到的是直接调用者的模块，
/// 而不是本 crate 内部的辅助函数。
#[macro_export]
macro_rules! calling_module {
    () => {
        $crate::ModuleName::from_module_path(::core::module_path!())
    };
}

/// 使用全局类型目录注册开放泛型接口的所有实现
///
/// - `add_generic_implementations!(registry, target)` - 默认选项
/// - `add_generic_implementations!(registry, target, lifetime = ..)` - 指定生命周期
/// - `add_generic_implementations!(registry, target, configure = ..)` - 配置回调
///
/// `registry` 为 `&mut impl ServiceRegistry`，`target` 为 `Option<&TypeRef>`。
#[macro_export]
macro_rules! add_generic_implementations {
    ($registry:expr, $target:expr, lifetime = $lifetime:expr $(,)?) => {
        $crate::GenericRegistration::global($crate::calling_module!())
            .add_generic_implementations($registry, $target, $lifetime)
    };
    ($registry:expr, $target:expr, configure = $configure:expr $(,)?) => {
        $crate::GenericRegistration::global($crate::calling_module!())
            .add_generic_implementations_with($registry, $target, $configure)
    };
    ($registry:expr, $target:expr $(,)?) => {
        $crate::GenericRegistration::global($crate::calling_module!())
            .add_generic_implementations_with($registry, $target, |_| {})
    };
}
