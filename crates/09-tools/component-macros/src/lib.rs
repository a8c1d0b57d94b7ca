//! # Component Macros
//!
//! 这个 crate 提供了用于编译时类型发现的过程宏。
//!
//! ## 核心宏
//!
//! - [`discoverable`] - 将类型描述符登记到全局类型目录
//!
//! ## 使用示例
//!
//! ```ignore
//! use component_macros::discoverable;
//!
//! pub trait Repo<T> {}
//! pub struct User;
//!
//! #[discoverable(implements(Repo<User>))]
//! pub struct SqlRepo;
//!
//! impl Repo<User> for SqlRepo {}
//! ```
//!
//! 使用方需要依赖 `infrastructure-common` 和 `ctor`。

use proc_macro::TokenStream;

mod discoverable;
mod utils;

/// 类型发现宏
///
/// 在程序启动时把被标注类型的描述符提交到全局类型目录，
/// 供泛型实现注册扫描。模块取自类型所在 crate，可见性取自 `pub` 修饰。
/// 标注在 trait 上时登记为接口类型，永远不会被当作实现注册。
///
/// # 参数
///
/// - `implements(Path, ...)` - 类型实现的接口，编译期会断言实现确实存在
/// - `abstract` - 标记为抽象类型
///
/// # 示例
///
/// ```ignore
/// #[discoverable(implements(Repo<User>, Repo<Order>))]
/// pub struct SqlRepo;
///
/// #[discoverable(implements(Repo<User>), abstract)]
/// pub struct BaseRepo;
///
/// #[discoverable]
/// pub trait UserRepo: Repo<User> {}
/// ```
#[proc_macro_attribute]
pub fn discoverable(args: TokenStream, input: TokenStream) -> TokenStream {
    discoverable::discoverable_impl(args, input)
}
