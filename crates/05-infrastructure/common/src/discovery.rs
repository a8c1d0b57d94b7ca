//! 类型发现元数据
//!
//! 描述候选类型与其所属模块，供泛型实现扫描使用。
//! 这里的"模块"对应一个 crate，名称取自 `module_path!()` 的首段。

use crate::metadata::{TypeInfo, TypeRef};
use std::fmt;

/// 模块名称
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleName(String);

impl ModuleName {
    /// 创建模块名称
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// 从 `module_path!()` 推导模块名称，例如 `app::repos` -> `app`
    pub fn from_module_path(module_path: &str) -> Self {
        Self::new(module_path.split("::").next().unwrap_or(module_path))
    }

    /// 名称字符串
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for ModuleName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ModuleName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// 候选类型描述符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// 类型信息
    pub info: TypeInfo,
    /// 所属模块
    pub module: ModuleName,
    /// 声明位置的模块路径
    pub module_path: String,
    /// 是否为抽象类型（不可直接实例化）
    pub is_abstract: bool,
    /// 是否为接口（trait object）
    pub is_interface: bool,
    /// 是否公开可见
    pub is_public: bool,
    /// 声明实现的接口列表
    pub interfaces: Vec<TypeRef>,
}

impl TypeDescriptor {
    /// 为类型 `T` 创建描述符，默认公开、具体、非接口
    pub fn of<T: ?Sized + 'static>(module_path: &str) -> Self {
        Self {
            info: TypeInfo::of::<T>(),
            module: ModuleName::from_module_path(module_path),
            module_path: module_path.to_string(),
            is_abstract: false,
            is_interface: false,
            is_public: true,
            interfaces: Vec::new(),
        }
    }

    /// 设置可见性
    pub fn with_visibility(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    /// 设置是否抽象
    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    /// 设置是否为接口
    pub fn with_interface(mut self, is_interface: bool) -> Self {
        self.is_interface = is_interface;
        self
    }

    /// 添加实现的接口
    pub fn implementing(mut self, interface: TypeRef) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// 简短名称
    pub fn short_name(&self) -> &'static str {
        self.info.short_name()
    }

    /// 是否声明了至少一个泛型接口
    pub fn has_generic_interface(&self) -> bool {
        self.interfaces.iter().any(TypeRef::is_generic_type)
    }
}

/// 模块描述符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    /// 模块名称
    pub name: ModuleName,
    /// 模块中声明的类型，按注册顺序排列
    pub types: Vec<TypeDescriptor>,
}

impl ModuleDescriptor {
    /// 创建空模块
    pub fn new(name: impl Into<ModuleName>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
        }
    }

    /// 添加类型
    pub fn with_type(mut self, descriptor: TypeDescriptor) -> Self {
        self.types.push(descriptor);
        self
    }
}
