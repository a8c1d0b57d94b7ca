//! 元数据定义
//!
//! 提供类型标识、泛型定义以及类型引用的元数据信息。
//!
//! Rust 没有运行时的开放泛型类型，这里以 `std::any::type_name` 为基础推导：
//! `dyn app::Repo<app::User>` 的泛型定义为 `app::Repo`，参数个数为 1。
//! 同一次编译内 `type_name` 的输出是稳定的，足以用于定义之间的比较。

use std::any::TypeId;
use std::fmt;

/// 类型信息
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// 类型ID
    pub id: TypeId,
    /// 完整类型名称
    pub name: &'static str,
}

impl TypeInfo {
    /// 从类型获取类型信息
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// 获取简短的类型名称（不包含模块路径和泛型参数）
    pub fn short_name(&self) -> &'static str {
        short_name(self.name)
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// 泛型定义（未绑定类型参数的泛型接口）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenericDefinition {
    /// 不含类型参数的路径，例如 `app::Repo`
    pub path: &'static str,
    /// 类型参数个数
    pub arity: usize,
}

impl GenericDefinition {
    /// 从完整类型名称解析泛型定义
    ///
    /// 非泛型名称返回 `None`。
    pub fn parse(type_name: &'static str) -> Option<Self> {
        let open = type_name.find('<')?;
        let mut angle = 0usize;
        let mut nested = 0usize;
        let mut arity = 1usize;
        let mut prev = '\0';
        let mut closed = false;

        for ch in type_name[open..].chars() {
            match ch {
                '<' => angle += 1,
                // `->` 属于函数指针类型，不是泛型参数列表的结束
                '>' if prev != '-' => {
                    angle = angle.checked_sub(1)?;
                    if angle == 0 {
                        closed = true;
                        break;
                    }
                }
                '(' | '[' => nested += 1,
                ')' | ']' => nested = nested.saturating_sub(1),
                ',' if angle == 1 && nested == 0 => arity += 1,
                _ => {}
            }
            prev = ch;
        }

        if !closed {
            return None;
        }

        let path = type_name[..open].trim_end();
        let path = path.strip_prefix("dyn ").unwrap_or(path);
        if path.is_empty() {
            return None;
        }

        Some(Self { path, arity })
    }

    /// 获取简短名称
    pub fn short_name(&self) -> &'static str {
        short_name(self.path)
    }
}

impl fmt::Display for GenericDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = vec!["_"; self.arity].join(", ");
        write!(f, "{}<{}>", self.path, params)
    }
}

/// 类型引用
///
/// 区分普通类型、未绑定的泛型定义以及封闭的泛型实例。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// 非泛型类型
    Plain(TypeInfo),
    /// 泛型定义，例如 `Repo<_>`
    GenericDefinition(GenericDefinition),
    /// 封闭泛型实例，例如 `Repo<User>`
    Closed {
        /// 实例的类型信息
        info: TypeInfo,
        /// 所属的泛型定义
        definition: GenericDefinition,
    },
}

impl TypeRef {
    /// 引用一个具体类型；泛型实例会被识别为 [`TypeRef::Closed`]
    pub fn of<T: ?Sized + 'static>() -> Self {
        let info = TypeInfo::of::<T>();
        match GenericDefinition::parse(info.name) {
            Some(definition) => Self::Closed { info, definition },
            None => Self::Plain(info),
        }
    }

    /// 引用 `T` 的泛型定义，`T` 的类型参数会被丢弃
    ///
    /// `TypeRef::open::<dyn Repo<()>>()` 等价于 `Repo<_>`。
    /// `T` 不是泛型时返回 [`TypeRef::Plain`]。
    pub fn open<T: ?Sized + 'static>() -> Self {
        let info = TypeInfo::of::<T>();
        match GenericDefinition::parse(info.name) {
            Some(definition) => Self::GenericDefinition(definition),
            None => Self::Plain(info),
        }
    }

    /// 是否为泛型（定义或实例）
    pub const fn is_generic_type(&self) -> bool {
        !matches!(self, Self::Plain(_))
    }

    /// 是否为未绑定的泛型定义
    pub const fn is_generic_type_definition(&self) -> bool {
        matches!(self, Self::GenericDefinition(_))
    }

    /// 获取泛型定义
    pub const fn generic_type_definition(&self) -> Option<GenericDefinition> {
        match self {
            Self::Plain(_) => None,
            Self::GenericDefinition(definition) | Self::Closed { definition, .. } => {
                Some(*definition)
            }
        }
    }

    /// 获取类型ID；泛型定义没有类型ID
    pub const fn type_id(&self) -> Option<TypeId> {
        match self {
            Self::Plain(info) | Self::Closed { info, .. } => Some(info.id),
            Self::GenericDefinition(_) => None,
        }
    }

    /// 类型名称
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Plain(info) | Self::Closed { info, .. } => info.name,
            Self::GenericDefinition(definition) => definition.path,
        }
    }
}

impl From<GenericDefinition> for TypeRef {
    fn from(definition: GenericDefinition) -> Self {
        Self::GenericDefinition(definition)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(info) | Self::Closed { info, .. } => write!(f, "{info}"),
            Self::GenericDefinition(definition) => write!(f, "{definition}"),
        }
    }
}

fn short_name(name: &'static str) -> &'static str {
    let base = name.split('<').next().unwrap_or(name).trim_end();
    let base = base.strip_prefix("dyn ").unwrap_or(base);
    base.rsplit("::").next().unwrap_or(base)
}
